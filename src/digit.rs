use yew::prelude::*;

/// Segment endpoints in glyph coordinates, order A B C D E F G (top,
/// upper-right, lower-right, bottom, lower-left, upper-left, middle).
const SEGMENT_LINES: [((f32, f32), (f32, f32)); 7] = [
    ((-0.4, -0.9), (0.4, -0.9)),
    ((0.4, -0.9), (0.4, 0.0)),
    ((0.4, 0.0), (0.4, 0.9)),
    ((-0.4, 0.9), (0.4, 0.9)),
    ((-0.4, 0.0), (-0.4, 0.9)),
    ((-0.4, -0.9), (-0.4, 0.0)),
    ((-0.4, 0.0), (0.4, 0.0)),
];

/// Lit segments per digit, bit i = segment i of SEGMENT_LINES. Calculator
/// glyphs: 6 and 9 are each other's half-turn image, which is what makes
/// the rotation trick read on screen.
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b1111111, // 8
    0b1101111, // 9
];

const DEFAULT_DIGIT_COLOR: &str = "#000";

const GLYPH_WIDTH_COEFF: f32 = 0.55;
const STROKE_WIDTH: f32 = 0.2;

#[derive(Properties, PartialEq)]
pub(crate) struct DigitProps {
    pub digit: u8,
    pub size: f32,
    /// Offset of the glyph center from the parent origin.
    #[prop_or_default]
    pub left: f32,
    #[prop_or_default]
    pub top: f32,
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

/// One seven-segment digit glyph, centered on (left, top) relative to the
/// parent origin.
#[function_component(Digit)]
pub(crate) fn digit(props: &DigitProps) -> Html {
    let size = props.size;
    let width = size * GLYPH_WIDTH_COEFF;
    let height = size;
    let color = props
        .color
        .clone()
        .unwrap_or_else(|| DEFAULT_DIGIT_COLOR.into());

    let mask = DIGIT_SEGMENTS
        .get(props.digit as usize)
        .copied()
        .unwrap_or(0);
    let segments = SEGMENT_LINES
        .iter()
        .enumerate()
        .filter(|(index, _)| mask & (1 << index) != 0)
        .map(|(index, ((x1, y1), (x2, y2)))| {
            html! {
                <line
                    key={index.to_string()}
                    x1={x1.to_string()} y1={y1.to_string()}
                    x2={x2.to_string()} y2={y2.to_string()}
                    stroke={color.clone()}
                    stroke-width={STROKE_WIDTH.to_string()}
                    stroke-linecap="round"
                />
            }
        });

    let style = format!(
        "position:absolute;left:{}px;top:{}px;",
        props.left - width / 2.0,
        props.top - height / 2.0,
    );
    html! {
        <svg
            style={style}
            width={width.to_string()}
            height={height.to_string()}
            viewBox="-0.55 -1.0 1.1 2.0"
        >
            { for segments }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Segment index after a half turn: top <-> bottom, upper-right <->
    // lower-left, lower-right <-> upper-left, middle fixed.
    fn rotated_mask(mask: u8) -> u8 {
        const MAP: [usize; 7] = [3, 4, 5, 0, 1, 2, 6];
        let mut out = 0;
        for (index, &target) in MAP.iter().enumerate() {
            if mask & (1 << index) != 0 {
                out |= 1 << target;
            }
        }
        out
    }

    #[test]
    fn six_and_nine_are_half_turn_images() {
        assert_eq!(rotated_mask(DIGIT_SEGMENTS[6]), DIGIT_SEGMENTS[9]);
        assert_eq!(rotated_mask(DIGIT_SEGMENTS[9]), DIGIT_SEGMENTS[6]);
    }

    #[test]
    fn self_symmetric_digits_survive_the_turn() {
        for digit in [0usize, 2, 5, 8] {
            assert_eq!(
                rotated_mask(DIGIT_SEGMENTS[digit]),
                DIGIT_SEGMENTS[digit],
                "digit {digit}"
            );
        }
    }
}
