use yew::prelude::*;

use rotoku_core::geometry::{
    background_kind, center_digit_offset, center_digits_coeff, corner_digit_offset,
    wedge_points_attr, BackgroundKind, CORNER_DIGIT_COEFF, MAIN_DIGIT_COEFF,
};
use rotoku_core::{CellColor, CellState, ProcessedRotationState, RotatableDigit};

use crate::app::ManagerHandle;
use crate::digit::Digit;

/// Color that flags a digit as rotation-prone: it will flip with the field.
pub(crate) const ROTATABLE_DIGIT_COLOR: &str = "#00f";
/// Color that flags a sticky digit: exempt from the rotation transform.
pub(crate) const STICKY_DIGIT_COLOR: &str = "#0c0";

const PRIMARY_SELECTION_COLOR: &str = "#36f";
const SECONDARY_SELECTION_COLOR: &str = "#aaf";

#[derive(Properties, PartialEq)]
pub(crate) struct CellBackgroundProps {
    pub colors: Vec<CellColor>,
    pub size: f32,
}

/// Cell background. Exactly one color fills the cell solid; with two or more
/// the extras render as angular wedge slices and there is no solid fill.
#[function_component(CellBackground)]
pub(crate) fn cell_background(props: &CellBackgroundProps) -> Html {
    let colors = &props.colors;
    let size = props.size;
    match background_kind(colors.len()) {
        BackgroundKind::None => Html::default(),
        BackgroundKind::Solid => {
            let solid = colors[0].css();
            html! {
                <div style={format!(
                    "position:absolute;width:100%;height:100%;background:{solid};"
                )} />
            }
        }
        BackgroundKind::Wedges => {
            let polygons = colors.iter().enumerate().skip(1).map(|(index, color)| {
                html! {
                    <polygon
                        key={index.to_string()}
                        points={wedge_points_attr(index, colors.len(), size)}
                        fill={color.css()}
                    />
                }
            });
            // The svg viewport clips the overshooting wedge rims.
            html! {
                <svg
                    style="position:absolute;left:0;top:0;"
                    width={size.to_string()}
                    height={size.to_string()}
                >
                    { for polygons }
                </svg>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CellSelectionProps {
    pub size: f32,
    #[prop_or_default]
    pub secondary: bool,
}

/// Selection highlight. The last-selected cell gets the primary frame,
/// every other selected cell the lighter secondary one.
#[function_component(CellSelection)]
pub(crate) fn cell_selection(props: &CellSelectionProps) -> Html {
    let color = if props.secondary {
        SECONDARY_SELECTION_COLOR
    } else {
        PRIMARY_SELECTION_COLOR
    };
    let width = props.size * 0.1;
    html! {
        <div style={format!(
            "position:absolute;width:100%;height:100%;box-sizing:border-box;\
             border:{width}px solid {color};"
        )} />
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CellDigitsProps {
    pub manager: ManagerHandle,
    pub cell: CellState,
    pub size: f32,
    pub processed: ProcessedRotationState,
    /// Render everything in the default digit color instead of the
    /// sticky/rotatable flag colors.
    #[prop_or_default]
    pub main_color: bool,
}

/// All digit content of one cell: the main digit(s) at the center, corner
/// candidates in the fixed anchor slots, and center candidates on a spaced
/// line. Candidate positions run through the type manager so they glide to
/// their upside-down sort slots as the field turns.
#[function_component(CellDigits)]
pub(crate) fn cell_digits(props: &CellDigitsProps) -> Html {
    let manager = &props.manager;
    let cell = &props.cell;
    let size = props.size;
    let processed = props.processed;

    let data_color = |data: &RotatableDigit| -> Option<AttrValue> {
        if props.main_color {
            None
        } else if data.sticky {
            Some(STICKY_DIGIT_COLOR.into())
        } else {
            Some(ROTATABLE_DIGIT_COLOR.into())
        }
    };

    let initial = cell.initial_digit.map(|data| {
        html! {
            <Digit key="initial" digit={data.digit} size={size * MAIN_DIGIT_COEFF} />
        }
    });

    let users = cell.users_digit.map(|data| {
        html! {
            <Digit
                key="users"
                digit={data.digit}
                size={size * MAIN_DIGIT_COEFF}
                color={data_color(&data)}
            />
        }
    });

    let center_count = cell.center_digits.len();
    let center_size = size * center_digits_coeff(center_count);
    let center_digits = cell.center_digits.iter().enumerate().filter_map(|(index, data)| {
        let base = center_digit_offset(index, center_count, size);
        let (left, top) = manager.process_cell_data_position(
            base,
            &cell.center_digits,
            index,
            &|slot| Some(center_digit_offset(slot, center_count, size)),
            &processed,
        )?;
        Some(html! {
            <Digit
                key={format!("center-{}", manager.cell_data_hash(data))}
                digit={data.digit}
                size={center_size}
                left={left}
                top={top}
                color={data_color(data)}
            />
        })
    });

    // Corner candidates past the last anchor slot have no base position and
    // drop out here.
    let corner_digits = cell.corner_digits.iter().enumerate().filter_map(|(index, data)| {
        let base = corner_digit_offset(index, size)?;
        let (left, top) = manager.process_cell_data_position(
            base,
            &cell.corner_digits,
            index,
            &|slot| corner_digit_offset(slot, size),
            &processed,
        )?;
        Some(html! {
            <Digit
                key={format!("corner-{}", manager.cell_data_hash(data))}
                digit={data.digit}
                size={size * CORNER_DIGIT_COEFF}
                left={left}
                top={top}
                color={data_color(data)}
            />
        })
    });

    let center = size / 2.0;
    html! {
        <div style={format!("position:absolute;left:{center}px;top:{center}px;width:0;height:0;")}>
            { initial }
            { users }
            { for center_digits }
            { for corner_digits }
        </div>
    }
}
