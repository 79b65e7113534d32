use std::cmp::Ordering;

use crate::angle::{animation_coeff, is_start_angle, is_upside_down_angle};
use crate::cell::RotatableDigit;
use crate::state::{ProcessedRotationState, RotationState};
use crate::type_manager::{cell_data_sort_indexes, SudokuTypeManager};

/// Only 6 and 9 read as another digit after a half turn.
pub fn is_rotatable_digit(digit: u8) -> bool {
    digit == 6 || digit == 9
}

fn is_rotatable_cell_data(data: &RotatableDigit) -> bool {
    !data.sticky && is_rotatable_digit(data.digit)
}

/// The digit as seen from the given orientation: 6 and 9 swap (15 - d) when
/// upside-down and not sticky, everything else is a fixed point.
pub fn toggle_digit(data: &RotatableDigit, upside_down: bool) -> u8 {
    if upside_down && is_rotatable_cell_data(data) {
        15 - data.digit
    } else {
        data.digit
    }
}

fn upside_down_order(a: &RotatableDigit, b: &RotatableDigit) -> Ordering {
    toggle_digit(a, true)
        .cmp(&toggle_digit(b, true))
        .then_with(|| a.sticky.cmp(&b.sticky))
}

/// The 180-degree-rotation digit semantics: 6/9 swapping, sticky exemption,
/// animated candidate reordering, inverted arrows while upside-down, and the
/// tilted start angle that gates interaction until the opening animation.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotatableDigitTypeManager;

impl SudokuTypeManager for RotatableDigitTypeManager {
    fn are_same_cell_data(&self, a: &RotatableDigit, b: &RotatableDigit) -> bool {
        // Stickiness only matters for digits the rotation can change.
        a.digit == b.digit && (a.sticky == b.sticky || !is_rotatable_digit(a.digit))
    }

    fn compare_cell_data(
        &self,
        a: &RotatableDigit,
        b: &RotatableDigit,
        upside_down: bool,
    ) -> Ordering {
        toggle_digit(a, upside_down)
            .cmp(&toggle_digit(b, upside_down))
            .then_with(|| a.sticky.cmp(&b.sticky))
    }

    fn cell_data_hash(&self, data: &RotatableDigit) -> String {
        format!("{}-{}", data.digit, is_rotatable_cell_data(data))
    }

    fn create_cell_data_by_display_digit(
        &self,
        digit: u8,
        rotation: &RotationState,
    ) -> RotatableDigit {
        RotatableDigit::new(digit, rotation.sticky_mode)
    }

    fn create_cell_data_by_typed_digit(
        &self,
        digit: u8,
        rotation: &RotationState,
    ) -> RotatableDigit {
        let naive = RotatableDigit::new(digit, rotation.sticky_mode);
        RotatableDigit {
            digit: toggle_digit(&naive, is_upside_down_angle(rotation.angle)),
            ..naive
        }
    }

    fn process_cell_data_position(
        &self,
        base: (f32, f32),
        data_set: &[RotatableDigit],
        data_index: usize,
        position_of: &dyn Fn(usize) -> Option<(f32, f32)>,
        state: &ProcessedRotationState,
    ) -> Option<(f32, f32)> {
        let upside_down_indexes = cell_data_sort_indexes(data_set, upside_down_order);
        let upside_down_position = position_of(*upside_down_indexes.get(data_index)?)?;

        // 1.0 at upright, 0.0 at exactly upside-down; the upside-down slot is
        // sign-flipped because the whole field is rotated with it.
        let coeff = animation_coeff(state.animated_angle);
        let blend = |straight: f32, upside_down: f32| {
            straight * coeff + upside_down * (1.0 - coeff)
        };
        Some((
            blend(base.0, -upside_down_position.0),
            blend(base.1, -upside_down_position.1),
        ))
    }

    fn process_arrow_direction(&self, dx: i32, dy: i32, rotation: &RotationState) -> (i32, i32) {
        let coeff = if is_upside_down_angle(rotation.angle) {
            -1
        } else {
            1
        };
        (coeff * dx, coeff * dy)
    }

    fn field_angle(&self, state: &ProcessedRotationState) -> f32 {
        state.animated_angle
    }

    fn is_ready(&self, rotation: &RotationState) -> bool {
        !is_start_angle(rotation.angle)
    }

    fn initial_rotation_state(&self) -> RotationState {
        RotationState::start()
    }

    fn has_rotation_controls(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::START_ANGLE;

    fn rotation_at(angle: f32) -> RotationState {
        RotationState {
            angle,
            ..RotationState::default()
        }
    }

    #[test]
    fn toggle_swaps_six_and_nine_only() {
        for digit in 1..=9u8 {
            let data = RotatableDigit::plain(digit);
            let expected = match digit {
                6 => 9,
                9 => 6,
                other => other,
            };
            assert_eq!(toggle_digit(&data, true), expected);
            assert_eq!(toggle_digit(&data, false), digit);
            // Same-parity double application is the identity.
            let once = RotatableDigit::plain(toggle_digit(&data, true));
            assert_eq!(toggle_digit(&once, true), digit);
        }
    }

    #[test]
    fn sticky_digits_never_toggle() {
        let sticky_six = RotatableDigit::new(6, true);
        assert_eq!(toggle_digit(&sticky_six, true), 6);
    }

    #[test]
    fn same_cell_data_ignores_sticky_on_fixed_points() {
        let manager = RotatableDigitTypeManager;
        assert!(manager.are_same_cell_data(
            &RotatableDigit::new(5, true),
            &RotatableDigit::new(5, false)
        ));
        assert!(!manager.are_same_cell_data(
            &RotatableDigit::new(6, true),
            &RotatableDigit::new(6, false)
        ));
        assert!(manager.are_same_cell_data(
            &RotatableDigit::new(9, true),
            &RotatableDigit::new(9, true)
        ));
    }

    #[test]
    fn compare_is_total_and_consistent_with_equality() {
        let manager = RotatableDigitTypeManager;
        let mut all = Vec::new();
        for digit in 1..=9u8 {
            all.push(RotatableDigit::new(digit, false));
            all.push(RotatableDigit::new(digit, true));
        }
        for upside_down in [false, true] {
            for a in &all {
                for b in &all {
                    let ab = manager.compare_cell_data(a, b, upside_down);
                    let ba = manager.compare_cell_data(b, a, upside_down);
                    assert_eq!(ab, ba.reverse(), "not antisymmetric: {a:?} {b:?}");
                    for c in &all {
                        if ab != Ordering::Greater
                            && manager.compare_cell_data(b, c, upside_down) != Ordering::Greater
                        {
                            assert_ne!(
                                manager.compare_cell_data(a, c, upside_down),
                                Ordering::Greater,
                                "not transitive: {a:?} {b:?} {c:?}"
                            );
                        }
                    }
                }
            }
        }
        // Equal data compares equal in the straight view.
        for a in &all {
            for b in &all {
                if manager.are_same_cell_data(a, b) && a.sticky == b.sticky {
                    assert_eq!(manager.compare_cell_data(a, b, false), Ordering::Equal);
                }
            }
        }
    }

    #[test]
    fn upside_down_ordering_swaps_six_and_nine() {
        let manager = RotatableDigitTypeManager;
        let six = RotatableDigit::plain(6);
        let nine = RotatableDigit::plain(9);
        assert_eq!(manager.compare_cell_data(&six, &nine, false), Ordering::Less);
        assert_eq!(
            manager.compare_cell_data(&six, &nine, true),
            Ordering::Greater
        );
        // Non-sticky sorts before sticky at the same value.
        assert_eq!(
            manager.compare_cell_data(
                &RotatableDigit::new(4, false),
                &RotatableDigit::new(4, true),
                false
            ),
            Ordering::Less
        );
    }

    #[test]
    fn typing_six_upside_down_stores_nine() {
        let manager = RotatableDigitTypeManager;
        let typed = manager.create_cell_data_by_typed_digit(6, &rotation_at(190.0));
        assert_eq!(typed.digit, 9);
        // Display entry never transforms.
        let displayed = manager.create_cell_data_by_display_digit(6, &rotation_at(180.0));
        assert_eq!(displayed.digit, 6);
    }

    #[test]
    fn typing_right_side_up_stores_verbatim() {
        let manager = RotatableDigitTypeManager;
        let typed = manager.create_cell_data_by_typed_digit(6, &rotation_at(360.0));
        assert_eq!(typed.digit, 6);
    }

    #[test]
    fn sticky_mode_tags_new_digits() {
        let manager = RotatableDigitTypeManager;
        let rotation = RotationState {
            angle: 180.0,
            sticky_mode: true,
            ..RotationState::default()
        };
        let typed = manager.create_cell_data_by_typed_digit(6, &rotation);
        // Sticky digits are exempt from the transform even at entry.
        assert_eq!(typed, RotatableDigit::new(6, true));
    }

    #[test]
    fn position_blend_hits_both_endpoints() {
        let manager = RotatableDigitTypeManager;
        let set = [RotatableDigit::plain(6), RotatableDigit::plain(9)];
        let slots = |index: usize| -> Option<(f32, f32)> {
            [(-10.0, 0.0), (10.0, 0.0)].get(index).copied()
        };
        let base = slots(0).unwrap();

        // Upright: pure straight position.
        let upright = ProcessedRotationState {
            rotation: rotation_at(0.0),
            animated_angle: 0.0,
        };
        let pos = manager
            .process_cell_data_position(base, &set, 0, &slots, &upright)
            .unwrap();
        assert_eq!(pos, base);

        // Upside-down: the 6 sorts as a 9 (slot 1), sign-flipped.
        let flipped = ProcessedRotationState {
            rotation: rotation_at(180.0),
            animated_angle: 180.0,
        };
        let pos = manager
            .process_cell_data_position(base, &set, 0, &slots, &flipped)
            .unwrap();
        assert_eq!(pos, (-10.0, 0.0));

        // Halfway through the turn the position is mid-blend.
        let halfway = ProcessedRotationState {
            rotation: rotation_at(90.0),
            animated_angle: 90.0,
        };
        let pos = manager
            .process_cell_data_position(base, &set, 0, &slots, &halfway)
            .unwrap();
        assert_eq!(pos, (-10.0, 0.0));
    }

    #[test]
    fn arrows_flip_when_upside_down() {
        let manager = RotatableDigitTypeManager;
        assert_eq!(
            manager.process_arrow_direction(1, 0, &rotation_at(180.0)),
            (-1, 0)
        );
        assert_eq!(
            manager.process_arrow_direction(0, -1, &rotation_at(540.0)),
            (0, 1)
        );
        assert_eq!(
            manager.process_arrow_direction(1, 0, &rotation_at(0.0)),
            (1, 0)
        );
    }

    #[test]
    fn readiness_gates_only_the_start_tilt() {
        let manager = RotatableDigitTypeManager;
        assert!(!manager.is_ready(&rotation_at(START_ANGLE)));
        assert!(manager.is_ready(&rotation_at(0.0)));
        assert!(manager.is_ready(&rotation_at(180.0)));
        assert_eq!(manager.initial_rotation_state().angle, START_ANGLE);
    }
}
