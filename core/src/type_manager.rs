use std::cmp::Ordering;

use crate::cell::RotatableDigit;
use crate::state::{ProcessedRotationState, RotationState};

/// Strategy object for everything about digit values that depends on the
/// puzzle variant. Required methods cover identity, ordering, and entry;
/// the optional hooks default to the plain-sudoku behavior so a variant only
/// overrides what it changes. Selected once at composition time and passed
/// around as `Rc<dyn SudokuTypeManager>`.
pub trait SudokuTypeManager {
    fn are_same_cell_data(&self, a: &RotatableDigit, b: &RotatableDigit) -> bool;

    /// Total order over cell data. `upside_down` asks for the order as seen
    /// from the flipped view.
    fn compare_cell_data(
        &self,
        a: &RotatableDigit,
        b: &RotatableDigit,
        upside_down: bool,
    ) -> Ordering;

    /// Stable render key for one piece of cell data.
    fn cell_data_hash(&self, data: &RotatableDigit) -> String;

    /// Tags a digit that already reads correctly on screen (display entry:
    /// what the user sees is what is stored).
    fn create_cell_data_by_display_digit(&self, digit: u8, rotation: &RotationState)
        -> RotatableDigit;

    /// Tags a digit typed from the keyboard, compensating for the current
    /// view orientation.
    fn create_cell_data_by_typed_digit(&self, digit: u8, rotation: &RotationState)
        -> RotatableDigit;

    /// Animated position for the candidate at `data_index` among its sorted
    /// siblings. `position_of` maps a sort index to its straight-view slot.
    /// Defaults to the straight position.
    fn process_cell_data_position(
        &self,
        base: (f32, f32),
        data_set: &[RotatableDigit],
        data_index: usize,
        position_of: &dyn Fn(usize) -> Option<(f32, f32)>,
        state: &ProcessedRotationState,
    ) -> Option<(f32, f32)> {
        let _ = (data_set, data_index, position_of, state);
        Some(base)
    }

    /// Maps an arrow-key direction so navigation follows the player's visual
    /// up. Defaults to the identity.
    fn process_arrow_direction(&self, dx: i32, dy: i32, rotation: &RotationState) -> (i32, i32) {
        let _ = rotation;
        (dx, dy)
    }

    /// Angle the whole field is drawn at. Defaults to unrotated.
    fn field_angle(&self, state: &ProcessedRotationState) -> f32 {
        let _ = state;
        0.0
    }

    /// Whether the puzzle accepts input. Defaults to always ready.
    fn is_ready(&self, rotation: &RotationState) -> bool {
        let _ = rotation;
        true
    }

    /// Rotation state a fresh game starts from.
    fn initial_rotation_state(&self) -> RotationState {
        RotationState::default()
    }

    /// Whether the rotate/sticky controls should be shown.
    fn has_rotation_controls(&self) -> bool {
        false
    }
}

/// For each element of `data`, its index in the order produced by `cmp`.
pub fn cell_data_sort_indexes<F>(data: &[RotatableDigit], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&RotatableDigit, &RotatableDigit) -> Ordering,
{
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| cmp(&data[a], &data[b]));
    let mut indexes = vec![0; data.len()];
    for (sorted_pos, &original) in order.iter().enumerate() {
        indexes[original] = sorted_pos;
    }
    indexes
}

/// The plain variant: no rotation semantics at all. Exists both as the
/// default behavior reference and as proof the plugin seam composes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardDigitTypeManager;

impl SudokuTypeManager for StandardDigitTypeManager {
    fn are_same_cell_data(&self, a: &RotatableDigit, b: &RotatableDigit) -> bool {
        a.digit == b.digit
    }

    fn compare_cell_data(
        &self,
        a: &RotatableDigit,
        b: &RotatableDigit,
        _upside_down: bool,
    ) -> Ordering {
        a.digit.cmp(&b.digit)
    }

    fn cell_data_hash(&self, data: &RotatableDigit) -> String {
        data.digit.to_string()
    }

    fn create_cell_data_by_display_digit(
        &self,
        digit: u8,
        _rotation: &RotationState,
    ) -> RotatableDigit {
        RotatableDigit::plain(digit)
    }

    fn create_cell_data_by_typed_digit(
        &self,
        digit: u8,
        _rotation: &RotationState,
    ) -> RotatableDigit {
        RotatableDigit::plain(digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_indexes_invert_sorted_order() {
        let data = [
            RotatableDigit::plain(5),
            RotatableDigit::plain(1),
            RotatableDigit::plain(9),
        ];
        let indexes = cell_data_sort_indexes(&data, |a, b| a.digit.cmp(&b.digit));
        assert_eq!(indexes, vec![1, 0, 2]);
    }

    #[test]
    fn standard_manager_ignores_sticky_and_orientation() {
        let manager = StandardDigitTypeManager;
        let six = RotatableDigit::plain(6);
        let sticky_six = RotatableDigit::new(6, true);
        assert!(manager.are_same_cell_data(&six, &sticky_six));
        assert_eq!(
            manager.compare_cell_data(&six, &RotatableDigit::plain(9), true),
            Ordering::Less
        );
        let rotation = RotationState::default();
        assert_eq!(manager.create_cell_data_by_typed_digit(6, &rotation), six);
        assert!(!manager.has_rotation_controls());
        assert!(manager.is_ready(&rotation));
    }
}
