pub mod angle;
pub mod animate;
pub mod cell;
pub mod geometry;
pub mod input;
pub mod position;
pub mod rotatable;
pub mod state;
pub mod type_manager;

pub use angle::{
    animation_coeff, is_start_angle, is_upside_down_angle, normalize_angle, ROTATION_STEP_DEG,
    START_ANGLE,
};
pub use animate::AnimatedValue;
pub use cell::{CellColor, CellState, RotatableDigit, CELL_BACKGROUND_COLORS};
pub use input::{FieldInputMachine, KeyIntent, SelectionIntent};
pub use position::{CellPosition, PositionSet, FIELD_SIZE};
pub use rotatable::{is_rotatable_digit, toggle_digit, RotatableDigitTypeManager};
pub use state::{
    apply_arrow_to_selected_cells, apply_digit_to_selected_cells, clear_selected_cell_content,
    clear_selected_cells, rotate_field, select_all_cells, set_animation_speed, set_selected_cells,
    set_sticky_mode, set_write_mode, settle_start_angle, toggle_selected_cell, AnimationSpeed,
    CellWriteMode, GameState, ProcessedRotationState, RotationState,
};
pub use type_manager::{cell_data_sort_indexes, StandardDigitTypeManager, SudokuTypeManager};
