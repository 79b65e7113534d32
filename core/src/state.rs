use serde::{Deserialize, Serialize};

use crate::angle::{is_start_angle, ROTATION_STEP_DEG, START_ANGLE};
use crate::cell::{CellColor, CellState, RotatableDigit};
use crate::position::{CellPosition, PositionSet, FIELD_SIZE};
use crate::type_manager::SudokuTypeManager;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationSpeed {
    Immediate,
    #[default]
    Regular,
    Slow,
}

impl AnimationSpeed {
    pub fn duration_ms(self) -> f64 {
        match self {
            AnimationSpeed::Immediate => 0.0,
            AnimationSpeed::Regular => 800.0,
            AnimationSpeed::Slow => 2500.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Immediate => "immediate",
            AnimationSpeed::Regular => "regular",
            AnimationSpeed::Slow => "slow",
        }
    }
}

/// Rotation-specific game state. The angle is a running total and can exceed
/// +-360 as the player keeps rotating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    pub angle: f32,
    pub sticky_mode: bool,
    pub animation_speed: AnimationSpeed,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            sticky_mode: false,
            animation_speed: AnimationSpeed::Regular,
        }
    }
}

impl RotationState {
    pub fn start() -> Self {
        Self {
            angle: START_ANGLE,
            ..Self::default()
        }
    }
}

/// Rotation state plus the continuously interpolated angle the view is
/// actually drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessedRotationState {
    pub rotation: RotationState,
    pub animated_angle: f32,
}

/// Which layer of a cell digit entry writes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellWriteMode {
    #[default]
    Main,
    Corner,
    Center,
    Color,
}

impl CellWriteMode {
    pub fn label(self) -> &'static str {
        match self {
            CellWriteMode::Main => "main",
            CellWriteMode::Corner => "corner",
            CellWriteMode::Center => "center",
            CellWriteMode::Color => "color",
        }
    }
}

/// The whole player-facing game state: field contents, selection, rotation,
/// and the active write mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub cells: Vec<Vec<CellState>>,
    pub selected: PositionSet,
    pub rotation: RotationState,
    pub write_mode: CellWriteMode,
}

impl GameState {
    pub fn new(rotation: RotationState) -> Self {
        Self {
            cells: vec![vec![CellState::default(); FIELD_SIZE]; FIELD_SIZE],
            selected: PositionSet::new(),
            rotation,
            write_mode: CellWriteMode::Main,
        }
    }

    pub fn with_givens(rotation: RotationState, givens: &[(usize, usize, u8)]) -> Self {
        let mut state = Self::new(rotation);
        for &(row, col, digit) in givens {
            if row < FIELD_SIZE && col < FIELD_SIZE {
                state.cells[row][col] = CellState::given(digit);
            }
        }
        state
    }

    pub fn cell(&self, pos: CellPosition) -> Option<&CellState> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    pub fn cell_mut(&mut self, pos: CellPosition) -> Option<&mut CellState> {
        self.cells.get_mut(pos.row)?.get_mut(pos.col)
    }
}

pub fn set_selected_cells(state: &mut GameState, cells: &[CellPosition]) {
    state.selected = PositionSet::from_positions(cells);
}

pub fn toggle_selected_cell(state: &mut GameState, pos: CellPosition, force: Option<bool>) {
    state.selected.toggle(pos, force);
}

pub fn clear_selected_cells(state: &mut GameState) {
    state.selected.clear();
}

pub fn select_all_cells(state: &mut GameState) {
    state.selected = PositionSet::select_all();
}

/// Moves the selection one cell in the given direction, mapped through the
/// manager so "up" follows the player's visual up. `extend` keeps the
/// current selection and adds the new cell; otherwise the new cell replaces
/// it. With nothing selected the center cell is picked as the origin.
pub fn apply_arrow_to_selected_cells(
    state: &mut GameState,
    manager: &dyn SudokuTypeManager,
    dx: i32,
    dy: i32,
    extend: bool,
) {
    let (dx, dy) = manager.process_arrow_direction(dx, dy, &state.rotation);
    let next = match state.selected.last() {
        Some(last) => last.moved(dx, dy),
        None => CellPosition::new(FIELD_SIZE / 2, FIELD_SIZE / 2),
    };
    if extend {
        state.selected.add(next);
    } else {
        set_selected_cells(state, &[next]);
    }
}

/// Applies a typed digit to every selected cell according to the write mode.
pub fn apply_digit_to_selected_cells(
    state: &mut GameState,
    manager: &dyn SudokuTypeManager,
    digit: u8,
) {
    let rotation = state.rotation;
    let mode = state.write_mode;
    let selected: Vec<CellPosition> = state.selected.iter().collect();
    for pos in selected {
        let data = manager.create_cell_data_by_typed_digit(digit, &rotation);
        let Some(cell) = state.cell_mut(pos) else {
            continue;
        };
        match mode {
            CellWriteMode::Main => {
                if cell.initial_digit.is_none() {
                    cell.users_digit = Some(data);
                }
            }
            CellWriteMode::Corner => toggle_candidate(&mut cell.corner_digits, data, manager, false),
            CellWriteMode::Center => toggle_candidate(&mut cell.center_digits, data, manager, true),
            CellWriteMode::Color => {
                let color = CellColor((digit as usize).saturating_sub(1));
                if let Some(found) = cell.colors.iter().position(|&c| c == color) {
                    cell.colors.remove(found);
                } else {
                    cell.colors.push(color);
                    cell.colors.sort();
                }
            }
        }
    }
}

fn toggle_candidate(
    list: &mut Vec<RotatableDigit>,
    data: RotatableDigit,
    manager: &dyn SudokuTypeManager,
    keep_sorted: bool,
) {
    let before = list.len();
    list.retain(|item| !manager.are_same_cell_data(item, &data));
    if list.len() == before {
        list.push(data);
        if keep_sorted {
            list.sort_by(|a, b| manager.compare_cell_data(a, b, false));
        }
    }
}

/// Clears selected cells layer by layer: the main digit first, then
/// candidates, then colors. Initial digits never change.
pub fn clear_selected_cell_content(state: &mut GameState) {
    let selected: Vec<CellPosition> = state.selected.iter().collect();
    for pos in selected {
        let Some(cell) = state.cell_mut(pos) else {
            continue;
        };
        if cell.users_digit.is_some() {
            cell.users_digit = None;
        } else if !cell.corner_digits.is_empty() || !cell.center_digits.is_empty() {
            cell.corner_digits.clear();
            cell.center_digits.clear();
        } else {
            cell.colors.clear();
        }
    }
}

/// First interaction after load: brings the field from the start tilt to
/// upright, which also flips the readiness gate.
pub fn settle_start_angle(state: &mut GameState) {
    if is_start_angle(state.rotation.angle) {
        state.rotation.angle = 0.0;
    }
}

pub fn rotate_field(state: &mut GameState) {
    state.rotation.angle += ROTATION_STEP_DEG;
}

pub fn set_sticky_mode(state: &mut GameState, sticky: bool) {
    state.rotation.sticky_mode = sticky;
}

pub fn set_animation_speed(state: &mut GameState, speed: AnimationSpeed) {
    state.rotation.animation_speed = speed;
}

pub fn set_write_mode(state: &mut GameState, mode: CellWriteMode) {
    state.write_mode = mode;
}
