use rotoku_core::{
    apply_arrow_to_selected_cells, apply_digit_to_selected_cells, clear_selected_cells,
    select_all_cells, set_selected_cells, toggle_selected_cell, CellPosition, FieldInputMachine,
    GameState, RotatableDigitTypeManager, RotationState, SelectionIntent, SudokuTypeManager,
    FIELD_SIZE,
};

fn apply_intent(state: &mut GameState, manager: &dyn SudokuTypeManager, intent: SelectionIntent) {
    match intent {
        SelectionIntent::Replace(cells) => set_selected_cells(state, &cells),
        SelectionIntent::Toggle { pos, force } => toggle_selected_cell(state, pos, force),
        SelectionIntent::Clear => clear_selected_cells(state),
        SelectionIntent::SelectAll => select_all_cells(state),
        SelectionIntent::Arrow { dx, dy, extend } => {
            apply_arrow_to_selected_cells(state, manager, dx, dy, extend)
        }
    }
}

fn ready_state() -> GameState {
    GameState::new(RotationState::default())
}

#[test]
fn plain_click_replaces_multi_selection() {
    let manager = RotatableDigitTypeManager;
    let mut machine = FieldInputMachine::new();
    let mut state = ready_state();
    set_selected_cells(
        &mut state,
        &[CellPosition::new(1, 1), CellPosition::new(2, 2)],
    );

    let target = CellPosition::new(3, 4);
    let intent = machine.pointer_down(target, false, state.selected.contains(target));
    apply_intent(&mut state, &manager, intent);

    assert_eq!(state.selected.len(), 1);
    assert_eq!(state.selected.last(), Some(target));
}

#[test]
fn ctrl_click_on_selected_cell_starts_removal_stroke() {
    let manager = RotatableDigitTypeManager;
    let mut machine = FieldInputMachine::new();
    let mut state = ready_state();
    let first = CellPosition::new(3, 4);
    let second = CellPosition::new(5, 5);
    set_selected_cells(&mut state, &[first, second]);

    let intent = machine.pointer_down(first, true, state.selected.contains(first));
    apply_intent(&mut state, &manager, intent);
    assert!(!state.selected.contains(first));

    // Dragging onto another selected cell removes it too.
    if let Some(intent) = machine.pointer_enter(second, 1) {
        apply_intent(&mut state, &manager, intent);
    }
    assert!(!state.selected.contains(second));

    // And an unselected cell stays unselected under a removal stroke.
    let third = CellPosition::new(6, 6);
    if let Some(intent) = machine.pointer_enter(third, 1) {
        apply_intent(&mut state, &manager, intent);
    }
    assert!(!state.selected.contains(third));
}

#[test]
fn drag_add_stroke_paints_cells_in() {
    let manager = RotatableDigitTypeManager;
    let mut machine = FieldInputMachine::new();
    let mut state = ready_state();

    let start = CellPosition::new(0, 0);
    let intent = machine.pointer_down(start, true, false);
    apply_intent(&mut state, &manager, intent);

    for col in 1..4 {
        let pos = CellPosition::new(0, col);
        if let Some(intent) = machine.pointer_enter(pos, 1) {
            apply_intent(&mut state, &manager, intent);
        }
    }
    assert_eq!(state.selected.len(), 4);
    assert_eq!(state.selected.last(), Some(CellPosition::new(0, 3)));
}

#[test]
fn select_all_then_escape_clears() {
    let manager = RotatableDigitTypeManager;
    let mut machine = FieldInputMachine::new();
    let mut state = ready_state();

    let all = machine.key_down("KeyA", true, false).unwrap();
    apply_intent(&mut state, &manager, all.intent);
    assert_eq!(state.selected.len(), FIELD_SIZE * FIELD_SIZE);

    let escape = machine.key_down("Escape", false, false).unwrap();
    apply_intent(&mut state, &manager, escape.intent);
    assert!(state.selected.is_empty());
}

#[test]
fn typed_six_while_upside_down_stores_nine() {
    let manager = RotatableDigitTypeManager;
    let mut state = ready_state();
    state.rotation.angle = 190.0;
    set_selected_cells(&mut state, &[CellPosition::new(0, 0)]);

    apply_digit_to_selected_cells(&mut state, &manager, 6);
    assert_eq!(state.cells[0][0].users_digit.map(|d| d.digit), Some(9));
}

#[test]
fn arrow_navigation_follows_visual_up_when_flipped() {
    let manager = RotatableDigitTypeManager;
    let mut machine = FieldInputMachine::new();
    let mut state = ready_state();
    state.rotation.angle = 180.0;
    set_selected_cells(&mut state, &[CellPosition::new(4, 4)]);

    let up = machine.key_down("ArrowUp", false, false).unwrap();
    apply_intent(&mut state, &manager, up.intent);
    // Visually up is row+1 while the field is flipped.
    assert_eq!(state.selected.last(), Some(CellPosition::new(5, 4)));
}
