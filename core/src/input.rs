use crate::position::CellPosition;

/// Selection changes the field controller asks the reducer for. The
/// controller never mutates state itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionIntent {
    Replace(Vec<CellPosition>),
    Toggle {
        pos: CellPosition,
        force: Option<bool>,
    },
    Clear,
    SelectAll,
    Arrow {
        dx: i32,
        dy: i32,
        extend: bool,
    },
}

/// A keyboard intent plus whether the browser default must be suppressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyIntent {
    pub intent: SelectionIntent,
    pub suppress_default: bool,
}

/// The pointer/keyboard selection state machine. The only persistent state
/// is the stroke mode: whether the current drag gesture adds cells to the
/// selection or removes them, decided by the first cell touched.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldInputMachine {
    delete_stroke: bool,
}

impl FieldInputMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_delete_stroke(&self) -> bool {
        self.delete_stroke
    }

    /// Pointer-down on a cell. `multi_select` is true for ctrl/shift or a
    /// non-primary pointer; `already_selected` is the cell's membership
    /// before this event.
    pub fn pointer_down(
        &mut self,
        pos: CellPosition,
        multi_select: bool,
        already_selected: bool,
    ) -> SelectionIntent {
        self.delete_stroke = multi_select && already_selected;
        if multi_select {
            SelectionIntent::Toggle { pos, force: None }
        } else {
            SelectionIntent::Replace(vec![pos])
        }
    }

    /// Pointer entering a cell mid-gesture. Only a held primary button
    /// paints; the stroke mode decides the direction.
    pub fn pointer_enter(&mut self, pos: CellPosition, buttons: u16) -> Option<SelectionIntent> {
        if buttons != 1 {
            return None;
        }
        Some(SelectionIntent::Toggle {
            pos,
            force: Some(!self.delete_stroke),
        })
    }

    /// Mouse-down outside the field. Clears the selection unless a modifier
    /// is held; always resets the stroke mode.
    pub fn outside_mouse_down(&mut self, any_key_down: bool) -> Option<SelectionIntent> {
        self.delete_stroke = false;
        if any_key_down {
            None
        } else {
            Some(SelectionIntent::Clear)
        }
    }

    /// Global keydown by `KeyboardEvent.code`.
    pub fn key_down(&mut self, code: &str, ctrl: bool, shift: bool) -> Option<KeyIntent> {
        let extend = ctrl || shift;
        let arrow = |dx: i32, dy: i32| KeyIntent {
            intent: SelectionIntent::Arrow { dx, dy, extend },
            suppress_default: false,
        };
        match code {
            "ArrowLeft" => Some(arrow(-1, 0)),
            "ArrowRight" => Some(arrow(1, 0)),
            "ArrowUp" => Some(arrow(0, -1)),
            "ArrowDown" => Some(arrow(0, 1)),
            "KeyA" if ctrl && !shift => Some(KeyIntent {
                intent: SelectionIntent::SelectAll,
                suppress_default: true,
            }),
            "Escape" if !ctrl && !shift => Some(KeyIntent {
                intent: SelectionIntent::Clear,
                suppress_default: true,
            }),
            _ => None,
        }
    }
}
