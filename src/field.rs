use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use rotoku_core::{
    CellPosition, CellState, FieldInputMachine, ProcessedRotationState, FIELD_SIZE,
};

use crate::app::{GameAction, GameStore};
use crate::cell_content::{CellBackground, CellDigits, CellSelection};

#[derive(Properties, PartialEq)]
pub(crate) struct FieldProps {
    pub store: UseReducerHandle<GameStore>,
    pub processed: ProcessedRotationState,
    pub cell_size: f32,
}

fn digit_from_code(code: &str) -> Option<u8> {
    let rest = code
        .strip_prefix("Digit")
        .or_else(|| code.strip_prefix("Numpad"))?;
    let digit: u8 = rest.parse().ok()?;
    (1..=9).contains(&digit).then_some(digit)
}

/// The grid viewport: renders the layered field (background, selection,
/// lines, digits, hit-test) and owns all input wiring. Selection changes go
/// through the input machine and out as dispatched intents; nothing here
/// mutates state directly.
#[function_component(Field)]
pub(crate) fn field(props: &FieldProps) -> Html {
    let store = props.store.clone();
    let manager = store.manager.clone();
    let processed = props.processed;
    let cell_size = props.cell_size;
    let is_ready = manager.is_ready(&store.game.rotation);

    let machine = use_mut_ref(FieldInputMachine::new);

    // Window-level listeners, scoped to this component instance: the
    // handles live in the effect closure and drop on unmount or when
    // readiness flips, so a puzzle switch can't leak them.
    use_effect_with(is_ready, {
        let store = store.clone();
        let machine = machine.clone();
        move |ready| {
            let mut listeners = Vec::new();
            if *ready {
                if let Some(window) = web_sys::window() {
                    let store_mouse = store.clone();
                    let machine_mouse = machine.clone();
                    listeners.push(EventListener::new(&window, "mousedown", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let any_key_down = event.ctrl_key()
                            || event.shift_key()
                            || event.alt_key()
                            || event.meta_key();
                        if let Some(intent) =
                            machine_mouse.borrow_mut().outside_mouse_down(any_key_down)
                        {
                            store_mouse.dispatch(GameAction::Selection(intent));
                        }
                    }));

                    let store_key = store.clone();
                    let machine_key = machine.clone();
                    listeners.push(EventListener::new_with_options(
                        &window,
                        "keydown",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                return;
                            };
                            let code = event.code();
                            if let Some(key_intent) = machine_key.borrow_mut().key_down(
                                &code,
                                event.ctrl_key(),
                                event.shift_key(),
                            ) {
                                if key_intent.suppress_default {
                                    event.prevent_default();
                                }
                                store_key.dispatch(GameAction::Selection(key_intent.intent));
                                return;
                            }
                            if event.ctrl_key() || event.meta_key() {
                                return;
                            }
                            if let Some(digit) = digit_from_code(&code) {
                                store_key.dispatch(GameAction::Digit(digit));
                            } else if code == "Delete" || code == "Backspace" {
                                store_key.dispatch(GameAction::ClearInput);
                            }
                        },
                    ));
                }
            }
            move || drop(listeners)
        }
    });

    let field_px = cell_size * FIELD_SIZE as f32;
    let angle = manager.field_angle(&processed);

    let cells_layer = |prefix: &str, renderer: &dyn Fn(&CellState, CellPosition) -> Html| -> Html {
        let mut out = Vec::with_capacity(FIELD_SIZE * FIELD_SIZE);
        for (row_index, row) in store.game.cells.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let pos = CellPosition::new(row_index, col_index);
                let style = format!(
                    "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
                    cell_size * col_index as f32,
                    cell_size * row_index as f32,
                    cell_size,
                    cell_size,
                );
                out.push(html! {
                    <div key={format!("cell-{prefix}-{row_index}-{col_index}")} style={style}>
                        { renderer(cell, pos) }
                    </div>
                });
            }
        }
        html! { for out }
    };

    let grid_lines = {
        let mut lines = Vec::with_capacity((FIELD_SIZE + 1) * 2);
        for index in 0..=FIELD_SIZE {
            let offset = cell_size * index as f32;
            let width = if index % 3 == 0 { 3.0 } else { 1.0 };
            lines.push(html! {
                <line
                    key={format!("h-line-{index}")}
                    x1="0" y1={offset.to_string()}
                    x2={field_px.to_string()} y2={offset.to_string()}
                    stroke="#000" stroke-width={width.to_string()}
                />
            });
            lines.push(html! {
                <line
                    key={format!("v-line-{index}")}
                    x1={offset.to_string()} y1="0"
                    x2={offset.to_string()} y2={field_px.to_string()}
                    stroke="#000" stroke-width={width.to_string()}
                />
            });
        }
        html! {
            <svg
                style="position:absolute;left:0;top:0;overflow:visible;pointer-events:none;"
                width={field_px.to_string()}
                height={field_px.to_string()}
            >
                { for lines }
            </svg>
        }
    };

    let hit_cell = |pos: CellPosition| -> Html {
        let onmousedown = Callback::from(|event: MouseEvent| {
            // Keep grid clicks from registering as outside clicks or
            // starting a text-selection drag.
            event.prevent_default();
            event.stop_propagation();
        });

        let onpointerdown = {
            let store = store.clone();
            let machine = machine.clone();
            Callback::from(move |event: PointerEvent| {
                // A single physical gesture must not read as both a click
                // and a captured drag.
                if let Some(target) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                {
                    let pointer_id = event.pointer_id();
                    if target.has_pointer_capture(pointer_id) {
                        target.release_pointer_capture(pointer_id).ok();
                    }
                }
                let multi_select =
                    event.ctrl_key() || event.shift_key() || !event.is_primary();
                let already_selected = store.game.selected.contains(pos);
                let intent =
                    machine
                        .borrow_mut()
                        .pointer_down(pos, multi_select, already_selected);
                store.dispatch(GameAction::Selection(intent));
            })
        };

        let onpointerenter = {
            let store = store.clone();
            let machine = machine.clone();
            Callback::from(move |event: PointerEvent| {
                if let Some(intent) = machine.borrow_mut().pointer_enter(pos, event.buttons()) {
                    store.dispatch(GameAction::Selection(intent));
                }
            })
        };

        let style = "position:absolute;left:0;top:0;width:100%;height:100%;\
                     cursor:pointer;touch-action:none;user-select:none;";
        html! {
            <div
                style={style}
                {onmousedown}
                {onpointerdown}
                {onpointerenter}
            />
        }
    };

    let container_style = format!(
        "position:relative;width:{field_px}px;height:{field_px}px;background:#fff;\
         transform:rotate({angle}deg);"
    );

    html! {
        <div style={container_style}>
            { cells_layer("background", &|cell, _| html! {
                <CellBackground colors={cell.colors.clone()} size={cell_size} />
            }) }
            { cells_layer("selection", &|_, pos| {
                if store.game.selected.contains(pos) {
                    html! {
                        <CellSelection
                            size={cell_size}
                            secondary={store.game.selected.last() != Some(pos)}
                        />
                    }
                } else {
                    Html::default()
                }
            }) }
            { grid_lines }
            { cells_layer("digits", &|cell, _| html! {
                <CellDigits
                    manager={manager.clone()}
                    cell={cell.clone()}
                    size={cell_size}
                    processed={processed}
                />
            }) }
            { if is_ready {
                cells_layer("mouse-handler", &|_, pos| hit_cell(pos))
            } else {
                Html::default()
            } }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_codes_parse() {
        assert_eq!(digit_from_code("Digit1"), Some(1));
        assert_eq!(digit_from_code("Numpad9"), Some(9));
        assert_eq!(digit_from_code("Digit0"), None);
        assert_eq!(digit_from_code("KeyA"), None);
        assert_eq!(digit_from_code("Escape"), None);
    }
}
