use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use rotoku_core::{is_start_angle, AnimationSpeed, CellWriteMode};

use crate::app::{GameAction, GameStore};

#[derive(Properties, PartialEq)]
pub(crate) struct SidePanelProps {
    pub store: UseReducerHandle<GameStore>,
}

const WRITE_MODES: [CellWriteMode; 4] = [
    CellWriteMode::Main,
    CellWriteMode::Corner,
    CellWriteMode::Center,
    CellWriteMode::Color,
];

const SPEEDS: [AnimationSpeed; 3] = [
    AnimationSpeed::Immediate,
    AnimationSpeed::Regular,
    AnimationSpeed::Slow,
];

/// The control column next to the field: rotation controls when the active
/// type manager has them, plus write mode and a digit pad.
#[function_component(SidePanel)]
pub(crate) fn side_panel(props: &SidePanelProps) -> Html {
    let store = props.store.clone();
    let manager = store.manager.clone();
    let rotation = store.game.rotation;
    let is_ready = manager.is_ready(&rotation);

    let rotation_controls = if manager.has_rotation_controls() {
        let on_rotate = {
            let store = store.clone();
            Callback::from(move |_| store.dispatch(GameAction::Rotate))
        };
        let on_sticky = {
            let store = store.clone();
            Callback::from(move |event: Event| {
                let input: HtmlInputElement = event.target_unchecked_into();
                store.dispatch(GameAction::SetStickyMode(input.checked()));
            })
        };
        let on_speed = {
            let store = store.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                let speed = match select.value().as_str() {
                    "immediate" => AnimationSpeed::Immediate,
                    "slow" => AnimationSpeed::Slow,
                    _ => AnimationSpeed::Regular,
                };
                store.dispatch(GameAction::SetAnimationSpeed(speed));
            })
        };
        let rotate_label = if is_start_angle(rotation.angle) {
            "Start"
        } else {
            "Rotate"
        };
        html! {
            <>
                <button onclick={on_rotate}>{ rotate_label }</button>
                <label>
                    <input
                        type="checkbox"
                        checked={rotation.sticky_mode}
                        onchange={on_sticky}
                        disabled={!is_ready}
                    />
                    { "Sticky digits" }
                </label>
                <label>
                    { "Animation" }
                    <select onchange={on_speed}>
                        { for SPEEDS.iter().map(|speed| html! {
                            <option
                                value={speed.label()}
                                selected={*speed == rotation.animation_speed}
                            >
                                { speed.label() }
                            </option>
                        }) }
                    </select>
                </label>
            </>
        }
    } else {
        Html::default()
    };

    let on_mode = {
        let store = store.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mode = match select.value().as_str() {
                "corner" => CellWriteMode::Corner,
                "center" => CellWriteMode::Center,
                "color" => CellWriteMode::Color,
                _ => CellWriteMode::Main,
            };
            store.dispatch(GameAction::SetWriteMode(mode));
        })
    };

    let digit_pad = (1..=9u8).map(|digit| {
        let store = store.clone();
        let onclick = Callback::from(move |_| store.dispatch(GameAction::Digit(digit)));
        html! {
            <button
                key={digit.to_string()}
                {onclick}
                disabled={!is_ready}
                style="width:40px;height:40px;"
            >
                { digit.to_string() }
            </button>
        }
    });

    let on_clear = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(GameAction::ClearInput))
    };

    html! {
        <div style="display:flex;flex-direction:column;gap:12px;width:160px;">
            { rotation_controls }
            <label>
                { "Mode" }
                <select onchange={on_mode}>
                    { for WRITE_MODES.iter().map(|mode| html! {
                        <option
                            value={mode.label()}
                            selected={*mode == store.game.write_mode}
                        >
                            { mode.label() }
                        </option>
                    }) }
                </select>
            </label>
            <div style="display:grid;grid-template-columns:repeat(3,40px);gap:4px;">
                { for digit_pad }
            </div>
            <button onclick={on_clear} disabled={!is_ready}>{ "Clear" }</button>
        </div>
    }
}
