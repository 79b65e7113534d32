use std::rc::Rc;

use gloo::timers::callback::Interval;
use js_sys::Date;
use yew::prelude::*;

use rotoku_core::{
    apply_arrow_to_selected_cells, apply_digit_to_selected_cells, clear_selected_cell_content,
    clear_selected_cells, is_start_angle, rotate_field, select_all_cells, set_animation_speed,
    set_selected_cells, set_sticky_mode, set_write_mode, settle_start_angle, toggle_selected_cell,
    AnimatedValue, AnimationSpeed, CellWriteMode, GameState, ProcessedRotationState,
    RotatableDigitTypeManager, SelectionIntent, SudokuTypeManager,
};

use crate::controls::SidePanel;
use crate::field::Field;
use crate::persisted;

pub(crate) const CELL_SIZE: f32 = 70.0;

/// Animation frame cadence for the rotation interpolation.
const TICK_MS: u32 = 16;

/// The demo puzzle loaded on first boot (plenty of 6s and 9s to rotate).
const SAMPLE_GIVENS: &[(usize, usize, u8)] = &[
    (0, 0, 5),
    (0, 1, 3),
    (0, 4, 7),
    (1, 0, 6),
    (1, 3, 1),
    (1, 4, 9),
    (1, 5, 5),
    (2, 1, 9),
    (2, 2, 8),
    (2, 7, 6),
    (3, 0, 8),
    (3, 4, 6),
    (3, 8, 3),
    (4, 0, 4),
    (4, 3, 8),
    (4, 5, 3),
    (4, 8, 1),
    (5, 0, 7),
    (5, 4, 2),
    (5, 8, 6),
    (6, 1, 6),
    (6, 6, 2),
    (6, 7, 8),
    (7, 3, 4),
    (7, 4, 1),
    (7, 5, 9),
    (7, 8, 5),
    (8, 4, 8),
    (8, 7, 7),
    (8, 8, 9),
];

/// The injected digit-semantics strategy. Cheap to clone, compared by
/// identity so component props stay stable.
#[derive(Clone)]
pub(crate) struct ManagerHandle(Rc<dyn SudokuTypeManager>);

impl ManagerHandle {
    pub(crate) fn rotatable() -> Self {
        Self(Rc::new(RotatableDigitTypeManager))
    }
}

impl std::ops::Deref for ManagerHandle {
    type Target = dyn SudokuTypeManager;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ManagerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Everything the reducer can be asked to do. The field controller only
/// dispatches these; it never touches the state directly.
pub(crate) enum GameAction {
    Selection(SelectionIntent),
    Digit(u8),
    ClearInput,
    Rotate,
    Settle,
    SetStickyMode(bool),
    SetAnimationSpeed(AnimationSpeed),
    SetWriteMode(CellWriteMode),
}

pub(crate) struct GameStore {
    pub(crate) manager: ManagerHandle,
    pub(crate) game: GameState,
}

impl GameStore {
    fn load_or_new(manager: ManagerHandle) -> Self {
        let game = persisted::load_game().unwrap_or_else(|| {
            GameState::with_givens(manager.initial_rotation_state(), SAMPLE_GIVENS)
        });
        Self { manager, game }
    }
}

impl PartialEq for GameStore {
    fn eq(&self, other: &Self) -> bool {
        self.manager == other.manager && self.game == other.game
    }
}

impl Reducible for GameStore {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: GameAction) -> Rc<Self> {
        let manager = &*self.manager;
        let mut game = self.game.clone();
        match action {
            GameAction::Selection(intent) => match intent {
                SelectionIntent::Replace(cells) => set_selected_cells(&mut game, &cells),
                SelectionIntent::Toggle { pos, force } => {
                    toggle_selected_cell(&mut game, pos, force)
                }
                SelectionIntent::Clear => clear_selected_cells(&mut game),
                SelectionIntent::SelectAll => select_all_cells(&mut game),
                SelectionIntent::Arrow { dx, dy, extend } => {
                    apply_arrow_to_selected_cells(&mut game, manager, dx, dy, extend)
                }
            },
            GameAction::Digit(digit) => apply_digit_to_selected_cells(&mut game, manager, digit),
            GameAction::ClearInput => clear_selected_cell_content(&mut game),
            GameAction::Rotate => {
                // The first press doubles as the opening settle.
                if is_start_angle(game.rotation.angle) {
                    settle_start_angle(&mut game);
                } else {
                    rotate_field(&mut game);
                }
            }
            GameAction::Settle => settle_start_angle(&mut game),
            GameAction::SetStickyMode(sticky) => set_sticky_mode(&mut game, sticky),
            GameAction::SetAnimationSpeed(speed) => set_animation_speed(&mut game, speed),
            GameAction::SetWriteMode(mode) => set_write_mode(&mut game, mode),
        }
        Rc::new(Self {
            manager: self.manager.clone(),
            game,
        })
    }
}

/// Advances the animator one frame and returns the angle to publish, `None`
/// when it matches the last published one. Gating on the published value
/// rather than on settledness keeps an instant retarget (Immediate speed
/// settles before the first tick) from being dropped.
fn frame_angle(
    animator: &mut AnimatedValue,
    last_published: &mut f32,
    now_ms: f64,
) -> Option<f32> {
    let value = animator.tick(now_ms);
    if value == *last_published {
        return None;
    }
    *last_published = value;
    Some(value)
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let manager = (*use_memo((), |_| ManagerHandle::rotatable())).clone();
    let store = use_reducer({
        let manager = manager.clone();
        move || GameStore::load_or_new(manager)
    });

    let animated_angle = use_state(|| store.game.rotation.angle);
    let animator = use_mut_ref({
        let start = store.game.rotation.angle;
        move || AnimatedValue::new(start)
    });

    // Retarget the interpolation whenever the logical angle moves.
    use_effect_with(store.game.rotation, {
        let animator = animator.clone();
        move |rotation| {
            animator.borrow_mut().set_target(
                rotation.angle,
                rotation.animation_speed.duration_ms(),
                Date::now(),
            );
        }
    });

    // Frame clock. The interval outlives renders and is dropped on unmount.
    use_effect_with((), {
        let animator = animator.clone();
        let animated_angle = animated_angle.clone();
        let mut last_published = *animated_angle;
        move |_| {
            let interval = Interval::new(TICK_MS, move || {
                let value = frame_angle(
                    &mut animator.borrow_mut(),
                    &mut last_published,
                    Date::now(),
                );
                if let Some(value) = value {
                    animated_angle.set(value);
                }
            });
            move || drop(interval)
        }
    });

    // Kick off the opening animation from the start tilt.
    use_effect_with((), {
        let store = store.clone();
        move |_| {
            store.dispatch(GameAction::Settle);
        }
    });

    // Persist on every state change.
    use_effect_with(store.game.clone(), |game| {
        persisted::save_game(game);
    });

    let processed = ProcessedRotationState {
        rotation: store.game.rotation,
        animated_angle: *animated_angle,
    };

    html! {
        <div style="display:flex;align-items:flex-start;gap:40px;padding:40px;font-family:sans-serif;">
            <Field
                store={store.clone()}
                processed={processed}
                cell_size={CELL_SIZE}
            />
            <SidePanel store={store} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[test]
    fn immediate_retarget_still_publishes_the_new_angle() {
        let mut animator = AnimatedValue::new(0.0);
        let mut last_published = animator.value();
        animator.set_target(180.0, AnimationSpeed::Immediate.duration_ms(), 1000.0);
        // The animator is already settled; the jump must come through anyway.
        assert!(animator.is_settled());
        assert_eq!(
            frame_angle(&mut animator, &mut last_published, 1016.0),
            Some(180.0)
        );
        assert_eq!(frame_angle(&mut animator, &mut last_published, 1032.0), None);
    }

    #[test]
    fn animated_retarget_publishes_each_moving_frame() {
        let mut animator = AnimatedValue::new(0.0);
        let mut last_published = animator.value();
        animator.set_target(180.0, 1000.0, 0.0);
        assert_eq!(frame_angle(&mut animator, &mut last_published, 0.0), None);
        assert_eq!(
            frame_angle(&mut animator, &mut last_published, 500.0),
            Some(90.0)
        );
        assert_eq!(
            frame_angle(&mut animator, &mut last_published, 1000.0),
            Some(180.0)
        );
        assert_eq!(frame_angle(&mut animator, &mut last_published, 2000.0), None);
    }

    #[wasm_bindgen_test]
    fn app_renders() {
        set_panic_hook();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let _handle = yew::Renderer::<App>::with_root(root).render();
    }

    #[wasm_bindgen_test]
    fn wasm_smoke() {
        set_panic_hook();
        assert_eq!(1 + 1, 2);
    }
}
