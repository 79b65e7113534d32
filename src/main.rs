mod app;
mod cell_content;
mod controls;
mod digit;
mod field;
mod persisted;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
