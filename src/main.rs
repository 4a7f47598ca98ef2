mod components;
mod state;

use components::app::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    if yew_touch_gestures::util::init_logging(log::LevelFilter::Debug).is_ok() {
        log::info!("starting gesture viewport");
    }
    yew::Renderer::<App>::new().render();
}
