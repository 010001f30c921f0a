mod components;
mod config;
mod model;
mod state;
mod util;

fn main() {
    util::init_logging();
    log::info!("city runner starting");
    yew::Renderer::<components::app::App>::new().render();
}
