//! Solid Demo entry point
//!
//! Runs the startup sequence once and exits successfully.

use solid_demo::Settings;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    log::info!("Solid Demo starting...");
    let settings = Settings::load();
    solid_demo::app::run(&settings);
}
