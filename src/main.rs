// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_picker;
mod image_loader;
mod services;
mod startup;
mod state;
mod ui;

use slint::ComponentHandle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let app = AppWindow::new()?;
    ui::init_view_state(&app);

    let app_state = state::AppState::new(ui::SlintPresenter::new(app.as_weak()));

    // Setup all UI event handlers
    ui::setup_handlers(&app, app_state.clone());
    startup::configure_startup_opening(&app, &app_state);

    app.run()?;

    Ok(())
}
