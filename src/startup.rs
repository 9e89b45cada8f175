use crate::state::AppState;
use i_slint_backend_winit::WinitWindowAccessor;
use i_slint_backend_winit::{EventResult, winit::event::WindowEvent};
use log::{info, warn};
use slint::ComponentHandle;
use std::path::PathBuf;
use std::time::Duration;

/// Loads `path` once the event loop is idle.
///
/// Deferring keeps the blocking decode and any message box out of the
/// middle of event dispatch.
fn open_image_path(state: &AppState, path: PathBuf) {
    let opener = state.opener.clone();
    slint::Timer::single_shot(Duration::ZERO, move || {
        let Ok(mut opener) = opener.try_borrow_mut() else {
            warn!("Ignoring {}, another open is in progress", path.display());
            return;
        };
        opener.load_path(&path);
    });
}

/// First positional argument that is not a flag.
fn startup_image_from_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = std::ffi::OsString>,
{
    args.into_iter()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(PathBuf::from)
}

fn setup_drop_hook(app: &crate::AppWindow, state: &AppState) {
    let state = state.clone();

    app.window().on_winit_window_event(move |_window, event| {
        if let WindowEvent::DroppedFile(path) = event {
            info!("File dropped: {}", path.display());
            open_image_path(&state, path.clone());
        }

        EventResult::Propagate
    });
}

/// Wires file drops and opens the image named on the command line, if any.
pub fn configure_startup_opening(app: &crate::AppWindow, state: &AppState) {
    setup_drop_hook(app, state);

    if let Some(path) = startup_image_from_args(std::env::args_os()) {
        info!("Opening startup image: {}", path.display());
        open_image_path(state, path);
    }
}
