//! Pushes decoded images into the window.

use crate::config::{APP_TITLE, WELCOME_TEXT};
use crate::image_loader::{self, DecodedImage};
use crate::services::Presenter;
use crate::state::ShownImage;
use log::warn;
use slint::ComponentHandle;

/// Title for the window, naming the displayed file when there is one.
pub fn window_title(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) => format!("{} - {}", name, APP_TITLE),
        None => APP_TITLE.to_string(),
    }
}

/// Sets the ViewState properties for a window with nothing displayed.
pub fn init_view_state(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_window_title(window_title(None).into());
    view_state.set_placeholder_text(WELCOME_TEXT.into());
    view_state.set_image_loaded(false);
}

/// Presents images in the window's single image element.
pub struct SlintPresenter {
    ui: slint::Weak<crate::AppWindow>,
}

impl SlintPresenter {
    pub fn new(ui: slint::Weak<crate::AppWindow>) -> Self {
        Self { ui }
    }
}

impl Presenter for SlintPresenter {
    fn present(&mut self, image: DecodedImage) {
        let Some(ui) = self.ui.upgrade() else {
            warn!("Window is gone, dropping {}", image.path.display());
            return;
        };

        let title = window_title(Some(&ShownImage::from(&image).file_name()));
        let image = image_loader::create_slint_image(image);

        let view_state = ui.global::<crate::ViewState>();
        view_state.set_dynamic_image(image);
        view_state.set_image_loaded(true);
        view_state.set_window_title(title.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_names_the_file() {
        assert_eq!(window_title(None), "ひよこビューア");
        assert_eq!(window_title(Some("photo.png")), "photo.png - ひよこビューア");
    }
}
