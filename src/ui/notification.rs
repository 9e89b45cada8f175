use crate::config::APP_TITLE;
use crate::services::Notifier;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Shows errors in a native modal message box.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageDialogNotifier;

impl Notifier for MessageDialogNotifier {
    fn notify_error(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(APP_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
