//! Application configuration constants.

/// Window title shown while nothing is displayed.
pub const APP_TITLE: &str = "ひよこビューア";

/// Label of the image filter offered by the file dialog.
pub const IMAGE_FILTER_NAME: &str = "画像ファイル";

/// Extensions accepted by the image filter of the file dialog.
pub const IMAGE_FILTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Label of the fallback filter that shows every file.
pub const ALL_FILES_FILTER_NAME: &str = "全てのファイル";

pub const ALL_FILES_FILTER_EXTENSIONS: &[&str] = &["*"];

/// Prefix of the notification shown when an image cannot be loaded.
pub const LOAD_ERROR_PREFIX: &str = "画像の読み込みに失敗しました";

/// Hint shown in the display area before the first image is opened.
pub const WELCOME_TEXT: &str = "「開く」ボタン（Ctrl+O）またはドラッグアンドドロップで画像を読み込む";
