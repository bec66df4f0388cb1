// DOM ids, feed location and renderer defaults for the browser front-end.
// Plain data only; the host tests include this file.

// Page structure
pub const CONTAINER_ID: &str = "gallery";
pub const CANVAS_ID: &str = "gallery-canvas";
pub const TOOLTIP_ID: &str = "tooltip";
pub const PANEL_ID: &str = "action-panel";
pub const DESCRIPTION_ID: &str = "description";

// Panel buttons
pub const INFO_BUTTON_ID: &str = "btn-info";
pub const VIDEO_BUTTON_ID: &str = "btn-video";
pub const DATA_BUTTON_ID: &str = "btn-data";
pub const UPLOAD_BUTTON_ID: &str = "btn-upload";
pub const EDIT_BUTTON_ID: &str = "btn-edit";

// Upload and description editor
pub const FILE_INPUT_ID: &str = "upload-input";
pub const EDITOR_ID: &str = "description-editor";
pub const EDITOR_TEXT_ID: &str = "description-text";
pub const EDITOR_SAVE_ID: &str = "edit-save";
pub const EDITOR_CANCEL_ID: &str = "edit-cancel";

// Painting data feed
pub const DEFAULT_FEED_PATH: &str = "data/gallery.json";
pub const FEED_ATTRIBUTE: &str = "data-feed";
pub const LAYOUT_ATTRIBUTE: &str = "data-layout"; // "grid" (default) or "spiral"

// Renderer
pub const CLEAR_COLOR: [f64; 3] = [0.07, 0.07, 0.08];
