//! Error types surfaced to the user or to callers of the store.
//!
//! The `Display` text of the user-facing variants is shown verbatim in a
//! blocking browser alert, so keep it short and human readable.

use crate::store::EntityId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown painting {0:?}")]
    UnknownEntity(EntityId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select an image file (got \"{0}\").")]
    NotAnImage(String),
    #[error("Image is too large ({size} bytes, maximum is {max} bytes).")]
    TooLarge { size: u64, max: u64 },
    #[error("Could not decode the selected image: {0}")]
    Decode(String),
    #[error("No painting is focused.")]
    NothingFocused,
    #[error("The painting was left before the image finished loading.")]
    FocusMoved,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("No video link available.")]
    NoVideo,
    #[error("No drawing process file available.")]
    NoData,
    #[error("No painting is focused.")]
    NothingFocused,
}
