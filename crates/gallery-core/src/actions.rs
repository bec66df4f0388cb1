//! Contextual actions offered by the panel under a focused painting.

use crate::error::ActionError;
use crate::store::PaintingMetadata;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Info,
    Video,
    Data,
    Upload,
    EditDescription,
}

/// What the front-end should do after an action was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Nothing,
    OpenUrl(String),
    Download(String),
    OpenFilePicker,
    BeginEdit,
}

/// Panel button labels and enabled flags for one painting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelButtons {
    pub info_label: String,
    pub video_enabled: bool,
    pub data_enabled: bool,
}

/// A link counts only when present, non-empty and not the literal "none".
#[inline]
pub fn usable_link(link: Option<&str>) -> Option<&str> {
    link.map(str::trim)
        .filter(|l| !l.is_empty() && !l.eq_ignore_ascii_case("none"))
}

pub fn panel_buttons(meta: &PaintingMetadata) -> PanelButtons {
    PanelButtons {
        info_label: if meta.name.is_empty() {
            "Info".to_string()
        } else {
            meta.name.clone()
        },
        video_enabled: usable_link(meta.video_link.as_deref()).is_some(),
        data_enabled: usable_link(meta.data_link.as_deref()).is_some(),
    }
}

pub fn resolve_action(kind: ActionKind, meta: &PaintingMetadata) -> Result<ActionOutcome, ActionError> {
    match kind {
        ActionKind::Info => Ok(ActionOutcome::Nothing),
        ActionKind::Video => usable_link(meta.video_link.as_deref())
            .map(|l| ActionOutcome::OpenUrl(l.to_string()))
            .ok_or(ActionError::NoVideo),
        ActionKind::Data => usable_link(meta.data_link.as_deref())
            .map(|l| ActionOutcome::Download(l.to_string()))
            .ok_or(ActionError::NoData),
        ActionKind::Upload => Ok(ActionOutcome::OpenFilePicker),
        ActionKind::EditDescription => Ok(ActionOutcome::BeginEdit),
    }
}
