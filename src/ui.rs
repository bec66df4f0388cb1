use crate::constants::*;
use crate::dom;
use crate::input;
use gallery_core::{PanelView, Tooltip};
use web_sys as web;

/// Last state written to the DOM, so frames without changes touch nothing.
#[derive(Default)]
pub struct UiCache {
    panel: Option<PanelView>,
    tooltip: Option<Tooltip>,
}

impl UiCache {
    pub fn sync(
        &mut self,
        document: &web::Document,
        panel: Option<PanelView>,
        tooltip: Option<&Tooltip>,
    ) {
        if self.tooltip.as_ref() != tooltip {
            sync_tooltip(document, tooltip);
            self.tooltip = tooltip.cloned();
        }
        if self.panel != panel {
            sync_panel(document, panel.as_ref(), self.panel.as_ref());
            self.panel = panel;
        }
    }
}

fn sync_tooltip(document: &web::Document, tooltip: Option<&Tooltip>) {
    match tooltip {
        Some(t) => {
            dom::set_text(document, TOOLTIP_ID, &t.text);
            dom::set_style(document, TOOLTIP_ID, &input::tooltip_css(t.position));
        }
        None => dom::set_style(document, TOOLTIP_ID, input::HIDDEN_CSS),
    }
}

fn sync_panel(document: &web::Document, panel: Option<&PanelView>, previous: Option<&PanelView>) {
    let Some(view) = panel else {
        dom::set_style(document, PANEL_ID, input::HIDDEN_CSS);
        dom::set_style(document, DESCRIPTION_ID, input::HIDDEN_CSS);
        return;
    };
    dom::set_style(document, PANEL_ID, &input::panel_css(&view.rect, view.opacity));

    // text and buttons only change when the painting or its metadata does
    let content_changed = previous.map_or(true, |p| {
        p.entity != view.entity || p.description != view.description || p.buttons != view.buttons
    });
    if content_changed {
        dom::set_text(document, INFO_BUTTON_ID, &view.buttons.info_label);
        dom::set_disabled_class(document, VIDEO_BUTTON_ID, !view.buttons.video_enabled);
        dom::set_disabled_class(document, DATA_BUTTON_ID, !view.buttons.data_enabled);
        dom::set_text(document, DESCRIPTION_ID, &view.description);
    }
    let below = gallery_core::PanelRect {
        top: view.rect.top + view.rect.height,
        ..view.rect
    };
    dom::set_style(document, DESCRIPTION_ID, &input::panel_css(&below, view.opacity));
}

pub fn show_editor(document: &web::Document, text: &str) {
    if let Some(area) = dom::element::<web::HtmlTextAreaElement>(document, EDITOR_TEXT_ID) {
        area.set_value(text);
        _ = area.focus();
    }
    dom::set_style(document, EDITOR_ID, "display:block");
}

pub fn hide_editor(document: &web::Document) {
    dom::set_style(document, EDITOR_ID, input::HIDDEN_CSS);
}

pub fn editor_text(document: &web::Document) -> String {
    dom::element::<web::HtmlTextAreaElement>(document, EDITOR_TEXT_ID)
        .map(|area| area.value())
        .unwrap_or_default()
}
