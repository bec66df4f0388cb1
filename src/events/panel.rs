use super::InputWiring;
use crate::constants::*;
use crate::dom;
use crate::loader;
use crate::ui;
use gallery_core::decode::decode_rgba;
use gallery_core::{ActionKind, ActionOutcome};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const PANEL_BUTTONS: [(&str, ActionKind); 5] = [
    (INFO_BUTTON_ID, ActionKind::Info),
    (VIDEO_BUTTON_ID, ActionKind::Video),
    (DATA_BUTTON_ID, ActionKind::Data),
    (UPLOAD_BUTTON_ID, ActionKind::Upload),
    (EDIT_BUTTON_ID, ActionKind::EditDescription),
];

fn run_action(w: &InputWiring, kind: ActionKind) {
    let now = w.now_sec();
    let result = w.session.borrow_mut().trigger_action(kind, now);
    match result {
        Ok(ActionOutcome::Nothing) => {}
        Ok(ActionOutcome::OpenUrl(url)) => dom::open_in_new_tab(&url),
        Ok(ActionOutcome::Download(url)) => dom::download(&w.document, &url),
        Ok(ActionOutcome::OpenFilePicker) => {
            if let Some(input) = dom::element::<web::HtmlInputElement>(&w.document, FILE_INPUT_ID) {
                input.click();
            }
        }
        Ok(ActionOutcome::BeginEdit) => {
            let text = {
                let session = w.session.borrow();
                session
                    .focused()
                    .and_then(|id| session.store().get(id))
                    .map(|e| e.metadata.description.clone())
                    .unwrap_or_default()
            };
            ui::show_editor(&w.document, &text);
        }
        Err(e) => dom::alert(&e.to_string()),
    }
}

pub fn wire_panel_buttons(w: &InputWiring) {
    for (id, kind) in PANEL_BUTTONS {
        let w2 = w.clone();
        dom::add_click_listener(&w.document, id, move || run_action(&w2, kind));
    }
}

pub fn wire_editor_buttons(w: &InputWiring) {
    let w_save = w.clone();
    dom::add_click_listener(&w.document, EDITOR_SAVE_ID, move || {
        let text = ui::editor_text(&w_save.document);
        let now = w_save.now_sec();
        let result = w_save.session.borrow_mut().save_edit(&text, now);
        match result {
            Ok(()) => ui::hide_editor(&w_save.document),
            Err(e) => {
                log::error!("[store] {}", e);
                dom::alert(&e.to_string());
            }
        }
    });

    let w_cancel = w.clone();
    dom::add_click_listener(&w.document, EDITOR_CANCEL_ID, move || {
        let now = w_cancel.now_sec();
        w_cancel.session.borrow_mut().cancel_edit(now);
        ui::hide_editor(&w_cancel.document);
    });
}

/// Validate, read and decode the chosen file, then queue it for the frame
/// loop. Every failure alerts and leaves the painting untouched.
pub fn wire_upload_input(w: &InputWiring) {
    let Some(input) = dom::element::<web::HtmlInputElement>(&w.document, FILE_INPUT_ID) else {
        log::warn!("[upload] missing #{}", FILE_INPUT_ID);
        return;
    };
    let w = w.clone();
    let input_for_listener = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // allow choosing the same file again
        input.set_value("");

        let checked = w
            .session
            .borrow()
            .check_upload(&file.type_(), file.size() as u64);
        let id = match checked {
            Ok(id) => id,
            Err(e) => {
                log::warn!("[upload] rejected {}: {}", file.name(), e);
                dom::alert(&e.to_string());
                return;
            }
        };

        let uploads = w.uploads.clone();
        spawn_local(async move {
            let decoded = match loader::read_file(&file).await {
                Ok(bytes) => decode_rgba(&bytes).map_err(anyhow::Error::from),
                Err(e) => Err(e),
            };
            match decoded {
                Ok(img) => {
                    log::info!("[upload] decoded {} ({}x{})", file.name(), img.width, img.height);
                    uploads.borrow_mut().push((id, img));
                }
                Err(e) => {
                    log::error!("[upload] {:#}", e);
                    dom::alert(&e.to_string());
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    _ = input_for_listener.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
