use super::InputWiring;
use crate::ui;
use gallery_core::movement::move_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    let key = ev.key();
    let now = w.now_sec();
    let mut session = w.session.borrow_mut();

    if session.focus().is_editing() {
        // the textarea owns the keyboard; only Escape leaves it
        if key == "Escape" {
            session.cancel_edit(now);
            ui::hide_editor(&w.document);
        }
        return;
    }
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let consumed = session.key_down(&key, now);
    if consumed && move_for_key(&key).is_some() {
        // arrows would otherwise scroll the page
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(w: &InputWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
