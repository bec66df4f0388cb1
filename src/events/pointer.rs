use super::InputWiring;
use crate::dom;
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn event_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

pub fn wire_input_handlers(w: &InputWiring) {
    wire_pointermove(w);
    wire_pointerdown(w);
    wire_pointerup(w);
    wire_pointerleave(w);
    wire_click(w);
    wire_contextmenu(w);
    wire_wheel(w);
}

/// Keep the backing store and camera aspect in step with the canvas CSS size.
pub fn wire_canvas_resize(w: &InputWiring) {
    let apply = {
        let w = w.clone();
        move || {
            let css = dom::sync_canvas_backing_size(&w.canvas);
            w.session.borrow_mut().resize(css.x, css.y);
        }
    };
    apply();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(apply) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = event_canvas_px(&ev, &w.canvas);
        let now = w.now_sec();
        w.session.borrow_mut().pointer_move(pos, now);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary(ev.button()) {
            return;
        }
        let pos = event_canvas_px(&ev, &w.canvas);
        let now = w.now_sec();
        w.session.borrow_mut().pointer_down(pos, now);
        // keep receiving moves while dragging outside the canvas
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.session.borrow_mut().pointer_up() {
            log::debug!("[pick] orbit drag ended");
        }
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    for event in ["pointerup", "pointercancel"] {
        _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.session.borrow_mut().pointer_leave();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if input::is_secondary(ev.button()) {
            return;
        }
        let pos = event_canvas_px(&ev, &w.canvas);
        let now = w.now_sec();
        if let Some(cmd) = w.session.borrow_mut().click(pos, now) {
            log::info!("[pick] {:?}", cmd);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_contextmenu(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        let pos = event_canvas_px(&ev, &w.canvas);
        let now = w.now_sec();
        match w.session.borrow_mut().context_click(pos, now) {
            Some(id) => log::info!("[pick] placed {:?}", id),
            None => log::debug!("[pick] no wall under pointer"),
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // the wheel zooms the gallery, not the page
        ev.prevent_default();
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        let now = w.now_sec();
        w.session.borrow_mut().wheel(delta, now);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
