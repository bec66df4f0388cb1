use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Resize the canvas backing store to its CSS size times the device pixel
/// ratio. Returns the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = glam::Vec2::new(rect.width() as f32, rect.height() as f32);
    if let Some(w) = web::window() {
        let (w_px, h_px) = crate::input::backing_size(css, w.device_pixel_ratio());
        if canvas.width() != w_px || canvas.height() != h_px {
            canvas.set_width(w_px);
            canvas.set_height(h_px);
        }
    }
    css
}

#[inline]
pub fn set_style(document: &web::Document, element_id: &str, css: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.set_attribute("style", css);
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Toggle the `disabled` class so buttons stay clickable for the alert.
#[inline]
pub fn set_disabled_class(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = if disabled {
            cl.add_1("disabled")
        } else {
            cl.remove_1("disabled")
        };
    }
}

#[inline]
pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}

#[inline]
pub fn open_in_new_tab(url: &str) {
    if let Some(w) = web::window() {
        _ = w.open_with_url_and_target(url, "_blank");
    }
}

/// Download through a temporary anchor element.
pub fn download(document: &web::Document, url: &str) {
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlAnchorElement>().ok())
    else {
        return;
    };
    anchor.set_href(url);
    anchor.set_download(url.rsplit('/').next().unwrap_or("download"));
    if let Some(body) = document.body() {
        _ = body.append_child(&anchor);
        anchor.click();
        _ = body.remove_child(&anchor);
    }
}
