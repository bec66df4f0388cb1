use gallery_core::decode::DecodedImage;
use gallery_core::{EntityId, GallerySession};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod keyboard;
mod panel;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use panel::{wire_editor_buttons, wire_panel_buttons, wire_upload_input};
pub use pointer::{wire_canvas_resize, wire_input_handlers};

/// Decoded upload waiting for the frame loop, which owns the GPU.
pub type UploadQueue = Rc<RefCell<Vec<(EntityId, DecodedImage)>>>;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub session: Rc<RefCell<GallerySession>>,
    pub uploads: UploadQueue,
    pub clock: Instant,
}

impl InputWiring {
    #[inline]
    pub fn now_sec(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }
}
