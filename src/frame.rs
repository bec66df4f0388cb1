use crate::dom;
use crate::events::UploadQueue;
use crate::render;
use crate::ui;
use gallery_core::{GallerySession, ImageInfo};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<GallerySession>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState>,
    pub uploads: UploadQueue,
    pub clock: Instant,
    pub ui: ui::UiCache,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.elapsed().as_secs_f64();
        let shared = self.session.clone();
        let mut session = shared.borrow_mut();
        session.tick(now);

        self.apply_uploads(&mut session);

        if let Some(gpu) = self.gpu.as_mut() {
            for handle in session.take_disposed_textures() {
                gpu.drop_texture(handle);
            }
            gpu.sync(&mut session.scene);
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let light = session.headlight();
            match gpu.render(&session.camera, light) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[render] surface lost; reconfiguring next frame");
                }
                Err(e) => log::error!("[render] {:?}", e),
            }
        } else {
            // nothing to draw, still drain so the queues stay bounded
            session.take_disposed_textures();
            session.scene.take_changes();
        }

        self.ui
            .sync(&self.document, session.panel_view(), session.tooltip());
    }

    fn apply_uploads(&mut self, session: &mut GallerySession) {
        let pending: Vec<_> = self.uploads.borrow_mut().drain(..).collect();
        for (id, img) in pending {
            let handle = session.new_texture_handle();
            let info = ImageInfo {
                texture: handle,
                width: img.width,
                height: img.height,
            };
            let result = match self.gpu.as_mut() {
                Some(gpu) => gpu.upload_texture(handle, img),
                None => Ok(()),
            }
            .and_then(|()| session.apply_upload(id, info));
            if let Err(e) = result {
                log::error!("[upload] {}", e);
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.drop_texture(handle);
                }
                dom::alert(&e.to_string());
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[render] WebGPU unavailable: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
