#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use gallery_core::{GalleryConfig, GallerySession, ImageInfo};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Feed location and layout come from the container's data attributes.
    let container = document.get_element_by_id(CONTAINER_ID);
    let feed_attr = container.as_ref().and_then(|c| c.get_attribute(FEED_ATTRIBUTE));
    let layout_attr = container.as_ref().and_then(|c| c.get_attribute(LAYOUT_ATTRIBUTE));
    let feed_url = input::resolve_feed_path(feed_attr.as_deref(), DEFAULT_FEED_PATH).to_string();

    let config = GalleryConfig {
        layout: input::layout_for(layout_attr.as_deref()),
        ..GalleryConfig::default()
    };
    let session = Rc::new(RefCell::new(GallerySession::new(config)));
    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        session: session.clone(),
        uploads: Rc::new(RefCell::new(Vec::new())),
        clock: Instant::now(),
    };

    // Size the canvas before WebGPU configures its surface.
    events::wire_canvas_resize(&wiring);

    let mut gpu = frame::init_gpu(&canvas).await;

    let loaded = loader::load_gallery(&feed_url).await;
    let items = {
        let mut s = session.borrow_mut();
        loaded
            .into_iter()
            .map(|(entry, image)| {
                let info = image.and_then(|img| {
                    let handle = s.new_texture_handle();
                    let info = ImageInfo {
                        texture: handle,
                        width: img.width,
                        height: img.height,
                    };
                    match gpu.as_mut().map(|g| g.upload_texture(handle, img)) {
                        Some(Err(e)) => {
                            log::error!("[feed] texture upload failed: {}", e);
                            None
                        }
                        _ => Some(info),
                    }
                });
                (entry, info)
            })
            .collect::<Vec<_>>()
    };
    session.borrow_mut().populate(items);

    events::wire_input_handlers(&wiring);
    events::wire_global_keydown(&wiring);
    events::wire_panel_buttons(&wiring);
    events::wire_editor_buttons(&wiring);
    events::wire_upload_input(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        canvas,
        document,
        gpu,
        uploads: wiring.uploads.clone(),
        clock: wiring.clock,
        ui: ui::UiCache::default(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
