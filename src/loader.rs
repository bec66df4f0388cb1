use gallery_core::decode::{decode_rgba, DecodedImage};
use gallery_core::{parse_feed, FeedEntry};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_response(url: &str) -> anyhow::Result<web::Response> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let response: web::Response = value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {} returned {:?}", url, e))?;
    if !response.ok() {
        anyhow::bail!("fetch {} returned HTTP {}", url, response.status());
    }
    Ok(response)
}

pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let response = fetch_response(url).await?;
    let promise = response
        .text()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("reading {} failed: {:?}", url, e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("{} is not text", url))
}

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let response = fetch_response(url).await?;
    let promise = response
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("reading {} failed: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Read a user-selected file into memory.
pub async fn read_file(file: &web::File) -> anyhow::Result<Vec<u8>> {
    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| anyhow::anyhow!("reading {} failed: {:?}", file.name(), e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_image(url: &str) -> anyhow::Result<DecodedImage> {
    let bytes = fetch_bytes(url).await?;
    Ok(decode_rgba(&bytes)?)
}

/// Fetch the feed and every image it references. A feed that cannot be
/// fetched yields no entries; an image that fails leaves its slot empty.
pub async fn load_gallery(feed_url: &str) -> Vec<(FeedEntry, Option<DecodedImage>)> {
    let body = match fetch_text(feed_url).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("[feed] {:#}", e);
            return Vec::new();
        }
    };
    let entries = parse_feed(&body);
    log::info!("[feed] {} entries in {}", entries.len(), feed_url);

    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        let image = match entry.image_url() {
            Some(url) => match load_image(url).await {
                Ok(img) => Some(img),
                Err(e) => {
                    log::warn!("[feed] image {} ({}) unavailable: {:#}", i, url, e);
                    None
                }
            },
            None => None,
        };
        out.push((entry, image));
    }
    out
}
