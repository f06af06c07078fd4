use crate::constants::INIT_MARKER_KEY;
use crate::surface::{backing_store, SurfaceSize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `None` when the page has no such element; an error if it is not a canvas.
pub fn find_canvas(id: &str) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(el) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a <canvas>", id))?;
    Ok(Some(canvas))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::TRUE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas
        .get_context_with_context_options("2d", &options)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn css_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let rect = canvas.get_bounding_client_rect();
    SurfaceSize::new(rect.width() as f32, rect.height() as f32)
}

/// Matches the backing store to CSS size * DPR and scales drawing back to CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) {
    let Some(w) = web::window() else {
        return;
    };
    let css = css_size(canvas);
    let store = backing_store(css, w.device_pixel_ratio());
    canvas.set_width(store.width_px);
    canvas.set_height(store.height_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css.width));
    _ = style.set_property("height", &format!("{}px", css.height));
    _ = ctx.set_transform(store.scale, 0.0, 0.0, store.scale, 0.0, 0.0);
    log::debug!(
        "[resize] css={}x{} backing={}x{} dpr={}",
        css.width,
        css.height,
        store.width_px,
        store.height_px,
        store.scale
    );
}

/// Host clock in ms, on the same timeline as animation frame timestamps.
#[inline]
pub fn performance_now() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn data_attribute(canvas: &web::HtmlCanvasElement, key: &str) -> Option<String> {
    canvas.dataset().get(key)
}

/// Marks the canvas as owned. Returns false if something already claimed it.
pub fn claim_canvas(canvas: &web::HtmlCanvasElement) -> bool {
    let dataset = canvas.dataset();
    if dataset.get(INIT_MARKER_KEY).as_deref() == Some("1") {
        return false;
    }
    _ = dataset.set(INIT_MARKER_KEY, "1");
    true
}

pub fn release_canvas(canvas: &web::HtmlCanvasElement) {
    canvas.dataset().delete(INIT_MARKER_KEY);
}
