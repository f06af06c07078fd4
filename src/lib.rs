#![cfg(target_arch = "wasm32")]
use crate::constants::{DEFAULT_CANVAS_ID, PRESET_KEY};
use crate::params::WaveParams;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod animation;
mod constants;
mod dom;
mod energy;
mod events;
mod frame;
mod input;
mod params;
mod render;
mod sampler;
mod surface;

thread_local! {
    // Handle created by the module start hook for `#waves`; lives for the page.
    static AUTO_HANDLE: RefCell<Option<WavesHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("resonance-waves starting");

    if let Err(e) = auto_attach() {
        log::error!("[waves] init error: {:?}", e);
    }
    Ok(())
}

fn auto_attach() -> anyhow::Result<()> {
    let Some(canvas) = dom::find_canvas(DEFAULT_CANVAS_ID)? else {
        log::info!("[waves] no #{} canvas on this page; staying idle", DEFAULT_CANVAS_ID);
        return Ok(());
    };
    let handle = WavesHandle::attach(canvas)?;
    handle.start();
    AUTO_HANDLE.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}

fn params_for(canvas: &web::HtmlCanvasElement) -> WaveParams {
    match dom::data_attribute(canvas, PRESET_KEY) {
        None => WaveParams::default(),
        Some(name) => WaveParams::from_preset_name(&name).unwrap_or_else(|| {
            log::warn!("[waves] unknown preset {:?}; using default", name);
            WaveParams::default()
        }),
    }
}

/// Running wave animation bound to one canvas.
///
/// Freeing the handle stops the loop, removes its listeners and releases the
/// canvas so it can be attached again.
#[wasm_bindgen]
pub struct WavesHandle {
    animation: animation::AnimationLoop,
    _pointer: events::PointerListeners,
    _resize: events::ResizeListener,
}

#[wasm_bindgen]
impl WavesHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WavesHandle, JsValue> {
        let canvas = dom::find_canvas(canvas_id)
            .and_then(|c| c.ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id)))
            .map_err(to_js)?;
        Self::attach(canvas).map_err(to_js)
    }

    pub fn start(&self) {
        self.animation.start();
    }

    pub fn stop(&self) {
        self.animation.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation.is_running()
    }
}

impl WavesHandle {
    fn attach(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        if !dom::claim_canvas(&canvas) {
            anyhow::bail!("canvas #{} is already initialized", canvas.id());
        }
        match Self::build(&canvas) {
            Ok(handle) => Ok(handle),
            Err(e) => {
                dom::release_canvas(&canvas);
                Err(e)
            }
        }
    }

    fn build(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(canvas)?;
        let params = params_for(canvas);
        let seed: u64 = rand::thread_rng().gen();
        let driver = frame::FrameDriver::new(params, seed, dom::performance_now())?;
        log::info!(
            "[waves] attached to #{} lines={} samples={}",
            canvas.id(),
            driver.params().line_count,
            driver.params().sample_count
        );

        let resize = events::wire_resize(canvas, &ctx);
        let pointer = Rc::new(RefCell::new(input::PointerState::default()));
        let pointer_listeners = events::wire_pointer(canvas, pointer.clone());
        let animation = animation::AnimationLoop::new(
            driver,
            render::Canvas2dSurface::new(ctx),
            canvas.clone(),
            pointer,
        );
        Ok(Self {
            animation,
            _pointer: pointer_listeners,
            _resize: resize,
        })
    }
}

impl Drop for WavesHandle {
    fn drop(&mut self) {
        self.animation.stop();
        dom::release_canvas(self.animation.canvas());
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}
