use crate::dom;
use crate::frame::FrameDriver;
use crate::input::PointerState;
use crate::render::Canvas2dSurface;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    driver: RefCell<FrameDriver>,
    surface: RefCell<Canvas2dSurface>,
    canvas: web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// requestAnimationFrame loop around a `FrameDriver`, with explicit start/stop.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn new(
        driver: FrameDriver,
        surface: Canvas2dSurface,
        canvas: web::HtmlCanvasElement,
        pointer: Rc<RefCell<PointerState>>,
    ) -> Self {
        let inner = Rc::new(LoopInner {
            driver: RefCell::new(driver),
            surface: RefCell::new(surface),
            canvas,
            pointer,
            running: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        // Weak so the closure does not keep the loop alive on its own.
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if !inner.running.get() {
                return;
            }
            inner.frame(now_ms);
            inner.schedule();
        }) as Box<dyn FnMut(f64)>));
        Self { inner }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        self.inner.driver.borrow_mut().resume(dom::performance_now());
        self.inner.schedule();
        log::info!("[loop] started");
    }

    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.inner.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[loop] stopped");
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.inner.canvas
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.tick.borrow_mut().take();
    }
}

impl LoopInner {
    fn frame(&self, now_ms: f64) {
        let size = dom::css_size(&self.canvas);
        let pointer = *self.pointer.borrow();
        let mut surface = self.surface.borrow_mut();
        self.driver
            .borrow_mut()
            .step(now_ms, pointer, size, &mut *surface);
    }

    fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
        }
    }
}
