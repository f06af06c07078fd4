use crate::input::{self, PointerState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas pointer listeners; removed again when dropped.
pub struct PointerListeners {
    canvas: web::HtmlCanvasElement,
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_leave: Closure<dyn FnMut(web::PointerEvent)>,
}

pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) -> PointerListeners {
    let canvas_move = canvas.clone();
    let pointer_move = pointer.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas_move.get_bounding_client_rect();
        let pos = input::client_to_local(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
        );
        pointer_move.borrow_mut().move_to(pos);
    }) as Box<dyn FnMut(_)>);

    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.borrow_mut().leave();
    }) as Box<dyn FnMut(_)>);

    _ = canvas.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    _ = canvas.add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());

    PointerListeners {
        canvas: canvas.clone(),
        on_move,
        on_leave,
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        _ = self
            .canvas
            .remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        _ = self
            .canvas
            .remove_event_listener_with_callback("pointerleave", self.on_leave.as_ref().unchecked_ref());
    }
}
