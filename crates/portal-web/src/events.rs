use portal_core::{OrbitCamera, ORBIT_DRAG_SPEED};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    last_x: f32,
    last_y: f32,
}

/// Pointer drag on the canvas steers the orbit rig. Dragging right swings the
/// camera left around the target; dragging down raises it.
pub fn install_pointer_handlers(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitCamera>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ds = drag.borrow_mut();
            ds.active = true;
            ds.last_x = ev.client_x() as f32;
            ds.last_y = ev.client_y() as f32;
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    {
        let drag = drag.clone();
        let orbit = orbit.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ds = drag.borrow_mut();
            if !ds.active {
                return;
            }
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let dx = x - ds.last_x;
            let dy = y - ds.last_y;
            ds.last_x = x;
            ds.last_y = y;
            orbit
                .borrow_mut()
                .rotate(-dx * ORBIT_DRAG_SPEED, dy * ORBIT_DRAG_SPEED);
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    for end_event in ["pointerup", "pointerleave"] {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag.borrow_mut().active = false;
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback(end_event, closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
}
