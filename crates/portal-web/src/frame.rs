use crate::render::GpuState;
use instant::Instant;
use portal_core::{FrameClock, OrbitCamera, RenderLoop, ShadingParams, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback needs, shared behind one Rc so the
/// requestAnimationFrame closure and the async asset loader see the same state.
pub struct FrameContext {
    pub gpu: GpuState<'static>,
    pub params: Rc<RefCell<ShadingParams>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub render_loop: Rc<RefCell<RenderLoop>>,
    pub clock: FrameClock,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio() as f32);
        let viewport = Viewport::new(self.canvas.width(), self.canvas.height(), dpr);
        {
            let mut params = self.params.borrow_mut();
            params.set_elapsed(self.clock.elapsed_seconds());
            params.set_pixel_ratio(viewport.device_pixel_ratio);
        }

        let camera = {
            let mut orbit = self.orbit.borrow_mut();
            orbit.set_aspect(viewport.aspect());
            orbit.update(dt);
            orbit.camera()
        };

        self.gpu.resize_if_needed(viewport.width, viewport.height);
        let params = self.params.borrow();
        if let Err(e) = self.gpu.render(&params, &camera) {
            log::error!("render error: {:?}", e);
        }
        drop(params);
        self.render_loop.borrow_mut().advance();
    }
}

/// Drive the frame context from requestAnimationFrame. The callback only
/// reschedules itself while the render loop is running, so `stop` cancels the
/// chain and `start_loop` can be called again to resume it.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = {
            let mut ctx = ctx.borrow_mut();
            ctx.frame();
            ctx.render_loop.borrow().is_running()
        };
        if running {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// The sanity floor keeps the surface alive if the page styles the canvas to
/// zero height for a frame.
pub fn initial_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
