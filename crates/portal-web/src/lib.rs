#![cfg(target_arch = "wasm32")]

mod dom;
mod events;
mod fetch;
mod frame;
mod panel;
mod render;

use frame::FrameContext;
use instant::Instant;
use portal_core::{
    assets, BakedTexture, FireflyField, FrameClock, OrbitCamera, RenderLoop, SceneModel,
    ShadingParams,
};
use render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const MODEL_URL: &str = "portal.glb";
const TEXTURE_URL: &str = "baked.jpg";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;
    let canvas = dom::canvas_by_id(&document, "portal-canvas")?;
    dom::sync_canvas_backing_size(&canvas);
    dom::install_resize_listener(&window, &canvas);

    let mut params = ShadingParams::default();
    params.set_pixel_ratio(window.device_pixel_ratio() as f32);
    let params = Rc::new(RefCell::new(params));
    let orbit = Rc::new(RefCell::new(OrbitCamera::new(frame::initial_aspect(
        &canvas,
    ))));
    let render_loop = Rc::new(RefCell::new(RenderLoop::new()));
    let field = FireflyField::generate();

    panel::bind_panel(&document, params.clone());
    events::install_pointer_handlers(&canvas, orbit.clone());

    // Leak a canvas clone to satisfy the 'static lifetime the surface wants.
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = GpuState::new(leaked_canvas, &field).await?;

    let ctx = Rc::new(RefCell::new(FrameContext {
        gpu,
        params,
        orbit,
        render_loop: render_loop.clone(),
        clock: FrameClock::start(),
        canvas,
        last_instant: Instant::now(),
    }));

    // Fireflies render immediately; the model pops in when the fetch lands.
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            match load_assets().await {
                Ok((model, texture)) => {
                    if let Err(e) = ctx.borrow_mut().gpu.upload_scene(&model, &texture) {
                        log::error!("scene upload failed: {e}");
                    }
                }
                Err(e) => log::error!("asset load failed: {e}"),
            }
        });
    }

    render_loop.borrow_mut().start();
    frame::start_loop(ctx);
    Ok(())
}

async fn load_assets() -> anyhow::Result<(SceneModel, BakedTexture)> {
    let glb = fetch::fetch_bytes(MODEL_URL).await?;
    let jpg = fetch::fetch_bytes(TEXTURE_URL).await?;
    let model = assets::parse_scene(&glb)?;
    let texture = assets::parse_texture(&jpg)?;
    log::info!(
        "loaded {} ({} nodes) and {} ({}x{})",
        MODEL_URL,
        model.node_names().count(),
        TEXTURE_URL,
        texture.width,
        texture.height
    );
    Ok((model, texture))
}
