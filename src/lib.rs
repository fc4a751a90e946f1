#![cfg(target_arch = "wasm32")]
use crate::dom::CanvasSurface;
use crate::events::CanvasListeners;
use crate::frame::{FrameContext, FrameLoop, RafScheduler};
use crate::overlay::DomHotspot;
use pano_core::{HotspotProjector, LookControls, PerspectiveCamera};
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
mod overlay;

pub(crate) type Controls = LookControls<PerspectiveCamera, CanvasSurface, RafScheduler>;

/// Everything that has to be torn down together.
struct App {
    controls: Rc<RefCell<Controls>>,
    listeners: CanvasListeners,
    frame_ctx: Rc<RefCell<FrameContext>>,
    frame_loop: FrameLoop,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pano-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Detach input, cancel pending inertia and hide every hotspot.
#[wasm_bindgen]
pub fn stop() {
    let Some(app) = APP.with(|a| a.borrow_mut().take()) else {
        return;
    };
    let App {
        controls,
        mut listeners,
        frame_ctx,
        frame_loop,
    } = app;
    frame_loop.stop();
    {
        let mut c = controls.borrow_mut();
        c.unmount(&mut listeners);
        c.cancel_frame();
    }
    let hidden = frame_ctx.borrow_mut().projector.clear();
    log::info!("pano-web stopped; {} hotspots removed", hidden.len());
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let surface = CanvasSurface::new(canvas.clone());
    let css_size = surface.css_size();
    let mut camera = PerspectiveCamera::default();
    camera.set_aspect(css_size.x, css_size.y);

    let scheduler = RafScheduler::default();
    let controls = Rc::new(RefCell::new(LookControls::new(
        camera,
        surface,
        scheduler.clone(),
    )));
    scheduler.bind(Rc::downgrade(&controls));

    let mut listeners = CanvasListeners::new(canvas, Rc::downgrade(&controls));
    controls.borrow_mut().mount(&mut listeners);

    let mut projector: HotspotProjector<DomHotspot> = HotspotProjector::new();
    for anchor in dom::query_hotspots(&document) {
        projector.add(anchor);
    }
    log::info!("[hotspot] {} anchors from markup", projector.len());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        controls: controls.clone(),
        projector,
        last_css_size: css_size,
    }));
    let frame_loop = frame::start_loop(frame_ctx.clone());

    APP.with(|a| {
        *a.borrow_mut() = Some(App {
            controls,
            listeners,
            frame_ctx,
            frame_loop,
        })
    });
    Ok(())
}
