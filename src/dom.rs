use crate::constants::{HOTSPOT_ATTR_X, HOTSPOT_ATTR_Y, HOTSPOT_ATTR_Z, HOTSPOT_SELECTOR};
use crate::overlay::DomHotspot;
use glam::Vec2;
use pano_core::{parse_anchor_position, Anchor, RenderSurface};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let w_px = canvas.offset_width().max(1) as u32;
    let h_px = canvas.offset_height().max(1) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

/// Canvas as a render surface: backing-store pixel size.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    /// Layout size in CSS pixels, the space hotspot offsets are written in.
    pub fn css_size(&self) -> Vec2 {
        Vec2::new(
            self.canvas.offset_width() as f32,
            self.canvas.offset_height() as f32,
        )
    }
}

impl RenderSurface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }
}

/// Collect every `[data-pointer]` element as an anchor. Elements with bad
/// coordinates are skipped.
pub fn query_hotspots(document: &web::Document) -> Vec<Anchor<DomHotspot>> {
    let nodes = match document.query_selector_all(HOTSPOT_SELECTOR) {
        Ok(n) => n,
        Err(e) => {
            log::error!("hotspot query failed: {:?}", e);
            return Vec::new();
        }
    };
    let mut anchors = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let x = el.get_attribute(HOTSPOT_ATTR_X);
        let y = el.get_attribute(HOTSPOT_ATTR_Y);
        let z = el.get_attribute(HOTSPOT_ATTR_Z);
        match parse_anchor_position(x.as_deref(), y.as_deref(), z.as_deref()) {
            Ok(pos) => anchors.push(Anchor::new(pos, DomHotspot::new(el))),
            Err(e) => log::warn!("[hotspot] skipping element {}: {}", i, e),
        }
    }
    anchors
}
