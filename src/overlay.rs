use crate::constants::{DISPLAY_HIDDEN, DISPLAY_VISIBLE, NEAR_CENTER_CLASS};
use pano_core::HotspotElement;
use web_sys as web;

/// DOM node positioned over the canvas for one hotspot.
#[derive(Clone, Debug)]
pub struct DomHotspot {
    el: web::HtmlElement,
}

impl DomHotspot {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }
}

impl HotspotElement for DomHotspot {
    fn set_visible(&mut self, visible: bool) {
        let display = if visible { DISPLAY_VISIBLE } else { DISPLAY_HIDDEN };
        _ = self.el.style().set_property("display", display);
    }

    fn set_near_center(&mut self, near_center: bool) {
        _ = self
            .el
            .class_list()
            .toggle_with_force(NEAR_CENTER_CLASS, near_center);
    }

    fn set_position(&mut self, left: f32, top: f32) {
        let style = self.el.style();
        _ = style.set_property("left", &format!("{}px", left));
        _ = style.set_property("top", &format!("{}px", top));
    }
}
