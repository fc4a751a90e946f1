use crate::Controls;
use glam::Vec2;
use pano_core::{ListenerKind, SurfaceEvent};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub(super) fn listener(
    kind: ListenerKind,
    controls: Weak<RefCell<Controls>>,
) -> Closure<dyn FnMut(web::Event)> {
    Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = client_px(ev);
        let event = match kind {
            ListenerKind::MouseDown => SurfaceEvent::MouseDown(pos),
            ListenerKind::MouseUp => SurfaceEvent::MouseUp(pos),
            ListenerKind::MouseMove => SurfaceEvent::MouseMove(pos),
            ListenerKind::MouseLeave => SurfaceEvent::MouseLeave(pos),
            _ => return,
        };
        super::deliver(&controls, event);
    }) as Box<dyn FnMut(_)>)
}
