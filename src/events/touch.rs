use crate::Controls;
use pano_core::{ListenerKind, SurfaceEvent, TouchPoint};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TouchBatch = SmallVec<[TouchPoint; 4]>;

fn changed_points(ev: &web::TouchEvent) -> TouchBatch {
    let list = ev.changed_touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint::new(t.identifier(), t.client_x() as f32, t.client_y() as f32))
        .collect()
}

pub(super) fn listener(
    kind: ListenerKind,
    controls: Weak<RefCell<Controls>>,
) -> Closure<dyn FnMut(web::Event)> {
    Closure::wrap(Box::new(move |ev: web::Event| {
        // keep the browser from scrolling or zooming under the drag
        ev.prevent_default();
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let points = changed_points(ev);
        let event = match kind {
            ListenerKind::TouchStart => SurfaceEvent::TouchStart(&points),
            ListenerKind::TouchEnd => SurfaceEvent::TouchEnd(&points),
            ListenerKind::TouchMove => SurfaceEvent::TouchMove(&points),
            ListenerKind::TouchCancel => SurfaceEvent::TouchCancel(&points),
            _ => return,
        };
        super::deliver(&controls, event);
    }) as Box<dyn FnMut(_)>)
}
