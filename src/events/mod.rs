pub mod pointer;
pub mod touch;

use crate::Controls;
use pano_core::{ListenerHost, ListenerId, ListenerKind, ListenerTable, SurfaceEvent};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type EventClosure = Closure<dyn FnMut(web::Event)>;

/// Canvas-backed listener host. Each attached listener owns its closure so
/// `detach` can hand the very same function back to the DOM.
pub struct CanvasListeners {
    canvas: web::HtmlCanvasElement,
    controls: Weak<RefCell<Controls>>,
    table: ListenerTable<EventClosure>,
}

impl CanvasListeners {
    pub fn new(canvas: web::HtmlCanvasElement, controls: Weak<RefCell<Controls>>) -> Self {
        Self {
            canvas,
            controls,
            table: ListenerTable::default(),
        }
    }
}

impl ListenerHost for CanvasListeners {
    fn attach(&mut self, kind: ListenerKind) -> ListenerId {
        let closure = if kind.is_touch() {
            touch::listener(kind, self.controls.clone())
        } else {
            pointer::listener(kind, self.controls.clone())
        };
        let target: &web::EventTarget = self.canvas.as_ref();
        let attached = if kind.is_touch() {
            // touch listeners must be non-passive or preventDefault is ignored
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(false);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind.event_name(),
                closure.as_ref().unchecked_ref(),
                &opts,
            )
        } else {
            target.add_event_listener_with_callback(kind.event_name(), closure.as_ref().unchecked_ref())
        };
        if let Err(e) = attached {
            log::error!("[events] attach {} failed: {:?}", kind.event_name(), e);
        }
        self.table.insert(kind, closure)
    }

    fn detach(&mut self, id: ListenerId) {
        if let Some((kind, closure)) = self.table.remove(id) {
            _ = self.canvas.remove_event_listener_with_callback(
                kind.event_name(),
                closure.as_ref().unchecked_ref(),
            );
        }
    }
}

fn deliver(controls: &Weak<RefCell<Controls>>, event: SurfaceEvent<'_>) {
    let Some(controls) = controls.upgrade() else {
        return;
    };
    // re-entrant events are dropped rather than panicking on the borrow
    match controls.try_borrow_mut() {
        Ok(mut c) => event.dispatch(&mut *c),
        Err(_) => log::warn!("[events] {:?} dropped: controls busy", event.kind()),
    };
}
