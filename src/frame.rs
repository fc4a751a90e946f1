use crate::overlay::DomHotspot;
use crate::Controls;
use pano_core::{FrameScheduler, HotspotProjector, TickToken};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler for the inertia loop.
///
/// The callback is bound after the controls exist, since it has to call back
/// into them. Only one request is ever outstanding, so the last issued id is
/// the one that fires.
#[derive(Clone, Default)]
pub struct RafScheduler {
    callback: FrameCallback,
    last: Rc<Cell<Option<TickToken>>>,
}

impl RafScheduler {
    pub fn bind(&self, controls: Weak<RefCell<Controls>>) {
        let last = self.last.clone();
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(token) = last.take() else {
                return;
            };
            if let Some(c) = controls.upgrade() {
                c.borrow_mut().on_frame(token);
            }
        }) as Box<dyn FnMut()>));
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule_tick(&mut self) -> Option<TickToken> {
        let requested = match (web::window(), self.callback.borrow().as_ref()) {
            (Some(w), Some(cb)) => w
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| log::error!("requestAnimationFrame failed: {:?}", e))
                .ok(),
            _ => {
                log::error!("requestAnimationFrame unavailable: scheduler not bound");
                None
            }
        };
        let token = requested.map(TickToken);
        self.last.set(token);
        token
    }

    fn cancel_tick(&mut self, token: TickToken) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(token.0);
        }
        if self.last.get() == Some(token) {
            self.last.set(None);
        }
    }
}

pub struct FrameContext {
    pub controls: Rc<RefCell<Controls>>,
    pub projector: HotspotProjector<DomHotspot>,
    pub last_css_size: glam::Vec2,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let Ok(mut controls) = self.controls.try_borrow_mut() else {
            return;
        };
        let css_size = controls.surface().css_size();
        if css_size != self.last_css_size {
            controls.camera_mut().set_aspect(css_size.x, css_size.y);
            self.last_css_size = css_size;
        }
        self.projector.update(controls.camera(), css_size);
    }
}

/// Handle to the per-frame hotspot loop. Stopping (or dropping) it cancels
/// the outstanding frame and frees the callback, which releases the
/// [`FrameContext`] it captured.
pub struct FrameLoop {
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        // cancel first: the browser must not call a dropped closure
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.callback.borrow_mut().take().is_some() {
            log::debug!("[frame] loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(callback: &FrameCallback, pending: &Cell<Option<i32>>) {
    let id = match (web::window(), callback.borrow().as_ref()) {
        (Some(w), Some(cb)) => w
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| log::error!("requestAnimationFrame failed: {:?}", e))
            .ok(),
        _ => None,
    };
    pending.set(id);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);
    FrameLoop {
        callback: tick,
        pending,
    }
}
