//! Render-surface contracts: pixel size and pointer/touch listener plumbing.
//!
//! A host owns the real event source (a canvas on the web) and registers one
//! listener per [`ListenerKind`]. Each listener converts the platform event to
//! a [`SurfaceEvent`] and forwards it to a [`PointerHandler`].

use crate::input::TouchPoint;
use fnv::FnvHashMap;
use glam::Vec2;

/// Pixel dimensions of whatever the panorama is drawn into.
pub trait RenderSurface {
    fn size(&self) -> Vec2;
}

/// Surface with a fixed size, for headless hosts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSurface {
    pub width: f32,
    pub height: f32,
}

impl FixedSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl RenderSurface for FixedSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    MouseDown,
    MouseUp,
    MouseMove,
    MouseLeave,
    TouchStart,
    TouchEnd,
    TouchMove,
    TouchCancel,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 8] = [
        ListenerKind::MouseDown,
        ListenerKind::MouseUp,
        ListenerKind::MouseMove,
        ListenerKind::MouseLeave,
        ListenerKind::TouchStart,
        ListenerKind::TouchEnd,
        ListenerKind::TouchMove,
        ListenerKind::TouchCancel,
    ];

    /// DOM event type name.
    pub fn event_name(self) -> &'static str {
        match self {
            ListenerKind::MouseDown => "mousedown",
            ListenerKind::MouseUp => "mouseup",
            ListenerKind::MouseMove => "mousemove",
            ListenerKind::MouseLeave => "mouseleave",
            ListenerKind::TouchStart => "touchstart",
            ListenerKind::TouchEnd => "touchend",
            ListenerKind::TouchMove => "touchmove",
            ListenerKind::TouchCancel => "touchcancel",
        }
    }

    #[inline]
    pub fn is_touch(self) -> bool {
        matches!(
            self,
            ListenerKind::TouchStart
                | ListenerKind::TouchEnd
                | ListenerKind::TouchMove
                | ListenerKind::TouchCancel
        )
    }
}

/// Receiver side of the surface listeners.
pub trait PointerHandler {
    fn on_mouse_down(&mut self, position: Vec2);
    fn on_mouse_up(&mut self, position: Vec2);
    fn on_mouse_move(&mut self, position: Vec2);
    fn on_mouse_leave(&mut self, position: Vec2);
    fn on_touch_start(&mut self, changed: &[TouchPoint]);
    fn on_touch_end(&mut self, changed: &[TouchPoint]);
    fn on_touch_move(&mut self, changed: &[TouchPoint]);
    fn on_touch_cancel(&mut self, changed: &[TouchPoint]);
}

/// Platform-neutral pointer or touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent<'a> {
    MouseDown(Vec2),
    MouseUp(Vec2),
    MouseMove(Vec2),
    MouseLeave(Vec2),
    TouchStart(&'a [TouchPoint]),
    TouchEnd(&'a [TouchPoint]),
    TouchMove(&'a [TouchPoint]),
    TouchCancel(&'a [TouchPoint]),
}

impl SurfaceEvent<'_> {
    pub fn kind(&self) -> ListenerKind {
        match self {
            SurfaceEvent::MouseDown(_) => ListenerKind::MouseDown,
            SurfaceEvent::MouseUp(_) => ListenerKind::MouseUp,
            SurfaceEvent::MouseMove(_) => ListenerKind::MouseMove,
            SurfaceEvent::MouseLeave(_) => ListenerKind::MouseLeave,
            SurfaceEvent::TouchStart(_) => ListenerKind::TouchStart,
            SurfaceEvent::TouchEnd(_) => ListenerKind::TouchEnd,
            SurfaceEvent::TouchMove(_) => ListenerKind::TouchMove,
            SurfaceEvent::TouchCancel(_) => ListenerKind::TouchCancel,
        }
    }

    pub fn dispatch<H: PointerHandler + ?Sized>(&self, handler: &mut H) {
        match *self {
            SurfaceEvent::MouseDown(p) => handler.on_mouse_down(p),
            SurfaceEvent::MouseUp(p) => handler.on_mouse_up(p),
            SurfaceEvent::MouseMove(p) => handler.on_mouse_move(p),
            SurfaceEvent::MouseLeave(p) => handler.on_mouse_leave(p),
            SurfaceEvent::TouchStart(t) => handler.on_touch_start(t),
            SurfaceEvent::TouchEnd(t) => handler.on_touch_end(t),
            SurfaceEvent::TouchMove(t) => handler.on_touch_move(t),
            SurfaceEvent::TouchCancel(t) => handler.on_touch_cancel(t),
        }
    }
}

/// Handle for one registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

/// Something listeners can be attached to and detached from.
///
/// `detach` must remove exactly the callable `attach` registered for that id.
pub trait ListenerHost {
    fn attach(&mut self, kind: ListenerKind) -> ListenerId;
    fn detach(&mut self, id: ListenerId);
}

/// The set of listeners one owner attached, kept so it can detach them all.
#[derive(Debug, Default)]
pub struct ListenerRegistration {
    ids: Vec<(ListenerKind, ListenerId)>,
}

impl ListenerRegistration {
    pub fn attach_all<H: ListenerHost + ?Sized>(host: &mut H) -> Self {
        let ids = ListenerKind::ALL
            .iter()
            .map(|&kind| (kind, host.attach(kind)))
            .collect();
        Self { ids }
    }

    pub fn detach_all<H: ListenerHost + ?Sized>(self, host: &mut H) {
        for (_, id) in self.ids {
            host.detach(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Id-keyed storage for whatever a host keeps per listener (closures on the
/// web, nothing in tests).
#[derive(Debug)]
pub struct ListenerTable<T> {
    next_id: u32,
    entries: FnvHashMap<ListenerId, (ListenerKind, T)>,
}

impl<T> Default for ListenerTable<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: FnvHashMap::default(),
        }
    }
}

impl<T> ListenerTable<T> {
    pub fn insert(&mut self, kind: ListenerKind, value: T) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.insert(id, (kind, value));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> Option<(ListenerKind, T)> {
        self.entries.remove(&id)
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.entries.values().any(|(k, _)| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
