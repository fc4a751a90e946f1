use glam::Vec2;

/// One entry of a touch event's changed-touches list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub position: Vec2,
}

impl TouchPoint {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }
}

/// The single finger currently driving the drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedTouch {
    pub id: i32,
    pub position: Vec2,
}

/// Drag bookkeeping shared by mouse and touch input.
///
/// Every method that can produce rotation returns the pixel delta as
/// `previous - current`; the caller maps it to radians. Positions are
/// updated whether or not a delta is produced.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    mouse_dragging: bool,
    mouse_position: Vec2,
    touch: Option<TrackedTouch>,
}

impl DragSession {
    #[inline]
    pub fn mouse_dragging(&self) -> bool {
        self.mouse_dragging
    }

    #[inline]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    #[inline]
    pub fn tracked_touch(&self) -> Option<TrackedTouch> {
        self.touch
    }

    /// True while either the mouse button is held or a finger is tracked.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.mouse_dragging || self.touch.is_some()
    }

    pub fn mouse_down(&mut self, position: Vec2) {
        self.mouse_dragging = true;
        self.mouse_position = position;
    }

    pub fn mouse_up(&mut self, position: Vec2) {
        self.mouse_dragging = false;
        self.mouse_position = position;
    }

    pub fn mouse_move(&mut self, position: Vec2) -> Option<Vec2> {
        let delta = self.mouse_position - position;
        self.mouse_position = position;
        self.mouse_dragging.then_some(delta)
    }

    /// Ends the drag and returns the last delta if the button was still held
    /// when the pointer left the surface.
    pub fn mouse_leave(&mut self, position: Vec2) -> Option<Vec2> {
        let was_dragging = std::mem::replace(&mut self.mouse_dragging, false);
        let delta = self.mouse_position - position;
        self.mouse_position = position;
        was_dragging.then_some(delta)
    }

    /// Adopt the first changed touch if no finger is tracked yet.
    ///
    /// Returns `false` when the batch is empty or another touch already owns
    /// the drag.
    pub fn touch_start(&mut self, changed: &[TouchPoint]) -> bool {
        if self.touch.is_some() {
            return false;
        }
        let Some(first) = changed.first() else {
            return false;
        };
        self.touch = Some(TrackedTouch {
            id: first.id,
            position: first.position,
        });
        true
    }

    /// Delta for `point` if it is the tracked finger, `None` otherwise.
    ///
    /// Callers stop scanning a batch at the first `None`.
    pub fn touch_move(&mut self, point: &TouchPoint) -> Option<Vec2> {
        let tracked = self.touch.as_mut().filter(|t| t.id == point.id)?;
        let delta = tracked.position - point.position;
        tracked.position = point.position;
        Some(delta)
    }

    /// Like [`touch_move`](Self::touch_move) but releases the finger.
    pub fn touch_end(&mut self, point: &TouchPoint) -> Option<Vec2> {
        let delta = self.touch_move(point)?;
        self.touch = None;
        Some(delta)
    }

    /// Releases the finger without producing a delta. Returns whether
    /// `point` was the tracked one.
    pub fn touch_cancel(&mut self, point: &TouchPoint) -> bool {
        match self.touch {
            Some(t) if t.id == point.id => {
                self.touch = None;
                true
            }
            _ => false,
        }
    }
}
