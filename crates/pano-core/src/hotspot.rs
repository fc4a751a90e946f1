//! Screen-space placement of hotspot markers.
//!
//! Each frame the projector checks whether an anchor is in front of the
//! camera, projects it to normalized device coordinates and converts those to
//! pixel offsets inside the surface. The element itself is whatever the host
//! uses as an overlay (a DOM node on the web).

use crate::camera::CameraRig;
use crate::constants::NEAR_CENTER_RADIUS;
use glam::{Vec2, Vec3};

/// Overlay element the projector drives.
pub trait HotspotElement {
    fn set_visible(&mut self, visible: bool);
    fn set_near_center(&mut self, near_center: bool);
    /// Absolute pixel offset from the surface's top-left corner.
    fn set_position(&mut self, left: f32, top: f32);
}

/// Fixed 3D point of interest and the element that marks it.
#[derive(Clone, Debug)]
pub struct Anchor<E> {
    position: Vec3,
    element: E,
}

impl<E> Anchor<E> {
    pub fn new(position: Vec3, element: E) -> Self {
        Self { position, element }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn element(&self) -> &E {
        &self.element
    }
}

/// Stamps out anchors that share one template element.
#[derive(Clone, Debug)]
pub struct HotspotPrefab<E> {
    template: E,
}

impl<E: Clone> HotspotPrefab<E> {
    pub fn new(template: E) -> Self {
        Self { template }
    }

    pub fn create(&self, position: Vec3) -> Anchor<E> {
        Anchor::new(position, self.template.clone())
    }
}

/// Result of placing one anchor for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Hidden,
    Visible {
        left: f32,
        top: f32,
        near_center: bool,
    },
}

/// Map NDC (`[-1, 1]`, y up) to pixels (`[0, size]`, y down).
#[inline]
pub fn ndc_to_pixels(ndc: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) / 2.0 * size.x,
        (-ndc.y + 1.0) / 2.0 * size.y,
    )
}

#[inline]
pub fn is_near_center(ndc: Vec2, radius: f32) -> bool {
    ndc.length() < radius
}

/// Place a single anchor against a camera whose view direction is `forward`.
pub fn place_anchor<C: CameraRig + ?Sized>(
    camera: &C,
    forward: Vec3,
    position: Vec3,
    size: Vec2,
    near_center_radius: f32,
) -> Placement {
    if position.dot(forward) <= 0.0 {
        return Placement::Hidden;
    }
    // depth plays no part in 2D placement
    let ndc = camera.project(position).truncate();
    let px = ndc_to_pixels(ndc, size);
    Placement::Visible {
        left: px.x,
        top: px.y,
        near_center: is_near_center(ndc, near_center_radius),
    }
}

pub struct HotspotProjector<E> {
    anchors: Vec<Anchor<E>>,
    near_center_radius: f32,
}

impl<E> Default for HotspotProjector<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> HotspotProjector<E> {
    pub fn new() -> Self {
        Self::with_near_center_radius(NEAR_CENTER_RADIUS)
    }

    pub fn with_near_center_radius(near_center_radius: f32) -> Self {
        Self {
            anchors: Vec::new(),
            near_center_radius,
        }
    }

    #[inline]
    pub fn near_center_radius(&self) -> f32 {
        self.near_center_radius
    }

    pub fn add(&mut self, anchor: Anchor<E>) {
        self.anchors.push(anchor);
    }

    #[inline]
    pub fn anchors(&self) -> &[Anchor<E>] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

impl<E: HotspotElement> HotspotProjector<E> {
    /// Reposition every anchor's element for the current camera.
    pub fn update<C: CameraRig + ?Sized>(&mut self, camera: &C, size: Vec2) {
        let forward = camera.forward();
        for anchor in &mut self.anchors {
            match place_anchor(camera, forward, anchor.position, size, self.near_center_radius) {
                Placement::Hidden => anchor.element.set_visible(false),
                Placement::Visible {
                    left,
                    top,
                    near_center,
                } => {
                    anchor.element.set_visible(true);
                    anchor.element.set_near_center(near_center);
                    anchor.element.set_position(left, top);
                }
            }
        }
    }

    /// Hide and drop every anchor, returning the elements to the caller.
    pub fn clear(&mut self) -> Vec<E> {
        self.anchors
            .drain(..)
            .map(|mut anchor| {
                anchor.element.set_visible(false);
                anchor.element
            })
            .collect()
    }
}
