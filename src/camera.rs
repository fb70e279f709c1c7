use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{Mat4, Vec3};

/// Discrete viewer moves reported by the input layer, one per held key per
/// frame. Up/Down swing the polar angle, Forward/Backward change the
/// distance to the focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Forward,
    Backward,
}

/// Spherical viewer pose around the world origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
}

impl Spherical {
    /// The polar axis points along world Z here, not Y; the orbit plane of
    /// the bodies is Y-up, so the two must not be conflated.
    pub fn to_cartesian(self) -> Vec3 {
        let sin_polar = self.polar.sin();
        Vec3::new(
            self.radius * sin_polar * self.azimuth.cos(),
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
        )
    }
}

/// Keyboard-driven orbit rig: holds the spherical pose and turns held-key
/// moves into pose changes scaled by elapsed time, so movement speed is
/// independent of frame rate.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    pos: Spherical,
    pub angle_speed: f32, // radians per second
    pub zoom_speed: f32,  // distance units per second
}

// Keep the polar angle off the poles and the radius off the origin,
// otherwise look_at degenerates.
const POLAR_MARGIN: f32 = 0.01;
const RADIUS_MIN: f32 = 10.0;
const RADIUS_MAX: f32 = 4500.0;

impl OrbitRig {
    pub fn new(pos: Spherical) -> Self {
        Self {
            pos,
            angle_speed: 0.12,
            zoom_speed: 12.0,
        }
    }

    pub fn pos(&self) -> Spherical {
        self.pos
    }

    /// `dt` must be non-negative.
    pub fn apply_move(&mut self, direction: MoveDirection, dt: f32) {
        debug_assert!(dt >= 0.0, "move delta time must be non-negative");
        match direction {
            MoveDirection::Up => self.pos.polar += self.angle_speed * dt,
            MoveDirection::Down => self.pos.polar -= self.angle_speed * dt,
            MoveDirection::Forward => self.pos.radius -= self.zoom_speed * dt,
            MoveDirection::Backward => self.pos.radius += self.zoom_speed * dt,
        }
        self.pos.polar = self.pos.polar.clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
        self.pos.radius = self.pos.radius.clamp(RADIUS_MIN, RADIUS_MAX);
    }

    pub fn eye(&self) -> Vec3 {
        self.pos.to_cartesian()
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(Spherical {
            radius: 1000.0,
            polar: FRAC_PI_4,
            azimuth: FRAC_PI_2,
        })
    }
}

/// View/projection builder. Purely a function of its own pose plus the
/// viewport aspect ratio; never touches any body.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0_f32.to_radians(),
            znear: 0.1,
            zfar: 5000.0,
        }
    }

    /// `aspect` must be positive; the caller derives it from the current
    /// viewport dimensions.
    pub fn view_projection(&self, aspect: f32) -> CameraTransforms {
        debug_assert!(aspect > 0.0, "aspect ratio must be positive");
        CameraTransforms {
            view: Mat4::look_at_rh(self.eye, self.target, self.up),
            proj: Mat4::perspective_rh(self.fovy, aspect, self.znear, self.zfar),
            eye: self.eye,
        }
    }
}

/// Per-frame transform data handed to the rendering boundary.
#[derive(Clone, Copy, Debug)]
pub struct CameraTransforms {
    pub view: Mat4,
    pub proj: Mat4,
    pub eye: Vec3,
}

impl CameraTransforms {
    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }
}
