use glam::Vec3;

pub mod satellite;

pub use satellite::{Orbit, Satellite};

/// Read-only surface the renderer needs from anything drawn as a sphere.
pub trait CelestialBody {
    fn position(&self) -> Vec3;
    fn radius(&self) -> f32;
    fn color(&self) -> Vec3;
}

/// A positioned, colored, sized sphere. The position is the only field that
/// changes after setup (moved by an orbit update).
#[derive(Clone, Copy, Debug)]
pub struct Body {
    position: Vec3,
    radius: f32,
    color: Vec3,
    mass: f32,
}

impl Body {
    /// Color starts white; radius stays zero until the scene assigns one.
    pub fn new(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            radius: 0.0,
            color: Vec3::ONE,
            mass,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Overwrites the color unconditionally; components are not range-checked.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.color = Vec3::new(r, g, b);
    }

    pub fn move_to(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }
}

impl CelestialBody for Body {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn color(&self) -> Vec3 {
        self.color
    }
}
