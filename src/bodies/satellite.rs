use std::f32::consts::TAU;

use glam::Vec3;
use log::warn;

use super::{Body, CelestialBody};

/// Circular-orbit parameters. The orbit plane is horizontal: the satellite
/// circles in X-Z at the center's altitude.
#[derive(Clone, Copy, Debug)]
pub struct Orbit {
    center: Vec3,
    radius: f32,
    angular_speed: f32,
    angle: f32,
}

impl Orbit {
    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Radians per second.
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Current angle in radians, kept in [0, TAU).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    fn position(&self) -> Vec3 {
        Vec3::new(
            self.center.x + self.radius * self.angle.cos(),
            self.center.y,
            self.center.z + self.radius * self.angle.sin(),
        )
    }
}

/// A body that circles a center point. Until `set_orbit_params` is called the
/// satellite has no orbit and keeps its construction-time position.
#[derive(Clone, Copy, Debug)]
pub struct Satellite {
    body: Body,
    orbit: Option<Orbit>,
}

impl Satellite {
    pub fn new(body: Body) -> Self {
        Self { body, orbit: None }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        self.orbit.as_ref()
    }

    /// Installs (or fully replaces) the orbit and resets the angle to zero.
    /// `radius` must be non-negative; a negative value is kept as-is and
    /// produces mirrored geometry rather than an error.
    pub fn set_orbit_params(&mut self, center: Vec3, radius: f32, angular_speed: f32) {
        debug_assert!(radius >= 0.0, "orbit radius must be non-negative");
        if radius < 0.0 {
            warn!("orbit radius {radius} is negative");
        }
        self.orbit = Some(Orbit {
            center,
            radius,
            angular_speed,
            angle: 0.0,
        });
    }

    /// Re-anchors the orbit. Takes effect on the next `update_orbit`; the
    /// satellite itself does not move. No-op while unconfigured.
    pub fn set_centre_pos(&mut self, center: Vec3) {
        if let Some(orbit) = &mut self.orbit {
            orbit.center = center;
        }
    }

    /// Advances the orbit by `dt` seconds and moves the body onto it.
    /// `dt` must be non-negative. No-op while unconfigured.
    pub fn update_orbit(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "orbit delta time must be non-negative");
        let Some(orbit) = &mut self.orbit else {
            return;
        };
        // Normalized so the angle stays accurate over long sessions.
        orbit.angle = (orbit.angle + orbit.angular_speed * dt).rem_euclid(TAU);
        self.body.move_to(orbit.position());
    }
}

impl CelestialBody for Satellite {
    fn position(&self) -> Vec3 {
        self.body.position()
    }

    fn radius(&self) -> f32 {
        self.body.radius()
    }

    fn color(&self) -> Vec3 {
        self.body.color()
    }
}
