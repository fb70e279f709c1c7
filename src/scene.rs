use glam::Vec3;

use crate::{
    bodies::{Body, CelestialBody, Satellite},
    camera::{Camera, CameraTransforms, MoveDirection, OrbitRig},
};

/// One draw call's worth of data for the rendering boundary.
#[derive(Clone, Copy, Debug)]
pub struct DrawBody {
    pub position: Vec3,
    pub radius: f32,
    pub color: Vec3,
    /// Emissive bodies are drawn unlit (the sun).
    pub emissive: bool,
}

/// The sun doubles as the scene's single light source.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

struct Tracked {
    satellite: Satellite,
    /// Roster index of the body this satellite re-anchors on each tick, or
    /// None for a fixed center (the sun).
    parent: Option<usize>,
}

/// Owns the whole roster and the camera. Satellites are stored in dependency
/// order: a parent always precedes its children, so one forward pass per
/// tick sees every parent already moved.
pub struct Scene {
    sun: Body,
    satellites: Vec<Tracked>,
    rig: OrbitRig,
    camera: Camera,
}

impl Scene {
    pub fn new(sun: Body, rig: OrbitRig) -> Self {
        let camera = Camera::new(rig.eye());
        Self {
            sun,
            satellites: Vec::new(),
            rig,
            camera,
        }
    }

    /// Appends a satellite and returns its roster index. `parent` must refer
    /// to an already-added satellite.
    pub fn add_satellite(&mut self, satellite: Satellite, parent: Option<usize>) -> usize {
        if let Some(p) = parent {
            assert!(p < self.satellites.len(), "parent must precede child");
        }
        self.satellites.push(Tracked { satellite, parent });
        self.satellites.len() - 1
    }

    pub fn sun(&self) -> &Body {
        &self.sun
    }

    pub fn satellite(&self, index: usize) -> &Satellite {
        &self.satellites[index].satellite
    }

    pub fn satellite_count(&self) -> usize {
        self.satellites.len()
    }

    /// Advances every orbit by `dt` seconds. Children are re-anchored on
    /// their parent's current position before they move, so a moon follows
    /// the planet's position from this tick, not the last one.
    pub fn advance(&mut self, dt: f32) {
        for i in 0..self.satellites.len() {
            if let Some(p) = self.satellites[i].parent {
                let anchor = self.satellites[p].satellite.position();
                self.satellites[i].satellite.set_centre_pos(anchor);
            }
            self.satellites[i].satellite.update_orbit(dt);
        }
    }

    pub fn move_camera(&mut self, direction: MoveDirection, dt: f32) {
        self.rig.apply_move(direction, dt);
    }

    pub fn rig(&self) -> &OrbitRig {
        &self.rig
    }

    /// Refreshes the camera eye from the rig and builds this frame's
    /// transforms for the given viewport aspect ratio.
    pub fn camera_transforms(&mut self, aspect: f32) -> CameraTransforms {
        self.camera.eye = self.rig.eye();
        self.camera.view_projection(aspect)
    }

    /// Draw descriptors in roster order, sun first.
    pub fn draw_list(&self) -> Vec<DrawBody> {
        let mut draws = Vec::with_capacity(1 + self.satellites.len());
        draws.push(DrawBody {
            position: self.sun.position(),
            radius: self.sun.radius(),
            color: self.sun.color(),
            emissive: true,
        });
        for tracked in &self.satellites {
            draws.push(DrawBody {
                position: tracked.satellite.position(),
                radius: tracked.satellite.radius(),
                color: tracked.satellite.color(),
                emissive: false,
            });
        }
        draws
    }

    pub fn light(&self) -> Light {
        Light {
            position: self.sun.position(),
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}
