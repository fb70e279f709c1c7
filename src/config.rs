//! Scenario files describe the roster and the starting camera pose in RON.
//! A scenario is validated while it is mapped into the runtime [`Scene`]:
//! parents are resolved by name and must be declared before their children.

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    bodies::{Body, CelestialBody, Satellite},
    camera::{OrbitRig, Spherical},
    scene::Scene,
};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("satellite {child:?} orbits unknown body {parent:?}")]
    UnknownParent { child: String, parent: String },

    #[error("satellite {child:?} orbits {parent:?}, which is declared after it")]
    ParentAfterChild { child: String, parent: String },

    #[error("satellite {0:?} has a negative orbit distance")]
    NegativeOrbitDistance(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    pub sun: SunConfig,
    pub satellites: Vec<SatelliteConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 1000.0,
            polar: std::f32::consts::FRAC_PI_4,
            azimuth: std::f32::consts::FRAC_PI_2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SunConfig {
    pub radius: f32,
    pub mass: f32,
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteConfig {
    pub name: String,
    pub radius: f32,
    pub mass: f32,
    pub color: [f32; 3],
    pub orbit: OrbitConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitConfig {
    /// Name of the body whose current position this orbit follows. None
    /// means the orbit stays centered on the sun.
    #[serde(default)]
    pub parent: Option<String>,
    pub distance: f32,
    /// Radians per second.
    pub angular_speed: f32,
}

impl ScenarioConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&text)?)
    }

    /// Maps the scenario into a runtime scene, resolving parent names to
    /// roster indices.
    pub fn build(&self) -> Result<Scene, ScenarioError> {
        let mut sun = Body::new(Vec3::ZERO, self.sun.mass).with_radius(self.sun.radius);
        sun.set_color(self.sun.color[0], self.sun.color[1], self.sun.color[2]);

        let rig = OrbitRig::new(Spherical {
            radius: self.camera.radius,
            polar: self.camera.polar,
            azimuth: self.camera.azimuth,
        });

        let mut scene = Scene::new(sun, rig);

        for (i, cfg) in self.satellites.iter().enumerate() {
            if cfg.orbit.distance < 0.0 {
                return Err(ScenarioError::NegativeOrbitDistance(cfg.name.clone()));
            }

            let parent = match &cfg.orbit.parent {
                Some(name) => {
                    let index = self
                        .satellites
                        .iter()
                        .position(|s| &s.name == name)
                        .ok_or_else(|| ScenarioError::UnknownParent {
                            child: cfg.name.clone(),
                            parent: name.clone(),
                        })?;
                    if index >= i {
                        return Err(ScenarioError::ParentAfterChild {
                            child: cfg.name.clone(),
                            parent: name.clone(),
                        });
                    }
                    Some(index)
                }
                None => None,
            };

            let center = match parent {
                Some(p) => scene.satellite(p).position(),
                None => scene.sun().position(),
            };

            // Start on the orbit rather than at an arbitrary pose, so the
            // first drawn frame is already correct.
            let start = center + Vec3::new(cfg.orbit.distance, 0.0, 0.0);
            let mut body = Body::new(start, cfg.mass).with_radius(cfg.radius);
            body.set_color(cfg.color[0], cfg.color[1], cfg.color[2]);

            let mut satellite = Satellite::new(body);
            satellite.set_orbit_params(center, cfg.orbit.distance, cfg.orbit.angular_speed);
            scene.add_satellite(satellite, parent);
        }

        Ok(scene)
    }
}

/// The built-in Sun/Earth/Moon scenario.
impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            sun: SunConfig {
                radius: 50.0,
                mass: 1.989e6,
                color: [1.0, 0.85, 0.3],
            },
            satellites: vec![
                SatelliteConfig {
                    name: "earth".into(),
                    radius: 10.0,
                    mass: 5.97e3,
                    color: [0.2, 0.45, 0.9],
                    orbit: OrbitConfig {
                        parent: None,
                        distance: 300.0,
                        angular_speed: 0.3,
                    },
                },
                SatelliteConfig {
                    name: "moon".into(),
                    radius: 2.7,
                    mass: 73.0,
                    color: [0.65, 0.65, 0.65],
                    orbit: OrbitConfig {
                        parent: Some("earth".into()),
                        distance: 30.0,
                        angular_speed: 1.5,
                    },
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_builds() {
        let scene = ScenarioConfig::default().build().unwrap();
        assert_eq!(scene.satellite_count(), 2);
        assert_eq!(scene.sun().radius(), 50.0);
        // The moon starts on its orbit around the earth's starting position.
        let earth = scene.satellite(0).position();
        let moon = scene.satellite(1).position();
        assert!(((moon - earth).length() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn parses_ron_scenario() {
        let text = r#"(
            camera: (radius: 900.0, polar: 0.8, azimuth: 1.6),
            sun: (radius: 40.0, mass: 1.0, color: (1.0, 0.9, 0.4)),
            satellites: [
                (
                    name: "earth",
                    radius: 8.0,
                    mass: 1.0,
                    color: (0.2, 0.4, 0.9),
                    orbit: (distance: 250.0, angular_speed: 0.4),
                ),
                (
                    name: "moon",
                    radius: 2.0,
                    mass: 0.1,
                    color: (0.6, 0.6, 0.6),
                    orbit: (parent: Some("earth"), distance: 25.0, angular_speed: 1.8),
                ),
            ],
        )"#;
        let config: ScenarioConfig = ron::from_str(text).unwrap();
        assert_eq!(config.satellites.len(), 2);
        assert_eq!(config.camera.radius, 900.0);

        let scene = config.build().unwrap();
        let orbit = scene.satellite(1).orbit().unwrap();
        assert_eq!(orbit.radius(), 25.0);
    }

    #[test]
    fn rejects_unknown_parent() {
        let mut config = ScenarioConfig::default();
        config.satellites[1].orbit.parent = Some("jupiter".into());
        assert!(matches!(
            config.build(),
            Err(ScenarioError::UnknownParent { .. })
        ));
    }

    #[test]
    fn rejects_parent_declared_after_child() {
        let mut config = ScenarioConfig::default();
        config.satellites.swap(0, 1);
        assert!(matches!(
            config.build(),
            Err(ScenarioError::ParentAfterChild { .. })
        ));
    }

    #[test]
    fn rejects_negative_orbit_distance() {
        let mut config = ScenarioConfig::default();
        config.satellites[0].orbit.distance = -1.0;
        assert!(matches!(
            config.build(),
            Err(ScenarioError::NegativeOrbitDistance(_))
        ));
    }
}
