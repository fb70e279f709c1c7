use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::Vec3;
use orrery::camera::{Camera, MoveDirection, OrbitRig, Spherical};

#[test]
fn projection_matches_the_perspective_formula() {
    // fovY 45 degrees, near 0.1, far 5000, reversed none: standard
    // right-handed perspective with depth in [0, 1].
    let camera = Camera::new(Vec3::new(0.0, 0.0, 1000.0));
    let aspect = 800.0 / 600.0;
    let transforms = camera.view_projection(aspect);

    let f = 1.0 / (camera.fovy / 2.0).tan();
    let r = camera.zfar / (camera.znear - camera.zfar);

    let proj = transforms.proj;
    assert!((proj.col(0).x - f / aspect).abs() < 1e-4);
    assert!((proj.col(1).y - f).abs() < 1e-4);
    assert!((proj.col(2).z - r).abs() < 1e-4);
    assert!((proj.col(3).z - r * camera.znear).abs() < 1e-3);
    assert!((proj.col(2).w - (-1.0)).abs() < 1e-6);
}

#[test]
fn aspect_changes_only_the_horizontal_scale() {
    let camera = Camera::new(Vec3::new(100.0, 50.0, 100.0));
    let narrow = camera.view_projection(1.0).proj;
    let wide = camera.view_projection(2.0).proj;

    assert!((wide.col(0).x - narrow.col(0).x / 2.0).abs() < 1e-5);
    for col in 1..4 {
        assert_eq!(wide.col(col), narrow.col(col));
    }
}

#[test]
fn view_matrix_looks_at_the_origin() {
    let eye = Vec3::new(0.0, 707.1, 707.1);
    let transforms = Camera::new(eye).view_projection(1.0);

    // The eye maps to the view-space origin, the focus onto the -Z axis.
    assert!(transforms.view.transform_point3(eye).length() < 1e-2);
    let origin_in_view = transforms.view.transform_point3(Vec3::ZERO);
    assert!(origin_in_view.x.abs() < 1e-2);
    assert!(origin_in_view.y.abs() < 1e-2);
    assert!((origin_in_view.z - (-eye.length())).abs() < 1e-1);
    assert_eq!(transforms.eye, eye);
}

#[test]
fn spherical_conversion_uses_a_z_polar_axis() {
    let on_axis = Spherical {
        radius: 5.0,
        polar: 0.0,
        azimuth: 1.2,
    };
    assert!((on_axis.to_cartesian() - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);

    let equator_x = Spherical {
        radius: 5.0,
        polar: FRAC_PI_2,
        azimuth: 0.0,
    };
    assert!((equator_x.to_cartesian() - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);

    let equator_y = Spherical {
        radius: 5.0,
        polar: FRAC_PI_2,
        azimuth: FRAC_PI_2,
    };
    assert!((equator_y.to_cartesian() - Vec3::new(0.0, 5.0, 0.0)).length() < 1e-5);
}

#[test]
fn default_rig_matches_the_reference_pose() {
    let rig = OrbitRig::default();
    let pos = rig.pos();
    assert_eq!(pos.radius, 1000.0);
    assert_eq!(pos.polar, FRAC_PI_4);
    assert_eq!(pos.azimuth, FRAC_PI_2);

    let eye = rig.eye();
    let expected = 1000.0 * FRAC_PI_4.sin();
    assert!(eye.x.abs() < 1e-2);
    assert!((eye.y - expected).abs() < 1e-2);
    assert!((eye.z - expected).abs() < 1e-2);
}

#[test]
fn moves_scale_with_elapsed_time() {
    let mut rig = OrbitRig::default();
    let start = rig.pos();

    rig.apply_move(MoveDirection::Up, 0.5);
    assert!((rig.pos().polar - (start.polar + rig.angle_speed * 0.5)).abs() < 1e-6);

    rig.apply_move(MoveDirection::Forward, 2.0);
    assert!((rig.pos().radius - (start.radius - rig.zoom_speed * 2.0)).abs() < 1e-3);

    rig.apply_move(MoveDirection::Backward, 2.0);
    assert!((rig.pos().radius - start.radius).abs() < 1e-3);
}

#[test]
fn eye_distance_tracks_the_rig_radius() {
    let mut rig = OrbitRig::default();
    for _ in 0..10 {
        rig.apply_move(MoveDirection::Down, 0.1);
        rig.apply_move(MoveDirection::Backward, 0.1);
        assert!((rig.eye().length() - rig.pos().radius).abs() < 1e-2);
    }
}

#[test]
fn rig_clamps_at_the_poles_and_the_origin() {
    let mut rig = OrbitRig::default();
    for _ in 0..100_000 {
        rig.apply_move(MoveDirection::Down, 1.0);
        rig.apply_move(MoveDirection::Forward, 1.0);
    }
    assert!(rig.pos().polar > 0.0);
    assert!(rig.pos().radius > 0.0);

    for _ in 0..100_000 {
        rig.apply_move(MoveDirection::Up, 1.0);
    }
    assert!(rig.pos().polar < PI);
}
