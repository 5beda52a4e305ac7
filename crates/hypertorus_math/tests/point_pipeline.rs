//! End-to-end tests for generate -> rotate -> project
//!
//! These run the three pure stages the render loop calls every frame,
//! without any window or GPU.

use hypertorus_math::{
    generate_points, project, project_points, rotate_points, PointSet, RotationAngles,
    TorusParams, Vec4,
};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPSILON: f32 = 0.0001;

#[test]
fn test_zeroed_rng_single_point() {
    // Every draw comes back as 0: u = v = w = 0
    let mut rng = StepRng::new(0, 0);
    let params = TorusParams::new(5.0, 1.0, 10.0).unwrap();

    let points = generate_points(1, &params, &mut rng);
    assert_eq!(points.len(), 1);
    let p = points.get(0).unwrap();
    assert!((p - Vec4::new(6.0, 0.0, 0.0, 0.0)).length() < EPSILON, "got {:?}", p);

    let rotated = rotate_points(&points, &RotationAngles::ZERO);
    let r = rotated.get(0).unwrap();
    assert!((r - p).length() < EPSILON, "rotation by zero moved {:?} to {:?}", p, r);

    let projected = project_points(&rotated);
    assert_eq!(projected.len(), 1);
    assert!((projected[0][0] - 6.0).abs() < EPSILON);
    assert!(projected[0][1].abs() < EPSILON);
    assert!(projected[0][2].abs() < EPSILON);
}

#[test]
fn test_empty_set_flows_through() {
    let mut rng = StdRng::seed_from_u64(1);
    let points = generate_points(0, &TorusParams::default(), &mut rng);
    assert!(points.is_empty());

    let rotated = rotate_points(&points, &RotationAngles::default());
    assert!(rotated.is_empty());
    assert!(project_points(&rotated).is_empty());
}

#[test]
fn test_default_frame_preserves_cardinality_and_norm() {
    let mut rng = StdRng::seed_from_u64(2024);
    let points = generate_points(1000, &TorusParams::default(), &mut rng);
    let rotated = rotate_points(&points, &RotationAngles::default());
    let projected = project_points(&rotated);

    assert_eq!(rotated.len(), 1000);
    assert_eq!(projected.len(), 1000);

    for ((original, rot), proj) in points.iter().zip(rotated.iter()).zip(projected.iter()) {
        let rel = (rot.length() - original.length()).abs() / original.length().max(1.0);
        assert!(rel < 0.0001, "norm changed: {} -> {}", original.length(), rot.length());
        assert_eq!(*proj, project(*rot));
    }
}

#[test]
fn test_projection_is_prefix_of_rotation() {
    let points = PointSet::from(vec![
        Vec4::new(1.0, 2.0, 3.0, 4.0),
        Vec4::new(-6.0, 0.5, 0.0, 9.5),
    ]);
    let angles = RotationAngles::new(0.1, 0.2, 0.3);
    let rotated = rotate_points(&points, &angles);
    let projected = project_points(&rotated);

    for (rot, proj) in rotated.iter().zip(projected.iter()) {
        assert_eq!(*proj, [rot.x, rot.y, rot.z]);
    }
}

#[test]
fn test_repeated_frames_are_identical() {
    // The angles never change, so every frame sees the same projection
    let mut rng = StdRng::seed_from_u64(9);
    let points = generate_points(64, &TorusParams::default(), &mut rng);
    let angles = RotationAngles::default();

    let first = project_points(&rotate_points(&points, &angles));
    let second = project_points(&rotate_points(&points, &angles));
    assert_eq!(first, second);
}
