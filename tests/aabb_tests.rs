use glam::{Mat4, Quat, Vec3};
use glb_viewer::math::AABB;

#[cfg(test)]
mod aabb_tests {
    use super::*;

    #[test]
    fn test_aabb_union_creates_bounding_box() {
        let aabb1 = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 10.0));
        let aabb2 = AABB::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(15.0, 15.0, 15.0));

        let union = aabb1.union(&aabb2);

        assert_eq!(union.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vec3::new(15.0, 15.0, 15.0));
    }

    #[test]
    fn test_aabb_union_with_contained_box() {
        let outer = AABB::new(Vec3::ZERO, Vec3::splat(10.0));
        let inner = AABB::new(Vec3::splat(2.0), Vec3::splat(8.0));

        assert_eq!(outer.union(&inner), outer, "Union should equal larger box");
    }

    #[test]
    fn test_from_points_tight_fit() {
        let points = [
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-3.0, 4.0, 0.0),
            Vec3::new(0.0, 0.0, 7.0),
        ];

        let aabb = AABB::from_points(&points).unwrap();

        assert_eq!(aabb.min, Vec3::new(-3.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 7.0));
    }

    #[test]
    fn test_from_points_empty_is_none() {
        let none: [Vec3; 0] = [];
        assert!(AABB::from_points(&none).is_none());
    }

    #[test]
    fn test_from_points_skips_non_finite() {
        let points = [Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE, Vec3::splat(f32::INFINITY)];
        assert_eq!(AABB::from_points(&points), Some(AABB::new(Vec3::ONE, Vec3::ONE)));

        let only_bad = [Vec3::splat(f32::NAN)];
        assert!(AABB::from_points(&only_bad).is_none());
    }

    #[test]
    fn test_transformed_by_translation() {
        let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);
        let moved = aabb.transformed(&Mat4::from_translation(Vec3::new(2.0, -1.0, 0.0)));

        assert_eq!(moved.min, Vec3::new(2.0, -1.0, 0.0));
        assert_eq!(moved.max, Vec3::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn test_transformed_by_rotation_grows() {
        let aabb = AABB::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let rotated = aabb.transformed(&Mat4::from_quat(Quat::from_rotation_z(
            std::f32::consts::FRAC_PI_4,
        )));

        let half = std::f32::consts::SQRT_2;
        assert!((rotated.max.x - half).abs() < 1e-5);
        assert!((rotated.min.y + half).abs() < 1e-5);
        assert!(rotated.max.x - rotated.min.x > aabb.max.x - aabb.min.x);
    }

    #[test]
    fn test_transformed_by_negative_scale_stays_ordered() {
        let aabb = AABB::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let flipped = aabb.transformed(&Mat4::from_scale(Vec3::new(-1.0, 1.0, -2.0)));

        assert_eq!(flipped.min, Vec3::new(-4.0, 2.0, -12.0));
        assert_eq!(flipped.max, Vec3::new(-1.0, 5.0, -6.0));
    }
}
