//! Run with: `cargo test --test hex_properties`

use hexmath::{ring, spiral, HexCoord, HexDirection, HexMetadata, Vector3};
use proptest::prelude::*;

fn hex() -> impl Strategy<Value = HexCoord> {
    (-1000..1000i32, -1000..1000i32).prop_map(|(q, r)| HexCoord::new(q, r))
}

fn direction() -> impl Strategy<Value = HexDirection> {
    (0..6usize).prop_map(HexDirection::from_index)
}

proptest! {
    #[test]
    fn cube_components_sum_to_zero(a in hex(), b in hex(), k in -50..50i32) {
        for hex in [a + b, a - b, -a, a * k, a.rotate_by_steps(b, k)].iter() {
            prop_assert_eq!(hex.q + hex.r + hex.s(), 0);
        }
    }

    #[test]
    fn distance_is_a_metric(a in hex(), b in hex(), c in hex()) {
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert_eq!(a.distance(b) == 0, a == b);
        prop_assert!(a.distance(c) <= a.distance(b) + b.distance(c));
    }

    #[test]
    fn vector_distance_agrees(a in hex(), b in hex()) {
        prop_assert_eq!(
            Vector3::from(a).hex_distance(Vector3::from(b)),
            a.distance(b) as f64
        );
    }

    #[test]
    fn pixel_round_trip(
        hex in hex(),
        size in prop::sample::select(vec![0.5, 1.0, 2.0]),
        pointy_top in any::<bool>(),
    ) {
        let meta = HexMetadata::new(size, pointy_top);
        prop_assert_eq!(meta.pixel_to_hex(meta.hex_to_pixel(hex)), hex);
    }

    #[test]
    fn rounding_integers_is_identity(hex in hex()) {
        prop_assert_eq!(HexCoord::round(hex.q as f64, hex.r as f64), hex);
        prop_assert_eq!(Vector3::from(hex).to_hex(), hex);
    }

    #[test]
    fn rotation_group_law(hex in hex(), pivot in hex(), k in -20..20i32) {
        prop_assert_eq!(hex.rotate_by_steps(pivot, 0), hex);
        prop_assert_eq!(hex.rotate_by_steps(pivot, 6), hex);
        prop_assert_eq!(hex.rotate_by_steps(pivot, k).rotate_by_steps(pivot, -k), hex);
    }

    #[test]
    fn rotation_preserves_distance(hex in hex(), pivot in hex(), steps in 0..6i32) {
        prop_assert_eq!(
            pivot.distance(hex.rotate_by_steps(pivot, steps)),
            pivot.distance(hex)
        );
    }

    #[test]
    fn rotate_to_match_preserves_distance(
        hex in hex(),
        pivot in hex(),
        from in direction(),
        to in direction(),
        radius in 1..10i32,
    ) {
        let orient_from = pivot.neighbor(from, radius);
        let orient_to = pivot.neighbor(to, radius);
        let rotated = hex.rotate_to_match(orient_from, orient_to, pivot, None).unwrap();
        prop_assert_eq!(pivot.distance(rotated), pivot.distance(hex));
        prop_assert_eq!(
            orient_from.rotate_to_match(orient_from, orient_to, pivot, None).unwrap(),
            orient_to
        );
    }

    #[test]
    fn straight_line_along_any_direction(hex in hex(), direction in direction(), n in -30..30i32) {
        prop_assert!(hex.in_straight_line_with(hex.neighbor(direction, n)));
    }

    #[test]
    fn ring_cardinality(center in hex(), radius in -5..20i32) {
        let expect = 6 * radius.max(0) as usize;
        prop_assert_eq!(ring(center, radius).count(), expect);
        prop_assert!(ring(center, radius).all(|hex| center.distance(hex) == radius));
    }

    #[test]
    fn spiral_cardinality(center in hex(), max_radius in 0..15i32) {
        let m = max_radius as usize;
        prop_assert_eq!(spiral(center, max_radius, true).count(), 1 + 3 * m * (m + 1));
        prop_assert_eq!(spiral(center, max_radius, false).count(), 3 * m * (m + 1));
    }
}
