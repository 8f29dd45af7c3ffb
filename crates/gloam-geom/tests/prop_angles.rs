use core::f64::consts::{PI, TAU};
use gloam_geom::{cell_coord, frac, normalize_angle, rev_frac, wrap_angle};
use proptest::prelude::*;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn bounded_f64() -> impl Strategy<Value = f64> {
    // Large magnitudes lose sub-radian precision in rem_euclid; keep the
    // domain where the trig comparison below is meaningful.
    (-1e4f64..1e4).prop_filter("finite", |v| v.is_finite())
}

proptest! {
    #[test]
    fn normalize_angle_in_range(a in bounded_f64()) {
        let n = normalize_angle(a);
        prop_assert!((0.0..TAU).contains(&n));
    }

    #[test]
    fn normalize_angle_preserves_heading(a in bounded_f64()) {
        let n = normalize_angle(a);
        prop_assert!(approx(n.cos(), a.cos(), 1e-9));
        prop_assert!(approx(n.sin(), a.sin(), 1e-9));
    }

    #[test]
    fn wrap_angle_in_range(a in bounded_f64()) {
        let w = wrap_angle(a);
        prop_assert!(w > -PI && w <= PI);
        prop_assert!(approx(w.cos(), a.cos(), 1e-9));
        prop_assert!(approx(w.sin(), a.sin(), 1e-9));
    }

    #[test]
    fn frac_in_unit_interval(n in bounded_f64()) {
        let f = frac(n);
        prop_assert!((0.0..1.0).contains(&f));
        let r = rev_frac(n);
        prop_assert!((0.0..1.0).contains(&r));
    }

    #[test]
    fn frac_complements_rev_frac(n in bounded_f64().prop_filter("non-integer", |v| v.fract() != 0.0)) {
        prop_assert!(approx(frac(n) + rev_frac(n), 1.0, 1e-9));
    }

    #[test]
    fn cell_coord_brackets_point(c in -1e3f64..1e3, positive in any::<bool>()) {
        let cell = cell_coord(c, positive) as f64;
        // The resolved cell always contains the point on its closed boundary.
        prop_assert!(cell <= c && c <= cell + 1.0);
    }
}
