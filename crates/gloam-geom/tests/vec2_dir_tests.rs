use gloam_geom::{Direction, Vec2, cell_coord, frac, normalize_angle, rev_frac, wrap_angle};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn vec2_approx_eq(a: Vec2, b: Vec2, eps: f64) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

#[test]
fn vec2_ops() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(-4.0, 5.0);
    assert!(vec2_approx_eq(a + b, Vec2::new(-3.0, 7.0), 1e-12));
    assert!(vec2_approx_eq((a + b) - a, b, 1e-12));
    assert!(vec2_approx_eq(a * 2.0, Vec2::new(2.0, 4.0), 1e-12));
    assert!(vec2_approx_eq(a / 2.0, Vec2::new(0.5, 1.0), 1e-12));

    let mut v = Vec2::ZERO;
    v += a;
    v -= b;
    assert!(vec2_approx_eq(v, Vec2::new(5.0, -3.0), 1e-12));
}

#[test]
fn vec2_length_and_normalized() {
    let v = Vec2::new(3.0, 4.0);
    assert!(approx_eq(v.length(), 5.0, 1e-12));
    assert!(approx_eq(v.normalized().length(), 1.0, 1e-12));
    assert!(vec2_approx_eq(Vec2::ZERO.normalized(), Vec2::ZERO, 0.0));
}

#[test]
fn from_angle_is_unit() {
    for i in 0..16 {
        let a = i as f64 * 0.5;
        let v = Vec2::from_angle(a);
        assert!(approx_eq(v.length(), 1.0, 1e-12));
        assert!(approx_eq(v.x, a.cos(), 0.0));
        assert!(approx_eq(v.y, a.sin(), 0.0));
    }
}

#[test]
fn direction_index_roundtrip() {
    for i in 0..6 {
        assert_eq!(Direction::from_index(i).index(), i);
    }
    assert_eq!(Direction::from_index(99), Direction::North);
}

#[test]
fn direction_opposites() {
    assert_eq!(Direction::North.opposite(), Direction::South);
    assert_eq!(Direction::South.opposite(), Direction::North);
    assert_eq!(Direction::East.opposite(), Direction::West);
    assert_eq!(Direction::West.opposite(), Direction::East);
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Down.opposite(), Direction::Up);
    for i in 0..6 {
        let d = Direction::from_index(i);
        assert_eq!(d.opposite().opposite(), d);
    }
}

#[test]
fn direction_steps() {
    assert_eq!(Direction::North.step(), (0, -1));
    assert_eq!(Direction::South.step(), (0, 1));
    assert_eq!(Direction::West.step(), (-1, 0));
    assert_eq!(Direction::East.step(), (1, 0));
    assert_eq!(Direction::Up.step(), (0, 0));
    assert_eq!(Direction::Down.step(), (0, 0));
}

#[test]
fn frac_rev_frac_known_values() {
    assert!(approx_eq(frac(1.25), 0.25, 0.0));
    assert!(approx_eq(frac(-0.25), 0.75, 0.0));
    assert!(approx_eq(frac(2.0), 0.0, 0.0));
    assert!(approx_eq(rev_frac(1.25), 0.75, 0.0));
    assert!(approx_eq(rev_frac(-0.25), 0.25, 0.0));
    assert!(approx_eq(rev_frac(2.0), 0.0, 0.0));
}

#[test]
fn cell_coord_boundary_rules() {
    // Interior points floor regardless of travel direction.
    assert_eq!(cell_coord(2.3, true), 2);
    assert_eq!(cell_coord(2.3, false), 2);
    assert_eq!(cell_coord(-0.5, false), -1);
    // Exact boundaries resolve to the cell behind when moving positive.
    assert_eq!(cell_coord(2.0, true), 1);
    assert_eq!(cell_coord(2.0, false), 2);
    // The origin is the one boundary that never backs up.
    assert_eq!(cell_coord(0.0, true), 0);
    assert_eq!(cell_coord(0.0, false), 0);
}

#[test]
fn angle_ranges() {
    use core::f64::consts::PI;
    assert!(approx_eq(normalize_angle(0.0), 0.0, 0.0));
    assert!(approx_eq(normalize_angle(-0.1), 2.0 * PI - 0.1, 1e-12));
    assert!(approx_eq(normalize_angle(2.0 * PI + 0.1), 0.1, 1e-12));
    assert!(approx_eq(wrap_angle(0.0), 0.0, 0.0));
    assert!(approx_eq(wrap_angle(PI), PI, 0.0));
    assert!(approx_eq(wrap_angle(-PI), PI, 0.0));
    assert!(approx_eq(wrap_angle(1.5 * PI), -0.5 * PI, 1e-12));
    assert!(approx_eq(wrap_angle(-1.5 * PI), 0.5 * PI, 1e-12));
}
