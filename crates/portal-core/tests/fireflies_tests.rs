use portal_core::{bob_offset, point_size, FireflyField, FIREFLY_COUNT};

#[test]
fn field_has_exactly_thirty_particles() {
    let field = FireflyField::generate();
    assert_eq!(field.len(), FIREFLY_COUNT);
    assert_eq!(field.len(), 30);
    assert!(!field.is_empty());
}

#[test]
fn spawn_positions_stay_inside_the_clearing() {
    // Many runs, entropy-seeded: every particle must respect the bounds the
    // generation formulas imply.
    for _ in 0..20 {
        let field = FireflyField::generate();
        for f in field.iter() {
            assert!((-2.0..2.0).contains(&f.position.x), "x = {}", f.position.x);
            assert!((0.4..2.0).contains(&f.position.y), "y = {}", f.position.y);
            assert!((-1.2..2.0).contains(&f.position.z), "z = {}", f.position.z);
            assert!((0.0..1.0).contains(&f.scale), "scale = {}", f.scale);
        }
    }
}

#[test]
fn seeded_fields_are_reproducible() {
    let a = FireflyField::seeded(7);
    let b = FireflyField::seeded(7);
    for (fa, fb) in a.iter().zip(b.iter()) {
        assert_eq!(fa.position, fb.position);
        assert_eq!(fa.scale, fb.scale);
    }
}

#[test]
fn sprite_size_shrinks_with_depth() {
    let base = 300.0;
    let ratio = 2.0;
    let scale = 0.5;
    let mut last = f32::INFINITY;
    for depth in [0.5, 1.0, 2.0, 4.0, 10.0, 50.0] {
        let size = point_size(base, ratio, scale, depth);
        assert!(size < last, "size not decreasing at depth {depth}");
        last = size;
    }
    // Exact rule at depth 1: base * ratio * scale.
    assert!((point_size(base, ratio, scale, 1.0) - 300.0).abs() < 1e-3);
}

#[test]
fn sprite_size_scales_with_pixel_ratio_and_scale() {
    let at = |ratio: f32, scale: f32| point_size(300.0, ratio, scale, 2.0);
    assert!((at(2.0, 0.5) - 2.0 * at(1.0, 0.5)).abs() < 1e-4);
    assert!((at(1.0, 1.0) - 2.0 * at(1.0, 0.5)).abs() < 1e-4);
}

#[test]
fn bobbing_is_out_of_phase_across_particles() {
    // Two particles at different x must not bob in lockstep.
    let t = 1.3;
    let a = bob_offset(t, -1.0, 1.0);
    let b = bob_offset(t, 1.0, 1.0);
    assert!((a - b).abs() > 1e-3);
}

#[test]
fn bobbing_amplitude_is_bounded_by_scale() {
    for i in 0..100 {
        let t = i as f32 * 0.37;
        let off = bob_offset(t, 0.8, 0.5);
        assert!(off.abs() <= 0.5 * 0.2 + 1e-6);
    }
}
