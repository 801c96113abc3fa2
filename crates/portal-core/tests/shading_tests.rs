use portal_core::{Color, ShadingParams, FIREFLY_BASE_SIZE};

#[test]
fn lerp_identity_at_the_endpoints() {
    let start = Color::from_hex("#ffaae3").unwrap();
    let end = Color::from_hex("#fdfaff").unwrap();
    assert_eq!(Color::lerp(start, end, 0.0), start);
    assert_eq!(Color::lerp(start, end, 1.0), end);
}

#[test]
fn lerp_is_componentwise_linear() {
    let start = Color::new(0.0, 0.2, 1.0);
    let end = Color::new(1.0, 0.6, 0.0);
    let mid = Color::lerp(start, end, 0.25);
    assert!((mid.r - 0.25).abs() < 1e-6);
    assert!((mid.g - 0.3).abs() < 1e-6);
    assert!((mid.b - 0.75).abs() < 1e-6);
}

#[test]
fn defaults_match_the_authored_palette() {
    let p = ShadingParams::default();
    assert_eq!(p.clear_color.to_hex(), "#110418");
    assert_eq!(p.portal_color_start.to_hex(), "#ffaae3");
    assert_eq!(p.portal_color_end.to_hex(), "#fdfaff");
    assert_eq!(p.firefly_size, FIREFLY_BASE_SIZE);
    assert_eq!(p.elapsed, 0.0);
}

#[test]
fn panel_edit_updates_the_clear_color() {
    // The panel parses the picker's literal and assigns it; the next frame
    // clears with that value.
    let mut p = ShadingParams::default();
    p.clear_color = Color::from_hex("#ff0000").unwrap();
    assert_eq!(p.clear_color.to_array4(), [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn firefly_size_clamps_to_the_slider_range() {
    let mut p = ShadingParams::default();
    p.set_firefly_size(750.0);
    assert_eq!(p.firefly_size, 500.0);
    p.set_firefly_size(-10.0);
    assert_eq!(p.firefly_size, 0.0);
    p.set_firefly_size(123.0);
    assert_eq!(p.firefly_size, 123.0);
}

#[test]
fn elapsed_time_never_decreases() {
    let mut p = ShadingParams::default();
    let mut seen = Vec::new();
    for t in [0.0, 1.0, 2.0] {
        p.set_elapsed(t);
        seen.push(p.elapsed);
    }
    assert_eq!(seen, vec![0.0, 1.0, 2.0]);

    // A stale timestamp must not rewind the uniforms.
    p.set_elapsed(0.5);
    assert_eq!(p.elapsed, 2.0);
    // No upper bound is enforced.
    p.set_elapsed(1.0e7);
    assert_eq!(p.elapsed, 1.0e7);
}

#[test]
fn pixel_ratio_clamps_at_two() {
    let mut p = ShadingParams::default();
    for (device, expected) in [(1.0, 1.0), (2.0, 2.0), (3.0, 2.0)] {
        p.set_pixel_ratio(device);
        assert_eq!(p.pixel_ratio, expected);
    }
}
