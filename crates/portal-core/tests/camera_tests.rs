use portal_core::{camera_eye_vec3, OrbitCamera, Viewport, ORBIT_AZIMUTH_LIMIT, ORBIT_PITCH_MAX};

#[test]
fn initial_rig_reproduces_the_authored_eye() {
    let orbit = OrbitCamera::new(16.0 / 9.0);
    let eye = orbit.eye();
    let expected = camera_eye_vec3();
    assert!((eye - expected).length() < 1e-4, "eye = {eye:?}");
}

#[test]
fn resize_updates_the_aspect_ratio() {
    for (w, h) in [(1920u32, 1080u32), (800, 600), (1024, 1024)] {
        let vp = Viewport::new(w, h, 1.0);
        assert!((vp.aspect() - w as f32 / h as f32).abs() < 1e-6);

        let mut orbit = OrbitCamera::new(1.0);
        orbit.set_aspect(vp.aspect());
        assert_eq!(orbit.camera().aspect, vp.aspect());
    }
}

#[test]
fn pixel_ratio_clamps_to_two() {
    for (device, expected) in [(1.0f32, 1.0f32), (2.0, 2.0), (3.0, 2.0)] {
        let vp = Viewport::new(640, 480, device);
        assert_eq!(vp.clamped_pixel_ratio(), expected);
    }
}

#[test]
fn azimuth_is_clamped_to_the_front_half() {
    let mut orbit = OrbitCamera::new(1.0);
    orbit.rotate(100.0, 0.0);
    for _ in 0..600 {
        orbit.update(1.0 / 60.0);
    }
    assert!(orbit.yaw() <= ORBIT_AZIMUTH_LIMIT + 1e-4);

    orbit.rotate(-200.0, 0.0);
    for _ in 0..600 {
        orbit.update(1.0 / 60.0);
    }
    assert!(orbit.yaw() >= -ORBIT_AZIMUTH_LIMIT - 1e-4);
}

#[test]
fn camera_never_drops_below_the_horizon() {
    let mut orbit = OrbitCamera::new(1.0);
    // Drag hard downwards; the polar clamp keeps the eye at or above target level.
    orbit.rotate(0.0, -100.0);
    for _ in 0..600 {
        orbit.update(1.0 / 60.0);
    }
    let cam = orbit.camera();
    assert!(cam.eye.y >= cam.target.y - 1e-3);
    assert!(orbit.pitch() >= -1e-4);
    assert!(orbit.pitch() <= ORBIT_PITCH_MAX + 1e-4);
}

#[test]
fn damping_converges_toward_the_drag_goal() {
    let mut orbit = OrbitCamera::new(1.0);
    let start_yaw = orbit.yaw();
    orbit.rotate(0.3, 0.0);

    // One frame moves part of the way, not all of it.
    orbit.update(1.0 / 60.0);
    let after_one = orbit.yaw();
    assert!(after_one > start_yaw);
    assert!(after_one < start_yaw + 0.3);

    // Many frames converge.
    for _ in 0..600 {
        orbit.update(1.0 / 60.0);
    }
    assert!((orbit.yaw() - (start_yaw + 0.3)).abs() < 1e-3);
}

#[test]
fn view_matrix_looks_at_the_target() {
    let orbit = OrbitCamera::new(1.5);
    let cam = orbit.camera();
    let view = cam.view_matrix();
    // The target must land on the view-space -Z axis.
    let t = view.transform_point3(cam.target);
    assert!(t.x.abs() < 1e-4 && t.y.abs() < 1e-4);
    assert!(t.z < 0.0);
}
