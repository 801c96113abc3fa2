use portal_core::assets::{parse_scene, parse_texture};
use portal_core::{MeshData, NodeName, SceneError, SceneModel};

fn quad_mesh() -> MeshData {
    MeshData {
        positions: vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        uvs: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

#[test]
fn named_node_lookup_finds_each_expected_node() {
    let model = SceneModel::from_parts(
        NodeName::ALL
            .iter()
            .map(|n| (n.as_str().to_string(), quad_mesh()))
            .collect(),
    );
    for name in NodeName::ALL {
        let mesh = model.node(name).unwrap();
        assert_eq!(mesh.indices.len(), 6);
    }
}

#[test]
fn missing_node_is_a_recoverable_error() {
    let model = SceneModel::from_parts(vec![("baked".to_string(), quad_mesh())]);
    match model.node(NodeName::PortalLight) {
        Err(SceneError::NodeNotFound(name)) => assert_eq!(name, "portal"),
        other => panic!("expected NodeNotFound, got {other:?}"),
    }
}

#[test]
fn garbage_model_bytes_fail_without_panicking() {
    assert!(parse_scene(b"definitely not a glb").is_err());
    assert!(parse_scene(&[]).is_err());
}

#[test]
fn garbage_texture_bytes_fail_without_panicking() {
    assert!(parse_texture(b"not an image").is_err());
}

#[test]
fn texture_decode_round_trip() {
    use std::io::Cursor;

    let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .unwrap();

    let tex = parse_texture(&bytes).unwrap();
    assert_eq!((tex.width, tex.height), (4, 2));
    assert_eq!(tex.rgba.len(), 4 * 2 * 4);
    assert_eq!(&tex.rgba[0..4], &[10, 20, 30, 255]);
}
