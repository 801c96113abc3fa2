//! Parsing of the two startup assets: the baked GLB model and the
//! baked-lighting texture. Both parse from in-memory bytes so the web
//! frontend can feed fetch results and the native frontend disk reads.

use crate::scene::{BakedTexture, MeshData, SceneError, SceneModel};
use glam::{Mat4, Vec3};
use gltf::Gltf;

/// Parse an embedded GLB into named meshes, one entry per named top-level
/// node, with descendant meshes merged under the ancestor's name.
pub fn parse_scene(bytes: &[u8]) -> Result<SceneModel, SceneError> {
    let gltf = Gltf::from_slice(bytes)?;
    let buffers = load_buffers(&gltf)?;

    let mut model = SceneModel::default();
    let scene = match gltf.default_scene().or_else(|| gltf.scenes().next()) {
        Some(s) => s,
        None => return Ok(model),
    };
    for node in scene.nodes() {
        let name = match node.name() {
            Some(n) => n,
            None => continue,
        };
        let mut mesh = MeshData::default();
        collect_node(&node, Mat4::IDENTITY, &buffers, &mut mesh)?;
        if !mesh.is_empty() {
            model.push(name.to_string(), mesh);
        }
    }
    log::info!(
        "parsed model: {} named meshes ({})",
        model.node_names().count(),
        model.node_names().collect::<Vec<_>>().join(", ")
    );
    Ok(model)
}

/// Decode the baked color texture to RGBA8.
pub fn parse_texture(bytes: &[u8]) -> Result<BakedTexture, SceneError> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    Ok(BakedTexture {
        width: img.width(),
        height: img.height(),
        rgba: img.into_raw(),
    })
}

fn load_buffers(gltf: &Gltf) -> Result<Vec<Vec<u8>>, SceneError> {
    let mut data = Vec::new();
    for buffer in gltf.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => {
                let blob = gltf.blob.as_deref().ok_or(SceneError::ExternalBuffer)?;
                data.push(blob.to_vec());
            }
            gltf::buffer::Source::Uri(_) => return Err(SceneError::ExternalBuffer),
        }
    }
    Ok(data)
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[Vec<u8>],
    out: &mut MeshData,
) -> Result<(), SceneError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            append_primitive(&primitive, world, buffers, out)?;
        }
    }
    for child in node.children() {
        collect_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn append_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    buffers: &[Vec<u8>],
    out: &mut MeshData,
) -> Result<(), SceneError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));
    let positions = reader
        .read_positions()
        .ok_or(SceneError::MissingAttribute("position"))?;

    let base = out.positions.len() as u32;
    for p in positions {
        out.positions
            .push(world.transform_point3(Vec3::from(p)).to_array());
    }
    let added = out.positions.len() - base as usize;

    match reader.read_tex_coords(0) {
        Some(uvs) => out.uvs.extend(uvs.into_f32()),
        None => out.uvs.extend(std::iter::repeat([0.0, 0.0]).take(added)),
    }

    match reader.read_indices() {
        Some(indices) => out.indices.extend(indices.into_u32().map(|i| base + i)),
        None => out.indices.extend(base..base + added as u32),
    }
    Ok(())
}
