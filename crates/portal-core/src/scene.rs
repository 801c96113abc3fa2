use thiserror::Error;

/// The four nodes the baked model is expected to carry, keyed by the names
/// the modelling export writes into the glTF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeName {
    Baked,
    PortalLight,
    LampLights,
    FencesNails,
}

impl NodeName {
    pub const ALL: [NodeName; 4] = [
        NodeName::Baked,
        NodeName::PortalLight,
        NodeName::LampLights,
        NodeName::FencesNails,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeName::Baked => "baked",
            NodeName::PortalLight => "portal",
            NodeName::LampLights => "lampLights",
            NodeName::FencesNails => "fencesNails",
        }
    }
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene node {0:?} not found in model")]
    NodeNotFound(&'static str),
    #[error("model parse failed: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("texture decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("mesh primitive missing {0} attribute")]
    MissingAttribute(&'static str),
    #[error("model references an external buffer URI, only embedded GLB is supported")]
    ExternalBuffer,
}

/// Triangle mesh extracted from one named node, world transform applied.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// The loaded model as a flat map of named meshes. Lookup misses are a
/// recoverable error, not an unchecked panic.
#[derive(Debug, Default)]
pub struct SceneModel {
    meshes: Vec<(String, MeshData)>,
}

impl SceneModel {
    pub fn from_parts(meshes: Vec<(String, MeshData)>) -> Self {
        Self { meshes }
    }

    pub fn push(&mut self, name: String, mesh: MeshData) {
        self.meshes.push((name, mesh));
    }

    pub fn node(&self, name: NodeName) -> Result<&MeshData, SceneError> {
        self.meshes
            .iter()
            .find(|(n, _)| n == name.as_str())
            .map(|(_, m)| m)
            .ok_or(SceneError::NodeNotFound(name.as_str()))
    }

    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.meshes.iter().map(|(n, _)| n.as_str())
    }
}

/// Decoded baked-lighting texture, RGBA8, not vertically flipped (the UVs in
/// the export already match).
#[derive(Clone, Debug)]
pub struct BakedTexture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}
