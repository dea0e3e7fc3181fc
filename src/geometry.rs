//! Primitive mesh kinds and the seam to the mesh geometry service.
//!
//! Vertex generation and GPU buffer ownership stay external. The scene only
//! speaks in a closed set of primitive kinds whose buffers are built once
//! (`load`) and drawn any number of times afterwards.

use serde::{Deserialize, Serialize};

/// The closed set of primitive geometries a scene can place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshKind {
    Plane,
    Box,
    Torus,
    Cylinder,
}

impl MeshKind {
    /// Every kind, in the fixed order used when preparing a scene.
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Plane,
        MeshKind::Box,
        MeshKind::Torus,
        MeshKind::Cylinder,
    ];
}

/// Load/draw pairs exposed by the external mesh geometry service.
///
/// `load` must be called once for a kind before any `draw` of that kind;
/// loading is separated from drawing so a primitive's GPU buffers are built
/// once no matter how many placements reuse it.
pub trait MeshGeometry {
    fn load(&mut self, kind: MeshKind);
    fn draw(&mut self, kind: MeshKind);
}
