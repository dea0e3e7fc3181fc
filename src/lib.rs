//! tableau
//!
//! A small, data-driven assembler for static 3D still-life scenes rendered
//! through a fixed shading pipeline. The crate owns the reusable scene
//! bookkeeping: a texture registry mapping string tags to GPU texture-unit
//! slots, a material lookup table, a one-shot light configuration, and a
//! scene assembler that walks a declarative list of object placements and
//! emits the per-object transform, bind and draw calls.
//!
//! The surrounding renderer stays external: shading uniforms, mesh geometry
//! and texture uploads are reached through the trait seams in [`shading`],
//! [`geometry`] and [`registry::texture`], so the whole scene walk can run
//! against a real GPU backend or against recording doubles in tests.
//!
//! High-level modules
//! - `error`: the crate's failure taxonomy
//! - `shading`: write-only named-uniform seam to the shading runtime
//! - `geometry`: primitive mesh kinds and the load/draw seam
//! - `registry`: texture registry and material table
//! - `lighting`: light source descriptors and one-time configuration
//! - `scene`: placements, scene descriptions and the frame assembler
//! - `gpu`: wgpu-backed texture device for production use
//!

pub mod error;
pub mod geometry;
pub mod gpu;
pub mod lighting;
pub mod registry;
pub mod scene;
pub mod shading;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use error::SceneError;
