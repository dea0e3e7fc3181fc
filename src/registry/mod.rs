//! Tag-keyed lookup tables owned by the scene assembler.
//!
//! - `texture` holds the texture registry: decode, upload, slot bookkeeping
//! - `material` holds the static material lookup table
//!
//! Both are ordered, first-match-wins linear scans over tens of entries;
//! registration order is part of the contract (a texture's slot index *is*
//! its position in the registry).

pub mod material;
pub mod texture;
