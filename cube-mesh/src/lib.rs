//! Fixed-topology box mesh and its Minecraft-style UV unwrap.
//!
//! The UV rules index faces by position in `BoxMesh::faces`. They only make sense for meshes
//! produced by `build_box`; an arbitrary mesh gets meaningless UVs.

mod builder;
mod uv;

pub use builder::*;
pub use uv::*;

#[cfg(test)]
mod tests;
