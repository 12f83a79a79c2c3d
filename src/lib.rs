//! cputree: dump CPU affinity information as a tree.
//!
//! Reads per-CPU topology identifiers (physical package id, core id, logical
//! processor id) from a /proc/cpuinfo-style text source, organizes them into
//! a package -> core -> processor prefix tree, and renders that tree as an
//! ASCII line drawing or a nested JSON document.
//!
//! Pipeline: [`extract::scan`] -> [`paths::id_paths`] -> [`arena::TopoTree`]
//! -> [`arena::TopoTree::tokens`] -> [`render::render`].

pub mod arena;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod extract;
pub mod levels;
pub mod paths;
pub mod render;
pub mod util;
pub mod walk;

pub use arena::TopoTree;
pub use errors::{TopoError, TopoResult};
pub use levels::LevelSchema;
