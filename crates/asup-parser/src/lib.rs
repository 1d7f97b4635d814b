//! ASUP host-information parser: library crate behind the `asupparser`
//! binary.
//!
//! Exposes the run pipeline and its seams (`Decompressor`, `ParserConfig`)
//! so the e2e crate can drive whole runs against temporary bundles.

pub mod cli;
pub mod config;
pub mod decompress;
pub mod emit;
pub mod error;
pub mod mock;
pub mod pipeline;
pub mod staging;
pub mod summary;
