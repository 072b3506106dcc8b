//! Embedded data assets
//!
//! The recipe catalog and the game playlist are compiled into the binary.

/// Recipe catalog JSON shipped with the binary
pub const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

// Include generated playlist table from build script
include!(concat!(env!("OUT_DIR"), "/game_dishes.rs"));
