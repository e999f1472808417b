// src/core/mod.rs
// Segmentation core. Pure functions of (text, dictionary); no I/O.

pub mod classifier;
pub mod engine;
pub mod graph;
pub mod tcc;
pub mod trie;
pub mod types;
