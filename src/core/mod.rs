//! Core module - The indexing, search, and rendering engine
//!
//! This module provides:
//! - Dataset model for caniuse-format JSON (model)
//! - Text normalization for case/punctuation-insensitive matching (normalize)
//! - Per-browser support row rendering (support)
//! - One-time feature indexing with pre-rendered display text (index)
//! - Substring-match ranking search (search)
//! - Output rendering for different formats (render)

pub mod index;
pub mod model;
pub mod normalize;
pub mod render;
pub mod search;
pub mod support;
