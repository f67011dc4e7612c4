//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Transcript data model and user-facing errors
//! - Escape decoding
//! - File reading and tailing
//! - Rendering functions for different output formats
//! - Transcript directory conventions
//! - Common utilities

pub mod decode;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
