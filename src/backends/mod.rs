//! Backends module - Transcript operations
//!
//! Provides:
//! - list: Transcript enumeration and current-transcript selection
//! - read: Whole-file reading with tail
//! - search: Case-insensitive substring search
//! - combine: Chronological concatenation
//! - messages: Human/assistant message extraction

pub mod combine;
pub mod list;
pub mod messages;
pub mod read;
pub mod search;
