//! Core utilities shared across the toolkit
//!
//! - `cache`: file helpers and the fixture difficulty memo

pub mod cache;

pub use cache::{
    default_config_path, form_fingerprint, write_string, DifficultyCache, DifficultyKey,
};
