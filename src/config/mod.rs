//! Configuration module for SpendPace
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendPacePaths;
pub use settings::Settings;
