//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod group;

// Re-export repositories
pub use group::GroupSettingsRepository;
