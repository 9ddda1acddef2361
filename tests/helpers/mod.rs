//! Test helpers module
//!
//! This module provides utilities for testing the LinguaRelay application:
//! an in-memory database, a scripted translator, a recording chat transport
//! and test data builders.

#![allow(dead_code)]

pub mod database_helper;
pub mod mock_translator;
pub mod recording_transport;
pub mod test_data;

pub use database_helper::*;
pub use mock_translator::MockTranslator;
pub use recording_transport::*;
pub use test_data::*;
