//! Testing infrastructure for scentdex integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Custom assertions over the JSON output envelope
//! - `fixtures`: Sample catalogs in both accepted source shapes

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
