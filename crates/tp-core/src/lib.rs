//! # tp-core
//!
//! Core types, traits, and configuration for Team Planner.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types and the `TpResult` alias
//! - Core traits (Entity, Identifiable, ProjectScoped)
//! - Configuration types

pub mod config;
pub mod error;
pub mod traits;

pub use error::*;
pub use traits::*;
