//! # Engine Module
//!
//! This module ties run configuration to the energy core, providing the
//! orchestration surface a Monte Carlo driver calls into.
//!
//! ## Overview
//!
//! The engine owns no simulation state of its own: it validates configuration,
//! constructs an evaluator against the caller's geometry snapshot, and reduces
//! the core's outputs into the physically reported system energy. Move
//! generation and acceptance live in the driver, outside this crate.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run parameters via builder or TOML file
//! - **Error Handling** ([`error`]) - Engine-level error types wrapping the core's
//! - **Tasks** ([`tasks`]) - Composable computational units over a geometry snapshot

pub mod config;
pub mod error;
pub mod tasks;
