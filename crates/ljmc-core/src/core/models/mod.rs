//! # Core Models Module
//!
//! This module contains the data structures used to represent a particle
//! configuration inside a periodic simulation cell, providing the foundation for
//! all energy-accounting operations.
//!
//! ## Key Components
//!
//! - [`system`] - The cubic simulation box, the ordered particle coordinate set,
//!   and the [`system::Geometry`] collaborator trait the energy evaluator is
//!   generic over.

pub mod system;
