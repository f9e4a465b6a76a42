//! # Core Module
//!
//! This module provides the fundamental building blocks for Lennard-Jones energy
//! accounting in a periodic simulation cell, serving as the computational core of
//! the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and numerics required to compute
//! the potential energy of a particle configuration under a truncated Lennard-Jones
//! pair potential with minimum-image distances and an analytic long-range tail
//! correction.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of the computation:
//!
//! - **Particle Representation** ([`models`]) - The simulation cell, particle
//!   coordinates, and the minimum-image distance metric
//! - **Energy Calculations** ([`forcefield`]) - The pair potential, the tail
//!   correction, and the evaluator that reduces them to system energies
//!
//! ## Scientific Foundation
//!
//! All quantities are expressed in reduced units: unit well depth, unit particle
//! diameter. Interactions beyond a fixed cutoff distance are excluded from direct
//! evaluation and approximated by a uniform-density tail correction, the standard
//! treatment for homogeneous Lennard-Jones fluids.

pub mod forcefield;
pub mod models;
