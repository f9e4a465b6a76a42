//! # Force Field Module
//!
//! This module provides the energy accounting for a truncated Lennard-Jones
//! fluid: the pair potential itself, the analytic long-range correction, and the
//! evaluator that reduces them to per-particle and system energies.
//!
//! ## Overview
//!
//! Direct interactions are evaluated only for pairs whose squared minimum-image
//! separation falls strictly inside the squared cutoff; everything beyond the
//! cutoff is approximated by a uniform-density tail correction added once to the
//! pairwise total. All quantities are in reduced units.
//!
//! ## Key Components
//!
//! - [`potentials`] - Pure numeric forms of the pair potential and tail correction
//! - [`energy`] - The [`energy::EnergyEvaluator`] bound to one geometry and one cutoff
//! - [`term`] - Aggregated system-energy breakdown (pairwise sum plus tail)
//!
//! ## Usage
//!
//! The main entry point is [`energy::EnergyEvaluator`], constructed once per run
//! against an immutable geometry snapshot:
//!
//! ```ignore
//! use ljmc::core::forcefield::energy::EnergyEvaluator;
//!
//! let evaluator = EnergyEvaluator::new(&system, 3.0)?;
//! let energy = evaluator.total_pair_energy() + evaluator.tail_correction();
//! ```

pub mod energy;
pub mod potentials;
pub mod term;
