//! # LJMC Core Library
//!
//! An energy-evaluation core for Metropolis Monte Carlo simulations of
//! truncated Lennard-Jones fluids in reduced units.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict two-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless particle-system model
//!   (`ParticleSystem`, `SimulationBox`), pure mathematical forms of the pair
//!   potential and its long-range correction (`potentials`), and the
//!   `EnergyEvaluator` that aggregates them into per-particle and system energies.
//!
//! - **[`engine`]: The Orchestration Layer.** Ties run configuration to the core
//!   to produce the physically reported system energy (pairwise sum plus tail
//!   correction). A Monte Carlo driver sits on top of this layer; move generation,
//!   acceptance criteria, and trajectory I/O are deliberately outside this crate.

pub mod core;
pub mod engine;
