//! Tasks over an immutable geometry snapshot.
//!
//! Tasks are the computational units a driver composes between Monte Carlo
//! moves. Each task borrows the caller's geometry, performs a bounded pure
//! computation, and returns a value; no task holds state across calls.

pub mod system_energy;
