use crate::core::forcefield::energy::EnergyEvaluator;
use crate::core::forcefield::term::SystemEnergy;
use crate::core::models::system::Geometry;
use crate::engine::config::EnergyConfig;
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

/// Computes the physically reported system energy: the truncated pairwise sum
/// plus, unless disabled in the configuration, the long-range tail correction.
#[instrument(skip_all, name = "system_energy_task")]
pub fn run<G: Geometry>(geometry: &G, config: &EnergyConfig) -> Result<SystemEnergy, EngineError> {
    let evaluator = EnergyEvaluator::new(geometry, config.cutoff)?;

    let pair = evaluator.total_pair_energy();
    let tail = if config.tail_correction {
        evaluator.tail_correction()
    } else {
        0.0
    };

    debug!(
        particles = geometry.num_particles(),
        pair, tail, "system energy evaluated"
    );
    Ok(SystemEnergy::new(pair, tail))
}
