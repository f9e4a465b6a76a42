use super::potentials;
use crate::core::models::system::Geometry;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnergyError {
    #[error("Cutoff distance must be strictly positive, got {0}")]
    InvalidCutoff(f64),
    #[error("Particle index {index} out of range for a system of {count} particles")]
    IndexOutOfBounds { index: usize, count: usize },
}

/// Evaluates truncated Lennard-Jones energies against one immutable geometry
/// snapshot and one fixed cutoff.
///
/// All operations are pure reads: the evaluator never mutates the geometry and
/// caches nothing beyond the squared cutoff derived at construction, so
/// concurrent evaluation for distinct particles is sound as long as the caller
/// keeps the underlying configuration fixed for the duration of a pass.
pub struct EnergyEvaluator<'a, G: Geometry> {
    geometry: &'a G,
    cutoff: f64,
    cutoff_squared: f64,
}

impl<'a, G: Geometry> EnergyEvaluator<'a, G> {
    pub fn new(geometry: &'a G, cutoff: f64) -> Result<Self, EnergyError> {
        if !cutoff.is_finite() || cutoff <= 0.0 {
            return Err(EnergyError::InvalidCutoff(cutoff));
        }
        Ok(Self {
            geometry,
            cutoff,
            cutoff_squared: cutoff * cutoff,
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Interaction energy of particle `i` with every other particle whose
    /// squared minimum-image separation is strictly inside the squared cutoff.
    pub fn particle_energy(&self, i: usize) -> Result<f64, EnergyError> {
        let count = self.geometry.num_particles();
        if i >= count {
            return Err(EnergyError::IndexOutOfBounds { index: i, count });
        }
        Ok(self.particle_energy_unchecked(i))
    }

    fn particle_energy_unchecked(&self, i: usize) -> f64 {
        let origin = &self.geometry.positions()[i];
        self.geometry
            .minimum_image_sq(origin)
            .into_iter()
            .enumerate()
            .filter(|&(j, r2)| j != i && r2 < self.cutoff_squared)
            .map(|(_, r2)| potentials::lennard_jones(r2))
            .sum()
    }

    /// Total pairwise energy of the system, before the tail correction.
    ///
    /// Sums the per-particle energy over every index and halves the result,
    /// since each unordered pair is visited once from each of its members.
    pub fn total_pair_energy(&self) -> f64 {
        (0..self.geometry.num_particles())
            .map(|i| self.particle_energy_unchecked(i))
            .sum::<f64>()
            / 2.0
    }

    /// Analytic correction for interactions beyond the cutoff, a function of
    /// particle count, cell volume, and cutoff only.
    pub fn tail_correction(&self) -> f64 {
        potentials::tail_correction(
            self.geometry.num_particles(),
            self.geometry.volume(),
            self.cutoff,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::system::{ParticleSystem, SimulationBox};
    use nalgebra::Point3;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn system_in_box(positions: Vec<Point3<f64>>, box_length: f64) -> ParticleSystem {
        let cell = SimulationBox::new(box_length).unwrap();
        ParticleSystem::new(positions, cell)
    }

    #[test]
    fn new_rejects_zero_and_negative_cutoff() {
        let system = system_in_box(vec![], 10.0);
        assert_eq!(
            EnergyEvaluator::new(&system, 0.0).err(),
            Some(EnergyError::InvalidCutoff(0.0))
        );
        assert_eq!(
            EnergyEvaluator::new(&system, -3.0).err(),
            Some(EnergyError::InvalidCutoff(-3.0))
        );
    }

    #[test]
    fn new_rejects_non_finite_cutoff() {
        let system = system_in_box(vec![], 10.0);
        assert!(EnergyEvaluator::new(&system, f64::NAN).is_err());
        assert!(EnergyEvaluator::new(&system, f64::INFINITY).is_err());
    }

    #[test]
    fn particle_energy_rejects_out_of_range_index() {
        let system = system_in_box(vec![Point3::origin()], 10.0);
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();
        assert_eq!(
            evaluator.particle_energy(1),
            Err(EnergyError::IndexOutOfBounds { index: 1, count: 1 })
        );
    }

    #[test]
    fn particle_energy_excludes_the_self_pair() {
        // A lone particle sees only its own zero self-distance; stripping it
        // must leave a finite empty sum, never a division by zero.
        let system = system_in_box(vec![Point3::new(5.0, 5.0, 5.0)], 10.0);
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();
        let energy = evaluator.particle_energy(0).unwrap();
        assert!(energy.is_finite());
        assert_eq!(energy, 0.0);
    }

    #[test]
    fn pair_at_well_minimum_yields_minus_one_total() {
        let r_min = 2.0f64.powf(1.0 / 6.0);
        let system = system_in_box(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(r_min, 0.0, 0.0),
            ],
            10.0,
        );
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();
        assert_eq!(evaluator.cutoff(), 3.0);
        assert!(f64_approx_equal(evaluator.total_pair_energy(), -1.0));
    }

    #[test]
    fn pairs_beyond_cutoff_contribute_nothing() {
        // Mutual separations of 4.0 under a cutoff of 3.0.
        let system = system_in_box(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(0.0, 4.0, 0.0),
            ],
            12.0,
        );
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();
        assert_eq!(evaluator.total_pair_energy(), 0.0);
    }

    #[test]
    fn separation_exactly_at_cutoff_is_excluded() {
        let system = system_in_box(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)],
            10.0,
        );
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();
        assert_eq!(evaluator.total_pair_energy(), 0.0);
    }

    #[test]
    fn cutoff_filter_sees_the_wrapped_image() {
        // Direct separation 9.0 in a box of 10.0 wraps to 1.0, inside the
        // cutoff, where the potential is exactly zero.
        let system = system_in_box(
            vec![Point3::new(0.5, 0.0, 0.0), Point3::new(9.5, 0.0, 0.0)],
            10.0,
        );
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();
        assert!(f64_approx_equal(evaluator.total_pair_energy(), 0.0));
        assert!(f64_approx_equal(evaluator.particle_energy(0).unwrap(), 0.0));
    }

    #[test]
    fn total_equals_half_the_sum_of_particle_energies() {
        let system = system_in_box(
            vec![
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(2.2, 1.0, 1.0),
                Point3::new(1.0, 2.5, 1.0),
                Point3::new(3.0, 3.0, 2.0),
            ],
            8.0,
        );
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();

        let summed: f64 = (0..4)
            .map(|i| evaluator.particle_energy(i).unwrap())
            .sum();
        assert_eq!(evaluator.total_pair_energy(), summed / 2.0);
    }

    #[test]
    fn empty_system_has_zero_pair_energy_and_zero_tail() {
        let system = system_in_box(vec![], 10.0);
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();
        assert_eq!(evaluator.total_pair_energy(), 0.0);
        assert_eq!(evaluator.tail_correction(), 0.0);
    }

    #[test]
    fn tail_correction_ignores_particle_arrangement() {
        let cell_length = 10.0;
        let forward = system_in_box(
            vec![
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(5.0, 5.0, 5.0),
                Point3::new(8.0, 2.0, 6.0),
            ],
            cell_length,
        );
        let shuffled = system_in_box(
            vec![
                Point3::new(8.0, 2.0, 6.0),
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(5.0, 5.0, 5.0),
            ],
            cell_length,
        );

        let a = EnergyEvaluator::new(&forward, 3.0).unwrap();
        let b = EnergyEvaluator::new(&shuffled, 3.0).unwrap();
        assert_eq!(a.tail_correction(), b.tail_correction());
    }

    #[test]
    fn tail_correction_matches_pure_formula() {
        let system = system_in_box(
            vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0)],
            5.0,
        );
        let evaluator = EnergyEvaluator::new(&system, 3.0).unwrap();
        assert_eq!(
            evaluator.tail_correction(),
            potentials::tail_correction(2, 125.0, 3.0)
        );
    }
}
