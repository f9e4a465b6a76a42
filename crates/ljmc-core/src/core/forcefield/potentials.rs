use std::f64::consts::PI;

/// Lennard-Jones pair potential in reduced units (unit well depth, unit
/// diameter), evaluated on a squared separation.
///
/// Callers must guarantee `r2 > 0`. The self-pair is stripped upstream by
/// index, so a zero separation reaching this function is a precondition
/// violation; the resulting non-finite value is propagated, not masked.
#[inline]
pub fn lennard_jones(r2: f64) -> f64 {
    let sr6 = (1.0 / r2).powi(3);
    let sr12 = sr6 * sr6;
    4.0 * (sr12 - sr6)
}

/// Analytic long-range correction for a truncated Lennard-Jones fluid,
/// assuming uniform density beyond the cutoff `rc`.
///
/// Depends only on particle count, cell volume, and cutoff; it is added once
/// to the pairwise total, never per particle.
#[inline]
pub fn tail_correction(num_particles: usize, volume: f64, cutoff: f64) -> f64 {
    let n = num_particles as f64;
    let sr3 = (1.0 / cutoff).powi(3);
    let sr9 = sr3.powi(3);
    8.0 / 9.0 * PI * n / volume * n * (sr9 - 3.0 * sr3)
}
