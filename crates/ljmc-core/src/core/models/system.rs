use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SystemError {
    #[error("Box edge length must be strictly positive, got {0}")]
    InvalidBoxLength(f64),
}

/// A cubic simulation cell with periodic boundary conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox {
    length: f64,
}

impl SimulationBox {
    pub fn new(length: f64) -> Result<Self, SystemError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(SystemError::InvalidBoxLength(length));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn volume(&self) -> f64 {
        self.length * self.length * self.length
    }

    /// Squared distance between `a` and `b` under the minimum-image convention:
    /// each displacement component is wrapped to the nearest periodic replica.
    #[inline]
    pub fn minimum_image_sq(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        let mut d = b - a;
        d.x -= self.length * (d.x / self.length).round();
        d.y -= self.length * (d.y / self.length).round();
        d.z -= self.length * (d.z / self.length).round();
        d.norm_squared()
    }
}

/// The geometry collaborator the energy evaluator is generic over.
///
/// Implementations expose a fixed, ordered particle coordinate set and the
/// minimum-image distance metric of the enclosing cell. The evaluator only
/// reads through this trait and never mutates the underlying configuration.
pub trait Geometry {
    fn num_particles(&self) -> usize;

    fn volume(&self) -> f64;

    fn positions(&self) -> &[Point3<f64>];

    /// Squared minimum-image distances from `point` to every particle.
    ///
    /// The returned sequence is index-aligned with [`Geometry::positions`]:
    /// entry `j` is the squared distance to particle `j`. Callers rely on this
    /// ordering to strip the self-entry when `point` is a particle's own
    /// position, so implementations must never reorder it.
    fn minimum_image_sq(&self, point: &Point3<f64>) -> Vec<f64>;
}

/// An ordered particle configuration inside a cubic periodic cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem {
    positions: Vec<Point3<f64>>,
    cell: SimulationBox,
}

impl ParticleSystem {
    pub fn new(positions: Vec<Point3<f64>>, cell: SimulationBox) -> Self {
        Self { positions, cell }
    }

    pub fn cell(&self) -> &SimulationBox {
        &self.cell
    }

    pub fn position(&self, i: usize) -> Option<&Point3<f64>> {
        self.positions.get(i)
    }
}

impl Geometry for ParticleSystem {
    fn num_particles(&self) -> usize {
        self.positions.len()
    }

    fn volume(&self) -> f64 {
        self.cell.volume()
    }

    fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    fn minimum_image_sq(&self, point: &Point3<f64>) -> Vec<f64> {
        self.positions
            .iter()
            .map(|p| self.cell.minimum_image_sq(point, p))
            .collect()
    }
}
