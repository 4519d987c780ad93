//! Star populations: distance shells that each contribute a fixed number of stars.

/// Number of cluster centers sampled per generated field.
pub const DEFAULT_CLUSTER_COUNT: u32 = 12;

/// Errors raised when building star populations from external input.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SpaceError {
    /// A population's parameters are out of range.
    #[error("invalid star population: {0}")]
    InvalidPopulation(String),
}

/// One shell of stars between `min_radius` and `max_radius` from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarPopulation {
    /// Number of stars in this shell.
    pub count: u32,
    /// Inner radius of the shell in world units.
    pub min_radius: f32,
    /// Outer radius of the shell in world units.
    pub max_radius: f32,
    /// Probability in [0, 1] that a star is pulled toward a cluster center.
    pub cluster_factor: f32,
}

impl StarPopulation {
    /// Create a population, validating its parameters.
    pub fn new(
        count: u32,
        min_radius: f32,
        max_radius: f32,
        cluster_factor: f32,
    ) -> Result<Self, SpaceError> {
        if count == 0 {
            return Err(SpaceError::InvalidPopulation(
                "count must be greater than zero".into(),
            ));
        }
        if !min_radius.is_finite() || !max_radius.is_finite() || min_radius < 0.0 {
            return Err(SpaceError::InvalidPopulation(format!(
                "radii must be finite and non-negative, got [{min_radius}, {max_radius}]"
            )));
        }
        if max_radius < min_radius {
            return Err(SpaceError::InvalidPopulation(format!(
                "max_radius {max_radius} is smaller than min_radius {min_radius}"
            )));
        }
        if !(0.0..=1.0).contains(&cluster_factor) {
            return Err(SpaceError::InvalidPopulation(format!(
                "cluster_factor {cluster_factor} is outside [0, 1]"
            )));
        }
        Ok(Self {
            count,
            min_radius,
            max_radius,
            cluster_factor,
        })
    }

    /// Width of the radius band.
    pub fn radius_span(&self) -> f32 {
        self.max_radius - self.min_radius
    }
}

/// The three built-in shells: distant background, mid-distance, and near stars.
pub fn default_populations() -> Vec<StarPopulation> {
    vec![
        StarPopulation {
            count: 1500,
            min_radius: 800.0,
            max_radius: 1500.0,
            cluster_factor: 0.7,
        },
        StarPopulation {
            count: 1500,
            min_radius: 500.0,
            max_radius: 800.0,
            cluster_factor: 0.7,
        },
        StarPopulation {
            count: 800,
            min_radius: 300.0,
            max_radius: 500.0,
            cluster_factor: 0.7,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_populations_total_3800() {
        let total: u32 = default_populations().iter().map(|p| p.count).sum();
        assert_eq!(total, 3800);
    }

    #[test]
    fn test_default_populations_are_valid() {
        for p in default_populations() {
            let rebuilt =
                StarPopulation::new(p.count, p.min_radius, p.max_radius, p.cluster_factor);
            assert_eq!(rebuilt, Ok(p));
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(StarPopulation::new(0, 1.0, 2.0, 0.5).is_err());
    }

    #[test]
    fn test_inverted_radii_rejected() {
        let err = StarPopulation::new(10, 500.0, 300.0, 0.5).unwrap_err();
        assert!(err.to_string().contains("smaller than"));
    }

    #[test]
    fn test_cluster_factor_out_of_range_rejected() {
        assert!(StarPopulation::new(10, 1.0, 2.0, 1.5).is_err());
        assert!(StarPopulation::new(10, 1.0, 2.0, -0.1).is_err());
        assert!(StarPopulation::new(10, 1.0, 2.0, f32::NAN).is_err());
    }

    #[test]
    fn test_degenerate_band_allowed() {
        let p = StarPopulation::new(5, 100.0, 100.0, 0.0).unwrap();
        assert_eq!(p.radius_span(), 0.0);
    }
}
