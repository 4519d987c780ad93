//! Starfield generation: scatters each population through its radius shell,
//! biases most stars toward a handful of cluster directions, and tints them
//! by spectral class.
//!
//! The result is a static point cloud generated once at startup. Positions and
//! colors are stored as parallel arrays so they can be uploaded as two vertex
//! attributes with per-point coloring.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::color::StarClass;
use crate::population::{DEFAULT_CLUSTER_COUNT, StarPopulation, default_populations};

/// Direction bias shared by a group of clustered stars.
///
/// Each axis is drawn from `(u - 0.7) * 2`, so centers lean toward negative
/// coordinates rather than covering the unit sphere evenly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterCenter(pub Vec3);

impl ClusterCenter {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut axis = || (rng.random::<f32>() - 0.7) * 2.0;
        Self(Vec3::new(axis(), axis(), axis()))
    }
}

/// A generated starfield as parallel per-star arrays, in population-then-star order.
#[derive(Clone, Debug, Default)]
pub struct Starfield {
    /// World-space position of each star.
    pub positions: Vec<[f32; 3]>,
    /// Linear RGB color of each star, already scaled by brightness.
    pub colors: Vec<[f32; 3]>,
    /// Base brightness in [0, 1]. Kept for twinkle effects; nothing reads it yet.
    pub brightness: Vec<f32>,
    /// Twinkle phase in [0, 2π). Kept alongside brightness.
    pub phases: Vec<f32>,
}

impl Starfield {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            brightness: Vec::with_capacity(capacity),
            phases: Vec::with_capacity(capacity),
        }
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as interleaved `x, y, z` triples (`3 * len` floats).
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as interleaved `r, g, b` triples (`3 * len` floats).
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Raw bytes of the position buffer for vertex upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the color buffer for vertex upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Largest distance of any star from the origin.
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| Vec3::from_array(*p).length())
            .fold(0.0, f32::max)
    }
}

/// Generates a starfield from a list of populations.
///
/// Without a seed every call produces a different but statistically
/// equivalent field. With a seed the output is reproducible.
#[derive(Clone, Debug)]
pub struct StarfieldGenerator {
    populations: Vec<StarPopulation>,
    cluster_count: u32,
    seed: Option<u64>,
}

impl Default for StarfieldGenerator {
    fn default() -> Self {
        Self::new(default_populations())
    }
}

impl StarfieldGenerator {
    /// Create an unseeded generator with the default cluster count.
    pub fn new(populations: Vec<StarPopulation>) -> Self {
        Self {
            populations,
            cluster_count: DEFAULT_CLUSTER_COUNT,
            seed: None,
        }
    }

    /// Override the number of cluster centers. Zero disables clustering.
    pub fn with_cluster_count(mut self, cluster_count: u32) -> Self {
        self.cluster_count = cluster_count;
        self
    }

    /// Make generation reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn populations(&self) -> &[StarPopulation] {
        &self.populations
    }

    pub fn cluster_count(&self) -> u32 {
        self.cluster_count
    }

    /// Sum of all population counts.
    pub fn total_stars(&self) -> usize {
        self.populations.iter().map(|p| p.count as usize).sum()
    }

    /// Generate the field, seeding from the configured seed or from the thread RNG.
    pub fn generate(&self) -> Starfield {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        self.generate_with(&mut rng)
    }

    /// Generate the field from an explicit random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Starfield {
        let clusters: Vec<ClusterCenter> = (0..self.cluster_count)
            .map(|_| ClusterCenter::sample(rng))
            .collect();

        let mut field = Starfield::with_capacity(self.total_stars());

        for population in &self.populations {
            for _ in 0..population.count {
                let position = place_star(population, &clusters, rng);

                // Power-law brightness: many dim stars, few bright ones.
                let brightness = rng.random::<f32>().powf(2.5);
                let class = StarClass::sample(rng);
                let color = class.color(brightness, rng);
                let phase = rng.random::<f32>() * TAU;

                field.positions.push(position.to_array());
                field.colors.push(color);
                field.brightness.push(brightness);
                field.phases.push(phase);
            }
        }

        tracing::debug!(
            stars = field.len(),
            populations = self.populations.len(),
            clusters = clusters.len(),
            "Generated starfield"
        );

        field
    }
}

/// Pick a world-space position for one star of `population`.
///
/// Clustered stars get an offset toward their cluster direction that is not
/// projected back onto the shell, so they may land slightly outside the band.
fn place_star<R: Rng + ?Sized>(
    population: &StarPopulation,
    clusters: &[ClusterCenter],
    rng: &mut R,
) -> Vec3 {
    let clustered = rng.random::<f32>() < population.cluster_factor && !clusters.is_empty();

    if clustered {
        let cluster = clusters[rng.random_range(0..clusters.len())];
        let spread = 0.3 + rng.random::<f32>() * 0.4;
        let theta = rng.random::<f32>() * TAU;
        let phi = rng.random::<f32>() * PI;
        let radius = population.min_radius + rng.random::<f32>() * population.radius_span();

        spherical(radius, theta, phi) + cluster.0 * spread * radius * 0.1
    } else {
        let radius = population.min_radius + rng.random::<f32>() * population.radius_span();
        let theta = rng.random::<f32>() * TAU;
        let phi = rng.random::<f32>() * PI;

        spherical(radius, theta, phi)
    }
}

fn spherical(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}
