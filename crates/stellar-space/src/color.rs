//! Weighted spectral classes used to tint stars.

use rand::Rng;

/// Upper bounds of the cumulative band thresholds. Rolls at or above the last
/// threshold fall into the exotic band.
pub const BAND_THRESHOLDS: [f32; 10] = [0.03, 0.06, 0.10, 0.15, 0.25, 0.40, 0.55, 0.70, 0.85, 0.95];

/// Probability of each of the 11 bands, in band order. The exotic band (last)
/// splits evenly between [`StarClass::ExoticPurple`] and [`StarClass::ExoticGreen`].
pub const BAND_WEIGHTS: [f32; 11] = [
    0.03, 0.03, 0.04, 0.05, 0.10, 0.15, 0.15, 0.15, 0.15, 0.10, 0.05,
];

/// Spectral class of a generated star.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StarClass {
    RedSupergiant,
    OrangeGiant,
    BlueSupergiant,
    BlueWhiteGiant,
    YellowGiant,
    YellowMainSequence,
    OrangeMainSequence,
    RedDwarf,
    /// Neutral white, perturbed per star by a shared variation in [0.9, 1.0].
    WhiteMainSequence,
    BlueWhiteMainSequence,
    ExoticPurple,
    ExoticGreen,
}

impl StarClass {
    /// Index of the band a roll in [0, 1) lands in (0..=10).
    pub fn band_index(roll: f32) -> usize {
        BAND_THRESHOLDS
            .iter()
            .position(|&t| roll < t)
            .unwrap_or(BAND_THRESHOLDS.len())
    }

    /// Map a band roll to a class. The exotic band needs a second roll to pick a tint.
    pub fn classify(roll: f32, exotic_roll: f32) -> Self {
        match Self::band_index(roll) {
            0 => Self::RedSupergiant,
            1 => Self::OrangeGiant,
            2 => Self::BlueSupergiant,
            3 => Self::BlueWhiteGiant,
            4 => Self::YellowGiant,
            5 => Self::YellowMainSequence,
            6 => Self::OrangeMainSequence,
            7 => Self::RedDwarf,
            8 => Self::WhiteMainSequence,
            9 => Self::BlueWhiteMainSequence,
            _ if exotic_roll < 0.5 => Self::ExoticPurple,
            _ => Self::ExoticGreen,
        }
    }

    /// Draw a class from the weighted bands. Only the exotic band consumes a second value.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: f32 = rng.random();
        if Self::band_index(roll) == BAND_THRESHOLDS.len() {
            Self::classify(roll, rng.random())
        } else {
            Self::classify(roll, 0.0)
        }
    }

    /// Fixed RGB multipliers. `variation` only affects [`StarClass::WhiteMainSequence`].
    pub fn tint(self, variation: f32) -> [f32; 3] {
        match self {
            Self::RedSupergiant => [1.0, 0.2, 0.1],
            Self::OrangeGiant => [1.0, 0.5, 0.2],
            Self::BlueSupergiant => [0.6, 0.8, 1.0],
            Self::BlueWhiteGiant => [0.8, 0.9, 1.0],
            Self::YellowGiant => [1.0, 0.9, 0.6],
            Self::YellowMainSequence => [1.0, 0.95, 0.8],
            Self::OrangeMainSequence => [1.0, 0.7, 0.4],
            Self::RedDwarf => [1.0, 0.4, 0.3],
            Self::WhiteMainSequence => [variation, variation, variation],
            Self::BlueWhiteMainSequence => [0.9, 0.95, 1.0],
            Self::ExoticPurple => [0.9, 0.6, 1.0],
            Self::ExoticGreen => [0.7, 1.0, 0.8],
        }
    }

    /// Final star color: the class tint scaled by brightness. White stars draw
    /// their variation from `rng`.
    pub fn color<R: Rng + ?Sized>(self, brightness: f32, rng: &mut R) -> [f32; 3] {
        let variation = if self == Self::WhiteMainSequence {
            0.9 + rng.random::<f32>() * 0.1
        } else {
            1.0
        };
        self.tint(variation).map(|c| c * brightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_thresholds_match_weights() {
        let mut cumulative = 0.0;
        for (i, &w) in BAND_WEIGHTS.iter().take(BAND_THRESHOLDS.len()).enumerate() {
            cumulative += w;
            assert!(
                (cumulative - BAND_THRESHOLDS[i]).abs() < 1e-5,
                "Band {i}: cumulative weight {cumulative} != threshold {}",
                BAND_THRESHOLDS[i]
            );
        }
        let total: f32 = BAND_WEIGHTS.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StarClass::classify(0.0, 0.0), StarClass::RedSupergiant);
        assert_eq!(StarClass::classify(0.03, 0.0), StarClass::OrangeGiant);
        assert_eq!(StarClass::classify(0.0999, 0.0), StarClass::BlueSupergiant);
        assert_eq!(StarClass::classify(0.10, 0.0), StarClass::BlueWhiteGiant);
        assert_eq!(StarClass::classify(0.5, 0.0), StarClass::OrangeMainSequence);
        assert_eq!(StarClass::classify(0.80, 0.0), StarClass::WhiteMainSequence);
        assert_eq!(StarClass::classify(0.94, 0.0), StarClass::BlueWhiteMainSequence);
        assert_eq!(StarClass::classify(0.97, 0.2), StarClass::ExoticPurple);
        assert_eq!(StarClass::classify(0.97, 0.7), StarClass::ExoticGreen);
    }

    #[test]
    fn test_band_frequencies_converge_to_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let draws = 100_000;
        let mut counts = [0u32; 11];
        for _ in 0..draws {
            counts[StarClass::band_index(rng.random())] += 1;
        }
        for (i, &count) in counts.iter().enumerate() {
            let observed = count as f32 / draws as f32;
            assert!(
                (observed - BAND_WEIGHTS[i]).abs() < 0.006,
                "Band {i}: observed {observed:.4}, expected {}",
                BAND_WEIGHTS[i]
            );
        }
    }

    #[test]
    fn test_exotic_band_splits_evenly() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut purple = 0u32;
        let mut green = 0u32;
        for _ in 0..100_000 {
            match StarClass::sample(&mut rng) {
                StarClass::ExoticPurple => purple += 1,
                StarClass::ExoticGreen => green += 1,
                _ => {}
            }
        }
        let exotic = purple + green;
        assert!((4_300..=5_700).contains(&exotic), "exotic count {exotic}");
        let ratio = purple as f32 / exotic as f32;
        assert!((0.45..=0.55).contains(&ratio), "purple ratio {ratio}");
    }

    #[test]
    fn test_tints_never_exceed_one() {
        let classes = [
            StarClass::RedSupergiant,
            StarClass::OrangeGiant,
            StarClass::BlueSupergiant,
            StarClass::BlueWhiteGiant,
            StarClass::YellowGiant,
            StarClass::YellowMainSequence,
            StarClass::OrangeMainSequence,
            StarClass::RedDwarf,
            StarClass::WhiteMainSequence,
            StarClass::BlueWhiteMainSequence,
            StarClass::ExoticPurple,
            StarClass::ExoticGreen,
        ];
        for class in classes {
            for c in class.tint(1.0) {
                assert!((0.0..=1.0).contains(&c), "{class:?} tint channel {c}");
            }
        }
    }

    #[test]
    fn test_red_supergiant_color_scales_with_brightness() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let color = StarClass::RedSupergiant.color(0.5, &mut rng);
        assert_eq!(color, [0.5, 0.1, 0.05]);
    }

    #[test]
    fn test_white_variation_is_shared_across_channels() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let [r, g, b] = StarClass::WhiteMainSequence.color(1.0, &mut rng);
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert!((0.9..=1.0).contains(&r), "variation {r} outside [0.9, 1.0]");
        }
    }
}
