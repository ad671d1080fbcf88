//! Acid-driven cell death

use rand::Rng;

use crate::core::config::SimulationParameters;
use crate::genetics::Phenotype;

/// Probability that a cell with `phenotype` dies at this acid level
///
/// Rises linearly up to the phenotype's threshold and is certain from the
/// threshold on (equality included).
pub fn death_probability(phenotype: Phenotype, acid: f64, params: &SimulationParameters) -> f64 {
    let threshold = params.acid_threshold(phenotype.acid_resistant());
    if acid < threshold {
        (acid / threshold).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Draw whether the cell dies this tick
pub fn dies<R: Rng + ?Sized>(
    phenotype: Phenotype,
    acid: f64,
    params: &SimulationParameters,
    rng: &mut R,
) -> bool {
    rng.gen_bool(death_probability(phenotype, acid, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_half_threshold_resistant() {
        let params = SimulationParameters::default();
        let a: Phenotype = "A".parse().unwrap();
        let p = death_probability(a, 0.5 * params.h_resistant, &params);
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normal_at_or_above_threshold_is_certain() {
        let params = SimulationParameters::default();
        assert_eq!(death_probability(Phenotype::NORMAL, params.h_normal, &params), 1.0);
        assert_eq!(death_probability(Phenotype::NORMAL, 10.0 * params.h_normal, &params), 1.0);

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(dies(Phenotype::NORMAL, params.h_normal, &params, &mut rng));
        }
    }

    #[test]
    fn test_resistance_uses_higher_threshold() {
        let params = SimulationParameters::default();
        let acid = params.h_normal;
        let resistant: Phenotype = "AGH".parse().unwrap();
        let plain: Phenotype = "GH".parse().unwrap();
        assert!(death_probability(resistant, acid, &params) < 0.2);
        assert_eq!(death_probability(plain, acid, &params), 1.0);
    }

    #[test]
    fn test_negative_acid_never_kills() {
        let params = SimulationParameters::default();
        assert_eq!(death_probability(Phenotype::NORMAL, -3.0, &params), 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert!(!dies(Phenotype::NORMAL, -3.0, &params, &mut rng));
    }

    proptest! {
        #[test]
        fn prop_death_probability_monotone(
            a in -10.0f64..20000.0,
            b in -10.0f64..20000.0,
            bits in 0usize..8,
        ) {
            let params = SimulationParameters::default();
            let phenotype = Phenotype::ALL[bits];
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = death_probability(phenotype, lo, &params);
            let p_hi = death_probability(phenotype, hi, &params);
            prop_assert!((0.0..=1.0).contains(&p_lo));
            prop_assert!(p_lo <= p_hi);
        }
    }
}
