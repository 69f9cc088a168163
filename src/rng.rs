use rand::{rngs::StdRng, SeedableRng};

/// Create a [`StdRng`] for tensor initialisation.
///
/// Seeded from the `SEED` environment variable when it is set to an
/// integer, otherwise from OS entropy.
pub fn rng_from_env() -> StdRng {
    match std::env::var("SEED").ok().and_then(|s| s.parse().ok()) {
        Some(seed) => {
            log::debug!("seeding rng from SEED={seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
