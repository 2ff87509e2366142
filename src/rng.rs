use std::sync::{Mutex, PoisonError};

use log::trace;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::SeedableRng;

static SOURCE: Lazy<Mutex<StdRng>> = Lazy::new(|| Mutex::new(StdRng::from_entropy()));

/// Runs `op` with exclusive access to the process-wide random source.
pub(crate) fn with_source<T>(op: impl FnOnce(&mut StdRng) -> T) -> T {
    let mut rng = SOURCE.lock().unwrap_or_else(PoisonError::into_inner);
    op(&mut rng)
}

/// Reseeds the process-wide random source used by [`Die::roll`](crate::Die::roll)
/// and [`Game::play`](crate::Game::play).
pub fn reseed(seed: u64) {
    trace!("reseeding process random source with {seed}");
    with_source(|rng| *rng = StdRng::seed_from_u64(seed));
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn reseed_replays_the_same_stream() {
        // Holding the lock across both draws keeps other tests from interleaving.
        let (a, b) = with_source(|rng| {
            *rng = StdRng::seed_from_u64(7);
            let a: [u32; 4] = rng.gen();
            *rng = StdRng::seed_from_u64(7);
            let b: [u32; 4] = rng.gen();
            (a, b)
        });
        assert_eq!(a, b);
    }
}
