use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng, TryRngCore};
use tracing::warn;

use crate::errors::RandomError;

/// A cryptographically secure source of uniform randomness.
///
/// Implementations must never fall back to a non-secure generator; when the
/// underlying entropy is unavailable they return
/// [`RandomError::EntropySourceFailure`].
pub trait SecureRandomSource {
    /// Uniformly distributed integer in the closed range `[low, high]`.
    fn uniform_int(&mut self, low: usize, high: usize) -> Result<usize, RandomError>;

    /// `count` uniformly distributed random bytes.
    fn random_bytes(&mut self, count: usize) -> Result<Vec<u8>, RandomError>;
}

/// ChaCha-based CSPRNG seeded from the operating system on construction.
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Result<Self, RandomError> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed).inspect_err(|e| {
            warn!(error = %e, "operating system entropy source failed");
        })?;

        let rng = StdRng::from_seed(seed);
        seed.fill(0);

        Ok(Self { rng })
    }
}

impl SecureRandomSource for SystemRandom {
    fn uniform_int(&mut self, low: usize, high: usize) -> Result<usize, RandomError> {
        if low > high {
            return Err(RandomError::InvalidInput(format!(
                "empty range {}..={}",
                low, high
            )));
        }

        Ok(self.rng.random_range(low..=high))
    }

    fn random_bytes(&mut self, count: usize) -> Result<Vec<u8>, RandomError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(count)
            .map_err(|_| RandomError::InvalidInput(format!("cannot allocate {} bytes", count)))?;
        bytes.resize(count, 0);
        self.rng.fill_bytes(&mut bytes);

        Ok(bytes)
    }
}
