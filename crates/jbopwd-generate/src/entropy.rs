use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore, TryRngCore};

/// Operating-system entropy exposed as an infallible rng.
///
/// Any entropy read failure aborts the process; no weaker fallback source
/// is ever substituted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl RngCore for SystemEntropy {
    fn next_u32(&mut self) -> u32 {
        OsRng
            .try_next_u32()
            .unwrap_or_else(|err| entropy_failure(&err))
    }

    fn next_u64(&mut self) -> u64 {
        OsRng
            .try_next_u64()
            .unwrap_or_else(|err| entropy_failure(&err))
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = OsRng.try_fill_bytes(dest) {
            entropy_failure(&err);
        }
    }
}

impl CryptoRng for SystemEntropy {}

fn entropy_failure(err: &dyn std::fmt::Display) -> ! {
    panic!("operating system entropy source failed: {err}");
}

/// Uniform draw in `[0, bound)` with no modulo bias.
///
/// A bound of zero yields zero rather than an error, so callers can feed
/// degenerate ranges through directly.
pub fn uniform(rng: &mut impl Rng, bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    rng.random_range(0..bound)
}
