use sha2::{Digest, Sha256};

const STABLE_RAND_MODULUS: u64 = 10_000_000;

/// Deterministic pseudo-random value in [0, 1) derived from `key`.
/// Same key, same value, on every machine and every run.
pub fn stable_rand_0_1(key: &str) -> f64 {
    let digest = Sha256::digest(key.as_bytes());
    // First 12 hex digits == first 6 bytes
    let head = digest
        .iter()
        .take(6)
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
    (head % STABLE_RAND_MODULUS) as f64 / STABLE_RAND_MODULUS as f64
}

/// Clamp to [0, 1].
pub fn pct01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Round to one decimal place, ties resolved on the exact binary value
/// (so 0.25 -> 0.2, 0.35 -> 0.3 since 0.35 is stored slightly below).
pub fn round1(x: f64) -> f64 {
    format!("{:.1}", x).parse().unwrap_or(x)
}

/// Round half to even, to whole units.
pub fn round_even(x: f64) -> i64 {
    x.round_ties_even() as i64
}
