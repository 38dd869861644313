//! Deterministic answer-order shuffling keyed by question id.
//!
//! The hash and the LCG follow the arithmetic the browser client uses, so a
//! question renders its options in the same order everywhere it is shown.

const HASH_MULTIPLIER: i32 = 31;
const LCG_MULTIPLIER: f64 = 1_103_515_245.0;
const LCG_INCREMENT: f64 = 12_345.0;
const LCG_MASK: u32 = 0x7fff_ffff;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Returns a permuted copy of `items`; identical seeds yield identical orders.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut hash = seed_hash(seed);

    for i in (1..shuffled.len()).rev() {
        hash = next_state(hash);
        let j = (hash as usize) % (i + 1);
        shuffled.swap(i, j);
    }

    shuffled
}

/// Polynomial rolling hash over UTF-16 code units with 32-bit wraparound.
pub(crate) fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
    })
}

/// One LCG step. The product is taken in double precision and truncated to
/// 32 bits before masking, matching `(hash * 1103515245 + 12345) & 0x7fffffff`
/// in the client.
pub(crate) fn next_state(hash: i32) -> i32 {
    let product = f64::from(hash) * LCG_MULTIPLIER + LCG_INCREMENT;
    (to_uint32(product) & LCG_MASK) as i32
}

fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(TWO_POW_32) as u32
}
