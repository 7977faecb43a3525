use miette::*;

/// Longest battery bank the solver accepts.
pub const MAX_BANK_LEN: usize = 121;

/// Most batteries that can be turned on in a single bank.
pub const MAX_BATTERIES: usize = 12;

const POW10: [u64; MAX_BATTERIES + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
];

/// Largest joltage a bank can produce by turning on at most `batteries` of
/// its batteries, read in bank order as a base-10 number.
///
/// Bottom-up DP: `prev` holds the best joltage for every suffix when one
/// fewer battery may still be turned on, `curr` is the row being filled.
/// At each offset we either take the digit there (it becomes the most
/// significant remaining position) or skip it and keep the best value the
/// rest of the suffix already achieves at the same rank.
///
/// Banks shorter than `batteries` simply use every digit they have; the
/// rank loop stops at the bank length.
pub fn max_joltage(bank: &str, batteries: usize) -> Result<u64> {
    let digits = bank.as_bytes();
    let len = digits.len();

    ensure!(
        len <= MAX_BANK_LEN,
        "bank holds {len} batteries, at most {MAX_BANK_LEN} are supported"
    );
    ensure!(
        batteries <= MAX_BATTERIES,
        "cannot turn on {batteries} batteries, the limit is {MAX_BATTERIES}"
    );
    debug_assert!(
        digits.iter().all(u8::is_ascii_digit),
        "banks must contain only decimal digits"
    );

    let mut prev = [0u64; MAX_BANK_LEN + 1];
    let mut curr = [0u64; MAX_BANK_LEN + 1];

    for rank in 1..=batteries.min(len) {
        // A rank-`rank` selection needs `rank` digits left, so valid offsets
        // stop at `len - rank`. The skip lookup at that last offset reads one
        // cell past it; clear that cell so a value left over from two ranks
        // earlier is never read.
        curr[len - rank + 1] = 0;

        for offset in (0..=len - rank).rev() {
            let digit = u64::from(digits[offset] - b'0');
            let take = digit * POW10[rank - 1] + prev[offset + 1];
            let skip = curr[offset + 1];
            curr[offset] = take.max(skip);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    // After the final swap `prev` is the last completed rank row.
    Ok(prev[0])
}
