//! Bounded integer partitions of an affinity gap.
//!
//! An outstanding amount is split into a fixed number of parts, each part to be
//! covered by one filler cluster's completion bonus. The number of parts comes
//! from one of two tuning tables ([`standard_part_count`], [`rare_part_count`]).
//!
//! # Invariants
//!
//! - Every partition is non-increasing, sums to the requested total, has exactly
//!   the requested number of parts, and no part exceeds `max_part`.
//! - Results are exhaustive and duplicate-free, ordered by ascending leading
//!   part (most balanced first).
//! - Enumeration is bounded: at most [`MAX_PARTS`] parts of at most
//!   [`MAX_PART`] each.

use alloc::vec::Vec;

use crate::affinity::AffinityKind;

/// Largest completion bonus any filler grants, hence the largest useful part.
pub const MAX_PART: u8 = 6;

/// Largest number of parts any tuning table asks for.
pub const MAX_PARTS: usize = 5;

/// One non-increasing split of a total.
pub type Partition = heapless::Vec<u8, MAX_PARTS>;

/// Every non-increasing sequence of `part_count` positive integers summing to
/// `total`, each at most `max_part`.
///
/// ```rust
/// use devotion_core::partition::enumerate_partitions;
///
/// let parts = enumerate_partitions(6, 2, 6);
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts[0].as_slice(), &[3, 3]);
/// ```
pub fn enumerate_partitions(total: u8, part_count: usize, max_part: u8) -> Vec<Partition> {
    let mut out = Vec::new();
    if total == 0 || part_count == 0 || part_count > MAX_PARTS || max_part == 0 {
        return out;
    }
    let mut prefix = Partition::new();
    fill(total, part_count, max_part, &mut prefix, &mut out);
    out
}

fn fill(total: u8, parts_left: usize, limit: u8, prefix: &mut Partition, out: &mut Vec<Partition>) {
    if usize::from(total) < parts_left {
        return;
    }
    if parts_left == 1 {
        if total <= limit {
            let mut done = prefix.clone();
            if done.push(total).is_ok() {
                out.push(done);
            }
        }
        return;
    }
    // parts_left <= MAX_PARTS, so the casts are lossless.
    let n = parts_left as u8;
    let start = total.div_ceil(n);
    let stop = limit.min(total - n + 1);
    for first in start..=stop {
        if prefix.push(first).is_err() {
            return;
        }
        fill(total - first, parts_left - 1, first, prefix, out);
        prefix.pop();
    }
}

/// Number of parts the standard approach splits `amount` of `kind` into.
pub fn standard_part_count(kind: AffinityKind, amount: u8) -> usize {
    match kind {
        AffinityKind::Order | AffinityKind::Chaos => match amount {
            8.. => 3,
            6 | 7 | 4 => 2,
            _ => 1,
        },
        AffinityKind::Ascendant | AffinityKind::Eldritch => match amount {
            17.. => 4,
            12..=16 => 3,
            7..=11 => 2,
            _ => 1,
        },
        AffinityKind::Primordial => match amount {
            16.. => 4,
            11..=15 => 3,
            6..=10 => 2,
            _ => 1,
        },
    }
}

/// Number of parts the rare approach splits `amount` of `kind` into.
pub fn rare_part_count(kind: AffinityKind, amount: u8) -> usize {
    match kind {
        AffinityKind::Order | AffinityKind::Chaos => match amount {
            8.. => 4,
            6 | 7 => 3,
            _ => 2,
        },
        AffinityKind::Ascendant | AffinityKind::Eldritch => match amount {
            17.. => 5,
            12..=16 => 4,
            7..=11 => 3,
            _ => 1,
        },
        AffinityKind::Primordial => match amount {
            16.. => 5,
            11..=15 => 4,
            6..=10 => 3,
            _ => 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_vecs(parts: &[Partition]) -> Vec<Vec<u8>> {
        parts.iter().map(|p| p.to_vec()).collect()
    }

    #[test]
    fn test_six_into_two() {
        let got = as_vecs(&enumerate_partitions(6, 2, 6));
        assert_eq!(got, [vec![3, 3], vec![4, 2], vec![5, 1]]);
    }

    #[test]
    fn test_single_part() {
        assert_eq!(as_vecs(&enumerate_partitions(5, 1, 6)), [vec![5]]);
        assert!(enumerate_partitions(7, 1, 6).is_empty());
    }

    #[test]
    fn test_impossible_cases_empty() {
        assert!(enumerate_partitions(0, 2, 6).is_empty());
        assert!(enumerate_partitions(3, 0, 6).is_empty());
        assert!(enumerate_partitions(2, 3, 6).is_empty());
        assert!(enumerate_partitions(20, 3, 6).is_empty());
        assert!(enumerate_partitions(10, 6, 6).is_empty());
    }

    #[test]
    fn test_respects_max_part() {
        let got = as_vecs(&enumerate_partitions(8, 2, 5));
        assert_eq!(got, [vec![4, 4], vec![5, 3]]);
    }

    #[test]
    fn test_exhaustive_properties() {
        for total in 1..=30u8 {
            for count in 1..=MAX_PARTS {
                let parts = enumerate_partitions(total, count, MAX_PART);
                for p in &parts {
                    assert_eq!(p.len(), count);
                    assert_eq!(p.iter().map(|&x| u32::from(x)).sum::<u32>(), u32::from(total));
                    assert!(p.windows(2).all(|w| w[0] >= w[1]));
                    assert!(p.iter().all(|&x| (1..=MAX_PART).contains(&x)));
                }
                let mut dedup = as_vecs(&parts);
                dedup.sort();
                dedup.dedup();
                assert_eq!(dedup.len(), parts.len());
            }
        }
    }

    #[test]
    fn test_twelve_into_three_count() {
        // 6+5+1, 6+4+2, 6+3+3, 5+5+2, 5+4+3, 4+4+4
        assert_eq!(enumerate_partitions(12, 3, 6).len(), 6);
    }

    #[test]
    fn test_standard_table() {
        use AffinityKind::*;
        assert_eq!(standard_part_count(Order, 8), 3);
        assert_eq!(standard_part_count(Chaos, 7), 2);
        assert_eq!(standard_part_count(Order, 4), 2);
        assert_eq!(standard_part_count(Order, 5), 1);
        assert_eq!(standard_part_count(Ascendant, 17), 4);
        assert_eq!(standard_part_count(Eldritch, 12), 3);
        assert_eq!(standard_part_count(Eldritch, 7), 2);
        assert_eq!(standard_part_count(Ascendant, 6), 1);
        assert_eq!(standard_part_count(Primordial, 16), 4);
        assert_eq!(standard_part_count(Primordial, 11), 3);
        assert_eq!(standard_part_count(Primordial, 6), 2);
        assert_eq!(standard_part_count(Primordial, 5), 1);
    }

    #[test]
    fn test_rare_table() {
        use AffinityKind::*;
        assert_eq!(rare_part_count(Chaos, 9), 4);
        assert_eq!(rare_part_count(Order, 6), 3);
        assert_eq!(rare_part_count(Order, 3), 2);
        assert_eq!(rare_part_count(Ascendant, 20), 5);
        assert_eq!(rare_part_count(Eldritch, 13), 4);
        assert_eq!(rare_part_count(Eldritch, 8), 3);
        assert_eq!(rare_part_count(Ascendant, 3), 1);
        assert_eq!(rare_part_count(Primordial, 16), 5);
        assert_eq!(rare_part_count(Primordial, 11), 4);
        assert_eq!(rare_part_count(Primordial, 6), 3);
        assert_eq!(rare_part_count(Primordial, 5), 1);
    }
}
