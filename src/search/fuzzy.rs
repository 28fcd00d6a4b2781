//! Fuzzy partial-ratio scoring.
//!
//! The shorter string is aligned against every same-length window of the
//! longer one (plus the shorter prefixes and suffixes that overlap it at the
//! edges) and the best indel similarity wins. Similarity is
//! `2 * LCS / (len_a + len_b)`, reported on a 0-100 scale and rounded to a
//! whole number. Lengths are counted in chars, not bytes.
//!
//! LCS lengths come from a bit-parallel row over the shorter string, so one
//! alignment costs `O(len * ceil(short / 64))`. Every edge overlap falls out
//! of a single pass, and windows whose character multiset cannot beat the
//! current best are skipped without running the LCS at all.

use std::cmp::Ordering;
use std::collections::HashMap;

const WORD_BITS: usize = 64;

/// Partial-ratio score of `a` against `b`, 0-100.
///
/// Returns 0 when either side is empty and 100 when the shorter string
/// occurs verbatim in the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let best = match a.len().cmp(&b.len()) {
        Ordering::Less => best_alignment(&a, &b),
        Ordering::Greater => best_alignment(&b, &a),
        // Either side may play the short role.
        Ordering::Equal => best_alignment(&a, &b).max(best_alignment(&b, &a)),
    };

    (best * 100.0).round()
}

/// Best indel similarity of `short` against windows and edge overlaps of
/// `long`. `short` must be non-empty and not longer than `long`.
fn best_alignment(short: &[char], long: &[char]) -> f64 {
    let m = short.len();
    if long.windows(m).any(|window| window == short) {
        return 1.0;
    }

    let forward = Pattern::new(short.iter().copied());
    let backward = Pattern::new(short.iter().rev().copied());

    // Partial overlaps at either end of the long string.
    let mut best = edge_overlap(&forward, long.iter().take(m - 1))
        .max(edge_overlap(&backward, long.iter().rev().take(m - 1)));

    // Masks are looked up once per position of `long`, not once per window.
    let masks: Vec<Option<&[u64]>> = long.iter().map(|&c| forward.mask(c)).collect();
    let mut bound = WindowBound::new(short, &long[..m]);
    for start in 0..=long.len() - m {
        if start > 0 {
            bound.remove(long[start - 1]);
            bound.add(long[start + m - 1]);
        }
        if similarity(bound.common, m, m) <= best {
            continue;
        }
        let mut row = LcsRow::new(&forward);
        for &mask in &masks[start..start + m] {
            row.step(mask);
        }
        best = best.max(similarity(row.lcs(m), m, m));
    }
    best
}

/// Best similarity of the pattern against each prefix of `text`.
fn edge_overlap<'a>(pattern: &Pattern, text: impl Iterator<Item = &'a char>) -> f64 {
    let mut row = LcsRow::new(pattern);
    let mut best = 0.0_f64;
    for (k, &c) in text.enumerate() {
        row.step(pattern.mask(c));
        best = best.max(similarity(row.lcs(pattern.len), pattern.len, k + 1));
    }
    best
}

#[allow(clippy::cast_precision_loss)]
fn similarity(lcs: usize, len_a: usize, len_b: usize) -> f64 {
    let total = len_a + len_b;
    if total == 0 {
        return 1.0;
    }
    (2 * lcs) as f64 / total as f64
}

/// Per-character match masks of a pattern, one bit per position.
struct Pattern {
    len: usize,
    words: usize,
    masks: HashMap<char, Vec<u64>>,
}

impl Pattern {
    fn new(chars: impl Iterator<Item = char>) -> Self {
        let chars: Vec<char> = chars.collect();
        let len = chars.len();
        let words = len.div_ceil(WORD_BITS);
        let mut masks: HashMap<char, Vec<u64>> = HashMap::new();
        for (i, c) in chars.into_iter().enumerate() {
            masks.entry(c).or_insert_with(|| vec![0; words])[i / WORD_BITS] |=
                1 << (i % WORD_BITS);
        }
        Self { len, words, masks }
    }

    fn mask(&self, c: char) -> Option<&[u64]> {
        self.masks.get(&c).map(Vec::as_slice)
    }

    /// LCS length of the pattern and `text`.
    #[cfg(test)]
    fn lcs(&self, text: &[char]) -> usize {
        let mut row = LcsRow::new(self);
        for &c in text {
            row.step(self.mask(c));
        }
        row.lcs(self.len)
    }
}

/// Bit-parallel LCS row (Hyyrö): zero bits count matched pattern positions.
struct LcsRow {
    bits: Vec<u64>,
}

impl LcsRow {
    fn new(pattern: &Pattern) -> Self {
        Self {
            bits: vec![u64::MAX; pattern.words],
        }
    }

    /// Advance by one text char; `None` means it occurs nowhere in the pattern.
    fn step(&mut self, mask: Option<&[u64]>) {
        let Some(mask) = mask else {
            return;
        };
        let mut carry = false;
        for (v, &m) in self.bits.iter_mut().zip(mask) {
            let u = *v & m;
            let (sum, c1) = v.overflowing_add(u);
            let (sum, c2) = sum.overflowing_add(u64::from(carry));
            carry = c1 || c2;
            *v = sum | (*v & !u);
        }
    }

    fn lcs(&self, len: usize) -> usize {
        self.bits
            .iter()
            .enumerate()
            .map(|(w, v)| {
                let used = (len - w * WORD_BITS).min(WORD_BITS);
                let valid = if used == WORD_BITS {
                    u64::MAX
                } else {
                    (1 << used) - 1
                };
                (!v & valid).count_ones() as usize
            })
            .sum()
    }
}

/// Multiset intersection of the pattern with a sliding window, an upper
/// bound on their LCS.
struct WindowBound {
    /// char -> (count in pattern, count in window)
    counts: HashMap<char, (usize, usize)>,
    common: usize,
}

impl WindowBound {
    fn new(pattern: &[char], window: &[char]) -> Self {
        let mut counts: HashMap<char, (usize, usize)> = HashMap::new();
        for &c in pattern {
            counts.entry(c).or_default().0 += 1;
        }
        let mut bound = Self { counts, common: 0 };
        for &c in window {
            bound.add(c);
        }
        bound
    }

    fn add(&mut self, c: char) {
        if let Some((want, have)) = self.counts.get_mut(&c) {
            if *have < *want {
                self.common += 1;
            }
            *have += 1;
        }
    }

    fn remove(&mut self, c: char) {
        if let Some((want, have)) = self.counts.get_mut(&c) {
            *have -= 1;
            if *have < *want {
                self.common -= 1;
            }
        }
    }
}
