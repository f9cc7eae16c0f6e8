use serde::Serialize;
use std::collections::BTreeMap;

use swisslotto_db::models::NumberStats;

#[derive(Debug, Clone, Serialize)]
pub struct FrequencyTable {
    /// Draws that contributed to this table.
    pub draws: usize,
    /// Denominator of every probability in `stats`.
    pub opportunities: usize,
    /// Ascending by probability, then by number.
    pub stats: Vec<NumberStats>,
}

impl FrequencyTable {
    pub fn new(counts: &BTreeMap<u32, u32>, draws: usize, opportunities: usize) -> Self {
        let stats = if opportunities == 0 {
            Vec::new()
        } else {
            rank(counts, opportunities)
        };
        Self {
            draws,
            opportunities,
            stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn total_probability(&self) -> f64 {
        self.stats.iter().map(|s| s.probability).sum()
    }
}

pub fn count_occurrences(numbers: impl IntoIterator<Item = u32>) -> BTreeMap<u32, u32> {
    let mut counts = BTreeMap::new();
    for n in numbers {
        *counts.entry(n).or_insert(0) += 1;
    }
    counts
}

fn rank(counts: &BTreeMap<u32, u32>, opportunities: usize) -> Vec<NumberStats> {
    let mut stats: Vec<NumberStats> = counts
        .iter()
        .map(|(&number, &times)| NumberStats {
            number,
            times,
            probability: times as f64 / opportunities as f64,
        })
        .collect();

    stats.sort_by(|a, b| {
        a.probability
            .total_cmp(&b.probability)
            .then(a.number.cmp(&b.number))
    });
    stats
}
