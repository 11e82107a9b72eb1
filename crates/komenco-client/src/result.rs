//! Measurement counts returned to the caller.

use rustc_hash::FxHashMap;

/// Measurement outcome histogram: bitstring label → sample count.
///
/// Produced fresh per [`run`](crate::KomencoClient::run) call from the
/// service's probability table. The key set is exactly what the service
/// returned: no renormalization, no re-sorting, no sum check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescale a probability table into integer counts.
    ///
    /// Each count is `round(probability × repetitions)` with
    /// round-half-away-from-zero (`f64::round`); probabilities are
    /// non-negative, so at the `.5` boundary this rounds up
    /// (`0.5 × 3 → 2`).
    pub fn from_probabilities(probabilities: &FxHashMap<String, f64>, repetitions: u64) -> Self {
        let counts = probabilities
            .iter()
            .map(|(bitstring, &p)| (bitstring.clone(), (p * repetitions as f64).round() as u64))
            .collect();
        Self { counts }
    }

    /// Add `count` occurrences of a bitstring, accumulating with any
    /// existing entry.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Count recorded for a bitstring (0 when absent).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The outcome with the highest count, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by_key(|&(_, &count)| count)
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
    }

    /// Outcomes sorted by descending count.
    pub fn sorted(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no outcomes were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(bitstring, count)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
