/// Fixed number of logarithmically spaced bins between the smallest and
/// largest value.
///
/// Values are expected to be positive; callers clamp before recording.
#[derive(Clone, Debug)]
pub struct LogHistogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl LogHistogram {
    pub fn new(min: f64, max: f64, bins: usize) -> Self {
        let bins = if min >= max { 1 } else { bins.max(1) };
        let (lo, hi) = (min.ln(), max.ln());

        let edges = (0..=bins)
            .map(|i| (lo + (hi - lo) * i as f64 / bins as f64).exp())
            .collect();

        Self {
            edges,
            counts: vec![0; bins],
        }
    }

    /// Builds a histogram spanning `values` and records all of them.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        let min = values.iter().copied().reduce(f64::min)?;
        let max = values.iter().copied().reduce(f64::max)?;

        let mut hist = Self::new(min, max, bins);
        for v in values {
            hist.record(*v);
        }
        Some(hist)
    }

    pub(crate) fn record(&mut self, value: f64) {
        let bins = self.counts.len();
        let (lo, hi) = (self.edges[0].ln(), self.edges[bins].ln());

        let idx = if hi > lo {
            let pos = (value.ln() - lo) / (hi - lo) * bins as f64;
            (pos.max(0.0) as usize).min(bins - 1)
        } else {
            0
        };

        self.counts[idx] += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(label, count)` per bin, lowest first.
    pub(crate) fn snapshot(&self) -> Vec<(String, u64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let label = format!("{:.0}–{:.0}s", self.edges[i], self.edges[i + 1]);
                (label, *c)
            })
            .collect()
    }
}
