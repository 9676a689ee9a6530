//! Ordered samples plus the running aggregates the renderer scales against.

/// One data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub label: Option<String>,
}

impl Sample {
    /// Character `offset` of the label, if there is one that long.
    #[inline]
    #[must_use]
    pub fn label_char(&self, offset: usize) -> Option<char> {
        self.label.as_deref().and_then(|l| l.chars().nth(offset))
    }
}

/// Append-only series of samples.
///
/// `min`/`max` are maintained on every push and are `None` until the first
/// sample arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    samples: Vec<Sample>,
    range: Option<(f64, f64)>,
    labeled: usize,
}

impl Sequence {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            samples: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    pub fn push(&mut self, value: f64, label: Option<String>) {
        self.range = Some(match self.range {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
        if label.is_some() {
            self.labeled += 1;
        }
        self.samples.push(Sample { value, label });
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.range.map(|(lo, _)| lo)
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.range.map(|(_, hi)| hi)
    }

    /// Number of samples carrying a label.
    #[inline]
    #[must_use]
    pub fn labeled_count(&self) -> usize {
        self.labeled
    }

    /// Consecutive slices of at most `width` samples, in order.
    ///
    /// # Panics
    /// If `width` is zero.
    pub fn chunks(&self, width: usize) -> std::slice::Chunks<'_, Sample> {
        self.samples.chunks(width)
    }
}

impl FromIterator<(f64, Option<String>)> for Sequence {
    fn from_iter<I: IntoIterator<Item = (f64, Option<String>)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seq = Sequence::with_capacity(iter.size_hint().0);
        for (value, label) in iter {
            seq.push(value, label);
        }
        seq
    }
}
