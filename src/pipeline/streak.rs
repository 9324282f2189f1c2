//! Longest run of non-zero column counts

/// A contiguous run of non-zero entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streak {
    /// Index of the first entry in the run
    pub start: usize,
    /// Number of entries in the run
    pub length: usize,
}

impl Streak {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// True if the run covers no entries
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Find the longest run of strictly positive values.
///
/// When several runs share the maximum length the earliest one is returned.
/// A run that reaches the end of `values` counts like any other. Returns an
/// empty streak at index 0 if every value is zero.
pub fn longest_run(values: &[u32]) -> Streak {
    let mut best = Streak::default();
    let mut current: Option<Streak> = None;

    for (i, &value) in values.iter().enumerate() {
        if value == 0 {
            if let Some(run) = current.take() {
                if best.length < run.length {
                    best = run;
                }
            }
        } else {
            current.get_or_insert(Streak::new(i, 0)).length += 1;
        }
    }

    if let Some(run) = current {
        if best.length < run.length {
            best = run;
        }
    }

    best
}
