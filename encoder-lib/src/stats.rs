#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Slot redefinitions actually emitted.
    pub changed: usize,
    /// Slot redefinitions that could have been emitted.
    pub total: usize,
    pub frames: usize,
    pub skipped: usize,
}

impl Stats {
    /// Share of possible redefinitions that were emitted, or `None` when
    /// nothing was compared yet.
    pub fn percentage_emitted(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(100.0 * (self.changed as f64) / (self.total as f64))
        }
    }
}
