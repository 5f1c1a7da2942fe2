use std::fmt;

/// Progress counters of one expansion round, for logging only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    /// Zero-based index of the round
    pub round: usize,
    /// Size of the `small` catalog after the merge
    pub small_size: usize,
    /// Size of the `full` catalog before the merge
    pub full_size_before: usize,
    /// Size of the `full` catalog after the merge
    pub full_size: usize,
    /// Distinct values produced by the round, admissible or not
    pub generated: usize,
    /// Values that were new to `full`
    pub admitted: usize,
    /// Values of `full` whose expression got shorter
    pub improved: usize,
}

impl fmt::Display for RoundStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "round {} current {} new {} added {} improved {} small {} full {}",
            self.round,
            self.full_size_before,
            self.generated,
            self.admitted,
            self.improved,
            self.small_size,
            self.full_size
        )
    }
}
