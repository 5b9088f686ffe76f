//! Accumulators carried across months of a single projection

/// Running state of a projection between months
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Current projection month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Savings accumulated through the current month
    pub cumulative_savings: f64,

    /// Savings accumulated over the checkpoint window only
    pub checkpoint_savings: f64,
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Add this month's savings to the running totals.
    /// The checkpoint subtotal stops growing after `checkpoint_months`.
    pub fn record_savings(&mut self, savings: f64, checkpoint_months: u32) {
        self.cumulative_savings += savings;
        if self.month <= checkpoint_months {
            self.checkpoint_savings += savings;
        }
    }
}
