use crate::base;

/// Everything recomputed from one snapshot of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub interval: base::Interval,
    pub summaries: base::Summaries,
    pub levels: Vec<base::StockLevel>,
    pub warnings: Vec<base::LowStock>,
}

impl Report {
    pub fn new(rl: &base::Recordlist, interval: base::Interval, threshold: i64) -> Self {
        let summaries = base::summary::summarize(rl.iter(), interval);
        let levels = base::stock::evaluate(&summaries);
        let warnings = base::stock::low_stock(&levels, threshold);
        Self {
            interval,
            summaries,
            levels,
            warnings,
        }
    }
}
