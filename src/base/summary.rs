use crate::base;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: base::Category,
    pub total: base::Qty,
}

/// Outbound and inbound totals per category, each list ordered by category.
/// A category without any qualifying record is absent from a list rather
/// than present with a zero total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summaries {
    pub outbound: Vec<CategorySummary>,
    pub inbound: Vec<CategorySummary>,
}

impl Summaries {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.outbound.is_empty() && self.inbound.is_empty()
    }

    /// Length of the longer list.
    pub fn depth(&self) -> usize {
        self.outbound.len().max(self.inbound.len())
    }

    pub fn total_outbound(&self) -> base::Qty {
        self.outbound.iter().map(|s| s.total).sum()
    }

    pub fn total_inbound(&self) -> base::Qty {
        self.inbound.iter().map(|s| s.total).sum()
    }
}

/// Sums outbound and inbound quantities per category over the records dated
/// within `interval`.
pub fn summarize<'a, I>(records: I, interval: base::Interval) -> Summaries
where
    I: IntoIterator<Item = &'a base::Record>,
{
    let mut outbound = base::Aggregate::<&base::Category, base::Qty>::default();
    let mut inbound = base::Aggregate::<&base::Category, base::Qty>::default();
    for r in records.into_iter().filter(|r| interval.contains(r.date())) {
        if !r.outbound().is_zero() {
            outbound.add(r.category(), r.outbound());
        }
        if !r.inbound().is_zero() {
            inbound.add(r.category(), r.inbound());
        }
    }

    tracing::trace!(
        outbound = %outbound.sum(),
        inbound = %inbound.sum(),
        "windowed totals"
    );

    fn to_vec(agg: base::Aggregate<&base::Category, base::Qty>) -> Vec<CategorySummary> {
        agg.into_iter()
            .map(|(category, total)| CategorySummary {
                category: category.clone(),
                total,
            })
            .collect()
    }

    let summaries = Summaries {
        outbound: to_vec(outbound),
        inbound: to_vec(inbound),
    };
    tracing::debug!(
        %interval,
        outbound = summaries.outbound.len(),
        inbound = summaries.inbound.len(),
        "summarized records"
    );
    summaries
}
