use crate::base;

/// Default net stock at or below which a category is reported as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    category: base::Category,
    total_inbound: base::Qty,
    total_outbound: base::Qty,
    net_stock: i64,
}

impl StockLevel {
    pub fn new(
        category: base::Category,
        total_inbound: base::Qty,
        total_outbound: base::Qty,
    ) -> Self {
        Self {
            category,
            total_inbound,
            total_outbound,
            net_stock: total_inbound
                .signed()
                .saturating_sub(total_outbound.signed()),
        }
    }

    pub fn category(&self) -> &base::Category {
        &self.category
    }

    pub fn total_inbound(&self) -> base::Qty {
        self.total_inbound
    }

    pub fn total_outbound(&self) -> base::Qty {
        self.total_outbound
    }

    /// Inbound minus outbound. Negative when more left than came in.
    pub fn net_stock(&self) -> i64 {
        self.net_stock
    }

    pub fn is_low(&self, threshold: i64) -> bool {
        self.net_stock <= threshold
    }
}

/// Warning raised for a category whose net stock is at or below the
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStock {
    pub category: base::Category,
    pub net_stock: i64,
}

impl std::fmt::Display for LowStock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "low stock: {} ({})", self.category, self.net_stock)
    }
}

/// Joins outbound and inbound totals by category. Every category in either
/// list gets exactly one level, with 0 for a missing side.
pub fn evaluate(summaries: &base::Summaries) -> Vec<StockLevel> {
    let mut joined =
        std::collections::BTreeMap::<&base::Category, (base::Qty, base::Qty)>::new();
    for s in summaries.inbound.iter() {
        joined.entry(&s.category).or_default().0 += s.total;
    }
    for s in summaries.outbound.iter() {
        joined.entry(&s.category).or_default().1 += s.total;
    }
    joined
        .into_iter()
        .map(|(category, (inbound, outbound))| {
            StockLevel::new(category.clone(), inbound, outbound)
        })
        .collect()
}

/// Returns one warning per level with `net_stock <= threshold`.
pub fn low_stock(levels: &[StockLevel], threshold: i64) -> Vec<LowStock> {
    levels
        .iter()
        .filter(|l| l.is_low(threshold))
        .map(|l| {
            tracing::warn!(
                category = %l.category(),
                net_stock = l.net_stock(),
                inbound = %l.total_inbound(),
                outbound = %l.total_outbound(),
                threshold,
                "low stock"
            );
            LowStock {
                category: l.category().clone(),
                net_stock: l.net_stock(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn summaries(outbound: &[(&str, u64)], inbound: &[(&str, u64)]) -> base::Summaries {
        fn to_vec(v: &[(&str, u64)]) -> Vec<base::CategorySummary> {
            v.iter()
                .map(|&(c, n)| base::CategorySummary {
                    category: c.parse().unwrap(),
                    total: base::Qty(n),
                })
                .collect()
        }
        base::Summaries {
            outbound: to_vec(outbound),
            inbound: to_vec(inbound),
        }
    }

    fn level(category: &str, inbound: u64, outbound: u64) -> StockLevel {
        StockLevel::new(category.parse().unwrap(), base::Qty(inbound), base::Qty(outbound))
    }

    #[rstest]
    #[case(summaries(&[], &[]), vec![])]
    #[case(summaries(&[("Roll", 5)], &[]), vec![level("Roll", 0, 5)])]
    #[case(summaries(&[], &[("Roll", 5)]), vec![level("Roll", 5, 0)])]
    #[case(
        summaries(&[("Roll", 10), ("Box", 1)], &[("Roll", 30), ("Hand Towel", 20)]),
        vec![level("Box", 0, 1), level("Hand Towel", 20, 0), level("Roll", 30, 10)],
    )]
    fn test_evaluate(#[case] summaries: base::Summaries, #[case] want: Vec<StockLevel>) {
        assert_eq!(evaluate(&summaries), want)
    }

    #[test]
    fn test_net_stock_is_not_clamped() {
        let levels = evaluate(&summaries(&[("Roll", 5)], &[]));
        assert_eq!(levels[0].total_inbound(), base::Qty(0));
        assert_eq!(levels[0].total_outbound(), base::Qty(5));
        assert_eq!(levels[0].net_stock(), -5);
    }

    #[rstest]
    #[case(level("Roll", 15, 0), 15, true)]
    #[case(level("Roll", 16, 0), 15, false)]
    #[case(level("Roll", 0, 3), 15, true)]
    #[case(level("Roll", 0, 3), -4, false)]
    #[case(level("Roll", 100, 50), 50, true)]
    fn test_is_low(#[case] level: StockLevel, #[case] threshold: i64, #[case] want: bool) {
        assert_eq!(level.is_low(threshold), want)
    }

    #[test]
    fn test_low_stock_warnings() {
        let levels = vec![
            level("Box", 0, 1),
            level("Hand Towel", 20, 0),
            level("Roll", 30, 15),
        ];
        let got = low_stock(&levels, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(
            got,
            vec![
                LowStock {
                    category: "Box".parse().unwrap(),
                    net_stock: -1
                },
                LowStock {
                    category: "Roll".parse().unwrap(),
                    net_stock: 15
                },
            ]
        );
        assert_eq!(got[0].to_string(), "low stock: Box (-1)");
        assert!(low_stock(&[], DEFAULT_LOW_STOCK_THRESHOLD).is_empty());
    }
}
