use crate::base;

/// Recap of one report: outbound, inbound and stock per category, overall
/// totals, then low-stock warnings.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub report: base::Report,
    pub threshold: i64,
}

impl Config {
    const OUT: &str = "Out";
    const IN: &str = "In";
    const STOCK: &str = "Stock";
    const NET: &str = "Net";
    const TOTAL: &str = "Total";

    pub fn to_tree(&self) -> base::Tree {
        fn to_rows(v: &[base::CategorySummary]) -> Vec<(&str, String)> {
            v.iter()
                .map(|s| (s.category.as_str(), s.total.to_string()))
                .collect()
        }

        let summaries = &self.report.summaries;
        let outv = to_rows(&summaries.outbound);
        let inv = to_rows(&summaries.inbound);
        let stockv = self
            .report
            .levels
            .iter()
            .map(|l| (l.category().as_str(), l.net_stock().to_string()))
            .collect::<Vec<_>>();
        let totv = vec![
            (Self::IN, summaries.total_inbound().to_string()),
            (Self::OUT, summaries.total_outbound().to_string()),
            (
                Self::TOTAL,
                summaries
                    .total_inbound()
                    .signed()
                    .saturating_sub(summaries.total_outbound().signed())
                    .to_string(),
            ),
        ];

        let width = [&outv, &inv, &stockv, &totv]
            .into_iter()
            .flatten()
            .map(|(label, value)| {
                label.chars().count()
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + value.chars().count()
            })
            .max()
            .unwrap_or_default();

        let mut root = base::tree::Node::default();
        self.add_rows(&mut root, Self::OUT, &outv, width);
        self.add_rows(&mut root, Self::IN, &inv, width);
        self.add_rows(&mut root, Self::STOCK, &stockv, width);
        self.add_rows(&mut root, Self::NET, &totv, width);
        if !self.report.warnings.is_empty() {
            let node = root.push(format!("Low stock (<= {})", self.threshold).into());
            for w in self.report.warnings.iter() {
                let s = format!("{} ({})", w.category, w.net_stock);
                node.push(self.charset.warning(&s).into());
            }
        }
        base::Tree {
            charset: self.charset.clone(),
            root,
        }
    }

    fn add_rows(
        &self,
        root: &mut base::tree::Node,
        name: &'static str,
        rows: &[(&str, String)],
        width: usize,
    ) {
        if rows.is_empty() {
            return;
        }
        let node = root.push(name.into());
        for (label, value) in rows {
            let data = base::tree::dashed(&self.charset, label, value, width);
            node.push(data.into());
        }
    }
}
