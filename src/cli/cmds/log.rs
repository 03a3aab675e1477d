use anyhow::Context;

use crate::base;
use crate::cli;

/// Log a stock movement and print the recap
#[derive(clap::Parser)]
pub struct Log {
    /// Transaction label
    ///
    /// In combined-label mode the label names both the direction and the
    /// category, e.g. 'Pengeluaran Tissue Roll' or 'Pemasukan Hand Towel'. In
    /// split-fields mode it is the bare category.
    label: String,

    /// Quantity as free text, e.g. '2 dus' (combined-label mode)
    ///
    /// Only the digits are kept, so '1.5 roll' reads as 15. A quantity without
    /// digits reads as 0.
    quantity: Option<String>,

    /// Outbound quantity (split-fields mode)
    #[arg(long = "out", value_name = "N")]
    outbound: Option<u64>,

    /// Inbound quantity (split-fields mode)
    #[arg(long = "in", value_name = "N")]
    inbound: Option<u64>,

    /// Transaction date
    #[arg(short, long, default_value = "d")]
    date: base::Date,

    /// Shift during which the transaction happened
    #[arg(short, long, default_value_t, hide_default_value = true)]
    shift: String,
}

impl Log {
    fn to_raw_entry(&self, mode: base::InputMode) -> anyhow::Result<base::RawEntry> {
        let quantity = match mode {
            base::InputMode::CombinedLabel => {
                if self.outbound.is_some() || self.inbound.is_some() {
                    anyhow::bail!("'--out' and '--in' are only used in split-fields mode")
                }
                base::Quantity::Text(self.quantity.clone().unwrap_or_default())
            }
            base::InputMode::SplitFields => {
                if self.quantity.is_some() {
                    anyhow::bail!("use '--out' or '--in' to give a quantity in split-fields mode")
                }
                base::Quantity::Split {
                    outbound: base::Qty(self.outbound.unwrap_or_default()),
                    inbound: base::Qty(self.inbound.unwrap_or_default()),
                }
            }
        };
        Ok(base::RawEntry {
            label: self.label.clone(),
            date: self.date,
            shift: self.shift.clone(),
            quantity,
        })
    }

    pub fn run<S>(
        &self,
        mut session: base::Session<S>,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output>
    where
        S: base::Store,
    {
        let raw = self.to_raw_entry(config.input_mode)?;
        match session.submit(raw) {
            Ok(_) => {}
            Err(base::session::SubmitError::Write { source, .. }) => {
                let unsaved = session
                    .unsaved()
                    .map(|r| {
                        format!(
                            "{} {} {:+} (shift {})",
                            r.date(),
                            r.category(),
                            r.movement(),
                            r.shift()
                        )
                    })
                    .collect::<Vec<_>>();
                return Ok(cli::Output::Str(format!(
                    "Warning: failed to save: {}\nNot saved, log again once the table is writable:\n{}",
                    source,
                    unsaved.join("\n")
                )));
            }
            Err(e) => return Err(e).context("invalid entry"),
        }

        let (_, report) = session
            .recompute(config.window_days, config.low_stock_threshold)
            .context("failed to read records back")?;
        Ok(cli::Output::TreeForRecap(base::tree::forrecap::Config {
            charset: cli::util::charset_from_config(config),
            report,
            threshold: config.low_stock_threshold,
        }))
    }
}
