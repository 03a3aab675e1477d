use anyhow::Context;

use crate::base;
use crate::cli;

/// Export records and their recap as a spreadsheet
#[derive(clap::Parser)]
pub struct Export {
    /// Destination file, relative to the current directory
    #[arg(short, long, value_name = "PATH", default_value = base::export::FILENAME)]
    output: std::path::PathBuf,

    #[arg(
        short,
        long,
        value_name = "DAYS",
        help = cli::sharedopts::WINDOW_HELP,
        long_help = cli::sharedopts::WINDOW_HELP_LONG,
    )]
    window: Option<base::Window>,
}

impl Export {
    pub fn run(
        &self,
        rl: base::Recordlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let window = self.window.unwrap_or(config.window_days);
        let report = base::Report::new(
            &rl,
            window.interval(base::Date::today()),
            config.low_stock_threshold,
        );
        let buf = base::export::render(&rl, &report).context("failed to render report")?;
        let path = fs.dir().join(&self.output);
        std::fs::write(&path, buf)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), mime = base::export::MIME, "report exported");
        Ok(cli::Output::Str(format!(
            "Exported {} records ({}) to '{}'",
            rl.len(),
            window,
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use calamine::Reader;

    use super::*;

    const RL: &str = r#"
        {"c":"Roll","d":"2015-03-01","s":"1","i":40}
        {"c":"Roll","d":"2015-03-30","s":"1","o":10}
        {"c":"Roll","d":"2015-03-30","s":"2","o":5}
    "#;

    cli::testing::generate_testcases![
        (
            default_path,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "export"],
                    res: cli::testing::ResultMatcher::OkStrGlob(
                        "exported 3 records (last 7 days) to '*log_tissue_dan_rekap.xlsx'"
                    ),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}").with_rl(RL),
            }
        ),
        (
            custom_path_and_window,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "export", "-o", "rekap.xlsx", "-w", "0"],
                    res: cli::testing::ResultMatcher::OkStrGlob(
                        "exported 3 records (all time) to '*rekap.xlsx'"
                    ),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}").with_rl(RL),
            }
        ),
    ];

    #[test]
    fn test_exported_layout() {
        let (fs, _td) = cli::testing::tempfs();
        cli::testing::StrState::new()
            .with_config("{}")
            .with_rl(RL)
            .to_fs(&fs);
        let root = <cli::Root as clap::Parser>::try_parse_from(["", "export"]).unwrap();
        root.run(&fs).unwrap();

        let path = fs.dir().join(base::export::FILENAME);
        let mut wb: calamine::Xlsx<_> = calamine::open_workbook(&path).unwrap();
        let names = wb.sheet_names();
        let range = wb.worksheet_range(&names[0]).unwrap();
        let cell = |row: u32, col: u32| range.get_value((row, col)).cloned();

        assert_eq!(cell(3, 5), Some(calamine::Data::Float(40.0)));
        assert_eq!(cell(5, 4), Some(calamine::Data::Float(5.0)));
        // The window drops the inbound record from the recap, leaving one
        // outbound summary.
        assert_eq!(
            cell(8, 0),
            Some(calamine::Data::String("Pengeluaran".into()))
        );
        assert_eq!(cell(9, 1), Some(calamine::Data::Float(15.0)));
        assert_eq!(cell(12, 0), Some(calamine::Data::String("Jenis".into())));
        assert_eq!(cell(13, 1), Some(calamine::Data::Float(-15.0)));
    }
}
