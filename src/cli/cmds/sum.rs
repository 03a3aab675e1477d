use crate::base;
use crate::cli;

/// View outbound, inbound and stock totals per category
#[derive(clap::Parser)]
pub struct Sum {
    #[arg(
        short,
        long,
        value_name = "DAYS",
        help = cli::sharedopts::WINDOW_HELP,
        long_help = cli::sharedopts::WINDOW_HELP_LONG,
    )]
    window: Option<base::Window>,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl Sum {
    pub fn run(&self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let rl = cli::util::filter_rl_with_opts(&rl, base::Interval::MAX, &self.categories_opts);
        let window = self.window.unwrap_or(config.window_days);
        let report = base::Report::new(
            &rl,
            window.interval(base::Date::today()),
            config.low_stock_threshold,
        );
        Ok(cli::Output::TreeForRecap(base::tree::forrecap::Config {
            charset: cli::util::charset_from_config(config),
            report,
            threshold: config.low_stock_threshold,
        }))
    }
}
