use crate::base;
use crate::cli;

/// View records grouped by date
#[derive(clap::Parser)]
pub struct View {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl View {
    pub fn run(self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let rl = cli::util::filter_rl_with_opts(&rl, self.interval, &self.categories_opts);
        let tr_config = base::tree::forview::Config {
            charset: cli::util::charset_from_config(config),
            first_iid: 1,
            rl,
        };
        Ok(cli::Output::TreeForView(tr_config))
    }
}
