use crate::base;
use crate::cli;

/// View unique categories, the suggestions offered when logging
#[derive(clap::Parser)]
pub struct Cats {
    #[arg(long, help = cli::sharedopts::FULLMATCH_HELP, long_help = cli::sharedopts::FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,

    /// Wildcard pattern to match categories of interest
    ///
    /// If multiple patterns are provided, include categories that match any
    /// pattern.
    #[arg(default_value = "*")]
    pub category: Vec<String>,
}

impl Cats {
    pub fn run(&self, rl: base::Recordlist) -> anyhow::Result<cli::Output> {
        let categories = cli::util::preprocess_categories(&self.category, self.fullmatch);
        let rl = cli::util::filter_rl::<_, &str>(&rl, base::Interval::MAX, &categories, &[]);
        let cats = rl
            .categories()
            .into_iter()
            .map(base::Category::as_str)
            .collect::<Vec<_>>();
        Ok(if cats.is_empty() {
            cli::Output::Str("No categories.".to_string())
        } else {
            cli::Output::Str(cats.join("\n"))
        })
    }
}
