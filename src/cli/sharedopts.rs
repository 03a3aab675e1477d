pub const INTERVAL_HELP: &str = "Interval of interest";
pub const INTERVAL_HELP_LONG: &str = "Interval of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is either an ISO 8601 date (yyyy-mm-dd) or a relative date (see below). 'A' and 'B' are both optional, defaulting to 0000-01-01 and 9999-12-31 respectively.

A relative date is 'dn', n days from today. 'n' is optional and defaults to 0, so 'd' is today and 'd-6' is six days ago.

A single date 'A' is shorthand for 'A:A'.";

pub const WINDOW_HELP: &str = "Trailing window in days, 0 for the whole history";
pub const WINDOW_HELP_LONG: &str = "Trailing window in days, 0 for the whole history

A window of N days covers today and the N - 1 days before it. Defaults to 'windowDays' in the config.";

pub const FULLMATCH_HELP: &str = "Match patterns against whole categories";
pub const FULLMATCH_HELP_LONG: &str = "Match patterns against whole categories

By default a pattern such as 'roll' is treated as '*roll*'. With this flag it matches only the category 'roll'.";

#[derive(clap::Args)]
pub struct CategoriesOpts {
    #[arg(long, help = FULLMATCH_HELP, long_help = FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,

    /// Wildcard patterns to match categories of interest
    ///
    /// Use commas to separate multiple patterns. A record is included if its
    /// category matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub categories: Vec<String>,

    /// Wildcard patterns to match categories to exclude
    ///
    /// Use commas to separate multiple patterns. A record is excluded if its
    /// category matches any pattern. Takes precedence over '--categories'.
    #[arg(
        short = 'x',
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "",
        hide_default_value = true
    )]
    pub not_categories: Vec<String>,
}
