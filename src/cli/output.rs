use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    TreeForView(base::tree::forview::Config),
    TreeForRecap(base::tree::forrecap::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::TreeForView(config) => {
                if config.rl.is_empty() {
                    writeln!(f, "No records.")
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
            Output::TreeForRecap(config) => {
                writeln!(f, "Recap: {}", config.report.interval)?;
                write!(f, "{}", config.to_tree())
            }
        }
    }
}
