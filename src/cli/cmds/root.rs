use anyhow::Context;

use crate::base;
use crate::cli;

/// Tissue stock log
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Log(cli::cmds::log::Log),
    View(cli::cmds::view::View),
    Cats(cli::cmds::cats::Cats),
    Sum(cli::cmds::sum::Sum),
    Export(cli::cmds::export::Export),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let table_path = fs.table_path(&config);
        let session = base::Session::open(fs.store(&config), config.reset_mismatched_header)
            .with_context(|| format!("failed to prepare '{}'", table_path.display()))?;
        tracing::debug!(table = %table_path.display(), "session opened");

        if let Commands::Log(cmd) = self.command {
            return cmd.run(session, &config);
        }
        let rl = session
            .snapshot()
            .with_context(|| format!("failed to read '{}'", table_path.display()))?;

        match self.command {
            Commands::Init(_) | Commands::Log(_) => unreachable!(),
            Commands::View(cmd) => cmd.run(rl, &config),
            Commands::Cats(cmd) => cmd.run(rl),
            Commands::Sum(cmd) => cmd.run(rl, &config),
            Commands::Export(cmd) => cmd.run(rl, &config, fs),
        }
    }
}
