use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use roadmap_logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "roadmap", about = "Track course roadmaps, history and progress")]
pub(crate) struct Cli {
    /// Directory holding history, progress and theme records.
    #[arg(long, global = true, default_value = "roadmap_data")]
    pub data_dir: PathBuf,

    /// Where log output goes.
    #[arg(long, global = true, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List remembered roadmaps, newest first, with their progress.
    History,
    /// Record a roadmap from a saved generator response.
    Generate {
        /// Course URL the roadmap was generated for.
        url: String,
        /// JSON response of the roadmap generator.
        #[arg(long)]
        response: PathBuf,
    },
    /// Handle an application link carrying `?course=<url>`.
    OpenLink {
        location: String,
        #[arg(long)]
        response: PathBuf,
    },
    /// Show a roadmap from history with per-topic status.
    Show { id: i64 },
    /// Mark or unmark topics of a roadmap from history.
    Toggle {
        id: i64,
        #[arg(required = true)]
        topics: Vec<u32>,
    },
    /// Forget one roadmap. Its progress is kept.
    Remove { id: i64 },
    /// Forget all roadmaps.
    Clear,
    /// Print a shareable link for a roadmap from history.
    Share {
        id: i64,
        #[arg(long, default_value = "http://localhost:5173/")]
        app: String,
    },
    /// Show or switch the light/dark preference.
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Write the current settings to `roadmap.ron` in the data directory.
    InitConfig,
}
