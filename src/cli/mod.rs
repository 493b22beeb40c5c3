//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use crate::fdr::DifficultyMode;
use crate::form::Stat;
use clap::{Args, Parser, Subcommand};
use types::{Position, Venue};

/// Input arguments shared between analysis commands
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// JSON snapshot of teams, fixtures and player match histories.
    #[clap(long, short)]
    pub snapshot: PathBuf,

    /// Config file (or set `FPL_FORM_CONFIG`).
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCmd {
    /// Print the resolved configuration as JSON
    Show {
        /// Config file (or set `FPL_FORM_CONFIG`).
        #[clap(long, short)]
        config: Option<PathBuf>,
    },

    /// Write the default configuration to disk
    Init {
        /// Target path; defaults to the platform config directory.
        #[clap(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file.
        #[clap(long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rolling player form: recent leaders, hot and cold players, best value,
    /// or one player's match-by-match detail.
    PlayerForm {
        #[clap(flatten)]
        input: SnapshotArgs,

        /// Player id or name fragment to show in detail.
        #[clap(long, short)]
        player: Option<String>,

        /// Statistic to rank by.
        #[clap(long, value_enum, default_value_t = Stat::Points)]
        stat: Stat,

        /// Only list players in this position (gkp, def, mid, fwd).
        #[clap(long, value_enum, ignore_case = true)]
        position: Option<Position>,

        /// Rows per list.
        #[clap(long, short = 'n', default_value_t = 10)]
        top: usize,

        /// Minimum recent-window minutes for the leader board.
        #[clap(long)]
        min_minutes: Option<u32>,
    },

    /// Rank teams by upcoming fixture difficulty.
    Fixtures {
        #[clap(flatten)]
        input: SnapshotArgs,

        /// Gameweeks to look ahead.
        #[clap(long, short = 'H')]
        horizon: Option<u16>,

        /// Show every remaining fixture for one team (id, short or full name).
        #[clap(long, short)]
        team: Option<String>,

        /// List each fixture with both sides' difficulty.
        #[clap(long)]
        detailed: bool,

        /// Difficulty source.
        #[clap(long, value_enum)]
        mode: Option<DifficultyMode>,

        /// Ignore team form and score on strength and venue only.
        #[clap(long)]
        no_form: bool,
    },

    /// Difficulty of a single matchup with each model term.
    Score {
        #[clap(flatten)]
        input: SnapshotArgs,

        /// Team being scored.
        #[clap(long, short)]
        team: String,

        /// Opponent.
        #[clap(long, short)]
        opponent: String,

        /// Venue of the scored team: H or A.
        #[clap(long, default_value = "H")]
        venue: Venue,

        /// Ignore team form.
        #[clap(long)]
        no_form: bool,
    },

    /// Recent team scoring form and team expected-goals totals.
    TeamForm {
        #[clap(flatten)]
        input: SnapshotArgs,
    },

    /// Inspect or create the configuration file.
    Config {
        #[clap(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-form",
    about = "Player form and fixture difficulty for Fantasy Premier League"
)]
pub struct FplForm {
    /// Log progress to stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
