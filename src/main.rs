//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_form::{
    cli::{Commands, ConfigCmd, FplForm},
    commands::{
        config::{handle_config_init, handle_config_show},
        fixtures::{handle_fixtures, FixturesParams},
        player_form::{handle_player_form, PlayerFormParams},
        score::{handle_score, ScoreParams},
        team_form::handle_team_form,
    },
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "fpl_form=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = FplForm::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::PlayerForm {
            input,
            player,
            stat,
            position,
            top,
            min_minutes,
        } => handle_player_form(
            &input.snapshot,
            input.config.as_deref(),
            PlayerFormParams {
                player,
                stat,
                position,
                top,
                min_minutes,
                as_json: input.json,
            },
        )
        .with_context(|| format!("player-form failed for {}", input.snapshot.display()))?,

        Commands::Fixtures {
            input,
            horizon,
            team,
            detailed,
            mode,
            no_form,
        } => handle_fixtures(
            &input.snapshot,
            input.config.as_deref(),
            FixturesParams {
                horizon,
                team,
                detailed,
                mode,
                ignore_form: no_form,
                as_json: input.json,
            },
        )
        .with_context(|| format!("fixtures failed for {}", input.snapshot.display()))?,

        Commands::Score {
            input,
            team,
            opponent,
            venue,
            no_form,
        } => handle_score(
            &input.snapshot,
            input.config.as_deref(),
            ScoreParams {
                team,
                opponent,
                venue,
                ignore_form: no_form,
                as_json: input.json,
            },
        )
        .with_context(|| format!("score failed for {}", input.snapshot.display()))?,

        Commands::TeamForm { input } => {
            handle_team_form(&input.snapshot, input.config.as_deref(), input.json)
                .with_context(|| format!("team-form failed for {}", input.snapshot.display()))?
        }

        Commands::Config { cmd } => match cmd {
            ConfigCmd::Show { config } => {
                handle_config_show(config.as_deref()).context("cannot resolve config")?
            }
            ConfigCmd::Init { path, force } => {
                handle_config_init(path.as_deref(), force).context("cannot write config")?
            }
        },
    }

    Ok(())
}
