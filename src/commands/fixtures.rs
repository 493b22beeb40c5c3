//! Fixture difficulty command implementation

use std::path::Path;

use super::common::{clip, to_json, CommandContext};
use crate::{
    error::FormError,
    fdr::{DetailedFixture, DifficultyMode, FixtureOutlook, FixtureRun},
    Result,
};

/// Parameters for the fixtures command
#[derive(Debug, Clone, Default)]
pub struct FixturesParams {
    /// Gameweeks to look ahead; the configured horizon when absent.
    pub horizon: Option<u16>,
    /// Show one team's remaining run instead of the ranking.
    pub team: Option<String>,
    /// List every fixture in the window with both sides' difficulty.
    pub detailed: bool,
    pub mode: Option<DifficultyMode>,
    /// Score on strength and venue only.
    pub ignore_form: bool,
    pub as_json: bool,
}

fn apply_overrides(ctx: &mut CommandContext, params: &FixturesParams) {
    if let Some(mode) = params.mode {
        ctx.config.difficulty_mode = mode;
    }
    if params.ignore_form {
        ctx.team_form = None;
    }
}

pub fn build_outlook(ctx: &CommandContext, horizon: Option<u16>) -> Result<FixtureOutlook> {
    ctx.engine().rank_upcoming_fixtures(
        &ctx.teams,
        &ctx.fixtures,
        ctx.current,
        &ctx.config.schedule_params(horizon),
        ctx.team_form.as_ref(),
    )
}

pub fn build_detailed(ctx: &CommandContext, horizon: Option<u16>) -> Result<Vec<DetailedFixture>> {
    ctx.engine().detailed_fixtures(
        &ctx.teams,
        &ctx.fixtures,
        ctx.current,
        &ctx.config.schedule_params(horizon),
        ctx.team_form.as_ref(),
    )
}

pub fn build_run(ctx: &CommandContext, team: &str) -> Result<FixtureRun> {
    let team = ctx.find_team(team).ok_or_else(|| FormError::TeamNotFound {
        query: team.to_string(),
    })?;
    ctx.engine()
        .team_fixture_run(team.id, &ctx.teams, &ctx.fixtures, ctx.team_form.as_ref())
}

pub fn render_outlook(outlook: &FixtureOutlook) -> String {
    let mut out = vec![
        format!(
            "Fixture difficulty, gameweeks {}-{} (current {})",
            outlook.first_gameweek, outlook.last_gameweek, outlook.current_gameweek
        ),
        String::new(),
        format!("{:<4} {:<16} {:>5} {:>6}  Fixtures", "Rank", "Team", "Avg", "Total"),
        format!("{:<4} {:<16} {:>5} {:>6}  --------", "----", "----", "---", "-----"),
    ];
    if outlook.teams.is_empty() {
        out.push("No upcoming fixtures.".to_string());
    }
    for team in &outlook.teams {
        let fixtures: Vec<String> = team
            .fixtures
            .iter()
            .map(|f| format!("{} {:.1}", f.label(), f.difficulty))
            .collect();
        out.push(format!(
            "{:<4} {:<16} {:>5.2} {:>6.2}  {}",
            team.rank,
            clip(&team.name, 16),
            team.avg_difficulty,
            team.total_difficulty,
            fixtures.join(", ")
        ));
    }
    out.join("\n")
}

pub fn render_detailed(fixtures: &[DetailedFixture]) -> String {
    if fixtures.is_empty() {
        return "No upcoming fixtures.".to_string();
    }
    let mut out = vec![format!(
        "{:<4} {:<12} {:>6} {:>6}  Kickoff",
        "GW", "Fixture", "Home", "Away"
    )];
    for f in fixtures {
        out.push(format!(
            "{:<4} {:<12} {:>6.2} {:>6.2}  {}",
            f.gameweek.as_u16(),
            f.label,
            f.home_difficulty,
            f.away_difficulty,
            f.kickoff_time.as_deref().unwrap_or("TBC")
        ));
    }
    out.join("\n")
}

pub fn render_run(ctx: &CommandContext, run: &FixtureRun) -> String {
    let mut out = vec![format!(
        "{}: {} fixtures left, average {:.2} ({} easy, {} hard)",
        ctx.team(run.team)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| run.team.to_string()),
        run.fixtures.len(),
        run.avg_difficulty,
        run.easy_count,
        run.hard_count
    )];
    for f in &run.fixtures {
        out.push(format!(
            "  GW{:<3} {:<8} {:>5.2}  {}",
            f.gameweek.as_u16(),
            f.label(),
            f.difficulty,
            f.band
        ));
    }
    out.join("\n")
}

/// Handle the fixtures command
pub fn handle_fixtures(snapshot: &Path, config: Option<&Path>, params: FixturesParams) -> Result<()> {
    let mut ctx = CommandContext::load(snapshot, config)?;
    apply_overrides(&mut ctx, &params);

    if let Some(team) = &params.team {
        let run = build_run(&ctx, team)?;
        if params.as_json {
            println!("{}", to_json(&run)?);
        } else {
            println!("{}", render_run(&ctx, &run));
        }
    } else if params.detailed {
        let fixtures = build_detailed(&ctx, params.horizon)?;
        if params.as_json {
            println!("{}", to_json(&fixtures)?);
        } else {
            println!("{}", render_detailed(&fixtures));
        }
    } else {
        let outlook = build_outlook(&ctx, params.horizon)?;
        if params.as_json {
            println!("{}", to_json(&outlook)?);
        } else {
            println!("{}", render_outlook(&outlook));
        }
    }

    Ok(())
}
