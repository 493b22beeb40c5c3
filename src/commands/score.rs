//! Single-fixture difficulty command implementation

use serde::Serialize;
use std::path::Path;

use super::common::{to_json, CommandContext};
use crate::{
    error::FormError,
    fdr::{difficulty_breakdown, fallback_difficulty, DifficultyBand, DifficultyBreakdown},
    Result, TeamId, Venue,
};

/// Parameters for the score command
#[derive(Debug, Clone)]
pub struct ScoreParams {
    pub team: String,
    pub opponent: String,
    pub venue: Venue,
    pub ignore_form: bool,
    pub as_json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub team: TeamId,
    pub team_name: String,
    pub opponent: TeamId,
    pub opponent_name: String,
    pub venue: Venue,
    pub breakdown: DifficultyBreakdown,
    pub band: DifficultyBand,
    /// Strength-only difficulty for comparison.
    pub fallback: f64,
    pub used_form: bool,
}

pub fn build_score(ctx: &CommandContext, params: &ScoreParams) -> Result<ScoreReport> {
    let find = |query: &str| {
        ctx.find_team(query).ok_or_else(|| FormError::TeamNotFound {
            query: query.to_string(),
        })
    };
    let team = find(&params.team)?;
    let opponent = find(&params.opponent)?;
    let form = if params.ignore_form {
        None
    } else {
        ctx.team_form.as_ref()
    };

    let breakdown = difficulty_breakdown(team, opponent, params.venue, form, &ctx.config.weights);
    Ok(ScoreReport {
        team: team.id,
        team_name: team.name.clone(),
        opponent: opponent.id,
        opponent_name: opponent.name.clone(),
        venue: params.venue,
        band: DifficultyBand::from_score(breakdown.score),
        fallback: fallback_difficulty(opponent, params.venue, &ctx.config.fallback),
        used_form: form.is_some(),
        breakdown,
    })
}

pub fn render_score(report: &ScoreReport) -> String {
    let b = &report.breakdown;
    let vs = if report.venue.is_home() { "vs" } else { "at" };
    [
        format!(
            "{} {} {}: {:.2} ({})",
            report.team_name, vs, report.opponent_name, b.score, report.band
        ),
        format!("  opponent strength  {:+.2}", b.base_strength),
        format!("  venue ({})          {:+.2}", report.venue.short_label(), b.venue),
        format!("  opponent defence   {:+.2}", b.opponent_defence),
        format!("  opponent attack    {:+.2}", b.opponent_attack),
        format!("  own attack         {:+.2}", b.own_form),
        format!("  raw                {:.2}", b.raw),
        format!(
            "  strength-only      {:.2}{}",
            report.fallback,
            if report.used_form { "" } else { "  (no team form)" }
        ),
    ]
    .join("\n")
}

/// Handle the score command
pub fn handle_score(snapshot: &Path, config: Option<&Path>, params: ScoreParams) -> Result<()> {
    let ctx = CommandContext::load(snapshot, config)?;
    let report = build_score(&ctx, &params)?;

    if params.as_json {
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", render_score(&report));
    }

    Ok(())
}
