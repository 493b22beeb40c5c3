//! Team form command implementation

use serde::Serialize;
use std::cmp::Ordering;
use std::path::Path;

use super::common::{clip, to_json, CommandContext};
use crate::{
    models::TeamForm,
    team::{aggregate_team_xg, TeamXgSummary},
    Result,
};

#[derive(Debug, Clone, Serialize)]
pub struct TeamFormRow {
    pub short_name: String,
    #[serde(flatten)]
    pub form: TeamForm,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamXgRow {
    pub short_name: String,
    #[serde(flatten)]
    pub summary: TeamXgSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamFormReport {
    /// The form table the difficulty model uses; empty when none exists.
    pub form: Vec<TeamFormRow>,
    /// Best xG differential first.
    pub xg: Vec<TeamXgRow>,
}

pub fn build_team_form(ctx: &CommandContext) -> TeamFormReport {
    let form = ctx
        .team_form
        .iter()
        .flat_map(|table| table.values())
        .map(|row| TeamFormRow {
            short_name: ctx.short_name(row.team),
            form: row.clone(),
        })
        .collect();

    let mut xg: Vec<TeamXgRow> = aggregate_team_xg(&ctx.records)
        .into_iter()
        .map(|summary| TeamXgRow {
            short_name: ctx.short_name(summary.team),
            summary,
        })
        .collect();
    xg.sort_by(|a, b| {
        b.summary
            .xg_differential
            .partial_cmp(&a.summary.xg_differential)
            .unwrap_or(Ordering::Equal)
    });

    TeamFormReport { form, xg }
}

fn opt(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".to_string())
}

pub fn render_team_form(report: &TeamFormReport) -> String {
    let mut out = vec![
        "Recent team form".to_string(),
        format!(
            "{:<5} {:>3} {:>6} {:>6} {:>6}",
            "Team", "GP", "GF/g", "GA/g", "CS%"
        ),
    ];
    if report.form.is_empty() {
        out.push("  (no finished fixtures)".to_string());
    }
    for row in &report.form {
        out.push(format!(
            "{:<5} {:>3} {:>6} {:>6} {:>6}",
            clip(&row.short_name, 5),
            row.form.games_played,
            opt(row.form.goals_per_game, 2),
            opt(row.form.goals_conceded_per_game, 2),
            opt(row.form.clean_sheet_percentage, 1)
        ));
    }

    out.push(String::new());
    out.push("Team expected goals".to_string());
    out.push(format!(
        "{:<5} {:>3} {:>6} {:>6} {:>6} {:>7} {:>7}",
        "Team", "MP", "xG", "xGC", "xGD", "xG/m H", "xG/m A"
    ));
    for row in &report.xg {
        let s = &row.summary;
        out.push(format!(
            "{:<5} {:>3} {:>6.2} {:>6.2} {:>+6.2} {:>7.2} {:>7.2}",
            clip(&row.short_name, 5),
            s.matches_played,
            s.xg,
            s.xgc,
            s.xg_differential,
            s.home.xg_per_match,
            s.away.xg_per_match
        ));
    }
    out.join("\n")
}

/// Handle the team form command
pub fn handle_team_form(snapshot: &Path, config: Option<&Path>, as_json: bool) -> Result<()> {
    let ctx = CommandContext::load(snapshot, config)?;
    let report = build_team_form(&ctx);

    if as_json {
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", render_team_form(&report));
    }

    Ok(())
}
