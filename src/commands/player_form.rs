//! Player form command implementation

use serde::Serialize;
use std::path::Path;

use super::common::{clip, to_json, CommandContext};
use crate::{
    form::{
        best_value_players, cold_form_players, compute_player_features, form_trend,
        hot_form_players, plays_in, recent_form_leaders, FormStatus, PlayerFeatures, RollingRow,
        SeasonAggregate, Stat,
    },
    Gameweek, PlayerId, Position, Result, TeamId,
};

/// Parameters for the player form command
#[derive(Debug, Clone)]
pub struct PlayerFormParams {
    /// Player id or a case-insensitive name fragment; shows match-by-match
    /// detail instead of the leader boards.
    pub player: Option<String>,
    pub stat: Stat,
    /// Restrict every board to one position.
    pub position: Option<Position>,
    pub top: usize,
    /// Overrides the configured minute floor for the leader board.
    pub min_minutes: Option<u32>,
    pub as_json: bool,
}

/// One row of a leader board.
#[derive(Debug, Clone, Serialize)]
pub struct FormLine {
    pub player_id: PlayerId,
    pub name: String,
    pub team: Option<TeamId>,
    pub team_short: String,
    pub position: Option<Position>,
    pub price: Option<f64>,
    pub recent_minutes: u32,
    pub recent_per90: f64,
    pub season_per90: f64,
    pub trend: f64,
    pub status: FormStatus,
    pub total_points: f64,
    pub points_per_million: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerFormReport {
    pub gameweek: Gameweek,
    pub stat: Stat,
    pub position: Option<Position>,
    pub min_minutes: u32,
    pub leaders: Vec<FormLine>,
    pub hot: Vec<FormLine>,
    pub cold: Vec<FormLine>,
    pub value_min_minutes: u32,
    /// Best season points per million.
    pub value: Vec<FormLine>,
}

/// Season aggregate plus every rolling row for one player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDetail {
    pub season: SeasonAggregate,
    pub rolling: Vec<RollingRow>,
}

fn form_line(ctx: &CommandContext, aggregate: &SeasonAggregate, stat: Stat) -> FormLine {
    FormLine {
        player_id: aggregate.player_id,
        name: aggregate.player_name.clone(),
        team: aggregate.team,
        team_short: aggregate
            .team
            .map(|t| ctx.short_name(t))
            .unwrap_or_default(),
        position: aggregate.position,
        price: aggregate.price,
        recent_minutes: aggregate.recent_minutes(),
        recent_per90: aggregate.recent.per90_of(stat),
        season_per90: aggregate.totals.per90(stat),
        trend: form_trend(aggregate, &aggregate.recent, stat),
        status: aggregate.form_status(&ctx.config.hot_form),
        total_points: aggregate.totals.points,
        points_per_million: aggregate.points_per_million(),
    }
}

fn features(ctx: &CommandContext) -> Result<PlayerFeatures> {
    compute_player_features(&ctx.records, &ctx.config.windows)
}

/// Leader board, hot and cold lists for `stat`, and the value board.
pub fn build_player_form_report(
    ctx: &CommandContext,
    params: &PlayerFormParams,
) -> Result<PlayerFormReport> {
    let features = features(ctx)?;
    let min_minutes = params
        .min_minutes
        .unwrap_or(ctx.config.recent_form_min_minutes);
    let lines = |players: Vec<&SeasonAggregate>| -> Vec<FormLine> {
        players
            .into_iter()
            .filter(|a| plays_in(a, params.position))
            .take(params.top)
            .map(|a| form_line(ctx, a, params.stat))
            .collect()
    };

    Ok(PlayerFormReport {
        gameweek: ctx.current,
        stat: params.stat,
        position: params.position,
        min_minutes,
        leaders: lines(recent_form_leaders(
            &features.season,
            params.stat,
            min_minutes,
            params.position,
            params.top,
        )),
        hot: lines(hot_form_players(&features.season, &ctx.config.hot_form)),
        cold: lines(cold_form_players(&features.season, &ctx.config.hot_form)),
        value_min_minutes: ctx.config.value_min_minutes,
        value: lines(best_value_players(
            &features.season,
            ctx.config.value_min_minutes,
            params.position,
            params.top,
        )),
    })
}

fn matches_query(aggregate: &SeasonAggregate, query: &str) -> bool {
    if let Ok(id) = query.trim().parse::<PlayerId>() {
        return aggregate.player_id == id;
    }
    aggregate
        .player_name
        .to_lowercase()
        .contains(&query.trim().to_lowercase())
}

/// Detail for every player whose id or name matches `query`.
pub fn build_player_details(ctx: &CommandContext, query: &str) -> Result<Vec<PlayerDetail>> {
    let features = features(ctx)?;
    Ok(features
        .season
        .iter()
        .filter(|a| matches_query(a, query))
        .map(|season| PlayerDetail {
            season: season.clone(),
            rolling: features.rolling_for(season.player_id).cloned().collect(),
        })
        .collect())
}

fn board(title: &str, rows: &[FormLine], out: &mut Vec<String>) {
    out.push(title.to_string());
    if rows.is_empty() {
        out.push("  (none)".to_string());
        return;
    }
    out.push(format!(
        "  {:<20} {:<5} {:<3} {:>6} {:>9} {:>9} {:>7}",
        "Name",
        "Team",
        "Pos",
        "Mins",
        "Recent/90",
        "Season/90",
        "Trend"
    ));
    for row in rows {
        out.push(format!(
            "  {:<20} {:<5} {:<3} {:>6} {:>9.2} {:>9.2} {:>+7.2}",
            clip(&row.name, 20),
            row.team_short,
            position_label(row.position),
            row.recent_minutes,
            row.recent_per90,
            row.season_per90,
            row.trend
        ));
    }
}

fn position_label(position: Option<Position>) -> String {
    position.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
}

fn value_board(min_minutes: u32, rows: &[FormLine], out: &mut Vec<String>) {
    out.push(format!("Best value (min {} season mins)", min_minutes));
    if rows.is_empty() {
        out.push("  (none)".to_string());
        return;
    }
    out.push(format!(
        "  {:<20} {:<5} {:<3} {:>6} {:>6} {:>7}",
        "Name", "Team", "Pos", "Price", "Pts", "Pts/£m"
    ));
    for row in rows {
        out.push(format!(
            "  {:<20} {:<5} {:<3} {:>6.1} {:>6.0} {:>7.1}",
            clip(&row.name, 20),
            row.team_short,
            position_label(row.position),
            row.price.unwrap_or(0.0),
            row.total_points,
            row.points_per_million.unwrap_or(0.0)
        ));
    }
}

pub fn render_player_form_report(report: &PlayerFormReport) -> String {
    let scope = report
        .position
        .map(|p| format!(", {} only", p))
        .unwrap_or_default();
    let mut out = vec![
        format!(
            "Player form through gameweek {} ({} per 90{})",
            report.gameweek, report.stat, scope
        ),
        String::new(),
    ];
    board(
        &format!("Recent leaders (min {} mins)", report.min_minutes),
        &report.leaders,
        &mut out,
    );
    out.push(String::new());
    board("Hot", &report.hot, &mut out);
    out.push(String::new());
    board("Cold", &report.cold, &mut out);
    out.push(String::new());
    value_board(report.value_min_minutes, &report.value, &mut out);
    out.join("\n")
}

pub fn render_player_details(ctx: &CommandContext, details: &[PlayerDetail]) -> String {
    let windows = &ctx.config.windows;
    if details.is_empty() {
        return "No matching players.".to_string();
    }
    let mut out = Vec::new();
    for detail in details {
        let s = &detail.season;
        out.push(format!(
            "{} [{}] {} apps, {} starts, {} mins, {:.0} pts",
            s.player_name,
            s.player_id,
            s.fixtures_played,
            s.starts,
            s.totals.minutes,
            s.totals.points
        ));
        if s.position.is_some() || s.price.is_some() {
            out.push(format!(
                "  {} {}",
                position_label(s.position),
                s.price
                    .map(|p| format!("£{:.1}m, {:.1} pts/£m", p, s.points_per_million().unwrap_or(0.0)))
                    .unwrap_or_default()
            ));
        }
        out.push(format!(
            "  per 90: pts {:.2}  xGI {:.2}  npxGI {:.2}  DC {:.2}  CBI {:.2}  rec {:.2}",
            s.per90.points,
            s.per90.xgi,
            s.per90.npxgi,
            s.per90.defensive_contribution,
            s.per90.clearances_blocks_interceptions,
            s.per90.recoveries
        ));
        out.push(format!(
            "  ICT per 90: I {:.1}  C {:.1}  T {:.1}",
            s.per90.influence, s.per90.creativity, s.per90.threat
        ));
        out.push(format!(
            "  home {:.2} pts/90 ({} games), away {:.2} pts/90 ({} games)",
            s.home.per90.points,
            s.home.games(),
            s.away.per90.points,
            s.away.games()
        ));
        out.push(format!(
            "  trend: pts {:+.2}  npxGI {:+.2}  bps {:+.2}",
            s.form_trend_points, s.form_trend_npxgi, s.form_trend_bps
        ));

        let mut header = format!("  {:<4} {:<4} {:<2}", "GW", "Opp", "V");
        for w in windows {
            header.push_str(&format!(" {:>9}", format!("L{} pts/90", w)));
        }
        out.push(header);
        for row in &detail.rolling {
            let mut line = format!(
                "  {:<4} {:<4} {:<2}",
                row.round.as_u16(),
                ctx.short_name(row.opponent),
                row.venue.short_label()
            );
            for w in windows {
                let value = row.window(*w).map(|f| f.per90.points).unwrap_or(0.0);
                line.push_str(&format!(" {:>9.2}", value));
            }
            out.push(line);
        }
        out.push(String::new());
    }
    out.join("\n")
}

/// Handle the player form command
pub fn handle_player_form(
    snapshot: &Path,
    config: Option<&Path>,
    params: PlayerFormParams,
) -> Result<()> {
    let ctx = CommandContext::load(snapshot, config)?;

    match &params.player {
        Some(query) => {
            let details = build_player_details(&ctx, query)?;
            if params.as_json {
                println!("{}", to_json(&details)?);
            } else {
                println!("{}", render_player_details(&ctx, &details));
            }
        }
        None => {
            let report = build_player_form_report(&ctx, &params)?;
            if params.as_json {
                println!("{}", to_json(&report)?);
            } else {
                println!("{}", render_player_form_report(&report));
            }
        }
    }

    Ok(())
}
