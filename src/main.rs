use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};

use matchday::export::{self, StandingsExport};
use matchday::rankings::{self, RankingEntry};
use matchday::season::Season;
use matchday::team::TeamRecord;

fn main() -> Result<()> {
    let top_n = env::var("TOP_N")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(3)
        .max(1);
    let json_output = env::var("OUTPUT_FORMAT")
        .map(|val| val.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let export_path = env::var("STANDINGS_EXPORT")
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .map(PathBuf::from);

    let lines = read_result_lines()?;

    let mut season = Season::new();
    let mut emit_error = None;
    season
        .ingest(&lines, |ranking, day| {
            if let Err(err) = emit_match_day(ranking, day, top_n, json_output) {
                emit_error.get_or_insert(err);
            }
        })
        .context("processing match results")?;
    if let Some(err) = emit_error {
        return Err(err);
    }

    if let Some(path) = export_path {
        let standings = final_standings(season.teams());
        export::save_standings(
            &path,
            &StandingsExport {
                match_day: season.current_match_day(),
                standings,
            },
        )?;
    }

    Ok(())
}

/// Stdin is the only result source; blank lines are dropped here, before the
/// engine sees them.
fn read_result_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("reading results from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn emit_match_day(
    ranking: &[RankingEntry],
    day: usize,
    top_n: usize,
    json_output: bool,
) -> Result<()> {
    let top = &ranking[..top_n.min(ranking.len())];
    if json_output {
        let payload = StandingsExport {
            match_day: day,
            standings: top.to_vec(),
        };
        let json = serde_json::to_string(&payload).context("serialize match day")?;
        println!("{json}");
        return Ok(());
    }
    println!("Matchday {day}");
    for entry in top {
        println!("{}, {} pts", entry.name, entry.score);
    }
    println!();
    Ok(())
}

/// Cumulative table over every applied result, including a trailing partial
/// match day.
fn final_standings(teams: &[TeamRecord]) -> Vec<RankingEntry> {
    let through = teams
        .iter()
        .map(TeamRecord::matches_played)
        .max()
        .unwrap_or(0);
    rankings::project(teams, through)
}
