use serde::{Deserialize, Serialize};

use crate::team::TeamRecord;

/// One row of a standings snapshot: a team and its score at that point in
/// the season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: u32,
}

/// Rank every team by its score through the first `through_match` matches.
///
/// Order is score descending, ties broken by name ascending. The order is
/// total (team names are unique), which matters because callers display a
/// top-N slice.
pub fn project(teams: &[TeamRecord], through_match: usize) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = teams
        .iter()
        .map(|team| RankingEntry {
            name: team.name().to_string(),
            score: team.score_through(through_match),
        })
        .collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    entries
}
