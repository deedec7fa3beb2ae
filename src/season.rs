use std::cmp::Ordering;
use std::collections::HashMap;

use crate::game::{self, MalformedResult};
use crate::rankings::{self, RankingEntry};
use crate::team::TeamRecord;

/// Running accumulator for one league season.
///
/// Owns every [`TeamRecord`] (first-appearance order, looked up by name) and
/// the matches-per-day figure inferred from the result stream. Results are
/// applied strictly in input order; there is no terminal state — the engine
/// keeps accepting further [`Season::ingest`] calls.
#[derive(Debug, Default)]
pub struct Season {
    teams: Vec<TeamRecord>,
    index: HashMap<String, usize>,
    games_played: usize,
    matches_per_day: Option<usize>,
}

impl Season {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of raw result lines in order, invoking `on_match_day`
    /// with the full ranking and the 1-based day number each time a match
    /// day completes.
    ///
    /// A parse failure (including one hit by the matches-per-day lookahead)
    /// stops processing at that line; results already applied stay applied.
    /// Repeated calls accumulate into the same season, and day boundaries
    /// are detected over the full accumulated history.
    pub fn ingest<S, F>(&mut self, lines: &[S], mut on_match_day: F) -> Result<(), MalformedResult>
    where
        S: AsRef<str>,
        F: FnMut(&[RankingEntry], usize),
    {
        for (idx, line) in lines.iter().enumerate() {
            let game = game::parse_game(line.as_ref())?;

            for name in game.team_names() {
                self.team_entry(name);
            }
            match game.home.score.cmp(&game.away.score) {
                Ordering::Greater => {
                    self.team_entry(&game.home.name).record_win();
                    self.team_entry(&game.away.name).record_loss();
                }
                Ordering::Less => {
                    self.team_entry(&game.away.name).record_win();
                    self.team_entry(&game.home.name).record_loss();
                }
                Ordering::Equal => {
                    self.team_entry(&game.home.name).record_tie();
                    self.team_entry(&game.away.name).record_tie();
                }
            }
            self.games_played += 1;

            // The first repetition of a team between consecutive results
            // marks where the round-robin wraps: every team has appeared
            // once, so the current 1-based index is the day size. Inferred
            // at most once per season; the lookahead line goes through the
            // real parser and its failure propagates here rather than being
            // swallowed.
            if self.matches_per_day.is_none()
                && let Some(next_line) = lines.get(idx + 1)
            {
                let next = game::parse_game(next_line.as_ref())?;
                let current = game.team_names();
                if next.team_names().iter().any(|name| current.contains(name)) {
                    self.matches_per_day = Some(idx + 1);
                }
            }

            if self.end_of_match_day() {
                let day = self.current_match_day();
                let ranking = rankings::project(&self.teams, day);
                on_match_day(&ranking, day);
            }
        }
        Ok(())
    }

    fn team_entry(&mut self, name: &str) -> &mut TeamRecord {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.teams.len();
                self.teams.push(TeamRecord::new(name));
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.teams[idx]
    }

    /// A day is complete exactly when every known team has played the same
    /// number of matches. Checked after every applied result rather than at
    /// the inferred boundary index, since teams accumulate unevenly in
    /// between. Never true before `matches_per_day` is known.
    fn end_of_match_day(&self) -> bool {
        if self.matches_per_day.is_none() || self.teams.is_empty() {
            return false;
        }
        let played = self.teams[0].matches_played();
        self.teams.iter().all(|team| team.matches_played() == played)
    }

    /// Number of fully completed match days so far: the minimum
    /// matches-played across all teams.
    pub fn current_match_day(&self) -> usize {
        self.teams
            .iter()
            .map(TeamRecord::matches_played)
            .min()
            .unwrap_or(0)
    }

    /// Pull-based alternative to the ingest callback: recompute from scratch
    /// the `(ranking, day)` snapshot for every completed match day.
    pub fn match_day_snapshots(&self) -> Vec<(Vec<RankingEntry>, usize)> {
        (1..=self.current_match_day())
            .map(|day| (rankings::project(&self.teams, day), day))
            .collect()
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn team(&self, name: &str) -> Option<&TeamRecord> {
        self.index.get(name).map(|&idx| &self.teams[idx])
    }

    pub fn team_names(&self) -> Vec<&str> {
        self.teams.iter().map(TeamRecord::name).collect()
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    pub fn matches_per_day(&self) -> Option<usize> {
        self.matches_per_day
    }
}
