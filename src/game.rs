use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A line that could not be decomposed into two `(name, score)` segments.
/// Each variant carries the offending text so the caller can surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedResult {
    #[error("expected two comma-separated team scores, got {found} in {line:?}")]
    SegmentCount { line: String, found: usize },
    #[error("no trailing score token in {segment:?}")]
    MissingScore { segment: String },
    #[error("score token out of range in {segment:?}")]
    ScoreOutOfRange { segment: String },
    #[error("empty team name in {segment:?}")]
    EmptyTeamName { segment: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub name: String,
    pub score: u32,
}

/// One played match: the two teams in input order with their goal counts.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub home: TeamScore,
    pub away: TeamScore,
}

impl Game {
    pub fn team_names(&self) -> [&str; 2] {
        [&self.home.name, &self.away.name]
    }

    pub fn is_tie(&self) -> bool {
        self.home.score == self.away.score
    }

    pub fn winner(&self) -> Option<&str> {
        if self.is_tie() {
            return None;
        }
        if self.home.score > self.away.score {
            Some(&self.home.name)
        } else {
            Some(&self.away.name)
        }
    }
}

/// Parse one result line of the form `"<home name> <goals>, <away name> <goals>"`.
///
/// The separator between the two segments is exactly `", "`. Within a
/// segment the score is the trailing run of ASCII digits and the name is
/// everything before the whitespace that precedes it, so names may themselves
/// contain spaces or digits ("Borussia 09 Null 4" parses as "Borussia 09
/// Null" / 4).
pub fn parse_game(line: &str) -> Result<Game, MalformedResult> {
    let segments: Vec<&str> = line.split(", ").collect();
    if segments.len() != 2 {
        return Err(MalformedResult::SegmentCount {
            line: line.to_string(),
            found: segments.len(),
        });
    }
    let home = parse_team_score(segments[0])?;
    let away = parse_team_score(segments[1])?;
    Ok(Game { home, away })
}

/// Split a segment at the last whitespace boundary before a trailing digit
/// run. Anchoring to the final boundary is what lets digits appear inside
/// team names.
fn parse_team_score(segment: &str) -> Result<TeamScore, MalformedResult> {
    let digits_start = segment
        .rfind(|c: char| !c.is_ascii_digit())
        .map(|idx| idx + segment[idx..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    let digits = &segment[digits_start..];
    if digits.is_empty() {
        return Err(MalformedResult::MissingScore {
            segment: segment.to_string(),
        });
    }

    let before = &segment[..digits_start];
    let Some(last) = before.chars().next_back() else {
        return Err(MalformedResult::EmptyTeamName {
            segment: segment.to_string(),
        });
    };
    if !last.is_whitespace() {
        // Digits glued to a non-space char ("Team-1", "-1") are not a score.
        return Err(MalformedResult::MissingScore {
            segment: segment.to_string(),
        });
    }

    let name = &before[..before.len() - last.len_utf8()];
    if name.is_empty() {
        return Err(MalformedResult::EmptyTeamName {
            segment: segment.to_string(),
        });
    }
    let score = digits
        .parse::<u32>()
        .map_err(|_| MalformedResult::ScoreOutOfRange {
            segment: segment.to_string(),
        })?;

    Ok(TeamScore {
        name: name.to_string(),
        score,
    })
}
