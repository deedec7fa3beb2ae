use rand::Rng;
use rand::seq::SliceRandom;

/// Default pool for generated feeds, mirroring the six-team fixture league.
pub const DEFAULT_TEAMS: &[&str] = &[
    "San Jose Earthquakes",
    "Santa Cruz Slugs",
    "Capitola Seahorses",
    "Aptos FC",
    "Felton Lumberjacks",
    "Monterey United",
];

const MAX_GOALS: u32 = 5;

/// Generate `days` match days of synthetic result lines in the engine's
/// input format, one match per line.
///
/// Every team plays exactly once per day (pairings reshuffled each day), so
/// each generated day completes. The first match of a day always involves a
/// team from the previous day's final match; that repetition is what lets
/// the standings engine infer the day size from the stream. An odd team
/// count would leave one team idle per day and keep days from ever
/// completing, so the trailing team is dropped instead.
pub fn generate_season<R: Rng>(teams: &[&str], days: usize, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = teams.to_vec();
    if pool.len() % 2 != 0 {
        pool.pop();
    }
    if pool.len() < 2 {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(days * pool.len() / 2);
    let mut prev_last: Option<(&str, &str)> = None;
    for _ in 0..days {
        pool.shuffle(rng);
        let mut pairs: Vec<(&str, &str)> = pool.chunks_exact(2).map(|p| (p[0], p[1])).collect();
        if let Some((a, b)) = prev_last
            && let Some(pos) = pairs
                .iter()
                .position(|&(home, away)| [home, away].contains(&a) || [home, away].contains(&b))
        {
            pairs.swap(0, pos);
        }
        prev_last = pairs.last().copied();

        for (home, away) in pairs {
            lines.push(format!(
                "{} {}, {} {}",
                home,
                rng.gen_range(0..=MAX_GOALS),
                away,
                rng.gen_range(0..=MAX_GOALS),
            ));
        }
    }
    lines
}
