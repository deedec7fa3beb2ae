use std::env;

use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;

use matchday::fake_feed::{self, DEFAULT_TEAMS};

/// Emit a synthetic season of result lines to stdout, suitable for piping
/// into the `matchday` binary. `FEED_TEAMS` takes comma-separated names,
/// `FEED_DAYS` the day count, and `FEED_SEED` makes the output reproducible.
fn main() -> Result<()> {
    let teams_raw = env::var("FEED_TEAMS").unwrap_or_default();
    let teams: Vec<&str> = if teams_raw.trim().is_empty() {
        DEFAULT_TEAMS.to_vec()
    } else {
        teams_raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    };
    if teams.len() < 2 {
        return Err(anyhow!("FEED_TEAMS needs at least two team names"));
    }

    let days = env::var("FEED_DAYS")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(4)
        .clamp(1, 1000);

    let mut rng = match env::var("FEED_SEED")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
    {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for line in fake_feed::generate_season(&teams, days, &mut rng) {
        println!("{line}");
    }
    Ok(())
}
