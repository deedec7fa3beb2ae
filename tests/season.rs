use std::fs;
use std::path::PathBuf;

use matchday::rankings::RankingEntry;
use matchday::season::Season;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_lines() -> Vec<String> {
    read_fixture("season_results.txt")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn ingest_all(lines: &[String]) -> (Season, Vec<(Vec<RankingEntry>, usize)>) {
    let mut season = Season::new();
    let mut emitted = Vec::new();
    season
        .ingest(lines, |ranking, day| emitted.push((ranking.to_vec(), day)))
        .expect("fixture season should ingest");
    (season, emitted)
}

fn entry(name: &str, score: u32) -> RankingEntry {
    RankingEntry {
        name: name.to_string(),
        score,
    }
}

#[test]
fn infers_three_matches_per_day() {
    let (season, _) = ingest_all(&fixture_lines());
    assert_eq!(season.matches_per_day(), Some(3));
    assert_eq!(season.games_played(), 12);
}

#[test]
fn registers_teams_in_first_seen_order() {
    let (season, _) = ingest_all(&fixture_lines());
    assert_eq!(
        season.team_names(),
        vec![
            "San Jose Earthquakes",
            "Santa Cruz Slugs",
            "Capitola Seahorses",
            "Aptos FC",
            "Felton Lumberjacks",
            "Monterey United",
        ]
    );
}

#[test]
fn emits_four_match_days_with_expected_top_three() {
    let (_, emitted) = ingest_all(&fixture_lines());
    assert_eq!(emitted.len(), 4);

    let top3: Vec<(Vec<RankingEntry>, usize)> = emitted
        .into_iter()
        .map(|(ranking, day)| (ranking.into_iter().take(3).collect(), day))
        .collect();

    assert_eq!(
        top3[0],
        (
            vec![
                entry("Capitola Seahorses", 3),
                entry("Felton Lumberjacks", 3),
                entry("San Jose Earthquakes", 1),
            ],
            1
        )
    );
    assert_eq!(
        top3[1],
        (
            vec![
                entry("Capitola Seahorses", 4),
                entry("Aptos FC", 3),
                entry("Felton Lumberjacks", 3),
            ],
            2
        )
    );
    assert_eq!(
        top3[2],
        (
            vec![
                entry("Aptos FC", 6),
                entry("Felton Lumberjacks", 6),
                entry("Monterey United", 6),
            ],
            3
        )
    );
    assert_eq!(
        top3[3],
        (
            vec![
                entry("Aptos FC", 9),
                entry("Felton Lumberjacks", 7),
                entry("Monterey United", 6),
            ],
            4
        )
    );
}

#[test]
fn rankings_cover_every_known_team() {
    let (_, emitted) = ingest_all(&fixture_lines());
    for (ranking, _) in &emitted {
        assert_eq!(ranking.len(), 6);
    }
}

#[test]
fn final_totals_match_full_history() {
    let (season, _) = ingest_all(&fixture_lines());
    let expected = [
        ("San Jose Earthquakes", 2),
        ("Santa Cruz Slugs", 3),
        ("Capitola Seahorses", 5),
        ("Aptos FC", 9),
        ("Felton Lumberjacks", 7),
        ("Monterey United", 6),
    ];
    for (name, total) in expected {
        let team = season.team(name).expect("team should be registered");
        assert_eq!(team.total_score(), total, "total for {name}");
        assert_eq!(team.matches_played(), 4);
    }
}

#[test]
fn accumulates_across_multiple_ingest_calls() {
    let lines = fixture_lines();
    let mut season = Season::new();
    let mut emitted = Vec::new();

    // Feed the season in two uneven chunks; boundaries span the chunk seam.
    season
        .ingest(&lines[..7], |ranking, day| {
            emitted.push((ranking.to_vec(), day))
        })
        .expect("first chunk should ingest");
    assert_eq!(emitted.len(), 2);
    season
        .ingest(&lines[7..], |ranking, day| {
            emitted.push((ranking.to_vec(), day))
        })
        .expect("second chunk should ingest");

    assert_eq!(emitted.len(), 4);
    assert_eq!(emitted[3].1, 4);
    assert_eq!(season.matches_per_day(), Some(3));
}

#[test]
fn matches_per_day_is_inferred_only_once() {
    let lines = fixture_lines();
    let mut season = Season::new();
    season.ingest(&lines, |_, _| {}).unwrap();
    assert_eq!(season.matches_per_day(), Some(3));

    // A second season's worth of the same feed starts with repeated names at
    // index 1, which would re-infer matches_per_day = 1 if the guard failed.
    season.ingest(&lines, |_, _| {}).unwrap();
    assert_eq!(season.matches_per_day(), Some(3));
    assert_eq!(season.games_played(), 24);
}

#[test]
fn single_result_never_completes_a_match_day() {
    let mut season = Season::new();
    let mut calls = 0usize;
    season
        .ingest(
            &["San Jose Earthquakes 3, Santa Cruz Slugs 3"],
            |_, _| calls += 1,
        )
        .expect("single line should ingest");
    assert_eq!(calls, 0);
    assert_eq!(season.matches_per_day(), None);
    assert_eq!(season.games_played(), 1);
}

#[test]
fn no_completion_before_matches_per_day_is_known() {
    // All four teams end up with one match played, but no team name repeats
    // between consecutive lines, so matches_per_day stays unknown and equal
    // counts alone never signal completion.
    let lines = [
        "Aptos FC 1, Monterey United 0",
        "Capitola Seahorses 2, Santa Cruz Slugs 2",
    ];
    let mut season = Season::new();
    let mut calls = 0usize;
    season.ingest(&lines, |_, _| calls += 1).unwrap();
    assert_eq!(calls, 0);
    assert_eq!(season.matches_per_day(), None);
}

#[test]
fn uneven_counts_after_inference_stop_signaling() {
    // Day one completes, then the pool never equalizes again: no further
    // callbacks and no error.
    let lines = [
        "Aptos FC 1, Monterey United 0",
        "Capitola Seahorses 1, Santa Cruz Slugs 0",
        "Capitola Seahorses 2, Aptos FC 0",
    ];
    let mut season = Season::new();
    let mut days = Vec::new();
    season.ingest(&lines, |_, day| days.push(day)).unwrap();
    assert_eq!(days, vec![1]);
    assert_eq!(season.matches_per_day(), Some(2));
}

#[test]
fn malformed_line_stops_processing_and_keeps_prior_state() {
    let lines = [
        "San Jose Earthquakes 3, Santa Cruz Slugs 3",
        "Capitola Seahorses 1, Aptos FC 0",
        "Felton Lumberjacks two, Monterey United 0",
        "Felton Lumberjacks 1, Aptos FC 2",
    ];
    let mut season = Season::new();
    let err = season.ingest(&lines, |_, _| {}).unwrap_err();
    assert!(err.to_string().contains("Felton Lumberjacks two"));

    // Results before the bad line stay applied; nothing from it or after.
    assert_eq!(season.games_played(), 2);
    assert_eq!(season.team("Capitola Seahorses").unwrap().total_score(), 3);
    assert!(season.team("Felton Lumberjacks").is_none());
    assert!(season.team("Monterey United").is_none());
}

#[test]
fn malformed_lookahead_line_propagates_after_current_is_applied() {
    // The second line is only reached through the inference lookahead here;
    // its failure surfaces immediately, with the first result applied.
    let lines = [
        "San Jose Earthquakes 3, Santa Cruz Slugs 3",
        "Santa Cruz Slugs x, Capitola Seahorses 1",
    ];
    let mut season = Season::new();
    let err = season.ingest(&lines, |_, _| {}).unwrap_err();
    assert!(err.to_string().contains("Santa Cruz Slugs x"));
    assert_eq!(season.games_played(), 1);
    assert_eq!(season.team("San Jose Earthquakes").unwrap().total_score(), 1);
    assert!(season.team("Capitola Seahorses").is_none());
}

#[test]
fn snapshots_match_callback_history() {
    let (season, emitted) = ingest_all(&fixture_lines());
    assert_eq!(season.match_day_snapshots(), emitted);
}
