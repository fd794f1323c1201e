use crate::common::fixtures::RECORDED_GAMES;
use rookery::cli::{format_report, replay_file, replay_game, split_games};
use rookery::{Color, GameStatus};
use std::fs;
use tempfile::TempDir;

fn write_games(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("games.pgn");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_replay_file_reports_each_game() {
    let dir = TempDir::new().unwrap();
    let path = write_games(&dir, RECORDED_GAMES);

    let reports = replay_file(&path).unwrap();
    assert_eq!(reports.len(), 3);

    assert!(reports[0].is_valid());
    assert_eq!(reports[0].plies, 4);
    assert_eq!(
        reports[0].status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );

    let failure = reports[1].failure.as_ref().unwrap();
    assert_eq!(failure.ply, 3);
    assert_eq!(failure.token, "Ke3");
    assert_eq!(failure.category, "no-legal-source");
    assert_eq!(reports[1].plies, 2);

    assert!(reports[2].is_valid());
    assert_eq!(reports[2].plies, 11);
    assert_eq!(reports[2].status, GameStatus::InProgress);
}

#[test]
fn test_text_report_lists_only_rejections() {
    let dir = TempDir::new().unwrap();
    let reports = replay_file(&write_games(&dir, RECORDED_GAMES)).unwrap();

    let text = format_report(&reports);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Game 2: ply 3 'Ke3' rejected (no-legal-source)"));
    assert_eq!(lines[1], "2 of 3 games replayed cleanly");
}

#[test]
fn test_json_report_shape() {
    let dir = TempDir::new().unwrap();
    let reports = replay_file(&write_games(&dir, RECORDED_GAMES)).unwrap();

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["index"], 1);
    assert_eq!(json[0]["status"]["Checkmate"]["winner"], "Black");
    assert!(json[0]["failure"].is_null());
    assert_eq!(json[1]["failure"]["token"], "Ke3");
    assert_eq!(json[2]["status"], "InProgress");
}

#[test]
fn test_moves_after_checkmate_are_rejected() {
    let report = replay_game(1, "1. f3 e5 2. g4 Qh4 3. a3");
    let failure = report.failure.unwrap();
    assert_eq!(failure.ply, 5);
    assert_eq!(failure.category, "game-over");
    assert!(report.status.is_over());
}

#[test]
fn test_malformed_token_in_recorded_game() {
    let report = replay_game(1, "1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. Bxc6 dxc6 5. O-O f6 6. d4 exd4 7. Nxd4 c5 8. Nb3 Qxd1 9. Rxd1 Bg4 10. f3 Be6 11. Nc3 Bd6 12. Be3 b6 13. a4 O-O-O 14. a5 Kb7 15. e=Q");
    let failure = report.failure.unwrap();
    assert_eq!(failure.token, "e=Q");
    assert_eq!(failure.category, "malformed-notation");
    assert_eq!(report.plies, 28);
}

#[test]
fn test_split_handles_missing_trailing_newline_and_headers_only() {
    assert_eq!(split_games("1. e4 e5").len(), 1);
    assert!(split_games("[Event \"Empty\"]\n\n").is_empty());
    assert!(split_games("").is_empty());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = replay_file(&dir.path().join("nope.pgn")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read games file"));
}
