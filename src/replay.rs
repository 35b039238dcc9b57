//! Non-interactive play: apply a list of moves and report each outcome.

use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

use crate::games::tictactoe::{GameModel, Outcome, Position};
use crate::status::status_message;

/// One applied move as reported by `replay --json`.
#[derive(Debug, Serialize)]
struct ReplayStep<'a> {
    step: usize,
    row: usize,
    col: usize,
    #[serde(flatten)]
    outcome: Outcome,
    status: &'a str,
}

/// Parses every move before anything is played.
pub fn parse_moves<S: AsRef<str>>(moves: &[S]) -> anyhow::Result<Vec<Position>> {
    moves
        .iter()
        .map(|m| m.as_ref().parse::<Position>().map_err(anyhow::Error::from))
        .collect()
}

/// Starts a game for the two names, plays `moves` in order, and writes a
/// report to `out`. Returns the model in its final state.
#[instrument(skip(moves, out))]
pub fn run_replay<W: Write>(
    player_x: &str,
    player_o: &str,
    moves: &[Position],
    json: bool,
    out: &mut W,
) -> anyhow::Result<GameModel> {
    let mut model = GameModel::new();
    model.start_game(player_x, player_o);
    info!(move_count = moves.len(), "Replaying moves");

    for (i, pos) in moves.iter().enumerate() {
        let mover = model.current_player_name().to_string();
        let (row, col) = pos.coords();
        let outcome = model.place_mark(row, col);
        let status = status_message(&model);

        if json {
            let step = ReplayStep {
                step: i + 1,
                row,
                col,
                outcome,
                status: &status,
            };
            writeln!(out, "{}", serde_json::to_string(&step)?)?;
        } else {
            writeln!(
                out,
                "{:>2}. {} -> ({}, {}): {}",
                i + 1,
                mover,
                row,
                col,
                describe(&outcome, &status)
            )?;
        }
    }

    if !json {
        writeln!(out)?;
        writeln!(out, "{}", model.board().display())?;
        writeln!(out)?;
        writeln!(out, "{}", status_message(&model))?;
    }

    Ok(model)
}

fn describe(outcome: &Outcome, status: &str) -> String {
    match outcome {
        Outcome::Ignored => "ignored".to_string(),
        _ => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Phase;

    #[test]
    fn test_parse_moves_rejects_bad_input() {
        assert!(parse_moves(&["1", "2,2"]).is_ok());
        let err = parse_moves(&["1", "ten"]).unwrap_err();
        assert!(err.to_string().contains("ten"));
    }

    #[test]
    fn test_text_report() {
        let moves = parse_moves(&["1", "4", "2", "5", "3"]).unwrap();
        let mut out = Vec::new();
        let model = run_replay("Ann", "Bo", &moves, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!model.is_active());
        assert!(text.contains(" 1. Ann -> (0, 0): Bo's turn"));
        assert!(text.contains(" 5. Ann -> (0, 2): Ann wins!"));
        assert!(text.contains("X|X|X"));
        assert!(text.trim_end().ends_with("Ann wins!"));
    }

    #[test]
    fn test_ignored_moves_are_reported() {
        let moves = parse_moves(&["5", "5"]).unwrap();
        let mut out = Vec::new();
        let model = run_replay("", "", &moves, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(" 2. Player 2 -> (1, 1): ignored"));
        assert_eq!(model.phase(), Phase::Active);
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn test_json_report() {
        let moves = parse_moves(&["1", "4", "2", "5", "3"]).unwrap();
        let mut out = Vec::new();
        run_replay("Ann", "Bo", &moves, true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0]["outcome"], "continued");
        assert_eq!(lines[0]["next_player"], "O");
        assert_eq!(lines[4]["outcome"], "win");
        assert_eq!(lines[4]["player"], "X");
        assert_eq!(
            lines[4]["line"],
            serde_json::json!(["TopLeft", "TopCenter", "TopRight"])
        );
        assert_eq!(lines[4]["status"], "Ann wins!");
    }
}
