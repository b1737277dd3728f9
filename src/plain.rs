//! Line-oriented front end for pipes and plain terminals.

use crate::controller::Controller;
use crate::scoreboard::Scoreboard;
use std::io::{self, BufRead, Write};
use strictly_guess::{GameSession, LOWER_BOUND, TargetSource, UPPER_BOUND};
use tracing::{debug, info, instrument};

/// Plays rounds reading one guess per line from `input`.
///
/// After each submission the feedback, counters and guess list are printed.
/// Once a round ends the player is asked whether to play again; anything but
/// `y`/`yes` ends the run, as does end of input.
#[instrument(skip_all)]
pub fn run_plain<S, R, W>(
    controller: &mut Controller<S, Scoreboard>,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    S: TargetSource,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "Strictly Guess")?;
    writeln!(out, "Guess a number between {} and {}.", LOWER_BOUND, UPPER_BOUND)?;
    print_board(controller.surface(), out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            debug!("Input closed");
            break;
        };

        controller.submit(&line);
        print_board(controller.surface(), out)?;

        if *controller.surface().locked() {
            write!(out, "Play again? [y/N] ")?;
            out.flush()?;
            let answer = lines.next().transpose()?.unwrap_or_default();
            if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                controller.reset();
                print_board(controller.surface(), out)?;
            } else {
                break;
            }
        }
    }

    writeln!(out, "Goodbye!")?;
    info!("Plain session ended");
    Ok(())
}

/// Runs the plain front end on stdin and stdout.
pub fn run_plain_stdio(seed: Option<u64>) -> io::Result<()> {
    let session = match seed {
        Some(seed) => GameSession::seeded(seed),
        None => GameSession::new(),
    };
    let mut controller = Controller::new(session, Scoreboard::new());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_plain(&mut controller, stdin.lock(), &mut stdout)
}

fn print_board<W: Write>(board: &Scoreboard, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", board.feedback().message())?;
    writeln!(out, "{}", board.stats_line())?;
    if !board.guesses().is_empty() {
        writeln!(out, "Guesses: {}", board.history_line())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_guess::{FixedTarget, ScriptedTargets};

    fn play<S: TargetSource>(
        session: GameSession<S>,
        script: &str,
    ) -> (String, Controller<S, Scoreboard>) {
        let mut controller = Controller::new(session, Scoreboard::new());
        let mut out = Vec::new();
        run_plain(&mut controller, Cursor::new(script.to_string()), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), controller)
    }

    #[test]
    fn test_round_to_win() {
        let (out, controller) =
            play(GameSession::with_source(FixedTarget::new(42)), "50\n25\n42\nn\n");
        assert!(out.contains("Too high! Try a lower number."));
        assert!(out.contains("Too low! Try a higher number."));
        assert!(out.contains("Congratulations! You found the number in 3 attempts!"));
        assert!(out.contains("Guesses: 50(high) 25(low) 42(correct)"));
        assert!(out.trim_end().ends_with("Goodbye!"));
        assert!(!controller.session().is_active());
    }

    #[test]
    fn test_rejections_are_reported() {
        let (out, controller) =
            play(GameSession::with_source(FixedTarget::new(42)), "abc\n0\n10\n10\n");
        assert!(out.contains("Please enter a valid number!"));
        assert!(out.contains("Please enter a number between 1 and 100!"));
        assert!(out.contains("You already guessed that number!"));
        assert_eq!(controller.session().attempts(), 1);
    }

    #[test]
    fn test_play_again_starts_new_round() {
        let session = GameSession::with_source(ScriptedTargets::new([10, 20]));
        let (out, controller) = play(session, "10\ny\n20\n");
        assert!(out.contains("Play again? [y/N]"));
        assert_eq!(out.matches("Congratulations!").count(), 2);
        assert_eq!(controller.session().history(), &[20]);
    }

    #[test]
    fn test_eof_ends_game() {
        let (out, controller) = play(GameSession::with_source(FixedTarget::new(42)), "");
        assert!(out.contains("Ready to play?"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(controller.session().attempts(), 0);
    }
}
