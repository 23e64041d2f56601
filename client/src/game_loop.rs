use std::error::Error;
use std::io::Write;

use common::games::tictactoe::{GameMode, MoveError, TicTacToeSession};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::render::render_screen;

/// Reads commands line by line until `q` or end of input.
///
/// A human move is fully applied and checked before the computer is asked,
/// and the computer's move is applied before the next line is read.
pub async fn run_game_loop<R, W>(
    session: &mut TicTacToeSession,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{}", render_screen(session.state()))?;

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP_TEXT)?;
                continue;
            }
            Command::Reset => session.reset(),
            Command::Harder | Command::Easier => {
                if session.state().mode() != GameMode::VsComputer {
                    writeln!(out, "Difficulty only applies when playing the computer")?;
                    continue;
                }
                let difficulty = if command == Command::Harder {
                    session.harder_difficulty()
                } else {
                    session.easier_difficulty()
                };
                writeln!(out, "Difficulty: {}", difficulty)?;
            }
            Command::Place(index) => {
                match session.play_human_move(index) {
                    Ok(_) => {}
                    Err(MoveError::IllegalMove(_)) => {
                        writeln!(out, "Cell {} is already marked", index + 1)?;
                        continue;
                    }
                    Err(e) => {
                        writeln!(out, "{}", e)?;
                        continue;
                    }
                }
                if session.state().is_computer_turn() {
                    writeln!(out, "{}", render_screen(session.state()))?;
                    out.flush()?;
                    let (cell, _) = session.play_computer_turn().await?;
                    writeln!(out, "Computer played {}", cell + 1)?;
                }
            }
        }

        writeln!(out, "{}", render_screen(session.state()))?;
        out.flush()?;
    }

    log!("Input closed, leaving game");
    Ok(())
}
