use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{Instant, sleep_until};
use common::games::tictactoe::{GameMode, InputEvent, SessionEffect, TicTacToeSession};
use common::log;

use crate::input::{Command, InputParser};
use crate::renderer::render_scene;

/// Drives a session from input lines, redrawing after every change.
pub struct GameRunner<W: Write> {
    session: TicTacToeSession,
    parser: InputParser,
    writer: W,
    bot_delay: Duration,
    bot_deadline: Option<Instant>,
}

impl<W: Write> GameRunner<W> {
    pub fn new(session: TicTacToeSession, parser: InputParser, writer: W, bot_delay: Duration) -> Self {
        Self {
            session,
            parser,
            writer,
            bot_delay,
            bot_deadline: None,
        }
    }

    /// Runs until `quit` or end of input and hands the writer back.
    pub async fn run<R, F>(mut self, reader: R, mut on_mode_selected: F) -> Result<W, String>
    where
        R: AsyncBufRead + Unpin,
        F: FnMut(GameMode),
    {
        let mut lines = reader.lines();
        self.draw(None)?;

        loop {
            tokio::select! {
                biased;
                _ = sleep_until(self.bot_deadline.unwrap_or_else(Instant::now)), if self.bot_deadline.is_some() => {
                    self.bot_deadline = None;
                    self.dispatch(InputEvent::BotMove);
                    self.draw(None)?;
                }
                line = lines.next_line() => {
                    let Some(line) = line.map_err(|e| format!("Failed to read input: {}", e))? else {
                        log!("Input closed");
                        break;
                    };
                    let notice = match self.parser.parse_line(self.session.scene(), &line) {
                        Ok(Some(Command::Quit)) => {
                            log!("Quit requested");
                            break;
                        }
                        Ok(Some(Command::Event(event))) => {
                            if let InputEvent::SelectMode(mode) = event {
                                on_mode_selected(mode);
                            }
                            self.dispatch(event);
                            None
                        }
                        Ok(None) => None,
                        Err(message) => Some(message),
                    };
                    self.draw(notice.as_deref())?;
                }
            }
        }

        Ok(self.writer)
    }

    fn dispatch(&mut self, event: InputEvent) {
        match self.session.dispatch(event) {
            SessionEffect::BotTurnDue if self.bot_delay.is_zero() => {
                self.session.dispatch(InputEvent::BotMove);
                self.bot_deadline = None;
            }
            SessionEffect::BotTurnDue => {
                if self.bot_deadline.is_none() {
                    self.bot_deadline = Some(Instant::now() + self.bot_delay);
                }
            }
            SessionEffect::Idle => self.bot_deadline = None,
        }
    }

    fn draw(&mut self, notice: Option<&str>) -> Result<(), String> {
        let scene = self.session.scene();
        let screen = render_scene(scene, self.parser.name_prompt(scene), self.parser.last_mode());
        let write_result = match notice {
            Some(notice) => writeln!(self.writer, "\n{}\n! {}", screen, notice),
            None => writeln!(self.writer, "\n{}", screen),
        };
        write_result
            .and_then(|_| self.writer.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }
}
