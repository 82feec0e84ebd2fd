use common::games::tictactoe::{CELL_COUNT, GameMode, InputEvent, Mark, Scene};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(InputEvent),
    Quit,
}

/// Turns typed lines into session events. Remembers the X name while the O
/// name is still being asked for.
pub struct InputParser {
    pending_x_name: Option<String>,
    last_mode: Option<GameMode>,
}

impl InputParser {
    pub fn new(last_mode: Option<GameMode>) -> Self {
        Self {
            pending_x_name: None,
            last_mode,
        }
    }

    pub fn last_mode(&self) -> Option<GameMode> {
        self.last_mode
    }

    /// Which player the name prompt is asking for, if a name prompt is showing.
    pub fn name_prompt(&self, scene: &Scene) -> Option<Mark> {
        match scene {
            Scene::NameEntry { .. } if self.pending_x_name.is_some() => Some(Mark::O),
            Scene::NameEntry { .. } => Some(Mark::X),
            _ => None,
        }
    }

    /// `Ok(None)` means the line was consumed without producing an event.
    pub fn parse_line(&mut self, scene: &Scene, line: &str) -> Result<Option<Command>, String> {
        if !matches!(scene, Scene::NameEntry { .. }) {
            self.pending_x_name = None;
        }

        match scene {
            Scene::ModeSelect => self.parse_mode(line.trim()),
            Scene::NameEntry { mode } => Ok(self.parse_name(*mode, line)),
            Scene::Playing(_) => parse_game_command(line.trim()),
        }
    }

    fn parse_mode(&mut self, line: &str) -> Result<Option<Command>, String> {
        let mode = match line.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Ok(Some(Command::Quit)),
            "1" | "pvp" => GameMode::PlayerVsPlayer,
            "2" | "bot" => GameMode::PlayerVsBot,
            "" => match self.last_mode {
                Some(mode) => mode,
                None => return Ok(None),
            },
            other => return Err(format!("Unknown mode '{}'", other)),
        };
        self.last_mode = Some(mode);
        Ok(Some(Command::Event(InputEvent::SelectMode(mode))))
    }

    fn parse_name(&mut self, mode: GameMode, line: &str) -> Option<Command> {
        let name = line.trim_end_matches(['\r', '\n']).to_string();
        let event = match (mode, self.pending_x_name.take()) {
            (GameMode::PlayerVsBot, _) => InputEvent::SubmitNames {
                player_x: name,
                player_o: None,
            },
            (GameMode::PlayerVsPlayer, Some(player_x)) => InputEvent::SubmitNames {
                player_x,
                player_o: Some(name),
            },
            (GameMode::PlayerVsPlayer, None) => {
                self.pending_x_name = Some(name);
                return None;
            }
        };
        Some(Command::Event(event))
    }
}

fn parse_game_command(line: &str) -> Result<Option<Command>, String> {
    let command = match line.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "q" | "quit" => Command::Quit,
        "r" | "restart" => Command::Event(InputEvent::Restart),
        "h" | "home" => Command::Event(InputEvent::BackHome),
        other => {
            let cell: usize = other
                .parse()
                .map_err(|_| format!("Unknown command '{}'", other))?;
            if cell == 0 || cell > CELL_COUNT {
                return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
            }
            Command::Event(InputEvent::SelectCell(cell - 1))
        }
    };
    Ok(Some(command))
}
