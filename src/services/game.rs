use tracing::debug;

use crate::game_engine::{DefeatReason, GameEngine, GameState};
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::{GameError, GameResult};
use crate::models::navigation_types::Command;
use crate::services::navigation;
use crate::services::setup::{self, SetupOptions};
use crate::ui::presenters::{MapPresenter, MissionPresenter, ShipPresenter};

const COMMAND_PROMPT: &str = "Enter (n,e,s,w | map | status):";

pub struct Game {
    pub engine: GameEngine,
}

impl Game {
    pub fn new(engine: GameEngine) -> Self {
        Game { engine }
    }

    /// Run the configuration dialogue, then build a game from it.
    pub fn configure(
        options: &SetupOptions,
        io: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<Self> {
        setup::configure_session(options, io, output).map(Game::new)
    }

    /// The command loop. Returns the final state: `Won` or `Lost` when the mission ended,
    /// `Active` when input ran out first.
    pub fn run(
        &mut self,
        io: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<GameState> {
        output.writeln("");
        output.writeln(">>> AWAITING COMMANDS");
        output.writeln("");

        loop {
            if let Some(state) = self.engine.check_game_over() {
                self.announce(&state, output);
                return Ok(state);
            }

            let input = match io.read_line(COMMAND_PROMPT) {
                Ok(input) => input,
                Err(e) => match GameError::from(e) {
                    GameError::InputExhausted => {
                        debug!("input exhausted, leaving the command loop");
                        return Ok(self.engine.state().clone());
                    }
                    e => return Err(e),
                },
            };

            let command = match input.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    output.writeln(&format!("Error: {}", e));
                    continue;
                }
            };

            match command {
                Command::Map => MapPresenter::show_map(self.engine.map(), output),
                Command::Status => ShipPresenter::show_status(self.engine.ship(), output),
                Command::Quit => {
                    let state = self.engine.self_destruct();
                    self.announce(&state, output);
                    return Ok(state);
                }
                Command::Move(direction) => {
                    // Handle errors from the move - print and continue
                    if let Err(e) = navigation::navigate(&mut self.engine, direction, output) {
                        output.writeln(&format!("Error: {}", e));
                    }
                }
            }
        }
    }

    fn announce(&self, state: &GameState, output: &mut dyn OutputWriter) {
        let name = self.engine.ship().name();
        match state {
            GameState::Active => return,
            GameState::Won => {}
            GameState::Lost { reason } => {
                let message = match reason {
                    DefeatReason::OutOfFuel => format!("{} is out of fuel.", name),
                    DefeatReason::OutOfHealth => format!("{} has fallen.", name),
                    DefeatReason::SelfDestructed => format!("{} has self-destructed.", name),
                };
                output.writeln(&message);
            }
        }

        MapPresenter::show_map(self.engine.map(), output);
        if *state == GameState::Won {
            MissionPresenter::show_completed(output);
        } else {
            MissionPresenter::show_failed(output);
        }
    }
}
