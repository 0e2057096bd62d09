use thiserror::Error;

use super::position::Position;

/// Game-specific error types.
///
/// Every variant except `Io` is recoverable: the caller prints it as `Error: <message>`
/// and re-prompts. The messages are what the player sees.
#[derive(Debug, Error)]
pub enum GameError {
    /// A number was expected but something else was typed
    #[error("{what} must always be an integer")]
    NotAnInteger { what: &'static str },
    #[error("n too low")]
    MapSizeTooSmall,
    #[error("n too high (max {max})")]
    MapSizeTooLarge { max: usize },
    #[error("empty ship name")]
    EmptyShipName,
    #[error("fuel too low")]
    FuelTooLow,
    #[error("fuel too high")]
    FuelTooHigh,
    /// Wrong token count for a destination placement
    #[error("expected <x> <y>")]
    ExpectedCoordinates,
    /// Wrong token count for a hazard/waypoint placement
    #[error("expected <symbol> <x> <y>")]
    ExpectedPlacement,
    #[error("out of bounds")]
    OutOfBounds(Position),
    #[error("{position} occupied by '{symbol}'")]
    Occupied { position: Position, symbol: char },
    #[error("'{0}' not recognised")]
    UnrecognisedSymbol(String),
    /// A known symbol that cannot be placed through this operation
    #[error("'{0}' cannot be placed here")]
    NotPlaceable(char),
    #[error("unrecognised command")]
    UnrecognisedCommand(String),
    #[error("layout needs {requested} empty cells but only {available} are free")]
    LayoutTooDense { requested: usize, available: usize },
    #[error("setup incomplete: {0}")]
    IncompleteSetup(&'static str),
    /// No more input is available. Ends the session quietly.
    #[error("input exhausted")]
    InputExhausted,
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    /// Whether the session can carry on after this error was reported to the player.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::InputExhausted | GameError::Io(_))
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => GameError::InputExhausted,
            _ => GameError::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_console_text() {
        assert_eq!(GameError::MapSizeTooSmall.to_string(), "n too low");
        assert_eq!(
            GameError::MapSizeTooLarge { max: 1000 }.to_string(),
            "n too high (max 1000)"
        );
        assert_eq!(
            GameError::NotAnInteger { what: "fuel" }.to_string(),
            "fuel must always be an integer"
        );
        assert_eq!(
            GameError::Occupied {
                position: Position::new(2, 1),
                symbol: 'E'
            }
            .to_string(),
            "(2, 1) occupied by 'E'"
        );
        assert_eq!(
            GameError::UnrecognisedSymbol("Q".to_string()).to_string(),
            "'Q' not recognised"
        );
        assert_eq!(
            GameError::OutOfBounds(Position::new(-1, 0)).to_string(),
            "out of bounds"
        );
    }

    #[test]
    fn eof_becomes_input_exhausted() {
        let err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err = GameError::from(err);
        assert!(matches!(err, GameError::InputExhausted));
        assert!(!err.is_recoverable());

        let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(matches!(GameError::from(err), GameError::Io(_)));
        assert!(GameError::FuelTooHigh.is_recoverable());
    }
}
