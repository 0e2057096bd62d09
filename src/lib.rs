//! Odyssey
//!
//! A turn-based console exploration game. The player sizes a square space
//! map, places a destination plus hazards and waypoints, configures a ship,
//! and then steers it one cell at a time until it reaches the destination,
//! runs out of fuel, or loses all health.
//!
//! # Modules
//!
//! - [`game_engine`] - Game state machine, win/loss logic, session builder
//! - [`models`] - Domain models (SpaceMap, Ship, CellContent, etc.)
//! - [`services`] - Game services (interaction, navigation, setup, command loop)
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use odyssey::{GameEngine, GameState, SessionBuilder};
//! use odyssey::models::navigation_types::{Direction, FuelLevel, MapSize};
//! use odyssey::models::position::Position;
//! use odyssey::services::navigation::navigate;
//! use odyssey::ui::presenters::MapPresenter;
//!
//! # fn main() -> Result<(), odyssey::models::errors::GameError> {
//! let mut builder = SessionBuilder::new(MapSize::new(2)?);
//! builder.place_destination(Position::new(1, 0))?;
//! builder.ship("Odyssey".parse()?, FuelLevel::new(3)?);
//! let mut engine: GameEngine = builder.build()?;
//!
//! let mut transcript = Vec::<String>::new();
//! # struct Sink<'a>(&'a mut Vec<String>);
//! # impl odyssey::io::OutputWriter for Sink<'_> {
//! #     fn write(&mut self, m: &str) { self.0.push(m.to_string()); }
//! #     fn writeln(&mut self, m: &str) { self.0.push(m.to_string()); }
//! # }
//! navigate(&mut engine, Direction::East, &mut Sink(&mut transcript))?;
//! assert_eq!(engine.check_game_over(), Some(GameState::Won));
//! MapPresenter::show_map(engine.map(), &mut Sink(&mut transcript));
//! assert_eq!(transcript.last().map(String::as_str), Some("|   |   |"));
//! # Ok(())
//! # }
//! ```

pub mod game_engine;
pub mod models;
pub mod services;
pub mod io;
pub mod ui;
pub mod cli;

// Re-export commonly used types
pub use game_engine::{DefeatReason, GameEngine, GameState, SessionBuilder};
