//! Session configuration
//!
//! Walks the player through map size, destination and entity placement,
//! and ship configuration, re-prompting on every invalid answer. All
//! validated values are fed into a [`SessionBuilder`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::game_engine::{GameEngine, SessionBuilder};
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{CellContent, DESTINATION_NAME, ORIGIN_NAME};
use crate::models::errors::{GameError, GameResult};
use crate::models::navigation_types::{FuelLevel, MapSize, ShipName};
use crate::models::position::Position;
use crate::ui::presenters::{MapPresenter, ShipPresenter};

/// How the destination and entities get onto the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// The player types every placement.
    #[default]
    Manual,
    /// Scattered from a seeded RNG.
    Generated { seed: u64, per_kind: usize },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SetupOptions {
    pub layout: Layout,
}

/// Run the full configuration dialogue and return a ready-to-play engine.
///
/// # Errors
///
/// Only unrecoverable errors escape: `InputExhausted` when the player closes input,
/// and I/O failures. Everything else is reported and re-prompted.
pub fn configure_session(
    options: &SetupOptions,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<GameEngine> {
    output.writeln(&format!(">>> STARTING ROUTE: {} -> {}", ORIGIN_NAME, DESTINATION_NAME));

    output.writeln("");
    output.writeln(">> CONFIGURING NAVIGATIONAL SYSTEMS");
    let mut builder = match options.layout {
        Layout::Manual => {
            let mut builder = new_map(io, output)?;
            populate_map(&mut builder, io, output)?;
            builder
        }
        Layout::Generated { seed, per_kind } => generate_map(seed, per_kind, io, output)?,
    };
    output.writeln(">> NAVIGATIONAL SYSTEMS READY");

    output.writeln("");
    output.writeln(">> CONFIGURING SHIP SYSTEMS");
    let name: ShipName = prompt_until_valid(io, output, "Enter ship name:", str::parse)?;
    let fuel: FuelLevel = prompt_until_valid(io, output, "Enter fuel (1-99):", str::parse)?;
    builder.ship(name, fuel);
    let engine = builder.build()?;
    ShipPresenter::show_status(engine.ship(), output);
    output.writeln(">> SHIP SYSTEMS READY");

    output.writeln("");
    output.writeln(&format!(">>> EXECUTING LIFTOFF: EXITING {}'s ORBIT", ORIGIN_NAME));
    Ok(engine)
}

/// Ask for the map size and create the map with the ship in the corner.
pub fn new_map(
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<SessionBuilder> {
    let size: MapSize = prompt_until_valid(io, output, "Enter size of map (n >= 2):", str::parse)?;
    output.writeln(&format!("{0} x {0} map initialised.", size));
    output.writeln("");
    Ok(SessionBuilder::new(size))
}

/// The manual placement dialogue: ship, destination, then hazards and waypoints
/// until the player types `done`.
pub fn populate_map(
    builder: &mut SessionBuilder,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    output.writeln("Placing: Ship");
    output.writeln(&format!("Ship placed: {}", Position::ORIGIN));
    MapPresenter::show_map(builder.map(), output);

    output.writeln("");
    output.writeln("Placing: Destination");
    let destination = prompt_until_valid(io, output, "Enter (x y):", |input| {
        let pos = parse_destination(input)?;
        builder.place_destination(pos)?;
        Ok(pos)
    })?;
    output.writeln(&format!("Destination placed: {}", destination));
    MapPresenter::show_map(builder.map(), output);

    output.writeln("");
    output.writeln("Placing: Hazards and Waypoints");
    loop {
        let input = io.read_line("Enter (symbol x y | display | done):")?;
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "display" => {
                MapPresenter::show_map(builder.map(), output);
                continue;
            }
            "done" => {
                MapPresenter::show_map(builder.map(), output);
                break;
            }
            _ => {}
        }

        let placed = parse_placement(input)
            .and_then(|(content, pos)| builder.place_entity(content, pos).map(|_| (content, pos)));
        match placed {
            Ok((content, pos)) => output.writeln(&format!("{} placed: {}", content.name(), pos)),
            Err(e) => output.writeln(&format!("Error: {}", e)),
        }
    }
    Ok(())
}

/// Seeded layout: ask for a map size until the requested entities fit, then scatter them.
fn generate_map(
    seed: u64,
    per_kind: usize,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<SessionBuilder> {
    loop {
        let mut builder = new_map(io, output)?;
        let mut rng = StdRng::seed_from_u64(seed);
        match builder.scatter(&mut rng, per_kind) {
            Ok(()) => {
                info!(seed, per_kind, "layout generated");
                output.writeln(&format!("Layout generated from seed {}.", seed));
                MapPresenter::show_map(builder.map(), output);
                return Ok(builder);
            }
            Err(e) if e.is_recoverable() => output.writeln(&format!("Error: {}", e)),
            Err(e) => return Err(e),
        }
    }
}

/// Prompt repeatedly until `parse` accepts the answer. Rejections are printed as
/// `Error: <message>`; unrecoverable errors are returned.
fn prompt_until_valid<T>(
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
    prompt: &str,
    mut parse: impl FnMut(&str) -> GameResult<T>,
) -> GameResult<T> {
    loop {
        let input = io.read_line(prompt)?;
        match parse(input.trim_end_matches(['\r', '\n'])) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_recoverable() => output.writeln(&format!("Error: {}", e)),
            Err(e) => return Err(e),
        }
    }
}

/// `<x> <y>`
fn parse_destination(input: &str) -> GameResult<Position> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => parse_position(x, y),
        _ => Err(GameError::ExpectedCoordinates),
    }
}

/// `<symbol> <x> <y>`, symbol restricted to the placeable kinds.
fn parse_placement(input: &str) -> GameResult<(CellContent, Position)> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [symbol, x, y] = tokens.as_slice() else {
        return Err(GameError::ExpectedPlacement);
    };
    let pos = parse_position(x, y)?;
    let content = CellContent::placeable_from_token(symbol)
        .ok_or_else(|| GameError::UnrecognisedSymbol(symbol.to_string()))?;
    Ok((content, pos))
}

fn parse_position(x: &str, y: &str) -> GameResult<Position> {
    // Integers beyond i32 are clamped; no map is that large, so they land out of bounds.
    let coordinate = |token: &str| {
        token
            .parse::<i64>()
            .map(|value| value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
            .map_err(|_| GameError::NotAnInteger { what: "each coordinate" })
    };
    Ok(Position::new(coordinate(x)?, coordinate(y)?))
}
