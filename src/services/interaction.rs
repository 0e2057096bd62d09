use tracing::debug;

use crate::io::OutputWriter;
use crate::models::constants::{CellContent, DESTINATION_NAME, MAX_HEALTH};
use crate::models::position::Position;
use crate::models::ship::Ship;

/// Resolve the ship trying to enter `target`, which currently holds `content`.
///
/// Returns `true` when the ship moved there. Every move costs exactly one unit of fuel;
/// a rejected move costs nothing. A ship with no fuel cannot do anything.
///
/// | content        | effect                                         |
/// |----------------|------------------------------------------------|
/// | empty          | move                                           |
/// | destination    | move, mark destination reached                 |
/// | asteroid       | blocked                                        |
/// | enemy          | move, lose one health                          |
/// | mineral        | move, gain one mineral                         |
/// | repair station | if damaged and holding a mineral: move, spend it, repair one health |
/// | anything else  | no-op                                          |
///
/// Losing the last point of health to an enemy still completes the move; the game loop
/// detects the defeat afterward.
pub fn interact(
    ship: &mut Ship,
    content: CellContent,
    target: Position,
    output: &mut dyn OutputWriter,
) -> bool {
    if ship.is_out_of_fuel() {
        return false;
    }

    let moved = match content {
        CellContent::Empty => {
            ship.consume_fuel();
            ship.move_to(target);
            true
        }
        CellContent::Destination => {
            ship.consume_fuel();
            ship.land_at_destination();
            ship.move_to(target);
            output.writeln(&format!("{} has reached: {}", ship.name(), DESTINATION_NAME));
            true
        }
        CellContent::Asteroid => {
            output.writeln("Cannot move past an asteroid!");
            false
        }
        CellContent::Enemy => {
            ship.consume_fuel();
            ship.damage();
            ship.move_to(target);
            if ship.is_out_of_health() {
                output.writeln(&format!("{} has fallen.", ship.name()));
            } else {
                output.writeln(&format!(
                    "We won the fight! Health: {}/{}",
                    ship.health(),
                    MAX_HEALTH
                ));
            }
            true
        }
        CellContent::Mineral => {
            ship.consume_fuel();
            ship.add_mineral();
            ship.move_to(target);
            output.writeln(&format!("+1 mineral! Minerals: {}", ship.minerals()));
            true
        }
        CellContent::RepairStation => repair(ship, target, output),
        CellContent::Ship | CellContent::Win | CellContent::Loss => false,
    };

    debug!(
        kind = content.name(),
        %target,
        moved,
        fuel = ship.fuel(),
        health = ship.health(),
        minerals = ship.minerals(),
        "interaction resolved"
    );
    moved
}

fn repair(ship: &mut Ship, target: Position, output: &mut dyn OutputWriter) -> bool {
    if ship.is_full_health() {
        output.writeln("Ship is already at full health!");
        return false;
    }
    if ship.minerals() == 0 {
        output.writeln("You need a mineral to activate this repair station.");
        return false;
    }
    ship.move_to(target);
    ship.consume_fuel();
    ship.use_mineral();
    ship.repair();
    output.writeln(&format!("Ship repaired! Health: {}/{}", ship.health(), MAX_HEALTH));
    true
}
