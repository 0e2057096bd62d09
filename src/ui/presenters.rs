use crate::io::OutputWriter;
use crate::models::constants::CellContent;
use crate::models::ship::Ship;
use crate::models::space_map::SpaceMap;

pub struct MapPresenter;

impl MapPresenter {
    /// One row per line: `| a | b | c |`.
    pub fn render_row(row: &[CellContent]) -> String {
        let cells: Vec<String> = row.iter().map(|c| format!(" {} ", c.symbol())).collect();
        format!("|{}|", cells.join("|"))
    }

    pub fn show_map(map: &SpaceMap, output: &mut dyn OutputWriter) {
        for row in map.rows() {
            output.writeln(&Self::render_row(row));
        }
    }
}

pub struct ShipPresenter;

impl ShipPresenter {
    pub fn status_report(ship: &Ship) -> String {
        let rule = "-".repeat(25);
        [
            format!("Status Report - {}", ship.name()),
            rule.clone(),
            format!("{:<15}: {}", "Coordinates", ship.position()),
            format!("{:<15}: {:02} units", "Fuel Level", ship.fuel()),
            format!("{:<15}: {}", "Health", ship.health()),
            format!("{:<15}: {:02}", "Minerals", ship.minerals()),
            rule,
        ]
        .join("\n")
    }

    pub fn show_status(ship: &Ship, output: &mut dyn OutputWriter) {
        output.writeln(&Self::status_report(ship));
    }
}

pub struct MissionPresenter;

impl MissionPresenter {
    pub fn show_completed(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(">>> MISSION COMPLETED");
    }

    pub fn show_failed(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(">>> MISSION FAILED");
    }
}
