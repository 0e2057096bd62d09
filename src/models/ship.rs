use super::constants::MAX_HEALTH;
use super::position::Position;

/// The player's ship.
///
/// Fuel, health and minerals are unsigned and every decrement saturates at zero,
/// so none of them can go negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    fuel: u32,
    health: u32,
    minerals: u32,
    position: Position,
    destination_reached: bool,
}

impl Ship {
    /// A fresh ship at (0, 0) with full health and no minerals.
    pub fn new(name: impl Into<String>, fuel: u32) -> Self {
        Ship {
            name: name.into(),
            fuel,
            health: MAX_HEALTH,
            minerals: 0,
            position: Position::ORIGIN,
            destination_reached: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn minerals(&self) -> u32 {
        self.minerals
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn destination_reached(&self) -> bool {
        self.destination_reached
    }

    pub fn set_fuel(&mut self, fuel: u32) {
        self.fuel = fuel;
    }

    /// Clamped to the 0..=3 health range.
    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(MAX_HEALTH);
    }

    pub fn set_minerals(&mut self, minerals: u32) {
        self.minerals = minerals;
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    pub fn consume_fuel(&mut self) {
        self.fuel = self.fuel.saturating_sub(1);
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel == 0
    }

    pub fn damage(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn repair(&mut self) {
        self.health = (self.health + 1).min(MAX_HEALTH);
    }

    pub fn is_full_health(&self) -> bool {
        self.health == MAX_HEALTH
    }

    pub fn is_out_of_health(&self) -> bool {
        self.health == 0
    }

    pub fn add_mineral(&mut self) {
        self.minerals += 1;
    }

    pub fn use_mineral(&mut self) {
        self.minerals = self.minerals.saturating_sub(1);
    }

    /// One-way: once reached, the flag never clears.
    pub fn land_at_destination(&mut self) {
        self.destination_reached = true;
    }
}
