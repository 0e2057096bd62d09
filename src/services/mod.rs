//! Game services
//!
//! This module contains business logic for game operations: resolving
//! interactions, moving the ship, configuring a session, and running
//! the command loop.

pub mod game;
pub mod interaction;
pub mod navigation;
pub mod setup;
