use clap::Parser;

use crate::services::setup::{Layout, SetupOptions};

/// Steer a ship across a hand-built (or seeded) space map to Sector 9-Delta.
///
/// Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.
#[derive(Debug, Parser)]
#[command(name = "odyssey", version)]
pub struct Args {
    /// Scatter the destination and entities from this seed instead of placing them by hand
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How many of each hazard/waypoint kind to scatter (only with --seed)
    #[arg(long, default_value_t = 1, requires = "seed")]
    pub per_kind: usize,
}

impl Args {
    pub fn setup_options(&self) -> SetupOptions {
        let layout = match self.seed {
            Some(seed) => Layout::Generated {
                seed,
                per_kind: self.per_kind,
            },
            None => Layout::Manual,
        };
        SetupOptions { layout }
    }
}
