//! Benchmark profiles and utilities for the Vacuum simulator.
//!
//! - [`reference_config`]: the default 5×5 playground
//! - [`large_config`]: a 1000×1000 room with small cells
//! - [`command_script`]: a deterministic mixed command stream

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vacuum_core::{Command, Rotation};
use vacuum_engine::SessionConfig;

/// The default playground: 5×5 cells of 160 px.
pub fn reference_config() -> SessionConfig {
    SessionConfig::default()
}

/// A 1000×1000 room with 8 px cells.
pub fn large_config() -> SessionConfig {
    SessionConfig {
        width: 1000,
        height: 1000,
        cell_size: 8,
        ..SessionConfig::default()
    }
}

/// `len` commands derived from `seed`, weighted towards moves.
///
/// The stream starts with a placement at the room centre and mixes in
/// re-placements (some invalid), rotations, reports and the occasional
/// reset, so it exercises every branch of the engine.
pub fn command_script(config: &SessionConfig, len: usize, seed: u64) -> Vec<Command> {
    let (w, h) = (i64::from(config.width), i64::from(config.height));
    let mut out = Vec::with_capacity(len);
    out.push(Command::place(w / 2, h / 2, "north"));
    let mut state = seed | 1;
    while out.len() < len {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let cmd = match state % 16 {
            0..=7 => Command::Move,
            8 | 9 => Command::Rotate(Rotation::Left),
            10 | 11 => Command::Rotate(Rotation::Right),
            12 => Command::Report,
            13 => Command::Reset,
            _ => {
                // One past the far edge is included so some placements fail.
                let x = (state >> 8) as i64 % (w + 1);
                let y = (state >> 32) as i64 % (h + 1);
                Command::place(x, y, "east")
            }
        };
        out.push(cmd);
    }
    out
}
