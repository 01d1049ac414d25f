//! A line-oriented command script for compact scenario tests.
//!
//! One command per line, case-insensitive, blank lines and `#` comments
//! ignored:
//!
//! ```text
//! place 1 2 east
//! move
//! left
//! right
//! report
//! reset
//! ```
//!
//! `place` takes its three arguments verbatim, so `place x 2 north` is a
//! valid script line that produces an invalid placement request.

use vacuum_core::{Command, PlacementRequest, Rotation};

/// Parse a script into commands. Panics on a malformed line.
pub fn parse_script(script: &str) -> Vec<Command> {
    script
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    match verb.as_str() {
        "place" => {
            let args: Vec<&str> = words.collect();
            assert_eq!(args.len(), 3, "place expects x y direction: {line:?}");
            Command::Place(PlacementRequest::new(args[0], args[1], args[2]))
        }
        "move" => Command::Move,
        "left" => Command::Rotate(Rotation::Left),
        "right" => Command::Rotate(Rotation::Right),
        "reset" => Command::Reset,
        "report" => Command::Report,
        other => panic!("unknown script command {other:?} in {line:?}"),
    }
}
