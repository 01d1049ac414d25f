//! Quickstart: place the vacuum, drive it into a wall and watch the
//! edge alert clear.
//!
//! Run with `RUST_LOG=debug cargo run -p vacuum-engine --example quickstart`.

use std::thread;
use std::time::{Duration, Instant};

use vacuum_core::{Command, Rotation};
use vacuum_engine::{RealtimeSession, Session, SessionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ─── Lockstep: drive the session by hand ─────────────────────

    let config = SessionConfig {
        alert_clear_ms: 300,
        ..SessionConfig::default()
    };
    let mut session = Session::new(config.clone())?;
    let now = Instant::now();

    for command in [
        Command::place("1", "2", "East"),
        Command::Move,
        Command::Move,
        Command::Move,
        Command::Rotate(Rotation::Left),
        Command::Report,
    ] {
        let receipt = session.submit(command, now);
        match &receipt.reason {
            None => println!("{} {}: ok", receipt.seq, receipt.command),
            Some(reason) => println!("{} {}: {reason}", receipt.seq, receipt.command),
        }
    }
    if let Some(report) = session.report() {
        println!("{report}");
    }

    let blocked = session.submit(Command::place(9, 0, ""), now);
    if let Some(reason) = blocked.reason {
        println!("rejected: {reason}");
    }

    // ─── Realtime: the alert clears on its own ───────────────────

    let rt = RealtimeSession::spawn(Session::new(config)?)?;
    rt.submit(Command::place(4, 4, "north"))?;
    let receipt = rt.submit(Command::Move)?;
    println!("move at the north wall accepted: {}", receipt.accepted);
    println!("alert raised: {}", rt.view()?.edge_alert.is_some());

    thread::sleep(Duration::from_millis(400));
    println!("alert after 400ms: {}", rt.view()?.edge_alert.is_some());

    let session = rt.shutdown()?;
    for notice in session.notices().iter() {
        println!("notice {}: {}", notice.seq, notice.message);
    }
    println!("{:?}", session.metrics());
    Ok(())
}
