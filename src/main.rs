use std::io;

use anyhow::{Result, bail};
use tracing::info;

use kibitz_cli::{Console, Session, SessionConfig};
use kibitz_core::Color;

fn main() -> Result<()> {
    // stdout carries the session protocol; logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let engine_color = match std::env::args().nth(1).as_deref() {
        None | Some("black") => Color::Black,
        Some("white") => Color::White,
        Some(other) => bail!("unknown engine color: {other} (use white or black)"),
    };
    info!(%engine_color, "kibitz starting");

    if engine_color == Color::White {
        println!("engine plays white, type go for its first move");
    }

    let mut console = Console::new(Session::new(SessionConfig { engine_color }));
    console.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
