use std::io;

use dhikr_core::counter::CounterEngine;
use dhikr_core::storage::{Config, Database};

use super::session::Session;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let engine = CounterEngine::open(config.tasbih_engine(), Box::new(db));
    tracing::debug!(items = engine.items().len(), "tasbih session opened");

    let stdin = io::stdin();
    let mut session = Session::new(engine, stdin.lock(), io::stdout())
        .json(json)
        .sound(config.feedback.sound)
        .editable(true);
    session.run()?;
    Ok(())
}
