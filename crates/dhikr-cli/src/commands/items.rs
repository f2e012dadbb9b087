use clap::Subcommand;
use dhikr_core::counter::CounterEngine;
use dhikr_core::events::{now_ms, Event};
use dhikr_core::storage::{Config, Database};

use super::ask_yes_no;
use super::session::describe;

#[derive(Subcommand)]
pub enum ItemsAction {
    /// List items with their counts and statistics
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an item
    Add {
        name: String,
        /// Target count; empty or invalid means open-ended
        #[arg(long, short, default_value = "", allow_hyphen_values = true)]
        target: String,
    },
    /// Rename and retarget an item; counts are kept
    Edit {
        id: String,
        name: String,
        #[arg(long, short, default_value = "", allow_hyphen_values = true)]
        target: String,
    },
    /// Delete an item
    Delete {
        id: String,
        /// Skip the confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// Zero an item's current count
    Reset {
        id: String,
        /// Skip the confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

pub fn run(action: ItemsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = CounterEngine::open(config.tasbih_engine(), Box::new(db));
    let now = now_ms();

    match action {
        ItemsAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(engine.items())?);
            } else if engine.items().is_empty() {
                println!("No items.");
            } else {
                for item in engine.items() {
                    println!("{:<38} {}", item.id, describe(item));
                }
            }
        }
        ItemsAction::Add { name, target } => {
            let item = engine
                .create(&name, &target, now)
                .ok_or("name must not be empty")?;
            println!("Item created: {}", item.id);
        }
        ItemsAction::Edit { id, name, target } => {
            if !engine.update(&id, &name, &target) {
                return Err(format!("no such item or empty name: {id}").into());
            }
            println!("Item updated: {id}");
        }
        ItemsAction::Delete { id, yes } => {
            let request = engine
                .request_delete(&id)
                .ok_or_else(|| format!("no such item: {id}"))?;
            let accepted = yes || ask_yes_no(request.prompt())?;
            let events = engine.resolve_confirmation(request.id, accepted, now);
            if events.iter().any(|e| matches!(e, Event::ItemDeleted { .. })) {
                println!("Item deleted: {id}");
            } else {
                println!("Cancelled.");
            }
        }
        ItemsAction::Reset { id, yes } => {
            if !engine.store().contains(&id) {
                return Err(format!("no such item: {id}").into());
            }
            engine.select(&id, now);
            let request = engine.request_reset().ok_or("nothing to reset")?;
            let accepted = yes || ask_yes_no(request.prompt())?;
            engine.resolve_confirmation(request.id, accepted, now);
            println!("{}", if accepted { "Count reset." } else { "Cancelled." });
        }
    }
    Ok(())
}
