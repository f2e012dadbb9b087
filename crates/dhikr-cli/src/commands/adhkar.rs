use std::io;

use clap::Subcommand;
use dhikr_core::catalog;
use dhikr_core::storage::Config;
use serde_json::json;

use super::session::Session;

#[derive(Subcommand)]
pub enum AdhkarAction {
    /// List categories
    List {
        /// Only categories whose title contains this text
        #[arg(long, short, default_value = "")]
        search: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk through one category
    Session {
        category: String,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AdhkarAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AdhkarAction::List { search, json } => {
            let categories = catalog::search(&search);
            if json {
                let listing: Vec<_> = categories
                    .iter()
                    .map(|c| json!({ "id": c.id, "title": c.title, "entries": c.entries.len() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else if categories.is_empty() {
                println!("No categories.");
            } else {
                for category in categories {
                    println!("{:<18} {} ({})", category.id, category.title, category.entries.len());
                }
            }
        }
        AdhkarAction::Session { category, json } => {
            let found = catalog::find(&category)
                .ok_or_else(|| format!("unknown category: {category}"))?;
            let config = Config::load_or_default();
            let engine = found.engine(config.adhkar_engine(found.id));
            tracing::debug!(category = found.id, "adhkar session opened");

            if !json {
                println!("{}", found.title);
            }
            let stdin = io::stdin();
            let mut session = Session::new(engine, stdin.lock(), io::stdout())
                .json(json)
                .sound(config.feedback.sound);
            session.run()?;
        }
    }
    Ok(())
}
