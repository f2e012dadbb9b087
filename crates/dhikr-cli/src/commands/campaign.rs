use clap::Subcommand;
use dhikr_core::campaign::CampaignCounter;
use dhikr_core::events::{now_ms, Event};
use dhikr_core::storage::{Config, Database};
use serde_json::json;

#[derive(Subcommand)]
pub enum CampaignAction {
    /// Count one salawat toward the campaign
    Tap,
    /// Show the campaign total and progress
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CampaignAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut campaign = CampaignCounter::open(config.campaign_settings(), Box::new(db));
    let now = now_ms();

    match action {
        CampaignAction::Tap => {
            let events = campaign.tap(now);
            if events.iter().any(Event::is_increment) {
                println!("{}", campaign.total());
            } else {
                println!("wait {} ms", campaign.remaining_ms(now));
            }
        }
        CampaignAction::Status { json } => {
            let goal = campaign.settings().goal;
            if json {
                let status = json!({
                    "total": campaign.total(),
                    "goal": goal,
                    "progressPct": campaign.progress_pct(),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("Total:    {}", campaign.total());
                println!("Goal:     {goal}");
                println!("Progress: {:.6}%", campaign.progress_pct());
            }
        }
    }
    Ok(())
}
