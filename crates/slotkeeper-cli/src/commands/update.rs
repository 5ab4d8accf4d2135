use clap::Args;
use slotkeeper_core::ConflictResolver;

use super::{print_json, read_event, read_events, PreferenceArgs};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// JSON file with the existing events ("-" for stdin)
    #[arg(long)]
    pub events: String,
    /// Edited event as inline JSON or a JSON file; its id must match the stored event
    #[arg(long)]
    pub event: String,
    #[command(flatten)]
    pub preferences: PreferenceArgs,
}

pub fn run(args: UpdateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let existing = read_events(&args.events)?;
    let updated = read_event(&args.event)?;
    if !existing.iter().any(|e| e.id == updated.id) {
        tracing::warn!(id = %updated.id, "edited event is not in the event list");
    }
    let resolver = ConflictResolver::with_preferences(args.preferences.resolve()?);

    let result = resolver.check_update(&updated, &existing);
    if let Some(message) = result.message() {
        tracing::info!("{message}");
    }
    print_json(&result)
}
