use clap::Args;
use slotkeeper_core::ConflictResolver;

use super::{print_json, read_event, read_events, PreferenceArgs};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON file with the existing events ("-" for stdin)
    #[arg(long)]
    pub events: String,
    /// Proposed event as inline JSON or a JSON file
    #[arg(long)]
    pub event: String,
    #[command(flatten)]
    pub preferences: PreferenceArgs,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let existing = read_events(&args.events)?;
    let new_event = read_event(&args.event)?;
    let resolver = ConflictResolver::with_preferences(args.preferences.resolve()?);

    let result = resolver.detect_and_resolve(&new_event, &existing);
    if let Some(message) = result.message() {
        tracing::info!("{message}");
    }
    print_json(&result)
}
