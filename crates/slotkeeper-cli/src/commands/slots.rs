use clap::Args;
use slotkeeper_core::{parse_date, FreeSlotFinder};

use super::{print_json, read_events, PreferenceArgs};

#[derive(Args, Debug)]
pub struct SlotsArgs {
    /// JSON file with the existing events ("-" for stdin)
    #[arg(long)]
    pub events: String,
    /// Day to search (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Slot length in minutes
    #[arg(long)]
    pub duration: u32,
    /// Event id to ignore while searching
    #[arg(long)]
    pub exclude: Option<String>,
    #[command(flatten)]
    pub preferences: PreferenceArgs,
}

pub fn run(args: SlotsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let date = parse_date(&args.date)?;
    if args.duration == 0 {
        return Err("duration must be at least one minute".into());
    }
    let events = read_events(&args.events)?;
    let prefs = args.preferences.resolve()?;

    let finder = FreeSlotFinder::new().with_working_hours(prefs.working_hours());
    let slots = finder.find_slots(date, args.duration, &events, args.exclude.as_deref());
    print_json(&slots)
}
