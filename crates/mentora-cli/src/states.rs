//! `mentora states` — print the lifecycle transition matrix.

use clap::Args;

use mentora_state::{MentorshipStatus, TransitionTable};

/// Arguments for the `states` subcommand.
#[derive(Args, Debug)]
pub struct StatesArgs {
    /// Show Spanish display labels alongside wire names.
    #[arg(long)]
    labels: bool,
}

/// Print the transition matrix. Returns the process exit code.
pub fn run_states(args: &StatesArgs) -> anyhow::Result<u8> {
    let table = TransitionTable::mentorship();

    for status in MentorshipStatus::ALL {
        let name = if args.labels {
            format!("{} ({})", status.name(), status.label())
        } else {
            status.name().to_string()
        };

        let actions = table.actions(status);
        if actions.is_empty() {
            println!("{name}: -");
            continue;
        }

        let rendered: Vec<String> = actions
            .iter()
            .map(|(action, target)| format!("{action} -> {}", target.name()))
            .collect();
        println!("{name}: {}", rendered.join(", "));
    }

    Ok(0)
}
