//! `mentora request` — mentorship request operations.
//!
//! Reads go straight to the backend client; transitions run through the
//! same orchestration the dashboards use, with a recording navigator, so
//! the CLI prints any deep link a transition would have opened.

use anyhow::Context;
use clap::{Args, Subcommand};
use uuid::Uuid;

use mentora_client::types::RequestFilter;
use mentora_client::{TutoringApiConfig, TutoringClient};
use mentora_core::RequestId;
use mentora_state::{MentorshipStatus, TransitionAction, TransitionTable};
use mentora_flow::{FlowConfig, MentorshipFlow, RecordingNavigator};

/// Arguments for the `request` subcommand.
#[derive(Args, Debug)]
pub struct RequestArgs {
    #[command(subcommand)]
    command: RequestCommand,
}

#[derive(Subcommand, Debug)]
enum RequestCommand {
    /// List requests, optionally filtered by status wire name.
    List {
        /// Status filter (e.g. AVAILABLE).
        #[arg(long)]
        status: Option<String>,
    },
    /// Show a single request.
    Show {
        /// Request id.
        id: Uuid,
    },
    /// Advance a request to its next status.
    Advance {
        /// Request id.
        id: Uuid,
    },
    /// Step a request back to its prior status.
    Back {
        /// Request id.
        id: Uuid,
    },
    /// Cancel a request.
    Cancel {
        /// Request id.
        id: Uuid,
    },
}

/// Execute the `request` subcommand. Returns the process exit code.
pub async fn run_request(args: &RequestArgs) -> anyhow::Result<u8> {
    let client = client_from_env()?;

    match &args.command {
        RequestCommand::List { status } => {
            let filter = RequestFilter {
                status: match status {
                    Some(raw) => Some(
                        MentorshipStatus::from_name(raw)
                            .with_context(|| format!("unknown status '{raw}'"))?,
                    ),
                    None => None,
                },
                ..Default::default()
            };
            let records = client.list_requests(&filter).await?;
            for record in &records {
                println!(
                    "{}  {:<11}  {}",
                    record.id.as_uuid(),
                    record.request_status.name(),
                    record.topic.as_deref().unwrap_or("-")
                );
            }
            println!("{} request(s)", records.len());
            Ok(0)
        }
        RequestCommand::Show { id } => {
            let record = client
                .get_request(RequestId(*id))
                .await?
                .with_context(|| format!("request {id} not found"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(0)
        }
        RequestCommand::Advance { id } => transition(&client, *id, TransitionAction::Next).await,
        RequestCommand::Back { id } => transition(&client, *id, TransitionAction::Previous).await,
        RequestCommand::Cancel { id } => transition(&client, *id, TransitionAction::Cancel).await,
    }
}

async fn transition(
    client: &TutoringClient,
    id: Uuid,
    action: TransitionAction,
) -> anyhow::Result<u8> {
    let record = client
        .get_request(RequestId(id))
        .await?
        .with_context(|| format!("request {id} not found"))?;
    let from = record.request_status;

    let table = TransitionTable::mentorship();
    if table.lookup(from, action).is_none() {
        println!("{action} is not available from {from}; nothing to do");
        return Ok(0);
    }

    let mut config = FlowConfig::new(RequestId(id), from);
    config.tutor_id = record.tutor_id;
    config.objectives = record.objectives.clone().unwrap_or_default();

    let navigator = RecordingNavigator::new();
    let flow = MentorshipFlow::new(config, table, client.clone(), navigator.clone());
    flow.dispatch(action).await;

    let status = flow.state();
    if status == from {
        println!("{from} unchanged (backend rejected the transition; see logs)");
        return Ok(1);
    }

    println!("{from} -> {status} ({})", status.label());
    if let Some(link) = navigator.last_opened() {
        println!("notification link: {link}");
    }
    Ok(0)
}

fn client_from_env() -> anyhow::Result<TutoringClient> {
    let config = TutoringApiConfig::from_env()
        .context("tutoring backend not configured (TUTORING_API_URL, TUTORING_API_TOKEN)")?;
    TutoringClient::new(config).context("failed to build tutoring backend client")
}
