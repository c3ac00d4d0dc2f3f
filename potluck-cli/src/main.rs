mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use potluck_core::{EventId, GuestId, ItemId, Money, Quantity, UserId};
use tracing::Level;

use crate::commands::PageName;
use crate::commands::Workspace;

#[derive(Parser)]
#[command(name = "potluck")]
#[command(about = "Plan potluck events: RSVP counts, item claims and costs")]
struct Cli {
    /// Snapshot file to use instead of the configured one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Act as this user instead of the configured one
    #[arg(long, global = true)]
    user: Option<UserId>,

    /// Log aggregation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List your upcoming and past events
    Events,
    /// RSVP counts and claimed item total for an event
    Summary {
        event: EventId,

        /// Only count primary guests
        #[arg(long)]
        primary: bool,
    },
    /// Claimed quantity and cost per item for an event
    Costs { event: EventId },
    /// Check whether a guest has a selection for an item
    Lookup {
        event: EventId,
        guest: GuestId,
        item: ItemId,
    },
    /// Claim an item for a guest, or release it with --release
    Select {
        event: EventId,
        guest: GuestId,
        item: ItemId,

        #[arg(long)]
        release: bool,
    },
    /// Add, change or remove items
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },
    /// Print the data bundle for a page as JSON
    View {
        page: PageName,

        /// Event, guest or item id the page is about
        id: Option<u64>,
    },
}

#[derive(Subcommand)]
enum ItemAction {
    Add {
        event: EventId,
        name: String,

        #[arg(long, default_value = "General")]
        category: String,

        /// Amount needed (e.g. "2" or "1.5")
        #[arg(long)]
        quantity: Quantity,

        /// Unit of measure
        #[arg(long, default_value = "each")]
        uom: String,

        /// Cost per unit (e.g. "3.50")
        #[arg(long)]
        cost: Money,
    },
    Update {
        id: ItemId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        quantity: Option<Quantity>,

        #[arg(long)]
        uom: Option<String>,

        #[arg(long)]
        cost: Option<Money>,
    },
    Remove { id: ItemId },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let workspace = Workspace::load(cli.data, cli.user)?;

    match cli.command {
        Commands::Events => commands::events::run(&workspace).await,
        Commands::Summary { event, primary } => {
            commands::summary::run(&workspace, event, primary).await
        }
        Commands::Costs { event } => commands::costs::run(&workspace, event).await,
        Commands::Lookup { event, guest, item } => {
            commands::select::lookup(&workspace, event, guest, item).await
        }
        Commands::Select {
            event,
            guest,
            item,
            release,
        } => commands::select::run(&workspace, event, guest, item, !release).await,
        Commands::Item { action } => match action {
            ItemAction::Add {
                event,
                name,
                category,
                quantity,
                uom,
                cost,
            } => {
                let new_item = potluck_core::NewItem {
                    event_id: event,
                    category,
                    name,
                    quantity,
                    qty_uom: uom,
                    cost_perunit: cost,
                };
                commands::item::add(&workspace, new_item).await
            }
            ItemAction::Update {
                id,
                name,
                category,
                quantity,
                uom,
                cost,
            } => {
                let update = potluck_core::ItemUpdate {
                    category,
                    name,
                    quantity,
                    qty_uom: uom,
                    cost_perunit: cost,
                };
                commands::item::update(&workspace, id, update).await
            }
            ItemAction::Remove { id } => commands::item::remove(&workspace, id).await,
        },
        Commands::View { page, id } => commands::view::run(&workspace, page, id).await,
    }
}
