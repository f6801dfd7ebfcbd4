use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cuentas_claras::api::WebhookClient;
use cuentas_claras::audit::ActivityLogger;
use cuentas_claras::cli::{
    handle_add_command, handle_delete_command, handle_log_command, handle_stats_command,
};
use cuentas_claras::config::{ClarasPaths, Settings};
use cuentas_claras::models::{Category, Payer};

#[derive(Parser)]
#[command(
    name = "cuentas",
    version,
    about = "Shared expense tracker for the terminal",
    long_about = "Cuentas Claras records shared household expenses and shows how much \
                  of the monthly budget is left, talking to a webhook backend."
)]
struct Cli {
    /// Base URL of the webhook backend
    #[arg(long, global = true, env = "CUENTAS_CLARAS_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show the budget status and recent expenses
    Stats {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new expense
    Add {
        /// Amount, e.g. "12.50"
        amount: String,
        /// What the money was spent on
        concept: String,
        /// Who paid
        #[arg(short, long, value_enum, default_value_t = Payer::Ricky)]
        payer: Payer,
        /// Spending category
        #[arg(short, long, value_enum, default_value_t = Category::Super)]
        category: Category,
    },

    /// Delete an expense by id
    Delete {
        /// Expense id as shown by `stats`
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show recent API activity
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings to disk
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ClarasPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_api_override(cli.api_url);

    let activity = settings
        .activity_log_enabled
        .then(|| ActivityLogger::new(paths.activity_log()));

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let client = WebhookClient::from_settings(&settings)?;
            cuentas_claras::tui::run_tui(&settings, Arc::new(client), activity)?;
        }
        Commands::Stats { json } => {
            let client = WebhookClient::from_settings(&settings)?;
            handle_stats_command(&client, activity.as_ref(), json)?;
        }
        Commands::Add {
            amount,
            concept,
            payer,
            category,
        } => {
            let client = WebhookClient::from_settings(&settings)?;
            handle_add_command(&client, activity.as_ref(), &amount, &concept, payer, category)?;
        }
        Commands::Delete { id, yes } => {
            let client = WebhookClient::from_settings(&settings)?;
            handle_delete_command(&client, activity.as_ref(), &id, yes)?;
        }
        Commands::Log { limit } => {
            handle_log_command(&ActivityLogger::new(paths.activity_log()), limit)?;
        }
        Commands::Init => {
            println!("Initializing Cuentas Claras at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Cuentas Claras Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Activity log:   {}", paths.activity_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  API base URL:     {}", settings.api_base_url);
            println!("  Tick rate:        {} ms", settings.tick_rate_ms);
            match settings.request_timeout_secs {
                Some(secs) => println!("  Request timeout:  {} s", secs),
                None => println!("  Request timeout:  none"),
            }
            println!("  Activity log:     {}", settings.activity_log_enabled);
        }
    }

    Ok(())
}
