// dataclean/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dataclean")]
#[command(
    about = "Data quality dashboard: monitors, alerts and warehouse integrations",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Directory holding dataclean.yaml
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Lists monitors with their pass rate and health
    Monitors {
        /// Case-insensitive filter on name, table or database
        #[arg(long, short)]
        search: Option<String>,
    },

    /// 🔍 Shows one monitor and its checks
    Monitor {
        /// Monitor id (ex: "2")
        id: String,
    },

    /// 🚨 Lists alerts grouped by monitor, or one monitor's alerts by status
    Alerts {
        /// Case-insensitive filter on monitor name, table or database
        #[arg(long, short)]
        search: Option<String>,

        /// Show the alerts of a single monitor
        #[arg(long)]
        monitor: Option<String>,
    },

    /// 🔌 Lists configured integrations and the sync history
    Integrations {
        /// Case-insensitive filter on name or type
        #[arg(long, short)]
        search: Option<String>,

        /// Use the built-in demo data instead of the API
        #[arg(long)]
        fixtures: bool,
    },

    /// ❄️  Tests a Snowflake connection, then registers it
    CreateIntegration {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Use the built-in demo data instead of the API
        #[arg(long)]
        fixtures: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Display name of the integration
    #[arg(long)]
    pub name: String,

    /// Snowflake account identifier (ex: "xy12345.us-east-1")
    #[arg(long)]
    pub account: String,

    #[arg(long, default_value = "")]
    pub warehouse: String,

    #[arg(long)]
    pub username: String,

    #[arg(long, env = "DATACLEAN_PASSWORD", hide_env_values = true)]
    pub password: String,
}
