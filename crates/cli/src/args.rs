//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "piwalk")]
#[command(about = "Walk the PI Web API link graph from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  piwalk root\n  piwalk walk SRV-PI01 Sandbox MyElement MyAttribute\n  piwalk attribute --path '\\\\SRV-PI01\\Sandbox\\MyElement|MyAttribute'\n  piwalk value read SRV-PI01 Sandbox MyElement MyAttribute --time 2015-06-03T00:00:00Z\n  piwalk value write SRV-PI01 Sandbox MyElement MyAttribute --value 25.0\n  piwalk describe SRV-PI01 Sandbox MyElement MyAttribute --description 'Hello world'\n"
)]
pub struct Cli {
    /// Base URL or hostname of the PI Web API server
    #[arg(short, long, global = true, env = "PIWEB_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "PIWEB_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "PIWEB_PASSWORD")]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PIWEB_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates).
    /// INSECURE: never the default.
    #[arg(long, global = true)]
    pub insecure: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The AF coordinates of one attribute, as four positional names.
#[derive(Args, Clone)]
pub struct AttributeCoords {
    /// AF server name
    pub server: String,
    /// Asset database name
    pub database: String,
    /// Element name
    pub element: String,
    /// Attribute name
    pub attribute: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the API root and print its link map
    Root,

    /// Traverse server -> database -> element -> attribute by name
    Walk {
        #[command(flatten)]
        coords: AttributeCoords,
    },

    /// Resolve an attribute by AF path, bypassing the chained traversal
    Attribute {
        /// AF path, e.g. '\\SERVER\Database\Element|Attribute'
        #[arg(long)]
        path: String,
    },

    /// Read or write a single stream value
    Value {
        #[command(subcommand)]
        command: ValueCommand,
    },

    /// Update an attribute's description
    Describe {
        #[command(flatten)]
        coords: AttributeCoords,

        /// New description text
        #[arg(long)]
        description: String,
    },
}

#[derive(Subcommand)]
pub enum ValueCommand {
    /// Read the current value, or a historical one with --time
    Read {
        #[command(flatten)]
        coords: AttributeCoords,

        /// ISO-8601 timestamp for a historical read
        #[arg(long)]
        time: Option<String>,
    },

    /// Write a value; the server may answer 202 (queued, eventually visible)
    Write {
        #[command(flatten)]
        coords: AttributeCoords,

        /// Value to write (numbers are sent as numbers, anything else as a string)
        #[arg(long)]
        value: String,

        /// ISO-8601 timestamp for the value (defaults to now, UTC)
        #[arg(long)]
        timestamp: Option<String>,
    },
}
