use std::path::PathBuf;

use clap::{Parser, Subcommand};
use neo_invoker::commands;
use neo_primitives::ADDRESS_VERSION;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "neo-invoker",
    version,
    about = "Bind loosely-typed JSON arguments to Neo contract entry points"
)]
struct Cli {
    /// Log binding and dispatch details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bind a JSON argument array to a parameter schema and print the typed parameters
    Bind {
        /// Comma separated parameter types, e.g. "String,Hash160,Integer"
        #[arg(long)]
        schema: String,
        /// JSON array of arguments (bare values or {"type", "value"} envelopes)
        #[arg(long, default_value = "[]")]
        args: String,
    },
    /// Derive WIF, address and public key from a hex private key
    Address {
        /// Hex encoded 32-byte private key
        private_key: String,
        /// Address version byte
        #[arg(long, default_value_t = ADDRESS_VERSION)]
        address_version: u8,
    },
    /// Dispatch an RPC method against dry-run services
    Call {
        /// Settings file (.toml or .json) with static contract schemas
        #[arg(long, env = "NEO_INVOKER_CONFIG")]
        config: Option<PathBuf>,
        /// Method name, e.g. invokecontractas
        method: String,
        /// JSON array of positional parameters
        #[arg(default_value = "[]")]
        params: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("neo_invoker={level}").parse()?)
                .add_directive(format!("neo_rpc={level}").parse()?),
        )
        .init();

    let output: Value = match cli.command {
        Command::Bind { schema, args } => Value::Array(commands::bind(&schema, &args)?),
        Command::Address {
            private_key,
            address_version,
        } => serde_json::to_value(commands::address(&private_key, address_version)?)?,
        Command::Call {
            config,
            method,
            params,
        } => {
            let settings = commands::load_settings(config.as_deref())?;
            let server = commands::dry_run_server(settings);
            commands::call(&server, &method, &params)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
