use std::process::ExitCode;

use anyhow::Error;
use clap::{Parser, Subcommand};
use geo_core::{ApiConfig, Explorer, PRIMARY_DEFAULT_BASE_URL, SECONDARY_DEFAULT_BASE_URL};

use crate::transport::UreqTransport;

mod commands;
mod logging;
mod transport;

/// Query the Guangzhou district/street/road API.
#[derive(Parser)]
#[command(version, arg_required_else_help(true))]
struct Cli {
    /// Base URL for example requests; the second choice for loading districts
    #[arg(long, global = true, env = "GZ_GEO_PRIMARY_URL", default_value = PRIMARY_DEFAULT_BASE_URL)]
    primary_url: String,

    /// Base URL tried first when loading districts. Pass "" to disable
    #[arg(long, global = true, env = "GZ_GEO_SECONDARY_URL", default_value = SECONDARY_DEFAULT_BASE_URL)]
    secondary_url: String,

    /// Enable debug logging
    #[arg(long, default_value = "false", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the district list, falling back from the secondary to the primary URL
    Districts,

    /// List the built-in example requests and their parameters
    Examples,

    /// Print the request URL an example would send, without sending it
    Url(commands::ExampleArgs),

    /// Send an example request and print the JSON response
    Call(commands::ExampleArgs),
}

fn main() -> Result<ExitCode, Error> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    let mut explorer = Explorer::new(ApiConfig::new(cli.primary_url, cli.secondary_url));
    let transport = UreqTransport::new();
    let mut out = std::io::stdout().lock();

    let ok = match cli.command {
        Command::Districts => commands::districts(&mut out, &mut explorer, &transport)?,
        Command::Examples => commands::examples(&mut out)?,
        Command::Url(args) => commands::url(&mut out, &mut explorer, &args)?,
        Command::Call(args) => commands::call(&mut out, &mut explorer, &transport, &args)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
