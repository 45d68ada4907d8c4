//! Deep Dive CLI - inspect the inventory panel's widgets from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dd-cli",
    version,
    about = "Deep Dive inventory panel toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: dd_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting dd-cli");
    dd_cmd::run(cli.command).await
}
