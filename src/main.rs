use clap::Parser;
use sentence_repeater::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Repeat(args) => cli::repeat::run(args).await,
        Command::Examples => cli::examples::run().await,
    }
}
