// Entrypoint for the route calculator.
// - Keeps `main` small: build the config and client, hand them to the UI.
// - Returns `anyhow::Result`; lookups never fail here, only console I/O can.

use std::io::{self, IsTerminal};

use clap::Parser;
use rutacalc::{
    api::RouteClient,
    cli::Cli,
    config::Config,
    fallback::FallbackChain,
    logging::init_logging,
    ui::{self, LinePrompt, TerminalPrompt},
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from(Cli::parse());
    let client = RouteClient::new(&config)?;
    let chain = FallbackChain::new(client, &config);

    let mut out = io::stdout();
    // dialoguer needs a terminal; piped input is read line by line instead.
    if io::stdin().is_terminal() {
        ui::run(&config, &chain, &mut TerminalPrompt, &mut out)
    } else {
        let mut prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
        ui::run(&config, &chain, &mut prompt, &mut out)
    }
}
