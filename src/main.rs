mod config;
mod logging;
mod models;
mod teller;

use std::io;

use anyhow::Context;
use clap::Parser;

use crate::config::{Args, SessionConfig};
use crate::teller::Session;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.log_level());

    let config = SessionConfig::from(args);
    let mut session = Session::start(&config, io::stdin().lock(), io::stdout().lock())
        .context("could not start the banking session")?;

    session.run().context("banking session aborted")?;

    Ok(())
}
