use std::process;

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod print;
mod session;

use self::{cli::Cli, config::Config, session::Session};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    if let Err(err) = run(args) {
        log::error!("{err:#}");
        process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let Cli { config, command } = args;
    let cfg = Config::try_load_from_file_or_default(config)?;
    Session::start(&cfg)?.run(|session| cli::run(session, command))
}
