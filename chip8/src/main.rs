use clap::Parser;
use log::{debug, error};

mod audio;
mod config;
mod keymap;
mod run;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::Config::parse();
    debug!("{:?}", config);

    run::run(&config).map_err(|e| {
        error!("{:#}", e);
        e
    })
}
