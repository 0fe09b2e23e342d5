use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod opt;
mod split;

use opt::{Command, Opt};

fn main() {
    // Loaded before parsing so that `.env` can provide argument defaults.
    dotenvy::dotenv().ok();
    init_tracing();

    let opt = Opt::parse();

    let result = match opt.command {
        Command::Split(args) => split::run(&args),
    };

    if let Err(error) = result {
        eprintln!("{} {:#}", style("error:").bold().red(), error);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
