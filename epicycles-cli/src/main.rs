use clap::Parser;
use epicycles_cli::{run, Cli};
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let report = run(&cli)?;
    print!("{}", report);
    Ok(())
}
