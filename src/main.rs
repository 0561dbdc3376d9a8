use anyhow::Result;
use clap::Parser;
use std::io::Write;

mod argparser;
mod data_load;
mod output;
mod plotting;
mod processing;

use argparser::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let level = record.level().as_str().to_lowercase();
            writeln!(buf, "[cpgsieve {level:>5}] {}", record.args())
        })
        .try_init()
    {
        eprintln!("failed to setup logger: {e}");
    }

    processing::run(args)
}
