use clap::Parser;

use crate::plotting::PlotStyle;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(help = "Aligner output containing the POS/REF/A/C/G/T count matrix.")]
    pub input_file: String,

    #[arg(help = "Directory for the filtered tables and plots. Created if missing.")]
    pub output_dir: String,

    #[arg(
        long,
        value_enum,
        default_value_t = PlotStyle::Line,
        help = "Draw counts as connected lines or as individual dots."
    )]
    pub plot_style: PlotStyle,

    #[arg(long, help = "Only write the tables, skip the plots.")]
    pub no_plots: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v debug, -vv trace).")]
    pub verbose: u8,

    #[arg(short, long, conflicts_with = "verbose", help = "Disable logging.")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
