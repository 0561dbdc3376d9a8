use anyhow::{Context, Result};
use bytesize::ByteSize;
use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use log::info;
use methylome::{CountTable, LoadReport, TableLoader};
use std::{fmt::Write, fs::File, io::BufReader, path::Path};

pub fn load_alignment_matrix<P: AsRef<Path>>(path: P) -> Result<(CountTable, LoadReport)> {
    let path = path.as_ref();

    let file = File::open(path)
        .with_context(|| format!("Failed to open alignment file at: {:?}", path))?;
    let file_size = file
        .metadata()
        .with_context(|| format!("Could not read metadata of: {:?}", path))?
        .len();
    let human_readable_size = ByteSize::b(file_size).to_string();
    info!("Reading alignment matrix ({})", human_readable_size);

    let pb = ProgressBar::new(file_size);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes:>8}/{total_bytes:>8} ({percent}%)",
        )?
        .with_key("bytes", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{}", ByteSize::b(state.pos()));
        })
        .with_key("total_bytes", move |_state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{}", human_readable_size);
        })
        .progress_chars("#>-"),
    );

    let reader = BufReader::new(pb.wrap_read(file));
    let loaded = TableLoader::default()
        .load_reader(reader)
        .with_context(|| format!("Failed to load alignment matrix from: {:?}", path));
    pb.finish_and_clear();

    loaded
}
