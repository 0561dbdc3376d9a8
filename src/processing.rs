use anyhow::{Context, Result};
use humantime::format_duration;
use log::{info, warn};
use methylome::{extract_cpg, summarize, CountTable, MatrixError};
use std::{fs, path::Path, time::Instant};

use crate::{
    argparser::Args,
    data_load::load_alignment_matrix,
    output::{write_table, CPG_TABLE_FILE, FULL_TABLE_FILE},
    plotting::{render_chart, PlotStyle},
};

/// One of the two tables the run reports on.
struct View<'a> {
    table: &'a CountTable,
    label: &'static str,
    file_suffix: &'static str,
}

pub fn run(args: Args) -> Result<()> {
    info!("Running cpgsieve on '{}'", args.input_file);

    let output_dir = Path::new(&args.output_dir);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Could not create output directory: {:?}", output_dir))?;

    let load_duration = Instant::now();
    let (table, _report) = load_alignment_matrix(&args.input_file)?;
    info!(
        "Loading alignment matrix took: {}",
        format_duration(load_duration.elapsed())
    );

    let cpg = extract_cpg(&table);
    info!(
        "Found {} CpG sites among {} positions",
        cpg.len(),
        table.len()
    );

    write_table(&table, output_dir.join(FULL_TABLE_FILE))?;
    write_table(&cpg, output_dir.join(CPG_TABLE_FILE))?;

    println!("Original filtered table:");
    println!("{}", table);
    println!("\nRows where REF = 'C' and next REF = 'G':");
    println!("{}", cpg);

    let views = [
        View {
            table: &table,
            label: "All Data",
            file_suffix: "all_data",
        },
        View {
            table: &cpg,
            label: "CpG Only",
            file_suffix: "cpg_only",
        },
    ];

    for view in views {
        report_view(&view, output_dir, args.plot_style, args.no_plots)?;
    }

    Ok(())
}

fn report_view(view: &View, output_dir: &Path, style: PlotStyle, no_plots: bool) -> Result<()> {
    let summary = match summarize(view.table) {
        Ok(summary) => summary,
        Err(e @ (MatrixError::EmptyTable | MatrixError::NoCoverage { .. })) => {
            warn!("Skipping percentages and plot for '{}': {}", view.label, e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    info!("{} - {}", view.label, summary);

    if no_plots {
        return Ok(());
    }

    let path = output_dir.join(format!("{}_{}.svg", style.file_prefix(), view.file_suffix));
    let title = format!(
        "{} of Nucleotide Counts by Position ({})",
        style.title_prefix(),
        view.label
    );
    render_chart(view.table, &title, &summary, style, &path)
        .with_context(|| format!("Failed to plot '{}'", view.label))?;
    info!("Plot saved as {:?}", path);

    Ok(())
}
