use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use methylome::{Base, CountTable, PercentageSummary};
use plotters::prelude::*;
use std::{ops::Range, path::Path};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;
const SIDE_PANEL_WIDTH: u32 = 170;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotStyle {
    #[default]
    Line,
    Dot,
}

impl PlotStyle {
    pub fn file_prefix(&self) -> &'static str {
        match self {
            PlotStyle::Line => "line_plot",
            PlotStyle::Dot => "dot_plot",
        }
    }

    pub fn title_prefix(&self) -> &'static str {
        match self {
            PlotStyle::Line => "Line Plot",
            PlotStyle::Dot => "Dot Plot",
        }
    }
}

fn base_color(base: Base) -> RGBColor {
    match base {
        Base::A => RGBColor(31, 119, 180),
        Base::C => RGBColor(255, 127, 14),
        Base::G => RGBColor(44, 160, 44),
        Base::T => RGBColor(214, 39, 40),
        Base::Other(_) => BLACK,
    }
}

/// X and Y ranges covering every position and count of `table`, with a tenth
/// of headroom above the largest count. `None` for an empty table.
fn axis_ranges(table: &CountTable) -> Option<(Range<u64>, Range<u64>)> {
    let (min_pos, max_pos) = table.position_range()?;
    let max_count = table.max_count();
    let y_max = max_count.saturating_add(max_count / 10).saturating_add(1);

    Some((min_pos..max_pos.saturating_add(1), 0..y_max))
}

/// Draws the A/C/G/T counts of every row against its position and writes the
/// chart as SVG. The C and T percentages are printed next to the plot.
pub fn render_chart(
    table: &CountTable,
    title: &str,
    summary: &PercentageSummary,
    style: PlotStyle,
    path: &Path,
) -> Result<()> {
    let Some((x_range, y_range)) = axis_ranges(table) else {
        bail!("Cannot plot '{}': table has no rows", title);
    };

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let (plot_area, side_panel) = root.split_horizontally(WIDTH - SIDE_PANEL_WIDTH);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("POS (Position)")
        .y_desc("Count")
        .draw()?;

    for base in Base::NUCLEOTIDES {
        let color = base_color(base);
        let points: Vec<(u64, u64)> = table
            .iter()
            .map(|row| (row.position, row.count(base)))
            .collect();

        let series = match style {
            PlotStyle::Line => {
                chart.draw_series(LineSeries::new(points, color.mix(0.7).stroke_width(2)))?
            }
            PlotStyle::Dot => chart.draw_series(
                points
                    .into_iter()
                    .map(|p| Circle::new(p, 3, color.mix(0.7).filled())),
            )?,
        };
        series
            .label(base.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    let text_style = ("sans-serif", 16).into_font().color(&BLACK);
    let box_corners = [(10, 50), (SIDE_PANEL_WIDTH as i32 - 10, 115)];
    side_panel.draw(&Rectangle::new(box_corners, &BLACK))?;
    side_panel.draw(&Text::new(
        format!("C: {:.2}%", summary.percent_c),
        (22, 62),
        text_style.clone(),
    ))?;
    side_panel.draw(&Text::new(
        format!("T: {:.2}%", summary.percent_t),
        (22, 88),
        text_style,
    ))?;

    root.present()
        .with_context(|| format!("Failed to write plot to {:?}", path))?;
    Ok(())
}
