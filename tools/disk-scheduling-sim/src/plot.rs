use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use disk_scheduling::{Comparison, SimulationResult};

const BAR_COLORS: [RGBColor; 4] = [
    RGBColor(0xFF, 0x6B, 0x6B),
    RGBColor(0x4E, 0xCD, 0xC4),
    RGBColor(0x45, 0xB7, 0xD1),
    RGBColor(0xFF, 0xA0, 0x7A),
];

const FONT: &str = "sans-serif";

/// Draws head positions over time, each point labelled with its track.
pub(crate) fn plot_sequence(path: &Path, result: &SimulationResult) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_track = result.sequence.iter().copied().max().unwrap_or(0);
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} Disk Scheduling - Seek Sequence", result.algorithm), (FONT, 24))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(0..result.sequence.len(), 0..max_track + max_track / 10 + 10)?;
    chart
        .configure_mesh()
        .x_desc("Request Order")
        .y_desc("Track Number")
        .draw()?;

    let points: Vec<(usize, u64)> = result.sequence.iter().copied().enumerate().collect();
    chart.draw_series(LineSeries::new(points.clone(), BLUE.stroke_width(2)).point_size(5))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| EmptyElement::at((x, y)) + Text::new(y.to_string(), (-8, -20), (FONT, 14))),
    )?;

    root.draw(&Text::new(
        format!("Total Seek Time: {}", result.seek_time),
        (90, 60),
        (FONT, 16),
    ))?;
    root.present()?;
    Ok(())
}

/// Draws a bar per algorithm with its total seek time.
pub(crate) fn plot_comparison(path: &Path, comparison: &Comparison) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let names: Vec<String> = comparison.results.iter().map(|r| r.algorithm.to_string()).collect();
    let max_seek_time = comparison.results.iter().map(|r| r.seek_time).max().unwrap_or(0);
    let mut chart = ChartBuilder::on(&root)
        .caption("Algorithm Comparison - Total Seek Time", (FONT, 24))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(
            // the range is inclusive, one segment per algorithm
            (0..names.len().saturating_sub(1)).into_segmented(),
            0..max_seek_time + max_seek_time / 10 + 1,
        )?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Algorithm")
        .y_desc("Total Seek Time")
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => names.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(comparison.results.iter().enumerate().map(|(i, r)| {
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), r.seek_time)],
            BAR_COLORS[i % BAR_COLORS.len()].filled(),
        );
        bar.set_margin(0, 0, 20, 20);
        bar
    }))?;
    chart.draw_series(comparison.results.iter().enumerate().map(|(i, r)| {
        EmptyElement::at((SegmentValue::CenterOf(i), r.seek_time))
            + Text::new(r.seek_time.to_string(), (-12, -20), (FONT, 16))
    }))?;

    root.present()?;
    Ok(())
}
