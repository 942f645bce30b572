//! Interactive water level chart, drawn with plotlars in the browser.

use crate::tidegauge::WaterLevelReport;
use plotlars::{Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::PolarsResult;

pub fn chart_title(report: &WaterLevelReport) -> String {
    format!(
        "Water Level at {} ({})",
        report.station.name, report.station.id
    )
}

/// Opens a time-series chart of the report's observations.
pub fn plot_series(report: &WaterLevelReport) -> PolarsResult<()> {
    let frame = report.series.to_frame()?;
    let title = chart_title(report);
    TimeSeriesPlot::builder()
        .data(&frame)
        .x("timestamp")
        .y("water_level_ft")
        .colors(vec![Rgb(31, 119, 180)])
        .lines(vec![Line::Solid])
        .plot_title(Text::from(title.as_str()).size(18))
        .x_title("Date / Time")
        .y_title("Water Level (ft, MLLW)")
        .build()
        .plot();
    Ok(())
}
