// SVG rendering of the temperature chart
use crate::domain::reading::ChartSeries;
use crate::infrastructure::config::ChartSettings;
use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const LINE_COLOR: RGBColor = RGBColor(249, 200, 135);
const SERIES_LABEL: &str = "Temperature (°C)";
// Axis range used before any reading arrives
const EMPTY_RANGE: (f64, f64) = (0.0, 30.0);
const MS_PER_MINUTE: f64 = 60_000.0;

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output_path: PathBuf,
    width: u32,
    height: u32,
}

impl ChartRenderer {
    pub fn new(settings: &ChartSettings) -> Self {
        Self {
            output_path: settings.output_path.clone(),
            width: settings.width,
            height: settings.height,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Render and overwrite the configured SVG file
    pub fn render_to_file(&self, series: &ChartSeries) -> anyhow::Result<()> {
        let svg = self.render_svg(series)?;
        std::fs::write(&self.output_path, svg)
            .with_context(|| format!("Failed to write {}", self.output_path.display()))
    }

    /// Time on x (minutes from the first point, labelled as wall-clock
    /// time), temperature on y.
    pub fn render_svg(&self, series: &ChartSeries) -> anyhow::Result<String> {
        let origin = series
            .points()
            .first()
            .map(|p| p.time)
            .unwrap_or_else(Utc::now);
        let data: Vec<(f64, f64)> = series
            .points()
            .iter()
            .map(|p| (minutes_since(origin, p.time), p.temperature))
            .collect();

        let x_end = data.last().map(|(x, _)| *x).unwrap_or(0.0).max(1.0);
        let (temp_min, temp_max) = series
            .temperature_bounds()
            .map(|(lo, hi)| (lo - 1.0, hi + 1.0))
            .unwrap_or(EMPTY_RANGE);

        let label_time = |minutes: &f64| {
            let time = origin + Duration::milliseconds((minutes * MS_PER_MINUTE) as i64);
            time.format("%H:%M").to_string()
        };

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&BLACK)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(0.0..x_end, temp_min..temp_max)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc("Timestamp")
                .y_desc(SERIES_LABEL)
                .x_label_formatter(&label_time)
                .y_label_formatter(&|t| format!("{:.1}", t))
                .axis_desc_style(("sans-serif", 15).into_font().color(&WHITE))
                .label_style(("sans-serif", 12).into_font().color(&WHITE))
                .axis_style(WHITE)
                .draw()?;

            if !series.is_empty() {
                chart.draw_series(LineSeries::new(data, LINE_COLOR.stroke_width(2)))?;
            }

            root.present()?;
        }

        Ok(svg)
    }
}

fn minutes_since(origin: DateTime<Utc>, time: DateTime<Utc>) -> f64 {
    (time - origin).num_milliseconds() as f64 / MS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::Reading;
    use chrono::TimeZone;

    fn renderer(output_path: PathBuf) -> ChartRenderer {
        ChartRenderer::new(&ChartSettings {
            output_path,
            width: 640,
            height: 400,
        })
    }

    #[test]
    fn test_renders_empty_chart() {
        let svg = renderer(PathBuf::from("unused.svg"))
            .render_svg(&ChartSeries::default())
            .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Timestamp"));
    }

    #[test]
    fn test_renders_series() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let series = ChartSeries::from_readings(vec![
            Reading::new(t0, 21.5),
            Reading::new(t0 + Duration::minutes(1), 22.0),
            Reading::new(t0 + Duration::minutes(2), 22.5),
        ]);

        let svg = renderer(PathBuf::from("unused.svg")).render_svg(&series).unwrap();

        assert!(svg.contains("<polyline"));
        assert!(svg.contains("Temperature (°C)"));
    }

    #[test]
    fn test_render_to_file() {
        let path = std::env::temp_dir().join(format!("thermo-chart-{}.svg", std::process::id()));
        let renderer = renderer(path.clone());

        renderer.render_to_file(&ChartSeries::default()).unwrap();

        assert_eq!(renderer.output_path(), path.as_path());
        assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_minutes_since() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(minutes_since(t0, t0 + Duration::seconds(90)), 1.5);
    }
}
