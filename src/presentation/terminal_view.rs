// Terminal rendering of the dashboard
use crate::domain::reading::ChartSeries;
use crate::domain::status::StatusColor;
use crate::infrastructure::chart_renderer::ChartRenderer;
use crate::presentation::memory_view::MemoryView;
use crate::presentation::view::{DashboardView, ElementId};

/// Prints every element change as `[elementId] ...` and keeps the chart SVG
/// on disk up to date.
pub struct TerminalView {
    state: MemoryView,
    renderer: ChartRenderer,
}

impl TerminalView {
    pub fn new(renderer: ChartRenderer) -> Self {
        Self {
            state: MemoryView::new(),
            renderer,
        }
    }
}

impl DashboardView for TerminalView {
    fn set_text(&self, id: ElementId, text: &str) {
        if self.state.text(id).as_deref() != Some(text) {
            println!("[{}] {}", id, text);
        }
        self.state.set_text(id, text);
    }

    fn set_color(&self, id: ElementId, color: StatusColor) {
        if self.state.color(id) != Some(color) {
            println!("[{}] color={}", id, color.css());
        }
        self.state.set_color(id, color);
    }

    fn set_visible(&self, id: ElementId, visible: bool) {
        if self.state.is_visible(id) != Some(visible) {
            println!("[{}] {}", id, if visible { "shown" } else { "hidden" });
        }
        self.state.set_visible(id, visible);
    }

    fn input_value(&self, id: ElementId) -> String {
        self.state.input_value(id)
    }

    fn set_input_value(&self, id: ElementId, value: &str) {
        self.state.set_input_value(id, value);
    }

    fn draw_chart(&self, series: &ChartSeries) {
        self.state.draw_chart(series);
        match self.renderer.render_to_file(series) {
            Ok(()) => println!(
                "[{}] {} points -> {}",
                ElementId::TemperatureChart,
                series.len(),
                self.renderer.output_path().display()
            ),
            Err(e) => tracing::warn!("Failed to render chart: {:#}", e),
        }
    }

    fn alert(&self, message: &str) {
        self.state.alert(message);
        println!("[alert] {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ChartSettings;

    #[test]
    fn test_keeps_state_and_writes_chart() {
        let path = std::env::temp_dir().join(format!("thermo-terminal-{}.svg", std::process::id()));
        let view = TerminalView::new(ChartRenderer::new(&ChartSettings {
            output_path: path.clone(),
            width: 320,
            height: 200,
        }));

        view.set_input_value(ElementId::TargetTempInput, "21");
        view.set_text(ElementId::Message, "ok");
        view.draw_chart(&ChartSeries::default());

        assert_eq!(view.input_value(ElementId::TargetTempInput), "21");
        assert_eq!(view.state.text(ElementId::Message).as_deref(), Some("ok"));
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
