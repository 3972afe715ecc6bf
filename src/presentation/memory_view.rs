// In-memory view, keeps the latest state of every element
use crate::domain::reading::ChartSeries;
use crate::domain::status::StatusColor;
use crate::presentation::view::{DashboardView, ElementId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub text: Option<String>,
    pub color: Option<StatusColor>,
    pub visible: Option<bool>,
    pub value: String,
}

#[derive(Debug, Default)]
struct Page {
    elements: HashMap<ElementId, ElementState>,
    chart: ChartSeries,
    chart_draws: usize,
    alerts: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryView {
    page: Mutex<Page>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        // A panicked writer leaves plain data behind, still fine to read
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn element(&self, id: ElementId) -> ElementState {
        self.page().elements.get(&id).cloned().unwrap_or_default()
    }

    pub fn text(&self, id: ElementId) -> Option<String> {
        self.element(id).text
    }

    pub fn color(&self, id: ElementId) -> Option<StatusColor> {
        self.element(id).color
    }

    pub fn is_visible(&self, id: ElementId) -> Option<bool> {
        self.element(id).visible
    }

    #[cfg(test)]
    pub fn chart(&self) -> ChartSeries {
        self.page().chart.clone()
    }

    #[cfg(test)]
    pub fn chart_draws(&self) -> usize {
        self.page().chart_draws
    }

    #[cfg(test)]
    pub fn alerts(&self) -> Vec<String> {
        self.page().alerts.clone()
    }
}

impl DashboardView for MemoryView {
    fn set_text(&self, id: ElementId, text: &str) {
        self.page().elements.entry(id).or_default().text = Some(text.to_string());
    }

    fn set_color(&self, id: ElementId, color: StatusColor) {
        self.page().elements.entry(id).or_default().color = Some(color);
    }

    fn set_visible(&self, id: ElementId, visible: bool) {
        self.page().elements.entry(id).or_default().visible = Some(visible);
    }

    fn input_value(&self, id: ElementId) -> String {
        self.element(id).value
    }

    fn set_input_value(&self, id: ElementId, value: &str) {
        self.page().elements.entry(id).or_default().value = value.to_string();
    }

    fn draw_chart(&self, series: &ChartSeries) {
        let mut page = self.page();
        page.chart = series.clone();
        page.chart_draws += 1;
    }

    fn alert(&self, message: &str) {
        self.page().alerts.push(message.to_string());
    }
}
