// View binding between dashboard logic and whatever renders it
use crate::domain::reading::ChartSeries;
use crate::domain::status::StatusColor;
use std::fmt;

/// Fixed identifiers of the dashboard's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    TemperatureChart,
    CurrentTemp,
    ToggleDataCollection,
    DownloadLink,
    TargetTempForm,
    TargetTempInput,
    Message,
    SystemStatus,
}

impl ElementId {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::TemperatureChart => "temperatureChart",
            ElementId::CurrentTemp => "currentTemp",
            ElementId::ToggleDataCollection => "toggleDataCollection",
            ElementId::DownloadLink => "downloadLink",
            ElementId::TargetTempForm => "targetTempForm",
            ElementId::TargetTempInput => "target_temp",
            ElementId::Message => "message",
            ElementId::SystemStatus => "systemStatus",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the dashboard logic may do to the page.
///
/// Calls come from the controller and from poll tasks, so implementations
/// guard their own state.
pub trait DashboardView: Send + Sync {
    fn set_text(&self, id: ElementId, text: &str);

    fn set_color(&self, id: ElementId, color: StatusColor);

    fn set_visible(&self, id: ElementId, visible: bool);

    /// Current value of an input element, empty when unset
    fn input_value(&self, id: ElementId) -> String;

    fn set_input_value(&self, id: ElementId, value: &str);

    fn draw_chart(&self, series: &ChartSeries);

    /// Blocking notice to the user
    fn alert(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids() {
        assert_eq!(ElementId::TemperatureChart.as_str(), "temperatureChart");
        assert_eq!(ElementId::TargetTempInput.as_str(), "target_temp");
        assert_eq!(ElementId::SystemStatus.to_string(), "systemStatus");
    }
}
