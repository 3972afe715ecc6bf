// System status domain model
use serde::Deserialize;
use std::fmt;

/// Operating mode reported by `GET /system_status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SystemStatus {
    Heating,
    Cooling,
    Idle,
    /// No target temperature set, so nothing was asked of the backend
    Off,
    Other(String),
}

impl From<String> for SystemStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Heating" => SystemStatus::Heating,
            "Cooling" => SystemStatus::Cooling,
            "Idle" => SystemStatus::Idle,
            _ => SystemStatus::Other(value),
        }
    }
}

impl SystemStatus {
    pub fn color(&self) -> StatusColor {
        match self {
            SystemStatus::Heating => StatusColor::Warm,
            SystemStatus::Cooling => StatusColor::Cool,
            _ => StatusColor::Neutral,
        }
    }

    pub fn label(&self) -> String {
        format!("System is {}", self)
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemStatus::Heating => f.write_str("Heating"),
            SystemStatus::Cooling => f.write_str("Cooling"),
            SystemStatus::Idle => f.write_str("Idle"),
            SystemStatus::Off => f.write_str("OFF"),
            SystemStatus::Other(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Warm,
    Cool,
    Neutral,
}

impl StatusColor {
    pub fn css(self) -> &'static str {
        match self {
            StatusColor::Warm => "red",
            StatusColor::Cool => "blue",
            StatusColor::Neutral => "white",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mapping() {
        assert_eq!(SystemStatus::Heating.color(), StatusColor::Warm);
        assert_eq!(SystemStatus::Cooling.color(), StatusColor::Cool);
        assert_eq!(SystemStatus::Idle.color(), StatusColor::Neutral);
        assert_eq!(SystemStatus::Off.color(), StatusColor::Neutral);
        assert_eq!(SystemStatus::from("Unknown".to_string()).color(), StatusColor::Neutral);
    }

    #[test]
    fn test_deserialize_status() {
        #[derive(Deserialize)]
        struct Body {
            status: SystemStatus,
        }

        let body: Body = serde_json::from_str(r#"{"status":"Cooling"}"#).unwrap();
        assert_eq!(body.status, SystemStatus::Cooling);

        let body: Body = serde_json::from_str(r#"{"status":"Defrosting"}"#).unwrap();
        assert_eq!(body.status, SystemStatus::Other("Defrosting".to_string()));
    }

    #[test]
    fn test_labels() {
        assert_eq!(SystemStatus::Heating.label(), "System is Heating");
        assert_eq!(SystemStatus::Off.label(), "System is OFF");
        assert_eq!(SystemStatus::Other("Unknown".into()).label(), "System is Unknown");
        assert_eq!(StatusColor::Warm.css(), "red");
        assert_eq!(StatusColor::Cool.css(), "blue");
        assert_eq!(StatusColor::Neutral.css(), "white");
    }
}
