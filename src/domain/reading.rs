// Temperature reading domain models
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

pub const NO_DATA_MESSAGE: &str = "No temperature data available.";

/// A single timestamped temperature sample as served by `GET /data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "temp")]
    pub temperature: f64,
}

impl Reading {
    #[cfg(test)]
    pub fn new(timestamp: DateTime<Utc>, temperature: f64) -> Self {
        Self {
            id: None,
            timestamp,
            temperature,
        }
    }
}

/// Parse a backend timestamp.
/// Accepts RFC 3339 with an offset, or an offset-less ISO-8601 date-time
/// which is taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub time: DateTime<Utc>,
    pub temperature: f64,
}

/// Points plotted on the temperature chart, ascending by time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let mut points: Vec<ChartPoint> = readings
            .into_iter()
            .map(|r| ChartPoint {
                time: r.timestamp,
                temperature: r.temperature,
            })
            .collect();

        // Stable, so equal timestamps keep the backend's order
        points.sort_by_key(|p| p.time);

        Self { points }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn latest(&self) -> Option<&ChartPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest and highest temperature in the series
    pub fn temperature_bounds(&self) -> Option<(f64, f64)> {
        let mut temps = self.points.iter().map(|p| p.temperature);
        let first = temps.next()?;
        Some(temps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

/// Text for the current-temperature label.
/// `22.0` renders as `22`, `21.5` as `21.5`.
pub fn current_temperature_label(temperature: f64) -> String {
    format!("Current Temperature: {}°C", temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_readings_payload() {
        let json = r#"[{"timestamp":"2024-01-01T00:00:00Z","temp":21.5},{"timestamp":"2024-01-01T00:01:00Z","temp":22.0}]"#;
        let readings: Vec<Reading> = serde_json::from_str(json).unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].temperature, 21.5);
        assert_eq!(
            readings[1].timestamp,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 1, 0).unwrap()
        );
        assert_eq!(readings[0].id, None);
    }

    #[test]
    fn test_parse_offsetless_timestamp() {
        let json = r#"{"id":7,"temp":19.25,"timestamp":"2024-03-05T10:15:30.250000"}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.id, Some(7));
        assert_eq!(
            reading.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 5, 10, 15, 30).unwrap() + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let time = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let json = r#"{"temp":19.0,"timestamp":"not a time"}"#;
        assert!(serde_json::from_str::<Reading>(json).is_err());
    }

    #[test]
    fn test_series_sorted_and_latest() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let readings = vec![
            Reading::new(t0 + chrono::Duration::minutes(2), 23.0),
            Reading::new(t0, 21.0),
            Reading::new(t0 + chrono::Duration::minutes(1), 22.0),
        ];
        let series = ChartSeries::from_readings(readings);

        let temps: Vec<f64> = series.points().iter().map(|p| p.temperature).collect();
        assert_eq!(temps, vec![21.0, 22.0, 23.0]);
        assert_eq!(series.latest().unwrap().temperature, 23.0);
        assert_eq!(series.temperature_bounds(), Some((21.0, 23.0)));
    }

    #[test]
    fn test_empty_series() {
        let series = ChartSeries::from_readings(Vec::new());
        assert!(series.is_empty());
        assert!(series.latest().is_none());
        assert!(series.temperature_bounds().is_none());
    }

    #[test]
    fn test_current_temperature_label() {
        assert_eq!(current_temperature_label(22.0), "Current Temperature: 22°C");
        assert_eq!(current_temperature_label(21.5), "Current Temperature: 21.5°C");
        assert_eq!(current_temperature_label(-3.0), "Current Temperature: -3°C");
    }
}
