//! Wire types for the devices endpoint and the flattening into [`Reading`]s.
//!
//! The endpoint answers with an array of devices, each holding a `Sensor` array,
//! each holding a `WeatherData` array of entries:
//!
//! ```json
//! [{ "Sensor": [{ "WeatherData": [
//!     { "CreationDate": "2024-01-01T08:00:00Z",
//!       "Data": { "temperature": 10, "humidity": 50, "pressure": 1000 } }
//! ] }] }]
//! ```
//!
//! Any other fields (ids, names, ...) are ignored.

use crate::types::reading::Reading;
use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    #[serde(rename = "Sensor")]
    pub sensors: Vec<Sensor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sensor {
    #[serde(rename = "WeatherData")]
    pub weather_data: Vec<WeatherEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherEntry {
    #[serde(rename = "CreationDate")]
    pub creation_date: String,
    #[serde(rename = "Data")]
    pub data: WeatherValues,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeatherValues {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

/// Parses a response body into readings, in payload order.
pub fn parse_payload(body: &[u8]) -> Result<Vec<Reading>, serde_json::Error> {
    let devices: Vec<Device> = serde_json::from_slice(body)?;
    Ok(flatten(devices))
}

/// Flattens devices → sensors → entries into one list, dropping device and
/// sensor identity. Entries with an unparseable `CreationDate` are skipped.
pub fn flatten(devices: Vec<Device>) -> Vec<Reading> {
    devices
        .into_iter()
        .flat_map(|device| device.sensors)
        .flat_map(|sensor| sensor.weather_data)
        .filter_map(|entry| {
            let WeatherValues {
                temperature,
                humidity,
                pressure,
            } = entry.data;
            let reading = Reading::new(temperature, humidity, pressure, entry.creation_date.as_str());
            if reading.is_none() {
                warn!(
                    "Skipping weather entry with unparseable CreationDate '{}'",
                    entry.creation_date
                );
            }
            reading
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Two devices, one sensor each, both reporting the same two entries.
    pub(crate) const TWO_DEVICES: &str = r#"[
        {"id": 1, "name": "roof", "Sensor": [{"id": 10, "WeatherData": [
            {"CreationDate": "2024-01-02T08:00:00Z", "Data": {"temperature": 20, "humidity": 60, "pressure": 1010}},
            {"CreationDate": "2024-01-01T08:00:00Z", "Data": {"temperature": 10, "humidity": 50, "pressure": 1000}}
        ]}]},
        {"id": 2, "name": "garden", "Sensor": [{"id": 20, "WeatherData": [
            {"CreationDate": "2024-01-01T08:00:00Z", "Data": {"temperature": 10, "humidity": 50, "pressure": 1000}},
            {"CreationDate": "2024-01-02T08:00:00Z", "Data": {"temperature": 20, "humidity": 60, "pressure": 1010}}
        ]}]}
    ]"#;

    #[test]
    fn flattens_in_payload_order() {
        let readings = parse_payload(TWO_DEVICES.as_bytes()).unwrap();
        assert_eq!(readings.len(), 4);
        let temps: Vec<f64> = readings.iter().map(|r| r.temperature).collect();
        assert_eq!(temps, vec![20.0, 10.0, 10.0, 20.0]);
        assert_eq!(readings[1].timestamp, "2024-01-01T08:00:00Z");
        assert_eq!(readings[1].humidity, 50.0);
        assert_eq!(readings[1].pressure, 1000.0);
    }

    #[test]
    fn empty_arrays_flatten_to_nothing() {
        assert!(parse_payload(b"[]").unwrap().is_empty());
        assert!(parse_payload(br#"[{"Sensor": []}, {"Sensor": [{"WeatherData": []}]}]"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn skips_entries_with_bad_dates() {
        let body = br#"[{"Sensor": [{"WeatherData": [
            {"CreationDate": "garbage", "Data": {"temperature": 1, "humidity": 2, "pressure": 3}},
            {"CreationDate": "2024-05-01T12:00:00Z", "Data": {"temperature": 4, "humidity": 5, "pressure": 6}}
        ]}]}]"#;
        let readings = parse_payload(body).unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].temperature, 4.0);
    }

    #[test]
    fn day_keys_are_always_dates() {
        let body = br#"[{"Sensor": [{"WeatherData": [
            {"CreationDate": "2024-01-01 08:00:00Z", "Data": {"temperature": 1, "humidity": 2, "pressure": 3}},
            {"CreationDate": " 2024-01-01T09:00:00Z", "Data": {"temperature": 4, "humidity": 5, "pressure": 6}},
            {"CreationDate": "2024-01-01T10:00:00Z", "Data": {"temperature": 7, "humidity": 8, "pressure": 9}}
        ]}]}]"#;
        let readings = parse_payload(body).unwrap();
        assert_eq!(readings.len(), 2);
        assert!(readings
            .iter()
            .all(|r| r.day_key().date().is_some() && r.day_key().as_str() == "2024-01-01"));
        assert_eq!(readings[0].timestamp, "2024-01-01T09:00:00Z");
    }

    #[test]
    fn rejects_wrong_shapes() {
        // Missing Sensor
        assert!(parse_payload(br#"[{"id": 1}]"#).is_err());
        // Sensor is not an array
        assert!(parse_payload(br#"[{"Sensor": {"WeatherData": []}}]"#).is_err());
        // Non-numeric metric
        assert!(parse_payload(
            br#"[{"Sensor": [{"WeatherData": [{"CreationDate": "2024-01-01", "Data": {"temperature": "hot", "humidity": 1, "pressure": 1}}]}]}]"#
        )
        .is_err());
        // Top level is not an array
        assert!(parse_payload(br#"{"devices": []}"#).is_err());
        assert!(parse_payload(b"<html>").is_err());
    }
}
