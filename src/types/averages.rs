use crate::types::reading::Reading;

/// Arithmetic means of the three metrics over a set of readings, rounded to two
/// decimals.
///
/// An empty set has no mean; every metric is then reported as exactly `0`
/// instead of the NaN a zero-length division would give.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Averages {
    /// Number of readings the means were taken over.
    pub count: usize,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Averages {
    /// Computes the means over `readings`.
    ///
    /// ```
    /// use weather_dashboard::{Averages, Reading};
    ///
    /// let readings: Vec<Reading> = [10.0, 20.0, 30.0]
    ///     .into_iter()
    ///     .map(|t| Reading::new(t, 50.0, 1000.0, "2024-01-01T08:00:00Z").unwrap())
    ///     .collect();
    /// let averages = Averages::of(&readings);
    /// assert_eq!(averages.temperature, 20.0);
    /// assert_eq!(averages.temperature_label(), "20.00");
    /// ```
    pub fn of<'a>(readings: impl IntoIterator<Item = &'a Reading>) -> Self {
        let (count, temperature, humidity, pressure) = readings.into_iter().fold(
            (0usize, 0.0, 0.0, 0.0),
            |(n, t, h, p), reading| {
                (
                    n + 1,
                    t + reading.temperature,
                    h + reading.humidity,
                    p + reading.pressure,
                )
            },
        );
        if count == 0 {
            return Self::default();
        }
        let n = count as f64;
        Self {
            count,
            temperature: round_to_hundredths(temperature / n),
            humidity: round_to_hundredths(humidity / n),
            pressure: round_to_hundredths(pressure / n),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn temperature_label(&self) -> String {
        self.label(self.temperature)
    }

    pub fn humidity_label(&self) -> String {
        self.label(self.humidity)
    }

    pub fn pressure_label(&self) -> String {
        self.label(self.pressure)
    }

    // Two decimals, or a bare "0" when there was nothing to average.
    fn label(&self, value: f64) -> String {
        if self.is_empty() {
            "0".to_string()
        } else {
            format!("{value:.2}")
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
