use crate::types::averages::Averages;

/// A titled value box, one per averaged metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
}

impl SummaryCard {
    pub fn new(title: &'static str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
        }
    }
}

/// Cards for average temperature, humidity and pressure, in that order.
pub fn summary_cards(averages: &Averages) -> [SummaryCard; 3] {
    [
        SummaryCard::new("Temperatura Promedio (°C)", averages.temperature_label()),
        SummaryCard::new("Humedad Promedio (%)", averages.humidity_label()),
        SummaryCard::new("Presión Promedio (hPa)", averages.pressure_label()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_show_two_decimals_or_zero() {
        let averages = Averages {
            count: 2,
            temperature: 15.0,
            humidity: 55.5,
            pressure: 1005.25,
        };
        let [temperature, humidity, pressure] = summary_cards(&averages);
        assert_eq!(temperature.title, "Temperatura Promedio (°C)");
        assert_eq!(temperature.value, "15.00");
        assert_eq!(humidity.value, "55.50");
        assert_eq!(pressure.value, "1005.25");

        let empty = summary_cards(&Averages::default());
        assert!(empty.iter().all(|card| card.value == "0"));
    }
}
