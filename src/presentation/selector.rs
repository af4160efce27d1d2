use crate::presentation::format::day_label;
use crate::types::day::{DayKey, DaySelection, GENERAL};

/// One button of the day selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayButton {
    pub label: String,
    /// What clicking the button selects.
    pub selection: DaySelection,
    pub selected: bool,
}

/// `General` first, then one button per day in the order given.
pub fn day_buttons(days: &[DayKey], current: &DaySelection) -> Vec<DayButton> {
    let general = DayButton {
        label: GENERAL.to_string(),
        selection: DaySelection::General,
        selected: current.is_general(),
    };
    std::iter::once(general)
        .chain(days.iter().map(|day| {
            let selection = DaySelection::Day(day.clone());
            DayButton {
                label: day_label(day),
                selected: &selection == current,
                selection,
            }
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_comes_first_and_one_button_is_selected() {
        let days = vec![DayKey::from("2024-01-01"), DayKey::from("2024-01-02")];
        let buttons = day_buttons(&days, &DaySelection::from("2024-01-02"));

        let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["General", "1 de enero de 2024", "2 de enero de 2024"]);
        let selected: Vec<bool> = buttons.iter().map(|b| b.selected).collect();
        assert_eq!(selected, [false, false, true]);
        assert_eq!(buttons[1].selection, DaySelection::from("2024-01-01"));
    }

    #[test]
    fn general_is_selected_by_default() {
        let buttons = day_buttons(&[], &DaySelection::default());
        assert_eq!(buttons.len(), 1);
        assert!(buttons[0].selected);
    }
}
