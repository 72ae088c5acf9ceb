use chrono::{Local, NaiveDate};
use kubelek_core::{
    calendar::{DutyCalendar, NextCollection},
    model::Family,
};

pub(crate) struct App {
    pub calendar: DutyCalendar,
    pub today: NaiveDate,
    /// Family filter selector: 0 shows every family, `n` selects
    /// `calendar.families()[n - 1]`.
    pub filter_index: usize,
}

impl App {
    pub(crate) fn new(calendar: DutyCalendar) -> Self {
        Self {
            calendar,
            today: Local::now().date_naive(),
            filter_index: 0,
        }
    }

    /// The family currently filtered on, or `None` when showing all.
    pub(crate) fn selected_family(&self) -> Option<&Family> {
        self.filter_index
            .checked_sub(1)
            .and_then(|index| self.calendar.families().get(index))
    }

    pub(crate) fn cycle_filter_forward(&mut self) {
        let stops = self.calendar.families().len() + 1;
        self.filter_index = (self.filter_index + 1) % stops;
    }

    pub(crate) fn cycle_filter_back(&mut self) {
        let stops = self.calendar.families().len() + 1;
        self.filter_index = (self.filter_index + stops - 1) % stops;
    }

    pub(crate) fn clear_filter(&mut self) {
        self.filter_index = 0;
    }

    pub(crate) fn next_collection(&self) -> NextCollection {
        self.calendar.next_collection(self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubelek_core::model::{CollectionDay, FamilyRotation, FractionSet};

    fn test_app() -> App {
        let days = [
            CollectionDay {
                month: 1,
                day: 2,
                fractions: FractionSet::default(),
            },
            CollectionDay {
                month: 1,
                day: 15,
                fractions: FractionSet::default(),
            },
        ];
        let rotation = FamilyRotation::new(["19A", "19B"], 2, 0);
        let calendar = DutyCalendar::new(2026, &days, &rotation).expect("valid schedule");
        App {
            calendar,
            today: NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid test date"),
            filter_index: 0,
        }
    }

    #[test]
    fn filter_cycles_through_all_families_and_back_to_all() {
        let mut app = test_app();
        assert!(app.selected_family().is_none(), "starts unfiltered");

        app.cycle_filter_forward();
        assert_eq!(app.selected_family().map(ToString::to_string), Some("19A".into()));
        app.cycle_filter_forward();
        assert_eq!(app.selected_family().map(ToString::to_string), Some("19B".into()));
        app.cycle_filter_forward();
        assert!(app.selected_family().is_none(), "wraps back to all");

        app.cycle_filter_back();
        assert_eq!(app.selected_family().map(ToString::to_string), Some("19B".into()));
    }

    #[test]
    fn clear_filter_resets_to_all_families() {
        let mut app = test_app();
        app.cycle_filter_forward();
        app.clear_filter();
        assert!(app.selected_family().is_none(), "cleared");
    }

    #[test]
    fn next_collection_uses_the_app_reference_date() {
        let app = test_app();
        let next = app.next_collection();
        let entry = next.entry().expect("collection upcoming on Jan 15");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid"));
    }
}
