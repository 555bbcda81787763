use std::fmt;

use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    pub const SUNDAY: Self = WeekdayIndex(0);
    pub const MONDAY: Self = WeekdayIndex(1);
    pub const SATURDAY: Self = WeekdayIndex(6);

    pub fn new(value: u8) -> Option<Self> {
        match value {
            0..=6 => Some(WeekdayIndex(value)),
            _ => None,
        }
    }

    // Accepts the ISO-8601 first-day encoding (1=Monday .. 7=Sunday);
    // anything outside 1..=7 is rejected, never coerced.
    pub fn from_iso_first_day(raw: u8) -> Option<Self> {
        if !(1..=7).contains(&raw) {
            return None;
        }
        WeekdayIndex::new(raw % 7)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "sunday",
            1 => "monday",
            2 => "tuesday",
            3 => "wednesday",
            4 => "thursday",
            5 => "friday",
            _ => "saturday",
        }
    }

    pub fn to_weekday(self) -> Weekday {
        match self.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl fmt::Display for WeekdayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::WeekdayIndex;

    #[test]
    fn accepts_only_valid_indices() {
        assert_eq!(WeekdayIndex::new(0), Some(WeekdayIndex::SUNDAY));
        assert_eq!(WeekdayIndex::new(6), Some(WeekdayIndex::SATURDAY));
        assert_eq!(WeekdayIndex::new(7), None);
        assert_eq!(WeekdayIndex::new(255), None);
    }

    #[test]
    fn normalizes_iso_first_day() {
        assert_eq!(
            WeekdayIndex::from_iso_first_day(1),
            Some(WeekdayIndex::MONDAY)
        );
        assert_eq!(
            WeekdayIndex::from_iso_first_day(6),
            Some(WeekdayIndex::SATURDAY)
        );
        assert_eq!(
            WeekdayIndex::from_iso_first_day(7),
            Some(WeekdayIndex::SUNDAY)
        );
    }

    #[test]
    fn rejects_out_of_range_iso_values() {
        assert_eq!(WeekdayIndex::from_iso_first_day(0), None);
        assert_eq!(WeekdayIndex::from_iso_first_day(8), None);
    }

    #[test]
    fn converts_to_chrono_weekday() {
        assert_eq!(WeekdayIndex::SUNDAY.to_weekday(), Weekday::Sun);
        assert_eq!(WeekdayIndex::MONDAY.to_weekday(), Weekday::Mon);
        assert_eq!(WeekdayIndex::SATURDAY.to_weekday(), Weekday::Sat);
    }
}
