use crate::utils::error::{Result, UtilsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = UtilsError;

    /// Accepts full names and three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| {
                let name = day.as_str().to_ascii_lowercase();
                name == wanted || (wanted.len() == 3 && name.starts_with(&wanted))
            })
            .ok_or_else(|| UtilsError::invalid_argument(format!("Unknown day: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn day_type(day: Day) -> DayType {
    match day {
        Day::Saturday | Day::Sunday => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_and_weekday() {
        assert_eq!(day_type(Day::Saturday).to_string(), "Weekend");
        assert_eq!(day_type(Day::Wednesday).to_string(), "Weekday");

        let weekends: Vec<Day> = Day::ALL
            .into_iter()
            .filter(|d| day_type(*d) == DayType::Weekend)
            .collect();
        assert_eq!(weekends, vec![Day::Saturday, Day::Sunday]);
    }

    #[test]
    fn test_days_are_ordered() {
        assert!(Day::Monday < Day::Sunday);
        assert!(Day::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!("saturday".parse::<Day>().unwrap(), Day::Saturday);
        assert_eq!("Wed".parse::<Day>().unwrap(), Day::Wednesday);
        assert_eq!(" SUN ".parse::<Day>().unwrap(), Day::Sunday);
        assert!("funday".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }
}
