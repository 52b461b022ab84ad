use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

use crate::models::Training;

/// The month currently shown in the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn last_day(self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    pub fn label(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Monday-first week rows for the month, padded with `None` outside it.
pub fn month_weeks(cursor: MonthCursor) -> Vec<[Option<NaiveDate>; 7]> {
    let mut weeks = Vec::new();
    let mut cells: Vec<Option<NaiveDate>> = Vec::new();

    let first = cursor.first_day();
    let last = cursor.last_day();
    for _ in 0..first.weekday().num_days_from_monday() {
        cells.push(None);
    }

    let mut current = first;
    while current <= last {
        cells.push(Some(current));
        if cells.len() == 7 {
            weeks.push(take_week(&mut cells));
        }
        current = current.succ_opt().unwrap_or(current + Duration::days(1));
    }

    if !cells.is_empty() {
        while cells.len() < 7 {
            cells.push(None);
        }
        weeks.push(take_week(&mut cells));
    }

    weeks
}

fn take_week(cells: &mut Vec<Option<NaiveDate>>) -> [Option<NaiveDate>; 7] {
    let mut week = [None; 7];
    for (slot, cell) in week.iter_mut().zip(cells.drain(..)) {
        *slot = cell;
    }
    week
}

pub fn parse_training_date(training: &Training) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(&training.date)
        .ok()
        .map(|date| date.with_timezone(&Local))
}

/// Buckets trainings by local calendar day. Entries with unparseable dates
/// are skipped.
pub fn trainings_by_day<'a>(trainings: &'a [Training]) -> HashMap<NaiveDate, Vec<&'a Training>> {
    let mut days: HashMap<NaiveDate, Vec<&Training>> = HashMap::new();
    for training in trainings {
        if let Some(date) = parse_training_date(training) {
            days.entry(date.date_naive()).or_default().push(training);
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training(date: &str) -> Training {
        Training {
            id: 1,
            date: date.to_string(),
            duration: 60,
            activity: "Yoga".to_string(),
            customer: None,
        }
    }

    #[test]
    fn month_navigation_wraps_at_year_boundaries() {
        let december = MonthCursor {
            year: 2026,
            month: 12,
        };
        assert_eq!(december.next(), MonthCursor { year: 2027, month: 1 });
        let january = MonthCursor {
            year: 2026,
            month: 1,
        };
        assert_eq!(
            january.previous(),
            MonthCursor {
                year: 2025,
                month: 12
            }
        );
    }

    #[test]
    fn august_2026_grid_shape() {
        // 2026-08-01 is a Saturday: five leading blanks, 31 days, six rows.
        let weeks = month_weeks(MonthCursor {
            year: 2026,
            month: 8,
        });
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][5], NaiveDate::from_ymd_opt(2026, 8, 1));
        assert!(weeks[0][..5].iter().all(Option::is_none));
        assert_eq!(weeks[5][6], None);
        let days: usize = weeks
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count();
        assert_eq!(days, 31);
    }

    #[test]
    fn buckets_trainings_by_local_day() {
        let trainings = vec![
            training("2026-08-01T10:00:00.000+00:00"),
            training("2026-08-01T18:00:00.000+00:00"),
            training("2026-08-02T09:00:00.000+00:00"),
            training("not a date"),
        ];
        let days = trainings_by_day(&trainings);
        let total: usize = days.values().map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn cursor_contains_only_its_own_month() {
        let cursor = MonthCursor {
            year: 2026,
            month: 8,
        };
        assert!(cursor.contains(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()));
        assert!(!cursor.contains(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()));
    }
}
