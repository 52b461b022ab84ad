use std::collections::HashMap;

use crate::models::Training;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySummary {
    pub activity: String,
    pub total_minutes: i64,
    pub sessions: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsTotals {
    pub activities: usize,
    pub total_minutes: i64,
    pub total_sessions: usize,
}

/// Groups trainings by exact activity name, sums durations and counts
/// sessions. Sorted descending by total minutes; ties keep first-seen order.
/// Grouping is case-sensitive: "yoga" and "Yoga" are distinct activities.
pub fn summarize_activities(trainings: &[Training]) -> Vec<ActivitySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<ActivitySummary> = Vec::new();

    for training in trainings {
        match index.get(training.activity.as_str()) {
            Some(&slot) => {
                summaries[slot].total_minutes += training.duration;
                summaries[slot].sessions += 1;
            }
            None => {
                index.insert(training.activity.as_str(), summaries.len());
                summaries.push(ActivitySummary {
                    activity: training.activity.clone(),
                    total_minutes: training.duration,
                    sessions: 1,
                });
            }
        }
    }

    summaries.sort_by(|a, b| b.total_minutes.cmp(&a.total_minutes));
    summaries
}

pub fn totals(summaries: &[ActivitySummary]) -> StatsTotals {
    StatsTotals {
        activities: summaries.len(),
        total_minutes: summaries.iter().map(|summary| summary.total_minutes).sum(),
        total_sessions: summaries.iter().map(|summary| summary.sessions).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training(activity: &str, duration: i64) -> Training {
        Training {
            id: 0,
            date: "2026-08-01T10:00:00.000+00:00".to_string(),
            duration,
            activity: activity.to_string(),
            customer: None,
        }
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert!(summarize_activities(&[]).is_empty());
    }

    #[test]
    fn groups_sums_and_sorts_descending() {
        let trainings = vec![
            training("Run", 30),
            training("Run", 45),
            training("Yoga", 60),
        ];
        let summaries = summarize_activities(&trainings);
        assert_eq!(
            summaries,
            vec![
                ActivitySummary {
                    activity: "Run".to_string(),
                    total_minutes: 75,
                    sessions: 2,
                },
                ActivitySummary {
                    activity: "Yoga".to_string(),
                    total_minutes: 60,
                    sessions: 1,
                },
            ]
        );
    }

    #[test]
    fn summaries_partition_the_input() {
        let trainings = vec![
            training("Run", 30),
            training("Yoga", 60),
            training("Run", 15),
            training("Spinning", 50),
        ];
        let summaries = summarize_activities(&trainings);
        let summed: i64 = summaries.iter().map(|summary| summary.total_minutes).sum();
        let counted: usize = summaries.iter().map(|summary| summary.sessions).sum();
        assert_eq!(summed, trainings.iter().map(|t| t.duration).sum::<i64>());
        assert_eq!(counted, trainings.len());
    }

    #[test]
    fn ties_preserve_first_seen_order() {
        let trainings = vec![
            training("Zumba", 40),
            training("Aqua", 40),
            training("Boxing", 40),
        ];
        let summaries = summarize_activities(&trainings);
        let order: Vec<&str> = summaries
            .iter()
            .map(|summary| summary.activity.as_str())
            .collect();
        assert_eq!(order, vec!["Zumba", "Aqua", "Boxing"]);
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let trainings = vec![training("Yoga", 60), training("yoga", 30)];
        let summaries = summarize_activities(&trainings);
        assert_eq!(summaries.len(), 2);
    }

    #[test]
    fn totals_roll_up_summaries() {
        let trainings = vec![
            training("Run", 30),
            training("Run", 45),
            training("Yoga", 60),
        ];
        let stats = totals(&summarize_activities(&trainings));
        assert_eq!(stats.activities, 2);
        assert_eq!(stats.total_minutes, 135);
        assert_eq!(stats.total_sessions, 3);
    }
}
