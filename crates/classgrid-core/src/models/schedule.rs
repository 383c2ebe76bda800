//! Semester planning and schedule snapshot

use super::session::{Session, SessionId, WeekParity};
use crate::date_math::start_of_week;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Week-alternation state of the semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterPlanning {
    /// Parity of the displayed week, or of the reference week when
    /// `reference_date` is set
    pub week_alternance: WeekParity,

    /// Any date inside the week whose parity is `week_alternance`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl SemesterPlanning {
    pub fn new(week_alternance: WeekParity) -> Self {
        Self {
            week_alternance,
            reference_date: None,
        }
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Parity of the week containing `date`
    ///
    /// Without a reference date the flag applies as-is to whatever week is
    /// displayed. With one, the parity flips once per week away from it.
    pub fn alternance_for(&self, date: NaiveDate) -> WeekParity {
        let Some(reference) = self.reference_date else {
            return self.week_alternance;
        };

        let weeks = (start_of_week(date) - start_of_week(reference)).num_days() / 7;
        if weeks.rem_euclid(2) == 0 {
            self.week_alternance
        } else {
            self.week_alternance.flipped()
        }
    }
}

impl Default for SemesterPlanning {
    fn default() -> Self {
        Self::new(WeekParity::A)
    }
}

/// Immutable snapshot of the sessions to lay out for one render cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub semester: SemesterPlanning,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Schedule {
    pub fn new(semester: SemesterPlanning, sessions: Vec<Session>) -> Self {
        Self { semester, sessions }
    }

    /// Sessions with their ids, in input order
    pub fn iter(&self) -> impl Iterator<Item = (SessionId, &Session)> {
        self.sessions
            .iter()
            .enumerate()
            .map(|(index, session)| (SessionId::new(index), session))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_alternance_without_reference_is_constant() {
        let planning = SemesterPlanning::new(WeekParity::B);
        assert_eq!(planning.alternance_for(date(2026, 1, 5)), WeekParity::B);
        assert_eq!(planning.alternance_for(date(2027, 6, 30)), WeekParity::B);
    }

    #[test]
    fn test_alternance_flips_every_week_from_reference() {
        // Wednesday 2026-10-21, week of Monday 19th is an A week
        let planning = SemesterPlanning::new(WeekParity::A).with_reference_date(date(2026, 10, 21));

        assert_eq!(planning.alternance_for(date(2026, 10, 19)), WeekParity::A);
        assert_eq!(planning.alternance_for(date(2026, 10, 25)), WeekParity::A);
        assert_eq!(planning.alternance_for(date(2026, 10, 26)), WeekParity::B);
        assert_eq!(planning.alternance_for(date(2026, 11, 2)), WeekParity::A);
        assert_eq!(planning.alternance_for(date(2026, 10, 18)), WeekParity::B);
        assert_eq!(planning.alternance_for(date(2026, 10, 5)), WeekParity::A);
    }

    #[test]
    fn test_schedule_iter_assigns_positional_ids() {
        let schedule: Schedule = serde_json::from_str(
            r#"{"semester":{"weekAlternance":"A"},"sessions":[
                {"name":"A","day":"MONDAY","startHour":8,"startMin":0,"endHour":10,"endMin":0},
                {"name":"B","day":"MONDAY","startHour":8,"startMin":0,"endHour":10,"endMin":0}
            ]}"#,
        )
        .unwrap();

        let ids: Vec<_> = schedule.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![SessionId::new(0), SessionId::new(1)]);
        let names: Vec<_> = schedule.iter().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
