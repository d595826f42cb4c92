//! Schedule Store
//!
//! Time/day-bound playlist bindings. Creation is permissive: overlapping
//! ranges, empty day sets, and end-before-start are all accepted; only an
//! empty name is rejected. Playlists are referenced by name.

use crate::models::{new_id, MealTime, Schedule, Weekday};

/// Input for a new schedule, passed straight from the form
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub name: String,
    pub playlist: String,
    pub meal_time: MealTime,
    pub days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
}

/// Partial update; only `Some` fields are applied
#[derive(Debug, Clone, Default)]
pub struct ScheduleUpdate {
    pub name: Option<String>,
    pub playlist: Option<String>,
    pub meal_time: Option<MealTime>,
    pub days: Option<Vec<Weekday>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    schedules: Vec<Schedule>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo data shown until real content is pushed
    pub fn sample() -> Self {
        let weekdays = vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri];
        let mut store = Self::new();
        store.create(NewSchedule {
            name: "Morning Schedule".to_string(),
            playlist: "Breakfast Menu".to_string(),
            meal_time: MealTime::Breakfast,
            days: weekdays.clone(),
            start_time: "06:00".to_string(),
            end_time: "11:00".to_string(),
        });
        store.create(NewSchedule {
            name: "Afternoon Schedule".to_string(),
            playlist: "Lunch Menu".to_string(),
            meal_time: MealTime::Lunch,
            days: Weekday::ALL.to_vec(),
            start_time: "11:00".to_string(),
            end_time: "15:00".to_string(),
        });
        store.create(NewSchedule {
            name: "Evening Schedule".to_string(),
            playlist: "Dinner Specials".to_string(),
            meal_time: MealTime::Dinner,
            days: vec![Weekday::Thu, Weekday::Fri, Weekday::Sat],
            start_time: "17:00".to_string(),
            end_time: "22:00".to_string(),
        });
        store
    }

    /// Append a schedule. No conflict detection: two schedules may claim
    /// the same meal time, days, and hours.
    pub fn create(&mut self, def: NewSchedule) -> bool {
        if def.name.is_empty() {
            return false;
        }
        self.schedules.push(Schedule {
            id: new_id(),
            name: def.name,
            playlist: def.playlist,
            meal_time: def.meal_time,
            days: def.days,
            start_time: def.start_time,
            end_time: def.end_time,
        });
        true
    }

    /// Apply the `Some` fields of `fields` to the matching schedule.
    /// Returns false when the id is unknown.
    pub fn update(&mut self, id: &str, fields: ScheduleUpdate) -> bool {
        let Some(schedule) = self.schedules.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        if let Some(name) = fields.name {
            schedule.name = name;
        }
        if let Some(playlist) = fields.playlist {
            schedule.playlist = playlist;
        }
        if let Some(meal_time) = fields.meal_time {
            schedule.meal_time = meal_time;
        }
        if let Some(days) = fields.days {
            schedule.days = days;
        }
        if let Some(start_time) = fields.start_time {
            schedule.start_time = start_time;
        }
        if let Some(end_time) = fields.end_time {
            schedule.end_time = end_time;
        }
        true
    }

    /// Unconditional delete; unknown ids are a silent no-op
    pub fn remove(&mut self, id: &str) {
        self.schedules.retain(|s| s.id != id);
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morning() -> NewSchedule {
        NewSchedule {
            name: "Morning".to_string(),
            playlist: "Breakfast Menu".to_string(),
            meal_time: MealTime::Breakfast,
            days: vec![Weekday::Mon, Weekday::Tue],
            start_time: "06:00".to_string(),
            end_time: "11:00".to_string(),
        }
    }

    #[test]
    fn test_create_and_remove() {
        let mut store = ScheduleStore::new();
        assert!(store.create(morning()));
        assert_eq!(store.len(), 1);

        let id = store.schedules()[0].id.clone();
        store.remove(&id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_empty_name_only() {
        let mut store = ScheduleStore::new();
        let mut unnamed = morning();
        unnamed.name = String::new();
        assert!(!store.create(unnamed));
        assert!(store.is_empty());
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let mut store = ScheduleStore::new();
        let mut inverted = morning();
        inverted.end_time = "05:00".to_string();
        assert!(store.create(inverted));
        assert_eq!(store.schedules()[0].start_time, "06:00");
        assert_eq!(store.schedules()[0].end_time, "05:00");
    }

    #[test]
    fn test_empty_day_set_is_accepted() {
        let mut store = ScheduleStore::new();
        let mut dayless = morning();
        dayless.days.clear();
        assert!(store.create(dayless));
        assert!(store.schedules()[0].days.is_empty());
    }

    #[test]
    fn test_overlapping_schedules_are_accepted() {
        let mut store = ScheduleStore::new();
        assert!(store.create(morning()));
        assert!(store.create(morning()));
        assert_eq!(store.len(), 2);
        assert_eq!(store.schedules()[0].meal_time, store.schedules()[1].meal_time);
    }

    #[test]
    fn test_update_applies_only_some_fields() {
        let mut store = ScheduleStore::new();
        store.create(morning());
        let id = store.schedules()[0].id.clone();

        assert!(store.update(&id, ScheduleUpdate {
            name: Some("Early Morning".to_string()),
            end_time: Some("10:30".to_string()),
            ..Default::default()
        }));

        let schedule = &store.schedules()[0];
        assert_eq!(schedule.name, "Early Morning");
        assert_eq!(schedule.end_time, "10:30");
        // untouched fields keep their values
        assert_eq!(schedule.playlist, "Breakfast Menu");
        assert_eq!(schedule.start_time, "06:00");
    }

    #[test]
    fn test_update_unknown_id_returns_false() {
        let mut store = ScheduleStore::new();
        assert!(!store.update("no-such-id", ScheduleUpdate::default()));
    }
}
