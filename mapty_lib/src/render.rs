//! Display models for workouts. Nothing here touches the DOM or the map.

use crate::workout::{Activity, ActivityType, Workout};

pub fn activity_icon(activity: ActivityType) -> &'static str {
    match activity {
        ActivityType::Running => "🏃‍♂️",
        ActivityType::Cycling => "🚴‍♀️",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Detail {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// One entry of the workout list.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutCard {
    pub id: String,
    pub class: String,
    pub title: String,
    pub details: Vec<Detail>,
}

impl WorkoutCard {
    pub fn for_workout(workout: &Workout) -> Self {
        let activity = workout.activity_type();
        let mut details = vec![
            Detail::new(activity_icon(activity), workout.distance_km().to_string(), "km"),
            Detail::new("⏱", workout.duration_min().to_string(), "min"),
        ];

        match workout.activity() {
            Activity::Running(running) => {
                let pace = format!("{:.1}", running.pace_min_per_km());
                details.push(Detail::new("⚡️", pace, "min/km"));
                details.push(Detail::new("🦶🏼", running.cadence_spm().to_string(), "spm"));
            }
            Activity::Cycling(cycling) => {
                let speed = format!("{:.1}", cycling.speed_km_per_h());
                details.push(Detail::new("⚡️", speed, "km/h"));
                details.push(Detail::new("⛰", cycling.elevation_gain_m().to_string(), "m"));
            }
        }

        Self {
            id: workout.id().to_owned(),
            class: format!("workout workout--{activity}"),
            title: workout.description().to_owned(),
            details,
        }
    }
}

/// Popup attached to a workout's marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub content: String,
    pub class_name: String,
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl MarkerPopup {
    pub fn for_workout(workout: &Workout) -> Self {
        let activity = workout.activity_type();
        Self {
            content: format!("{} {}", activity_icon(activity), workout.description()),
            class_name: format!("{activity}-popup"),
            max_width: 250.,
            min_width: 100.,
            auto_close: false,
            close_on_click: false,
        }
    }
}
