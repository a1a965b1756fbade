use std::{fmt, str::FromStr};

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Latitude and longitude in degrees, stored as `[lat, lng]`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// The tag that tells the variants apart, both in the form selector and in storage.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[default]
    Running,
    Cycling,
}

impl ActivityType {
    pub const ALL: [ActivityType; 2] = [ActivityType::Running, ActivityType::Cycling];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "running",
            ActivityType::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown activity type '{0}'")]
pub struct UnknownActivity(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(ActivityType::Running),
            "cycling" => Ok(ActivityType::Cycling),
            other => Err(UnknownActivity(other.to_owned())),
        }
    }
}

/// Minutes per kilometre.
pub fn pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Kilometres per hour.
pub fn speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Running {
    cadence_spm: f64,
    pace_min_per_km: f64,
}

impl Running {
    pub fn cadence_spm(&self) -> f64 {
        self.cadence_spm
    }

    pub fn pace_min_per_km(&self) -> f64 {
        self.pace_min_per_km
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cycling {
    elevation_gain_m: f64,
    speed_km_per_h: f64,
}

impl Cycling {
    pub fn elevation_gain_m(&self) -> f64 {
        self.elevation_gain_m
    }

    pub fn speed_km_per_h(&self) -> f64 {
        self.speed_km_per_h
    }
}

/// Variant specific data. Stored flattened into the workout record with a `type` tag.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Activity {
    Running(Running),
    Cycling(Cycling),
}

impl Activity {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            Activity::Running(_) => ActivityType::Running,
            Activity::Cycling(_) => ActivityType::Cycling,
        }
    }
}

/// Validated form input, waiting for a creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    coordinates: Coords,
    distance_km: f64,
    duration_min: f64,
    metric: DraftMetric,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DraftMetric {
    Cadence(f64),
    Elevation(f64),
}

impl WorkoutDraft {
    pub(crate) fn running(
        coordinates: Coords,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        Self {
            coordinates,
            distance_km,
            duration_min,
            metric: DraftMetric::Cadence(cadence_spm),
        }
    }

    pub(crate) fn cycling(
        coordinates: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self {
            coordinates,
            distance_km,
            duration_min,
            metric: DraftMetric::Elevation(elevation_gain_m),
        }
    }

    pub fn activity_type(&self) -> ActivityType {
        match self.metric {
            DraftMetric::Cadence(_) => ActivityType::Running,
            DraftMetric::Elevation(_) => ActivityType::Cycling,
        }
    }

    pub fn coordinates(&self) -> Coords {
        self.coordinates
    }
}

/// A finished workout. Never changes after construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    coordinates: Coords,
    distance_km: f64,
    duration_min: f64,
    description: String,
    #[serde(flatten)]
    activity: Activity,
}

impl Workout {
    pub fn new(draft: WorkoutDraft, created_at: DateTime<Utc>) -> Self {
        let WorkoutDraft {
            coordinates,
            distance_km,
            duration_min,
            metric,
        } = draft;

        let activity = match metric {
            DraftMetric::Cadence(cadence_spm) => Activity::Running(Running {
                cadence_spm,
                pace_min_per_km: pace(distance_km, duration_min),
            }),
            DraftMetric::Elevation(elevation_gain_m) => Activity::Cycling(Cycling {
                elevation_gain_m,
                speed_km_per_h: speed(distance_km, duration_min),
            }),
        };

        let description = Self::describe(
            activity.activity_type(),
            created_at.with_timezone(&Local).date_naive(),
        );

        Self {
            id: created_at.timestamp_millis().to_string(),
            created_at,
            coordinates,
            distance_km,
            duration_min,
            description,
            activity,
        }
    }

    /// "Running on April 14"
    pub fn describe(activity: ActivityType, date: NaiveDate) -> String {
        format!("{} on {}", activity.label(), date.format("%B %-d"))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coords {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn activity_type(&self) -> ActivityType {
        self.activity.activity_type()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        for (distance, duration) in [(5., 30.), (10., 42.5), (0.4, 3.), (42.195, 180.)] {
            let draft = WorkoutDraft::running(Coords(0., 0.), distance, duration, 170.);
            let workout = Workout::new(draft, noon(2024, 4, 14));
            let Activity::Running(running) = workout.activity() else {
                panic!("expected a running workout");
            };
            assert_eq!(running.pace_min_per_km(), duration / distance);
            assert_eq!(running.cadence_spm(), 170.);
        }
    }

    #[test]
    fn cycling_speed_is_distance_per_hour() {
        for (distance, duration) in [(20., 60.), (27., 95.), (3.3, 7.)] {
            let draft = WorkoutDraft::cycling(Coords(0., 0.), distance, duration, -12.);
            let workout = Workout::new(draft, noon(2024, 4, 14));
            let Activity::Cycling(cycling) = workout.activity() else {
                panic!("expected a cycling workout");
            };
            assert_eq!(cycling.speed_km_per_h(), distance / (duration / 60.));
            assert_eq!(cycling.elevation_gain_m(), -12.);
        }
    }

    #[test]
    fn description_uses_month_name_and_unpadded_day() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 4).unwrap();
        assert_eq!(Workout::describe(ActivityType::Running, date), "Running on April 4");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(Workout::describe(ActivityType::Cycling, date), "Cycling on December 25");
    }

    #[test]
    fn new_workout_takes_id_and_description_from_creation_time() {
        let created_at = noon(2024, 4, 14);
        let draft = WorkoutDraft::running(Coords(51.5, -0.1), 5., 30., 178.);
        let workout = Workout::new(draft, created_at);

        assert_eq!(workout.id(), created_at.timestamp_millis().to_string());
        assert_eq!(
            workout.description(),
            Workout::describe(ActivityType::Running, created_at.with_timezone(&Local).date_naive())
        );
        assert_eq!(workout.coordinates(), Coords(51.5, -0.1));
        assert_eq!(workout.activity_type(), ActivityType::Running);
    }

    #[test]
    fn serialized_record_is_flat_and_tagged() {
        let draft = WorkoutDraft::cycling(Coords(46.2, 7.3), 20., 60., 300.);
        let workout = Workout::new(draft, noon(2024, 6, 1));
        let value = serde_json::to_value(&workout).unwrap();

        assert_eq!(value["type"], "cycling");
        assert_eq!(value["coordinates"], serde_json::json!([46.2, 7.3]));
        assert_eq!(value["distanceKm"], 20.);
        assert_eq!(value["durationMin"], 60.);
        assert_eq!(value["elevationGainM"], 300.);
        assert_eq!(value["speedKmPerH"], 20.);
        assert!(value.get("cadenceSpm").is_none());
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn activity_type_parses_selector_values() {
        assert_eq!("running".parse::<ActivityType>(), Ok(ActivityType::Running));
        assert_eq!(" cycling ".parse::<ActivityType>(), Ok(ActivityType::Cycling));
        assert_eq!("swimming".parse::<ActivityType>(), Err(UnknownActivity("swimming".into())));
    }
}
