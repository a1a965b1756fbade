use std::fmt;

use crate::workout::{pace, speed, ActivityType, Coords, WorkoutDraft};

/// Raw values typed into the form, as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInputs {
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Distance => "Distance",
            Field::Duration => "Duration",
            Field::Cadence => "Cadence",
            Field::Elevation => "Elevation",
        })
    }
}

/// Values computed from distance and duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derived {
    Pace,
    Speed,
}

impl fmt::Display for Derived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Derived::Pace => "Pace",
            Derived::Speed => "Speed",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} has to be a number")]
    NotFinite(Field),
    #[error("{0} has to be a positive number")]
    NotPositive(Field),
    /// Inputs are fine on their own but the derived value overflows.
    #[error("{0} is out of range, check distance and duration")]
    OutOfRange(Derived),
}

struct FieldRule {
    field: Field,
    positive: bool,
}

const fn rule(field: Field, positive: bool) -> FieldRule {
    FieldRule { field, positive }
}

const RUNNING_RULES: &[FieldRule] = &[
    rule(Field::Distance, true),
    rule(Field::Duration, true),
    rule(Field::Cadence, true),
];

const CYCLING_RULES: &[FieldRule] = &[
    rule(Field::Distance, true),
    rule(Field::Duration, true),
    rule(Field::Elevation, false),
];

fn rules(activity: ActivityType) -> &'static [FieldRule] {
    match activity {
        ActivityType::Running => RUNNING_RULES,
        ActivityType::Cycling => CYCLING_RULES,
    }
}

/// Reads an input the way a number input coerces its value: blank is zero,
/// garbage is NaN.
pub fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.;
    }
    raw.parse().unwrap_or(f64::NAN)
}

impl FormInputs {
    fn value(&self, field: Field) -> f64 {
        parse_number(match field {
            Field::Distance => &self.distance,
            Field::Duration => &self.duration,
            Field::Cadence => &self.cadence,
            Field::Elevation => &self.elevation,
        })
    }
}

/// Checks the fields `activity` needs and builds a draft at `at`.
/// Fails on the first offending field, or when the derived pace or speed
/// would not be a finite number.
pub fn validate(
    activity: ActivityType,
    inputs: &FormInputs,
    at: Coords,
) -> Result<WorkoutDraft, ValidationError> {
    for rule in rules(activity) {
        let value = inputs.value(rule.field);
        if !value.is_finite() {
            return Err(ValidationError::NotFinite(rule.field));
        }
        if rule.positive && value <= 0. {
            return Err(ValidationError::NotPositive(rule.field));
        }
    }

    let distance = inputs.value(Field::Distance);
    let duration = inputs.value(Field::Duration);

    let (value, derived) = match activity {
        ActivityType::Running => (pace(distance, duration), Derived::Pace),
        ActivityType::Cycling => (speed(distance, duration), Derived::Speed),
    };
    if !value.is_finite() {
        return Err(ValidationError::OutOfRange(derived));
    }

    Ok(match activity {
        ActivityType::Running => {
            WorkoutDraft::running(at, distance, duration, inputs.value(Field::Cadence))
        }
        ActivityType::Cycling => {
            WorkoutDraft::cycling(at, distance, duration, inputs.value(Field::Elevation))
        }
    })
}
