use chrono::{Local, TimeZone, Utc};
use mapty_lib::{
    config::AppConfig,
    form::FormState,
    geolocation::GeolocationError,
    map::{MapView, PanOptions},
    render::MarkerPopup,
    storage::{KeyValueStore, MemoryStore},
    validation::{Derived, Field, FormInputs, ValidationError},
    workout::Activity,
    ActivityType, AppError, Coords, Mapty, Workout,
};

#[derive(Default)]
struct RecordingMap {
    views: Vec<(Coords, f64, PanOptions)>,
    markers: Vec<(Coords, MarkerPopup)>,
}

impl MapView for RecordingMap {
    fn set_view(&mut self, center: Coords, zoom: f64, pan: PanOptions) {
        self.views.push((center, zoom, pan));
    }

    fn add_marker(&mut self, at: Coords, popup: &MarkerPopup) {
        self.markers.push((at, popup.clone()));
    }
}

type App = Mapty<MemoryStore, RecordingMap>;

fn running(distance: &str, duration: &str, cadence: &str) -> FormInputs {
    FormInputs {
        distance: distance.into(),
        duration: duration.into(),
        cadence: cadence.into(),
        ..Default::default()
    }
}

fn cycling(distance: &str, duration: &str, elevation: &str) -> FormInputs {
    FormInputs {
        distance: distance.into(),
        duration: duration.into(),
        elevation: elevation.into(),
        ..Default::default()
    }
}

fn started_with_map() -> App {
    let mut app = App::start(MemoryStore::new(), AppConfig::default());
    app.on_position(Ok(Coords(51.5, -0.1)), RecordingMap::default).unwrap();
    app
}

#[test]
fn running_submission_adds_one_record() {
    let mut app = started_with_map();
    let now = Utc.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap();

    app.show_form(Coords(51.5, -0.1));
    app.submit_at(&running("5", "30", "178"), now).unwrap();

    assert_eq!(app.workouts().len(), 1);
    let workout = &app.workouts()[0];
    let Activity::Running(run) = workout.activity() else {
        panic!("expected a running workout");
    };
    assert_eq!(run.pace_min_per_km(), 6.0);
    assert_eq!(run.cadence_spm(), 178.);
    assert_eq!(workout.coordinates(), Coords(51.5, -0.1));
    let date = now.with_timezone(&Local).format("%B %-d").to_string();
    assert_eq!(workout.description(), format!("Running on {date}"));

    assert_eq!(app.form(), FormState::Hidden);
    let markers = &app.map().unwrap().view().markers;
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].0, Coords(51.5, -0.1));
    assert_eq!(markers[0].1.class_name, "running-popup");
}

#[test]
fn cycling_submission_computes_speed() {
    let mut app = started_with_map();

    app.show_form(Coords(46.2, 7.3));
    app.select_activity(ActivityType::Cycling);
    app.submit(&cycling("20", "60", "300")).unwrap();

    let Activity::Cycling(ride) = app.workouts()[0].activity() else {
        panic!("expected a cycling workout");
    };
    assert_eq!(ride.speed_km_per_h(), 20.0);
    assert_eq!(ride.elevation_gain_m(), 300.);
}

#[test]
fn invalid_submission_changes_nothing() {
    let mut app = started_with_map();
    app.show_form(Coords(51.5, -0.1));

    let err = app.submit(&running("-1", "30", "178")).unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation(ValidationError::NotPositive(Field::Distance))
    ));
    assert!(err.is_user_facing());
    assert!(app.workouts().is_empty());
    assert!(app.form().is_visible());
    assert_eq!(app.form().pending(), Some(Coords(51.5, -0.1)));
    assert!(app.map().unwrap().view().markers.is_empty());
    assert_eq!(app.store().inner().get("workouts").unwrap(), None);
}

#[test]
fn overflowing_speed_is_rejected_and_history_survives() {
    let mut app = started_with_map();
    app.show_form(Coords(1., 2.));
    app.submit(&running("5", "30", "178")).unwrap();
    let saved = app.store().inner().get("workouts").unwrap();

    app.show_form(Coords(3., 4.));
    app.select_activity(ActivityType::Cycling);
    let err = app.submit(&cycling("1e308", "1e-300", "0")).unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation(ValidationError::OutOfRange(Derived::Speed))
    ));
    assert_eq!(app.workouts().len(), 1);
    assert_eq!(app.map().unwrap().view().markers.len(), 1);
    assert_eq!(app.store().inner().get("workouts").unwrap(), saved);

    let restarted = App::start(app.store().inner().clone(), AppConfig::default());
    assert_eq!(restarted.workouts(), app.workouts());
}

#[test]
fn one_unreadable_record_does_not_wipe_the_history() {
    let mut app = started_with_map();
    app.show_form(Coords(1., 2.));
    app.submit(&running("5", "30", "178")).unwrap();
    app.show_form(Coords(3., 4.));
    app.submit(&running("10", "50", "170")).unwrap();

    let raw = app.store().inner().get("workouts").unwrap().unwrap();
    let mut records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    records[0]["paceMinPerKm"] = serde_json::Value::Null;
    let mut backend = app.store().inner().clone();
    backend
        .set("workouts", &serde_json::to_string(&records).unwrap())
        .unwrap();

    let restarted = App::start(backend, AppConfig::default());

    assert_eq!(restarted.workouts(), &app.workouts()[1..]);
}

#[test]
fn workouts_survive_a_restart() {
    let mut app = started_with_map();
    app.show_form(Coords(1., 2.));
    app.submit(&running("5", "30", "178")).unwrap();
    app.show_form(Coords(3., 4.));
    app.select_activity(ActivityType::Cycling);
    app.submit(&cycling("20", "60", "-5")).unwrap();
    let before: Vec<Workout> = app.workouts().to_vec();

    let restarted = App::start(app.store().inner().clone(), AppConfig::default());

    assert_eq!(restarted.workouts(), before.as_slice());
    assert_eq!(restarted.cards().len(), 2);
}

#[test]
fn restored_workouts_get_markers_when_the_map_loads() {
    let mut app = started_with_map();
    app.show_form(Coords(1., 2.));
    app.submit(&running("5", "30", "178")).unwrap();

    let mut restarted = App::start(app.store().inner().clone(), AppConfig::default());
    assert!(restarted.map().is_none());
    restarted
        .on_position(Ok(Coords(10., 20.)), RecordingMap::default)
        .unwrap();

    let view = restarted.map().unwrap().view();
    assert_eq!(view.views[0], (Coords(10., 20.), 13., PanOptions::INSTANT));
    assert_eq!(view.markers.len(), 1);
    assert_eq!(view.markers[0].0, Coords(1., 2.));
}

#[test]
fn list_click_recenters_on_the_workout() {
    let mut app = started_with_map();
    app.show_form(Coords(48.85, 2.35));
    app.submit(&running("5", "30", "178")).unwrap();
    let id = app.workouts()[0].id().to_owned();

    app.move_to_workout(&id).unwrap();

    let (center, zoom, pan) = *app.map().unwrap().view().views.last().unwrap();
    assert_eq!(center, Coords(48.85, 2.35));
    assert_eq!(zoom, 13.);
    assert!(pan.animate);
    assert_eq!(pan.duration_secs, 1.);
}

#[test]
fn denied_position_leaves_the_map_unloaded() {
    let mut app = App::start(MemoryStore::new(), AppConfig::default());

    let err = app
        .on_position(Err(GeolocationError::PermissionDenied), RecordingMap::default)
        .unwrap_err();

    assert_eq!(err.to_string(), "Could not get your position");
    assert!(app.map().is_none());
}

#[test]
fn denied_position_uses_the_configured_fallback() {
    let mut config = AppConfig::default();
    config.map.fallback_center = Some(Coords(52.52, 13.4));
    let mut app = App::start(MemoryStore::new(), config);

    let located = app.on_position(Err(GeolocationError::Timeout), RecordingMap::default);
    assert!(located.is_err());

    let view = app.map().unwrap().view();
    assert_eq!(view.views[0].0, Coords(52.52, 13.4));
}

#[test]
fn cancel_hides_the_form_without_recording() {
    let mut app = started_with_map();
    app.show_form(Coords(0., 0.));
    app.cancel_form();

    assert_eq!(app.form(), FormState::Hidden);
    assert!(matches!(
        app.submit(&running("5", "30", "178")),
        Err(AppError::NoPendingLocation)
    ));
    assert!(app.workouts().is_empty());
}

#[test]
fn reset_clears_storage_and_next_start_is_empty() {
    let mut app = started_with_map();
    app.show_form(Coords(0., 0.));
    app.submit(&running("5", "30", "178")).unwrap();

    app.reset().unwrap();

    assert!(app.workouts().is_empty());
    assert_eq!(app.store().inner().get("workouts").unwrap(), None);
    let restarted = App::start(app.store().inner().clone(), AppConfig::default());
    assert!(restarted.workouts().is_empty());
}

#[test]
fn corrupt_storage_starts_empty() {
    let mut backend = MemoryStore::new();
    backend.set("workouts", "[{\"broken\": true").unwrap();

    let app = App::start(backend, AppConfig::default());

    assert!(app.workouts().is_empty());
}
