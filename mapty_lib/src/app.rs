use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    form::FormState,
    geolocation::GeolocationError,
    map::{MapController, MapView},
    render::WorkoutCard,
    storage::{KeyValueStore, StorageError, WorkoutStore},
    validation::{validate, FormInputs, ValidationError},
    workout::{ActivityType, Coords, Workout},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not get your position")]
    Geolocation(#[from] GeolocationError),
    #[error("Could not save your workouts ({0})")]
    Storage(#[from] StorageError),
    #[error("Click on the map to choose where the workout took place")]
    NoPendingLocation,
    #[error("the map is not loaded")]
    MapUnavailable,
    #[error("no workout with id {0}")]
    UnknownWorkout(String),
}

impl AppError {
    /// Whether the error should be shown to the user rather than just logged.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, AppError::MapUnavailable | AppError::UnknownWorkout(_))
    }
}

/// Application state: the workouts, the form, the map and where it all gets saved.
pub struct Mapty<S, M> {
    config: AppConfig,
    store: WorkoutStore<S>,
    workouts: Vec<Workout>,
    form: FormState,
    map: Option<MapController<M>>,
}

impl<S: KeyValueStore, M: MapView> Mapty<S, M> {
    /// Restores saved workouts. The map is loaded later, once a position is known.
    pub fn start(store: S, config: AppConfig) -> Self {
        let store = WorkoutStore::new(store, config.storage_key.clone());
        let workouts = store.load();

        Self {
            config,
            store,
            workouts,
            form: FormState::Hidden,
            map: None,
        }
    }

    /// Handles the answer to the position request. On failure the map is opened at the
    /// configured fallback, if any, and the error is still returned so it can be reported.
    pub fn on_position<F>(
        &mut self,
        position: Result<Coords, GeolocationError>,
        open_map: F,
    ) -> Result<(), AppError>
    where
        F: FnOnce() -> M,
    {
        let (center, outcome) = match position {
            Ok(center) => (Some(center), Ok(())),
            Err(err) => {
                warn!("no position: {err}");
                (self.config.map.fallback_center, Err(AppError::from(err)))
            }
        };

        if let Some(center) = center {
            self.load_map(open_map(), center);
        }

        outcome
    }

    pub fn load_map(&mut self, view: M, center: Coords) {
        self.map = Some(MapController::load(view, center, &self.config.map, &self.workouts));
    }

    pub fn show_form(&mut self, at: Coords) {
        debug!("form opened at {at:?}");
        self.form.show(at);
    }

    pub fn select_activity(&mut self, activity: ActivityType) {
        self.form.select_activity(activity);
    }

    pub fn cancel_form(&mut self) {
        self.form.hide();
    }

    pub fn submit(&mut self, inputs: &FormInputs) -> Result<(), AppError> {
        self.submit_at(inputs, Utc::now())
    }

    /// Validates the form and records the workout. Nothing changes when validation fails.
    pub fn submit_at(&mut self, inputs: &FormInputs, now: DateTime<Utc>) -> Result<(), AppError> {
        let FormState::Visible { activity, pending } = self.form else {
            return Err(AppError::NoPendingLocation);
        };

        let draft = validate(activity, inputs, pending)?;
        let workout = Workout::new(draft, now);
        info!("new workout {}: {}", workout.id(), workout.description());

        if let Some(map) = &mut self.map {
            map.render_marker(&workout);
        }
        self.workouts.push(workout);
        self.form.hide();

        self.store.save(&self.workouts)?;
        Ok(())
    }

    pub fn move_to_workout(&mut self, id: &str) -> Result<(), AppError> {
        let target = self
            .workouts
            .iter()
            .find(|workout| workout.id() == id)
            .map(Workout::coordinates)
            .ok_or_else(|| AppError::UnknownWorkout(id.to_owned()))?;

        let map = self.map.as_mut().ok_or(AppError::MapUnavailable)?;
        map.move_to(target);
        Ok(())
    }

    /// Drops every workout, in storage and in memory.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.store.reset()?;
        self.workouts.clear();
        self.form.hide();
        info!("workouts cleared");
        Ok(())
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// List entries, newest first.
    pub fn cards(&self) -> Vec<WorkoutCard> {
        self.workouts.iter().rev().map(WorkoutCard::for_workout).collect()
    }

    pub fn form(&self) -> FormState {
        self.form
    }

    pub fn map(&self) -> Option<&MapController<M>> {
        self.map.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &WorkoutStore<S> {
        &self.store
    }
}
