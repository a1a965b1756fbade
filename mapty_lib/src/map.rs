use tracing::debug;

use crate::{config::MapConfig, render::MarkerPopup, workout::{Coords, Workout}};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration_secs: f64,
}

impl PanOptions {
    pub const INSTANT: PanOptions = PanOptions {
        animate: false,
        duration_secs: 0.,
    };
}

/// The map widget. Implemented over leaflet in the frontend.
pub trait MapView {
    fn set_view(&mut self, center: Coords, zoom: f64, pan: PanOptions);
    /// Adds a marker with its popup opened.
    fn add_marker(&mut self, at: Coords, popup: &MarkerPopup);
}

pub struct MapController<M> {
    view: M,
    zoom: f64,
    pan_duration_secs: f64,
}

impl<M: MapView> MapController<M> {
    /// Centers `view` on `center` and puts a marker on every workout.
    pub fn load(mut view: M, center: Coords, config: &MapConfig, workouts: &[Workout]) -> Self {
        view.set_view(center, config.zoom, PanOptions::INSTANT);

        let mut controller = Self {
            view,
            zoom: config.zoom,
            pan_duration_secs: config.pan_duration_secs,
        };
        for workout in workouts {
            controller.render_marker(workout);
        }

        debug!("map loaded at {center:?} with {} markers", workouts.len());
        controller
    }

    pub fn render_marker(&mut self, workout: &Workout) {
        self.view
            .add_marker(workout.coordinates(), &MarkerPopup::for_workout(workout));
    }

    pub fn move_to(&mut self, target: Coords) {
        let pan = PanOptions {
            animate: true,
            duration_secs: self.pan_duration_secs,
        };
        self.view.set_view(target, self.zoom, pan);
    }

    pub fn view(&self) -> &M {
        &self.view
    }
}
