use components::{workout_form::WorkoutForm, workout_list::WorkoutList};
use gloo_console::{error, info, warn};
use gloo_utils::{document, window};
use leaflet_map::LeafletMap;
use mapty_lib::{
    form::FormState, geolocation::GeolocationError, validation::FormInputs, ActivityType, AppError,
    Coords, Mapty,
};
use storage::LocalStorage;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, Node};
use yew::prelude::*;

mod components;
mod config;
mod geolocation;
mod leaflet_map;
mod storage;

enum MainMsg {
    Located(Result<Coords, GeolocationError>),
    MapClicked(Coords),
    ActivityChanged(ActivityType),
    Submit(FormInputs),
    CancelForm,
    SelectWorkout(String),
    Reset,
}

struct Model {
    app: Mapty<LocalStorage, LeafletMap>,
    container: HtmlElement,
}

impl Model {
    fn report(&self, result: Result<(), AppError>) {
        match result {
            Ok(()) => {}
            Err(err) if err.is_user_facing() => {
                let message = err.to_string();
                warn!(&message);
                if let Err(err) = window().alert_with_message(&message) {
                    error!("Failed to show alert", err);
                }
            }
            Err(err) => info!(err.to_string()),
        }
    }

    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let container = document().create_element("div").unwrap();
        let container: HtmlElement = container.dyn_into().unwrap();
        container.set_id("map");
        container.set_class_name("map");

        let app = Mapty::start(LocalStorage::open(), config::load());
        info!(format!("Restored {} workouts", app.workouts().len()));

        let cb = ctx.link().callback(MainMsg::Located);
        spawn_local(async move {
            cb.emit(geolocation::current_position().await);
        });

        Self { app, container }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Located(position) => {
                let container = self.container.clone();
                let map_config = self.app.config().map.clone();
                let on_click = ctx.link().callback(MainMsg::MapClicked);
                let open_map = move || LeafletMap::new(&container, &map_config, on_click);
                let result = self.app.on_position(position, open_map);
                self.report(result);
                false
            }
            MainMsg::MapClicked(at) => {
                self.app.show_form(at);
                true
            }
            MainMsg::ActivityChanged(activity) => {
                self.app.select_activity(activity);
                true
            }
            MainMsg::Submit(inputs) => {
                let result = self.app.submit(&inputs);
                self.report(result);
                true
            }
            MainMsg::CancelForm => {
                self.app.cancel_form();
                true
            }
            MainMsg::SelectWorkout(id) => {
                let result = self.app.move_to_workout(&id);
                self.report(result);
                false
            }
            MainMsg::Reset => {
                if !window().confirm_with_message("Delete all workouts?").unwrap_or(false) {
                    return false;
                }
                match self.app.reset() {
                    Ok(()) => {
                        if let Err(err) = window().location().reload() {
                            error!("Failed to reload", err);
                        }
                    }
                    Err(err) => self.report(Err(err)),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_activity_change = link.callback(MainMsg::ActivityChanged);
        let on_submit = link.callback(MainMsg::Submit);
        let on_cancel = link.callback(|()| MainMsg::CancelForm);
        let on_select = link.callback(MainMsg::SelectWorkout);
        let on_reset = link.callback(|_: MouseEvent| MainMsg::Reset);

        html! {
            <>
                <div class="sidebar">
                    <ul class="workouts">
                        if let FormState::Visible { activity, .. } = self.app.form() {
                            <WorkoutForm {activity} {on_activity_change} {on_submit} {on_cancel} />
                        }
                        <WorkoutList cards={self.app.cards()} {on_select} />
                    </ul>
                    if !self.app.workouts().is_empty() {
                        <button class="reset-btn" onclick={on_reset}>
                            {"Delete all workouts"}
                        </button>
                    }
                </div>
                {self.render_map()}
            </>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
