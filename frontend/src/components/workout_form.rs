use gloo_console::warn;
use mapty_lib::{validation::FormInputs, ActivityType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub activity: ActivityType,
    pub on_activity_change: Callback<ActivityType>,
    pub on_submit: Callback<FormInputs>,
    pub on_cancel: Callback<()>,
}

/// The new-workout form. Mounted only while the form is visible, so every
/// opening starts with empty inputs.
#[function_component]
pub fn WorkoutForm(props: &WorkoutFormProps) -> Html {
    let distance = use_state(String::new);
    let duration = use_state(String::new);
    let cadence = use_state(String::new);
    let elevation = use_state(String::new);
    let distance_ref = use_node_ref();

    {
        let distance_ref = distance_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = distance_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        });
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_type_change = {
        let on_activity_change = props.on_activity_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<ActivityType>() {
                Ok(activity) => on_activity_change.emit(activity),
                Err(err) => warn!(err.to_string()),
            }
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let distance = distance.clone();
        let duration = duration.clone();
        let cadence = cadence.clone();
        let elevation = elevation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(FormInputs {
                distance: (*distance).clone(),
                duration: (*duration).clone(),
                cadence: (*cadence).clone(),
                elevation: (*elevation).clone(),
            });
        })
    };

    let onkeydown = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_cancel.emit(());
            }
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let row_class = |shown: bool| if shown { "form__row" } else { "form__row form__row--hidden" };
    let running = props.activity == ActivityType::Running;

    html! {
        <form class="form" {onsubmit} {onkeydown}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" onchange={on_type_change}>
                    { for ActivityType::ALL.iter().map(|activity| html! {
                        <option value={activity.as_str()} selected={*activity == props.activity}>
                            {activity.label()}
                        </option>
                    }) }
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input
                    class="form__input form__input--distance"
                    placeholder="km"
                    inputmode="decimal"
                    ref={distance_ref}
                    value={(*distance).clone()}
                    oninput={bind(&distance)}
                />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    inputmode="decimal"
                    value={(*duration).clone()}
                    oninput={bind(&duration)}
                />
            </div>
            <div class={row_class(running)}>
                <label class="form__label">{"Cadence"}</label>
                <input
                    class="form__input form__input--cadence"
                    placeholder="step/min"
                    inputmode="decimal"
                    value={(*cadence).clone()}
                    oninput={bind(&cadence)}
                />
            </div>
            <div class={row_class(!running)}>
                <label class="form__label">{"Elev Gain"}</label>
                <input
                    class="form__input form__input--elevation"
                    placeholder="meters"
                    inputmode="decimal"
                    value={(*elevation).clone()}
                    oninput={bind(&elevation)}
                />
            </div>
            <button class="form__btn">{"OK"}</button>
            <button
                type="button"
                class="form__btn form__btn--cancel"
                onclick={on_cancel_click}
            >
                {"Cancel"}
            </button>
        </form>
    }
}
