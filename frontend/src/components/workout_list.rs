use mapty_lib::render::WorkoutCard;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutListProps {
    pub cards: Vec<WorkoutCard>,
    pub on_select: Callback<String>,
}

#[function_component]
pub fn WorkoutList(props: &WorkoutListProps) -> Html {
    html! {
        <>
            { for props.cards.iter().map(|card| {
                let on_select = props.on_select.clone();
                let id = card.id.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id.clone()));

                html! {
                    <li class={card.class.clone()} data-id={card.id.clone()} {onclick}>
                        <h2 class="workout__title">{card.title.clone()}</h2>
                        { for card.details.iter().map(|detail| html! {
                            <div class="workout__details">
                                <span class="workout__icon">{detail.icon}</span>
                                <span class="workout__value">{detail.value.clone()}</span>
                                <span class="workout__unit">{detail.unit}</span>
                            </div>
                        }) }
                    </li>
                }
            }) }
        </>
    }
}
