use common::Goal;
use yew::prelude::*;

use crate::api_client::goal::{list_goals, LOAD_GOALS_ERROR};
use crate::common::fetch_hook::use_focus_fetch;
use crate::common::fetch_render::FetchRenderList;
use crate::components::goals::GoalCard;

fn goal_item(goal: Goal) -> Html {
    let id = goal.id;
    html! { <GoalCard key={id} goal={goal} /> }
}

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
    let (goals_state, refetch) = use_focus_fetch(list_goals, LOAD_GOALS_ERROR);

    let render_item = Callback::from(goal_item);

    html! {
        <div class="space-y-4">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">{"All Goals"}</h2>
                {if let Some(goals) = goals_state.data() {
                    html! { <span class="badge badge-neutral">{format!("{} total", goals.len())}</span> }
                } else {
                    html! {}
                }}
            </div>
            <FetchRenderList<Goal>
                state={(*goals_state).clone()}
                render_item={render_item}
                on_retry={Some(refetch)}
                empty_message={"You haven't added any goals yet.".to_string()}
                container_class={"grid grid-cols-1 md:grid-cols-2 gap-4".to_string()}
            />
        </div>
    }
}
