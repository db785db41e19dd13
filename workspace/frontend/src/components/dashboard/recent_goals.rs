use common::Goal;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::goals::GoalCard;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RecentGoalsProps {
    pub goals: Vec<Goal>,
}

#[function_component(RecentGoals)]
pub fn recent_goals(props: &RecentGoalsProps) -> Html {
    html! {
        <section class="mt-6">
            <div class="flex justify-between items-center mb-3">
                <h2 class="text-lg font-bold">{"Recent Goals"}</h2>
                <Link<Route> to={Route::Goals} classes="link link-primary text-sm">{"View All"}</Link<Route>>
            </div>
            <div class="grid grid-cols-1 gap-3">
                { for props.goals.iter().map(|goal| html! {
                    <GoalCard key={goal.id} goal={goal.clone()} />
                }) }
            </div>
        </section>
    }
}
