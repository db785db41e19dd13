use common::Goal;
use stylist::yew::styled_component;
use yew::prelude::*;
use yew_router::prelude::*;

use super::status::status_style;
use crate::common::format::format_percent;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct GoalCardProps {
    pub goal: Goal,
}

/// Tappable summary of one goal; opens the goal detail page.
#[styled_component(GoalCard)]
pub fn goal_card(props: &GoalCardProps) -> Html {
    let navigator = use_navigator();
    let goal = &props.goal;
    let status = status_style(goal.status);

    let on_click = {
        let goal_id = goal.id;
        Callback::from(move |_: MouseEvent| match &navigator {
            Some(navigator) => navigator.push(&Route::GoalDetail { id: goal_id }),
            None => log::warn!("No router available, cannot open goal {}", goal_id),
        })
    };

    let accent = css!(
        r#"
        border-left: 4px solid ${color};
        .status-icon { color: ${color}; }
        .status-badge { background-color: ${color}; color: #fff; border: none; }
        "#,
        color = status.color,
    );

    html! {
        <div
            class={classes!("card", "bg-base-100", "shadow-md", "hover:shadow-lg", "transition-shadow", "cursor-pointer", accent)}
            onclick={on_click}
        >
            <div class="card-body p-4 gap-2">
                <div class="flex items-center gap-3 min-w-0">
                    <i class={classes!("status-icon", "text-xl", status.icon)}></i>
                    <h3 class="font-semibold text-base truncate flex-1 min-w-0">{&goal.title}</h3>
                </div>

                {if let Some(description) = goal.description_text() {
                    html! {
                        <p class="text-sm text-base-content/70 line-clamp-2">{description}</p>
                    }
                } else {
                    html! {}
                }}

                <div class="flex justify-between items-center mt-1">
                    <span class="badge badge-sm status-badge">{status.label}</span>
                    <span class="text-sm font-semibold">{format_percent(goal.progress)}</span>
                </div>
            </div>
        </div>
    }
}
