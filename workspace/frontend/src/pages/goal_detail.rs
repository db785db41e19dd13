use common::Goal;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::goal::find_goal;
use crate::common::fetch_hook::use_focus_fetch;
use crate::common::fetch_render::FetchRender;
use crate::common::format::{display_timestamp, format_percent};
use crate::components::goals::status_style;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct GoalDetailPageProps {
    pub goal_id: i32,
}

/// Width of the progress bar; the raw progress value is shown unclamped.
fn progress_width(progress: i32) -> i32 {
    progress.clamp(0, 100)
}

#[function_component(GoalDetailPage)]
pub fn goal_detail_page(props: &GoalDetailPageProps) -> Html {
    let goal_id = props.goal_id;
    let (goal_state, refetch) = use_focus_fetch(move || find_goal(goal_id), "Failed to load goal");

    let render = Callback::from(move |goal: Option<Goal>| match goal {
        Some(goal) => render_goal(&goal),
        None => html! {
            <div class="alert alert-warning">
                <i class="fas fa-search"></i>
                <span>{format!("Goal #{} was not found.", goal_id)}</span>
            </div>
        },
    });

    html! {
        <div class="space-y-4">
            <Link<Route> to={Route::Goals} classes="btn btn-ghost btn-sm">
                <i class="fas fa-arrow-left"></i>{" Back to goals"}
            </Link<Route>>
            <FetchRender<Option<Goal>>
                state={(*goal_state).clone()}
                render={render}
                on_retry={Some(refetch)}
            />
        </div>
    }
}

fn render_goal(goal: &Goal) -> Html {
    let status = status_style(goal.status);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-start gap-4">
                    <h2 class="card-title">
                        <i class={status.icon} style={format!("color: {}", status.color)}></i>
                        {&goal.title}
                    </h2>
                    <span class="badge" style={format!("background-color: {}; color: #fff", status.color)}>
                        {status.label}
                    </span>
                </div>

                {if let Some(description) = goal.description_text() {
                    html! { <p class="text-base-content/80 whitespace-pre-line">{description}</p> }
                } else {
                    html! { <p class="text-base-content/50 italic">{"No description"}</p> }
                }}

                <div class="w-full mt-4">
                    <div class="flex justify-between mb-2">
                        <span class="text-sm font-semibold">{"Progress"}</span>
                        <span class="text-sm font-semibold">{format_percent(goal.progress)}</span>
                    </div>
                    <div class="w-full bg-base-300 rounded-full h-3 overflow-hidden">
                        <div
                            class="h-3 rounded-full transition-all"
                            style={format!("width: {}%; background-color: {}", progress_width(goal.progress), status.color)}
                        ></div>
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4 mt-4 text-xs text-base-content/60">
                    <div>{"Created: "}{display_timestamp(goal.created_at(), &goal.created_at)}</div>
                    <div>{"Updated: "}{display_timestamp(goal.updated_at(), &goal.updated_at)}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_width_is_clamped() {
        assert_eq!(progress_width(45), 45);
        assert_eq!(progress_width(140), 100);
        assert_eq!(progress_width(-10), 0);
    }
}
