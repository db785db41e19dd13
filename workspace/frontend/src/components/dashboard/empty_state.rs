use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(EmptyState)]
pub fn empty_state() -> Html {
    let navigator = use_navigator();

    let on_get_started = Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.push(&Route::Goals),
        None => log::warn!("No router available, cannot open goals"),
    });

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body items-center text-center">
                <i class="fas fa-flag text-5xl text-base-content/30"></i>
                <h2 class="card-title mt-2">{"No goals yet"}</h2>
                <p class="text-sm text-base-content/70">
                    {"Start tracking your career growth by setting your first goal."}
                </p>
                <div class="card-actions mt-4">
                    <button class="btn btn-primary" onclick={on_get_started}>
                        <i class="fas fa-plus"></i>
                        {" Create Your First Goal"}
                    </button>
                </div>
            </div>
        </div>
    }
}
