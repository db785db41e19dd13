use yew::prelude::*;

use crate::common::format::format_percent;
use crate::components::goals::status::GREEN;

#[derive(Properties, PartialEq)]
pub struct CompletionCardProps {
    pub completion_rate: u32,
}

#[function_component(CompletionCard)]
pub fn completion_card(props: &CompletionCardProps) -> Html {
    let rate = props.completion_rate.min(100);

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{"Completion Rate"}</h2>
                    <span class="text-2xl font-bold" style={format!("color: {}", GREEN)}>
                        {format_percent(rate)}
                    </span>
                </div>
                <div class="w-full bg-base-300 rounded-full h-3 overflow-hidden mt-2">
                    <div
                        class="h-3 rounded-full transition-all"
                        style={format!("width: {}%; background-color: {}", rate, GREEN)}
                    ></div>
                </div>
            </div>
        </div>
    }
}
