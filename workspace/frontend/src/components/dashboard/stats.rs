use common::{GoalStatistics, GoalStatus};
use yew::prelude::*;

use crate::components::goals::status_style;

const TOTAL_COLOR: &str = "#2196F3";

#[derive(Debug, Clone, PartialEq)]
pub struct StatCardData {
    pub label: &'static str,
    pub value: usize,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Cards shown in the statistics grid, in display order.
pub fn stat_cards(stats: &GoalStatistics) -> [StatCardData; 3] {
    let completed = status_style(GoalStatus::Completed);
    let in_progress = status_style(GoalStatus::InProgress);

    [
        StatCardData {
            label: "Total Goals",
            value: stats.total,
            icon: "fas fa-bullseye",
            color: TOTAL_COLOR,
        },
        StatCardData {
            label: "Completed",
            value: stats.completed,
            icon: completed.icon,
            color: completed.color,
        },
        StatCardData {
            label: "In Progress",
            value: stats.in_progress,
            icon: in_progress.icon,
            color: in_progress.color,
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub card: StatCardData,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat place-items-center">
                <div class="stat-figure" style={format!("color: {}", card.color)}>
                    <i class={classes!(card.icon, "text-3xl")}></i>
                </div>
                <div class="stat-value" style={format!("color: {}", card.color)}>{card.value.to_string()}</div>
                <div class="stat-title">{card.label}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: GoalStatistics,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            { for stat_cards(&props.stats).into_iter().map(|card| {
                let key = card.label;
                html! { <StatCard key={key} card={card} /> }
            }) }
        </div>
    }
}
