use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::layout::Layout;
use crate::pages::goal_detail::GoalDetailPage;
use crate::pages::goals::GoalsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/goals")]
    Goals,
    #[at("/goals/:id")]
    GoalDetail { id: i32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="Dashboard"><Dashboard /></Layout> }
        }
        Route::Goals => {
            log::trace!("Rendering Goals page");
            html! { <Layout title="Goals"><GoalsPage /></Layout> }
        }
        Route::GoalDetail { id } => {
            log::trace!("Rendering Goal Detail page for ID: {}", id);
            html! { <Layout title="Goal"><GoalDetailPage key={id} goal_id={id} /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Goals.to_path(), "/goals");
        assert_eq!(Route::GoalDetail { id: 42 }.to_path(), "/goals/42");
    }

    #[test]
    fn test_recognize_goal_detail() {
        assert_eq!(
            Route::recognize("/goals/7"),
            Some(Route::GoalDetail { id: 7 })
        );
        assert_eq!(Route::recognize("/goals"), Some(Route::Goals));
    }
}
