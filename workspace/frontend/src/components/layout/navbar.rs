use yew::prelude::*;
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let session = use_context::<SessionContext>();
    let user_name = session
        .as_ref()
        .and_then(|ctx| ctx.session.display_name())
        .map(str::to_string);

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="app-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            {if let Some(name) = user_name {
                html! {
                    <div class="flex-none gap-2 px-4 text-sm text-base-content/70">
                        <i class="fas fa-user-circle"></i>
                        <span>{name}</span>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
