use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::hooks::{use_focus_effect, FetchAction, FetchGeneration, FetchState, FetchTicket};

/// Turn a finished request into the action to dispatch. `None` means the
/// ticket was superseded or the component is gone, so state stays untouched
/// and no toast is raised.
pub fn settle<T, E: Display>(
    generation: &FetchGeneration,
    ticket: FetchTicket,
    result: Result<T, E>,
) -> Option<FetchAction<T>> {
    if !generation.is_current(ticket) {
        log::debug!("Discarding result of superseded fetch {:?}", ticket);
        return None;
    }

    Some(match result {
        Ok(data) => FetchAction::Loaded(data),
        Err(err) => {
            log::warn!("Fetch failed: {}", err);
            FetchAction::Failed(err.to_string())
        }
    })
}

/// Fetch on mount and on every focus event.
///
/// Each request takes a fresh ticket from the component's [`FetchGeneration`];
/// results of superseded requests, and anything arriving after unmount, are
/// dropped. Failures keep the previous data and raise `error_message` as an
/// error toast.
#[hook]
pub fn use_focus_fetch<T, E, F, Fut>(
    fetch_fn: F,
    error_message: &'static str,
) -> (UseReducerHandle<FetchState<T>>, Callback<()>)
where
    T: Clone + 'static,
    E: Display + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let fetch_state = use_reducer(FetchState::<T>::pending);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));
    let generation: Rc<RefCell<FetchGeneration>> = use_mut_ref(FetchGeneration::default);

    let refetch = {
        let fetch_state = fetch_state.clone();
        let generation = generation.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = (*fetch_fn).clone();
            let generation = generation.clone();

            let ticket = generation.borrow_mut().next();
            fetch_state.dispatch(FetchAction::Started);

            wasm_bindgen_futures::spawn_local(async move {
                let result = (*fetch_fn)().await;
                let Some(action) = settle(&generation.borrow(), ticket, result) else {
                    return;
                };

                if matches!(action, FetchAction::Failed(_)) {
                    if let Some(toast_ctx) = &toast_ctx {
                        toast_ctx.show_error(error_message.to_string());
                    }
                }
                fetch_state.dispatch(action);
            });
        })
    };

    use_focus_effect(refetch.clone());

    // Late responses must not touch an unmounted component
    use_effect_with((), move |_| move || generation.borrow_mut().invalidate());

    (fetch_state, refetch)
}
