use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, VisibilityState};
use yew::prelude::*;

/// Fetched data plus request status.
///
/// `data` survives failed and in-flight requests so the last good value can be
/// shown again once loading clears.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// State before the first request settles: nothing to show yet.
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&String> {
        self.error.as_ref()
    }
}

#[derive(Debug, PartialEq)]
pub enum FetchAction<T> {
    Started,
    Loaded(T),
    Failed(String),
}

impl<T: Clone> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FetchAction::Started => FetchState {
                data: self.data.clone(),
                loading: true,
                error: None,
            },
            FetchAction::Loaded(data) => FetchState {
                data: Some(data),
                loading: false,
                error: None,
            },
            FetchAction::Failed(error) => FetchState {
                data: self.data.clone(),
                loading: false,
                error: Some(error),
            },
        };
        Rc::new(next)
    }
}

/// Token identifying one fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Monotonic request counter. Only the most recently issued ticket is current;
/// invalidating the counter (on unmount) retires every outstanding ticket.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    current: u64,
    invalidated: bool,
}

impl FetchGeneration {
    pub fn next(&mut self) -> FetchTicket {
        self.current += 1;
        FetchTicket(self.current)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        !self.invalidated && ticket.0 == self.current
    }

    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }
}

/// Emit `on_focus` on mount and whenever the page becomes visible again.
#[hook]
pub fn use_focus_effect(on_focus: Callback<()>) {
    use_effect_with((), move |_| {
        on_focus.emit(());

        let document = window().and_then(|w| w.document());
        let listener = document.map(|document| {
            let target = document.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if target.visibility_state() == VisibilityState::Visible {
                    log::debug!("Page became visible, refreshing");
                    on_focus.emit(());
                }
            });

            let function: &js_sys::Function = closure.as_ref().unchecked_ref();
            if let Err(e) = document.add_event_listener_with_callback("visibilitychange", function) {
                log::warn!("Failed to register visibility listener: {:?}", e);
            }
            (document, closure)
        });

        move || {
            if let Some((document, closure)) = listener {
                let function: &js_sys::Function = closure.as_ref().unchecked_ref();
                if let Err(e) = document.remove_event_listener_with_callback("visibilitychange", function) {
                    log::warn!("Failed to remove visibility listener: {:?}", e);
                }
            }
        }
    });
}
