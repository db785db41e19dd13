use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

/// Error notification shown in the top-right corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
}

/// Visible toasts in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: usize,
    revision: u64,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: String) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.revision += 1;
        self.toasts.push(Toast { id, message });
        id
    }

    /// Remove a toast; unknown ids (already dismissed) are ignored.
    pub fn dismiss(&mut self, id: usize) {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        if self.toasts.len() != before {
            self.revision += 1;
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Bumped on every visible change.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<String>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_error(&self, message: String) {
        self.add_toast.emit(message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // Shared queue so timers and clicks never act on a stale snapshot
    let queue = use_mut_ref(ToastQueue::default);
    let revision = use_state(|| 0u64);

    let context = {
        let queue = queue.clone();
        let revision = revision.setter();

        use_memo((), move |_| {
            let remove_toast = {
                let queue = queue.clone();
                let revision = revision.clone();
                Callback::from(move |id: usize| {
                    let mut queue = queue.borrow_mut();
                    queue.dismiss(id);
                    revision.set(queue.revision());
                })
            };

            let add_toast = {
                let remove_toast = remove_toast.clone();
                Callback::from(move |message: String| {
                    log::debug!("Showing error toast: {}", message);
                    let id = {
                        let mut queue = queue.borrow_mut();
                        let id = queue.push(message);
                        revision.set(queue.revision());
                        id
                    };

                    // Auto-dismiss; closing by hand first is fine
                    let remove_toast = remove_toast.clone();
                    let duration = settings::get_settings().toast_duration_ms;
                    Timeout::new(duration, move || remove_toast.emit(id)).forget();
                })
            };

            ToastContext {
                add_toast,
                remove_toast,
            }
        })
    };

    let toasts = queue.borrow().toasts().to_vec();

    html! {
        <ContextProvider<ToastContext> context={(*context).clone()}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = context.remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} role="alert" class="alert alert-error shadow-lg">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" aria-label="Dismiss" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();

        let first = queue.push("Failed to load goals".to_string());
        let second = queue.push("Failed to load goals".to_string());

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[0].message, "Failed to load goals");
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one".to_string());
        let second = queue.push("two".to_string());

        queue.dismiss(first);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn test_dismiss_twice_is_harmless() {
        let mut queue = ToastQueue::default();
        let id = queue.push("one".to_string());

        queue.dismiss(id);
        let revision = queue.revision();
        queue.dismiss(id);

        assert!(queue.toasts().is_empty());
        assert_eq!(queue.revision(), revision);
    }
}
