use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use web_sys::window;
use yew::prelude::*;

/// localStorage key holding the serialized session written at sign-in.
pub const SESSION_STORAGE_KEY: &str = "careerboard_session";

const FALLBACK_DISPLAY_NAME: &str = "User";

/// Signed-in user as handed over by the auth flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Current caller. Read-only for the rest of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    /// Parse a stored session; malformed data yields an anonymous session.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed stored session: {}", e);
            Self::default()
        })
    }

    /// Load the session persisted by the auth flow.
    pub fn load() -> Self {
        let stored = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(SESSION_STORAGE_KEY).ok().flatten());

        match stored {
            Some(raw) => Self::from_json(&raw),
            None => {
                log::debug!("No stored session, continuing anonymously");
                Self::default()
            }
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.name.as_deref())
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Dashboard greeting; blank or missing names fall back to "User".
pub fn greeting(display_name: Option<&str>) -> String {
    let name = display_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_DISPLAY_NAME);
    format!("Welcome back, {}!", name)
}

thread_local! {
    static CURRENT_TOKEN: RefCell<Option<String>> = RefCell::new(None);
}

/// Bearer token of the active session, read by the API client.
pub fn current_token() -> Option<String> {
    CURRENT_TOKEN.with(|t| t.borrow().clone())
}

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Session,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| {
        let session = Session::load();
        CURRENT_TOKEN.with(|t| *t.borrow_mut() = session.bearer_token().map(str::to_string));
        session
    });

    let context = SessionContext {
        session: (*session).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_uses_display_name() {
        assert_eq!(greeting(Some("Ada")), "Welcome back, Ada!");
    }

    #[test]
    fn test_greeting_falls_back_to_user() {
        assert_eq!(greeting(None), "Welcome back, User!");
        assert_eq!(greeting(Some("")), "Welcome back, User!");
        assert_eq!(greeting(Some("   ")), "Welcome back, User!");
    }

    #[test]
    fn test_session_from_json() {
        let session = Session::from_json(
            r#"{"token": "abc", "user": {"id": 4, "name": "Grace", "email": "g@example.com"}}"#,
        );

        assert_eq!(session.bearer_token(), Some("abc"));
        assert_eq!(session.display_name(), Some("Grace"));
    }

    #[test]
    fn test_session_without_name() {
        let session = Session::from_json(r#"{"user": {"id": 4}}"#);

        assert_eq!(session.display_name(), None);
        assert_eq!(session.bearer_token(), None);
        assert_eq!(greeting(session.display_name()), "Welcome back, User!");
    }

    #[test]
    fn test_malformed_session_is_anonymous() {
        let session = Session::from_json("not json");

        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let session = Session::from_json(r#"{"token": ""}"#);

        assert_eq!(session.bearer_token(), None);
    }
}
