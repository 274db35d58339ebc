//! Session bootstrap and the handle injected into the component tree.
//!
//! Everything that establishes or drops a session flows through
//! [`SessionHandle`]; the routes and widgets only ever read the state it
//! exposes. Token resolution itself lives in [`resolve_session`] so the
//! back-office guard can run the exact same check on its own schedule.

use std::rc::Rc;

use reqwest::StatusCode;
use shared::models::{AuthResponse, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::StorefrontClient;
use crate::auth::tokens;
use crate::bus::{self, Topic};

/// What the profile endpoint said about the stored access token.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionResolution {
    Authenticated(Box<User>),
    /// No access token in the store; the network was never touched.
    NoToken,
    /// The profile endpoint rejected the token.
    Rejected,
    /// The profile endpoint was unreachable or answered with a server error.
    Failed,
}

impl SessionResolution {
    /// The stored pair survives only when it resolved a user or was never
    /// consulted. Every failed profile fetch discards it.
    #[must_use]
    pub fn should_clear_tokens(&self) -> bool {
        matches!(self, Self::Rejected | Self::Failed)
    }
}

/// Resolve the stored tokens into a session.
pub async fn resolve_session(client: &StorefrontClient) -> SessionResolution {
    if tokens::access_token().is_none() {
        return SessionResolution::NoToken;
    }
    match client.get_profile().await {
        Ok(user) => SessionResolution::Authenticated(Box::new(user)),
        Err(err) if err.status() == Some(StatusCode::UNAUTHORIZED) => SessionResolution::Rejected,
        Err(_) => SessionResolution::Failed,
    }
}

/// Session state visible to the component tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// The stored tokens have not been resolved yet. Dependent UI shows
    /// placeholders instead of guessing.
    #[default]
    Bootstrapping,
    Authenticated(Box<User>),
    Anonymous,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub state: SessionState,
}

pub enum SessionAction {
    Resolved(SessionResolution),
    SignedIn(Box<User>),
    SignedOut,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = match action {
            SessionAction::Resolved(SessionResolution::Authenticated(user))
            | SessionAction::SignedIn(user) => SessionState::Authenticated(user),
            SessionAction::Resolved(_) | SessionAction::SignedOut => SessionState::Anonymous,
        };
        Rc::new(Self { state })
    }
}

/// Handle to the session, available everywhere below [`SessionProvider`].
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    inner: UseReducerHandle<Session>,
}

impl SessionHandle {
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.inner.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match &self.inner.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_bootstrapping(&self) -> bool {
        matches!(self.inner.state, SessionState::Bootstrapping)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }

    /// Adopt a fresh sign-in response: persist the tokens, install the user,
    /// and tell the rest of the UI.
    pub fn sign_in(&self, response: AuthResponse) {
        tokens::store(&response.access_token, &response.refresh_token);
        self.inner
            .dispatch(SessionAction::SignedIn(Box::new(response.user)));
        bus::publish(Topic::AuthStateChanged);
    }

    /// Drop the session. Purely local: the tokens are deleted, the state
    /// flips to anonymous, and no invalidation request is sent.
    pub fn sign_out(&self) {
        tokens::clear();
        self.inner.dispatch(SessionAction::SignedOut);
        bus::publish(Topic::AuthStateChanged);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Resolves the stored tokens once on mount and keeps the resulting session
/// in context for the whole tree.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::default);

    {
        let session = session.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let resolution = resolve_session(&client).await;
                if resolution.should_clear_tokens() {
                    tokens::clear();
                }
                session.dispatch(SessionAction::Resolved(resolution));
                bus::publish(Topic::AuthStateChanged);
            });
            || ()
        });
    }

    let handle = SessionHandle { inner: session };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// Grab the session handle. Panics when no provider is above, which is a
/// wiring bug worth failing loudly on.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider missing from the component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;

    fn customer() -> User {
        serde_json::from_str(
            r#"{
                "id": "u1",
                "email": "u1@rewired.shop",
                "role": "CUSTOMER",
                "emailVerifiedAt": "2024-01-01",
                "phoneVerifiedAt": null
            }"#,
        )
        .unwrap()
    }

    fn reduce(session: Session, action: SessionAction) -> Session {
        Rc::unwrap_or_clone(Rc::new(session).reduce(action))
    }

    #[test]
    fn session_starts_bootstrapping() {
        assert_eq!(Session::default().state, SessionState::Bootstrapping);
    }

    #[test]
    fn resolution_with_user_authenticates() {
        let user = customer();
        let session = reduce(
            Session::default(),
            SessionAction::Resolved(SessionResolution::Authenticated(Box::new(user.clone()))),
        );
        assert_eq!(session.state, SessionState::Authenticated(Box::new(user)));
    }

    #[test]
    fn every_failed_resolution_lands_on_anonymous() {
        for resolution in [
            SessionResolution::NoToken,
            SessionResolution::Rejected,
            SessionResolution::Failed,
        ] {
            let session = reduce(Session::default(), SessionAction::Resolved(resolution));
            assert_eq!(session.state, SessionState::Anonymous);
        }
    }

    #[test]
    fn sign_out_overrides_an_authenticated_state() {
        let signed_in = reduce(
            Session::default(),
            SessionAction::SignedIn(Box::new(customer())),
        );
        assert!(matches!(signed_in.state, SessionState::Authenticated(_)));

        let signed_out = reduce(signed_in, SessionAction::SignedOut);
        assert_eq!(signed_out.state, SessionState::Anonymous);
    }

    #[test]
    fn every_profile_failure_clears_the_stored_pair() {
        assert!(SessionResolution::Rejected.should_clear_tokens());
        assert!(SessionResolution::Failed.should_clear_tokens());
        assert!(!SessionResolution::NoToken.should_clear_tokens());
        let admin = User {
            role: UserRole::Admin,
            ..customer()
        };
        assert!(
            !SessionResolution::Authenticated(Box::new(admin)).should_clear_tokens()
        );
    }
}
