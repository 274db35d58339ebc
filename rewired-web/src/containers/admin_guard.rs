//! Gate in front of every back-office page.
//!
//! The guard does not trust the session already sitting in context: it asks
//! the profile endpoint again on every mount, so a role revoked mid-session
//! locks the operator out on their next navigation.

use shared::models::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::StorefrontClient;
use crate::auth::session::{SessionResolution, resolve_session};
use crate::auth::tokens;
use crate::components::loading::Loading;
use crate::notify;
use crate::routes::{MainRoute, RedirectToLogin};

/// Why the guard refused entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminDenial {
    /// No usable token: none stored, or the profile endpoint turned it away.
    NotAuthenticated,
    /// The profile check itself broke down before an answer came back.
    AuthenticationFailed,
    /// Signed in fine, but the account is not staff.
    InsufficientPrivileges,
}

impl AdminDenial {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotAuthenticated => "Not authenticated",
            Self::AuthenticationFailed => "Authentication failed",
            Self::InsufficientPrivileges => "Insufficient privileges",
        }
    }

    /// A signed-in non-staff account goes back to the shop; everyone else
    /// goes to the login page.
    #[must_use]
    pub fn redirects_home(&self) -> bool {
        matches!(self, Self::InsufficientPrivileges)
    }
}

/// Map a fresh session resolution onto an entry decision. A rejected token
/// reads the same as no token at all; only a broken check gets its own story.
pub fn admin_decision(resolution: SessionResolution) -> Result<Box<User>, AdminDenial> {
    match resolution {
        SessionResolution::Authenticated(user) if user.is_admin() => Ok(user),
        SessionResolution::Authenticated(_) => Err(AdminDenial::InsufficientPrivileges),
        SessionResolution::NoToken | SessionResolution::Rejected => {
            Err(AdminDenial::NotAuthenticated)
        }
        SessionResolution::Failed => Err(AdminDenial::AuthenticationFailed),
    }
}

enum GuardState {
    Checking,
    Granted,
    Denied(AdminDenial),
}

#[derive(Properties, PartialEq)]
pub struct AdminGuardProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AdminGuard)]
pub fn admin_guard(props: &AdminGuardProps) -> Html {
    let state = use_state(|| GuardState::Checking);

    {
        let state = state.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let resolution = resolve_session(&StorefrontClient::shared()).await;
                if resolution.should_clear_tokens() {
                    tokens::clear();
                }
                match admin_decision(resolution) {
                    Ok(_) => state.set(GuardState::Granted),
                    Err(denial) => {
                        web_sys::console::warn_1(
                            &format!("admin access refused: {}", denial.message()).into(),
                        );
                        // Only the staff-role refusal is worth a toast; the
                        // others land on the login page, which says enough.
                        if denial.redirects_home() {
                            notify::error(denial.message());
                        }
                        state.set(GuardState::Denied(denial));
                    }
                }
            });
            || ()
        });
    }

    match &*state {
        GuardState::Checking => html! { <Loading /> },
        GuardState::Granted => html! { <>{ props.children.clone() }</> },
        GuardState::Denied(denial) if denial.redirects_home() => html! {
            <Redirect<MainRoute> to={MainRoute::Home} />
        },
        GuardState::Denied(_) => html! { <RedirectToLogin /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> Box<User> {
        Box::new(
            serde_json::from_str(&format!(
                r#"{{ "id": "u1", "email": "staff@rewired.shop", "role": "{role}" }}"#
            ))
            .unwrap(),
        )
    }

    #[test]
    fn staff_roles_are_granted() {
        for role in ["ADMIN", "SUPER_ADMIN"] {
            let decision = admin_decision(SessionResolution::Authenticated(user_with_role(role)));
            assert!(decision.is_ok(), "role {role} should enter");
        }
    }

    #[test]
    fn customers_are_refused_with_insufficient_privileges() {
        let decision = admin_decision(SessionResolution::Authenticated(user_with_role("CUSTOMER")));
        assert_eq!(decision, Err(AdminDenial::InsufficientPrivileges));
        assert_eq!(
            AdminDenial::InsufficientPrivileges.message(),
            "Insufficient privileges"
        );
        assert!(AdminDenial::InsufficientPrivileges.redirects_home());
    }

    #[test]
    fn missing_and_rejected_tokens_both_read_as_not_authenticated() {
        for resolution in [SessionResolution::NoToken, SessionResolution::Rejected] {
            let decision = admin_decision(resolution);
            assert_eq!(decision, Err(AdminDenial::NotAuthenticated));
        }
        assert_eq!(AdminDenial::NotAuthenticated.message(), "Not authenticated");
        assert!(!AdminDenial::NotAuthenticated.redirects_home());
    }

    #[test]
    fn an_unreachable_profile_check_is_its_own_denial() {
        let decision = admin_decision(SessionResolution::Failed);
        assert_eq!(decision, Err(AdminDenial::AuthenticationFailed));
        assert_eq!(
            AdminDenial::AuthenticationFailed.message(),
            "Authentication failed"
        );
        assert!(!AdminDenial::AuthenticationFailed.redirects_home());
    }
}
