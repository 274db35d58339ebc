use shared::models::User;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct VerificationBannerProps {
    pub user: User,
}

/// What to nudge the customer about, one entry per unverified channel. Only
/// the presence of the verification stamps matters, never their contents.
fn banner_messages(email_verified: bool, phone_verified: bool) -> Vec<&'static str> {
    let mut messages = Vec::new();
    if !email_verified {
        messages.push("Please verify your email address.");
    }
    if !phone_verified {
        messages.push("Please verify your phone number.");
    }
    messages
}

/// Account page banner stack: one alert per unverified contact channel.
#[function_component(VerificationBanner)]
pub fn verification_banner(props: &VerificationBannerProps) -> Html {
    let messages = banner_messages(
        props.user.email_verified(),
        props.user.phone_verified(),
    );

    html! {
        <>
            { for messages.into_iter().map(|message| html! {
                <div class="alert alert-warning" key={message}>
                    <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} width="20" height="20" />
                    <span>{ message }</span>
                </div>
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_verified_accounts_see_no_banner() {
        assert!(banner_messages(true, true).is_empty());
    }

    #[test]
    fn each_missing_stamp_gets_its_own_message() {
        assert_eq!(
            banner_messages(false, true),
            vec!["Please verify your email address."]
        );
        assert_eq!(
            banner_messages(true, false),
            vec!["Please verify your phone number."]
        );
        assert_eq!(
            banner_messages(false, false),
            vec![
                "Please verify your email address.",
                "Please verify your phone number.",
            ]
        );
    }

    #[test]
    fn null_email_stamp_with_phone_stamp_prompts_for_email_only() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1",
                "email": "u1@rewired.shop",
                "role": "CUSTOMER",
                "emailVerifiedAt": null,
                "phoneVerifiedAt": "2024-01-01"
            }"#,
        )
        .unwrap();

        assert_eq!(
            banner_messages(user.email_verified(), user.phone_verified()),
            vec!["Please verify your email address."]
        );
    }
}
