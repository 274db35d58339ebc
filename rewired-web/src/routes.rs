use crate::auth::session::use_session;
use crate::components::admin_tabs::AdminTabs;
use crate::components::loading::Loading;
use crate::containers::admin_guard::AdminGuard;
use crate::containers::layout::Layout;
use crate::pages::*;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The storefront routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/products/:handle")]
    Product { handle: String },
    #[at("/cart")]
    Cart,
    #[at("/wishlist")]
    Wishlist,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/account")]
    Account,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The back-office routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin")]
    Reviews,
    #[at("/admin/media")]
    Media,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

impl AdminRoute {
    /// Tab label in the back-office navigation.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::Media => "Media",
            Self::NotFound => "Not found",
        }
    }

    /// Tab icon in the back-office navigation.
    #[must_use]
    pub fn icon_id(&self) -> IconId {
        match self {
            Self::Reviews => IconId::HeroiconsOutlineChatBubbleLeftRight,
            Self::Media => IconId::HeroiconsOutlinePhoto,
            Self::NotFound => IconId::HeroiconsOutlineQuestionMarkCircle,
        }
    }
}

/// Query string carried to the login page so a guarded page can send the
/// customer back where they came from after signing in.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Navigates to the login page, remembering the current path in the query.
#[function_component(RedirectToLogin)]
pub fn redirect_to_login() -> Html {
    let navigator = use_navigator().unwrap();
    let location = use_location();

    use_effect_with((), move |()| {
        let redirect = location.map(|location| location.path().to_string());
        let _ = navigator.push_with_query(&MainRoute::Login, &LoginQuery { redirect });
        || ()
    });

    html! {}
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_session();

    match props.route.clone() {
        MainRoute::Home => html! {
            <Layout>
                <HomePage />
            </Layout>
        },
        MainRoute::Product { handle } => html! {
            <Layout>
                <ProductDetailPage {handle} />
            </Layout>
        },
        MainRoute::Cart => html! {
            <Layout>
                <CartPage />
            </Layout>
        },
        MainRoute::Wishlist => {
            // Do not bounce to login while the stored tokens are still being
            // resolved; a signed-in customer refreshing the page would lose
            // their place.
            if session.is_bootstrapping() {
                return html! { <Layout><Loading /></Layout> };
            }
            if !session.is_authenticated() {
                return html! { <RedirectToLogin /> };
            }
            html! {
                <Layout>
                    <WishlistPage />
                </Layout>
            }
        }
        MainRoute::Login => {
            if session.is_bootstrapping() {
                return html! { <Loading /> };
            }
            if session.is_authenticated() {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <LoginPage /> }
        }
        MainRoute::Register => {
            if session.is_bootstrapping() {
                return html! { <Loading /> };
            }
            if session.is_authenticated() {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <RegisterPage /> }
        }
        MainRoute::ForgotPassword => {
            if session.is_bootstrapping() {
                return html! { <Loading /> };
            }
            if session.is_authenticated() {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <ForgotPasswordPage /> }
        }
        MainRoute::Account => {
            if session.is_bootstrapping() {
                return html! { <Layout><Loading /></Layout> };
            }
            if !session.is_authenticated() {
                return html! { <RedirectToLogin /> };
            }
            html! {
                <Layout>
                    <AccountPage />
                </Layout>
            }
        }
        MainRoute::AdminRoot | MainRoute::Admin => html! {
            <Switch<AdminRoute> render={switch_admin} />
        },
        MainRoute::NotFound => html! {
            <Layout>
                <ErrorPage />
            </Layout>
        },
    }
}

/// Switch function for the storefront routes.
pub fn switch_main(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} /> }
}

/// Switch function for the back-office routes. Every page sits behind the
/// guard, which re-checks the profile each time one mounts.
fn switch_admin(route: AdminRoute) -> Html {
    log(std::format!("Switching to admin route: {:?}", route).as_str());
    match route {
        AdminRoute::Reviews => admin_page(route, html! { <AdminReviewsPage /> }),
        AdminRoute::Media => admin_page(route, html! { <AdminMediaPage /> }),
        AdminRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> },
    }
}

fn admin_page(route: AdminRoute, body: Html) -> Html {
    // Keyed by path so moving between back-office pages mounts a fresh
    // guard instead of reusing the old one, forcing a new profile check.
    let guard_key = route.to_path();
    html! {
        <Layout>
            <AdminGuard key={guard_key}>
                <AdminTabs current={route} />
                {body}
            </AdminGuard>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_paths_recognize() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(
            MainRoute::recognize("/products/fairphone-4"),
            Some(MainRoute::Product {
                handle: "fairphone-4".to_string()
            })
        );
        assert_eq!(MainRoute::recognize("/cart"), Some(MainRoute::Cart));
        assert_eq!(MainRoute::recognize("/account"), Some(MainRoute::Account));
    }

    #[test]
    fn admin_paths_recognize_through_both_enums() {
        assert_eq!(MainRoute::recognize("/admin"), Some(MainRoute::AdminRoot));
        assert_eq!(MainRoute::recognize("/admin/media"), Some(MainRoute::Admin));
        assert_eq!(AdminRoute::recognize("/admin"), Some(AdminRoute::Reviews));
        assert_eq!(AdminRoute::recognize("/admin/media"), Some(AdminRoute::Media));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(MainRoute::recognize("/nope"), Some(MainRoute::NotFound));
        assert_eq!(
            AdminRoute::recognize("/admin/nope"),
            Some(AdminRoute::NotFound)
        );
    }
}
