use crate::containers::header::Header;
use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "light")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });

    html! {
    <>
        <Header />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class="flex-grow p-4 max-w-5xl w-full mx-auto">
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2026 Rewired · Certified refurbished electronics"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
