mod contact_form;
mod image_parallax;
mod pages;
mod shell;
mod toast;

use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::resolve_endpoint;
use pages::{About, ComingSoon, Contact, Home, NotFound, ServiceDetail, Services};
use shell::{Footer, Navigation};
use toast::Toaster;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    ServiceDetail { slug: String },
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `PROTOREV_PRELAUNCH` marks the pre-launch deployment, where `/` serves the
/// launch-soon page instead of home. Any value other than empty, `0` or
/// `false` enables it; leave it unset once the site is live.
fn prelaunch_enabled() -> bool {
    prelaunch_flag(option_env!("PROTOREV_PRELAUNCH"))
}

fn prelaunch_flag(value: Option<&str>) -> bool {
    value
        .map(str::trim)
        .is_some_and(|value| !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false"))
}

fn contact_endpoint() -> String {
    resolve_endpoint(option_env!("CONTACT_ENDPOINT"))
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home if prelaunch_enabled() => html! { <ComingSoon /> },
        Route::Home => html! { <Home /> },
        Route::Services => html! { <Services /> },
        Route::ServiceDetail { slug } => html! { <ServiceDetail slug={slug} /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let route = use_route::<Route>();

    use_effect_with(route, |_| {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    html! {}
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Toaster>
                <ScrollToTop />
                <a class="skip-link" href="#content">{"Skip to main content"}</a>
                <div class="page-shell">
                    <Navigation />
                    <main id="content">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </Toaster>
        </BrowserRouter>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn prelaunch_flag_needs_an_enabling_value() {
        assert!(!prelaunch_flag(None));
        assert!(!prelaunch_flag(Some("")));
        assert!(!prelaunch_flag(Some(" 0 ")));
        assert!(!prelaunch_flag(Some("FALSE")));
        assert!(prelaunch_flag(Some("1")));
        assert!(prelaunch_flag(Some("true")));
    }

    #[wasm_bindgen_test]
    fn root_route_is_home_for_both_deployments() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
