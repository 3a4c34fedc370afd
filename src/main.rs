use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod attribution;
mod config;
mod cookies;
mod guest_leads;

mod components {
    pub mod section_tracker;
    pub mod signup_form;
    pub mod smooth_scroll;
    pub mod try_now_modal;
}
mod demo {
    pub mod cities;
    pub mod interactive;
    pub mod sequencer;
    pub mod stream;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
    pub mod thank_you;
}

use attribution::AttributionCapture;
use pages::{
    landing::Landing,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
    thank_you::ThankYou,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/thank-you")]
    ThankYou,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::ThankYou => {
            info!("Rendering thank-you page");
            html! { <ThankYou /> }
        }
        Route::Terms => {
            info!("Rendering terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <style>{ NAV_CSS }</style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Seoscribed"}
                </Link<Route>>
                <a href="/#beta" class="nav-cta">{"Get Beta Access"}</a>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
.top-nav {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(250, 251, 252, 0.85);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid #E2E8F0;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
}
.nav-content {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0.85rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { font-size: 1.15rem; font-weight: 800; color: #0F172A; text-decoration: none; }
.nav-cta {
    padding: 0.5rem 1.1rem;
    border-radius: 0.5rem;
    background: #0F172A;
    color: #fff;
    font-size: 0.85rem;
    font-weight: 700;
    text-decoration: none;
    transition: background 0.2s ease;
}
.nav-cta:hover { background: #1E293B; }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <AttributionCapture />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
