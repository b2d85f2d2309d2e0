use js_sys::Date;
use web_sys::HtmlMediaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::site::{
    active_nav_index, ADDRESS_LINES, COMPANY_MOTTO, COMPANY_NAME, COMPANY_TAGLINE, INFO_EMAIL,
    NAV_ITEMS, PHONE_DISPLAY, PHONE_HREF, SYSTEM_VERSION,
};

const HERO_VIDEO_SRC: &str = "/media/hero.mp4";
const HERO_POSTER_SRC: &str = "/media/hero-poster.jpg";

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let location = use_location();
    let active = location
        .as_ref()
        .and_then(|location| active_nav_index(location.path()));

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_select = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let items = NAV_ITEMS.iter().enumerate().filter_map(|(index, item)| {
        let route = Route::recognize(item.href)?;
        let classes = classes!("nav-link", (active == Some(index)).then_some("is-active"));
        Some(html! {
            <li onclick={on_select.clone()}>
                <Link<Route> to={route} {classes}>{item.label}</Link<Route>>
            </li>
        })
    });

    html! {
        <header class={classes!("site-header", menu_open.then_some("menu-open"))}>
            <nav class="nav-bar" aria-label="Primary">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand-name">{COMPANY_NAME}</span>
                    <span class="brand-tagline">{COMPANY_TAGLINE}</span>
                </Link<Route>>
                <button
                    class="menu-toggle"
                    type="button"
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={(*menu_open).to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                </button>
                <ul class="nav-list">
                    { for items }
                </ul>
            </nav>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <p class="brand-name">{COMPANY_NAME}</p>
                    <p class="muted">{COMPANY_MOTTO}</p>
                </div>
                <address class="footer-address">
                    <p class="footer-heading">{"Headquarters"}</p>
                    { for ADDRESS_LINES.iter().map(|line| html! { <span>{*line}</span> }) }
                </address>
                <div class="footer-contact">
                    <p class="footer-heading">{"Direct Line"}</p>
                    <a href={PHONE_HREF}>{PHONE_DISPLAY}</a>
                    <a href={format!("mailto:{INFO_EMAIL}")}>{INFO_EMAIL}</a>
                </div>
                <nav class="footer-links" aria-label="Footer">
                    <p class="footer-heading">{"Index"}</p>
                    <Link<Route> to={Route::Services}>{"Capabilities"}</Link<Route>>
                    <Link<Route> to={Route::About}>{"Company Profile"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Inquiry Terminal"}</Link<Route>>
                </nav>
            </div>
            <div class="footer-meta">
                <span>{format!("© {year} {COMPANY_NAME}. All rights reserved.")}</span>
                <span class="mono">{format!("SYSTEM VERSION {SYSTEM_VERSION}")}</span>
            </div>
        </footer>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub number: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let align_class = match props.align {
        Align::Left => "align-left",
        Align::Center => "align-center",
    };

    html! {
        <div class={classes!("section-header", align_class)}>
            <span class="section-number mono">{props.number.clone()}</span>
            <h2 class="section-title">{props.title.clone()}</h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Looping muted video behind the hero copy.
#[function_component(HeroBackground)]
pub fn hero_background(props: &HeroBackgroundProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with((), move |_| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                video.set_muted(true);
                let _ = video.play();
            }
            || ()
        });
    }

    html! {
        <section class="hero">
            <video
                ref={video_ref}
                class="hero-video"
                src={HERO_VIDEO_SRC}
                poster={HERO_POSTER_SRC}
                autoplay="autoplay"
                muted="muted"
                loop="loop"
                playsinline="playsinline"
                aria-hidden="true"
            />
            <div class="hero-overlay" aria-hidden="true"></div>
            <div class="hero-content">
                {props.children.clone()}
            </div>
        </section>
    }
}
