use leptos::{html, prelude::*};
use leptos_router::components::*;
use leptos_use::{use_color_mode, ColorMode, UseColorModeReturn};

use super::mobile_nav::{MobileNavButton, MobileNavContent, NavLink};
use crate::config::SiteConfig;

#[component]
pub fn Logo() -> impl IntoView {
    let title = use_context::<SiteConfig>().unwrap_or_default().title;
    view! {
        <A href="/" attr:class="text-xl font-bold tracking-tight hover:opacity-80">
            {title}
        </A>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let (is_open, set_is_open) = signal(false);
    let trigger_ref = NodeRef::<html::Button>::new();

    view! {
        <header class="relative w-full">
            <div class="mx-auto max-w-5xl px-4 md:px-6 py-4 flex flex-row items-center">
                <Logo />
                <nav class="hidden md:flex flex-row space-x-2 ml-auto">
                    {config
                        .nav_routes
                        .clone()
                        .into_iter()
                        .map(|route| {
                            view! {
                                <NavLink href=route.href.clone() class="text-center">
                                    {route.label.clone()}
                                </NavLink>
                            }
                        })
                        .collect_view()}
                </nav>
                <ColorModeToggle />
                <MobileNavButton button_ref=trigger_ref on_click=move |_| set_is_open.set(true) />
            </div>
            <MobileNavContent
                is_open=is_open
                on_close=move |_| set_is_open.set(false)
                routes=config.nav_routes.clone()
            />
        </header>
    }
}

/// Starts from the system preference; the choice is kept in local storage.
#[component]
fn ColorModeToggle() -> impl IntoView {
    let UseColorModeReturn { mode, set_mode, .. } = use_color_mode();
    let is_dark = move || matches!(mode.get(), ColorMode::Dark);

    view! {
        <button
            type="button"
            class="ml-auto md:ml-3 p-2 rounded-md hover:bg-accent-400"
            aria-label=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| {
                let next = if is_dark() { ColorMode::Light } else { ColorMode::Dark };
                set_mode.set(next);
            }
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
