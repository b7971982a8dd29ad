mod blog;
mod cards;
mod header;
mod homepage;
pub mod mobile_nav;
mod pages;
mod progress_bar;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::scroll_lock::BodyScroll;
#[cfg(not(feature = "hydrate"))]
use crate::scroll_lock::NoopScroll;
use crate::scroll_lock::ScrollLock;

use blog::BlogPage;
use header::SiteHeader;
use homepage::HomePage;
use pages::{AboutPage, ContactPage, NotFound, WorksPage};
use progress_bar::{RouteProgressBar, Routing};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let theme_color = SiteConfig::default().theme_color;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="X-UA-Compatible" content="IE=edge" />
                <meta name="theme-color" content=theme_color />
                <meta name="color-scheme" content="dark" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/png" sizes="96x96" href="/favicon.png" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::default();
    let titles = config.clone();
    provide_context(config);

    #[cfg(feature = "hydrate")]
    let page = BodyScroll;
    #[cfg(not(feature = "hydrate"))]
    let page = NoopScroll;
    provide_context(ScrollLock::new(page));

    let routing = RwSignal::new(false);
    provide_context(Routing(routing));

    view! {
        <Title formatter=move |title: String| titles.page_title(&title) />

        <Router set_is_routing=SignalSetter::from(routing.write_only())>
            <RouteProgressBar />
            <CanonicalLink />
            <SiteHeader />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-5xl px-4 md:px-6">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/works") view=WorksPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}

/// `<link rel="canonical">` for the current route, rooted at the configured base URL.
#[component]
fn CanonicalLink() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let location = use_location();
    move || {
        let href = config.canonical_url(&location.pathname.get());
        view! { <Link rel="canonical" href=href /> }
    }
}
