use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::progress::RouteProgress;

/// True while the router is loading the next route.
#[derive(Clone, Copy)]
pub struct Routing(pub RwSignal<bool>);

const TRICKLE_MS: u64 = 200;

#[component]
pub fn RouteProgressBar() -> impl IntoView {
    let Routing(is_routing) = expect_context::<Routing>();
    let progress = RwSignal::new(RouteProgress::new());

    Effect::watch(
        move || is_routing.get(),
        move |routing, _, _| {
            if *routing {
                progress.update(RouteProgress::start);
            } else {
                // finished or failed, the router doesn't tell them apart
                progress.update(RouteProgress::done);
            }
        },
        false,
    );

    let _ = use_interval_fn(
        move || {
            if progress.with_untracked(RouteProgress::is_active) {
                progress.update(RouteProgress::trickle);
            }
        },
        TRICKLE_MS,
    );

    view! {
        <div
            class="fixed top-0 left-0 z-50 h-[3px] bg-gradient transition-all duration-200 ease-out pointer-events-none"
            class:opacity-0=move || !progress.with(RouteProgress::is_active)
            style:width=move || progress.with(RouteProgress::width)
            role="progressbar"
            aria-hidden=move || (!progress.with(RouteProgress::is_active)).to_string()
        ></div>
    }
}
