use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_router::{components::*, hooks::use_location};
use leptos_use::{use_scroll, UseScrollReturn};

use super::header::Logo;
use super::progress_bar::Routing;
use crate::motion::overlay_class;
use crate::nav::{self, ActiveMatch, NavRoute};
use crate::overlay::{OverlayEffect, OverlayEvent, OverlayMachine, OverlayPhase, TRANSITION_MS};
use crate::scroll::ScrollPosition;
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional)] matching: ActiveMatch,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let location = use_location();
    let group_href = href.clone();
    let class = move || {
        let active = nav::is_active(&group_href, &location.pathname.get(), matching);
        let state = if active {
            "font-semibold bg-gradient text-white"
        } else {
            "text-dark-600"
        };
        format!("{class} flex-1 p-2 hover:bg-accent-400 hover:opacity-70 rounded-xl {state}")
    };
    view! {
        <A href=href attr:class=class>
            {children()}
        </A>
    }
}

/// Scrollable area that tells its parent when it moves past the first few pixels.
#[component]
pub fn ScrollView(
    #[prop(optional, into)] on_scroll: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let UseScrollReturn { y, .. } = use_scroll(el);
    let position = StoredValue::new(ScrollPosition::new());

    Effect::watch(
        move || y.get(),
        move |y, _, _| {
            let crossed = position.try_update_value(|p| p.update(*y)).flatten();
            if let (Some(past), Some(on_scroll)) = (crossed, on_scroll) {
                on_scroll.run(past);
            }
        },
        false,
    );

    view! {
        <div node_ref=el id="routes" class="overflow-auto px-6 mb-6 flex-1">
            {children()}
        </div>
    }
}

/// Full screen navigation panel for small viewports.
///
/// Mounted only while open or animating. Locks page scroll for as long as it
/// is mounted, focuses the close button once per opening and reports every
/// close (button, navigation, or `is_open` going false) through `on_close`.
#[component]
pub fn MobileNavContent(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    routes: Vec<NavRoute>,
) -> impl IntoView {
    let machine = StoredValue::new(OverlayMachine::new());
    let (phase, set_phase) = signal(OverlayPhase::Closed);
    let transition_end = RwSignal::new(None::<u64>);
    let close_ref = NodeRef::<html::Button>::new();
    let (shadow, set_shadow) = signal(false);

    let scroll_lock = StoredValue::new(use_context::<ScrollLock>());
    let guard = StoredValue::new(None::<ScrollLockGuard>);

    let dispatch = move |event: OverlayEvent| {
        let effects = machine
            .try_update_value(|m| m.handle(event))
            .unwrap_or_default();
        let Some(current) = machine.try_with_value(OverlayMachine::phase) else {
            return;
        };
        for effect in effects {
            match effect {
                OverlayEffect::Mount | OverlayEffect::Unmount => {}
                OverlayEffect::AcquireScrollLock => {
                    let held = scroll_lock.with_value(|lock| lock.as_ref().map(ScrollLock::acquire));
                    guard.set_value(held);
                }
                OverlayEffect::ReleaseScrollLock => {
                    guard.set_value(None);
                }
                OverlayEffect::FocusCloseControl => {
                    request_animation_frame(move || {
                        if let Some(button) = close_ref.get_untracked() {
                            if let Err(e) = button.focus() {
                                log::warn!("couldn't focus mobile nav close button: {e:?}");
                            }
                        }
                    });
                }
                OverlayEffect::StartTransition { generation } => {
                    set_timeout(
                        move || {
                            // the nav may be gone by now
                            _ = transition_end.try_set(Some(generation));
                        },
                        Duration::from_millis(TRANSITION_MS),
                    );
                }
                OverlayEffect::NotifyClose => on_close.run(()),
            }
        }
        set_phase.set(current);
    };

    Effect::watch(
        move || is_open.get(),
        move |open, _, _| dispatch(OverlayEvent::SetOpen(*open)),
        true,
    );

    Effect::watch(
        move || transition_end.get(),
        move |generation, _, _| {
            if let Some(generation) = *generation {
                dispatch(OverlayEvent::TransitionEnd(generation));
            }
        },
        false,
    );

    let location = use_location();
    Effect::watch(
        move || location.pathname.get(),
        move |_, _, _| dispatch(OverlayEvent::RouteChanged),
        false,
    );
    if let Some(Routing(is_routing)) = use_context::<Routing>() {
        Effect::watch(
            move || is_routing.get(),
            move |_, _, _| dispatch(OverlayEvent::RouteChanged),
            false,
        );
    }

    on_cleanup(move || {
        // unmounted mid-transition, never leave the page locked
        _ = guard.try_update_value(Option::take);
    });

    let routes = StoredValue::new(routes);

    view! {
        <Show when=move || phase.get().is_mounted()>
            <nav
                class=move || {
                    format!(
                        "h-screen absolute top-0 left-0 w-full pt-3 bg-white z-10 flex flex-col overflow-auto pb-8 {}",
                        overlay_class(phase.get()),
                    )
                }
                data-state=move || phase.get().as_str()
                aria-label="Mobile navigation"
            >
                <div class="px-4" class:shadow-md=move || shadow.get()>
                    <div class="flex flex-row items-center">
                        <Logo />
                        <button
                            node_ref=close_ref
                            type="button"
                            class="ml-auto p-2 text-xl rounded-md hover:bg-accent-400"
                            aria-label="Close menu"
                            on:click=move |_| dispatch(OverlayEvent::CloseRequested)
                        >
                            "✕"
                        </button>
                    </div>
                </div>
                <ScrollView on_scroll=move |scrolled: bool| set_shadow.set(scrolled)>
                    <div class="mt-6 pb-4 flex flex-col space-y-3 mb-3">
                        {routes
                            .get_value()
                            .into_iter()
                            .map(|route| {
                                view! { <NavLink href=route.href>{route.label}</NavLink> }
                            })
                            .collect_view()}
                    </div>
                </ScrollView>
            </nav>
        </Show>
    }
}

/// Hamburger trigger, only shown below the `md` breakpoint.
#[component]
pub fn MobileNavButton(
    #[prop(optional)] button_ref: Option<NodeRef<html::Button>>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let button_ref = button_ref.unwrap_or_else(NodeRef::new);
    view! {
        <div class="md:hidden justify-end flex items-center">
            <button
                node_ref=button_ref
                type="button"
                class="md:hidden text-xl ml-3 px-[5px] py-2 rounded-md bg-transparent text-current hover:bg-accent-400"
                aria-label="Open menu"
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.run(());
                    }
                }
            >
                <i class="icon-menu" aria-hidden="true">"☰"</i>
            </button>
        </div>
    }
}
