use leptos::{html, prelude::*};
use leptos_router::components::*;
use leptos_use::use_element_visibility;

use crate::config::SiteConfig;
use crate::content::{author_profile, fallback_image_src, truncate_chars, Post};
use crate::motion::Reveal;

const HOME_DESCRIPTION_CHARS: usize = 150;
const BLOG_DESCRIPTION_CHARS: usize = 400;

/// Shows a tiny blurred variant until the real image has loaded.
#[component]
fn LazyImage(src: String, alt: String, #[prop(into)] class: String) -> impl IntoView {
    let fallback = fallback_image_src(&src);
    let (loaded, set_loaded) = signal(false);
    view! {
        <div class="relative overflow-hidden rounded-2xl w-full h-full">
            <img
                src=fallback
                alt=""
                aria-hidden="true"
                class=format!("{class} absolute inset-0 blur-md scale-105")
                class:hidden=move || loaded.get()
            />
            <img
                src=src
                alt=alt
                loading="lazy"
                class=format!("{class} relative transition-opacity duration-300")
                class:opacity-0=move || !loaded.get()
                on:load=move |_| set_loaded.set(true)
            />
        </div>
    }
}

#[component]
fn Tags(tags: Vec<String>, #[prop(optional)] solid: bool) -> impl IntoView {
    if tags.is_empty() {
        return None;
    }
    let badge = if solid {
        "px-2 py-0.5 rounded-md text-xs bg-primary-500 text-white"
    } else {
        "px-2 py-0.5 rounded-md text-xs bg-accent-400"
    };
    Some(view! {
        <div class="flex flex-row flex-wrap gap-2 mt-4">
            {tags
                .into_iter()
                .map(|tag| view! { <span class=badge>{tag}</span> })
                .collect_view()}
        </div>
    })
}

#[component]
pub fn BlogCard(post: Post, #[prop(optional, into)] class: String) -> impl IntoView {
    let card_ref = NodeRef::<html::Article>::new();
    let in_view = use_element_visibility(card_ref);
    let read_time = post.read_time();
    let Post {
        slug,
        title,
        description,
        image_url,
        tags,
        ..
    } = post;

    view! {
        <article
            node_ref=card_ref
            class=move || {
                format!(
                    "{class} p-6 rounded-2xl bg-glass-card cursor-pointer hover:opacity-80 group {}",
                    Reveal::from_visibility(in_view.get()).class(),
                )
            }
        >
            <A href=slug>
                <div class="grid md:grid-cols-[200px_1fr] gap-4">
                    <div class="h-40 md:h-full">
                        <LazyImage
                            src=image_url
                            alt=title.clone()
                            class="object-cover w-full h-full"
                        />
                    </div>
                    <div>
                        <h3 class="font-semibold mt-2 md:mt-0 group-hover:underline">{title}</h3>
                        <Tags tags solid=true />
                        <p class="mt-4">{truncate_chars(&description, BLOG_DESCRIPTION_CHARS)}</p>
                        <span class="inline-block mt-2 px-2 py-0.5 rounded-md text-xs lowercase border border-dark-500">
                            {read_time}
                            " min read"
                        </span>
                    </div>
                </div>
            </A>
        </article>
    }
}

#[component]
pub fn HomePostCard(post: Post) -> impl IntoView {
    let owner = use_context::<SiteConfig>().unwrap_or_default().owner;
    let card_ref = NodeRef::<html::Article>::new();
    let in_view = use_element_visibility(card_ref);
    let read_time = post.read_time();
    let Post {
        slug,
        title,
        description,
        image_url,
        tags,
        author,
        ..
    } = post;

    let author_row = author.map(|author| {
        let profile = author_profile(&author, &owner);
        view! {
            <A href=profile attr:class="flex flex-row items-center space-x-2">
                {author
                    .avatar_url
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=author.name.clone()
                                class="w-10 h-10 rounded-full object-cover"
                            />
                        }
                    })}
                <div>
                    <p class="font-medium">{author.name.clone()}</p>
                </div>
            </A>
        }
    });

    view! {
        <article
            node_ref=card_ref
            class=move || Reveal::from_visibility(in_view.get()).class()
        >
            <A href=slug>
                <div class="grid relative">
                    <LazyImage
                        src=image_url
                        alt=title.clone()
                        class="cursor-pointer w-full h-full object-cover"
                    />
                    <span class="absolute top-3 right-3 px-2 py-0.5 rounded-md text-xs lowercase bg-white text-dark-600">
                        {read_time}
                        " min read"
                    </span>
                </div>
                <Tags tags />
                <h3 class="hover:underline font-semibold cursor-pointer mt-3">{title}</h3>
                <p class="my-4">{truncate_chars(&description, HOME_DESCRIPTION_CHARS)}</p>
            </A>
            {author_row}
        </article>
    }
}
