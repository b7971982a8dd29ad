use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::blog::list_posts;
use super::cards::HomePostCard;

const LATEST_POSTS: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let posts = Resource::new(
        || (),
        |_| async move {
            list_posts(Some(LATEST_POSTS)).await.unwrap_or_else(|e| {
                log::error!("couldn't list latest posts: {e}");
                Vec::new()
            })
        },
    );

    view! {
        <Title text="" />
        <section class="my-12 md:my-20">
            <h1 class="font-bold text-4xl md:text-5xl leading-tight">
                "Hi, I'm Divine. "
                <span class="bg-gradient bg-clip-text text-transparent">"I build for the web."</span>
            </h1>
            <p class="mt-6 text-lg max-w-2xl opacity-80">
                "Frontend engineer writing about React, design systems and the tools around them."
            </p>
        </section>
        <section>
            <div class="flex flex-row items-center mb-6">
                <h2 class="text-2xl font-bold">"Latest posts"</h2>
                <A href="/blog" attr:class="ml-auto hover:underline">
                    "All posts →"
                </A>
            </div>
            <Transition fallback=|| view! { <div class="loading-skeleton h-64 rounded-2xl"></div> }>
                {move || Suspend::new(async move {
                    let posts = posts.await;
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                            {posts
                                .into_iter()
                                .map(|post| view! { <HomePostCard post /> })
                                .collect_view()}
                        </div>
                    }
                })}
            </Transition>
        </section>
    }
}
