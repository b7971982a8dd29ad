use leptos::{prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;

use super::cards::BlogCard;
use crate::content::Post;

/// Newest first. `limit` caps the count when set.
#[server(input = GetUrl)]
pub async fn list_posts(limit: Option<usize>) -> Result<Vec<Post>, ServerFnError> {
    let posts = crate::content::post_index().ok_or(ServerFnError::new("Post index not loaded"))?;
    let limit = limit.unwrap_or(posts.len());
    Ok(posts.iter().take(limit).cloned().collect())
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = Resource::new(
        || (),
        |_| async move {
            list_posts(None).await.unwrap_or_else(|e| {
                log::error!("couldn't list posts: {e}");
                Vec::new()
            })
        },
    );

    view! {
        <Title text="Blog" />
        <div class="text-center my-8">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4">"Blog"</h1>
            <p class="max-w-2xl mx-auto text-lg opacity-80">
                "Notes on building for the web, mostly React and lately Rust."
            </p>
        </div>
        <Transition fallback=move || {
            view! {
                <div class="space-y-6">
                    <div class="loading-skeleton h-40 rounded-2xl"></div>
                    <div class="loading-skeleton h-40 rounded-2xl"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let posts = posts.await;
                if posts.is_empty() {
                    return view! { <p class="text-center opacity-70">"Nothing published yet."</p> }
                        .into_any();
                }
                view! {
                    <div class="flex flex-col space-y-6">
                        {posts
                            .into_iter()
                            .map(|post| view! { <BlogCard post /> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            })}
        </Transition>
    }
}
