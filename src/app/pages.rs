use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="max-w-3xl my-12">
            <h1 class="font-bold text-3xl mb-6">"About"</h1>
            <p class="text-lg mb-4 leading-relaxed">
                "I'm a frontend engineer who cares about accessible interfaces, component libraries and fast pages."
            </p>
            <p class="text-lg mb-4 leading-relaxed">
                "This site is where I keep my writing and a few of the things I've built. Read the "
                <A href="/blog" attr:class="underline">"blog"</A>
                ", look through my "
                <A href="/works" attr:class="underline">"works"</A>
                " or "
                <A href="/contact" attr:class="underline">"get in touch"</A>
                "."
            </p>
        </div>
    }
}

#[component]
pub fn WorksPage() -> impl IntoView {
    view! {
        <Title text="Works" />
        <div class="max-w-3xl my-12">
            <h1 class="font-bold text-3xl mb-6">"Works"</h1>
            <ul class="space-y-4 text-lg">
                <li>
                    <a
                        href="https://github.com/nature-ui/nature-ui"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="font-semibold hover:underline"
                    >
                        "Nature UI"
                    </a>
                    " - a utility-first React component library."
                </li>
            </ul>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="max-w-3xl my-12">
            <h1 class="font-bold text-3xl mb-6">"Contact"</h1>
            <p class="text-lg mb-4">"The fastest way to reach me is on GitHub or Twitter."</p>
            <div class="flex flex-row gap-4">
                <a
                    href="https://github.com/divinehycenth"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hover:underline"
                >
                    "GitHub"
                </a>
                <a
                    href="https://twitter.com/divinehycenth"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hover:underline"
                >
                    "Twitter"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Not found" />
        <div class="text-center my-20">
            <h1 class="font-bold text-4xl mb-4">"404"</h1>
            <p class="mb-6">"There's nothing at this address."</p>
            <A href="/" attr:class="underline">"Back home"</A>
        </div>
    }
}
