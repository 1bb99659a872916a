mod experience;
mod gallery;
mod icons;
mod language;
mod loading;
mod menu;
mod parallax;
mod scroll;
mod slides;
mod store;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use experience::ExperienceSlide;
use gallery::ProjectsSlide;
use loading::LoadingScreen;
use menu::Menu;
use parallax::{Interlude, ParallaxSlide};
use scroll::{use_scroll_tracking, SectionRefs};
use slides::{AboutMeSlide, ContactSlide, GreetingsSlide};
pub use store::{use_ui_store, UiStore};

const INTERLUDE_IMAGE: &str = "/images/lucky-day.jpg";
const PROJECTS_IMAGE: &str = "/images/projects-bg.jpg";
const CONTACT_IMAGE: &str = "/images/contact-bg.jpg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/svg+xml" href="/icons/hi.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background-500 text-text-500">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(UiStore::new());

    view! {
        <Title formatter=|title| format!("Alexander Tarasov - {title}") />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
    let store = use_ui_store();

    view! {
        <Title text=move || store.t("page.notFound") />
        <main class="flex min-h-screen items-center justify-center">
            <h1 class="text-2xl font-bold">{move || store.t("page.notFound")}</h1>
        </main>
    }
}

/// The single scrolling page holding every slide.
#[component]
fn HomePage() -> impl IntoView {
    let store = use_ui_store();
    let refs = SectionRefs::new();
    provide_context(refs);

    let active = use_scroll_tracking(refs, Signal::derive(move || store.is_language_selected()));

    view! {
        <Title text=move || store.t("page.title") />
        <div
            node_ref=refs.container()
            class="relative h-screen w-full overflow-x-hidden bg-background-500"
            style:overflow-y=move || store.overflow().as_css()
        >
            <LoadingScreen />
            <Menu active on_select=move |index| refs.scroll_to(index) />
            <main class="w-full">
                <section node_ref=refs.section(0)>
                    <GreetingsSlide />
                </section>
                <section node_ref=refs.section(1)>
                    <ParallaxSlide image_url=INTERLUDE_IMAGE>
                        <Interlude />
                    </ParallaxSlide>
                </section>
                <section node_ref=refs.section(2)>
                    <AboutMeSlide />
                </section>
                <section node_ref=refs.section(3)>
                    <ParallaxSlide image_url=PROJECTS_IMAGE>
                        <ProjectsSlide />
                    </ParallaxSlide>
                </section>
                <section node_ref=refs.section(4)>
                    <ExperienceSlide />
                </section>
                <section node_ref=refs.section(5)>
                    <ParallaxSlide image_url=CONTACT_IMAGE>
                        <ContactSlide />
                    </ParallaxSlide>
                </section>
            </main>
        </div>
    }
}
