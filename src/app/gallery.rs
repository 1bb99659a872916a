use leptos::{ev, html, portal::Portal, prelude::*};
use leptos_router::{
    hooks::{use_navigate, use_query_map},
    NavigateOptions,
};
use leptos_use::{use_event_listener, use_window};

use super::{icons::InlineSvg, store::use_ui_store};
use crate::{
    gallery::{project_path, shows_floating_title, GalleryEvent, GalleryState, PROJECT_QUERY},
    projects::{find_project, Project, PROJECTS},
};

/// Project grid plus the expanded overlay for whichever card is open.
///
/// The open project is mirrored into `?project=<id>` so a link reopens it.
#[component]
pub fn ProjectsSlide() -> impl IntoView {
    let store = use_ui_store();
    let query = use_query_map();

    let replace_path = |path: &str| {
        let navigate = use_navigate();
        navigate(
            path,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    };

    // a shared link opens its project once; an unknown id is dropped from the URL
    Effect::new(move |_| {
        let Some(id) = query.with_untracked(|q| q.get(PROJECT_QUERY)) else {
            return;
        };
        let linked = GalleryState::from_link(&id, |id| find_project(id).is_some());
        match linked.expanded() {
            Some(id) => store.gallery_event(GalleryEvent::Open(id.to_string())),
            None => {
                log::debug!("dropping link to unknown project {id}");
                replace_path(&linked.path());
            }
        }
    });

    Effect::watch(
        move || store.expanded_project(),
        move |expanded, _, _| replace_path(&project_path(expanded.as_deref())),
        false,
    );

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            store.gallery_event(GalleryEvent::Escape);
        }
    });

    view! {
        <div class="container mx-auto flex flex-col gap-6 px-4 py-16 md:pl-24">
            <h1 class="text-3xl md:text-5xl font-bold text-center">
                {move || store.t("projects.title")}
            </h1>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </div>
        </div>
        {move || {
            store
                .expanded_project()
                .and_then(|id| find_project(&id))
                .map(|project| view! { <ExpandedProjectCard project /> })
        }}
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let store = use_ui_store();

    view! {
        <article
            on:click=move |_| store.gallery_event(GalleryEvent::Open(project.id.to_string()))
            class=move || {
                let base = "group flex flex-col overflow-hidden rounded-3xl bg-background-100 transition-opacity duration-300";
                if store.is_expanded(project.id) {
                    format!("{base} opacity-0 pointer-events-none")
                } else {
                    format!("{base} cursor-pointer")
                }
            }
        >
            <div class="relative min-h-48 overflow-hidden">
                <img
                    src=project.thumbnail
                    alt=project.title
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
            </div>
            <div class="relative z-10 -mt-6 flex grow flex-col gap-2 rounded-3xl bg-background-100 p-4 transition-colors duration-500 group-hover:bg-primary-500 group-hover:text-background-500">
                <h2 class="text-xl font-bold">{project.title}</h2>
                <h3 class="text-sm opacity-80">{project.subtitle}</h3>
                <div class="flex flex-wrap gap-2 pt-2">
                    {project
                        .key_points
                        .iter()
                        .map(|point| {
                            view! {
                                <span class="rounded-full bg-white/10 px-3 py-1 text-xs">
                                    {*point}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

#[component]
fn ExpandedProjectCard(project: &'static Project) -> impl IntoView {
    let store = use_ui_store();
    let content_ref = NodeRef::<html::Div>::new();
    let (floating_title, set_floating_title) = signal(false);

    view! {
        <Portal>
            <div
                class="fixed inset-0 z-[100] bg-black/60 backdrop-blur-sm animate-fade-in"
                on:click=move |_| store.gallery_event(GalleryEvent::Backdrop)
            ></div>
            <div class="fixed inset-0 z-[101] flex items-center justify-center p-4 md:p-8 lg:p-12 pointer-events-none">
                <div
                    role="dialog"
                    aria-modal="true"
                    class="relative flex h-full w-full max-w-5xl max-h-[90vh] md:max-h-[85vh] flex-col overflow-hidden rounded-3xl bg-background-50 pointer-events-auto animate-fade-in"
                >
                    <button
                        type="button"
                        aria-label=move || store.t("projects.close")
                        class="absolute top-4 right-4 z-20 flex h-10 w-10 items-center justify-center rounded-full bg-black/40 cursor-pointer hover:bg-black/60"
                        on:click=move |_| store.gallery_event(GalleryEvent::Close)
                    >
                        <InlineSvg name="close" class="w-5 h-5" />
                    </button>
                    <div class="relative h-[40vh] min-h-[250px] shrink-0 overflow-hidden">
                        <img src=project.thumbnail alt=project.title class="h-full w-full object-cover" />
                        <div class="absolute inset-0 bg-gradient-to-t from-background-50/80 to-transparent"></div>
                        {project
                            .url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="absolute bottom-10 left-4 z-10 rounded-full bg-primary-500 px-4 py-2 text-sm font-bold text-background-500"
                                    >
                                        {move || store.t("projects.live")}
                                    </a>
                                }
                            })}
                        <Show when=move || floating_title.get()>
                            <div class="absolute inset-x-0 top-0 z-10 bg-background-50/90 px-6 py-4 backdrop-blur-md animate-fade-in">
                                <h2 class="text-xl font-bold">{project.title}</h2>
                            </div>
                        </Show>
                    </div>
                    <div
                        node_ref=content_ref
                        class="relative z-10 -mt-6 flex-1 overflow-y-auto rounded-3xl bg-background-100"
                        on:scroll=move |_| {
                            if let Some(el) = content_ref.get_untracked() {
                                set_floating_title.set(shows_floating_title(el.scroll_top()));
                            }
                        }
                    >
                        <div class="flex flex-col gap-6 p-6">
                            <div>
                                <h2 class="text-2xl md:text-4xl font-bold">{project.title}</h2>
                                <h3 class="mt-1 opacity-80">{project.subtitle}</h3>
                            </div>
                            {project.description.map(|text| view! { <p class="leading-relaxed">{text}</p> })}
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {project
                                    .goal
                                    .map(|text| {
                                        view! {
                                            <div>
                                                <h4 class="mb-2 font-bold text-primary-500">
                                                    {move || store.t("projects.goal")}
                                                </h4>
                                                <p class="leading-relaxed">{text}</p>
                                            </div>
                                        }
                                    })}
                                {project
                                    .solution
                                    .map(|text| {
                                        view! {
                                            <div>
                                                <h4 class="mb-2 font-bold text-primary-500">
                                                    {move || store.t("projects.solution")}
                                                </h4>
                                                <p class="leading-relaxed">{text}</p>
                                            </div>
                                        }
                                    })}
                            </div>
                            <div>
                                <h4 class="mb-2 font-bold text-primary-500">
                                    {move || store.t("projects.stack")}
                                </h4>
                                <div class="flex flex-wrap gap-2">
                                    {project
                                        .stack
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <span class="rounded-full border border-white/20 px-3 py-1 text-sm">
                                                    {*tech}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Portal>
    }
}
