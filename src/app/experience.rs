use leptos::prelude::*;

use super::{language::Multilingual, store::use_ui_store};
use crate::work::{
    connector_height, logo_fallback, row_height, tenure_label, WorkEntry, WORK_ENTRIES,
};

/// Work timeline. Rows alternate sides of a central spine on desktop and
/// collapse into a single column on small screens.
#[component]
pub fn ExperienceSlide() -> impl IntoView {
    view! {
        <div class="container mx-auto flex min-h-screen flex-col gap-10 px-4 py-16 md:pl-24">
            <div class="flex flex-col items-center gap-2 text-center">
                <h1 class="text-3xl md:text-5xl font-light">
                    <Multilingual translation_key="final.title" />
                </h1>
                <p class="text-lg md:text-2xl text-white/70">
                    <Multilingual translation_key="final.tagline" />
                    " "
                    <Multilingual translation_key="final.taglineAccent" class="text-primary-500" />
                </p>
            </div>
            <div class="relative hidden md:block">
                <div class="absolute left-1/2 top-0 h-full w-px -translate-x-1/2 bg-white/15"></div>
                {WORK_ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <TimelineRow entry logo_left=index % 2 == 0 /> })
                    .collect_view()}
            </div>
            <ol class="flex flex-col md:hidden">
                {WORK_ENTRIES.iter().map(|entry| view! { <TimelineItem entry /> }).collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn TimelineRow(entry: &'static WorkEntry, logo_left: bool) -> impl IntoView {
    let months = entry.duration_months();
    let row_class = if logo_left {
        "relative grid grid-cols-2 items-center gap-16"
    } else {
        "relative grid grid-cols-2 items-center gap-16 [&>*:first-child]:order-last"
    };

    view! {
        <div class=row_class style:min-height=format!("{}px", row_height(months))>
            <div class="flex justify-center">
                <CompanyLogo entry />
            </div>
            <EntryText entry />
            <span
                class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 rounded-full border border-white/20 bg-background-500 px-3 py-1 text-xs"
                style:color=entry.accent
            >
                {tenure_label(months)}
            </span>
        </div>
    }
}

#[component]
fn TimelineItem(entry: &'static WorkEntry) -> impl IntoView {
    let months = entry.duration_months();

    view! {
        <li class="flex gap-4">
            <div class="flex flex-col items-center">
                <CompanyLogo entry />
                <div
                    class="w-px bg-white/15"
                    style:height=format!("{}px", connector_height(months))
                ></div>
            </div>
            <div class="flex flex-col gap-1 pb-6">
                <span class="text-xs" style:color=entry.accent>
                    {tenure_label(months)}
                </span>
                <EntryText entry />
            </div>
        </li>
    }
}

#[component]
fn EntryText(entry: &'static WorkEntry) -> impl IntoView {
    let store = use_ui_store();
    let text = move |field: &str| store.t(&entry.text_key(field));

    view! {
        <div class="flex flex-col gap-1">
            <h2 class="text-xl font-semibold" style:color=entry.accent>
                {move || text("name")}
            </h2>
            <p class="text-sm text-white/80">{move || text("position")}</p>
            <p class="text-xs text-white/50">{move || text("years")}</p>
            <p class="text-sm text-white/70">{move || text("description")}</p>
        </div>
    }
}

/// Company logo, or its initial in the accent colour when the image fails.
#[component]
fn CompanyLogo(entry: &'static WorkEntry) -> impl IntoView {
    let store = use_ui_store();
    let failed = RwSignal::new(false);

    view! {
        <div class="flex h-14 w-14 items-center justify-center overflow-hidden rounded-full bg-white/5">
            <Show
                when=move || !failed.get()
                fallback=move || {
                    view! {
                        <span class="text-2xl font-bold" style:color=entry.accent>
                            {move || logo_fallback(&store.t(&entry.text_key("name")))}
                        </span>
                    }
                }
            >
                <img
                    src=entry.logo
                    alt=move || store.t(&entry.text_key("name"))
                    class="h-10 w-10 object-contain"
                    on:error=move |_| {
                        log::debug!("logo for {} failed to load", entry.id);
                        failed.set(true);
                    }
                />
            </Show>
        </div>
    }
}
