use leptos::prelude::*;

use super::{icons::InlineSvg, scroll::SECTION_COUNT, store::use_ui_store};
use crate::i18n::LANGUAGES;

/// Icon and translation key per section, in page order.
const MENU_ITEMS: [(&str, &str); SECTION_COUNT] = [
    ("hi", "menu.intro"),
    ("star", "menu.bio"),
    ("skills", "menu.skills"),
    ("projects", "menu.projects"),
    ("briefcase", "menu.experience"),
    ("contacts", "menu.contact"),
];

/// Side navigation. Slides in once a language has been selected.
#[component]
pub fn Menu(
    #[prop(into)] active: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let store = use_ui_store();

    view! {
        <nav class=move || {
            let base = "fixed left-0 top-1/2 -translate-y-1/2 z-50 flex flex-col gap-4 p-2 md:p-4 transition-transform duration-700";
            if store.is_language_selected() {
                format!("{base} translate-x-0")
            } else {
                format!("{base} -translate-x-full pointer-events-none")
            }
        }>
            <div class="flex flex-col gap-2 rounded-full bg-black/30 backdrop-blur-md p-1 md:p-2">
                {MENU_ITEMS
                    .into_iter()
                    .enumerate()
                    .map(|(index, (icon, label_key))| {
                        view! {
                            <MenuItem
                                is_active=Signal::derive(move || active.get() == index)
                                label=Signal::derive(move || store.t(label_key))
                                on_click=move || on_select.run(index)
                            >
                                <InlineSvg name=icon class="w-4 h-4 md:w-6 md:h-6" />
                            </MenuItem>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-col gap-2 rounded-full bg-black/30 backdrop-blur-md p-1 md:p-2">
                {LANGUAGES
                    .into_iter()
                    .map(|lang| {
                        view! {
                            <MenuItem
                                is_active=Signal::derive(move || store.language() == lang)
                                label=Signal::derive(move || lang.label().to_string())
                                on_click=move || {
                                    store.select_language(lang);
                                }
                            >
                                <span class="text-sm md:text-2xl leading-none">{lang.flag()}</span>
                            </MenuItem>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn MenuItem<F>(
    #[prop(into)] is_active: Signal<bool>,
    #[prop(into)] label: Signal<String>,
    on_click: F,
    children: Children,
) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    view! {
        <button
            type="button"
            title=move || label.get()
            aria-label=move || label.get()
            on:click=move |_| on_click()
            class=move || {
                let base = "group flex items-center justify-center w-6 h-6 md:w-12 md:h-12 rounded-full cursor-pointer transition-colors duration-300";
                if is_active.get() {
                    format!("{base} bg-primary-500 text-background-500")
                } else {
                    format!("{base} text-text-500 hover:bg-white/10")
                }
            }
        >
            {children()}
        </button>
    }
}
