use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_interval_fn, use_window, utils::Pausable};

use super::{icons::InlineSvg, store::use_ui_store};
use crate::{
    i18n::{displayed_language, translate, Language, CYCLE_INTERVAL_MS, LANGUAGES},
    selection::{SelectionChange, LANGUAGE_SELECTED_EVENT},
};

/// Text that cycles through the page languages until the visitor picks one.
///
/// `pinned` fixes the language regardless of the selection.
#[component]
pub fn Multilingual(
    translation_key: &'static str,
    #[prop(optional)] pinned: Option<Language>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let store = use_ui_store();
    let (tick, set_tick) = signal(0usize);

    let Pausable { pause, resume, .. } =
        use_interval_fn(move || set_tick.update(|t| *t += 1), CYCLE_INTERVAL_MS);

    Effect::new(move |_| {
        if pinned.is_some() || store.is_language_selected() {
            pause();
        } else {
            resume();
        }
    });

    let text = move || {
        let lang = displayed_language(
            store.is_language_selected(),
            store.language(),
            pinned,
            tick.get(),
        );
        translate(lang, translation_key)
    };

    view! {
        <span class=class>
            {move || {
                let text = text();
                view! { <span class="inline-block animate-fade-in">{text}</span> }
            }}
        </span>
    }
}

/// One flag button per page language.
///
/// With `with_loading`, the first selection also runs the loading gate.
#[component]
pub fn LanguageSwitcher(#[prop(optional)] with_loading: bool) -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="flex justify-center gap-2 md:gap-4">
            {LANGUAGES
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            type="button"
                            class="flex flex-col items-center gap-1 px-3 py-2 rounded-2xl cursor-pointer transition-colors duration-300 hover:bg-white/10"
                            on:click=move |_| {
                                let change = store.select_language(lang);
                                if with_loading && change == SelectionChange::First {
                                    store.trigger_loading();
                                }
                            }
                        >
                            <span class="text-3xl md:text-5xl leading-none">{lang.flag()}</span>
                            <span class="text-xs md:text-sm">{lang.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Floating prompt asking the visitor to pick a language.
#[component]
pub fn LanguagePrompt() -> impl IntoView {
    let store = use_ui_store();
    let (dismissed, set_dismissed) = signal(false);

    // follows the window event rather than the store
    let _ = use_event_listener(
        use_window(),
        ev::Custom::<web_sys::Event>::new(LANGUAGE_SELECTED_EVENT),
        move |_| set_dismissed.set(true),
    );

    // a selection cleared from another tab brings the prompt back
    Effect::new(move |_| {
        if !store.is_language_selected() {
            set_dismissed.set(false);
        }
    });

    view! {
        <Show when=move || !dismissed.get() && !store.is_language_selected()>
            <div class="fixed bottom-6 left-1/2 -translate-x-1/2 z-[60] w-[90vw] max-w-md overflow-hidden rounded-3xl bg-background-100/90 backdrop-blur-md p-4 shadow-xl animate-fade-in">
                <InlineSvg
                    name="languages"
                    class="absolute -top-4 -left-4 w-32 h-32 opacity-5 pointer-events-none"
                />
                <p class="relative text-center text-base md:text-lg mb-3">
                    <Multilingual translation_key="selectLanguage" />
                </p>
                <LanguageSwitcher with_loading=true />
            </div>
        </Show>
    }
}
