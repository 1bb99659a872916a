use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use crate::{
    gallery::{GalleryEvent, GalleryState},
    i18n::{translate, Language},
    projects::find_project,
    scroll::{container_overflow, Overflow},
    selection::{
        LanguageSelection, SelectionChange, LANGUAGE_CODE_KEY, LANGUAGE_SELECTED_EVENT,
        LANGUAGE_SELECTED_KEY,
    },
};

/// Page-wide UI state, provided once by `App` and shared through context.
///
/// Every write goes through a method here. Components that aren't wired to
/// the store can still follow selections through the `languageSelected`
/// window event.
#[derive(Clone, Copy)]
pub struct UiStore {
    selection: RwSignal<LanguageSelection>,
    global_loading: RwSignal<bool>,
    gallery: RwSignal<GalleryState>,
    set_stored_flag: WriteSignal<String>,
    set_stored_code: WriteSignal<String>,
}

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(feature = "hydrate")]
fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

#[cfg(not(feature = "hydrate"))]
fn browser_language() -> Option<String> {
    None
}

fn broadcast_language_selected() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dispatched = web_sys::CustomEvent::new(LANGUAGE_SELECTED_EVENT)
        .and_then(|event| window.dispatch_event(&event));
    if let Err(e) = dispatched {
        log::warn!("couldn't dispatch {LANGUAGE_SELECTED_EVENT}: {e:?}");
    }
}

impl UiStore {
    pub fn new() -> Self {
        let (stored_flag, set_stored_flag, _) =
            use_local_storage::<String, FromToStringCodec>(LANGUAGE_SELECTED_KEY);
        let (stored_code, set_stored_code, _) =
            use_local_storage::<String, FromToStringCodec>(LANGUAGE_CODE_KEY);

        let store = Self {
            selection: RwSignal::new(LanguageSelection::default()),
            global_loading: RwSignal::new(false),
            gallery: RwSignal::new(GalleryState::default()),
            set_stored_flag,
            set_stored_code,
        };

        // Storage is only readable once hydrated. The first run restores the
        // saved selection; later runs are writes from another tab.
        Effect::watch(
            move || (stored_flag.get(), stored_code.get()),
            move |(flag, code), prev, _| {
                let flag = non_empty(flag);
                let code = non_empty(code);
                if prev.is_none() {
                    let restored =
                        LanguageSelection::restore(flag, code, browser_language().as_deref());
                    log::debug!("restored language selection: {restored:?}");
                    store.selection.set(restored);
                } else {
                    store.selection.maybe_update(|s| {
                        let changed = s.sync_from_storage(flag, code);
                        if changed {
                            log::info!("language selection changed outside this window: {s:?}");
                        }
                        changed
                    });
                }
            },
            true,
        );

        store
    }

    pub fn is_language_selected(&self) -> bool {
        self.selection.with(LanguageSelection::is_selected)
    }

    pub fn language(&self) -> Language {
        self.selection.with(LanguageSelection::language)
    }

    /// Translation of `key` in the active language.
    pub fn t(&self, key: &str) -> String {
        translate(self.language(), key)
    }

    pub fn select_language(&self, language: Language) -> SelectionChange {
        let change = self
            .selection
            .try_update(|s| s.select(language))
            .unwrap_or(SelectionChange::Unchanged);
        if let Some(flag) = self.selection.with_untracked(LanguageSelection::stored_flag) {
            self.set_stored_flag.set(flag.to_string());
        }
        self.set_stored_code.set(language.code().to_string());
        broadcast_language_selected();
        log::info!("language selected: {language} ({change:?})");
        change
    }

    pub fn is_global_loading(&self) -> bool {
        self.global_loading.get()
    }

    pub fn set_global_loading(&self, loading: bool) {
        self.global_loading.set(loading);
    }

    pub fn trigger_loading(&self) {
        self.global_loading.set(true);
    }

    pub fn expanded_project(&self) -> Option<String> {
        self.gallery.with(|g| g.expanded().map(str::to_owned))
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.gallery.with(|g| g.expanded() == Some(id))
    }

    pub fn gallery_event(&self, event: GalleryEvent) {
        self.gallery
            .maybe_update(|g| g.apply(event, |id| find_project(id).is_some()));
    }

    pub fn overflow(&self) -> Overflow {
        container_overflow(
            self.is_language_selected(),
            self.is_global_loading(),
            self.gallery.with(GalleryState::is_expanded),
        )
    }
}
