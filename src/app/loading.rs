use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use super::store::use_ui_store;
use crate::loading::{progress_percent, LoadingStage};

/// Full-screen gate run whenever the store's loading flag goes up.
///
/// The flag is cleared once the gate has opened again. Raising it while a run
/// is already underway does nothing.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let store = use_ui_store();
    let (stage, set_stage) = signal(LoadingStage::Idle);
    let (elapsed, set_elapsed) = signal(0.0f64);

    Effect::new(move |_| {
        if store.is_global_loading() {
            if let Some(first) = stage.get_untracked().start() {
                log::debug!("loading gate started");
                set_elapsed.set(0.0);
                set_stage.set(first);
            }
        }
    });

    Effect::new(move |_| {
        let current = stage.get();
        if !current.is_running() {
            return;
        }
        let handle = set_timeout_with_handle(
            move || {
                let next = current.next();
                set_stage.set(next);
                if !next.is_running() {
                    log::debug!("loading gate finished");
                    store.set_global_loading(false);
                }
            },
            Duration::from_millis(current.duration_ms()),
        );
        match handle {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::error!("couldn't schedule loading stage {current:?}: {e:?}"),
        }
    });

    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        set_elapsed.update(|e| *e += args.delta);
    });
    Effect::new(move |_| {
        if stage.get() == LoadingStage::Progress {
            resume();
        } else {
            pause();
        }
    });

    let percent = move || match stage.get() {
        LoadingStage::Hold | LoadingStage::Opening => 100,
        _ => progress_percent(elapsed.get()),
    };
    let half = move |closed: &'static str, open: &'static str| {
        let base = "absolute left-0 w-full h-1/2 bg-background-900 transition-transform ease-in-out duration-1000";
        if stage.get().is_gate_closed() {
            format!("{base} {closed}")
        } else {
            format!("{base} {open}")
        }
    };

    view! {
        <div
            class=move || {
                if stage.get().is_running() {
                    "fixed inset-0 z-[10000] overflow-hidden"
                } else {
                    "fixed inset-0 z-[10000] overflow-hidden pointer-events-none"
                }
            }
            aria-hidden=move || (!stage.get().is_running()).to_string()
        >
            <div class=move || half("top-0 translate-y-0", "top-0 -translate-y-full")></div>
            <div class=move || half("bottom-0 translate-y-0", "bottom-0 translate-y-full")></div>
            <div class=move || {
                let base = "absolute inset-0 flex flex-col items-center justify-center gap-6 px-6 text-center transition-opacity duration-500";
                if stage.get().is_content_active() {
                    format!("{base} opacity-100")
                } else {
                    format!("{base} opacity-0")
                }
            }>
                <h2 class="text-lg md:text-2xl font-bold text-primary-500">
                    {move || store.t("loading.tipOfTheDayTitle")}
                </h2>
                <p class="max-w-xl text-sm md:text-lg">{move || store.t("loading.tipOfTheDay")}</p>
                <div class="h-10 w-10 animate-spin rounded-full border-2 border-primary-500 border-t-transparent"></div>
                <div class="w-full max-w-md">
                    <div class="h-2 w-full overflow-hidden rounded-full bg-white/10">
                        <div
                            class="h-full bg-primary-500"
                            style:width=move || format!("{}%", percent())
                        ></div>
                    </div>
                    <p class="mt-2 text-sm">
                        {move || store.t("loading.loading")} " " {percent} "%"
                    </p>
                </div>
            </div>
        </div>
    }
}
