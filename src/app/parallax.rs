use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use super::{scroll::SectionRefs, store::use_ui_store};
use crate::parallax::{
    is_near_viewport, scroll_progress, InterludeFrame, ParallaxConfig, ParallaxFrame, Spring,
    SpringState, NEAR_VIEWPORT_MARGIN,
};

/// Slide with a scroll-driven background and a dark overlay behind `children`.
///
/// The background follows a spring toward the scroll target and freezes while
/// the slide is far from the viewport.
#[component]
pub fn ParallaxSlide(
    image_url: &'static str,
    #[prop(optional)] config: Option<ParallaxConfig>,
    children: Children,
) -> impl IntoView {
    let refs = expect_context::<SectionRefs>();
    let slide_ref = NodeRef::<html::Div>::new();
    let config = config.unwrap_or_default();
    let spring = Spring::default();
    let spring_state = StoredValue::new(SpringState::default());
    let (frame, set_frame) = signal(ParallaxFrame::default());

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(el) = slide_ref.get_untracked() else {
            return;
        };
        let (Some(slide), Some(viewport)) = (refs.geometry_of(&el), refs.viewport()) else {
            return;
        };
        if !is_near_viewport(slide, viewport, NEAR_VIEWPORT_MARGIN) {
            return;
        }
        let target = config.frame(scroll_progress(slide, viewport));
        let state = spring.step(spring_state.get_value(), target.offset_y, args.delta / 1000.0);
        spring_state.set_value(state);
        let next = ParallaxFrame {
            offset_y: state.position,
            blur: target.blur,
        };
        if frame.get_untracked() != next {
            set_frame.set(next);
        }
    });

    view! {
        <div node_ref=slide_ref class="relative w-full min-h-screen overflow-hidden">
            <div
                class="absolute inset-x-0 -inset-y-32 bg-cover bg-center"
                style:background-image=format!("url({image_url})")
                style:transform=move || frame.get().transform()
                style:filter=move || frame.get().filter()
                style:will-change="transform, filter"
            ></div>
            <div class="absolute inset-0 bg-black/50"></div>
            <div class="relative z-30 w-full min-h-screen">{children()}</div>
        </div>
    }
}

/// "Lucky day" interlude text that fades in and out around the middle of its
/// slide.
#[component]
pub fn Interlude() -> impl IntoView {
    let store = use_ui_store();
    let refs = expect_context::<SectionRefs>();
    let anchor_ref = NodeRef::<html::Div>::new();
    let (frame, set_frame) = signal(InterludeFrame::at(0.0));

    let _ = use_raf_fn(move |_| {
        let Some(el) = anchor_ref.get_untracked() else {
            return;
        };
        let (Some(slide), Some(viewport)) = (refs.geometry_of(&el), refs.viewport()) else {
            return;
        };
        if !is_near_viewport(slide, viewport, NEAR_VIEWPORT_MARGIN) {
            return;
        }
        let next = InterludeFrame::at(scroll_progress(slide, viewport));
        if frame.get_untracked() != next {
            set_frame.set(next);
        }
    });

    view! {
        <div node_ref=anchor_ref class="h-screen w-full">
            <div
                class="fixed inset-0 z-0 flex flex-col items-center justify-center gap-2 px-4 text-center pointer-events-none"
                style:opacity=move || frame.get().opacity.to_string()
                style:transform=move || frame.get().transform()
                style:filter=move || frame.get().filter()
                style:will-change="transform, opacity, filter"
            >
                <h2 class="text-3xl md:text-6xl font-bold text-primary-500">
                    {move || store.t("luckyDay.title")}
                </h2>
                <p class="text-xl md:text-3xl">
                    {move || store.t("luckyDay.experience")} " "
                    <span class="font-bold">{move || store.t("luckyDay.years")}</span>
                </p>
                <p class="text-lg md:text-2xl opacity-80">{move || store.t("luckyDay.role")}</p>
            </div>
        </div>
    }
}
