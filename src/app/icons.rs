use leptos::{either::Either, prelude::*};

use crate::assets::icon_svg;

/// Embedded SVG icon rendered inline so it inherits `currentColor`.
#[component]
pub fn InlineSvg(name: &'static str, #[prop(optional, into)] class: String) -> impl IntoView {
    match icon_svg(name) {
        Ok(svg) => Either::Left(view! {
            <span
                class=format!("inline-flex items-center justify-center [&>svg]:w-full [&>svg]:h-full {class}")
                inner_html=svg
            ></span>
        }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! { <span class=format!("text-xs text-red-500 {class}")>"Error"</span> })
        }
    }
}
