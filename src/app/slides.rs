use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{
    icons::InlineSvg,
    language::{LanguagePrompt, Multilingual},
    scroll::SectionRefs,
    store::use_ui_store,
};
use crate::assets::{CV_FILE_NAME, CV_URL};

struct SkillCategory {
    title_key: &'static str,
    items: &'static [&'static str],
}

static SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title_key: "skill.core",
        items: &["JavaScript", "TypeScript"],
    },
    SkillCategory {
        title_key: "skill.frameworks",
        items: &["React", "Next.js", "Remix"],
    },
    SkillCategory {
        title_key: "skill.states",
        items: &["Zustand", "MobX", "Redux Toolkit"],
    },
    SkillCategory {
        title_key: "skill.styling",
        items: &["Tailwind CSS", "CSS Modules", "CSS-in-JS", "Framer/Motion"],
    },
    SkillCategory {
        title_key: "skill.tools",
        items: &["Git", "Vite", "Webpack", "Jest", "Playwright"],
    },
    SkillCategory {
        title_key: "skill.api",
        items: &["REST", "WebSockets"],
    },
];

const APPROACH_CARDS: [&str; 5] = [
    "problem_solving",
    "learning",
    "quality",
    "user_focus",
    "reliability",
];

/// When each About Me block appears, in milliseconds after mount.
const REVEAL_DELAYS_MS: [f64; 3] = [300.0, 2300.0, 4300.0];

struct SocialLink {
    name: &'static str,
    icon: &'static str,
    url: &'static str,
    label: &'static str,
}

static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "LinkedIn",
        icon: "linkedin",
        url: "https://www.linkedin.com/in/alexander-tarasov-react/",
        label: "Alexander Tarasov",
    },
    SocialLink {
        name: "Github",
        icon: "github",
        url: "https://github.com/Lexeor",
        label: "@Lexeor",
    },
    SocialLink {
        name: "Telegram",
        icon: "telegram",
        url: "https://t.me/lexeor",
        label: "@lexeor",
    },
];

#[component]
pub fn GreetingsSlide() -> impl IntoView {
    let store = use_ui_store();
    let refs = expect_context::<SectionRefs>();
    let (intro_done, set_intro_done) = signal(false);

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_intro_done.set(true), 2000.0);
    start(());

    view! {
        <div class="relative flex min-h-screen w-full flex-col items-center justify-center gap-2 select-none">
            <div class="flex w-full grow flex-col items-center justify-end">
                <h2 class="text-[32px] md:text-[48px] font-light">
                    <Multilingual translation_key="greeting" />
                </h2>
                <h2 class="mb-4 md:mb-8 text-[32px] md:text-[48px] font-light">
                    <Multilingual translation_key="frontend.intro" />
                </h2>
                <div class="flex w-full min-h-[80px] md:min-h-[200px] flex-col items-center justify-center overflow-hidden text-center">
                    <span class=move || {
                        let base = "text-[16vw] leading-[0.8] font-bold uppercase bg-clip-text text-transparent bg-gradient-to-b from-text-500 to-primary-500 transition-opacity duration-1000";
                        if intro_done.get() {
                            format!("{base} opacity-100")
                        } else {
                            format!("{base} opacity-60")
                        }
                    }>{move || store.t("frontend.mask")}</span>
                    <span class="w-full text-[18px] sm:text-[32px] md:text-[48px] font-light uppercase tracking-[0.3em]">
                        <Multilingual translation_key="frontend.developer" />
                    </span>
                </div>
            </div>
            <div class="flex w-full grow flex-col items-center justify-center">
                <Show
                    when=move || store.is_language_selected()
                    fallback=|| view! { <LanguagePrompt /> }
                >
                    <button
                        type="button"
                        class="mt-10 motion-safe:animate-bounce cursor-pointer"
                        aria-label=move || store.t("menu.bio")
                        on:click=move |_| refs.scroll_to(1)
                    >
                        <InlineSvg
                            name="arrow-down"
                            class="w-12 h-12 rounded-full border border-text-500 p-2 opacity-50 transition-opacity hover:opacity-100"
                        />
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn AboutMeSlide() -> impl IntoView {
    let (visible_blocks, set_visible_blocks) = signal(0usize);

    for (index, delay) in REVEAL_DELAYS_MS.into_iter().enumerate() {
        let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
            move |_: ()| set_visible_blocks.update(|v| *v = (*v).max(index + 1)),
            delay,
        );
        start(());
    }

    let block_class = move |block: usize| {
        let base = "w-full transition-all duration-700 ease-out";
        if visible_blocks.get() >= block {
            format!("{base} opacity-100 translate-y-0")
        } else {
            format!("{base} opacity-0 translate-y-10")
        }
    };

    view! {
        <div class="relative flex min-h-[calc(100vh+4rem)] w-full items-center justify-center px-4 py-20 md:pl-24">
            <div class="container mx-auto flex w-full flex-col gap-16 lg:gap-24">
                <div class=move || block_class(2)>
                    <SectionHeading translation_key="skills" />
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-8">
                        {SKILL_CATEGORIES.iter().map(|category| view! { <SkillGroup category /> }).collect_view()}
                    </div>
                </div>
                <div class=move || block_class(3)>
                    <SectionHeading translation_key="approach" />
                    <div class="grid w-full grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-5 gap-6">
                        {APPROACH_CARDS.into_iter().map(|id| view! { <ApproachCard id /> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SectionHeading(translation_key: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8 flex items-center gap-4">
            <h1 class="text-[36px] lg:text-[48px] font-light">
                <Multilingual translation_key />
            </h1>
            <div class="h-px flex-1 bg-gradient-to-r from-white/10 to-transparent"></div>
        </div>
    }
}

#[component]
fn SkillGroup(category: &'static SkillCategory) -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div>
            <h3 class="mb-4 text-[11px] font-semibold uppercase tracking-[0.2em] text-white/30">
                {move || store.t(category.title_key)}
            </h3>
            <div class="space-y-3">
                {category
                    .items
                    .iter()
                    .map(|name| {
                        let initial = name.chars().next().unwrap_or('?');
                        view! {
                            <div class="group flex items-center gap-3 py-1">
                                <div class="flex h-10 w-10 items-center justify-center rounded-xl border border-white/10 bg-white/5 text-white/60 transition-all group-hover:border-white/20 group-hover:bg-white/10 group-hover:text-white">
                                    {initial}
                                </div>
                                <span class="text-sm md:text-base font-light text-white/70 transition-colors group-hover:text-white">
                                    {*name}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ApproachCard(id: &'static str) -> impl IntoView {
    let store = use_ui_store();
    let title_key = format!("achievements.{id}.title");
    let description_key = format!("achievements.{id}.description");

    view! {
        <div class="group h-48 w-full [perspective:1000px]">
            <div class="relative h-full w-full transition-transform duration-700 [transform-style:preserve-3d] group-hover:[transform:rotateY(180deg)]">
                <div class="absolute inset-0 flex flex-col justify-start rounded-3xl border border-white/20 bg-primary-500/80 p-4 [backface-visibility:hidden]">
                    <span class="text-xl font-medium text-white">
                        {move || store.t(&title_key)}
                    </span>
                    <InlineSvg name="refresh" class="absolute left-4 bottom-4 w-16 h-16 text-white opacity-20" />
                </div>
                <div class="absolute inset-0 rounded-3xl border border-white/20 bg-background-500/20 p-4 [backface-visibility:hidden] [transform:rotateY(180deg)]">
                    <span class="text-sm md:text-base font-light leading-5 tracking-tight text-white">
                        {move || store.t(&description_key)}
                    </span>
                    <InlineSvg name="refresh" class="absolute right-4 bottom-4 w-16 h-16 text-white opacity-20" />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSlide() -> impl IntoView {
    view! {
        <div class="relative flex min-h-screen w-full flex-col justify-end">
            <div class="container mx-auto px-4 pt-16 pb-16 md:pl-24">
                <div class="rounded-[42px] bg-white/10 px-6 py-12 backdrop-blur-xl sm:px-12">
                    <h1 class="mb-12 text-4xl md:text-5xl font-light text-white">
                        <Multilingual translation_key="projects.contact-me" />
                    </h1>
                    <p class="mb-8 text-sm uppercase tracking-wider text-white/60">
                        <Multilingual translation_key="contacts.FindMeOn" />
                    </p>
                    <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="group flex items-center gap-4 rounded-2xl bg-gradient-to-r from-white/10 to-transparent p-4 transition-colors duration-300 hover:to-white/5"
                                    >
                                        <div class="flex h-12 w-12 items-center justify-center rounded-xl bg-white/10 transition-colors group-hover:bg-white/15">
                                            <InlineSvg name=link.icon class="w-6 h-6" />
                                        </div>
                                        <div class="flex flex-col">
                                            <span class="text-xs uppercase tracking-wider text-white/40">
                                                {link.name}
                                            </span>
                                            <span class="font-medium text-white">{link.label}</span>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <CvDownload />
            <Footer />
        </div>
    }
}

/// Tab pinned to the right edge that slides out on hover and downloads the CV.
#[component]
fn CvDownload() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <a
            href=CV_URL
            download=CV_FILE_NAME
            title=move || store.t("cv.download")
            class="group fixed right-0 top-1/2 z-40 -translate-y-1/2 translate-x-[85%] -rotate-6 opacity-80 transition-all duration-500 hover:translate-x-1/4 hover:rotate-0 hover:opacity-100"
        >
            <div class="relative flex h-[280px] w-[200px] flex-col overflow-hidden rounded-lg bg-white shadow-2xl">
                <div class="flex items-center gap-2 bg-primary-500/80 px-3 py-3">
                    <InlineSvg name="download" class="w-6 h-6 text-white" />
                    <span class="text-3xl font-semibold text-white">"CV"</span>
                </div>
                <div class="flex flex-1 flex-col gap-3 px-5 py-3 opacity-10">
                    <div class="h-2 w-14 rounded bg-primary-500"></div>
                    <div class="h-1 w-full rounded bg-[#3a3a3a]"></div>
                    <div class="h-1 w-4/5 rounded bg-[#3a3a3a]"></div>
                    <div class="h-1 w-full rounded bg-[#3a3a3a]"></div>
                    <div class="h-2 w-14 rounded bg-primary-500"></div>
                    <div class="h-1 w-3/5 rounded bg-[#3a3a3a]"></div>
                    <div class="h-1 w-full rounded bg-[#3a3a3a]"></div>
                </div>
                <div class="absolute inset-0 flex items-center justify-center opacity-0 transition-opacity group-hover:opacity-100">
                    <span class="text-center text-2xl font-semibold leading-tight text-black">
                        {move || store.t("cv.download")}
                    </span>
                </div>
            </div>
        </a>
    }
}

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|built_at| built_at.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
fn Footer() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <footer class="absolute inset-x-0 bottom-0 w-full bg-gradient-to-t from-background-500 to-transparent text-center">
            <p class="p-3 text-xs sm:text-sm text-text-400">
                {move || store.t("footer.credit")} " © " {build_year()}
            </p>
        </footer>
    }
}
