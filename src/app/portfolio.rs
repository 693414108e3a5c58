use leptos::prelude::*;

use super::dom::navigate_to;
use super::listeners::use_page_listeners;
use super::nav::NavBar;
use crate::content::{
    full_name, gallery_alt, mailto, Project, Stat, AVAILABILITY, CONTACT_EMAIL,
    CONTACT_VISUAL_URL, GALLERY_IMAGES, OWNER_FIRST_NAME, OWNER_LAST_NAME, PORTRAIT_URL,
    PROJECTS, SOCIAL_LINKS, STATS, TAGLINE,
};
use crate::section::Section;
use crate::view_state::ViewState;

const HEADING: &str =
    "font-bold mb-4 bg-gradient-to-r from-white to-emerald-400 bg-clip-text text-transparent";
const GLASS: &str = "bg-stone-900/50 backdrop-blur-xl border border-white/10";

/// The whole site: navigation, hero, about, stats, projects, gallery,
/// contact and footer.
#[component]
pub fn Portfolio() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());
    use_page_listeners(state);

    view! {
        <div class="min-h-screen bg-stone-950 text-white relative overflow-hidden">
            <div
                class="fixed inset-0 opacity-30 pointer-events-none"
                style=move || state.with(|s| s.gradient_style())
            />
            <div class="fixed inset-0 opacity-[0.03] pointer-events-none grain-overlay" />
            <NavBar state />
            <Hero state />
            <About />
            <Stats />
            <Projects />
            <Gallery />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn SectionHeading(
    title: &'static str,
    #[prop(optional)] centered: bool,
    #[prop(default = "text-5xl")] size: &'static str,
) -> impl IntoView {
    let rule = if centered {
        "h-1 w-24 bg-gradient-to-r from-emerald-600 to-emerald-400 rounded-full mx-auto"
    } else {
        "h-1 w-24 bg-gradient-to-r from-emerald-600 to-emerald-400 rounded-full"
    };
    view! {
        <div class="mb-16">
            <h2 class=format!("{size} {HEADING}")>{title}</h2>
            <div class=rule />
        </div>
    }
}

#[component]
fn Hero(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <div class="inline-flex items-center px-4 py-2 bg-emerald-500/10 border border-emerald-500/20 rounded-full text-emerald-400 text-sm font-medium backdrop-blur-sm">
                            <i class="extra-sparkles mr-2" />
                            {AVAILABILITY}
                        </div>
                        <h1 class="text-6xl sm:text-7xl lg:text-8xl font-bold leading-none">
                            <span class="bg-gradient-to-r from-white via-emerald-200 to-emerald-400 bg-clip-text text-transparent">
                                {OWNER_FIRST_NAME}
                            </span>
                            <br />
                            <span class="text-white">{OWNER_LAST_NAME}</span>
                        </h1>
                        <p class="text-xl text-stone-400 leading-relaxed max-w-lg">{TAGLINE}</p>
                        <div class="flex flex-wrap gap-4">
                            <button
                                class="group inline-flex items-center px-8 py-4 bg-emerald-600 hover:bg-emerald-500 text-white rounded-xl font-medium transition-all duration-300 shadow-lg shadow-emerald-500/20 hover:shadow-emerald-500/40"
                                on:click=move |_| navigate_to(state, Section::Projects.anchor_id())
                            >
                                "Explore My Work"
                                <i class="extra-chevron-down ml-2 group-hover:translate-y-1 transition-transform" />
                            </button>
                            <button
                                class="inline-flex items-center px-8 py-4 bg-white/5 hover:bg-white/10 border border-white/10 text-white rounded-xl font-medium transition-all duration-300 backdrop-blur-sm"
                                on:click=move |_| navigate_to(state, Section::Contact.anchor_id())
                            >
                                "Get in Touch"
                            </button>
                        </div>
                    </div>
                    <div class="relative group">
                        <div class="absolute -inset-1 bg-gradient-to-r from-emerald-600 to-emerald-400 rounded-3xl blur-2xl opacity-20 group-hover:opacity-30 transition-opacity duration-500" />
                        <img
                            src=PORTRAIT_URL
                            alt=full_name()
                            class="relative rounded-3xl shadow-2xl w-full border border-white/10"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id=Section::About.anchor_id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-5xl mx-auto">
                <SectionHeading title="About Me" />
                <div class=format!(
                    "{GLASS} rounded-3xl p-8 md:p-12 space-y-6 text-stone-300 leading-relaxed text-lg",
                )>
                    <p>
                        "3rd year "
                        <span class="text-emerald-400 font-semibold">"Computational Mathematics"</span>
                        " student at "
                        <span class="text-emerald-400 font-semibold">"Carleton University"</span>
                        " with a strong interest in software development, data analysis, networking systems, and applied problem-solving. I enjoy working at the intersection of "
                        <span class="text-white font-medium">"hardware and software"</span>
                        ", where logical thinking, abstraction, and implementation come together; something I developed through my participation in CU InSpace, Carleton University's largest engineering design team."
                    </p>
                    <p>
                        "My academic background has given me a solid foundation in mathematical reasoning, algorithms, C++, Python, Java, Linux and low-level systems concepts, while my personal and club projects have allowed me to turn theory into practice, with hands on experience in embedded software. I've worked on projects ranging from "
                        <span class="text-white font-medium">"game development and reinforcement learning"</span>
                        " to "
                        <span class="text-white font-medium">"embedded systems and recovery avionics"</span>
                        ", and I'm particularly interested in building software that is "
                        <span class="text-white font-medium">"reliable, well-structured, and thoughtfully designed"</span>
                        "."
                    </p>
                    <p>
                        "Beyond coursework, I'm actively involved in technical leadership roles, where I collaborate with multidisciplinary teams, manage responsibilities, and learn how to balance technical depth with real-world constraints."
                    </p>
                    <p class="text-white font-medium">
                        "I realized that as long as I keep developing my passion to learn, I will never cease to grow. For this reason I am constantly on the lookout for opportunities that help me hone my abilities."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-5xl mx-auto">
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                    {STATS.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="relative group" data-card="stat">
            <div class="absolute inset-0 bg-gradient-to-r from-emerald-600 to-emerald-400 rounded-2xl blur-xl opacity-0 group-hover:opacity-20 transition-opacity duration-500" />
            <div class=format!(
                "relative {GLASS} rounded-2xl p-8 text-center hover:border-emerald-500/30 transition-all duration-300",
            )>
                <div class="text-5xl font-bold bg-gradient-to-r from-emerald-400 to-emerald-300 bg-clip-text text-transparent mb-2">
                    {stat.number}
                </div>
                <div class="text-stone-400">{stat.label}</div>
            </div>
        </div>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor_id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-7xl mx-auto">
                <SectionHeading title="Project Highlights" size="text-4xl sm:text-5xl" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="group relative" data-card="project">
            <div class="absolute -inset-0.5 bg-gradient-to-r from-emerald-600 to-emerald-400 rounded-2xl blur opacity-0 group-hover:opacity-30 transition-opacity duration-500" />
            <div class=format!(
                "relative {GLASS} rounded-2xl overflow-hidden hover:border-emerald-500/30 transition-all duration-300",
            )>
                <div class="relative h-56 overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-stone-900 via-stone-900/50 to-transparent opacity-60" />
                </div>
                <div class="p-6 space-y-4">
                    <div class="flex justify-between items-start">
                        <div>
                            <h3 class="text-xl font-bold text-white mb-1">{project.title}</h3>
                            <p class="text-sm text-stone-400">{project.subtitle}</p>
                        </div>
                        <span class="text-xs text-emerald-400 font-medium px-3 py-1 bg-emerald-500/10 rounded-full border border-emerald-500/20">
                            {project.year}
                        </span>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="text-xs text-stone-400 px-2 py-1 bg-white/5 rounded-md">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="text-stone-400 text-sm leading-relaxed line-clamp-3">
                        {project.description}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Gallery() -> impl IntoView {
    view! {
        <section id=Section::Gallery.anchor_id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-7xl mx-auto">
                <SectionHeading title="Gallery" />
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                    {GALLERY_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <div
                                    class="group relative aspect-square overflow-hidden rounded-xl"
                                    data-card="gallery"
                                >
                                    <div class="absolute inset-0 bg-gradient-to-t from-stone-900 via-transparent to-transparent opacity-0 group-hover:opacity-80 transition-opacity duration-300 z-10" />
                                    <img
                                        src=*src
                                        alt=gallery_alt(i)
                                        class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700 border border-white/10"
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor_id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-4xl mx-auto text-center">
                <SectionHeading title="Let's Connect" centered=true />
                <p class="text-xl text-stone-400 mb-12 max-w-2xl mx-auto">
                    "I'm always open to discussing projects, opportunities, or collaborations. Feel free to reach out :)"
                </p>
                <div class=format!("{GLASS} rounded-3xl p-8 md:p-12 mb-12")>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-8">
                        <i class="extra-email text-emerald-400 text-2xl" />
                        <a
                            href=mailto()
                            class="text-lg text-white hover:text-emerald-400 transition-colors font-medium"
                        >
                            {CONTACT_EMAIL}
                        </a>
                    </div>
                    <div class="flex justify-center gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.icon.label()
                                        data-card="social"
                                        class="group relative p-4 bg-white/5 hover:bg-emerald-500/10 border border-white/10 hover:border-emerald-500/30 rounded-xl transition-all duration-300"
                                    >
                                        <i class=format!(
                                            "{} text-2xl text-stone-400 group-hover:text-emerald-400 transition-colors",
                                            link.icon.class(),
                                        ) />
                                        <i class="extra-arrow-up-right absolute top-1 right-1 text-xs text-emerald-400 opacity-0 group-hover:opacity-100 transition-opacity" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="relative group">
                    <div class="absolute -inset-1 bg-gradient-to-r from-emerald-600 to-emerald-400 rounded-2xl blur-xl opacity-20 group-hover:opacity-30 transition-opacity duration-500" />
                    <img
                        src=CONTACT_VISUAL_URL
                        alt="Contact visual"
                        class="relative rounded-2xl mx-auto max-w-md border border-white/10"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 sm:px-6 lg:px-8 border-t border-white/10">
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-stone-500">
                    // year is stamped by build.rs at compile time
                    {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), full_name())}
                </p>
            </div>
        </footer>
    }
}
