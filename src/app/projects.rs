use leptos::prelude::*;
use leptos_meta::Title;

use crate::nav::Page;
use crate::portfolio::{Project, PROFILE, PROJECTS};

use super::components::Input;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text=Page::Projects.title() />
        <div class="max-w-7xl mx-auto px-6 py-10">
            <h2 class="text-4xl font-bold mb-12 text-center text-slate-900 dark:text-white">
                "Featured Projects"
            </h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
            </div>
            <ContactForm />
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="glass-card rounded-2xl p-6 group hover:-translate-y-2 transition-all duration-300">
            <div class="h-48 rounded-xl bg-slate-100 dark:bg-slate-800 mb-6 overflow-hidden relative border border-slate-200 dark:border-white/5">
                <div class="w-full h-full flex items-center justify-center text-slate-400 dark:text-slate-700 font-bold text-2xl tracking-widest uppercase">
                    {project.title}
                </div>
            </div>
            <h3 class="text-2xl font-bold mb-3 text-slate-900 dark:text-white group-hover:text-indigo-600 dark:group-hover:text-indigo-400 transition-colors">
                {project.title}
            </h3>
            <p class="text-slate-600 dark:text-slate-400 mb-6 line-clamp-2">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="text-[10px] uppercase tracking-wider font-bold px-2 py-1 rounded bg-indigo-500/10 text-indigo-600 dark:text-indigo-400 border border-indigo-500/20">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <a
                href=project.link
                class="flex items-center gap-2 text-sm font-bold text-indigo-600 dark:text-indigo-400 hover:opacity-80"
            >
                "VIEW DETAILS →"
            </a>
        </div>
    }
}

/// Contact form. Submitting only shows a confirmation; no message is sent.
#[component]
fn ContactForm() -> impl IntoView {
    let (sent, set_sent) = signal(false);

    view! {
        <div class="max-w-2xl mx-auto">
            <h2 class="text-3xl font-bold mb-4 text-center text-slate-900 dark:text-white">
                "Get In Touch"
            </h2>
            <p class="text-slate-500 dark:text-slate-400 text-center mb-10">
                "Have a project in mind? Let's talk engineering."
            </p>
            <Show
                when=move || sent.get()
                fallback=move || {
                    view! {
                        <form
                            class="glass-card p-8 rounded-3xl space-y-6"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                log::info!("contact form submitted (simulated)");
                                set_sent.set(true);
                            }
                        >
                            <Input label="Name" placeholder="Your Name" name="name" />
                            <Input label="Email" kind="email" placeholder="Your Email" name="email" />
                            <div class="mb-4">
                                <label class="block text-sm font-medium text-slate-500 dark:text-slate-400 mb-2">
                                    "Message"
                                </label>
                                <textarea
                                    rows=4
                                    name="message"
                                    required=true
                                    placeholder="Tell me about your project..."
                                    class="w-full px-4 py-3 bg-white dark:bg-slate-900/50 border border-slate-200 dark:border-white/10 rounded-xl focus:ring-2 focus:ring-indigo-500/20 focus:border-indigo-500 outline-none transition-all text-slate-900 dark:text-white"
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="w-full py-4 bg-indigo-600 text-white rounded-xl font-bold hover:bg-indigo-700 transition-all"
                            >
                                "Send Message"
                            </button>
                        </form>
                    }
                }
            >
                <div class="glass-card p-8 rounded-3xl text-center space-y-4">
                    <p class="text-lg font-medium text-slate-900 dark:text-white">
                        "Thank you! Your message has been sent to " {PROFILE.email} " (Simulation)"
                    </p>
                    <button
                        class="text-sm font-bold text-indigo-600 dark:text-indigo-400 hover:opacity-80"
                        on:click=move |_| set_sent.set(false)
                    >
                        "Send another"
                    </button>
                </div>
            </Show>
        </div>
    }
}
