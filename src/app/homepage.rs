use leptos::prelude::*;
use leptos_meta::Title;

use crate::nav::Page;
use crate::portfolio::PROFILE;

use super::avatar::{Avatar, InfoBlock};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=Page::Home.title() />
        <div class="max-w-7xl mx-auto px-6 py-20 flex flex-col lg:flex-row items-center gap-12">
            <section class="lg:w-1/2 animate-fade-in">
                <span class="inline-block px-4 py-1 rounded-full bg-indigo-500/10 border border-indigo-500/20 text-indigo-600 dark:text-indigo-400 text-sm font-semibold mb-6">
                    {PROFILE.headline}
                </span>
                <h1 class="text-5xl lg:text-7xl font-bold leading-tight mb-6 text-slate-900 dark:text-white">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-indigo-600 to-violet-600 dark:from-indigo-400 dark:to-violet-400 bg-clip-text text-transparent">
                        {PROFILE.name}
                    </span>
                </h1>
                <p class="text-xl text-slate-600 dark:text-slate-400 mb-10 max-w-lg leading-relaxed">
                    {PROFILE.tagline}
                </p>
                <div class="flex flex-wrap gap-4">
                    <a
                        href=Page::Projects.path()
                        class="px-8 py-4 bg-indigo-600 text-white rounded-xl font-bold hover:bg-indigo-700 hover:-translate-y-1 transition-all"
                    >
                        "Explore Projects"
                    </a>
                    <a
                        href=Page::About.path()
                        class="px-8 py-4 bg-white dark:bg-white/5 text-slate-900 dark:text-white border border-slate-200 dark:border-white/10 rounded-xl font-bold hover:bg-slate-50 dark:hover:bg-white/10 transition-all"
                    >
                        "Read Resume"
                    </a>
                </div>
            </section>
            <section class="lg:w-1/2 relative animate-fade-in">
                <div class="relative z-10 rounded-[3rem] overflow-hidden border border-slate-200 dark:border-white/10 shadow-2xl aspect-square lg:aspect-auto lg:h-[600px] w-full max-w-lg mx-auto bg-slate-200 dark:bg-slate-800">
                    <Avatar class="w-full h-full object-cover object-top hover:scale-105 transition-transform duration-700" />
                    <div class="absolute bottom-8 left-8 right-8 p-6 glass rounded-2xl border border-white/20 z-30">
                        <InfoBlock />
                    </div>
                </div>
            </section>
        </div>
    }
}
