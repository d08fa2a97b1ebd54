use leptos::prelude::*;

use crate::portfolio::{build_year, PROFILE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-100 dark:bg-slate-950 py-16 px-6 border-t border-slate-200 dark:border-white/5 transition-colors">
            <div class="max-w-7xl mx-auto flex flex-col items-center gap-10">
                <div class="flex flex-col md:flex-row items-center justify-between w-full gap-8">
                    <div class="text-center md:text-left">
                        <span class="text-2xl font-bold text-slate-900 dark:text-white">
                            "Er. " {PROFILE.first_name} " "
                            <span class="text-indigo-600 dark:text-indigo-500">{PROFILE.last_name}</span>
                        </span>
                        <p class="text-slate-500 text-sm mt-2">
                            "Computer Science Engineer & Modern Architect"
                        </p>
                    </div>
                    <div class="flex flex-wrap justify-center gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=link.label
                                        aria-label=link.label
                                        class="social-icon text-xl"
                                    >
                                        <i class=link.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-4">
                        <a
                            href=PROFILE.mailto()
                            aria-label="Email"
                            class="w-12 h-12 rounded-full glass flex items-center justify-center text-slate-500 dark:text-slate-400 hover:text-white hover:bg-indigo-600 transition-all"
                        >
                            <i class="extra-email" />
                        </a>
                        <a
                            href=PROFILE.tel()
                            aria-label="Phone"
                            class="w-12 h-12 rounded-full glass flex items-center justify-center text-slate-500 dark:text-slate-400 hover:text-white hover:bg-indigo-600 transition-all"
                        >
                            <i class="extra-phone" />
                        </a>
                    </div>
                </div>
                <div class="text-slate-400 dark:text-slate-600 text-xs text-center border-t border-slate-200 dark:border-white/5 pt-8 w-full">
                    {format!("© {} {}. All rights reserved.", build_year(), PROFILE.name)}
                </div>
            </div>
        </footer>
    }
}
