//! Client portal views. The session flag is cosmetic: the login form accepts
//! anything and the dashboard shows static numbers.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::Redirect, hooks::use_navigate, NavigateOptions};

use crate::nav::{Page, Session};
use crate::portfolio::{DASHBOARD_STATS, PROFILE};

use super::components::Input;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    view! {
        <Title text=Page::Login.title() />
        <div class="max-w-md mx-auto px-6 py-10 animate-fade-in">
            <div class="glass-card p-10 rounded-[2.5rem] border-slate-200 dark:border-white/10">
                <div class="text-center mb-10">
                    <div class="inline-flex items-center justify-center w-20 h-20 rounded-3xl bg-indigo-600 text-white mb-6 -rotate-12 font-bold text-2xl">
                        {PROFILE.initials}
                    </div>
                    <h2 class="text-3xl font-bold mb-2 text-slate-900 dark:text-white">
                        "Client Portal"
                    </h2>
                    <p class="text-slate-500">"Secure access for project tracking."</p>
                </div>
                <form
                    class="space-y-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        session.set(Session::Authenticated);
                        navigate(Page::Dashboard.path(), NavigateOptions::default());
                    }
                >
                    <Input label="Email" kind="email" placeholder="client@company.com" />
                    <Input label="Password" kind="password" placeholder="••••••••" />
                    <button
                        type="submit"
                        class="w-full py-4 bg-indigo-600 text-white rounded-xl font-bold hover:bg-indigo-700 transition-all"
                    >
                        "Log In"
                    </button>
                </form>
                <p class="mt-8 text-center text-xs text-slate-400 dark:text-slate-600">
                    "Secured by Er. " {PROFILE.name}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <Title text=Page::Dashboard.title() />
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <Redirect path=Page::Login.path() /> }
        >
            <Dashboard />
        </Show>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    view! {
        <div class="max-w-5xl mx-auto px-6 py-10 animate-fade-in text-center">
            <div class="glass-card p-12 rounded-[3rem]">
                <div class="w-24 h-24 bg-green-500/20 text-green-600 dark:text-green-500 rounded-full flex items-center justify-center mx-auto mb-8 text-5xl">
                    "✓"
                </div>
                <h1 class="text-4xl font-bold mb-4 text-slate-900 dark:text-white">
                    "Welcome to Your Dashboard"
                </h1>
                <p class="text-slate-500 dark:text-slate-400 mb-10 max-w-md mx-auto">
                    "This is a secure area for clients to view project timelines and documents."
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 mb-12">
                    {DASHBOARD_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="p-6 glass rounded-2xl border border-slate-200 dark:border-white/5">
                                    <span class="text-slate-500 text-sm block mb-1">{stat.label}</span>
                                    <span class="text-3xl font-bold text-indigo-600 dark:text-indigo-400">
                                        {stat.value}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="text-sm font-bold text-slate-400 hover:text-indigo-600 dark:text-slate-500 dark:hover:text-white transition-colors"
                    on:click=move |_| {
                        session.set(Session::Anonymous);
                        navigate(Page::Home.path(), NavigateOptions::default());
                    }
                >
                    "LOG OUT"
                </button>
            </div>
        </div>
    }
}
