use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::hooks::use_location;

use crate::nav::Page;
use crate::portfolio::PROFILE;

use super::ThemeContext;

const NAV_PAGES: [Page; 3] = [Page::Home, Page::About, Page::Projects];

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| Page::from_path(&location.pathname.get()));
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: MouseEvent| set_menu_open.set(false);

    view! {
        <nav class="fixed top-0 w-full z-50 glass border-b border-white/5 py-4 px-6">
            <div class="max-w-7xl mx-auto flex items-center justify-between">
                <a href=Page::Home.path() on:click=close_menu class="flex items-center gap-3 group">
                    <div class="w-10 h-10 rounded-xl shadow-lg bg-indigo-600 flex items-center justify-center text-white font-bold">
                        {PROFILE.initials}
                    </div>
                    <span class="font-bold text-xl tracking-tight hidden sm:inline-block dark:text-white">
                        {PROFILE.first_name}
                        " "
                        <span class="text-indigo-600 dark:text-indigo-500">{PROFILE.last_name}</span>
                    </span>
                </a>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_PAGES
                        .into_iter()
                        .map(move |page| view! { <NavLink page=page current=current /> })
                        .collect_view()}
                    <div class="flex items-center gap-4 ml-4 pl-8 border-l border-slate-200 dark:border-white/10">
                        <ThemeToggle />
                        <a
                            href=Page::Login.path()
                            class="px-5 py-2 rounded-full bg-indigo-600 text-white dark:bg-indigo-600/10 dark:border dark:border-indigo-500/20 dark:text-indigo-400 font-medium hover:bg-indigo-700 transition-all duration-300"
                        >
                            {Page::Login.label()}
                        </a>
                    </div>
                </div>

                <button
                    class="md:hidden text-slate-600 dark:text-slate-300 p-2"
                    aria-label="Open menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <i class="extra-menu text-2xl" />
                </button>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-[60] glass backdrop-blur-2xl flex flex-col items-center justify-center gap-8 md:hidden">
                <button
                    class="absolute top-6 right-6 text-slate-600 dark:text-slate-300"
                    aria-label="Close menu"
                    on:click=close_menu
                >
                    <i class="extra-close text-3xl" />
                </button>
                {NAV_PAGES
                    .into_iter()
                    .map(move |page| {
                        view! {
                            <a href=page.path() on:click=close_menu class="text-2xl font-bold">
                                {page.title()}
                            </a>
                        }
                    })
                    .collect_view()}
                <div class="flex gap-4">
                    <ThemeToggle />
                    <a
                        href=Page::Login.path()
                        on:click=close_menu
                        class="px-8 py-4 rounded-full bg-indigo-600 text-white font-bold"
                    >
                        {Page::Login.label()}
                    </a>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn NavLink(page: Page, current: Memo<Page>) -> impl IntoView {
    view! {
        <a
            href=page.path()
            class=move || {
                if current.get() == page {
                    "nav-link text-sm font-medium transition-colors text-indigo-600 dark:text-indigo-400"
                } else {
                    "nav-link text-sm font-medium transition-colors text-slate-600 hover:text-indigo-600 dark:text-slate-300 dark:hover:text-white"
                }
            }
        >
            {page.label()}
        </a>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    view! {
        <button
            class="p-2 rounded-xl bg-slate-100 dark:bg-slate-800 text-slate-600 dark:text-slate-300 hover:scale-110 transition-all border border-slate-200 dark:border-white/5"
            title=move || ctx.theme.get().toggle_title()
            on:click=move |_| ctx.toggle()
        >
            {move || if ctx.theme.get().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
