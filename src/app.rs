mod about;
mod avatar;
mod components;
mod footer;
mod header;
mod homepage;
mod insight;
mod portal;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::nav::{Session, Theme};
use crate::portfolio::PROFILE;

pub use insight::get_career_insight;

use about::AboutPage;
use footer::Footer;
use header::Header;
use homepage::HomePage;
use insight::InsightBar;
use portal::{DashboardPage, LoginPage};
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Theme selection shared with the header toggle.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };
    provide_context(ThemeContext { theme, set_theme });

    // decorative only: nothing checks credentials
    let session = RwSignal::new(Session::default());
    provide_context(session);

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <div class=move || {
                if theme.get().is_dark() { "dark min-h-screen" } else { "min-h-screen" }
            }>
                <div class="min-h-screen bg-slate-50 text-slate-900 dark:bg-[#0f172a] dark:text-slate-100 transition-colors duration-300">
                    <Header />
                    <main class="pt-24 pb-20">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/about") view=AboutPage />
                            <Route path=path!("/projects") view=ProjectsPage />
                            <Route path=path!("/login") view=LoginPage />
                            <Route path=path!("/dashboard") view=DashboardPage />
                        </Routes>
                    </main>
                    <InsightBar />
                    <Footer />
                </div>
            </div>
        </Router>
    }
}
