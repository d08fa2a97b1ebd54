use leptos::{prelude::*, server_fn::codec::Json, task::spawn_local};
use leptos_router::hooks::use_location;

#[cfg(feature = "ssr")]
use std::sync::Arc;

#[cfg(feature = "ssr")]
use crate::insight::{GeminiProvider, InsightFetcher};
use crate::insight::{start_request, InsightTracker, TrackerCell, ERROR_FALLBACK};
use crate::nav::Page;

/// Fetcher shared by every request; provided as server context at startup.
#[cfg(feature = "ssr")]
pub type SharedFetcher = Arc<InsightFetcher<GeminiProvider>>;

impl TrackerCell for RwSignal<InsightTracker> {
    fn with_tracker<U>(&self, f: impl FnOnce(&mut InsightTracker) -> U) -> Option<U> {
        self.try_update(f)
    }
}

#[server(input = Json)]
pub async fn get_career_insight(page: Page) -> Result<String, ServerFnError> {
    let fetcher = use_context::<SharedFetcher>()
        .ok_or_else(|| ServerFnError::new("insight fetcher not configured"))?;
    Ok(fetcher.fetch(page.topic()).await)
}

/// Career tip bar. Each page change starts one fetch; only the answer to the
/// most recent fetch is shown.
#[component]
pub fn InsightBar() -> impl IntoView {
    let location = use_location();
    let page = Memo::new(move |_| Page::from_path(&location.pathname.get()));
    let insight = RwSignal::new(InsightTracker::default());

    Effect::watch(
        move || page.get(),
        move |page, _, _| {
            let page = *page;
            let request = async move {
                get_career_insight(page).await.unwrap_or_else(|e| {
                    log::warn!("career insight request failed: {e}");
                    ERROR_FALLBACK.to_string()
                })
            };
            if let Some(finish) = start_request(insight, request) {
                spawn_local(async move {
                    finish.await;
                });
            }
        },
        true,
    );

    view! {
        <div class="fixed bottom-0 w-full z-40 bg-white/80 dark:bg-[#0f172a]/80 backdrop-blur-md border-t border-slate-200 dark:border-white/5 py-3 px-6">
            <div class="max-w-7xl mx-auto flex items-center justify-center gap-3">
                <div class="flex items-center gap-1.5 px-2 py-0.5 rounded-md bg-indigo-500/10 text-indigo-600 dark:bg-indigo-500/20 dark:text-indigo-400 text-[10px] font-bold uppercase tracking-widest">
                    <span class="w-2 h-2 rounded-full bg-indigo-500 dark:bg-indigo-400 animate-pulse"></span>
                    "welcome"
                </div>
                <p class="text-xs sm:text-sm text-slate-600 dark:text-slate-400 font-medium italic truncate max-w-full">
                    "\"" {move || insight.with(|t| t.text().to_string())} "\""
                </p>
            </div>
        </div>
    }
}
