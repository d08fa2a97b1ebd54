use leptos::prelude::*;

use crate::portfolio::PROFILE;

/// Profile photo that swaps to the bundled image if the remote one fails.
#[component]
pub fn Avatar(#[prop(default = "w-full h-full object-cover")] class: &'static str) -> impl IntoView {
    let (src, set_src) = signal(PROFILE.image);
    view! {
        <img
            src=move || src.get()
            alt=PROFILE.name
            class=class
            on:error=move |_| {
                if src.get_untracked() != PROFILE.image_fallback {
                    set_src.set(PROFILE.image_fallback);
                }
            }
        />
    }
}

#[component]
pub fn InfoBlock() -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class="w-12 h-12 rounded-full bg-indigo-500 flex items-center justify-center font-bold text-white shadow-lg">
                {PROFILE.initials}
            </div>
            <div>
                <h4 class="font-bold text-slate-900 dark:text-white">"Er. " {PROFILE.name}</h4>
                <p class="text-xs text-slate-500 dark:text-slate-400">{PROFILE.headline}</p>
            </div>
        </div>
    }
}
