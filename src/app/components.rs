use leptos::prelude::*;

#[component]
pub fn Input(
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] name: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="w-full text-left">
            <label class="block text-sm font-semibold text-slate-500 dark:text-slate-400 mb-2 px-1">
                {label}
            </label>
            <input
                type=kind
                name=name
                placeholder=placeholder
                required=true
                class="w-full px-5 py-3.5 bg-white dark:bg-slate-900/50 border border-slate-200 dark:border-white/10 rounded-2xl focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500/50 outline-none transition-all duration-300 text-slate-900 dark:text-white placeholder-slate-400 dark:placeholder-slate-600"
            />
        </div>
    }
}

#[component]
pub fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-bold mb-8 flex items-center gap-3 text-slate-900 dark:text-white">
            <span class="w-8 h-1 bg-indigo-500 rounded-full"></span>
            {text}
        </h3>
    }
}
