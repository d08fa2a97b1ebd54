use leptos::prelude::*;
use leptos_meta::Title;

use crate::nav::Page;
use crate::portfolio::{Milestone, Skill, MILESTONES, PROFILE, SKILLS};

use super::avatar::Avatar;
use super::components::SectionHeading;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=Page::About.title() />
        <div class="max-w-4xl mx-auto px-6 py-10 animate-fade-in">
            <section class="flex flex-col md:flex-row gap-12 items-start mb-16">
                <div class="w-full md:w-1/3 aspect-square rounded-3xl overflow-hidden glass-card p-2">
                    <Avatar class="w-full h-full object-cover rounded-2xl" />
                </div>
                <div class="flex-1">
                    <h2 class="text-4xl font-bold mb-6 text-slate-900 dark:text-white">"About Me"</h2>
                    <p class="text-lg text-slate-600 dark:text-slate-400 mb-6 leading-relaxed">
                        {PROFILE.summary}
                    </p>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <ContactCard label="Email" value=PROFILE.email />
                        <ContactCard label="Mobile" value=PROFILE.phone />
                    </div>
                </div>
            </section>
            <section id="skills" class="mb-16">
                <SectionHeading text="Technical Expertise" />
                <div class="grid gap-8">
                    {SKILLS.iter().map(|skill| view! { <SkillBar skill=skill /> }).collect_view()}
                </div>
            </section>
            <section id="education">
                <SectionHeading text="Education & Career" />
                <div class="space-y-8 relative">
                    {MILESTONES
                        .iter()
                        .map(|milestone| view! { <Timeline milestone=milestone /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn ContactCard(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="glass p-4 rounded-xl border border-slate-200 dark:border-white/5">
            <span class="text-xs text-slate-500 block mb-1">{label}</span>
            <span class="text-sm font-medium break-all">{value}</span>
        </div>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between mb-2">
                <span class="font-medium text-slate-700 dark:text-slate-300">{skill.name}</span>
                <span class="text-indigo-600 dark:text-indigo-400 font-bold">
                    {format!("{}%", skill.level())}
                </span>
            </div>
            <div class="h-2 w-full bg-slate-200 dark:bg-slate-800 rounded-full overflow-hidden">
                <div
                    class="skill-bar h-full bg-gradient-to-r from-indigo-500 to-violet-500 rounded-full"
                    style=skill.bar_width()
                ></div>
            </div>
        </div>
    }
}

#[component]
fn Timeline(milestone: &'static Milestone) -> impl IntoView {
    view! {
        <div class="pl-10 relative">
            <div class="absolute left-0 top-2 w-6 h-6 rounded-full bg-indigo-600/20 border-4 border-slate-50 dark:border-[#0f172a] ring-1 ring-indigo-500/50"></div>
            <span class="text-xs font-bold text-indigo-600 dark:text-indigo-400 mb-1 block uppercase tracking-widest">
                {milestone.year}
            </span>
            <h4 class="text-xl font-bold text-slate-900 dark:text-white mb-1">{milestone.title}</h4>
            <p class="text-slate-500 dark:text-slate-400">{milestone.subtitle}</p>
        </div>
    }
}
