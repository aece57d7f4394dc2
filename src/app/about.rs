use leptos::{html, prelude::*};

use crate::site::{HIGHLIGHTS, PROFILE_SRC, SKILLS, SKILL_STAGGER_MS};

use super::{
    pointer::use_pointer,
    reveal::{reveal_class, use_revealed},
};

#[component]
pub fn About() -> impl IntoView {
    let intro_ref = NodeRef::<html::Div>::new();
    let skills_ref = NodeRef::<html::Div>::new();
    let intro_visible = use_revealed(intro_ref);
    let skills_visible = use_revealed(skills_ref);
    let (hovered_card, set_hovered_card) = signal(None::<usize>);
    let pointer = use_pointer().pointer;

    view! {
        <section id="about" class="py-20 px-6 relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10">
                <div
                    node_ref=intro_ref
                    class=reveal_class(intro_visible, "text-center mb-16")
                >
                    <h2 class="text-4xl md:text-6xl font-bold text-text-primary mb-6">
                        "About " <span class="gradient-text">"Me"</span>
                    </h2>
                    <p class="text-xl text-text-secondary max-w-3xl mx-auto">
                        "Passionate about creating digital experiences that make a difference"
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12 items-center mb-20">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold text-text-primary mb-4">"My Journey"</h3>
                        <p class="text-text-secondary leading-relaxed">
                            "I'm a passionate full-stack developer with over 3 years of experience creating digital solutions that make a difference. My journey began with curiosity about how things work on the web, and has evolved into a career dedicated to building exceptional user experiences."
                        </p>
                        <p class="text-text-secondary leading-relaxed">
                            "I specialize in modern web technologies, focusing on React, TypeScript, and Node.js ecosystems. I believe in writing clean, maintainable code and creating applications that are not just functional, but delightful to use."
                        </p>
                        <div class="space-y-4" node_ref=skills_ref>
                            <h4 class="text-lg font-medium text-text-primary">
                                "Technologies I work with:"
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {SKILLS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, skill)| {
                                        let delay = format!("{}ms", i as u64 * SKILL_STAGGER_MS);
                                        view! {
                                            <span
                                                class=move || {
                                                    if skills_visible.get() {
                                                        "badge opacity-100 translate-y-0"
                                                    } else {
                                                        "badge opacity-0 translate-y-5"
                                                    }
                                                }
                                                style:transition-delay=delay
                                            >
                                                <i class=skill.icon />
                                                {skill.name}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="relative">
                        <div class="w-80 h-80 mx-auto relative">
                            <div class="absolute inset-0 bg-gradient-primary rounded-full opacity-20 animate-pulse" />
                            <div class="absolute inset-4 bg-surface rounded-full flex items-center justify-center">
                                <img src=PROFILE_SRC alt="Profile" class="w-full h-full rounded-full object-cover" />
                            </div>
                        </div>
                    </div>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, highlight)| {
                            let is_hovered = move || hovered_card.get() == Some(i);
                            view! {
                                <div
                                    class="glass-card p-6 hover-glow group cursor-pointer relative overflow-hidden rounded-lg transition-all duration-300"
                                    class:card-lifted=is_hovered
                                    on:mouseenter=move |_| set_hovered_card.set(Some(i))
                                    on:mouseleave=move |_| set_hovered_card.set(None)
                                >
                                    <div
                                        class="absolute inset-0 bg-gradient-primary opacity-30 group-hover:opacity-50 transition-opacity duration-500"
                                        style:transform=move || pointer.get().spin(5.0, 0.2)
                                    />
                                    <div class="flex flex-col items-center text-center space-y-4 relative z-10">
                                        <div
                                            class="p-3 rounded-full bg-gradient-primary group-hover:animate-pulse text-xl transition-all duration-300"
                                            style:transform=move || {
                                                if is_hovered() {
                                                    pointer.get().tilt(10.0)
                                                } else {
                                                    "rotateX(0deg) rotateY(0deg)".to_string()
                                                }
                                            }
                                        >
                                            {highlight.icon}
                                        </div>
                                        <h3 class="font-semibold text-text-primary group-hover:gradient-text">
                                            {highlight.title}
                                        </h3>
                                        <p class="text-sm text-text-secondary leading-relaxed">
                                            {highlight.description}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
