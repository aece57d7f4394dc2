use leptos::{html, prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "ssr")]
use crate::projects::get_projects;
use crate::projects::{
    categories, filter_by_category, known_category, Project, ALL_CATEGORY, GLOBAL_PROJECT_CACHE,
};

use super::{
    pointer::use_pointer,
    reveal::{reveal_class, use_revealed},
    toast::use_toaster,
};

#[server(input = GetUrl)]
pub async fn get_projects_server(category: String) -> Result<Vec<Project>, ServerFnError> {
    get_projects(category)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn Projects() -> impl IntoView {
    let (active, set_active) = signal(ALL_CATEGORY.to_string());
    let (hovered, set_hovered) = signal(None::<String>);
    let header_ref = NodeRef::<html::Div>::new();
    let header_visible = use_revealed(header_ref);

    // remember the last filter between visits
    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<String, JsonSerdeWasmCodec>("project_category");
        Effect::watch(
            || (),
            move |_, _, _| {
                let s = stored.get_untracked();
                if !s.is_empty() {
                    set_active.set(s);
                }
            },
            true,
        );
        Effect::watch(
            move || active.get(),
            move |category, _, _| set_stored.set(category.clone()),
            false,
        );
    }

    let projects = Resource::new(
        || (),
        move |_| async move {
            let cache = &*GLOBAL_PROJECT_CACHE;
            if let Some(p) = cache.get(ALL_CATEGORY).map(|p| p.clone()) {
                return p;
            }
            let projects = get_projects_server(ALL_CATEGORY.to_string())
                .await
                .unwrap_or_else(|e| {
                    log::error!("couldn't load projects: {e}");
                    Vec::new()
                });
            // the server keeps its own cache
            #[cfg(feature = "hydrate")]
            cache.insert(ALL_CATEGORY.to_string(), projects.clone());
            projects
        },
    );

    // a category restored from storage may no longer exist
    Effect::new(move |_| {
        let Some(projects) = projects.get() else {
            return;
        };
        let current = active.get();
        let known = known_category(&projects, &current);
        if known != current {
            set_active.set(known.to_string());
        }
    });

    view! {
        <section id="projects" class="py-20 px-6 bg-surface/50 relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10">
                <div node_ref=header_ref class=reveal_class(header_visible, "text-center mb-16")>
                    <h2 class="text-4xl md:text-6xl font-bold text-text-primary mb-6">
                        "Featured " <span class="gradient-text">"Projects"</span>
                    </h2>
                    <p class="text-xl text-text-secondary max-w-3xl mx-auto">
                        "A showcase of my recent work and personal projects"
                    </p>
                </div>
                <Transition fallback=move || {
                    view! {
                        <div class="grid md:grid-cols-2 gap-8">
                            <div class="loading-skeleton h-96 rounded-lg"></div>
                            <div class="loading-skeleton h-96 rounded-lg"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let projects = projects.await;
                        let categories = categories(&projects);
                        view! {
                            <ProjectFilter categories active set_active />
                            <div class="grid md:grid-cols-2 gap-8">
                                <For
                                    each=move || filter_by_category(&projects, &active.get())
                                    key=|p| p.name.clone()
                                    children=move |project| {
                                        view! { <ProjectCard project hovered set_hovered /> }
                                    }
                                />
                            </div>
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn ProjectFilter(
    categories: Vec<String>,
    active: ReadSignal<String>,
    set_active: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-3 justify-center mb-12">
            {categories
                .into_iter()
                .map(|category| {
                    let is_active = {
                        let category = category.clone();
                        move || active.get() == category
                    };
                    let on_click = {
                        let category = category.clone();
                        move |_| set_active.set(category.clone())
                    };
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    "filter-badge bg-gradient-primary text-primary-foreground border-0 hover:opacity-90"
                                } else {
                                    "filter-badge border-border bg-surface-light/30 text-text-secondary hover:bg-surface-light/50 hover:text-text-primary"
                                }
                            }
                            on:click=on_click
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    hovered: ReadSignal<Option<String>>,
    set_hovered: WriteSignal<Option<String>>,
) -> impl IntoView {
    let toaster = use_toaster();
    let pointer = use_pointer().pointer;
    let Project {
        name,
        title,
        description,
        image,
        technologies,
        category,
        live_url,
        github_url,
        ..
    } = project;
    let is_hovered = {
        let name = name.clone();
        move || hovered.get().as_deref() == Some(name.as_str())
    };
    let announce = move |action: &'static str, title: String| {
        move |_| {
            toaster.toast(
                format!("{action} {title}"),
                format!("Opening {} for {title}...", action.to_lowercase()),
            )
        }
    };

    view! {
        <article
            class="glass-card rounded-lg overflow-hidden hover-glow group preserve-3d transition-all duration-[400ms]"
            style:transform=move || {
                if is_hovered() {
                    format!("translateY(-10px) {}", pointer.get().tilt(2.0))
                } else {
                    "translateY(0) rotateX(0deg) rotateY(0deg)".to_string()
                }
            }
            on:mouseenter=move |_| set_hovered.set(Some(name.clone()))
            on:mouseleave=move |_| set_hovered.set(None)
        >
            <div class="relative overflow-hidden h-56">
                <img
                    src=image
                    alt=title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <span class="absolute top-4 left-4 px-3 py-1 rounded-full text-xs font-medium bg-background/80 text-text-primary">
                    {category}
                </span>
            </div>
            <div class="p-6 space-y-4">
                <h3 class="text-2xl font-semibold text-text-primary group-hover:gradient-text">
                    {title.clone()}
                </h3>
                <div class="text-text-secondary leading-relaxed" inner_html=description></div>
                <div class="flex flex-wrap gap-2">
                    {technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-md px-2 py-1 bg-surface-light/50 text-xs">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3 pt-2">
                    {live_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-2 rounded-md bg-gradient-primary text-primary-foreground text-sm font-medium hover:opacity-90"
                                    on:click=announce("Live Demo", title.clone())
                                >
                                    "Live Demo ↗"
                                </a>
                            }
                        })}
                    {github_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-2 rounded-md border border-border text-sm hover:bg-surface-light/50"
                                    on:click=announce("Source Code", title.clone())
                                >
                                    <i class="devicon-github-plain mr-1" />
                                    "Code"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
