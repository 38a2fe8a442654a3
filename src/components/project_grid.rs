use leptos::prelude::*;

use super::ProjectCard;
use crate::content::Project;

#[component]
pub fn ProjectGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="project-grid">
            {projects
                .iter()
                .map(|p| view! { <ProjectCard project=*p /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="section section--muted">
            <div class="section__inner">
                <h2 class="section__title">"My Recent Projects"</h2>
                <p class="section__lead">"Here are a few projects I've worked on."</p>
                <ProjectGrid projects=projects />
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render_to_string;
    use crate::content::PROJECTS;

    #[test]
    fn renders_one_card_per_project_in_order() {
        let html = render_to_string(|| view! { <ProjectGrid projects=PROJECTS /> });

        assert_eq!(html.matches("class=\"project-card\"").count(), PROJECTS.len());

        let positions: Vec<_> = PROJECTS
            .iter()
            .map(|p| html.find(p.title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
