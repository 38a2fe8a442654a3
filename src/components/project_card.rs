use leptos::prelude::*;

use super::IconSvg;
use crate::content::{LinkKind, Project, PLACEHOLDER_IMAGE};

/// Image source for a card, degrading to the placeholder once on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardImage {
    Remote(&'static str),
    Placeholder,
}

impl CardImage {
    pub fn src(self) -> &'static str {
        match self {
            CardImage::Remote(url) => url,
            CardImage::Placeholder => PLACEHOLDER_IMAGE,
        }
    }

    /// Records a load failure. Returns whether the source changed; a failing
    /// placeholder is left alone so errors cannot loop.
    pub fn fail(&mut self) -> bool {
        match self {
            CardImage::Remote(_) => {
                *self = CardImage::Placeholder;
                true
            }
            CardImage::Placeholder => false,
        }
    }

    /// Catches a load that already failed before the error handler was
    /// attached: a finished image with no intrinsic width never decoded.
    pub fn settle(&mut self, complete: bool, natural_width: u32) -> bool {
        complete && natural_width == 0 && self.fail()
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let image = RwSignal::new(CardImage::Remote(project.image_url));
    let image_ref = NodeRef::<leptos::html::Img>::new();

    // The server-rendered src starts loading before hydration, so its error
    // event can fire before `on:error` exists.
    Effect::new(move |_| {
        if let Some(el) = image_ref.get() {
            let (complete, width) = (el.complete(), el.natural_width());
            image.update(|img| {
                img.settle(complete, width);
            });
        }
    });

    let links = project
        .links()
        .into_iter()
        .map(|link| {
            let class = match link.kind {
                LinkKind::Live => "project-card__link project-card__link--primary",
                LinkKind::Source => "project-card__link",
            };
            view! {
                <a href=link.href target="_blank" rel="noopener noreferrer" class=class>
                    <IconSvg icon=link.kind.icon() size=18 />
                    {link.kind.label()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="project-card">
            <img
                node_ref=image_ref
                class="project-card__image"
                src=move || image.get().src()
                alt=project.title
                loading="lazy"
                on:error=move |_| {
                    image.update(|img| {
                        img.fail();
                    });
                }
            />
            <div class="project-card__body">
                <div>
                    <h3 class="project-card__title">{project.title}</h3>
                    <p class="project-card__description">{project.description}</p>
                </div>
                <div class="project-card__links">{links}</div>
            </div>
        </article>
    }
}
