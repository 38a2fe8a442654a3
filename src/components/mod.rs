mod contact_form;
mod footer;
mod header;
mod hero;
mod icons;
mod project_card;
mod project_grid;
mod social_links;
mod typed_text;

pub use contact_form::{ContactForm, ContactSection};
pub use footer::Footer;
pub use header::{Header, NavMenu};
pub use hero::Hero;
pub use icons::{Icon, IconSvg};
pub use project_card::{CardImage, ProjectCard};
pub use project_grid::{ProjectGrid, ProjectsSection};
pub use social_links::SocialLinks;
pub use typed_text::TypedText;

/// Renders a view to HTML inside a fresh reactive owner.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_to_string<F, V>(render: F) -> String
where
    F: FnOnce() -> V,
    V: leptos::prelude::IntoView,
{
    leptos::prelude::Owner::new().with(|| render().to_html())
}
