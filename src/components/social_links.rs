use leptos::prelude::*;

use super::IconSvg;
use crate::content::SocialLink;

#[component]
pub fn SocialLinks(
    links: &'static [SocialLink],
    #[prop(default = 24)] size: u32,
) -> impl IntoView {
    view! {
        <div class="social-links">
            {links
                .iter()
                .map(|link| {
                    let (target, rel) = if link.external {
                        (Some("_blank"), Some("noopener noreferrer"))
                    } else {
                        (None, None)
                    };
                    view! {
                        <a
                            href=link.href
                            target=target
                            rel=rel
                            class="social-links__link"
                            aria-label=link.label
                        >
                            <IconSvg icon=link.icon size=size />
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render_to_string;
    use crate::content::{EMAIL_URL, FOOTER_LINKS, GITHUB_URL, HERO_LINKS, LINKEDIN_URL};

    #[test]
    fn renders_literal_addresses_in_new_context() {
        let html = render_to_string(|| view! { <SocialLinks links=FOOTER_LINKS /> });

        for href in [GITHUB_URL, LINKEDIN_URL, EMAIL_URL] {
            assert!(html.contains(&format!("href=\"{href}\"")), "missing {href}");
        }
        assert_eq!(html.matches("target=\"_blank\"").count(), 3);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 3);
    }

    #[test]
    fn in_page_links_stay_in_the_same_context() {
        let html = render_to_string(|| view! { <SocialLinks links=HERO_LINKS /> });

        assert!(html.contains("href=\"#contact\""));
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }
}
