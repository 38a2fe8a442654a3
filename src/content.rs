//! Static site content: projects, navigation, profile links, hero lines and
//! the contact relay settings. Everything here is fixed at build time.

use std::time::Duration;

use crate::components::Icon;
use crate::typewriter::TypedLine;

pub const SITE_NAME: &str = "latticeGhost";

pub const SITE_DESCRIPTION: &str =
    "latticeGhost builds modern, responsive and fast web applications.";

/// Shown in place of a project image that failed to load.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/e2e8f0/64748b?text=Project+Image";

pub const GITHUB_URL: &str = "https://github.com/latticeghost";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/dibya-ranjan-sethi-6b23a9247";
pub const EMAIL_URL: &str = "mailto:chirpyelm@tutamail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub live_url: &'static str,
    pub source_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Live,
    Source,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Live => "View Live",
            LinkKind::Source => "View Code",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            LinkKind::Live => Icon::Eye,
            LinkKind::Source => Icon::Code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub href: &'static str,
}

impl Project {
    /// Outbound links for the card. The live link always comes first; the
    /// source link only exists when the project publishes its code.
    pub fn links(&self) -> Vec<ProjectLink> {
        std::iter::once(ProjectLink {
            kind: LinkKind::Live,
            href: self.live_url,
        })
        .chain(self.source_url.map(|href| ProjectLink {
            kind: LinkKind::Source,
            href,
        }))
        .collect()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "toolsTree",
        description: "Discover smart, high-performance utilities for developers, finance, content creation, and more.",
        image_url: "https://i.postimg.cc/Ss3dN2wZ/t-T-img-Url.png",
        live_url: "https://toolstree.vercel.app/",
        source_url: Some("https://github.com/latticeghost/toolsTree"),
    },
    Project {
        title: "A Cybersecurity Odyssey",
        description: "A long-form write-up of my path through offensive and defensive security labs, CTFs and the tooling I built along the way.",
        // no published screenshot yet
        image_url: PLACEHOLDER_IMAGE,
        live_url: "https://latticeghost.github.io/cybersecurity-odyssey/",
        source_url: None,
    },
    Project {
        title: "Landing Page",
        description: "A responsive product landing page with a focus on layout, typography and fast first paint.",
        image_url: "https://i.postimg.cc/Y9MkD0XT/landing-page-img-Url.png",
        live_url: "https://latticeghost.github.io/landing-page/",
        source_url: Some("https://github.com/latticeghost/landing-page"),
    },
    Project {
        title: "This Portfolio Website",
        description: "This very portfolio, server-rendered and hydrated with Rust and Leptos to showcase my skills and projects.",
        image_url: "https://i.postimg.cc/Qt3xL0MK/portfolio-img-Url.png",
        live_url: "https://latticeghost.github.io/",
        source_url: Some("https://github.com/latticeghost/portfolio"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        href: "#home",
    },
    NavItem {
        label: "Projects",
        href: "#projects",
    },
    NavItem {
        label: "Contact",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    /// Opens in a new browsing context.
    pub external: bool,
}

/// Profile links under the hero. The mail icon scrolls to the contact form.
pub const HERO_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: GITHUB_URL,
        icon: Icon::GitHub,
        external: true,
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        icon: Icon::LinkedIn,
        external: true,
    },
    SocialLink {
        label: "Contact",
        href: "#contact",
        icon: Icon::Mail,
        external: false,
    },
];

pub const FOOTER_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: GITHUB_URL,
        icon: Icon::GitHub,
        external: true,
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        icon: Icon::LinkedIn,
        external: true,
    },
    SocialLink {
        label: "Email",
        href: EMAIL_URL,
        icon: Icon::Mail,
        external: true,
    },
];

pub const TYPED_LINES: &[TypedLine] = &[
    TypedLine::new("I build modern web applications.", Duration::from_millis(2000)),
    TypedLine::new("I build fast, responsive interfaces.", Duration::from_millis(2000)),
    TypedLine::new("I break things to secure them.", Duration::from_millis(2000)),
    TypedLine::new("I write Rust for fun.", Duration::from_millis(2500)),
];

/// Hosted relay that turns form posts into email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRelay {
    pub action: &'static str,
    /// Where the relay redirects after a successful submission.
    pub next: &'static str,
    pub captcha: bool,
}

impl ContactRelay {
    pub fn hidden_fields(&self) -> [(&'static str, &'static str); 2] {
        [
            ("_next", self.next),
            ("_captcha", if self.captcha { "true" } else { "false" }),
        ]
    }
}

pub const CONTACT_RELAY: ContactRelay = ContactRelay {
    action: "https://formsubmit.co/d68e652cd1bbfd3303e400693ad92f7f",
    next: "https://latticeghost.github.io/landing-page/",
    captcha: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_has_title_and_live_url() {
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.live_url.is_empty(), "{} has no live url", project.title);
        }
    }

    #[test]
    fn source_link_follows_source_url() {
        for project in PROJECTS {
            let links = project.links();
            assert_eq!(links[0].kind, LinkKind::Live);
            assert_eq!(links[0].href, project.live_url);

            match project.source_url {
                Some(url) => {
                    assert_eq!(links.len(), 2, "{}", project.title);
                    assert_eq!(links[1].kind, LinkKind::Source);
                    assert_eq!(links[1].href, url);
                }
                None => assert_eq!(links.len(), 1, "{}", project.title),
            }
        }
    }

    #[test]
    fn cybersecurity_odyssey_only_links_live_site() {
        let odyssey = PROJECTS
            .iter()
            .find(|p| p.title == "A Cybersecurity Odyssey")
            .unwrap();

        let labels: Vec<_> = odyssey.links().iter().map(|l| l.kind.label()).collect();
        assert_eq!(labels, vec!["View Live"]);
    }

    #[test]
    fn images_are_hosted_screenshots_or_the_placeholder() {
        for project in PROJECTS {
            assert!(
                project.image_url == PLACEHOLDER_IMAGE
                    || project.image_url.starts_with("https://i.postimg.cc/"),
                "{}",
                project.title
            );
        }
    }

    #[test]
    fn project_titles_are_unique() {
        let mut titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn relay_disables_captcha() {
        let hidden = CONTACT_RELAY.hidden_fields();
        assert_eq!(hidden[0], ("_next", CONTACT_RELAY.next));
        assert_eq!(hidden[1], ("_captcha", "false"));
    }

    #[test]
    fn footer_links_open_in_new_context() {
        assert!(FOOTER_LINKS.iter().all(|l| l.external));
        let hrefs: Vec<_> = FOOTER_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec![GITHUB_URL, LINKEDIN_URL, EMAIL_URL]);
    }
}
