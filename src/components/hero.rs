use leptos::prelude::*;

use super::{SocialLinks, TypedText};
use crate::content::{HERO_LINKS, TYPED_LINES};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <h1 class="hero__title">
                "Hi, I'm " <span class="hero__name">"Dib"</span>
            </h1>
            <p class="hero__typed">
                <TypedText lines=TYPED_LINES />
            </p>
            <p class="hero__tagline">
                "I build modern, responsive, and fast web applications."
                <br />
                "Let's create something amazing together."
            </p>
            <SocialLinks links=HERO_LINKS size=28 />
            <a href="#contact" class="button button--large">"Get In Touch"</a>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render_to_string;

    #[test]
    fn anchors_home_and_links_to_contact() {
        let html = render_to_string(|| view! { <Hero /> });

        assert!(html.contains("id=\"home\""));
        assert!(html.contains("Get In Touch"));
        assert!(html.matches("href=\"#contact\"").count() >= 2);
    }
}
