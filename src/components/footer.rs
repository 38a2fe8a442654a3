use chrono::Datelike;
use leptos::prelude::*;

use super::SocialLinks;
use crate::content::{FOOTER_LINKS, SITE_NAME};

fn copyright(year: i32) -> String {
    format!("© {year} {SITE_NAME}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <p class="footer__copyright">{copyright(year)}</p>
                <SocialLinks links=FOOTER_LINKS />
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_site() {
        assert_eq!(copyright(2025), "© 2025 latticeGhost. All rights reserved.");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_current_year() {
        use crate::components::render_to_string;

        let html = render_to_string(|| view! { <Footer /> });
        assert!(html.contains(&chrono::Local::now().year().to_string()));
        assert!(html.contains("mailto:chirpyelm@tutamail.com"));
    }
}
