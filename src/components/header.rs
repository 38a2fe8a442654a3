use leptos::prelude::*;

use super::{Icon, IconSvg};
use crate::content::{NAV_ITEMS, SITE_NAME};

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always collapses the panel.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());
    let is_open = move || menu.get().is_open();

    view! {
        <header class="header">
            <div class="header__bar">
                <a href="#" class="header__name">{SITE_NAME}</a>

                <nav class="header__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="header__link"
                                    on:click=move |_| menu.update(NavMenu::close)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <button
                    class="header__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| menu.update(NavMenu::toggle)
                >
                    {move || {
                        let icon = if is_open() { Icon::Close } else { Icon::Menu };
                        view! { <IconSvg icon=icon /> }
                    }}
                </button>
            </div>

            <Show when=is_open>
                <div class="header__mobile">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="header__mobile-link"
                                    on:click=move |_| menu.update(NavMenu::close)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!NavMenu::default().is_open());
    }

    #[test]
    fn odd_toggles_open_even_toggles_close() {
        for presses in 0..8 {
            let mut menu = NavMenu::default();
            for _ in 0..presses {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), presses % 2 == 1, "after {presses} presses");
        }
    }

    #[test]
    fn following_a_link_always_closes() {
        for presses in 0..4 {
            let mut menu = NavMenu::default();
            for _ in 0..presses {
                menu.toggle();
            }
            menu.close();
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn menu_left_open_before_widening_is_closed_by_desktop_link() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());

        // panel hidden by the breakpoint, link followed from the desktop nav
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open(), "one press reopens after narrowing again");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_anchor_links_and_collapsed_panel() {
        use crate::components::render_to_string;

        let html = render_to_string(|| view! { <Header /> });

        for item in NAV_ITEMS {
            assert!(html.contains(&format!("href=\"{}\"", item.href)));
        }
        assert!(html.contains("aria-label=\"Toggle menu\""));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("header__mobile"));
    }
}
