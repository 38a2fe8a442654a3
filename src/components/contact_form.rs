use leptos::prelude::*;

use super::{Icon, IconSvg};
use crate::content::ContactRelay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Input(&'static str),
    TextArea { rows: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Field {
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    control: Control,
}

/// Visible fields, all required. The browser blocks submission until each is
/// filled and `email` is well formed.
const FIELDS: [Field; 3] = [
    Field {
        name: "name",
        label: "Name",
        placeholder: "Your Name",
        control: Control::Input("text"),
    },
    Field {
        name: "email",
        label: "Email",
        placeholder: "Your Email",
        control: Control::Input("email"),
    },
    Field {
        name: "message",
        label: "Message",
        placeholder: "Your Message",
        control: Control::TextArea { rows: 4 },
    },
];

fn render_field(field: Field) -> impl IntoView {
    let control = match field.control {
        Control::Input(kind) => view! {
            <input
                type=kind
                name=field.name
                id=field.name
                class="contact-form__control"
                placeholder=field.placeholder
                required=true
            />
        }
        .into_any(),
        Control::TextArea { rows } => view! {
            <textarea
                name=field.name
                id=field.name
                rows=rows
                class="contact-form__control"
                placeholder=field.placeholder
                required=true
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="contact-form__field">
            <label for=field.name class="sr-only">{field.label}</label>
            {control}
        </div>
    }
}

/// Plain form post to the relay; the relay owns the response and redirect.
#[component]
pub fn ContactForm(relay: ContactRelay) -> impl IntoView {
    view! {
        <form action=relay.action method="POST" class="contact-form">
            {relay
                .hidden_fields()
                .into_iter()
                .map(|(name, value)| view! { <input type="hidden" name=name value=value /> })
                .collect::<Vec<_>>()}
            <div class="contact-form__fields">
                {FIELDS.into_iter().map(render_field).collect::<Vec<_>>()}
            </div>
            <div class="contact-form__actions">
                <button type="submit" class="button button--large">
                    "Send Message"
                    <IconSvg icon=Icon::Send size=20 />
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn ContactSection(relay: ContactRelay) -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <div class="section__inner">
                <h2 class="section__title">"Get In Touch"</h2>
                <p class="section__lead">"Have a project in mind? I'd love to hear from you."</p>
                <ContactForm relay=relay />
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render_to_string;
    use crate::content::CONTACT_RELAY;

    fn form_html() -> String {
        render_to_string(|| view! { <ContactForm relay=CONTACT_RELAY /> })
    }

    #[test]
    fn posts_to_the_relay() {
        let html = form_html();

        assert!(html.contains(&format!("action=\"{}\"", CONTACT_RELAY.action)));
        assert!(html.contains("method=\"POST\""));
    }

    #[test]
    fn submits_exactly_five_named_fields() {
        let html = form_html();

        assert_eq!(html.matches(" name=\"").count(), 5);
        for name in ["name", "email", "message", "_next", "_captcha"] {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
        }
        assert!(html.contains("value=\"false\""));
        assert!(html.contains(&format!("value=\"{}\"", CONTACT_RELAY.next)));
    }

    #[test]
    fn visible_fields_are_required() {
        let html = form_html();

        assert_eq!(html.matches("required").count(), FIELDS.len());
        assert!(html.contains("type=\"email\""));
    }
}
