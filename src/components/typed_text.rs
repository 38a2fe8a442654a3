use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use crate::typewriter::{TypedLine, Typewriter};

/// Looping typed-text line. Renders empty on the server and starts typing
/// once hydrated.
#[component]
pub fn TypedText(lines: &'static [TypedLine]) -> impl IntoView {
    let (visible, set_visible) = signal(String::new());

    let running = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let running = Arc::clone(&running);
        move || running.store(false, Ordering::Relaxed)
    });

    Effect::new(move |_| {
        tick(Typewriter::new(lines), set_visible, Arc::clone(&running));
    });

    view! {
        <span class="typed-text">
            <span class="typed-text__value">{move || visible.get()}</span>
            <span class="typed-text__caret" aria-hidden="true">"|"</span>
        </span>
    }
}

/// Renders the current frame and re-arms a one-shot timer for the next one.
fn tick(mut writer: Typewriter, set_visible: WriteSignal<String>, running: Arc<AtomicBool>) {
    if !running.load(Ordering::Relaxed) {
        return;
    }

    let delay = writer.step();
    set_visible.set(writer.text().to_string());
    set_timeout(move || tick(writer, set_visible, running), delay);
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render_to_string;
    use crate::content::TYPED_LINES;

    #[test]
    fn server_render_starts_blank() {
        let html = render_to_string(|| view! { <TypedText lines=TYPED_LINES /> });

        assert!(html.contains("typed-text__caret"));
        for line in TYPED_LINES {
            assert!(!html.contains(line.text));
        }
    }
}
