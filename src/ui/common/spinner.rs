use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Small circular spinner for buttons or text
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! {
        <div
            class="animate-spin rounded-full border-white border-t-transparent h-5 w-5 border-2"
            role="status"
            aria-live="polite"
        >
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Form submit button that swaps its arrow for a spinner while busy
///
/// The button is disabled for as long as `busy` is true.
#[component]
pub fn SubmitButton(
    /// Whether a submission is in flight
    #[prop(into)]
    busy: Signal<bool>,
    /// Button label
    text: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="waitlist-btn-submit group"
            disabled=move || busy.get()
            aria-busy=move || busy.get().to_string()
        >
            <span>{text}</span>
            <Show
                when=move || busy.get()
                fallback=|| view! {
                    <Icon name=icons::ARROW_RIGHT class="h-5 w-5 group-hover:translate-x-1 transition-transform duration-200" />
                }
            >
                <InlineSpinner />
            </Show>
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_button(busy: bool) -> String {
        Owner::new().with(|| view! { <SubmitButton busy=busy text="Join the Waitlist" /> }.to_html())
    }

    #[test]
    fn test_busy_button_is_disabled() {
        let html = render_button(true);

        assert!(html.contains("disabled"), "{}", html);
        assert!(html.contains("role=\"status\""), "{}", html);
    }

    #[test]
    fn test_idle_button_is_enabled() {
        let html = render_button(false);

        assert!(!html.contains("disabled"), "{}", html);
        assert!(html.contains(icons::ARROW_RIGHT), "{}", html);
        assert!(html.contains("Join the Waitlist"), "{}", html);
    }
}
