use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under /icons, without .svg)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BAR_CHART: &str = "bar-chart";
    pub const BOT: &str = "bot";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const FILE_QUESTION: &str = "file-question";
    pub const MESSAGE_SQUARE_MORE: &str = "message-square-more";
    pub const ZAP: &str = "zap";
}
