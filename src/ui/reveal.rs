//! Scroll helpers: one-shot reveal on viewport entry and smooth scrolling
//!
//! Each watched region gets its own IntersectionObserver with a 10%
//! threshold. The first qualifying report marks the region revealed in the
//! shared `VisibilityFlags` and disconnects the observer; unmounting
//! disconnects it too.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{Region, VisibilityFlags};

/// Watch `target` and reveal `region` the first time it scrolls into view.
///
/// Returns a signal that is true once the region has been revealed.
pub fn use_reveal_on_scroll(
    target: NodeRef<Div>,
    region: Region,
    flags: RwSignal<VisibilityFlags>,
) -> Memo<bool> {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{OneShot, REVEAL_THRESHOLD, crosses_threshold};
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };

            let mut subscription = OneShot::new();
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let crossed = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .any(|entry| {
                            crosses_threshold(entry.is_intersecting(), entry.intersection_ratio())
                        });

                    if crossed && subscription.fire() {
                        flags.update(|f| {
                            f.reveal(region);
                        });
                        observer.disconnect();
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => {
                    observer.observe(&element);
                    // Keep the closure alive for the observer
                    callback.forget();

                    // Stop watching if the region unmounts before it was revealed
                    let observer = StoredValue::new_local(observer);
                    on_cleanup(move || {
                        observer.try_with_value(|o| o.disconnect());
                    });
                }
                Err(e) => {
                    leptos::logging::warn!(
                        "IntersectionObserver unavailable, revealing {:?}: {:?}",
                        region,
                        e
                    );
                    flags.update(|f| {
                        f.reveal(region);
                    });
                }
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = target;

    Memo::new(move |_| flags.get().is_revealed(region))
}

/// Smoothly scroll the element with the given id into view
pub fn scroll_to_id(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            leptos::logging::warn!("No element with id {} to scroll to", id);
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(feature = "ssr")]
    let _ = id;
}
