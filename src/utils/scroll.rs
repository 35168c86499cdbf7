use dioxus::prelude::*;

/// Tracks whether the window has been scrolled past `threshold` pixels.
#[cfg(target_arch = "wasm32")]
pub fn use_scrolled(threshold: f64) -> Signal<bool> {
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let mut scrolled = use_signal(|| false);

    let listener = use_hook(move || {
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            let past = y > threshold;
            if *scrolled.peek() != past {
                scrolled.set(past);
            }
        });

        if let Some(window) = web_sys::window() {
            if
                let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref()
                )
            {
                log::error!("Failed to attach scroll listener: {:?}", e);
            }
        }
        Rc::new(on_scroll)
    });

    use_drop(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                (*listener).as_ref().unchecked_ref()
            );
        }
    });

    scrolled
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_scrolled(_threshold: f64) -> Signal<bool> {
    use_signal(|| false)
}
