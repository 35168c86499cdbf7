/// Mirrors the theme onto the document root so Tailwind `dark:` variants apply page-wide.
#[cfg(target_arch = "wasm32")]
pub fn apply_root_theme(is_dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element()) else {
        log::warn!("No document root to apply theme to");
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force("dark", is_dark) {
        log::error!("Failed to set root theme class: {:?}", e);
    }
}

/// Native renderers own a webview, so the class is set through its script bridge.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_root_theme(is_dark: bool) {
    dioxus::document::eval(
        &format!("document.documentElement.classList.toggle('dark', {});", is_dark)
    );
}
