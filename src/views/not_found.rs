use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "container mx-auto p-4 py-16 text-center",
            h1 { class: "text-2xl font-bold mb-4", "Page not found" }
            p { class: "text-gray-500 mb-6", "Nothing lives at {path} yet." }
            Link { to: "/", class: "text-blue-600 hover:underline", "Back to home" }
        }
    }
}
