use dioxus::prelude::*;

use crate::components::SERVICE_ITEMS;
use crate::configs::{ BUSINESS_NAME, BUSINESS_SLOGAN, CONSULTATION_HREF };
use crate::utils::use_theme;

#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let is_dark = theme.is_dark();

    rsx! {
        section {
            class: "container mx-auto px-6 sm:px-8 lg:px-12 py-16 text-center",
            h1 {
                class: if is_dark { "text-4xl font-bold mb-4 text-white" } else { "text-4xl font-bold mb-4 text-gray-900" },
                "Welcome to {BUSINESS_NAME}"
            }
            p {
                class: if is_dark { "text-lg text-gray-400" } else { "text-lg text-gray-600" },
                "{BUSINESS_SLOGAN}"
            }
            Link {
                to: CONSULTATION_HREF,
                class: "inline-block mt-8 px-6 py-3 rounded-xl font-bold bg-gradient-to-r from-purple-500 to-blue-500 text-white shadow-lg",
                "Book a free consultation"
            }
        }

        section {
            class: "container mx-auto px-6 sm:px-8 lg:px-12 pb-16 grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
            for service in SERVICE_ITEMS.iter() {
                Link {
                    key: "{service.href}",
                    to: service.href,
                    class: if is_dark {
                        "block p-6 rounded-2xl bg-gray-800/50 border border-gray-800/50 text-gray-200 hover:scale-105"
                    } else {
                        "block p-6 rounded-2xl bg-white border border-gray-200/50 text-gray-800 shadow hover:scale-105"
                    },
                    div { class: "text-3xl mb-3", "{service.icon}" }
                    h2 { class: "font-semibold", "{service.label}" }
                }
            }
        }
    }
}
