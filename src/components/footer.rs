use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::nav_items::SERVICE_ITEMS;
use crate::configs::{ BUSINESS_NAME, BUSINESS_SLOGAN };
use crate::utils::use_theme;

#[component]
pub fn Footer() -> Element {
    let theme = use_theme();
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: if theme.is_dark() {
                "bg-gray-900 text-gray-400 border-t border-gray-800/50"
            } else {
                "bg-gray-50 text-gray-600 border-t border-gray-200/50"
            },
            div {
                class: "container mx-auto px-6 sm:px-8 lg:px-12 py-10 grid gap-8 md:grid-cols-2",
                div {
                    h2 {
                        class: if theme.is_dark() { "text-lg font-bold text-white" } else { "text-lg font-bold text-gray-900" },
                        "{BUSINESS_NAME}"
                    }
                    p { class: "mt-2 text-sm", "{BUSINESS_SLOGAN}" }
                }
                ul {
                    class: "space-y-2 text-sm",
                    for service in SERVICE_ITEMS.iter() {
                        li {
                            key: "{service.href}",
                            Link { to: service.href, class: "hover:underline", "{service.label}" }
                        }
                    }
                }
            }
            div {
                class: "text-center text-xs pb-6",
                "© {year} {BUSINESS_NAME}. All rights reserved."
            }
        }
    }
}
