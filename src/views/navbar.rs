use dioxus::prelude::*;

use crate::components::{ NavItem, NavbarStyles, AUTH_ITEMS, PUBLIC_NAV_ITEMS };
use crate::configs::{ BUSINESS_NAME, BUSINESS_SLOGAN, CONSULTATION_HREF, NAV_SCROLL_THRESHOLD };
use crate::utils::{ use_scrolled, use_theme };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let mut theme = use_theme();
    let scrolled = use_scrolled(NAV_SCROLL_THRESHOLD);
    let mut mobile_menu_open = use_signal(|| false);

    let is_dark = theme.is_dark();
    let styles = NavbarStyles::new(is_dark, scrolled());

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav {
            id: "navbar",
            class: "fixed top-0 left-0 right-0 z-50 pt-8 {styles.shell}",
            div {
                class: "container mx-auto px-6 sm:px-8 lg:px-12",
                div {
                    class: "flex items-center justify-between h-16 border-b border-gray-200/10 dark:border-gray-800/20",
                    Link {
                        to: "/",
                        class: "flex items-center space-x-4 cursor-pointer group",
                        img {
                            src: "{styles.logo}",
                            alt: "{BUSINESS_NAME} Logo",
                            class: "h-32 w-auto object-contain group-hover:scale-110",
                        }
                        div {
                            class: "hidden sm:block",
                            span {
                                class: "text-xl font-bold bg-gradient-to-r {styles.brand} bg-clip-text text-transparent",
                                "{BUSINESS_NAME}"
                            }
                            div {
                                class: "text-xs font-medium tracking-wider uppercase {styles.slogan}",
                                "{BUSINESS_SLOGAN}"
                            }
                        }
                    }

                    div {
                        class: "flex items-center space-x-1",
                        div {
                            class: "hidden lg:flex items-center space-x-1",
                            for item in PUBLIC_NAV_ITEMS.iter().copied() {
                                DesktopNavItem { key: "{item.href}", item, styles }
                            }
                        }

                        button {
                            class: "p-2.5 rounded-xl cursor-pointer ml-2 {styles.icon_button} hover:scale-110 active:scale-95",
                            "aria-label": "Toggle dark mode",
                            onclick: move |_| theme.toggle(),
                            if is_dark { "🌞" } else { "🌙" }
                        }

                        button {
                            class: "lg:hidden p-2.5 rounded-xl cursor-pointer ml-2 {styles.icon_button} hover:scale-110 active:scale-95",
                            "aria-label": "Toggle mobile menu",
                            onclick: move |_| {
                                let open = mobile_menu_open();
                                mobile_menu_open.set(!open);
                            },
                            if mobile_menu_open() { "✕" } else { "☰" }
                        }
                    }
                }

                div {
                    class: "hidden lg:flex items-center justify-end h-14 space-x-3",
                    Link {
                        to: CONSULTATION_HREF,
                        class: "flex items-center space-x-2 px-6 py-2.5 rounded-xl font-bold text-sm tracking-wide cursor-pointer {styles.cta} hover:scale-105 active:scale-95",
                        span { "⚡" }
                        span { "Free Consultation" }
                    }
                    for item in AUTH_ITEMS.iter() {
                        Link {
                            key: "{item.href}",
                            to: item.href,
                            class: "flex items-center space-x-2 px-5 py-2.5 rounded-xl font-semibold text-sm tracking-wide cursor-pointer bg-gradient-to-r {styles.auth_button} hover:scale-105 active:scale-95",
                            span { class: "text-current", "{item.icon}" }
                            span { "{item.label}" }
                            if item.featured {
                                span { class: "text-xs", "★" }
                            }
                        }
                    }
                }

                if mobile_menu_open() {
                    MobileMenu { styles }
                }
            }
        }

        div { class: "h-32" }
    }
}

#[component]
fn DesktopNavItem(item: NavItem, styles: NavbarStyles) -> Element {
    rsx! {
        div {
            class: "relative group",
            Link {
                to: item.href,
                class: "flex items-center space-x-2 cursor-pointer px-4 py-2 rounded-xl font-medium text-sm tracking-wide {styles.link} hover:scale-105 active:scale-95",
                span { class: "{styles.link_icon}", "{item.icon}" }
                span { "{item.label}" }
            }

            if item.has_children() {
                div {
                    class: "absolute top-full left-0 w-72 rounded-2xl shadow-2xl opacity-0 invisible group-hover:opacity-100 group-hover:visible z-50 {styles.dropdown}",
                    div {
                        class: "p-3",
                        for child in item.children.iter() {
                            Link {
                                key: "{child.href}",
                                to: child.href,
                                class: "flex items-center space-x-3 px-3 py-2 rounded-xl cursor-pointer {styles.dropdown_link}",
                                span { class: "{styles.accent_icon}", "{child.icon}" }
                                span { class: "font-medium text-sm", "{child.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MobileMenu(styles: NavbarStyles) -> Element {
    rsx! {
        div {
            class: "lg:hidden border-t backdrop-blur-2xl {styles.mobile_panel}",
            div {
                class: "px-4 pt-4 pb-6 space-y-2",
                for item in PUBLIC_NAV_ITEMS.iter() {
                    div {
                        key: "{item.href}",
                        Link {
                            to: item.href,
                            class: "flex items-center space-x-4 px-4 py-3 rounded-2xl cursor-pointer {styles.mobile_link} hover:scale-105 active:scale-95",
                            span { class: "{styles.accent_icon}", "{item.icon}" }
                            span { class: "font-medium", "{item.label}" }
                        }
                        if item.has_children() {
                            div {
                                class: "ml-8 mt-2 space-y-1",
                                for child in item.children.iter() {
                                    Link {
                                        key: "{child.href}",
                                        to: child.href,
                                        class: "flex items-center space-x-4 px-4 py-2 rounded-xl cursor-pointer {styles.mobile_child_link} hover:scale-105 active:scale-95",
                                        span { class: "{styles.accent_icon}", "{child.icon}" }
                                        span { "{child.label}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "border-t pt-4 mt-4 space-y-2 {styles.mobile_divider}",
                    for item in AUTH_ITEMS.iter() {
                        Link {
                            key: "{item.href}",
                            to: item.href,
                            class: "flex items-center space-x-4 px-4 py-3 rounded-2xl font-semibold cursor-pointer bg-gradient-to-r {styles.mobile_auth_button} hover:scale-105 active:scale-95",
                            span { class: "text-current", "{item.icon}" }
                            span { "{item.label}" }
                        }
                    }
                    Link {
                        to: CONSULTATION_HREF,
                        class: "flex items-center space-x-4 px-4 py-3 rounded-2xl font-bold cursor-pointer {styles.mobile_cta} hover:scale-105 active:scale-95",
                        span { "⚡" }
                        span { "Free Consultation" }
                    }
                }
            }
        }
    }
}
