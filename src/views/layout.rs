use dioxus::prelude::*;

use crate::components::Footer;
use crate::routes::Route;
use crate::views::Navbar;

#[component]
pub fn MainLayout() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "min-h-screen",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
