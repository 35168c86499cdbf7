use dioxus::prelude::*;
use crate::views::{ Home, MainLayout, PageNotFound };

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home,
        #[route("/:..segments")]
        PageNotFound {
            segments: Vec<String>,
        },
}
