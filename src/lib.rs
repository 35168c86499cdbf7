mod views;
mod components;
pub mod utils;
mod routes;
pub mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::components::{ NavItem, NavbarStyles };
pub use crate::error::ThemeError;
