mod home;
mod layout;
mod navbar;
mod not_found;

pub use home::Home;
pub use layout::MainLayout;
pub use navbar::Navbar;
pub use not_found::PageNotFound;
