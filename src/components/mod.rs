mod footer;
pub mod nav_items;
pub mod navbar_style;

pub use footer::Footer;
pub use nav_items::{ NavItem, AUTH_ITEMS, PUBLIC_NAV_ITEMS, SERVICE_ITEMS };
pub use navbar_style::NavbarStyles;
