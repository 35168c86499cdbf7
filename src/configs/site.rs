pub const BUSINESS_NAME: &str = "Datara Cloud";
pub const BUSINESS_SLOGAN: &str = "Data strategy, cleaned and visualized";

pub const NAV_LOGO_LIGHT: &str =
    "https://res.cloudinary.com/datara-cloud/image/upload/v1/branding/nav_logo_light.png";
pub const NAV_LOGO_DARK: &str =
    "https://res.cloudinary.com/datara-cloud/image/upload/v1/branding/nav_logo_dark.png";

/// Pixels of vertical scroll after which the navbar switches to its dense backdrop.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

pub const CONSULTATION_HREF: &str = "/consultation";
