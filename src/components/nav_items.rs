#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub children: &'static [NavItem],
    /// Rendered with a star badge.
    pub featured: bool,
}

impl NavItem {
    const fn leaf(label: &'static str, href: &'static str, icon: &'static str) -> Self {
        Self { label, href, icon, children: &[], featured: false }
    }

    const fn featured(self) -> Self {
        Self { featured: true, ..self }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

pub const SERVICE_ITEMS: &[NavItem] = &[
    NavItem::leaf("Strategy Analysis", "/services/strategy", "📈"),
    NavItem::leaf("Data Cleanup", "/services/cleanup", "🗄"),
    NavItem::leaf("Power BI Dashboards", "/services/powerbi", "📊"),
    NavItem::leaf("Reporting Solutions", "/services/reporting", "📄"),
];

pub const PUBLIC_NAV_ITEMS: &[NavItem] = &[
    NavItem::leaf("Home", "/", "🏠"),
    NavItem::leaf("About", "/about", "👤"),
    NavItem {
        label: "Services",
        href: "/services",
        icon: "📊",
        children: SERVICE_ITEMS,
        featured: false,
    },
    NavItem::leaf("Portfolio", "/portfolio", "📁"),
    NavItem::leaf("Blog", "/blog", "📖"),
    NavItem::leaf("Contact", "/contact", "✉"),
];

pub const AUTH_ITEMS: &[NavItem] = &[
    NavItem::leaf("Sign In", "/signin", "🔑"),
    NavItem::leaf("Sign Up", "/signup", "➕").featured(),
];
