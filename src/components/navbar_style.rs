use crate::configs::{ NAV_LOGO_DARK, NAV_LOGO_LIGHT };

/// Theme-dependent class fragments for every styled navbar element.
///
/// Layout classes that never change with the theme stay in the markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarStyles {
    pub shell: &'static str,
    pub logo: &'static str,
    pub brand: &'static str,
    pub slogan: &'static str,
    pub link: &'static str,
    pub link_icon: &'static str,
    pub dropdown: &'static str,
    pub dropdown_link: &'static str,
    pub accent_icon: &'static str,
    pub icon_button: &'static str,
    pub cta: &'static str,
    pub auth_button: &'static str,
    pub mobile_panel: &'static str,
    pub mobile_link: &'static str,
    pub mobile_child_link: &'static str,
    pub mobile_divider: &'static str,
    pub mobile_auth_button: &'static str,
    pub mobile_cta: &'static str,
}

impl NavbarStyles {
    pub fn new(is_dark: bool, scrolled: bool) -> Self {
        let pick = |dark: &'static str, light: &'static str| if is_dark { dark } else { light };

        let shell = match (scrolled, is_dark) {
            (true, true) =>
                "bg-gray-900/95 backdrop-blur-2xl border-b border-gray-800/50 shadow-2xl shadow-blue-500/10",
            (true, false) =>
                "bg-white/95 backdrop-blur-2xl border-b border-gray-200/50 shadow-2xl shadow-blue-500/10",
            (false, true) => "bg-gray-900/90 backdrop-blur-xl border-b border-gray-800/30",
            (false, false) => "bg-white/90 backdrop-blur-xl border-b border-gray-200/30",
        };

        Self {
            shell,
            logo: pick(NAV_LOGO_DARK, NAV_LOGO_LIGHT),
            brand: pick(
                "from-blue-400 via-purple-400 to-blue-300",
                "from-blue-600 via-purple-600 to-blue-500"
            ),
            slogan: pick("text-gray-400", "text-gray-600"),
            link: pick(
                "text-gray-300 hover:text-white hover:bg-gradient-to-r hover:from-blue-500/20 hover:to-purple-500/20",
                "text-gray-700 hover:text-gray-900 hover:bg-gradient-to-r hover:from-blue-500/20 hover:to-purple-500/20"
            ),
            link_icon: pick(
                "text-blue-400 group-hover:text-purple-400",
                "text-blue-600 group-hover:text-purple-600"
            ),
            dropdown: pick(
                "bg-gray-900/95 backdrop-blur-2xl border border-gray-800/50",
                "bg-white/95 backdrop-blur-2xl border border-gray-200/50"
            ),
            dropdown_link: pick(
                "text-gray-300 hover:bg-gradient-to-r hover:from-blue-500/20 hover:to-purple-500/20 hover:text-white",
                "text-gray-700 hover:bg-gradient-to-r hover:from-blue-500/20 hover:to-purple-500/20 hover:text-gray-900"
            ),
            accent_icon: pick("text-blue-400", "text-blue-600"),
            icon_button: pick(
                "bg-gray-800/50 hover:bg-gray-700/50 text-blue-400 hover:text-purple-400 border border-gray-800/50",
                "bg-gray-100/50 hover:bg-gray-200/50 text-blue-600 hover:text-purple-600 border border-gray-200/50"
            ),
            cta: pick(
                "bg-gradient-to-r from-purple-400 to-blue-400 text-gray-900 hover:from-purple-300 hover:to-blue-300 shadow-lg shadow-purple-400/30",
                "bg-gradient-to-r from-purple-500 to-blue-500 text-white hover:from-purple-400 hover:to-blue-500 shadow-lg shadow-purple-500/30"
            ),
            auth_button: pick(
                "from-blue-500 to-purple-500 text-white hover:from-blue-400 hover:to-purple-400 shadow-lg shadow-blue-500/30",
                "from-blue-600 to-purple-600 text-white hover:from-blue-500 hover:to-purple-500 shadow-lg shadow-blue-500/30"
            ),
            mobile_panel: pick("border-gray-800/30 bg-gray-900/95", "border-gray-200/30 bg-white/95"),
            mobile_link: pick(
                "text-gray-300 hover:bg-gradient-to-r hover:from-blue-500/20 hover:to-purple-500/20 hover:text-white",
                "text-gray-700 hover:bg-gradient-to-r hover:from-blue-500/20 hover:to-purple-500/20 hover:text-gray-900"
            ),
            mobile_child_link: pick(
                "text-gray-400 hover:bg-gradient-to-r hover:from-blue-500/10 hover:to-purple-500/10 hover:text-gray-300",
                "text-gray-600 hover:bg-gradient-to-r hover:from-blue-500/10 hover:to-purple-500/10 hover:text-gray-800"
            ),
            mobile_divider: pick("border-gray-800/30", "border-gray-200/30"),
            mobile_auth_button: pick(
                "from-blue-500 to-purple-500 text-white shadow-lg hover:shadow-xl",
                "from-blue-600 to-purple-600 text-white shadow-lg hover:shadow-xl"
            ),
            mobile_cta: pick(
                "bg-gradient-to-r from-purple-400 to-blue-400 text-gray-900 shadow-xl",
                "bg-gradient-to-r from-purple-500 to-blue-500 text-white shadow-xl"
            ),
        }
    }

    /// Every fragment in declaration order, for checks that span the whole bar.
    pub fn fragments(&self) -> [&'static str; 18] {
        [
            self.shell,
            self.logo,
            self.brand,
            self.slogan,
            self.link,
            self.link_icon,
            self.dropdown,
            self.dropdown_link,
            self.accent_icon,
            self.icon_button,
            self.cta,
            self.auth_button,
            self.mobile_panel,
            self.mobile_link,
            self.mobile_child_link,
            self.mobile_divider,
            self.mobile_auth_button,
            self.mobile_cta,
        ]
    }
}
