use crate::components::NavbarStyles;
use crate::configs::{ NAV_LOGO_DARK, NAV_LOGO_LIGHT };

#[test]
fn dark_snapshot() {
    let styles = NavbarStyles::new(true, false);

    assert_eq!(styles.shell, "bg-gray-900/90 backdrop-blur-xl border-b border-gray-800/30");
    assert_eq!(styles.logo, NAV_LOGO_DARK);
    assert_eq!(styles.brand, "from-blue-400 via-purple-400 to-blue-300");
    assert_eq!(styles.slogan, "text-gray-400");
    assert_eq!(styles.accent_icon, "text-blue-400");
    assert_eq!(styles.mobile_panel, "border-gray-800/30 bg-gray-900/95");
    assert_eq!(styles.mobile_divider, "border-gray-800/30");
}

#[test]
fn light_snapshot() {
    let styles = NavbarStyles::new(false, false);

    assert_eq!(styles.shell, "bg-white/90 backdrop-blur-xl border-b border-gray-200/30");
    assert_eq!(styles.logo, NAV_LOGO_LIGHT);
    assert_eq!(styles.brand, "from-blue-600 via-purple-600 to-blue-500");
    assert_eq!(styles.slogan, "text-gray-600");
    assert_eq!(styles.accent_icon, "text-blue-600");
    assert_eq!(styles.mobile_panel, "border-gray-200/30 bg-white/95");
    assert_eq!(styles.mobile_divider, "border-gray-200/30");
}

#[test]
fn every_element_has_distinct_variants() {
    for scrolled in [false, true] {
        let dark = NavbarStyles::new(true, scrolled).fragments();
        let light = NavbarStyles::new(false, scrolled).fragments();
        for (index, (d, l)) in dark.iter().zip(light.iter()).enumerate() {
            assert_ne!(d, l, "element {} shares a class set across themes", index);
        }
    }
}

#[test]
fn no_light_surface_in_dark_variant() {
    for scrolled in [false, true] {
        for fragment in NavbarStyles::new(true, scrolled).fragments() {
            assert!(!fragment.contains("bg-white"), "{}", fragment);
            assert!(!fragment.contains("text-gray-700"), "{}", fragment);
        }
        for fragment in NavbarStyles::new(false, scrolled).fragments() {
            assert!(!fragment.contains("bg-gray-900"), "{}", fragment);
        }
    }
}

#[test]
fn scroll_only_changes_shell() {
    for is_dark in [false, true] {
        let top = NavbarStyles::new(is_dark, false);
        let scrolled = NavbarStyles::new(is_dark, true);

        assert_ne!(top.shell, scrolled.shell);
        assert!(scrolled.shell.contains("backdrop-blur-2xl"));
        assert_eq!(&top.fragments()[1..], &scrolled.fragments()[1..]);
    }
}
