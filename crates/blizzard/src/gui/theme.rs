use gtk::gdk;
use gtk4 as gtk;
use palette::{Srgb, Srgba, WithAlpha};

/// Ring fill, `#1ec0f5`.
pub const ACCENT: Srgb<u8> = Srgb::new(0x1e, 0xc0, 0xf5);

pub fn accent() -> Srgba<f64> {
    ACCENT.into_format::<f64>().with_alpha(1.0)
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.blizzard-overlay, .blizzard-view {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_is_opaque_blue() {
        let (r, g, b, a) = accent().into_components();
        assert_eq!(a, 1.0);
        assert!(b > g && g > r);
        assert!((r - 30.0 / 255.0).abs() < 1e-9);
    }
}
