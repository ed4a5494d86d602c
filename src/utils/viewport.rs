//! Viewport helpers shared by the page components: the `md` breakpoint
//! check, the header offset published as `--header-offset`, and smooth
//! in-page scrolling that accounts for it.

use web_sys::{ScrollBehavior, ScrollToOptions};

pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Used when the page has no `<header>` element to measure.
pub const FALLBACK_HEADER_HEIGHT: f64 = 80.0;

const DESKTOP_EXTRA_SPACE: f64 = 32.0;
const MOBILE_EXTRA_SPACE: f64 = 24.0;

/// Anchor target that scrolls to the absolute bottom of the document
/// instead of to an element top.
pub const CONTACTS_FRAGMENT: &str = "contacts";

pub fn is_desktop() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DESKTOP_MEDIA_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Pixel offset reserved for the fixed header: its rendered height plus
/// breathing room that widens at the desktop breakpoint.
pub fn header_offset(header_height: f64, is_desktop: bool) -> i32 {
    let extra = if is_desktop {
        DESKTOP_EXTRA_SPACE
    } else {
        MOBILE_EXTRA_SPACE
    };
    (header_height + extra).round() as i32
}

/// Reads the published `--header-offset` back; recomputes from the live
/// header when the property has not been set yet.
pub fn current_header_offset() -> f64 {
    if let Some(value) = published_offset() {
        return value;
    }

    let height = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("header").ok().flatten())
        .map(|h| h.get_bounding_client_rect().height())
        .unwrap_or(FALLBACK_HEADER_HEIGHT);
    f64::from(header_offset(height, is_desktop()))
}

fn published_offset() -> Option<f64> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let style = window.get_computed_style(&root).ok().flatten()?;
    let value = style.get_property_value("--header-offset").ok()?;
    parse_px(&value)
}

fn parse_px(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}

/// Smoothly scrolls to an in-page fragment. `contacts` goes to the document
/// bottom; unknown fragments are ignored.
pub fn scroll_to_fragment(target_id: &str) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };

    let mut options = ScrollToOptions::new();
    options.behavior(ScrollBehavior::Smooth);

    if target_id == CONTACTS_FRAGMENT {
        if let Some(body) = document.body() {
            options.top(f64::from(body.scroll_height()));
            window.scroll_to_with_scroll_to_options(&options);
        }
        return;
    }

    if let Some(target) = document.get_element_by_id(target_id) {
        let page_offset = window.page_y_offset().unwrap_or(0.0);
        let top = target.get_bounding_client_rect().top() + page_offset - current_header_offset();
        options.top(top);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_adds_32_on_desktop_and_24_on_mobile() {
        assert_eq!(header_offset(80.0, true), 112);
        assert_eq!(header_offset(80.0, false), 104);
    }

    #[test]
    fn offset_rounds_fractional_header_heights() {
        assert_eq!(header_offset(79.6, true), 112);
        assert_eq!(header_offset(79.4, true), 111);
        assert_eq!(header_offset(60.5, false), 85);
    }

    #[test]
    fn offset_from_fallback_height() {
        assert_eq!(header_offset(FALLBACK_HEADER_HEIGHT, true), 112);
        assert_eq!(header_offset(FALLBACK_HEADER_HEIGHT, false), 104);
    }

    #[test]
    fn parse_px_handles_computed_style_values() {
        assert_eq!(parse_px("112px"), Some(112.0));
        assert_eq!(parse_px(" 104 px"), Some(104.0));
        assert_eq!(parse_px("104.5px"), Some(104.5));
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("auto"), None);
    }
}
