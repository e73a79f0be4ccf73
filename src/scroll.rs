use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Offset added to the scroll position so the active section flips slightly
/// before its top edge reaches the viewport top.
pub const SPY_LOOKAHEAD: f64 = 100.0;

/// An element counts as visible once its top edge is this far inside the
/// viewport.
pub const REVEAL_MARGIN: f64 = 150.0;

/// Sections the spy tracks, in document order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "services", "skills", "contact"];

/// Elements that animate in the first time they scroll into view.
const REVEAL_SELECTOR: &str = ".service-card, .stat, .skill-tag";

const PARALLAX_RATE: f64 = -0.5;

/// Vertical span of one section as currently rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// First section in document order whose span contains the looked-ahead
/// scroll position. `None` means no section claims the position and the
/// caller leaves the previously active link as-is.
pub fn spy_target(scroll_y: f64, spans: &[SectionSpan]) -> Option<&str> {
    let position = scroll_y + SPY_LOOKAHEAD;
    spans
        .iter()
        .find(|span| position >= span.top && position < span.top + span.height)
        .map(|span| span.id.as_str())
}

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

/// Measures the tracked sections. Sections missing from the page are skipped.
pub fn section_spans(document: &Document) -> Vec<SectionSpan> {
    SECTION_IDS
        .iter()
        .filter_map(|id| {
            let element = document
                .get_element_by_id(id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionSpan {
                id: (*id).to_string(),
                top: element.offset_top() as f64,
                height: element.offset_height() as f64,
            })
        })
        .collect()
}

/// Adds the `animate` class to every reveal target whose top edge has entered
/// the viewport. The class is only ever added, never removed.
pub fn reveal_visible(document: &Document, viewport_height: f64) {
    let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    for index in 0..targets.length() {
        let Some(element) = targets
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let class_list = element.class_list();
        if class_list.contains("animate") {
            continue;
        }
        if should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
            let _ = class_list.add_1("animate");
        }
    }
}

/// Applies the parallax translation to the hero background, if present.
pub fn apply_parallax(document: &Document, scroll_y: f64) {
    if let Some(hero) = document
        .query_selector(".hero-placeholder")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        let _ = hero.style().set_property(
            "transform",
            &format!("translateY({}px)", parallax_offset(scroll_y)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, top: f64, height: f64) -> SectionSpan {
        SectionSpan {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn page() -> Vec<SectionSpan> {
        vec![
            span("home", 0.0, 800.0),
            span("about", 800.0, 600.0),
            span("contact", 1400.0, 700.0),
        ]
    }

    #[test]
    fn spy_picks_section_containing_looked_ahead_position() {
        let spans = page();
        assert_eq!(spy_target(0.0, &spans), Some("home"));
        assert_eq!(spy_target(750.0, &spans), Some("about"));
        assert_eq!(spy_target(1500.0, &spans), Some("contact"));
    }

    #[test]
    fn spy_span_is_half_open() {
        let spans = page();
        // position 800 is the exact boundary: excluded from home, included in about
        assert_eq!(spy_target(700.0, &spans), Some("about"));
        assert_eq!(spy_target(699.0, &spans), Some("home"));
    }

    #[test]
    fn spy_returns_none_in_gaps_and_past_the_end() {
        let spans = vec![span("home", 0.0, 300.0), span("about", 500.0, 300.0)];
        assert_eq!(spy_target(300.0, &spans), None);
        assert_eq!(spy_target(10_000.0, &spans), None);
    }

    #[test]
    fn spy_prefers_document_order_on_overlap() {
        let spans = vec![span("home", 0.0, 1000.0), span("about", 400.0, 1000.0)];
        assert_eq!(spy_target(500.0, &spans), Some("home"));
    }

    #[test]
    fn spy_handles_empty_page() {
        assert_eq!(spy_target(0.0, &[]), None);
    }

    #[test]
    fn reveal_threshold_sits_inside_the_viewport() {
        assert!(should_reveal(649.0, 800.0));
        assert!(!should_reveal(650.0, 800.0));
        assert!(!should_reveal(900.0, 800.0));
    }

    #[test]
    fn reveal_decision_is_monotonic_in_top_edge() {
        // an element's top edge only shrinks while scrolling down, so once a
        // top value reveals, every smaller one must too
        let viewport = 800.0;
        for top in 0..1200 {
            let top = f64::from(top);
            if should_reveal(top, viewport) {
                assert!(should_reveal(top - 1.0, viewport));
            }
        }
    }

    #[test]
    fn parallax_tracks_scroll_linearly() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(200.0), -100.0);
        assert_eq!(parallax_offset(-50.0), 25.0);
    }
}
