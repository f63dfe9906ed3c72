//! Page geometry helpers shared by the navigation bar and reveal effects.

pub const NAVBAR_SHADOW_RESTING: &str = "0 2px 8px rgba(0, 0, 0, 0.06)";
pub const NAVBAR_SHADOW_RAISED: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";

/// Scroll position that puts a section just below the fixed header.
pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_offset - header_offset).max(0.0)
}

pub fn navbar_shadow(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        NAVBAR_SHADOW_RAISED
    } else {
        NAVBAR_SHADOW_RESTING
    }
}

/// Inline style for the `index`-th revealed element, staggered by `step` seconds.
pub fn reveal_style(index: usize, step: f32) -> String {
    let delay = index as f32 * step;
    format!("transition-delay: {delay:.2}s;")
}

/// Script that marks every pending `.reveal` element `visible` once it
/// scrolls into view. One observer is shared across calls, so it can be
/// re-run after new elements mount.
pub fn reveal_observer_script(threshold: f64, root_margin: &str) -> String {
    format!(
        r#"
        window.revealObserver ??= new IntersectionObserver((entries, observer) => {{
            entries.forEach((entry) => {{
                if (entry.isIntersecting) {{
                    entry.target.classList.add("visible");
                    observer.unobserve(entry.target);
                }}
            }});
        }}, {{ threshold: {threshold}, rootMargin: "{root_margin}" }});
        document
            .querySelectorAll(".reveal:not(.visible)")
            .forEach((el) => window.revealObserver.observe(el));
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_target_accounts_for_header() {
        assert_eq!(scroll_target(500.0, 1200.0, 80.0), 1620.0);
        assert_eq!(scroll_target(10.0, 0.0, 80.0), 0.0);
    }

    #[test]
    fn navbar_raises_past_threshold() {
        assert_eq!(navbar_shadow(0.0, 100.0), NAVBAR_SHADOW_RESTING);
        assert_eq!(navbar_shadow(100.0, 100.0), NAVBAR_SHADOW_RESTING);
        assert_eq!(navbar_shadow(101.0, 100.0), NAVBAR_SHADOW_RAISED);
    }

    #[test]
    fn reveal_delay_is_staggered() {
        assert_eq!(reveal_style(0, 0.15), "transition-delay: 0.00s;");
        assert_eq!(reveal_style(2, 0.15), "transition-delay: 0.30s;");
        assert_eq!(reveal_style(3, 0.1), "transition-delay: 0.30s;");
    }

    #[test]
    fn reveal_observer_waits_for_intersection() {
        let script = reveal_observer_script(0.1, "0px 0px -50px 0px");
        assert!(script.contains("new IntersectionObserver"));
        assert!(script.contains(r#"{ threshold: 0.1, rootMargin: "0px 0px -50px 0px" }"#));
        assert!(script.contains("if (entry.isIntersecting)"));
        assert!(script.contains(r#"classList.add("visible")"#));
        assert!(script.contains(".reveal:not(.visible)"));
    }
}
