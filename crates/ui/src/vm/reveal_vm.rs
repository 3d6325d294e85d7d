use std::time::Duration;

use lingo_services::RevealState;

/// Inline style for a revealable element: hidden elements sit 30px low and
/// transparent, and the transition is delayed by the element's stagger.
#[must_use]
pub fn reveal_style(state: RevealState, delay: Duration) -> String {
    let (opacity, offset) = match state {
        RevealState::Hidden => (0, 30),
        RevealState::Revealed => (1, 0),
    };
    let delay = delay.as_secs_f64();
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_elements_are_offset_and_transparent() {
        let style = reveal_style(RevealState::Hidden, Duration::from_millis(300));
        assert!(style.starts_with("opacity: 0; transform: translateY(30px);"), "{style}");
        assert!(style.contains("ease 0.3s"), "{style}");
    }

    #[test]
    fn revealed_elements_rest_in_place() {
        let style = reveal_style(RevealState::Revealed, Duration::ZERO);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"), "{style}");
        assert!(style.contains("ease 0s"), "{style}");
    }
}
