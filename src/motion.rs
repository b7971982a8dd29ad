//! Named animation states and the utility classes that render them.
//! Keyframes and transitions live in `input.css`.

use crate::overlay::OverlayPhase;

/// Scroll-reveal used by the post cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Faded out, pushed 100px down.
    Hidden,
    Visible,
}

impl Reveal {
    pub fn from_visibility(in_view: bool) -> Self {
        if in_view {
            Reveal::Visible
        } else {
            Reveal::Hidden
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Reveal::Hidden => "reveal reveal-hidden",
            Reveal::Visible => "reveal reveal-visible",
        }
    }
}

/// Slide+fade for the mobile overlay: in from the left, out to the left.
pub fn overlay_class(phase: OverlayPhase) -> &'static str {
    if phase.is_visible() {
        "animate-nav-in"
    } else {
        "animate-nav-out"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_follows_visibility() {
        assert_eq!(Reveal::from_visibility(true), Reveal::Visible);
        assert_eq!(Reveal::from_visibility(false), Reveal::Hidden);
        assert!(Reveal::Hidden.class().contains("reveal-hidden"));
    }

    #[test]
    fn test_overlay_class_per_phase() {
        assert_eq!(overlay_class(OverlayPhase::Opening), "animate-nav-in");
        assert_eq!(overlay_class(OverlayPhase::Open), "animate-nav-in");
        assert_eq!(overlay_class(OverlayPhase::Closing), "animate-nav-out");
    }
}
