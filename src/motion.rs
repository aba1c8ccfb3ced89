// Declarative entrance transitions. We only hand the browser start/end frames
// and timings as inline styles; CSS transitions do the interpolation.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{
    ENTRANCE_DURATION_MS, ENTRANCE_MOUNT_DELAY_MS, ENTRANCE_OFFSET_PX, SUBTITLE_DELAY_MS,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub y: f64, // px, negative = above resting position
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Frame,
    pub animate: Frame,
    pub transition: Transition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrancePhase {
    Pending,
    Played,
}

const RESTING: Frame = Frame { opacity: 1.0, y: 0.0 };

/// Container entrance: fade in while sliding down into place.
pub const FADE_SLIDE_IN: Motion = Motion {
    initial: Frame { opacity: 0.0, y: ENTRANCE_OFFSET_PX },
    animate: RESTING,
    transition: Transition { duration_ms: ENTRANCE_DURATION_MS, delay_ms: 0 },
};

/// Subtitle: plain fade, starting after the container is mostly in.
pub const DELAYED_FADE_IN: Motion = Motion {
    initial: Frame { opacity: 0.0, y: 0.0 },
    animate: RESTING,
    transition: Transition { duration_ms: ENTRANCE_DURATION_MS, delay_ms: SUBTITLE_DELAY_MS },
};

impl Motion {
    pub fn frame(&self, phase: EntrancePhase) -> Frame {
        match phase {
            EntrancePhase::Pending => self.initial,
            EntrancePhase::Played => self.animate,
        }
    }

    /// Inline style for `phase`. The `transition` declaration is present in
    /// both phases so the browser animates the Pending -> Played change.
    pub fn style(&self, phase: EntrancePhase) -> String {
        let f = self.frame(phase);
        let Transition { duration_ms, delay_ms } = self.transition;
        format!(
            "opacity: {}; transform: translateY({}px); \
             transition: opacity {duration_ms}ms ease-out {delay_ms}ms, \
             transform {duration_ms}ms ease-out {delay_ms}ms;",
            f.opacity, f.y
        )
    }
}

/// Flips from `Pending` to `Played` once, a frame after mount.
/// The timer is dropped on unmount, so it never fires into a dead component.
#[hook]
pub fn use_entrance() -> EntrancePhase {
    let phase = use_state(|| EntrancePhase::Pending);
    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let handle = Timeout::new(ENTRANCE_MOUNT_DELAY_MS, move || {
                phase.set(EntrancePhase::Played);
            });
            move || drop(handle)
        });
    }
    *phase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_uses_initial_frame() {
        let s = FADE_SLIDE_IN.style(EntrancePhase::Pending);
        assert!(s.starts_with("opacity: 0; transform: translateY(-20px);"), "{s}");
    }

    #[test]
    fn played_rests_at_full_opacity_no_offset() {
        let s = FADE_SLIDE_IN.style(EntrancePhase::Played);
        assert!(s.starts_with("opacity: 1; transform: translateY(0px);"), "{s}");
    }

    #[test]
    fn timings_are_stable_across_phases() {
        for m in [FADE_SLIDE_IN, DELAYED_FADE_IN] {
            let tail = |p| {
                let s = m.style(p);
                s[s.find("transition:").unwrap()..].to_string()
            };
            assert_eq!(tail(EntrancePhase::Pending), tail(EntrancePhase::Played));
        }
    }

    #[test]
    fn subtitle_fade_is_delayed() {
        let s = DELAYED_FADE_IN.style(EntrancePhase::Pending);
        assert!(s.contains("opacity 500ms ease-out 300ms"), "{s}");
        assert_eq!(DELAYED_FADE_IN.initial.y, DELAYED_FADE_IN.animate.y);
    }
}
