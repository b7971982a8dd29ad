//! Mobile navigation overlay lifecycle.
//!
//! The overlay is mounted while [`OverlayPhase::is_mounted`] holds and plays
//! an enter or exit transition of [`TRANSITION_MS`]. The machine itself is
//! DOM-free: every input produces a list of [`OverlayEffect`]s which the
//! component applies (mounting, scroll lock, focus, timers, `on_close`).

/// Length of the slide+fade transition in both directions.
pub const TRANSITION_MS: u64 = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl OverlayPhase {
    pub fn is_mounted(self) -> bool {
        !matches!(self, OverlayPhase::Closed)
    }

    /// Heading towards (or sitting at) the visible state.
    pub fn is_visible(self) -> bool {
        matches!(self, OverlayPhase::Opening | OverlayPhase::Open)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverlayPhase::Closed => "closed",
            OverlayPhase::Opening => "opening",
            OverlayPhase::Open => "open",
            OverlayPhase::Closing => "closing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Parent changed `is_open`.
    SetOpen(bool),
    /// Close control activated.
    CloseRequested,
    /// Router started, finished or failed a navigation.
    RouteChanged,
    /// Timer for the transition started with this generation fired.
    TransitionEnd(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEffect {
    Mount,
    Unmount,
    AcquireScrollLock,
    ReleaseScrollLock,
    /// Focus the close control on the next animation frame.
    FocusCloseControl,
    /// Deliver `TransitionEnd(generation)` after [`TRANSITION_MS`].
    StartTransition { generation: u64 },
    /// Invoke the parent's `on_close`.
    NotifyClose,
}

#[derive(Debug, Default)]
pub struct OverlayMachine {
    phase: OverlayPhase,
    generation: u64,
    close_notified: bool,
}

impl OverlayMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle(&mut self, event: OverlayEvent) -> Vec<OverlayEffect> {
        let effects = match event {
            OverlayEvent::SetOpen(true) => self.open(),
            OverlayEvent::SetOpen(false)
            | OverlayEvent::CloseRequested
            | OverlayEvent::RouteChanged => self.close(),
            OverlayEvent::TransitionEnd(generation) => self.finish(generation),
        };
        if !effects.is_empty() {
            log::debug!(
                "mobile nav {:?} -> {} {:?}",
                event,
                self.phase.as_str(),
                effects
            );
        }
        effects
    }

    fn start_transition(&mut self, phase: OverlayPhase) -> OverlayEffect {
        self.phase = phase;
        self.generation += 1;
        OverlayEffect::StartTransition {
            generation: self.generation,
        }
    }

    fn open(&mut self) -> Vec<OverlayEffect> {
        match self.phase {
            OverlayPhase::Closed => {
                self.close_notified = false;
                let transition = self.start_transition(OverlayPhase::Opening);
                vec![
                    OverlayEffect::Mount,
                    OverlayEffect::AcquireScrollLock,
                    OverlayEffect::FocusCloseControl,
                    transition,
                ]
            }
            // still mounted and still holding the lock
            OverlayPhase::Closing => {
                self.close_notified = false;
                vec![self.start_transition(OverlayPhase::Opening)]
            }
            OverlayPhase::Opening | OverlayPhase::Open => Vec::new(),
        }
    }

    fn close(&mut self) -> Vec<OverlayEffect> {
        if !self.phase.is_visible() {
            return Vec::new();
        }
        let mut effects = Vec::with_capacity(2);
        if !self.close_notified {
            self.close_notified = true;
            effects.push(OverlayEffect::NotifyClose);
        }
        effects.push(self.start_transition(OverlayPhase::Closing));
        effects
    }

    fn finish(&mut self, generation: u64) -> Vec<OverlayEffect> {
        if generation != self.generation {
            return Vec::new();
        }
        match self.phase {
            OverlayPhase::Opening => {
                self.phase = OverlayPhase::Open;
                Vec::new()
            }
            OverlayPhase::Closing => {
                self.phase = OverlayPhase::Closed;
                vec![OverlayEffect::Unmount, OverlayEffect::ReleaseScrollLock]
            }
            OverlayPhase::Closed | OverlayPhase::Open => Vec::new(),
        }
    }
}
