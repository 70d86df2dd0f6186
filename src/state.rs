//! View state of the monitor shell.
//!
//! The state is a plain `Copy` value. Every UI interaction is a [`ViewEvent`]
//! and produces a new state through [`ViewState::apply`]; nothing is mutated in
//! place.
//!
//! # Override Controls
//!
//! The ventilation override is only reachable while manual mode is on.
//! Leaving manual mode also drops the override so automatic control resumes
//! with a clean slate.

use crate::pages::Page;

/// Discrete UI interactions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewEvent {
    /// Navigate to the next page.
    NextPage,
    /// Flip the "Manual Mode" switch on the barn detail page.
    ToggleManualMode,
    /// Flip the "Ventilation Override" switch (manual mode only).
    ToggleVentilationOverride,
}

/// Everything the screens need besides readings.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ViewState {
    pub page: Page,
    pub manual_mode: bool,
    pub ventilation_override: bool,
}

impl ViewState {
    pub const fn new() -> Self {
        Self {
            page: Page::Dashboard,
            manual_mode: false,
            ventilation_override: false,
        }
    }

    /// Produce the state that follows `event`.
    #[must_use]
    pub const fn apply(
        self,
        event: ViewEvent,
    ) -> Self {
        match event {
            ViewEvent::NextPage => Self {
                page: self.page.next(),
                ..self
            },
            ViewEvent::ToggleManualMode => {
                let manual_mode = !self.manual_mode;
                Self {
                    manual_mode,
                    ventilation_override: manual_mode && self.ventilation_override,
                    ..self
                }
            }
            ViewEvent::ToggleVentilationOverride if self.manual_mode => Self {
                ventilation_override: !self.ventilation_override,
                ..self
            },
            ViewEvent::ToggleVentilationOverride => self,
        }
    }

    /// Whether the ventilation override row is shown.
    #[inline]
    pub const fn shows_override_controls(&self) -> bool { self.manual_mode }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state, ViewState::default());
        assert_eq!(state.page, Page::Dashboard);
        assert!(!state.manual_mode);
        assert!(!state.ventilation_override);
        assert!(!state.shows_override_controls());
    }

    #[test]
    fn test_next_page_keeps_switches() {
        let state = ViewState::new().apply(ViewEvent::ToggleManualMode).apply(ViewEvent::NextPage);
        assert_eq!(state.page, Page::BarnDetail);
        assert!(state.manual_mode);
    }

    #[test]
    fn test_override_requires_manual_mode() {
        let state = ViewState::new().apply(ViewEvent::ToggleVentilationOverride);
        assert!(!state.ventilation_override, "override is ignored outside manual mode");

        let state = state
            .apply(ViewEvent::ToggleManualMode)
            .apply(ViewEvent::ToggleVentilationOverride);
        assert!(state.ventilation_override);
        assert!(state.shows_override_controls());
    }

    #[test]
    fn test_leaving_manual_mode_clears_override() {
        let state = ViewState::new()
            .apply(ViewEvent::ToggleManualMode)
            .apply(ViewEvent::ToggleVentilationOverride)
            .apply(ViewEvent::ToggleManualMode);
        assert!(!state.manual_mode);
        assert!(!state.ventilation_override);

        // Re-entering manual mode starts with the override off
        let state = state.apply(ViewEvent::ToggleManualMode);
        assert!(!state.ventilation_override);
    }

    #[test]
    fn test_apply_is_pure() {
        let state = ViewState::new().apply(ViewEvent::ToggleManualMode);
        let a = state.apply(ViewEvent::ToggleVentilationOverride);
        let b = state.apply(ViewEvent::ToggleVentilationOverride);
        assert_eq!(a, b);
        assert!(!state.ventilation_override, "original state is untouched");
    }
}
