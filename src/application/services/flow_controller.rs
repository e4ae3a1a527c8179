//! Screen flow state machine.

use tracing::{debug, info};

use crate::domain::errors::OrderError;
use crate::domain::screen::{NavEvent, ScreenId, Transition};

/// Tracks the active screen and applies the transition table.
///
/// The controller knows nothing about the order; callers apply the returned
/// [`Transition::effect`].
#[derive(Debug, Default)]
pub struct FlowController {
    current: ScreenId,
}

impl FlowController {
    /// Creates controller on the start screen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: ScreenId::Start,
        }
    }

    /// Returns the active screen.
    #[must_use]
    pub const fn current(&self) -> ScreenId {
        self.current
    }

    /// Looks up the transition without applying it.
    ///
    /// # Errors
    /// Returns `UnsupportedTransition` if the event has no entry for the
    /// active screen.
    pub fn peek(&self, event: NavEvent) -> Result<Transition, OrderError> {
        match self.current.transition(event) {
            Some(transition) => Ok(transition),
            None => Err(OrderError::UnsupportedTransition {
                from: self.current,
                event,
            }),
        }
    }

    /// Applies an event and returns the transition taken.
    ///
    /// # Errors
    /// Returns `UnsupportedTransition` if the event has no entry for the
    /// active screen. The active screen is left unchanged.
    pub fn fire(&mut self, event: NavEvent) -> Result<Transition, OrderError> {
        let transition = self.peek(event).map_err(|e| {
            debug!(screen = %self.current, %event, "Ignored navigation event");
            e
        })?;
        info!(from = %transition.from, to = %transition.to, %event, "Navigating");
        self.current = transition.to;
        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screen::SideEffect;

    #[test]
    fn test_initial_screen_is_start() {
        assert_eq!(FlowController::new().current(), ScreenId::Start);
    }

    #[test]
    fn test_forward_path_takes_four_events() {
        let mut flow = FlowController::new();
        let events = [
            NavEvent::StartOrder,
            NavEvent::Next,
            NavEvent::Next,
            NavEvent::Next,
        ];

        let visited: Vec<ScreenId> = events
            .into_iter()
            .map(|event| flow.fire(event).unwrap().to)
            .collect();

        assert_eq!(
            visited,
            [
                ScreenId::EntreeMenu,
                ScreenId::SideDishMenu,
                ScreenId::AccompanimentMenu,
                ScreenId::Checkout
            ]
        );
        assert_eq!(flow.current(), ScreenId::Checkout);
    }

    #[test]
    fn test_submit_cycles_to_start() {
        let mut flow = FlowController::new();
        for event in [NavEvent::StartOrder, NavEvent::Next, NavEvent::Next, NavEvent::Next] {
            flow.fire(event).unwrap();
        }

        let transition = flow.fire(NavEvent::Next).unwrap();

        assert_eq!(transition.effect, Some(SideEffect::SubmitOrder));
        assert_eq!(flow.current(), ScreenId::Start);
    }

    #[test]
    fn test_unsupported_event_keeps_screen() {
        let mut flow = FlowController::new();

        let result = flow.fire(NavEvent::Next);

        assert_eq!(
            result,
            Err(OrderError::UnsupportedTransition {
                from: ScreenId::Start,
                event: NavEvent::Next
            })
        );
        assert_eq!(flow.current(), ScreenId::Start);
    }
}
