//! Menu open/close state and position resolution.
//!
//! At most one menu is open at a time. Opening a menu puts it in a pending
//! state; the popup becomes visible only once a placement has been computed
//! from fresh geometry, so it never flashes at a stale or default position.

use crate::geometry::Position;
use crate::placement::{compute_placement, Placement, PlacementConfig};
use crate::surface::{ProbeGuard, Surface};
use crate::trigger::{MenuAction, Trigger};

/// Which menu is open and whether its position is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    /// Open, waiting for geometry
    Pending(Trigger),
    /// Open and placed; safe to render
    Positioned {
        trigger: Trigger,
        placement: Placement,
    },
}

impl MenuState {
    /// Active trigger, if any menu is open
    pub fn active(&self) -> Option<Trigger> {
        match self {
            MenuState::Closed => None,
            MenuState::Pending(trigger) | MenuState::Positioned { trigger, .. } => Some(*trigger),
        }
    }

    /// Computed popup position; only present once positioned
    pub fn position(&self) -> Option<Position> {
        self.placement().map(|p| p.position)
    }

    pub fn placement(&self) -> Option<Placement> {
        match self {
            MenuState::Positioned { placement, .. } => Some(*placement),
            _ => None,
        }
    }

    /// True once the position has been computed for the active trigger
    pub fn is_ready(&self) -> bool {
        matches!(self, MenuState::Positioned { .. })
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, MenuState::Closed)
    }
}

/// Outcome of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    Opened(Trigger),
    Switched { from: Trigger, to: Trigger },
    Closed(Trigger),
}

/// Owns the menu state and drives placement
#[derive(Debug, Clone, Default)]
pub struct MenuController {
    state: MenuState,
    config: PlacementConfig,
}

impl MenuController {
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            state: MenuState::Closed,
            config,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Open the menu for `trigger`, or close it if it is already the active one.
    ///
    /// Switching to another trigger goes straight to pending without passing
    /// through the closed state; the previous placement is discarded.
    pub fn toggle(&mut self, trigger: Trigger) -> MenuTransition {
        let transition = match self.state.active() {
            Some(active) if active == trigger => {
                self.close();
                MenuTransition::Closed(trigger)
            }
            Some(active) => {
                self.state = MenuState::Pending(trigger);
                MenuTransition::Switched {
                    from: active,
                    to: trigger,
                }
            }
            None => {
                self.state = MenuState::Pending(trigger);
                MenuTransition::Opened(trigger)
            }
        };
        tracing::debug!(?transition, "menu toggled");
        transition
    }

    /// Toggle by trigger name.
    ///
    /// Names come from a closed set, so an unknown one is a bug in the caller.
    pub fn toggle_named(&mut self, name: &str) -> Option<MenuTransition> {
        match name.parse::<Trigger>() {
            Ok(trigger) => Some(self.toggle(trigger)),
            Err(e) => {
                debug_assert!(false, "{}", e);
                tracing::error!("Ignoring toggle request: {}", e);
                None
            }
        }
    }

    /// Close whatever is open. Returns false if nothing was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.state.is_open();
        self.state = MenuState::Closed;
        if was_open {
            tracing::debug!("menu closed");
        }
        was_open
    }

    /// Drop the computed position of an open menu so it is measured again,
    /// e.g. after the viewport was resized. Returns false if nothing was open.
    pub fn invalidate_position(&mut self) -> bool {
        match self.state.active() {
            Some(trigger) => {
                self.state = MenuState::Pending(trigger);
                true
            }
            None => false,
        }
    }

    /// Measure the popup and compute its position for the pending trigger.
    ///
    /// Stays pending (and returns `None`) when the trigger or the popup cannot
    /// be measured; the next toggle tries again. Already positioned menus
    /// return their current position unchanged.
    pub fn resolve_position<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        items: &[&str],
    ) -> Option<Position> {
        let trigger = match self.state {
            MenuState::Closed => return None,
            MenuState::Positioned { placement, .. } => return Some(placement.position),
            MenuState::Pending(trigger) => trigger,
        };

        let Some(trigger_bounds) = surface.trigger_bounds(trigger) else {
            tracing::debug!(%trigger, "trigger not mounted; position stays pending");
            return None;
        };
        let viewport = surface.viewport();

        let popup_size = {
            let probe = ProbeGuard::attach(surface, items);
            probe.measure()
        };
        let Some(popup_size) = popup_size.filter(|size| !size.is_empty()) else {
            tracing::debug!(%trigger, "popup could not be measured; position stays pending");
            return None;
        };

        let placement = compute_placement(&trigger_bounds, popup_size, viewport, &self.config);
        self.state = MenuState::Positioned { trigger, placement };
        tracing::debug!(%trigger, position = %placement.position, "menu positioned");
        Some(placement.position)
    }

    /// Placement to render, only once the active menu is positioned
    pub fn visible_placement(&self) -> Option<(Trigger, Placement)> {
        match self.state {
            MenuState::Positioned { trigger, placement } => Some((trigger, placement)),
            _ => None,
        }
    }

    /// True if a pointer-down at (x, y) lands outside the popup and every trigger
    pub fn is_outside<S: Surface + ?Sized>(&self, surface: &S, x: i32, y: i32) -> bool {
        let in_popup = surface
            .popup_bounds()
            .is_some_and(|bounds| bounds.contains(x, y));
        let on_trigger = Trigger::ALL.iter().any(|trigger| {
            surface
                .trigger_bounds(*trigger)
                .is_some_and(|bounds| bounds.contains(x, y))
        });
        !in_popup && !on_trigger
    }

    /// Dismiss the menu on a pointer-down outside the popup and all triggers.
    /// Returns true if the menu was closed.
    pub fn handle_pointer_down<S: Surface + ?Sized>(&mut self, surface: &S, x: i32, y: i32) -> bool {
        if !self.state.is_open() || !self.is_outside(surface, x, y) {
            return false;
        }
        tracing::debug!(x, y, "pointer down outside menu");
        self.close()
    }

    /// Run the callback for a selected item, then close the menu
    pub fn select<F>(&mut self, action: MenuAction, on_select: F)
    where
        F: FnOnce(MenuAction),
    {
        on_select(action);
        self.close();
    }
}
