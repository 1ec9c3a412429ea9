//! Mouse handling for the trigger buttons and the popup menu.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{App, HoverTarget};
use crate::events::ListenerKind;
use crate::trigger::MenuAction;

impl App {
    /// Dispatch a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => self.handle_pointer_down(col, row, button),
            MouseEventKind::Moved => self.update_hover(col, row),
            _ => {}
        }
    }

    /// Handle a pointer-down.
    ///
    /// The global dismissal listener sees every button first; left clicks are
    /// then routed to the trigger or menu item under the pointer.
    fn handle_pointer_down(&mut self, col: u16, row: u16, button: MouseButton) {
        if self.listeners.is_subscribed(ListenerKind::OutsidePointerDown)
            && self
                .controller
                .handle_pointer_down(&self.surface, i32::from(col), i32::from(row))
        {
            self.surface.set_menu_layout(None);
            self.hover = None;
        }

        if button != MouseButton::Left {
            return;
        }

        if let Some(trigger) = self.surface.triggers().trigger_at(col, row) {
            self.toggle(trigger);
            return;
        }

        let item = self
            .surface
            .menu_layout()
            .and_then(|menu| menu.item_at(col, row))
            .and_then(MenuAction::from_index);
        if let Some(action) = item {
            if self.controller.visible_placement().is_some() {
                self.perform_action(action);
            }
        }
    }

    /// Run a menu item's callback, then close the menu
    pub fn perform_action(&mut self, action: MenuAction) {
        let label = action.label(self.config.locale);
        tracing::info!("Performing menu action: {}", label);

        let handler = &mut self.on_action;
        let status = &mut self.status_message;
        self.controller.select(action, |action| {
            handler(action);
            *status = Some(format!("Action: {}", label));
        });

        self.surface.set_menu_layout(None);
        self.hover = None;
    }

    /// Track which trigger or menu item is under the pointer
    fn update_hover(&mut self, col: u16, row: u16) {
        let item = self
            .surface
            .menu_layout()
            .and_then(|menu| menu.item_at(col, row));
        self.hover = match item {
            Some(idx) => Some(HoverTarget::MenuItem(idx)),
            None => self
                .surface
                .triggers()
                .trigger_at(col, row)
                .map(HoverTarget::Trigger),
        };
    }
}
