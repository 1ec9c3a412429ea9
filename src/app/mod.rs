//! The interactive widget: three trigger buttons and the popup they share.

mod menu_actions;
mod types;

pub use types::HoverTarget;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::Config;
use crate::controller::{MenuController, MenuTransition};
use crate::events::{ListenerId, ListenerKind, PointerListeners};
use crate::trigger::{MenuAction, Trigger};
use crate::view::buttons::render_triggers;
use crate::view::popup::{render_menu, MenuColors};
use crate::view::surface::TerminalSurface;
use crate::view::theme::Theme;

/// Callback invoked with every selected menu item
pub type ActionHandler = Box<dyn FnMut(MenuAction)>;

pub struct App {
    config: Config,
    theme: Theme,
    controller: MenuController,
    surface: TerminalSurface,
    listeners: PointerListeners,
    outside_listener: Option<ListenerId>,
    on_action: ActionHandler,
    hover: Option<HoverTarget>,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, theme: Theme, width: u16, height: u16) -> Self {
        let surface = TerminalSurface::new(width, height, &config.layout);
        Self {
            controller: MenuController::new(config.placement),
            surface,
            theme,
            config,
            listeners: PointerListeners::new(),
            outside_listener: None,
            on_action: Box::new(|action| {
                tracing::info!("Menu action selected: {:?}", action);
            }),
            hover: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Replace the callback run for selected menu items
    pub fn with_action_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(MenuAction) + 'static,
    {
        self.on_action = Box::new(handler);
        self
    }

    /// Install the outside-interaction listener. Mounting twice keeps a single
    /// subscription.
    pub fn mount(&mut self) {
        if self.outside_listener.is_none() {
            self.outside_listener = Some(
                self.listeners
                    .subscribe(ListenerKind::OutsidePointerDown),
            );
        }
    }

    /// Remove the outside-interaction listener
    pub fn unmount(&mut self) {
        if let Some(id) = self.outside_listener.take() {
            self.listeners.unsubscribe(id);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.outside_listener.is_some()
    }

    pub fn listeners(&self) -> &PointerListeners {
        &self.listeners
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controller(&self) -> &MenuController {
        &self.controller
    }

    pub fn surface(&self) -> &TerminalSurface {
        &self.surface
    }

    pub fn hover(&self) -> Option<HoverTarget> {
        self.hover
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Labels of the popup items in the configured locale
    pub fn menu_labels(&self) -> [&'static str; 3] {
        MenuAction::labels(self.config.locale)
    }

    /// Toggle a trigger's menu and, if it opened, place it right away so the
    /// next frame already shows it at its final position.
    pub fn toggle(&mut self, trigger: Trigger) -> MenuTransition {
        let transition = self.controller.toggle(trigger);
        self.surface.set_menu_layout(None);
        self.hover = None;
        if !matches!(transition, MenuTransition::Closed(_)) {
            let labels = self.menu_labels();
            if self
                .controller
                .resolve_position(&mut self.surface, &labels)
                .is_none()
            {
                tracing::warn!("Menu for {} could not be placed yet", trigger);
            }
        }
        transition
    }

    /// Close any open menu
    pub fn close_menu(&mut self) {
        if self.controller.close() {
            self.surface.set_menu_layout(None);
        }
    }

    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
            self.should_quit = true;
        }
    }

    /// Lay the triggers out for a new terminal size and re-place an open menu
    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "terminal resized");
        self.surface.resize(width, height, &self.config.layout);
        self.hover = None;
        if self.controller.invalidate_position() {
            let labels = self.menu_labels();
            self.controller.resolve_position(&mut self.surface, &labels);
        }
    }

    /// Render the widget to the frame
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.background)),
            area,
        );

        render_triggers(
            frame,
            self.surface.triggers(),
            &self.config.layout.glyph,
            self.controller.state().active(),
            &self.theme,
        );

        if area.height > 0 {
            let status = self
                .status_message
                .clone()
                .unwrap_or_else(|| "Click a button to open its menu, q to quit".to_string());
            let status_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(status))
                    .style(Style::default().fg(self.theme.status_fg)),
                status_area,
            );
        }

        let hovered = match self.hover {
            Some(HoverTarget::MenuItem(idx)) => Some(idx),
            _ => None,
        };
        let labels = self.menu_labels();
        let colors = MenuColors::from_theme(&self.theme);
        let layout = self
            .controller
            .visible_placement()
            .map(|(_, placement)| {
                render_menu(
                    frame,
                    placement.position,
                    placement.size,
                    &labels,
                    hovered,
                    &colors,
                )
            });
        self.surface.set_menu_layout(layout);
    }
}
