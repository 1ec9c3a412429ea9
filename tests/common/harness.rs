// Test harness driving the widget with a virtual terminal

use anchor_menu::app::App;
use anchor_menu::config::Config;
use anchor_menu::trigger::Trigger;
use anchor_menu::view::theme::Theme;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Terminal;
use std::io;

/// Mounted widget rendered to a `TestBackend` after every event
pub struct WidgetTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl WidgetTestHarness {
    /// Create a harness with the default configuration
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        Self::with_config(Config::default(), width, height)
    }

    /// Create a harness with a custom configuration
    pub fn with_config(config: Config, width: u16, height: u16) -> io::Result<Self> {
        Self::with_theme(config, Theme::dark(), width, height)
    }

    pub fn with_theme(config: Config, theme: Theme, width: u16, height: u16) -> io::Result<Self> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        let mut app = App::new(config, theme, width, height);
        app.mount();

        let mut harness = Self { app, terminal };
        harness.render()?;
        Ok(harness)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Draw a frame
    pub fn render(&mut self) -> io::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    /// Deliver an event and render the resulting frame
    pub fn send_event(&mut self, event: Event) -> io::Result<()> {
        self.app.handle_event(event);
        self.render()
    }

    pub fn mouse_down(&mut self, button: MouseButton, column: u16, row: u16) -> io::Result<()> {
        self.send_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    /// Left-click a cell
    pub fn click(&mut self, column: u16, row: u16) -> io::Result<()> {
        self.mouse_down(MouseButton::Left, column, row)
    }

    pub fn move_mouse(&mut self, column: u16, row: u16) -> io::Result<()> {
        self.send_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    /// Left-click the middle of a trigger button
    pub fn click_trigger(&mut self, trigger: Trigger) -> io::Result<()> {
        let area = self
            .trigger_area(trigger)
            .unwrap_or_else(|| panic!("trigger {} is not laid out", trigger));
        self.click(area.x + area.width / 2, area.y + area.height / 2)
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> io::Result<()> {
        self.send_event(Event::Key(KeyEvent::new(code, modifiers)))
    }

    /// Resize the virtual terminal and notify the widget
    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.terminal.backend_mut().resize(width, height);
        self.send_event(Event::Resize(width, height))
    }

    pub fn trigger_area(&self, trigger: Trigger) -> Option<Rect> {
        self.app.surface().triggers().area(trigger)
    }

    /// Area of the popup as drawn in the last frame
    pub fn popup_area(&self) -> Option<Rect> {
        self.app.surface().menu_layout().map(|menu| menu.popup_area)
    }

    /// Symbol of a single screen cell
    pub fn get_cell(&self, x: u16, y: u16) -> String {
        self.terminal.backend().buffer()[(x, y)].symbol().to_string()
    }

    pub fn cell_bg(&self, x: u16, y: u16) -> Color {
        self.terminal.backend().buffer()[(x, y)].bg
    }

    /// The whole screen, one line per row
    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut screen = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }
}
