//! Trigger buttons anchored to the top of the viewport.
//!
//! Renders as a small bordered box per trigger:
//!
//! ```text
//! ┌───┐          ┌───┐          ┌───┐
//! │ ☰ │          │ ☰ │          │ ☰ │
//! └───┘          └───┘          └───┘
//! ```

use std::collections::BTreeMap;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::LayoutConfig;
use crate::trigger::Trigger;
use crate::view::theme::Theme;

/// Rows taken by a trigger button (top border, glyph, bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Columns taken by a trigger button showing `glyph`
pub fn button_width(glyph: &str) -> u16 {
    // border + space on each side
    u16::try_from(glyph.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

/// Screen areas of the trigger buttons, for rendering and hit testing.
///
/// A trigger that does not fit the viewport is left out, which makes it
/// unmeasurable for placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriggerLayout {
    areas: BTreeMap<Trigger, Rect>,
}

impl TriggerLayout {
    /// Lay the buttons out inside `viewport`
    pub fn compute(viewport: Rect, config: &LayoutConfig) -> Self {
        let width = button_width(&config.glyph);
        let mut areas = BTreeMap::new();

        if viewport.height < config.inset_y.saturating_add(BUTTON_HEIGHT) {
            return Self { areas };
        }
        let y = viewport.y + config.inset_y;

        for trigger in Trigger::ALL {
            let x = match trigger {
                Trigger::TopLeft => Some(config.inset_x),
                Trigger::TopCenter => viewport.width.checked_sub(width).map(|free| free / 2),
                Trigger::TopRight => viewport
                    .width
                    .checked_sub(width)
                    .and_then(|free| free.checked_sub(config.inset_x)),
            };
            let Some(x) = x else {
                continue;
            };
            if x.saturating_add(width) > viewport.width {
                continue;
            }
            areas.insert(trigger, Rect::new(viewport.x + x, y, width, BUTTON_HEIGHT));
        }

        Self { areas }
    }

    pub fn area(&self, trigger: Trigger) -> Option<Rect> {
        self.areas.get(&trigger).copied()
    }

    /// Trigger under a screen cell, if any
    pub fn trigger_at(&self, x: u16, y: u16) -> Option<Trigger> {
        self.areas
            .iter()
            .find(|(_, area)| {
                x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
            })
            .map(|(trigger, _)| *trigger)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trigger, Rect)> + '_ {
        self.areas.iter().map(|(trigger, area)| (*trigger, *area))
    }
}

/// Render every laid-out trigger button, highlighting the active one
pub fn render_triggers(
    frame: &mut Frame,
    layout: &TriggerLayout,
    glyph: &str,
    active: Option<Trigger>,
    theme: &Theme,
) {
    for (trigger, area) in layout.iter() {
        let (fg, border_fg) = if active == Some(trigger) {
            (theme.button_active_fg, theme.button_active_border_fg)
        } else {
            (theme.button_fg, theme.button_border_fg)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_fg));
        let button = Paragraph::new(glyph)
            .alignment(Alignment::Center)
            .style(Style::default().fg(fg))
            .block(block);
        frame.render_widget(button, area);
    }
}
