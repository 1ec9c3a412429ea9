use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::geometry::{Position, Size};

/// Columns of blank space on each side of an item label
pub const ITEM_PADDING: u16 = 1;

/// Columns or rows taken by the popup border on each side
pub const BORDER: u16 = 1;

/// Outer popup size for content of the given natural size
pub fn popup_size_for_content(content: Size) -> Size {
    let chrome_x = i32::from(2 * (BORDER + ITEM_PADDING));
    let chrome_y = i32::from(2 * BORDER);
    Size::new(content.width + chrome_x, content.height + chrome_y)
}

/// Convert a signed cell coordinate to a terminal coordinate
pub(crate) fn to_cell(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

/// Clamp a rectangle to fit within bounds, preventing out-of-bounds rendering panics.
/// Returns a rectangle that is guaranteed to be fully contained within `bounds`.
fn clamp_rect_to_bounds(rect: Rect, bounds: Rect) -> Rect {
    // Clamp x to be within bounds
    let x = rect.x.min(bounds.x + bounds.width.saturating_sub(1));
    // Clamp y to be within bounds
    let y = rect.y.min(bounds.y + bounds.height.saturating_sub(1));

    // Calculate maximum possible width/height from the clamped position
    let max_width = (bounds.x + bounds.width).saturating_sub(x);
    let max_height = (bounds.y + bounds.height).saturating_sub(y);

    Rect {
        x,
        y,
        width: rect.width.min(max_width),
        height: rect.height.min(max_height),
    }
}

/// Colors for the popup menu
#[derive(Debug, Clone, Copy)]
pub struct MenuColors {
    pub border: ratatui::style::Color,
    pub background: ratatui::style::Color,
    pub text: ratatui::style::Color,
    pub hover_bg: ratatui::style::Color,
    pub hover_fg: ratatui::style::Color,
}

impl MenuColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            border: theme.popup_border_fg,
            background: theme.popup_bg,
            text: theme.popup_text_fg,
            hover_bg: theme.menu_hover_bg,
            hover_fg: theme.menu_hover_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuLayout {
    /// The whole popup including its border
    pub popup_area: Rect,
    /// One row per item, inside the border
    pub item_areas: Vec<Rect>,
}

impl MenuLayout {
    /// Check if a point is within the popup
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.popup_area.x
            && x < self.popup_area.x + self.popup_area.width
            && y >= self.popup_area.y
            && y < self.popup_area.y + self.popup_area.height
    }

    /// Get the item index at a point, if any
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        self.item_areas.iter().position(|area| {
            x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
        })
    }
}

/// Render the popup menu at a computed position
///
/// # Arguments
/// * `frame` - The ratatui frame to render to
/// * `position` - Top-left corner computed by the placement engine
/// * `size` - Measured popup size the position was computed for
/// * `items` - Item labels, in order
/// * `hovered` - Index of the item under the mouse, if any
/// * `colors` - Colors for rendering
///
/// # Returns
/// Layout information for hit testing
pub fn render_menu(
    frame: &mut Frame,
    position: Position,
    size: Size,
    items: &[&str],
    hovered: Option<usize>,
    colors: &MenuColors,
) -> MenuLayout {
    let requested = Rect::new(
        to_cell(position.left),
        to_cell(position.top),
        to_cell(size.width),
        to_cell(size.height),
    );
    let area = clamp_rect_to_bounds(requested, frame.area());
    if area.width == 0 || area.height == 0 {
        return MenuLayout::default();
    }

    // Clear the area behind the popup first to hide underlying text
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padding = " ".repeat(ITEM_PADDING as usize);
    let mut item_areas = Vec::new();
    for (idx, label) in items.iter().enumerate().take(inner.height as usize) {
        let item_area = Rect::new(inner.x, inner.y + idx as u16, inner.width, 1);
        item_areas.push(item_area);

        let style = if hovered == Some(idx) {
            Style::default().bg(colors.hover_bg).fg(colors.hover_fg)
        } else {
            Style::default().bg(colors.background).fg(colors.text)
        };
        let line = Line::from(vec![Span::raw(padding.clone()), Span::raw(*label)]);
        frame.render_widget(Paragraph::new(line).style(style), item_area);
    }

    MenuLayout {
        popup_area: area,
        item_areas,
    }
}
