//! Terminal implementation of the measurement surface.
//!
//! Probes render the menu labels into a scratch buffer that is never drawn to
//! the terminal, then measure how far the rendered text extends.

use std::collections::BTreeMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::config::LayoutConfig;
use crate::geometry::{Bounds, Size};
use crate::surface::{ProbeHandle, Surface};
use crate::trigger::Trigger;
use crate::view::buttons::TriggerLayout;
use crate::view::popup::{popup_size_for_content, MenuLayout};

/// Geometry of the terminal screen as last laid out
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    viewport: Rect,
    triggers: TriggerLayout,
    menu: Option<MenuLayout>,
    probes: BTreeMap<ProbeHandle, Buffer>,
    next_probe: u64,
}

impl TerminalSurface {
    pub fn new(width: u16, height: u16, layout: &LayoutConfig) -> Self {
        let viewport = Rect::new(0, 0, width, height);
        Self {
            viewport,
            triggers: TriggerLayout::compute(viewport, layout),
            menu: None,
            probes: BTreeMap::new(),
            next_probe: 0,
        }
    }

    /// Lay the triggers out again for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16, layout: &LayoutConfig) {
        self.viewport = Rect::new(0, 0, width, height);
        self.triggers = TriggerLayout::compute(self.viewport, layout);
        self.menu = None;
    }

    pub fn triggers(&self) -> &TriggerLayout {
        &self.triggers
    }

    /// Popup layout from the last render, if a popup was drawn
    pub fn menu_layout(&self) -> Option<&MenuLayout> {
        self.menu.as_ref()
    }

    pub fn set_menu_layout(&mut self, layout: Option<MenuLayout>) {
        self.menu = layout;
    }

    /// Number of probes currently attached
    pub fn live_probes(&self) -> usize {
        self.probes.len()
    }
}

/// Width and height of the text rendered into a probe buffer
fn rendered_extent(buffer: &Buffer) -> Option<Size> {
    let area = buffer.area;
    let mut width = 0u16;
    let mut rows = 0u16;
    for y in area.top()..area.bottom() {
        let mut row_width = 0u16;
        for x in area.left()..area.right() {
            let symbol = buffer[(x, y)].symbol();
            if !symbol.trim().is_empty() {
                row_width = x - area.left() + symbol.width() as u16;
            }
        }
        if row_width > 0 {
            rows = y - area.top() + 1;
            width = width.max(row_width);
        }
    }
    (width > 0 && rows > 0).then(|| Size::new(i32::from(width), i32::from(rows)))
}

impl Surface for TerminalSurface {
    fn viewport(&self) -> Size {
        Size::new(
            i32::from(self.viewport.width),
            i32::from(self.viewport.height),
        )
    }

    fn trigger_bounds(&self, trigger: Trigger) -> Option<Bounds> {
        self.triggers.area(trigger).map(Bounds::from)
    }

    fn popup_bounds(&self) -> Option<Bounds> {
        self.menu.as_ref().map(|menu| Bounds::from(menu.popup_area))
    }

    fn attach_probe(&mut self, items: &[&str]) -> ProbeHandle {
        self.next_probe += 1;
        let handle = ProbeHandle(self.next_probe);

        let height = u16::try_from(items.len()).unwrap_or(u16::MAX);
        let area = Rect::new(0, 0, self.viewport.width, height);
        let mut buffer = Buffer::empty(area);
        if !area.is_empty() {
            let lines: Vec<Line> = items.iter().map(|item| Line::from(*item)).collect();
            Paragraph::new(lines).render(area, &mut buffer);
        }

        self.probes.insert(handle, buffer);
        handle
    }

    fn measure_probe(&self, probe: ProbeHandle) -> Option<Size> {
        let buffer = self.probes.get(&probe)?;
        rendered_extent(buffer).map(popup_size_for_content)
    }

    fn detach_probe(&mut self, probe: ProbeHandle) {
        self.probes.remove(&probe);
    }
}
