use crate::trigger::Trigger;

/// Element currently under the mouse pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// A trigger button
    Trigger(Trigger),
    /// An item of the open popup, by index
    MenuItem(usize),
}
