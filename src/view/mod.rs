//! Terminal rendering: trigger buttons, the popup menu and the measurement
//! surface they share.

pub mod buttons;
pub mod popup;
pub mod surface;
pub mod theme;
