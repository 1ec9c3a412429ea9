//! Host capabilities the menu controller measures against.
//!
//! A host owns the rendered trigger elements and the popup. The controller
//! never holds element handles itself; it asks the surface for bounds on
//! demand and measures the popup through a short-lived off-screen probe.

use crate::geometry::{Bounds, Size};
use crate::trigger::Trigger;

/// Identifier of an attached measurement probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProbeHandle(pub u64);

/// Geometry provider implemented by a rendering host
pub trait Surface {
    /// Size of the visible viewport
    fn viewport(&self) -> Size;

    /// Bounds of a trigger element, or `None` if it is not mounted
    fn trigger_bounds(&self, trigger: Trigger) -> Option<Bounds>;

    /// Bounds of the popup element while it is shown
    fn popup_bounds(&self) -> Option<Bounds>;

    /// Render the popup content off-screen so it can be measured
    fn attach_probe(&mut self, items: &[&str]) -> ProbeHandle;

    /// Natural size of an attached probe, `None` when it cannot be measured
    fn measure_probe(&self, probe: ProbeHandle) -> Option<Size>;

    /// Tear a probe down
    fn detach_probe(&mut self, probe: ProbeHandle);
}

/// Scoped measurement probe.
///
/// The probe is detached when the guard is dropped, on every exit path.
pub struct ProbeGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    handle: ProbeHandle,
}

impl<'a, S: Surface + ?Sized> ProbeGuard<'a, S> {
    pub fn attach(surface: &'a mut S, items: &[&str]) -> Self {
        let handle = surface.attach_probe(items);
        tracing::trace!(probe = handle.0, "attached measurement probe");
        Self { surface, handle }
    }

    pub fn measure(&self) -> Option<Size> {
        self.surface.measure_probe(self.handle)
    }
}

impl<S: Surface + ?Sized> Drop for ProbeGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.detach_probe(self.handle);
        tracing::trace!(probe = self.handle.0, "detached measurement probe");
    }
}
