//! Show/hide control for the single shared overlay used by the customer flow.
//!
//! The controller is constructed by the view and passed to whatever handles
//! events; it never looks the overlay up by name. Until a handle has been
//! acquired, `show` and `hide` do nothing.

use tracing::debug;

pub trait Overlay {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Overlay backed by a visibility flag the renderer consults.
#[derive(Clone, Debug)]
pub struct OverlaySurface {
    name: &'static str,
    visible: bool,
}

impl OverlaySurface {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            visible: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Overlay for OverlaySurface {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug)]
pub struct ModalController<O: Overlay = OverlaySurface> {
    handle: Option<O>,
}

impl<O: Overlay> Default for ModalController<O> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<O: Overlay> ModalController<O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the handle once; later calls keep the first handle and return false.
    pub fn acquire(&mut self, handle: O) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(handle);
        true
    }

    pub fn is_acquired(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&O> {
        self.handle.as_ref()
    }

    pub fn show(&mut self) {
        match self.handle.as_mut() {
            Some(h) => h.show(),
            None => debug!("overlay show ignored: handle not acquired"),
        }
    }

    pub fn hide(&mut self) {
        match self.handle.as_mut() {
            Some(h) => h.hide(),
            None => debug!("overlay hide ignored: handle not acquired"),
        }
    }
}

impl ModalController<OverlaySurface> {
    pub fn is_visible(&self) -> bool {
        self.handle.as_ref().is_some_and(OverlaySurface::is_visible)
    }
}

#[cfg(test)]
#[path = "tests/modal_tests.rs"]
mod tests;
