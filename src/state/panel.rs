#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Open/closed state of the chat panel.
///
/// The panel starts closed. `open` and `close` are idempotent; the launcher
/// button toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub open: bool,
}

impl PanelState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
