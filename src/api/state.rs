use crate::calculate::WinrateSummary;

/// Shared request state. Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub summary: WinrateSummary,
}

impl AppState {
    pub fn new(summary: WinrateSummary) -> Self {
        Self { summary }
    }
}
