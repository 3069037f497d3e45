//! Request lifecycle shared by both feature panels.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl PanelStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// What happened when a response reached its panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Succeeded,
    Failed(String),
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

/// Monotonic request ticket; panels only accept the latest one they issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn next(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}
