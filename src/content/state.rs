#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ItemPhase {
    Showing,   // Current item, show animation still running
    Displayed, // Current item at rest
    Hiding,    // Outgoing item waiting for its hide animation to finish
}
