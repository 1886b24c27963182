//! Order Status Lifecycle
//!
//! The transition policy in one place:
//!
//! ```text
//! pending ──► confirmed ──► delivered
//!    │            │
//!    └────────────┴───────► cancelled
//! ```
//!
//! `delivered` and `cancelled` are terminal. A direct pending -> delivered
//! jump is not allowed. Re-entering `confirmed` is a no-op transition that
//! refreshes `updatedAt`/`adminNotes` without touching `confirmedAt`.

use shared::models::OrderStatus;

/// States an order may be in immediately before entering `next`.
///
/// An empty slice means the state can never be entered through the
/// transition operation (orders are born `pending`).
pub fn allowed_predecessors(next: OrderStatus) -> &'static [OrderStatus] {
    match next {
        OrderStatus::Pending => &[],
        OrderStatus::Confirmed => &[OrderStatus::Pending, OrderStatus::Confirmed],
        OrderStatus::Delivered => &[OrderStatus::Confirmed],
        OrderStatus::Cancelled => &[OrderStatus::Pending, OrderStatus::Confirmed],
    }
}

/// Whether `from -> to` is a legal transition
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    allowed_predecessors(to).contains(&from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderStatus::*;

    #[test]
    fn test_pending_transitions() {
        assert!(can_transition(Pending, Confirmed));
        assert!(can_transition(Pending, Cancelled));
        // No direct terminal jump
        assert!(!can_transition(Pending, Delivered));
        assert!(!can_transition(Pending, Pending));
    }

    #[test]
    fn test_confirmed_transitions() {
        assert!(can_transition(Confirmed, Delivered));
        assert!(can_transition(Confirmed, Cancelled));
        // Re-confirming is a permitted no-op (admin notes refresh)
        assert!(can_transition(Confirmed, Confirmed));
        assert!(!can_transition(Confirmed, Pending));
    }

    #[test]
    fn test_terminal_states_accept_nothing() {
        for terminal in [Delivered, Cancelled] {
            for next in [Pending, Confirmed, Delivered, Cancelled] {
                assert!(!can_transition(terminal, next), "{terminal:?} -> {next:?}");
            }
        }
    }

    #[test]
    fn test_cancelled_never_confirms() {
        assert!(!can_transition(Cancelled, Confirmed));
    }

    #[test]
    fn test_nothing_enters_pending() {
        assert!(allowed_predecessors(Pending).is_empty());
    }
}
