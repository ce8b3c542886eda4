use tokio::sync::watch;

/// Latest state of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Never triggered, or reset.
    Idle,
    /// A call is in flight.
    Pending,
    /// The last call succeeded.
    Success(T),
    /// The last call failed; the message is never empty.
    Failure(String),
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Outcome<T> {
    /// Whether nothing has been published since creation or the last reset.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a call is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the outcome is final (success or failure).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    /// Success payload, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Failure message, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Consume into the success payload.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }
}

/// Single observable holder of an operation's [`Outcome`].
///
/// Writes never block and never fail; the last write wins.
#[derive(Debug)]
pub struct Slot<T> {
    tx: watch::Sender<Outcome<T>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slot<T> {
    /// Create an idle slot.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Outcome::Idle);
        Self { tx }
    }

    /// Watch for changes. The receiver sees the current value immediately.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Outcome<T>> {
        self.tx.subscribe()
    }

    /// Replace the current outcome and notify subscribers.
    pub fn publish(&self, outcome: Outcome<T>) {
        self.tx.send_replace(outcome);
    }

    /// Return to [`Outcome::Idle`].
    pub fn reset(&self) {
        self.publish(Outcome::Idle);
    }

    /// Edit the current outcome in place and notify subscribers.
    pub fn update(&self, edit: impl FnOnce(&mut Outcome<T>)) {
        self.tx.send_modify(edit);
    }
}

impl<T: Clone> Slot<T> {
    /// Snapshot of the current outcome.
    #[must_use]
    pub fn get(&self) -> Outcome<T> {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_idle() {
        let slot: Slot<u32> = Slot::new();
        assert!(slot.get().is_idle());
    }

    #[test]
    fn test_last_write_wins() {
        let slot = Slot::new();
        slot.publish(Outcome::Pending);
        slot.publish(Outcome::Success(1));
        slot.publish(Outcome::Success(2));
        assert_eq!(slot.get(), Outcome::Success(2));

        slot.reset();
        assert_eq!(slot.get(), Outcome::Idle);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let slot = Slot::new();
        slot.publish(Outcome::<()>::Failure("boom".to_string()));
        assert_eq!(slot.get().failure(), Some("boom"));
    }

    #[test]
    fn test_update_in_place() {
        let slot = Slot::new();
        slot.publish(Outcome::Success(vec![1]));
        slot.update(|outcome| {
            if let Outcome::Success(items) = outcome {
                items.push(2);
            }
        });
        assert_eq!(slot.get().into_success(), Some(vec![1, 2]));
    }

    #[tokio::test]
    async fn test_subscriber_notified() {
        let slot = Slot::new();
        let mut rx = slot.subscribe();
        assert!(rx.borrow().is_idle());

        slot.publish(Outcome::Success("done"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().success(), Some(&"done"));
    }

    #[test]
    fn test_outcome_accessors() {
        let pending: Outcome<i32> = Outcome::Pending;
        assert!(pending.is_pending());
        assert!(!pending.is_terminal());
        assert!(Outcome::Success(1).is_terminal());
        assert!(Outcome::<i32>::Failure("x".into()).is_terminal());
        assert_eq!(Outcome::<i32>::default(), Outcome::Idle);
    }
}
