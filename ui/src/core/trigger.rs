//! One-shot visibility latch and the observer capability behind it.

/// Latches the first time its region is reported visible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewportTrigger {
    triggered: bool,
}

impl ViewportTrigger {
    /// Record a visibility report. Returns `true` only on the rising edge.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.triggered || !intersecting {
            return false;
        }
        self.triggered = true;
        true
    }

    pub fn has_triggered(&self) -> bool {
        self.triggered
    }
}

/// Callback receiving "is the region intersecting the viewport" reports.
pub type VisibilityCallback = Box<dyn FnMut(bool)>;

/// Environment capability that reports when a page region is on screen.
pub trait VisibilityObserver {
    /// Start observing the element with id `region_id`. Reports stop when the
    /// returned subscription is released or dropped. An unknown region never
    /// reports.
    fn subscribe(&self, region_id: &str, on_change: VisibilityCallback) -> Subscription;
}

/// Live observation; releases the underlying observer exactly once.
#[must_use = "dropping a subscription stops the observation"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to tear down.
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Reports every region visible as soon as it is subscribed. Used where the
/// host exposes no intersection API (native webview shells).
#[derive(Debug, Default, Clone, Copy)]
pub struct MountObserver;

impl VisibilityObserver for MountObserver {
    fn subscribe(&self, _region_id: &str, mut on_change: VisibilityCallback) -> Subscription {
        on_change(true);
        Subscription::inert()
    }
}
