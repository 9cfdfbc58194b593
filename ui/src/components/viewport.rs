use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::platform;
use crate::core::trigger::{Subscription, ViewportTrigger, VisibilityCallback, VisibilityObserver};

/// Visibility capability shared through context. Without one, components
/// use the host observer from [`platform::visibility_observer`].
#[derive(Clone)]
pub struct ObserverContext(Rc<dyn VisibilityObserver>);

impl ObserverContext {
    pub fn new(observer: impl VisibilityObserver + 'static) -> Self {
        Self(Rc::new(observer))
    }

    fn subscribe(&self, region_id: &str, on_change: VisibilityCallback) -> Subscription {
        self.0.subscribe(region_id, on_change)
    }
}

fn use_visibility_observer() -> ObserverContext {
    let provided = try_use_context::<ObserverContext>();
    use_hook(move || provided.unwrap_or_else(|| ObserverContext::new(platform::visibility_observer())))
}

/// Latches `true` the first time the element with id `region_id` enters the
/// viewport. The element must be rendered by the calling component.
///
/// Observer callbacks arrive outside the UI runtime (browser callbacks), so
/// they are forwarded through a coroutine channel and the signal is written
/// from inside the coroutine.
pub fn use_viewport_trigger(region_id: &'static str) -> ReadOnlySignal<bool> {
    let observer = use_visibility_observer();
    let mut triggered = use_signal(|| false);
    let subscription: Rc<RefCell<Option<Subscription>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let latch = use_coroutine(move |mut rx: UnboundedReceiver<bool>| async move {
        let mut trigger = ViewportTrigger::default();
        while let Some(visible) = rx.next().await {
            if trigger.observe(visible) {
                tracing::debug!(region_id, "viewport trigger fired");
                triggered.set(true);
                break;
            }
        }
    });

    // Subscribe after the first render so the region exists in the document.
    let subscribe_slot = subscription.clone();
    use_effect(move || {
        if subscribe_slot.borrow().is_some() || *triggered.peek() {
            return;
        }
        let tx = latch.tx();
        let sub = observer.subscribe(
            region_id,
            Box::new(move |visible| {
                let _ = tx.unbounded_send(visible);
            }),
        );
        *subscribe_slot.borrow_mut() = Some(sub);
    });

    // Once latched, nothing more is needed from the observer.
    let latched_slot = subscription.clone();
    use_effect(move || {
        if triggered() {
            release(&latched_slot);
        }
    });

    use_drop(move || release(&subscription));

    triggered.into()
}

fn release(slot: &RefCell<Option<Subscription>>) {
    let taken = slot.borrow_mut().take();
    if let Some(mut sub) = taken {
        sub.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::*;
    use crate::core::trigger::manual::ManualObserver;
    use crate::tests::vdom;

    const REGION: &str = "region";
    const STEP: Duration = Duration::from_millis(20);

    /// Trigger value seen by the most recent render.
    #[derive(Clone, Default)]
    struct LastSeen(Rc<Cell<bool>>);

    #[component]
    fn Watched() -> Element {
        let triggered = use_viewport_trigger(REGION);
        use_context::<LastSeen>().0.set(triggered());
        rsx! { section { id: REGION } }
    }

    fn watched_dom(observer: &ManualObserver, seen: &LastSeen) -> VirtualDom {
        VirtualDom::new(Watched)
            .with_root_context(ObserverContext::new(observer.clone()))
            .with_root_context(seen.clone())
    }

    #[tokio::test]
    async fn latches_on_first_visibility_and_releases_the_observer() {
        let observer = ManualObserver::default();
        let seen = LastSeen::default();
        let mut dom = watched_dom(&observer, &seen);
        vdom::mount(&mut dom).await;

        assert_eq!(observer.active_subscriptions(), 1);
        assert!(!seen.0.get());

        observer.set_visible(REGION, false);
        vdom::settle(&mut dom, STEP).await;
        assert!(!seen.0.get());

        observer.set_visible(REGION, true);
        vdom::settle(&mut dom, STEP).await;
        assert!(seen.0.get());
        assert_eq!(observer.active_subscriptions(), 0);

        // Scrolling away afterwards is not observed anymore.
        observer.set_visible(REGION, false);
        vdom::settle(&mut dom, STEP).await;
        assert!(seen.0.get());
    }

    #[tokio::test]
    async fn unmount_releases_a_pending_subscription() {
        let observer = ManualObserver::default();
        let seen = LastSeen::default();
        let mut dom = watched_dom(&observer, &seen);
        vdom::mount(&mut dom).await;
        assert_eq!(observer.active_subscriptions(), 1);

        drop(dom);
        assert_eq!(observer.active_subscriptions(), 0);
        assert!(!seen.0.get());
    }

    #[tokio::test]
    async fn falls_back_to_the_host_observer() {
        // Native hosts report regions visible on mount.
        let seen = LastSeen::default();
        let mut dom = VirtualDom::new(Watched).with_root_context(seen.clone());
        vdom::mount(&mut dom).await;
        vdom::settle(&mut dom, STEP).await;
        assert!(seen.0.get());
    }
}
