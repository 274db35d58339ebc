//! In-page publish/subscribe bus.
//!
//! Widgets that react to distant state changes (header badges, the account
//! menu) subscribe to a [`Topic`] instead of reaching into whichever
//! component caused the change. Publishing is synchronous and fire-and-forget;
//! subscriptions unsubscribe themselves on drop so an unmounted component can
//! never be called back.

use std::cell::RefCell;
use std::collections::HashMap;

use yew::prelude::*;

/// Cross-cutting events the UI broadcasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// The cart store adopted a new server snapshot.
    CartUpdated,
    /// The wishlist store adopted a new server snapshot.
    WishlistUpdated,
    /// Someone signed in or out, or the bootstrap resolved.
    AuthStateChanged,
}

type Listener = Callback<Topic>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<Topic, Vec<(u64, Listener)>>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
    topic: Topic,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            if let Some(listeners) = registry.listeners.get_mut(&self.topic) {
                listeners.retain(|(id, _)| *id != self.id);
            }
        });
    }
}

/// Register `listener` for `topic` until the returned guard is dropped.
pub fn subscribe(topic: Topic, listener: Listener) -> Subscription {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry
            .listeners
            .entry(topic)
            .or_default()
            .push((id, listener));
        Subscription { topic, id }
    })
}

/// Notify every current subscriber of `topic`. The listener list is
/// snapshotted before emitting, so listeners may publish or (un)subscribe
/// without poisoning the registry borrow.
pub fn publish(topic: Topic) {
    let snapshot: Vec<Listener> = REGISTRY.with(|registry| {
        registry
            .borrow()
            .listeners
            .get(&topic)
            .map(|listeners| listeners.iter().map(|(_, l)| l.clone()).collect())
            .unwrap_or_default()
    });
    for listener in snapshot {
        listener.emit(topic);
    }
}

/// Subscribe a component to `topic` for as long as it stays mounted. The
/// latest `on_message` is always the one invoked, even though the underlying
/// subscription is only set up once per topic.
#[hook]
pub fn use_topic(topic: Topic, on_message: Callback<Topic>) {
    let latest = use_mut_ref(|| on_message.clone());
    *latest.borrow_mut() = on_message;

    use_effect_with(topic, move |topic| {
        let topic = *topic;
        let forward = Callback::from(move |topic: Topic| {
            let current = latest.borrow().clone();
            current.emit(topic);
        });
        let subscription = subscribe(topic, forward);
        move || drop(subscription)
    });
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    fn recording_listener() -> (Listener, Rc<RefCell<Vec<Topic>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let listener = Callback::from(move |topic| sink.borrow_mut().push(topic));
        (listener, received)
    }

    #[test]
    fn publish_reaches_only_matching_subscribers() {
        let (cart_listener, cart_received) = recording_listener();
        let (wishlist_listener, wishlist_received) = recording_listener();
        let _cart = subscribe(Topic::CartUpdated, cart_listener);
        let _wishlist = subscribe(Topic::WishlistUpdated, wishlist_listener);

        publish(Topic::CartUpdated);
        publish(Topic::CartUpdated);

        assert_eq!(
            *cart_received.borrow(),
            vec![Topic::CartUpdated, Topic::CartUpdated]
        );
        assert!(wishlist_received.borrow().is_empty());
    }

    #[test]
    fn dropping_the_subscription_unsubscribes() {
        let (listener, received) = recording_listener();
        let subscription = subscribe(Topic::AuthStateChanged, listener);

        publish(Topic::AuthStateChanged);
        drop(subscription);
        publish(Topic::AuthStateChanged);

        assert_eq!(received.borrow().len(), 1);
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        publish(Topic::WishlistUpdated);
    }

    #[test]
    fn each_subscriber_of_a_topic_hears_one_broadcast_once() {
        let (first_listener, first_received) = recording_listener();
        let (second_listener, second_received) = recording_listener();
        let _first = subscribe(Topic::AuthStateChanged, first_listener);
        let _second = subscribe(Topic::AuthStateChanged, second_listener);

        publish(Topic::AuthStateChanged);

        assert_eq!(*first_received.borrow(), vec![Topic::AuthStateChanged]);
        assert_eq!(*second_received.borrow(), vec![Topic::AuthStateChanged]);
    }

    #[test]
    fn listeners_may_publish_other_topics() {
        let (wishlist_listener, wishlist_received) = recording_listener();
        let _wishlist = subscribe(Topic::WishlistUpdated, wishlist_listener);
        let _cart = subscribe(
            Topic::CartUpdated,
            Callback::from(|_| publish(Topic::WishlistUpdated)),
        );

        publish(Topic::CartUpdated);

        assert_eq!(*wishlist_received.borrow(), vec![Topic::WishlistUpdated]);
    }
}
