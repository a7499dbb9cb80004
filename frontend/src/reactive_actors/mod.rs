//! Reactive state primitives for store-backed view models.
//!
//! ## Architecture Components
//!
//! - **Relay<T>** - fan-out event streaming over unbounded channels
//! - **Actor<T>** - owned, swappable state container with snapshot reads
//! - **Subscription** - handle that keeps a listener registered until dropped
//!
//! ## Usage Examples
//!
//! ```rust
//! use frontend::reactive_actors::Actor;
//!
//! let members = Actor::new(Vec::<String>::new());
//! let subscription = members.subscribe(|| println!("members changed"));
//! members.update_mut(|list| list.push("foo@example.com".to_string()));
//! drop(subscription);
//! ```

pub mod actor;
pub mod relay;
pub mod subscription;

pub use actor::Actor;
pub use relay::Relay;
pub use subscription::Subscription;

pub use futures::stream::Stream;

/// Creates a new Relay together with one subscribed stream.
///
/// ```rust
/// let (tags_loaded_relay, _tags_loaded_stream) = frontend::reactive_actors::relay::<usize>();
/// tags_loaded_relay.send(3);
/// ```
pub fn relay<T>() -> (Relay<T>, impl Stream<Item = T>)
where
    T: Clone + Send + 'static,
{
    let relay = Relay::new();
    let stream = relay.subscribe();
    (relay, stream)
}
