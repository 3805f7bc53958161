//! Synchronous-request and stream-pub-sub interfaces, with the echo
//! implementations other components use as unit-test doubles.
//!
//! The traits are the seams: production code is written against
//! [`SyncClient`] / [`StreamPublisher`] / [`StreamSubscriber`] and gets the
//! messaging-bus implementations injected, while tests plug in
//! [`EchoServer`], [`SyncClientTest`] and [`StreamClientTest`]. There is no
//! concurrency here: the stream double holds a single callback slot and
//! invokes it once per publish.

use alloc::{boxed::Box, string::String, vec::Vec};

/// A message payload: an ordered list of frames.
pub type Payload = Vec<String>;

/// Subscription handle returned by [`StreamSubscriber::subscribe`].
pub type SubscriptionId = u32;

/// Callback invoked once per published payload.
pub type Callback = Box<dyn FnMut(&Payload)>;

/// Server side of a synchronous request/reply exchange.
pub trait SyncServer {
    /// Handles one request from `sender` and produces the reply payload.
    fn handle_request(&mut self, sender: &str, payload: &Payload) -> Payload;
}

/// Client side of a synchronous request/reply exchange.
pub trait SyncClient {
    /// Sends `payload` and blocks for the reply.
    fn request_with_reply(&mut self, payload: &Payload) -> Payload;
}

/// Publishing side of a stream.
pub trait StreamPublisher {
    /// Publishes `payload` to the stream's subscribers.
    fn publish(&mut self, payload: &Payload);
}

/// Subscribing side of a stream.
pub trait StreamSubscriber {
    /// Registers `callback` to run once per published payload.
    fn subscribe(&mut self, callback: Callback) -> SubscriptionId;
    /// Drops the subscription identified by `id`.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Test server replying to every request with the request payload itself.
#[derive(Debug, Default)]
pub struct EchoServer;

impl SyncServer for EchoServer {
    fn handle_request(&mut self, _sender: &str, payload: &Payload) -> Payload {
        payload.clone()
    }
}

/// Test client wired directly to a server's request handler, bypassing any
/// transport.
pub struct SyncClientTest<'a, S: SyncServer> {
    sender: String,
    server: &'a mut S,
}

impl<'a, S: SyncServer> SyncClientTest<'a, S> {
    pub fn new(sender: &str, server: &'a mut S) -> Self {
        Self {
            sender: String::from(sender),
            server,
        }
    }
}

impl<S: SyncServer> SyncClient for SyncClientTest<'_, S> {
    fn request_with_reply(&mut self, payload: &Payload) -> Payload {
        self.server.handle_request(&self.sender, payload)
    }
}

/// Test stream with one publisher and at most one subscriber.
///
/// Publishing with no subscriber is a no-op. Subscribing replaces any
/// previous callback; unsubscribing clears it regardless of the id.
#[derive(Default)]
pub struct StreamClientTest {
    callback: Option<Callback>,
}

impl StreamClientTest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StreamPublisher for StreamClientTest {
    fn publish(&mut self, payload: &Payload) {
        if let Some(callback) = &mut self.callback {
            callback(payload);
        }
    }
}

impl StreamSubscriber for StreamClientTest {
    fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        self.callback = Some(callback);
        0
    }

    fn unsubscribe(&mut self, _id: SubscriptionId) {
        self.callback = None;
    }
}
