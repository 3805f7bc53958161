//! Shared utilities for fleet monitoring agents.
//!
//! The load-bearing pieces are the UTF-8 codec ([`escape`], [`utf8_eq`],
//! [`codepoint_escape`]), the minimal forward-only JSON scanner
//! ([`next_token`], [`read_object`], [`read_string`]) and the
//! translation-string assembler ([`jsonify_translation_string`]) built on top
//! of both. The assembler turns a `printf`-style message plus positional
//! arguments into a JSON payload of the form
//! `{ "key": "... {{var1}} ...", "variables": { "var1": "..." } }`,
//! recursively splicing in arguments that are themselves already-assembled
//! messages. The rest of the crate is small supporting material the agents
//! share: a quote codec, the asset type/subtype/operation tables mirroring
//! the database enum columns, and the synchronous-request / stream-pub-sub
//! test doubles used to unit-test other components.
//!
//! Diagnostics go through the [`log`] façade; no logger needs to be installed
//! for any function here to behave correctly.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod asset;
mod client;
mod error;
mod json;
mod quote;
mod translate;
mod utf8;

#[cfg(test)]
mod tests;

pub use asset::{
    AssetOperation, AssetSubtype, AssetType, MAX_KEYTAG_LENGTH, MAX_VALUE_LENGTH, is_container,
    is_ok_element_type, is_ok_keytag, is_ok_link_type, is_ok_name, is_ok_value,
};
pub use client::{
    Callback, EchoServer, Payload, StreamClientTest, StreamPublisher, StreamSubscriber,
    SubscriptionId, SyncClient, SyncClientTest, SyncServer,
};
pub use error::{ScanError, Utf8Error};
pub use json::{Token, next_token, read_object, read_string};
pub use quote::{quote_decode, quote_encode};
pub use translate::{Arg, jsonify_translation_string};
pub use utf8::{codepoint_escape, escape, escape_bytes, octet_width, utf8_eq};

/// Assembles a translation-string JSON payload from a `printf`-style format
/// string and any number of arguments, type-erasing the arguments into
/// [`Arg`] values.
///
/// ```rust
/// # use fleet_common::translate_me;
/// let json = translate_me!("Text used as a key,%s and (%s)", "foo", "bar");
/// assert!(json.starts_with("{ \"key\":"));
/// ```
#[macro_export]
macro_rules! translate_me {
    ( $fmt:expr $(, $arg:expr )* $(,)? ) => {
        $crate::jsonify_translation_string($fmt, &[ $( $crate::Arg::from($arg) ),* ])
    };
}

/// Same as [`translate_me!`], for messages that are turned into JSON but not
/// translated by the backend.
#[macro_export]
macro_rules! jsonify {
    ( $( $tt:tt )* ) => { $crate::translate_me!( $( $tt )* ) };
}
