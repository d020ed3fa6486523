//! Core library for downtogo.
//!
//! - `membership` tracks which events the user is Going / Down To Go to and
//!   notifies subscribed views when that changes
//! - `storage` provides the key/value backends the membership store persists to
//! - `catalog`, `search`, `pricing` and `social` model the static event data
//!   the marks refer to

pub mod catalog;
pub mod downtogo;
pub mod downtogo_config;
pub mod error;
pub mod event_id;
pub mod membership;
pub mod notify;
pub mod pricing;
pub mod search;
pub mod social;
pub mod storage;

pub use error::{DownToGoError, DownToGoResult};
pub use event_id::EventId;
pub use membership::{Intent, MembershipState, MembershipStore};
pub use notify::Subscription;
