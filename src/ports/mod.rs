//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the core calls into infrastructure. The crate itself is
//! invoked as a library, one post per call, so there is no inbound port.

pub mod outbound;

pub use outbound::{DeliveryOptions, FeedActionPort, NotifierPort};
