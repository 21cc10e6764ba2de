//! Detector channel metadata
//!
//! - **Channel**: a resolved data stream name with its parsed components
//! - **ChannelList**: the order-preserving, duplicate-free set a buffer holds
//! - **ChannelResolver**: maps raw names to channels

pub mod channel;

pub use channel::{Channel, ChannelError, ChannelList, ChannelResolver, NameResolver};
