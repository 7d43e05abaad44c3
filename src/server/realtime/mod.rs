//! Live push of notifications over websockets.
//!
//! `NotificationHub` keeps one broadcast channel per room (`user_<id>` or
//! `admin_<id>`). Sockets subscribe to their recipient's room when they connect
//! (see `controller::realtime`), and the notification service emits to the room
//! after persisting a record. Delivery is best effort: events for rooms without a
//! connected socket are dropped.

pub mod hub;

pub use hub::NotificationHub;
