use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{broadcast, RwLock};

/// Events buffered per room before slow sockets start lagging.
const ROOM_CAPACITY: usize = 64;

/// Registry of live rooms, each backed by a `tokio::sync::broadcast` channel.
///
/// Cloning the hub is cheap and every clone shares the same rooms. Messages are
/// serialized once per emit and shared between receivers as `Arc<str>`.
#[derive(Clone, Default)]
pub struct NotificationHub {
    rooms: Arc<RwLock<HashMap<String, broadcast::Sender<Arc<str>>>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to a room, creating it if this is the first subscriber.
    pub async fn join(&self, room: &str) -> broadcast::Receiver<Arc<str>> {
        let mut rooms = self.rooms.write().await;

        rooms
            .entry(room.to_string())
            .or_insert_with(|| broadcast::channel(ROOM_CAPACITY).0)
            .subscribe()
    }

    /// Drops the room once its last receiver is gone.
    ///
    /// Call after dropping the receiver returned by `join`.
    pub async fn leave(&self, room: &str) {
        let mut rooms = self.rooms.write().await;

        if rooms
            .get(room)
            .is_some_and(|sender| sender.receiver_count() == 0)
        {
            rooms.remove(room);
        }
    }

    /// Sends `{"event": <event>, "data": <data>}` to every socket in a room.
    ///
    /// Never blocks and never fails: serialization errors are logged and a
    /// missing or empty room simply drops the event.
    ///
    /// # Returns
    /// - Number of receivers the event was handed to (0 if nobody is listening)
    pub async fn emit<T: Serialize>(&self, room: &str, event: &str, data: &T) -> usize {
        let payload = match serde_json::to_string(&serde_json::json!({
            "event": event,
            "data": data,
        })) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize {} event for room {}: {}", event, room, e);
                return 0;
            }
        };

        let rooms = self.rooms.read().await;

        match rooms.get(room) {
            Some(sender) => sender.send(Arc::from(payload)).unwrap_or(0),
            None => 0,
        }
    }

    /// Number of rooms with at least one subscriber (or not yet cleaned up).
    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }
}
