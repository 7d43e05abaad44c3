use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{api::ErrorDto, notification::NotificationEventDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::notification::Recipient,
        realtime::NotificationHub, state::AppState,
    },
};

/// Tag for grouping realtime endpoints in OpenAPI documentation
pub static REALTIME_TAG: &str = "realtime";

/// Open the notification websocket.
///
/// The socket joins the caller's room (`user_<id>` or `admin_<id>`) and receives a
/// text frame for every notification created for that recipient while it is
/// connected. When the session holds both logins, the admin room is used.
/// Messages sent by the client are ignored.
///
/// # Access Control
/// - `User` or `Admin` - Requires either session
///
/// # Returns
/// - `101 Switching Protocols` - Socket open; frames are `NotificationEventDto` JSON
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/ws",
    tag = REALTIME_TAG,
    responses(
        (status = 101, description = "Websocket established", body = NotificationEventDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn connect(
    State(state): State<AppState>,
    session: Session,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let recipient = AuthGuard::new(&state.db, &session)
        .require_recipient()
        .await?;

    let hub = state.hub.clone();

    Ok(ws.on_upgrade(move |socket| serve_socket(socket, hub, recipient)))
}

/// Forwards room events to the socket until either side goes away.
async fn serve_socket(socket: WebSocket, hub: NotificationHub, recipient: Recipient) {
    let room = recipient.room();
    let mut events = hub.join(&room).await;
    let (mut sender, mut receiver) = socket.split();

    tracing::debug!("Websocket joined {}", room);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(payload) => {
                    if sender.send(Message::Text(payload.as_ref().into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("Websocket in {} skipped {} events", room, skipped);
                }
                Err(RecvError::Closed) => break,
            },
            message = receiver.next() => match message {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    drop(events);
    hub.leave(&room).await;

    tracing::debug!("Websocket left {}", room);
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(connect))
}
