use actix_web::{http::header, web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::{
    countdown::time_left,
    state::{AppState, ServerEvent},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/eventi").route(web::get().to(stream_events)));
}

/// Countdown ticks and carousel advances. A fresh countdown goes out first so
/// the page does not wait for the next tick.
async fn stream_events(state: web::Data<AppState>) -> HttpResponse {
    let rx = state.events.subscribe();
    let current = ServerEvent::Countdown(time_left(&state.config.promo_ends_at, Utc::now()));

    let first = tokio_stream::once(Ok::<web::Bytes, actix_web::Error>(event_to_bytes(&current)));
    let updates = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => Some(Ok::<web::Bytes, actix_web::Error>(event_to_bytes(&event))),
        Err(err) => {
            log::debug!("SSE subscriber lagged: {err}");
            None
        }
    });

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(first.chain(updates))
}

fn event_to_bytes(event: &ServerEvent) -> web::Bytes {
    let (name, payload) = match event {
        ServerEvent::Countdown(left) => ("countdown", serde_json::to_string(left)),
        ServerEvent::Carousel { index } => ("carousel", Ok(json!({ "index": index }).to_string())),
    };
    let payload = payload.unwrap_or_else(|_| "{}".to_string());
    web::Bytes::from(format!("event: {name}\ndata: {payload}\n\n"))
}
