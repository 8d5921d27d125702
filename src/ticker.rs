use std::time::{Duration, Instant};

use actix_web::rt::{self, task::JoinHandle};
use chrono::Utc;

use crate::{
    carousel::Carousel,
    content::TESTIMONIALS,
    countdown::time_left,
    state::{AppState, ServerEvent},
};

pub const TICK: Duration = Duration::from_secs(1);

/// Testimonials advance every fifth tick.
pub const CAROUSEL_EVERY: u64 = 5;

/// Idle wizard sessions are swept once a minute.
pub const PRUNE_EVERY: u64 = 60;

/// Events produced on the `tick`-th tick (1-based).
pub fn tick_events(state: &AppState, tick: u64, carousel: &mut Carousel) -> Vec<ServerEvent> {
    let mut events = vec![ServerEvent::Countdown(time_left(
        &state.config.promo_ends_at,
        Utc::now(),
    ))];
    if tick % CAROUSEL_EVERY == 0 {
        events.push(ServerEvent::Carousel {
            index: carousel.next(),
        });
    }
    events
}

/// Repeating timer feeding `/eventi`. Abort the handle on shutdown.
pub fn spawn(state: AppState) -> JoinHandle<()> {
    rt::spawn(async move {
        let mut interval = rt::time::interval(TICK);
        let mut carousel = Carousel::new(TESTIMONIALS.len());
        let mut tick: u64 = 0;
        loop {
            interval.tick().await;
            tick += 1;

            for event in tick_events(&state, tick, &mut carousel) {
                // No subscribers is fine.
                let _ = state.events.send(event);
            }

            if tick % PRUNE_EVERY == 0 {
                let pruned = state.wizards.prune(Instant::now());
                if pruned > 0 {
                    log::info!(
                        "Pruned {pruned} idle booking session(s), {} active",
                        state.wizards.len()
                    );
                }
            }
        }
    })
}
