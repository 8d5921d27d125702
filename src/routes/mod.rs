pub mod booking;
pub mod contact;
pub mod events;
pub mod public;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    booking::configure(cfg);
    contact::configure(cfg);
    events::configure(cfg);
}
