use actix_web::{web, HttpRequest, HttpResponse, Result};
use chrono::{Datelike, Local, Weekday};

use crate::{
    contact::{ContactField, ContactForm},
    content::{ContactInfo, OpeningHours, TransportOption, CONTACT, OPENING_HOURS, TRANSPORT},
    routes::public::{home_page, respond, PageQuery},
    session::session_or_new,
    state::AppState,
};

#[derive(Clone, Debug, Default)]
pub(crate) struct ContactErrorsView {
    pub(crate) name: Option<&'static str>,
    pub(crate) email: Option<&'static str>,
    pub(crate) subject: Option<&'static str>,
    pub(crate) message: Option<&'static str>,
}

#[derive(Clone, Debug)]
pub(crate) struct HoursRow {
    pub(crate) entry: &'static OpeningHours,
    pub(crate) today: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct ContactView {
    pub(crate) form: ContactForm,
    pub(crate) errors: ContactErrorsView,
    pub(crate) sent: bool,
    pub(crate) failed: bool,
    pub(crate) info: &'static ContactInfo,
    pub(crate) address: String,
    pub(crate) maps_url: String,
    pub(crate) whatsapp_url: String,
    pub(crate) phone_href: String,
    pub(crate) hours: Vec<HoursRow>,
    pub(crate) transport: &'static [TransportOption],
}

impl ContactView {
    pub(crate) fn new() -> Self {
        Self::for_weekday(Local::now().weekday())
    }

    fn for_weekday(today: Weekday) -> Self {
        Self {
            form: ContactForm::default(),
            errors: ContactErrorsView::default(),
            sent: false,
            failed: false,
            info: &CONTACT,
            address: CONTACT.full_address(),
            maps_url: CONTACT.maps_url(),
            whatsapp_url: CONTACT.whatsapp_url(),
            phone_href: CONTACT.phone_href(),
            hours: OPENING_HOURS
                .iter()
                .map(|entry| HoursRow {
                    entry,
                    today: entry.weekday == today,
                })
                .collect(),
            transport: TRANSPORT,
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/contatti").route(web::post().to(send_message)));
}

async fn send_message(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let mut view = ContactView::new();

    let errors = form.validate();
    if errors.is_empty() {
        match state.submitter.submit_message(&form).await {
            Ok(receipt) => {
                log::info!(
                    "Contact message {} from {} received",
                    receipt.reference,
                    form.email
                );
                view.sent = true;
            }
            Err(err) => {
                log::warn!("Contact message hand-off failed: {err}");
                view.failed = true;
                view.form = form;
            }
        }
    } else {
        view.errors = ContactErrorsView {
            name: errors.get(ContactField::Name),
            email: errors.get(ContactField::Email),
            subject: errors.get(ContactField::Subject),
            message: errors.get(ContactField::Message),
        };
        view.form = form;
    }

    let (session, issued) = session_or_new(&req);
    let wizard = state.wizards.snapshot(Some(&session));
    let mut page = home_page(&state, &PageQuery::default(), &wizard, view);
    page.focus = Some("contatti");
    respond(&req, &state, page, &session, issued)
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, App};
    use actix_web::test::{call_and_read_body, call_service, init_service, read_body, TestRequest};

    use super::*;
    use crate::{routes, state::test_state};

    #[test]
    fn today_is_highlighted_once() {
        let view = ContactView::for_weekday(Weekday::Sat);
        let today: Vec<_> = view.hours.iter().filter(|row| row.today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].entry.day, "Sabato");
        assert_eq!(view.whatsapp_url, "https://wa.me/393123456789");
    }

    #[actix_web::test]
    async fn invalid_message_is_rendered_back_with_errors() {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes::configure),
        )
        .await;
        let req = TestRequest::post()
            .uri("/contatti")
            .set_form([
                ("name", "Anna"),
                ("email", "anna@example.com"),
                ("subject", ""),
                ("message", "Vorrei informazioni sul balayage"),
            ])
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("oggetto è obbligatorio"));
        assert!(body.contains("Vorrei informazioni sul balayage"));
        assert!(body.contains("data-focus=\"contatti\""));
    }

    #[actix_web::test]
    async fn valid_message_clears_the_form() {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes::configure),
        )
        .await;
        let req = TestRequest::post()
            .uri("/contatti")
            .set_form([
                ("name", "Anna"),
                ("email", "anna@example.com"),
                ("phone", ""),
                ("subject", "Orari"),
                ("message", "Siete aperti il lunedì?"),
            ])
            .to_request();
        let body = call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains("Messaggio inviato"));
        assert!(!body.contains("Siete aperti il lunedì?"));
    }
}
