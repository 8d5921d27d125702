use std::sync::Arc;

use actix_web::{http::header, rt, web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::{
    booking::{BookingForm, BookingWizard, Field, Step, SubmissionStatus, WizardError},
    catalog::Catalog,
    session::{session_cookie, session_or_new, WizardStore},
    state::AppState,
    submit::{Receipt, SubmitError},
};

#[derive(Clone, Debug)]
pub(crate) struct Choice {
    pub(crate) value: String,
    pub(crate) title: String,
    pub(crate) detail: String,
    pub(crate) selected: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct StepBadge {
    pub(crate) number: u8,
    pub(crate) title: &'static str,
    pub(crate) reached: bool,
    pub(crate) completed: bool,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ErrorsView {
    pub(crate) service: Option<&'static str>,
    pub(crate) stylist: Option<&'static str>,
    pub(crate) date: Option<&'static str>,
    pub(crate) time: Option<&'static str>,
    pub(crate) name: Option<&'static str>,
    pub(crate) phone: Option<&'static str>,
    pub(crate) email: Option<&'static str>,
}

/// Summary values; empty strings for anything not selected yet.
#[derive(Clone, Debug, Default)]
pub(crate) struct SummaryView {
    pub(crate) service: String,
    pub(crate) stylist: String,
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) duration: String,
    pub(crate) price: String,
}

#[derive(Clone, Debug)]
pub(crate) struct BookingView {
    pub(crate) step: u8,
    pub(crate) progress: u32,
    pub(crate) badges: Vec<StepBadge>,
    pub(crate) services: Vec<Choice>,
    pub(crate) stylists: Vec<Choice>,
    pub(crate) dates: Vec<Choice>,
    pub(crate) times: Vec<Choice>,
    pub(crate) form: BookingForm,
    pub(crate) errors: ErrorsView,
    pub(crate) summary: SummaryView,
    pub(crate) submitting: bool,
    pub(crate) submitted: bool,
}

impl BookingView {
    pub(crate) fn build(wizard: &BookingWizard, catalog: &Catalog) -> Self {
        let form = wizard.form();
        let step = wizard.step().number();
        let submitted = wizard.status() == SubmissionStatus::Submitted;

        let badges = Step::ALL
            .iter()
            .map(|badge| StepBadge {
                number: badge.number(),
                title: badge.title(),
                reached: badge.number() <= step,
                completed: badge.number() < step || submitted,
            })
            .collect();

        let services = catalog
            .services()
            .iter()
            .map(|service| Choice {
                value: choice_value(Field::Service, service.id),
                title: service.name.to_string(),
                detail: format!("{} • {}", service.duration, service.price),
                selected: form.service == service.id,
            })
            .collect();

        let stylists = catalog
            .stylists()
            .iter()
            .map(|stylist| Choice {
                value: choice_value(Field::Stylist, stylist.id),
                title: stylist.name.to_string(),
                detail: stylist.specialty.to_string(),
                selected: form.stylist == stylist.id,
            })
            .collect();

        let dates = catalog
            .picker_dates()
            .iter()
            .map(|date| Choice {
                value: choice_value(Field::Date, &date.value),
                title: date.label.clone(),
                detail: String::new(),
                selected: form.date == date.value,
            })
            .collect();

        let times = catalog
            .time_slots()
            .iter()
            .map(|slot| Choice {
                value: choice_value(Field::Time, slot),
                title: slot.to_string(),
                detail: String::new(),
                selected: form.time == *slot,
            })
            .collect();

        let errors = wizard.errors();
        let errors = ErrorsView {
            service: errors.get(Field::Service),
            stylist: errors.get(Field::Stylist),
            date: errors.get(Field::Date),
            time: errors.get(Field::Time),
            name: errors.get(Field::Name),
            phone: errors.get(Field::Phone),
            email: errors.get(Field::Email),
        };

        let selected = wizard.summary(catalog);
        let summary = SummaryView {
            service: selected.service.map(|s| s.name.to_string()).unwrap_or_default(),
            stylist: selected.stylist.map(|s| s.name.to_string()).unwrap_or_default(),
            date: selected.date.map(|d| d.label).unwrap_or_default(),
            time: selected.time.unwrap_or_default(),
            duration: selected.service.map(|s| s.duration.to_string()).unwrap_or_default(),
            price: selected.service.map(|s| s.price.to_string()).unwrap_or_default(),
        };

        Self {
            step,
            progress: u32::from(step - 1) * 100 / 3,
            badges,
            services,
            stylists,
            dates,
            times,
            form: form.clone(),
            errors,
            summary,
            submitting: wizard.status() == SubmissionStatus::Submitting,
            submitted,
        }
    }
}

fn choice_value(field: Field, value: &str) -> String {
    format!("{}:{value}", field.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WizardAction {
    Select(Field, String),
    Next,
    Back,
    Submit,
    Reset,
}

#[derive(Debug, Default, Deserialize)]
struct WizardInput {
    azione: Option<String>,
    scelta: Option<String>,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    notes: Option<String>,
}

impl WizardInput {
    fn action(&self, step: Step) -> Option<WizardAction> {
        if let Some(choice) = self.scelta.as_deref() {
            let (field, value) = choice.split_once(':')?;
            return Some(WizardAction::Select(Field::parse(field)?, value.to_string()));
        }

        match self.azione.as_deref()? {
            "avanti" if step == Step::ContactAndSummary => Some(WizardAction::Submit),
            "avanti" => Some(WizardAction::Next),
            "indietro" => Some(WizardAction::Back),
            "conferma" => Some(WizardAction::Submit),
            "nuova" => Some(WizardAction::Reset),
            _ => None,
        }
    }

    /// Text inputs travel with every step 3 post, including "indietro".
    fn apply_text_edits(&self, wizard: &mut BookingWizard) {
        let edits = [
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Email, &self.email),
            (Field::Notes, &self.notes),
        ];
        for (field, value) in edits {
            if let Some(value) = value {
                if let Err(err) = wizard.edit(field, value.as_str()) {
                    log::debug!("Ignoring edit: {err}");
                }
            }
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/prenota").route(web::post().to(wizard_action)));
}

async fn wizard_action(
    req: HttpRequest,
    state: web::Data<AppState>,
    input: web::Form<WizardInput>,
) -> Result<HttpResponse> {
    let input = input.into_inner();
    let (session, issued) = session_or_new(&req);
    let catalog = Catalog::today();

    let step = state.wizards.snapshot(Some(&session)).step();
    let Some(action) = input.action(step) else {
        return Ok(HttpResponse::BadRequest().body("Azione non valida"));
    };

    let outcome = match action {
        WizardAction::Submit => submit(&state, &session, &input, &catalog).await,
        action => state.wizards.with_wizard(&session, |wizard| {
            input.apply_text_edits(wizard);
            apply(wizard, action, &catalog)
        }),
    };
    if let Err(err) = outcome {
        log::debug!("Booking action refused: {err}");
    }

    let mut response = HttpResponse::SeeOther();
    response
        .append_header((header::LOCATION, "/#prenota"))
        .insert_header((header::CACHE_CONTROL, "no-store"));
    if issued {
        response.cookie(session_cookie(&req, &session, state.wizards.idle()));
    }
    Ok(response.finish())
}

fn apply(
    wizard: &mut BookingWizard,
    action: WizardAction,
    catalog: &Catalog,
) -> Result<(), WizardError> {
    match action {
        WizardAction::Select(field, value) => wizard.edit(field, value).map(|_| ()),
        WizardAction::Next => wizard.next(catalog).map(|_| ()),
        WizardAction::Back => wizard.back().map(|_| ()),
        WizardAction::Reset => wizard.reset(),
        WizardAction::Submit => wizard.begin_submission(catalog).map(|_| ()),
    }
}

/// Flips the wizard to submitting, releases the lock for the hand-off,
/// then records the outcome.
///
/// The hand-off runs on its own task so a dropped request cannot leave the
/// wizard stuck in submitting.
async fn submit(
    state: &AppState,
    session: &str,
    input: &WizardInput,
    catalog: &Catalog,
) -> Result<(), WizardError> {
    let form = state.wizards.with_wizard(session, |wizard| {
        input.apply_text_edits(wizard);
        wizard.begin_submission(catalog)
    })?;

    let submitter = Arc::clone(&state.submitter);
    let wizards = Arc::clone(&state.wizards);
    let owner = session.to_string();
    let booking = form.clone();
    let handoff = rt::spawn(async move {
        let outcome = submitter.submit_booking(&booking).await;
        record_outcome(&wizards, &owner, &booking, outcome);
    });

    if let Err(err) = handoff.await {
        let outcome = Err(SubmitError::Unavailable(format!("hand-off task ended: {err}")));
        record_outcome(&state.wizards, session, &form, outcome);
    }
    Ok(())
}

fn record_outcome(
    wizards: &WizardStore,
    session: &str,
    form: &BookingForm,
    outcome: Result<Receipt, SubmitError>,
) {
    match outcome {
        Ok(receipt) => {
            log::info!(
                "Booking {} received at {}: {} with {} on {} {}",
                receipt.reference,
                receipt.received_at.to_rfc3339(),
                form.service,
                form.stylist,
                form.date,
                form.time
            );
            wizards.with_wizard(session, |wizard| wizard.complete_submission());
        }
        Err(err) => {
            log::warn!("Booking submission failed: {err}");
            wizards.with_wizard(session, |wizard| wizard.abort_submission());
        }
    }
}
