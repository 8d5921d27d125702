//! Booking wizard: four ordered steps over a single `BookingForm`.
//!
//! Validation is pure: `validate_step` and `advance` take the form and the
//! catalog and return either the next step or the field errors. The
//! `BookingWizard` wraps them with the mutable state a visitor carries
//! between requests (current step, inline errors, submission status).

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{self, AvailableDate, Catalog, Service, Stylist};
use crate::validation::{is_valid_email, FieldErrors};

pub const MSG_SERVICE: &str = "Seleziona un servizio";
pub const MSG_STYLIST: &str = "Seleziona uno specialista";
pub const MSG_DATE: &str = "Seleziona una data";
pub const MSG_TIME: &str = "Seleziona un orario";
pub const MSG_NAME: &str = "Inserisci il tuo nome";
pub const MSG_PHONE: &str = "Inserisci il numero di telefono";
pub const MSG_EMAIL_MISSING: &str = "Inserisci la tua email";
pub const MSG_EMAIL_INVALID: &str = "Inserisci un'email valida";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Service,
    Stylist,
    Date,
    Time,
    Name,
    Phone,
    Email,
    Notes,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Service,
        Field::Stylist,
        Field::Date,
        Field::Time,
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Service => "service",
            Field::Stylist => "stylist",
            Field::Date => "date",
            Field::Time => "time",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Notes => "notes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }

    /// The step on which this field is entered.
    pub fn step(self) -> Step {
        match self {
            Field::Service | Field::Stylist => Step::SelectServiceAndStylist,
            Field::Date | Field::Time => Step::SelectDateAndTime,
            Field::Name | Field::Phone | Field::Email | Field::Notes => Step::ContactAndSummary,
        }
    }
}

pub type BookingErrors = FieldErrors<Field>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingForm {
    pub service: String,
    pub stylist: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl BookingForm {
    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Service => &mut self.service,
            Field::Stylist => &mut self.stylist,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Notes => &mut self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    SelectServiceAndStylist,
    SelectDateAndTime,
    ContactAndSummary,
    Confirmed,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::SelectServiceAndStylist,
        Step::SelectDateAndTime,
        Step::ContactAndSummary,
        Step::Confirmed,
    ];

    /// 1-based position in the wizard.
    pub fn number(self) -> u8 {
        match self {
            Step::SelectServiceAndStylist => 1,
            Step::SelectDateAndTime => 2,
            Step::ContactAndSummary => 3,
            Step::Confirmed => 4,
        }
    }

    pub fn next(self) -> Step {
        match self {
            Step::SelectServiceAndStylist => Step::SelectDateAndTime,
            Step::SelectDateAndTime => Step::ContactAndSummary,
            Step::ContactAndSummary | Step::Confirmed => Step::Confirmed,
        }
    }

    pub fn previous(self) -> Step {
        match self {
            Step::SelectServiceAndStylist | Step::SelectDateAndTime => {
                Step::SelectServiceAndStylist
            }
            Step::ContactAndSummary => Step::SelectDateAndTime,
            Step::Confirmed => Step::Confirmed,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::SelectServiceAndStylist => "Servizio e specialista",
            Step::SelectDateAndTime => "Data e orario",
            Step::ContactAndSummary => "I tuoi dati",
            Step::Confirmed => "Conferma",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("step {} has {} invalid field(s)", .step.number(), .errors.len())]
    Invalid { step: Step, errors: BookingErrors },
    #[error("a submission is already in progress")]
    Submitting,
    #[error("booking already confirmed")]
    Confirmed,
    #[error("{field:?} cannot be changed on step {}", .step.number())]
    FieldNotOnStep { field: Field, step: Step },
    #[error("action not available on step {}", .0.number())]
    NotAvailable(Step),
}

/// Errors for the fields entered on `step`. Empty when the step may be left.
pub fn validate_step(step: Step, form: &BookingForm, catalog: &Catalog) -> BookingErrors {
    let mut errors = BookingErrors::new();
    match step {
        Step::SelectServiceAndStylist => {
            if catalog::find_service(&form.service).is_none() {
                errors.insert(Field::Service, MSG_SERVICE);
            }
            if catalog::find_stylist(&form.stylist).is_none() {
                errors.insert(Field::Stylist, MSG_STYLIST);
            }
        }
        Step::SelectDateAndTime => {
            if catalog.find_date(&form.date).is_none() {
                errors.insert(Field::Date, MSG_DATE);
            }
            if !catalog::is_time_slot(&form.time) {
                errors.insert(Field::Time, MSG_TIME);
            }
        }
        Step::ContactAndSummary => {
            if form.name.trim().is_empty() {
                errors.insert(Field::Name, MSG_NAME);
            }
            if form.phone.trim().is_empty() {
                errors.insert(Field::Phone, MSG_PHONE);
            }
            if form.email.trim().is_empty() {
                errors.insert(Field::Email, MSG_EMAIL_MISSING);
            } else if !is_valid_email(&form.email) {
                errors.insert(Field::Email, MSG_EMAIL_INVALID);
            }
        }
        Step::Confirmed => {}
    }
    errors
}

/// Transition out of `step`: the following step, or the errors blocking it.
pub fn advance(step: Step, form: &BookingForm, catalog: &Catalog) -> Result<Step, BookingErrors> {
    let errors = validate_step(step, form, catalog);
    if errors.is_empty() {
        Ok(step.next())
    } else {
        Err(errors)
    }
}

/// Catalog entries behind the current selections, for summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSummary {
    pub service: Option<&'static Service>,
    pub stylist: Option<&'static Stylist>,
    pub date: Option<AvailableDate>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingWizard {
    form: BookingForm,
    step: Step,
    errors: BookingErrors,
    status: SubmissionStatus,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &BookingErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Sets a field shown on the current step and clears that field's error.
    /// Returns whether the stored value changed; an unchanged value is not an
    /// edit and leaves the error in place.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<bool, WizardError> {
        self.ensure_editable()?;
        if field.step() != self.step {
            return Err(WizardError::FieldNotOnStep {
                field,
                step: self.step,
            });
        }

        let value = value.into();
        let slot = self.form.slot_mut(field);
        if *slot == value {
            return Ok(false);
        }
        *slot = value;
        self.errors.remove(field);
        Ok(true)
    }

    /// Validates the current step and moves forward. Step 3 is left only
    /// through `begin_submission`.
    pub fn next(&mut self, catalog: &Catalog) -> Result<Step, WizardError> {
        self.ensure_editable()?;
        if self.step == Step::ContactAndSummary {
            return Err(WizardError::NotAvailable(self.step));
        }

        match advance(self.step, &self.form, catalog) {
            Ok(next) => {
                self.errors = BookingErrors::new();
                self.step = next;
                Ok(next)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(WizardError::Invalid {
                    step: self.step,
                    errors,
                })
            }
        }
    }

    /// Steps back without validation. Entered values are kept.
    pub fn back(&mut self) -> Result<Step, WizardError> {
        self.ensure_editable()?;
        self.step = self.step.previous();
        Ok(self.step)
    }

    /// Validates the contact step and enters the submitting sub-state.
    /// Returns the form to hand to the submitter.
    pub fn begin_submission(&mut self, catalog: &Catalog) -> Result<BookingForm, WizardError> {
        self.ensure_editable()?;
        if self.step != Step::ContactAndSummary {
            return Err(WizardError::NotAvailable(self.step));
        }

        if let Err(errors) = advance(self.step, &self.form, catalog) {
            self.errors = errors.clone();
            return Err(WizardError::Invalid {
                step: self.step,
                errors,
            });
        }

        self.errors = BookingErrors::new();
        self.status = SubmissionStatus::Submitting;
        Ok(self.form.clone())
    }

    pub fn complete_submission(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        self.status = SubmissionStatus::Submitted;
        self.step = Step::Confirmed;
        true
    }

    /// Drops back to the contact step after a failed submission.
    pub fn abort_submission(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Starts a new booking. Refused while a submission is in flight.
    pub fn reset(&mut self) -> Result<(), WizardError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(WizardError::Submitting);
        }
        *self = Self::new();
        Ok(())
    }

    pub fn summary(&self, catalog: &Catalog) -> BookingSummary {
        let date = catalog
            .find_date(&self.form.date)
            .cloned()
            .or_else(|| {
                catalog::parse_date(&self.form.date).map(|date| AvailableDate {
                    date,
                    value: self.form.date.clone(),
                    label: catalog::date_label(date),
                })
            });
        let time = Some(self.form.time.clone()).filter(|time| !time.is_empty());

        BookingSummary {
            service: catalog::find_service(&self.form.service),
            stylist: catalog::find_stylist(&self.form.stylist),
            date,
            time,
        }
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        match self.status {
            SubmissionStatus::Submitting => Err(WizardError::Submitting),
            SubmissionStatus::Submitted => Err(WizardError::Confirmed),
            SubmissionStatus::Idle => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::for_day(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap())
    }

    fn first_date(catalog: &Catalog) -> String {
        catalog.picker_dates()[0].value.clone()
    }

    fn wizard_on_step3(catalog: &Catalog) -> BookingWizard {
        let mut wizard = BookingWizard::new();
        wizard.edit(Field::Service, "taglio").unwrap();
        wizard.edit(Field::Stylist, "sara").unwrap();
        wizard.next(catalog).unwrap();
        wizard.edit(Field::Date, first_date(catalog)).unwrap();
        wizard.edit(Field::Time, "10:00").unwrap();
        wizard.next(catalog).unwrap();
        wizard
    }

    #[test]
    fn step1_requires_service_and_stylist() {
        let catalog = catalog();
        let selections = [("", ""), ("taglio", ""), ("", "sara"), ("nope", "sara")];

        for (service, stylist) in selections {
            let mut wizard = BookingWizard::new();
            wizard.edit(Field::Service, service).unwrap();
            wizard.edit(Field::Stylist, stylist).unwrap();

            let result = wizard.next(&catalog);

            assert!(matches!(result, Err(WizardError::Invalid { .. })));
            assert_eq!(wizard.step(), Step::SelectServiceAndStylist);
            assert_eq!(
                wizard.errors().contains(Field::Service),
                catalog::find_service(service).is_none()
            );
            assert_eq!(
                wizard.errors().contains(Field::Stylist),
                catalog::find_stylist(stylist).is_none()
            );
        }

        let mut wizard = BookingWizard::new();
        assert!(wizard.next(&catalog).is_err());
        assert_eq!(wizard.errors().get(Field::Service), Some(MSG_SERVICE));
        assert_eq!(wizard.errors().get(Field::Stylist), Some(MSG_STYLIST));
    }

    #[test]
    fn any_stylist_counts_as_a_selection() {
        let catalog = catalog();
        let mut wizard = BookingWizard::new();
        wizard.edit(Field::Service, "piega").unwrap();
        wizard.edit(Field::Stylist, catalog::ANY_STYLIST).unwrap();

        assert_eq!(wizard.next(&catalog), Ok(Step::SelectDateAndTime));
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn step2_requires_date_and_time() {
        let catalog = catalog();
        let mut wizard = BookingWizard::new();
        wizard.edit(Field::Service, "taglio").unwrap();
        wizard.edit(Field::Stylist, "sara").unwrap();
        wizard.next(&catalog).unwrap();

        assert!(wizard.next(&catalog).is_err());
        assert_eq!(wizard.step(), Step::SelectDateAndTime);
        assert_eq!(wizard.errors().get(Field::Date), Some(MSG_DATE));
        assert_eq!(wizard.errors().get(Field::Time), Some(MSG_TIME));

        // A Sunday inside the window is not bookable.
        wizard.edit(Field::Date, "2026-10-18").unwrap();
        wizard.edit(Field::Time, "10:00").unwrap();
        assert!(wizard.next(&catalog).is_err());
        assert!(wizard.errors().contains(Field::Date));
        assert!(!wizard.errors().contains(Field::Time));
    }

    #[test]
    fn email_shape_decides_the_email_error() {
        let catalog = catalog();
        let cases = [
            ("anna@example.com", None),
            ("a@b.co", None),
            ("", Some(MSG_EMAIL_MISSING)),
            ("   ", Some(MSG_EMAIL_MISSING)),
            ("anna", Some(MSG_EMAIL_INVALID)),
            ("anna@example", Some(MSG_EMAIL_INVALID)),
            ("anna@@example.com", Some(MSG_EMAIL_INVALID)),
            ("anna @example.com", Some(MSG_EMAIL_INVALID)),
        ];

        for (email, expected) in cases {
            let mut wizard = wizard_on_step3(&catalog);
            wizard.edit(Field::Email, email).unwrap();
            let _ = wizard.begin_submission(&catalog);
            assert_eq!(wizard.errors().get(Field::Email), expected, "email {email:?}");
        }
    }

    #[test]
    fn step3_reports_every_missing_contact_field() {
        let catalog = catalog();
        let mut wizard = wizard_on_step3(&catalog);
        wizard.edit(Field::Name, "   ").unwrap();

        let result = wizard.begin_submission(&catalog);

        assert!(matches!(result, Err(WizardError::Invalid { step: Step::ContactAndSummary, .. })));
        assert_eq!(wizard.status(), SubmissionStatus::Idle);
        assert_eq!(
            wizard.errors().fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Phone, Field::Email]
        );
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let catalog = catalog();
        let mut wizard = wizard_on_step3(&catalog);
        let _ = wizard.begin_submission(&catalog);
        assert_eq!(wizard.errors().len(), 3);

        assert_eq!(wizard.edit(Field::Phone, "+39 333 1234567"), Ok(true));

        assert!(!wizard.errors().contains(Field::Phone));
        assert!(wizard.errors().contains(Field::Name));
        assert!(wizard.errors().contains(Field::Email));
    }

    #[test]
    fn unchanged_value_is_not_an_edit() {
        let catalog = catalog();
        let mut wizard = BookingWizard::new();
        let _ = wizard.next(&catalog);

        assert_eq!(wizard.edit(Field::Service, ""), Ok(false));
        assert!(wizard.errors().contains(Field::Service));
    }

    #[test]
    fn fields_of_other_steps_are_not_editable() {
        let mut wizard = BookingWizard::new();
        assert_eq!(
            wizard.edit(Field::Email, "anna@example.com"),
            Err(WizardError::FieldNotOnStep {
                field: Field::Email,
                step: Step::SelectServiceAndStylist
            })
        );
        assert_eq!(wizard.form().email, "");
    }

    #[test]
    fn back_keeps_entered_values() {
        let catalog = catalog();
        let mut wizard = wizard_on_step3(&catalog);
        wizard.edit(Field::Name, "Anna Bianchi").unwrap();
        let before = wizard.form().clone();

        assert_eq!(wizard.back(), Ok(Step::SelectDateAndTime));
        assert_eq!(wizard.back(), Ok(Step::SelectServiceAndStylist));
        assert_eq!(wizard.back(), Ok(Step::SelectServiceAndStylist));
        assert_eq!(wizard.form(), &before);

        // Accepted steps are not validated again on the way back up.
        assert_eq!(wizard.next(&catalog), Ok(Step::SelectDateAndTime));
        assert_eq!(wizard.next(&catalog), Ok(Step::ContactAndSummary));
        assert_eq!(wizard.form().name, "Anna Bianchi");
    }

    #[test]
    fn submission_flow_reaches_confirmation() {
        let catalog = catalog();
        let date = first_date(&catalog);
        let mut wizard = wizard_on_step3(&catalog);
        wizard.edit(Field::Name, "Anna Bianchi").unwrap();
        wizard.edit(Field::Phone, "+39 333 1234567").unwrap();
        wizard.edit(Field::Email, "anna@example.com").unwrap();

        let form = wizard.begin_submission(&catalog).unwrap();
        assert_eq!(wizard.status(), SubmissionStatus::Submitting);
        assert_eq!(form.name, "Anna Bianchi");

        // Second submit while pending is refused.
        assert_eq!(wizard.begin_submission(&catalog), Err(WizardError::Submitting));
        assert_eq!(wizard.back(), Err(WizardError::Submitting));

        assert!(wizard.complete_submission());
        assert_eq!(wizard.step(), Step::Confirmed);
        assert_eq!(wizard.status(), SubmissionStatus::Submitted);

        let summary = wizard.summary(&catalog);
        let service = summary.service.unwrap();
        assert_eq!((service.name, service.duration, service.price), ("Taglio & Style", "60 min", "€45"));
        assert_eq!(summary.stylist.map(|s| s.name), Some("Sara Lepri"));
        assert_eq!(summary.date.map(|d| d.value), Some(date));
        assert_eq!(summary.time.as_deref(), Some("10:00"));
        assert_eq!(wizard.form().phone, "+39 333 1234567");
        assert_eq!(wizard.form().email, "anna@example.com");
    }

    #[test]
    fn failed_submission_returns_to_contact_step() {
        let catalog = catalog();
        let mut wizard = wizard_on_step3(&catalog);
        wizard.edit(Field::Name, "Anna").unwrap();
        wizard.edit(Field::Phone, "123").unwrap();
        wizard.edit(Field::Email, "anna@example.com").unwrap();
        wizard.begin_submission(&catalog).unwrap();

        assert!(wizard.abort_submission());
        assert_eq!(wizard.step(), Step::ContactAndSummary);
        assert_eq!(wizard.status(), SubmissionStatus::Idle);
        assert!(!wizard.complete_submission());
    }

    #[test]
    fn reset_after_confirmation_starts_over() {
        let catalog = catalog();
        let mut wizard = wizard_on_step3(&catalog);
        wizard.edit(Field::Name, "Anna").unwrap();
        wizard.edit(Field::Phone, "123").unwrap();
        wizard.edit(Field::Email, "anna@example.com").unwrap();
        wizard.begin_submission(&catalog).unwrap();
        wizard.complete_submission();

        assert_eq!(wizard.edit(Field::Name, "Other"), Err(WizardError::Confirmed));
        wizard.reset().unwrap();

        assert_eq!(wizard, BookingWizard::new());
        assert_eq!(wizard.step(), Step::SelectServiceAndStylist);
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn summary_of_empty_form_is_empty() {
        let summary = BookingWizard::new().summary(&catalog());
        assert_eq!(summary, BookingSummary::default());
    }
}
