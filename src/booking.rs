//! Booking form state, the completeness check that gates submission, and the
//! submission step that turns a form into a user-facing notification.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

/// A visitor's in-progress booking choices.
///
/// Setters overwrite unconditionally. Whether an id resolves against the
/// catalog, or a time against the available slots, is checked where form
/// input is decoded, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSelection {
    service_id: Option<u32>,
    staff_id: Option<u32>,
    date: Option<NaiveDate>,
    time: Option<String>,
    client_name: String,
    client_phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Service,
    Staff,
    Date,
    Time,
    ClientName,
    ClientPhone,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Service => "service",
            Field::Staff => "staff",
            Field::Date => "date",
            Field::Time => "time",
            Field::ClientName => "name",
            Field::ClientPhone => "phone",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("incomplete booking, missing {}", join_fields(.missing))]
pub struct IncompleteSelection {
    pub missing: Vec<Field>,
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A selection that passed the gate; every field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteBooking {
    pub service_id: u32,
    pub staff_id: u32,
    pub date: NaiveDate,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
}

impl BookingSelection {
    pub fn set_service(&mut self, service_id: Option<u32>) {
        self.service_id = service_id;
    }

    pub fn set_staff(&mut self, staff_id: Option<u32>) {
        self.staff_id = staff_id;
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: Option<String>) {
        self.time = time;
    }

    pub fn set_client_name(&mut self, name: impl Into<String>) {
        self.client_name = name.into();
    }

    pub fn set_client_phone(&mut self, phone: impl Into<String>) {
        self.client_phone = phone.into();
    }

    pub fn service_id(&self) -> Option<u32> {
        self.service_id
    }

    pub fn staff_id(&self) -> Option<u32> {
        self.staff_id
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn client_phone(&self) -> &str {
        &self.client_phone
    }

    /// Fields still unset, in form order. Whitespace-only strings count as set.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.service_id.is_none() {
            missing.push(Field::Service);
        }
        if self.staff_id.is_none() {
            missing.push(Field::Staff);
        }
        if self.date.is_none() {
            missing.push(Field::Date);
        }
        if self.time.as_deref().map_or(true, str::is_empty) {
            missing.push(Field::Time);
        }
        if self.client_name.is_empty() {
            missing.push(Field::ClientName);
        }
        if self.client_phone.is_empty() {
            missing.push(Field::ClientPhone);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn validate(&self) -> Result<CompleteBooking, IncompleteSelection> {
        match (self.service_id, self.staff_id, self.date, &self.time) {
            (Some(service_id), Some(staff_id), Some(date), Some(time)) if self.is_complete() => {
                Ok(CompleteBooking {
                    service_id,
                    staff_id,
                    date,
                    time: time.clone(),
                    client_name: self.client_name.clone(),
                    client_phone: self.client_phone.clone(),
                })
            }
            _ => Err(IncompleteSelection {
                missing: self.missing_fields(),
            }),
        }
    }

    /// Clear everything the visitor typed or picked, except the date.
    fn reset_after_booking(&mut self) {
        self.service_id = None;
        self.staff_id = None;
        self.time = None;
        self.client_name.clear();
        self.client_phone.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Error,
}

/// A transient message for the visitor, rendered as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    fn booked(booking: &CompleteBooking) -> Self {
        Self {
            title: "Booking created!".to_string(),
            message: format!(
                "You are booked for {} at {}",
                booking.date.format("%d.%m.%Y"),
                booking.time
            ),
            severity: Severity::Normal,
        }
    }

    fn incomplete() -> Self {
        Self {
            title: "Error".to_string(),
            message: "Please fill in all fields".to_string(),
            severity: Severity::Error,
        }
    }
}

/// The booking dialog: its open flag and the selection behind it.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub selection: BookingSelection,
    dialog_open: bool,
}

impl BookingForm {
    pub fn is_open(&self) -> bool {
        self.dialog_open
    }

    pub fn open(&mut self) {
        self.dialog_open = true;
    }

    /// Hide the dialog. The selection is kept, so reopening resumes it.
    pub fn close(&mut self) {
        self.dialog_open = false;
    }

    /// Submit the current selection.
    ///
    /// An incomplete selection leaves both the selection and the dialog
    /// untouched. A complete one closes the dialog and clears every field
    /// except the date.
    pub fn submit(&mut self) -> Notification {
        match self.selection.validate() {
            Ok(booking) => {
                info!(
                    "Booking: {} ({}) for service {} with staff {} on {} at {}",
                    booking.client_name,
                    booking.client_phone,
                    booking.service_id,
                    booking.staff_id,
                    booking.date,
                    booking.time
                );
                let notification = Notification::booked(&booking);
                self.dialog_open = false;
                self.selection.reset_after_booking();
                notification
            }
            Err(e) => {
                debug!("Booking rejected: {}", e);
                Notification::incomplete()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn complete_selection() -> BookingSelection {
        let mut s = BookingSelection::default();
        s.set_service(Some(1));
        s.set_staff(Some(2));
        s.set_date(Some(date(2024, 6, 1)));
        s.set_time(Some("10:00".to_string()));
        s.set_client_name("Ivan Petrov");
        s.set_client_phone("+7 999 123 45 67");
        s
    }

    #[test]
    fn test_empty_selection_is_incomplete() {
        let s = BookingSelection::default();
        assert!(!s.is_complete());
        assert_eq!(s.missing_fields().len(), 6);
    }

    #[test]
    fn test_complete_selection_passes_gate() {
        let s = complete_selection();
        assert!(s.is_complete());
        let booking = s.validate().unwrap();
        assert_eq!(booking.service_id, 1);
        assert_eq!(booking.staff_id, 2);
        assert_eq!(booking.time, "10:00");
    }

    #[test]
    fn test_any_missing_field_fails_gate() {
        let clears: [(Field, fn(&mut BookingSelection)); 6] = [
            (Field::Service, |s| s.set_service(None)),
            (Field::Staff, |s| s.set_staff(None)),
            (Field::Date, |s| s.set_date(None)),
            (Field::Time, |s| s.set_time(None)),
            (Field::ClientName, |s| s.set_client_name("")),
            (Field::ClientPhone, |s| s.set_client_phone("")),
        ];
        for (field, clear) in clears {
            let mut s = complete_selection();
            clear(&mut s);
            assert!(!s.is_complete(), "{field} cleared but gate passed");
            assert_eq!(s.validate().unwrap_err().missing, vec![field]);
        }
    }

    #[test]
    fn test_empty_time_string_fails_gate() {
        let mut s = complete_selection();
        s.set_time(Some(String::new()));
        assert_eq!(s.missing_fields(), vec![Field::Time]);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let mut s = complete_selection();
        s.set_client_name(" ");
        assert!(s.is_complete());
    }

    #[test]
    fn test_setters_overwrite() {
        let mut s = complete_selection();
        s.set_service(Some(5));
        s.set_client_name("Olga");
        assert_eq!(s.service_id(), Some(5));
        assert_eq!(s.client_name(), "Olga");
        assert_eq!(s.staff_id(), Some(2));
    }

    #[test]
    fn test_incomplete_selection_message() {
        let mut s = complete_selection();
        s.set_staff(None);
        s.set_client_phone("");
        let err = s.validate().unwrap_err();
        assert_eq!(err.to_string(), "incomplete booking, missing staff, phone");
    }

    #[test]
    fn test_submit_success_resets_all_but_date() {
        let mut form = BookingForm::default();
        form.open();
        form.selection = complete_selection();

        let n = form.submit();
        assert_eq!(n.severity, Severity::Normal);
        assert_eq!(n.title, "Booking created!");
        assert_eq!(n.message, "You are booked for 01.06.2024 at 10:00");

        assert!(!form.is_open());
        assert_eq!(form.selection.service_id(), None);
        assert_eq!(form.selection.staff_id(), None);
        assert_eq!(form.selection.time(), None);
        assert_eq!(form.selection.client_name(), "");
        assert_eq!(form.selection.client_phone(), "");
        assert_eq!(form.selection.date(), Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_submit_missing_phone_changes_nothing() {
        let mut form = BookingForm::default();
        form.open();
        form.selection = complete_selection();
        form.selection.set_client_phone("");
        let before = form.selection.clone();

        let n = form.submit();
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.title, "Error");
        assert_eq!(n.message, "Please fill in all fields");
        assert!(form.is_open());
        assert_eq!(form.selection, before);
    }

    #[test]
    fn test_resubmit_after_correction() {
        let mut form = BookingForm::default();
        form.open();
        form.selection = complete_selection();
        form.selection.set_client_name("");
        assert_eq!(form.submit().severity, Severity::Error);

        form.selection.set_client_name("Ivan Petrov");
        assert_eq!(form.submit().severity, Severity::Normal);
    }

    #[test]
    fn test_close_keeps_selection() {
        let mut form = BookingForm::default();
        form.open();
        form.selection.set_service(Some(3));
        form.close();
        assert!(!form.is_open());
        assert_eq!(form.selection.service_id(), Some(3));
    }
}
