use time::Date;
use ulid::Ulid;

use crate::{BookingDetails, BookingForm, BookingKind, BookingRules};

/// A confirmed booking request. Nothing is persisted; the reference is handed back to the devotee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub reference: String,
    pub puja_id: u32,
    pub details: BookingDetails,
}

impl Booking {
    pub fn kind(&self) -> BookingKind {
        self.details.attendance.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    ChooseType,
    Details(BookingKind),
    Confirmed(Box<Booking>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFlow {
    pub puja_id: u32,
    pub step: Step,
}

impl BookingFlow {
    pub fn new(puja_id: u32) -> Self {
        Self {
            puja_id,
            step: Step::ChooseType,
        }
    }

    pub fn select_type(&mut self, kind: BookingKind) {
        if self.step == Step::ChooseType {
            self.step = Step::Details(kind);
        }
    }

    /// Back to the first step. Not available once confirmed.
    pub fn change_type(&mut self) {
        if matches!(self.step, Step::Details(_)) {
            self.step = Step::ChooseType;
        }
    }

    pub fn submit(
        &mut self,
        form: &BookingForm,
        rules: &BookingRules,
        today: Date,
    ) -> devdarshan_shared::Result<Booking> {
        let Step::Details(kind) = self.step else {
            devdarshan_shared::bail!("Please choose how you would like to attend the puja");
        };

        let details = form.validate(kind, rules, today)?;
        let booking = Booking {
            reference: Ulid::new().to_string(),
            puja_id: self.puja_id,
            details,
        };

        tracing::info!(
            reference = %booking.reference,
            puja_id = booking.puja_id,
            kind = %kind,
            date = %booking.details.date,
            members = booking.details.members,
            "booking request received"
        );

        self.step = Step::Confirmed(Box::new(booking.clone()));

        Ok(booking)
    }

    pub fn step_number(&self) -> u8 {
        match self.step {
            Step::ChooseType => 1,
            Step::Details(_) => 2,
            Step::Confirmed(_) => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.step {
            Step::ChooseType => "Choose Booking Type",
            Step::Details(BookingKind::InPerson) => "In-Person Booking",
            Step::Details(BookingKind::VideoCall) => "Video Call Booking",
            Step::Confirmed(_) => "Booking Confirmed",
        }
    }
}
