use axum::{
    extract::Path,
    http::StatusCode,
    response::Response,
};
use axum_extra::extract::Form;
use devdarshan_booking::{
    Attendance, Booking, BookingFlow, BookingForm, BookingKind, Platform,
};
use devdarshan_calendar::{DatePicker, DateValue, TimePicker, clock::parse_hhmm};
use devdarshan_catalog::Offering;
use strum::VariantArray;

use crate::routes::widgets::{DatePickerView, TimePickerView};
use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "booking/choose.html")]
pub struct ChooseTemplate {
    pub layout: Layout,
    pub offering: &'static Offering,
    pub step: u8,
    pub title: &'static str,
    pub kinds: &'static [BookingKind],
}

#[derive(askama::Template)]
#[template(path = "booking/details.html")]
pub struct DetailsTemplate {
    pub layout: Layout,
    pub offering: &'static Offering,
    pub step: u8,
    pub title: &'static str,
    pub kind: BookingKind,
    pub form: BookingForm,
    pub errors: Vec<(String, String)>,
    pub date_picker: DatePickerView,
    pub time_picker: TimePickerView,
    pub members: u8,
    pub platforms: &'static [Platform],
}

impl DetailsTemplate {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_video_call(&self) -> bool {
        self.kind == BookingKind::VideoCall
    }

    pub fn is_platform(&self, platform: &Platform) -> bool {
        self.form.platform() == Some(*platform)
    }
}

#[derive(askama::Template)]
#[template(path = "booking/confirmed.html")]
pub struct ConfirmedTemplate {
    pub layout: Layout,
    pub offering: &'static Offering,
    pub step: u8,
    pub title: &'static str,
    pub reference: String,
    pub summary: Vec<(&'static str, String)>,
}

fn summary(booking: &Booking) -> Vec<(&'static str, String)> {
    let details = &booking.details;
    let yes_no = |flag: bool| (if flag { "Yes" } else { "No" }).to_owned();

    let mut lines = vec![
        ("Booking Type", booking.kind().title().to_owned()),
        ("Name", details.full_name.to_owned()),
        ("Phone", details.phone.to_owned()),
        ("Email", details.email.to_owned()),
        ("Date", DateValue(details.date).display()),
    ];

    if let Some(time) = &details.time {
        lines.push(("Time", time.to_owned()));
    }

    lines.push(("Members", details.members.to_string()));

    match details.attendance {
        Attendance::InPerson {
            accommodation,
            pickup_required,
        } => {
            lines.push(("Accommodation", yes_no(accommodation)));
            lines.push(("Pickup", yes_no(pickup_required)));
        }
        Attendance::VideoCall { platform } => {
            lines.push(("Platform", platform.label().to_owned()));
        }
    }

    for (label, value) in [
        ("Gotra", &details.gotra),
        ("Nakshatra", &details.nakshatra),
        ("Special Requests", &details.special_requests),
    ] {
        if let Some(value) = value {
            lines.push((label, value.to_owned()));
        }
    }

    lines
}

fn details_page(
    template: &Template,
    offering: &'static Offering,
    flow: &BookingFlow,
    kind: BookingKind,
    form: BookingForm,
    errors: Vec<(String, String)>,
) -> DetailsTemplate {
    let today = template.today();
    let booking = &template.config().booking;

    let date_picker = DatePicker::new(
        DateValue::parse_opt(Some(form.date.as_str())),
        booking.rules().bounds(today),
        today,
    );
    let picked = parse_hhmm(&form.time).is_some();
    let time_picker = TimePicker::new(booking.clock_mode(), booking.minute_step)
        .with_value(Some(form.time.as_str()));

    DetailsTemplate {
        layout: template.layout("/pujas"),
        offering,
        step: flow.step_number(),
        title: flow.title(),
        kind,
        members: form.members(),
        date_picker: DatePickerView::new("date", &date_picker, today),
        time_picker: TimePickerView::new("time", &time_picker, picked),
        form,
        errors,
        platforms: Platform::VARIANTS,
    }
}

pub async fn choose(template: Template, Path(id): Path<u32>) -> Response {
    let offering = crate::try_page_response!(opt: devdarshan_catalog::find(id), template);
    let flow = BookingFlow::new(id);

    template.render(ChooseTemplate {
        layout: template.layout("/pujas"),
        offering,
        step: flow.step_number(),
        title: flow.title(),
        kinds: BookingKind::VARIANTS,
    })
}

pub async fn details(template: Template, Path((id, kind)): Path<(u32, String)>) -> Response {
    let offering = crate::try_page_response!(opt: devdarshan_catalog::find(id), template);
    let kind = crate::try_page_response!(opt: kind.parse::<BookingKind>().ok(), template);

    let mut flow = BookingFlow::new(id);
    flow.select_type(kind);

    let form = BookingForm {
        members: "1".to_owned(),
        ..Default::default()
    };

    template.render(details_page(&template, offering, &flow, kind, form, vec![]))
}

pub async fn submit(
    template: Template,
    Path((id, kind)): Path<(u32, String)>,
    Form(form): Form<BookingForm>,
) -> Response {
    let offering = crate::try_page_response!(opt: devdarshan_catalog::find(id), template);
    let kind = crate::try_page_response!(opt: kind.parse::<BookingKind>().ok(), template);

    let mut flow = BookingFlow::new(id);
    flow.select_type(kind);

    let rules = template.config().booking.rules();
    let booking = match flow.submit(&form, &rules, template.today()) {
        Ok(booking) => booking,
        Err(err) => {
            tracing::info!(puja = id, kind = %kind, err = %err, "booking rejected");

            let errors = err.field_messages();
            return template.render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                details_page(&template, offering, &flow, kind, form, errors),
            );
        }
    };

    template.render(ConfirmedTemplate {
        layout: template.layout("/pujas"),
        offering,
        step: flow.step_number(),
        title: flow.title(),
        summary: summary(&booking),
        reference: booking.reference,
    })
}
