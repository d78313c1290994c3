use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Deserialize, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BookingKind {
    InPerson,
    VideoCall,
}

impl BookingKind {
    pub fn title(&self) -> &'static str {
        match self {
            BookingKind::InPerson => "Visit Ujjain",
            BookingKind::VideoCall => "Video Call",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            BookingKind::InPerson => "Perform puja in person",
            BookingKind::VideoCall => "Connect virtually",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BookingKind::InPerson => {
                "Experience the divine atmosphere of Ujjain. Our pandits will guide you through the complete puja rituals at the sacred temple."
            }
            BookingKind::VideoCall => {
                "Join the puja live from anywhere in the world. Watch the complete ritual performed on your behalf with real-time interaction."
            }
        }
    }

    pub fn features(&self) -> [&'static str; 4] {
        match self {
            BookingKind::InPerson => [
                "Temple darshan included",
                "Personal guidance",
                "Prasad & offerings",
                "Photography allowed",
            ],
            BookingKind::VideoCall => [
                "HD live streaming",
                "Interactive session",
                "Prasad delivery",
                "Recording provided",
            ],
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    Zoom,
    GoogleMeet,
    Whatsapp,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Zoom => "Zoom",
            Platform::GoogleMeet => "Google Meet",
            Platform::Whatsapp => "WhatsApp",
        }
    }
}

/// Options that only exist for one kind of booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attendance {
    InPerson {
        accommodation: bool,
        pickup_required: bool,
    },
    VideoCall {
        platform: Platform,
    },
}

impl Attendance {
    pub fn kind(&self) -> BookingKind {
        match self {
            Attendance::InPerson { .. } => BookingKind::InPerson,
            Attendance::VideoCall { .. } => BookingKind::VideoCall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_path_segments() {
        assert_eq!(BookingKind::InPerson.to_string(), "in-person");
        assert_eq!(
            "video-call".parse::<BookingKind>().unwrap(),
            BookingKind::VideoCall
        );
        assert!("phone".parse::<BookingKind>().is_err());
    }

    #[test]
    fn test_platform_values() {
        assert_eq!(
            "google-meet".parse::<Platform>().unwrap(),
            Platform::GoogleMeet
        );
        assert_eq!(Platform::default(), Platform::Zoom);
        assert_eq!(Platform::VARIANTS.len(), 3);
    }
}
