//! Payload behind the "share" buttons.
//!
//! The browser tries its native share sheet first. When that is unavailable
//! it copies `url` to the clipboard and shows `confirmation`. Any other
//! failure is logged client-side and swallowed.

use serde::Serialize;

pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
    /// Shown only after the clipboard fallback succeeds.
    pub confirmation: &'static str,
}

impl ShareData {
    pub fn new(title: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url: url.into(),
            confirmation: COPIED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_copy_confirmation() {
        let data = ShareData::new(
            "Rudrabhishek",
            "Lord Shiva abhishek with milk, honey & bilva patra",
            "https://example.org/puja/3",
        );

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["url"], "https://example.org/puja/3");
        assert_eq!(json["confirmation"], "Link copied to clipboard!");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
