#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Field-level messages for form re-rendering, sorted by field name.
    pub fn field_messages(&self) -> Vec<(String, String)> {
        match self {
            Error::Validate(errors) => {
                let mut messages = errors
                    .field_errors()
                    .into_iter()
                    .filter_map(|(field, errs)| {
                        let first = errs.first()?;
                        let message = first
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{field} is invalid"));
                        Some((field.to_string(), message))
                    })
                    .collect::<Vec<_>>();
                messages.sort();
                messages
            }
            Error::Invalid(msg) => vec![("form".to_owned(), msg.to_owned())],
        }
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Invalid(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Invalid(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Invalid(format!($fmt, $($arg)*)))
    };
}
