use error_stack::Report;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseFloatError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlanarErrorKind {
    #[error("General Error: {0}")]
    General(String),
    #[error("Invalid Rectangle: {0}")]
    InvalidRectangle(String),
    #[error("Parse Error: {0}")]
    Parse(String),
}

#[derive(Debug)]
pub struct PlanarError(pub Report<PlanarErrorKind>);

impl Display for PlanarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl PlanarError {
    #[track_caller]
    pub fn new(error: PlanarErrorKind) -> PlanarError {
        PlanarError(Report::new(error))
    }

    pub fn kind(&self) -> &PlanarErrorKind {
        self.0.current_context()
    }

    #[track_caller]
    pub fn change_context<S: Into<String>>(self, message: S) -> Self {
        let kind = match self.kind() {
            PlanarErrorKind::General(_) => PlanarErrorKind::General(message.into()),
            PlanarErrorKind::InvalidRectangle(_) => {
                PlanarErrorKind::InvalidRectangle(message.into())
            }
            PlanarErrorKind::Parse(_) => PlanarErrorKind::Parse(message.into()),
        };
        Self(self.0.change_context(kind))
    }
}

pub type PlanarResult<T> = Result<T, PlanarError>;

impl<T> From<T> for PlanarError
where
    for<'a> &'a T: Into<PlanarErrorKind>,
    T: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: T) -> Self {
        let kind: PlanarErrorKind = (&error).into();
        let report = Report::new(error);
        let report = report.change_context(kind);
        Self(report)
    }
}

impl From<&ParseFloatError> for PlanarErrorKind {
    #[track_caller]
    fn from(error: &ParseFloatError) -> Self {
        Self::Parse(format!("Failed to parse float value: {}", error))
    }
}

impl From<&str> for PlanarError {
    #[track_caller]
    fn from(error: &str) -> Self {
        Self(Report::new(PlanarErrorKind::General(error.to_string())))
    }
}

#[macro_export]
macro_rules! bail {
    ($($args:tt)+) => {
        return Err($crate::result::PlanarError::new($crate::result::PlanarErrorKind::General(format!($($args)+).into())))
    }
}

#[macro_export]
macro_rules! bail_kind {
    ($kind:ident, $($args:tt)+) => {
        return Err($crate::result::PlanarError::new($crate::result::PlanarErrorKind::$kind(format!($($args)+).into())))
    }
}

#[macro_export]
macro_rules! err {
    ($($args:tt)+) => {
        $crate::result::PlanarError::new($crate::result::PlanarErrorKind::General(format!($($args)+).into()))
    };
}

#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $block:block) => {
        {
            $block
        }.map_err(|e: $crate::result::PlanarError| e.change_context(format!(concat!("Failed to ",$fmt) $(, $($args),+)?)))
    };
}
pub use context;
