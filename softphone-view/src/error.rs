use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A page, modal or state name outside its closed set, or one the
    /// current screen variant does not offer.
    #[error("Invalid {kind}: `{value}`")]
    InvalidArgument { kind: &'static str, value: String },
}

impl ViewError {
    pub fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            value: value.into(),
        }
    }
}
