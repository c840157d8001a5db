use thiserror::Error;

/// Why a raw flag value could not be turned into a typed value.
///
/// The accessor and binder paths never hand this to the caller: they log it and fall back to the
/// default (or leave the field alone). It is surfaced by [`FromFlag::from_flag`](crate::FromFlag)
/// for callers doing their own conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    /// The text doesn't parse as the target type.
    #[error("invalid value {value:?} for {target}: {reason}")]
    Invalid {
        /// Raw flag value
        value: String,
        /// Name of the target type
        target: &'static str,
        /// Message from the underlying parser
        reason: String,
    },

    /// The text doesn't name a variant of the target enum.
    #[error("{value:?} is not a variant of {target}")]
    UnknownVariant {
        /// Raw flag value
        value: String,
        /// Name of the target enum
        target: &'static str,
    },

    /// A custom handler produced a value of the wrong type for the field it was bound to.
    #[error("custom handler {handler:?} returns {found}, but the field is {expected}")]
    HandlerType {
        /// Name the handler was registered under
        handler: String,
        /// Field type
        expected: &'static str,
        /// Handler output type
        found: &'static str,
    },
}

impl FlagError {
    pub(crate) fn invalid<T>(value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            value: value.to_owned(),
            target: std::any::type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}
