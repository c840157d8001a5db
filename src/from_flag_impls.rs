use std::path::PathBuf;

use crate::{FlagError, FromFlag};

// ========== MACROS ==========

macro_rules! impl_from_str {
    ($($ty: ty) +) => {
        $(
            impl FromFlag for $ty {
                #[inline]
                fn from_flag(raw: &str) -> Result<Self, FlagError> {
                    raw.parse().map_err(move |e| FlagError::invalid::<$ty>(raw, e))
                }
            }
        )+
    };
}

// ========== MACRO_CALLS ==========

impl_from_str!(i8 u8 i16 u16 i32 u32 i64 u64 i128 u128 isize usize f32 f64 char);

// ========== CUSTOM_IMPLS ==========

impl FromFlag for String {
    #[inline]
    fn from_flag(raw: &str) -> Result<Self, FlagError> {
        Ok(raw.to_owned())
    }
}

impl FromFlag for PathBuf {
    #[inline]
    fn from_flag(raw: &str) -> Result<Self, FlagError> {
        Ok(raw.into())
    }
}

impl FromFlag for bool {
    fn from_flag(raw: &str) -> Result<Self, FlagError> {
        if raw.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(FlagError::invalid::<bool>(raw, "expected `true` or `false`"))
        }
    }

    #[inline]
    fn from_present() -> Option<Self> {
        Some(true)
    }

    #[inline]
    fn from_switch(switch: bool) -> Option<Self> {
        Some(switch)
    }
}

impl<T: FromFlag> FromFlag for Option<T> {
    #[inline]
    fn from_flag(raw: &str) -> Result<Self, FlagError> {
        T::from_flag(raw).map(Some)
    }

    #[inline]
    fn from_present() -> Option<Self> {
        T::from_present().map(Some)
    }

    #[inline]
    fn from_switch(switch: bool) -> Option<Self> {
        T::from_switch(switch).map(Some)
    }
}
