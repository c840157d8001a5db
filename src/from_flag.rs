use crate::FlagError;

#[cfg(feature = "derive")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
pub use flagrant_macro::FlagEnum;

/// A type a flag value can be bound to.
///
/// This is what [`Flagrant::bind_field`](crate::Flagrant::bind_field) and the
/// [`Flags`](crate::Flags) derive use to coerce raw values.
pub trait FromFlag: Sized {
    /// Convert the raw text of a flag.
    ///
    /// # Example
    ///
    /// ```
    /// # use flagrant::prelude::*;
    /// assert_eq!(u8::from_flag("42"), Ok(42));
    /// assert!(u8::from_flag("420").is_err());
    /// assert_eq!(bool::from_flag("False"), Ok(false));
    /// ```
    fn from_flag(raw: &str) -> Result<Self, FlagError>;

    /// Value for a flag given without a value. `None` leaves the target untouched.
    #[inline]
    fn from_present() -> Option<Self> {
        None
    }

    /// Value for a `--name=value` flag whose value has been read as a boolean. `None` means the
    /// type doesn't take switches and the raw text is converted with
    /// [`from_flag`](FromFlag::from_flag) instead.
    #[inline]
    fn from_switch(_switch: bool) -> Option<Self> {
        None
    }
}

/// A fieldless enum that can be matched by variant name.
///
/// Derive it with `#[derive(FlagEnum)]`; the derive implements [`FromFlag`] as well, matching
/// names case-sensitively.
///
/// ```
/// # use flagrant::prelude::*;
/// #[derive(FlagEnum, Debug, PartialEq)]
/// enum Color {
///     Red,
///     #[flag(rename = "lime")]
///     Green,
/// }
///
/// assert_eq!(Color::from_name("Red", false), Some(Color::Red));
/// assert_eq!(Color::from_name("red", false), None);
/// assert_eq!(Color::from_name("LIME", true), Some(Color::Green));
/// assert_eq!(Color::NAMES, &["Red", "lime"]);
/// ```
///
/// Names have to differ even with ASCII case ignored:
///
/// ```compile_fail
/// # use flagrant::prelude::*;
/// #[derive(FlagEnum)]
/// enum Clash {
///     #[flag(rename = "red")]
///     A,
///     Red,
/// }
/// ```
pub trait FlagEnum: Sized {
    /// Variant names in declaration order
    const NAMES: &'static [&'static str];

    /// Find the variant called `name`. `ignore_case` folds ASCII case.
    fn from_name(name: &str, ignore_case: bool) -> Option<Self>;
}
