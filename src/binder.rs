use std::any::Any;

use tracing::debug;

use crate::{FlagError, FlagValue, Flagrant, FromFlag};

#[cfg(feature = "derive")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
pub use flagrant_macro::Flags;

/// A struct whose fields can be filled from parsed flags.
///
/// Usually derived; see the [crate docs](crate) for the field options. Each option may be given
/// once per field, whether in one `flag` attribute or spread over several:
///
/// ```
/// # use flagrant::prelude::*;
/// #[derive(Flags)]
/// struct Once {
///     #[flag(name = "a")]
///     #[flag(short = "x", custom = "h")]
///     field: String,
/// }
/// ```
///
/// ```compile_fail
/// # use flagrant::prelude::*;
/// #[derive(Flags)]
/// struct Twice {
///     #[flag(name = "a", name = "b")]
///     field: String,
/// }
/// ```
///
/// ```compile_fail
/// # use flagrant::prelude::*;
/// #[derive(Flags)]
/// struct Split {
///     #[flag(short = "x")]
///     #[flag(short = "y")]
///     field: String,
/// }
/// ```
///
/// ```compile_fail
/// # use flagrant::prelude::*;
/// #[derive(Flags)]
/// struct Skipped {
///     #[flag(skip)]
///     #[flag(skip)]
///     field: Vec<u8>,
/// }
/// ```
pub trait Flags {
    /// Bind every flag-backed field. Fields whose flag is missing or doesn't convert keep their
    /// current value.
    fn bind_flags(&mut self, flagrant: &Flagrant);
}

impl<T: Flags + ?Sized> Flags for Box<T> {
    #[inline]
    fn bind_flags(&mut self, flagrant: &Flagrant) {
        T::bind_flags(self, flagrant);
    }
}

/// How a single field maps onto the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSpec<'a> {
    /// Canonical flag name
    pub name: &'a str,

    /// Alias tried when `name` isn't given
    pub short: Option<&'a str>,

    /// Name of the custom handler that converts this field
    pub custom: Option<&'a str>,
}

impl<'a> FlagSpec<'a> {
    #[allow(missing_docs)]
    #[inline]
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            short: None,
            custom: None,
        }
    }

    /// Set the short alias
    #[inline]
    pub const fn with_short(mut self, short: &'a str) -> Self {
        self.short = Some(short);
        self
    }

    /// Set the custom handler name
    #[inline]
    pub const fn with_custom(mut self, custom: &'a str) -> Self {
        self.custom = Some(custom);
        self
    }
}

impl<'a> From<&'a str> for FlagSpec<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Self::new(name)
    }
}

impl Flagrant {
    /// Fill `target` from the parsed flags. Can be called again on further targets, or again on
    /// the same one with the same result.
    ///
    /// ```
    /// # use flagrant::prelude::*;
    /// #[derive(Flags, Default)]
    /// struct Config {
    ///     #[flag(short = "n")]
    ///     name: String,
    ///     age: u32,
    /// }
    ///
    /// let mut config = Config::default();
    /// Flagrant::from_args(["-n", "John", "--age", "twenty"]).bind(&mut config);
    ///
    /// assert_eq!(config.name, "John");
    /// assert_eq!(config.age, 0);
    /// ```
    #[inline]
    pub fn bind<T: Flags + ?Sized>(&self, target: &mut T) -> &Self {
        target.bind_flags(self);
        self
    }

    /// Fill a single field, for targets that don't derive [`Flags`].
    ///
    /// Resolution:
    ///
    /// 1. Look up `spec.name`, then `spec.short`. Neither given: leave the field.
    /// 1. Given without a value: booleans become `true`, anything else is left.
    /// 1. `spec.custom` set: run that handler if it is registered, otherwise leave the field.
    /// 1. `--name=value` on a boolean: `false` for `0`, `n` or `no`, `true` otherwise.
    /// 1. Anything else goes through [`FromFlag::from_flag`]; a failure leaves the field.
    ///
    /// ```
    /// # use flagrant::{Flagrant, FlagSpec};
    /// let (mut volume, mut quiet) = (50u8, true);
    ///
    /// Flagrant::from_args(["-v", "130", "--quiet=no"])
    ///     .register_custom_handler("clamp", |raw: &str| raw.parse().unwrap_or(255u16).min(100) as u8)
    ///     .bind_field(&mut volume, &FlagSpec::new("volume").with_short("v").with_custom("clamp"))
    ///     .bind_field(&mut quiet, &"quiet".into());
    ///
    /// assert_eq!(volume, 100);
    /// assert!(!quiet);
    /// ```
    pub fn bind_field<T>(&self, field: &mut T, spec: &FlagSpec<'_>) -> &Self
    where
        T: FromFlag + Any,
    {
        if let Some(value) = self.resolve_field(spec) {
            *field = value;
        }
        self
    }

    fn resolve_field<T>(&self, spec: &FlagSpec<'_>) -> Option<T>
    where
        T: FromFlag + Any,
    {
        let value = self.flags.resolve(spec.name, spec.short)?;

        let raw = match value {
            FlagValue::Present => return T::from_present(),
            FlagValue::Separate(raw) | FlagValue::Attached { raw, .. } => raw.as_str(),
        };

        if let Some(handler) = spec.custom {
            return match self.handlers.convert::<T>(handler, raw) {
                Some(Ok(value)) => Some(value),
                Some(Err(e)) => log_skip(spec, &e),
                None => {
                    debug!(flag = spec.name, handler, "custom handler not registered");
                    None
                }
            };
        }

        if let FlagValue::Attached { switch, .. } = *value {
            if let Some(value) = T::from_switch(switch) {
                return Some(value);
            }
        }

        match T::from_flag(raw) {
            Ok(value) => Some(value),
            Err(e) => log_skip(spec, &e),
        }
    }
}

fn log_skip<T>(spec: &FlagSpec<'_>, e: &FlagError) -> Option<T> {
    debug!(flag = spec.name, error = %e, "leaving field unchanged");
    None
}

/// Parse `args` with a fresh [`Flagrant`] and bind them into `target`.
///
/// ```
/// # use flagrant::prelude::*;
/// #[derive(Flags)]
/// struct Config {
///     verbose: bool,
///     production: bool,
/// }
///
/// let mut config = Config { verbose: false, production: true };
/// flagrant::run(["--verbose", "--production=0"], &mut config);
///
/// assert!(config.verbose);
/// assert!(!config.production);
/// ```
pub fn run<I, T>(args: I, target: &mut T)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    T: Flags + ?Sized,
{
    Flagrant::from_args(args).bind(target);
}
