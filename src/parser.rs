use std::any::Any;
use std::env;

use crate::tokenizer::tokenize;
use crate::{FlagMap, HandlerRegistry};

/// A flag parser: the parsed [`FlagMap`] plus the [`HandlerRegistry`] used when binding.
///
/// Values come out either through the chainable typed accessors ([`string`](Flagrant::string),
/// [`int`](Flagrant::int), ...) or by binding into a struct with [`bind`](Flagrant::bind).
///
/// An instance is not synchronised; share it across threads only behind your own lock.
#[derive(Debug, Default)]
pub struct Flagrant {
    pub(crate) flags: FlagMap,
    pub(crate) handlers: HandlerRegistry,
}

impl Flagrant {
    /// An empty parser.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser that has already parsed `args`.
    ///
    /// ```
    /// # use flagrant::Flagrant;
    /// let flagrant = Flagrant::from_args(["--name", "John"]);
    /// assert_eq!(flagrant.flags().get("name").and_then(|v| v.as_str()), Some("John"));
    /// ```
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut flagrant = Self::new();
        flagrant.parse(args);
        flagrant
    }

    /// A parser over the process arguments, program name excluded. Arguments that aren't valid
    /// unicode are skipped.
    pub fn from_env() -> Self {
        Self::from_args(env::args_os().skip(1).filter_map(move |arg| arg.into_string().ok()))
    }

    /// Parse another batch of arguments. Flags already seen are overwritten; others are kept.
    ///
    /// ```
    /// # use flagrant::Flagrant;
    /// let mut flagrant = Flagrant::new();
    /// flagrant.parse(["--a", "1", "--b", "2"]).parse(["--a", "3"]);
    ///
    /// let mut a = 0;
    /// let mut b = 0;
    /// flagrant.int("a", 0, &mut a).int("b", 0, &mut b);
    /// assert_eq!((a, b), (3, 2));
    /// ```
    pub fn parse<I>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        tokenize(args, &mut self.flags);
        self
    }

    /// Register a conversion function for fields declared with `custom = "<name>"`. Replaces
    /// any earlier handler with the same name.
    ///
    /// The handler's output must be the exact type of the field it is used on; otherwise the
    /// field is left alone.
    pub fn register_custom_handler<T, F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        T: Any,
        F: Fn(&str) -> T + 'static,
    {
        self.handlers.register(name, handler);
        self
    }

    /// The flags parsed so far.
    #[inline]
    pub fn flags(&self) -> &FlagMap {
        &self.flags
    }

    /// The registered custom handlers.
    #[inline]
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }
}
