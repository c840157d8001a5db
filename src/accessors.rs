//! Fluent typed accessors.
//!
//! Every accessor writes into `out` and hands the parser back so calls can be chained. A missing
//! flag, a flag without a value, or a value that doesn't convert all produce `default`.
//!
//! ```
//! # use flagrant::Flagrant;
//! let (mut name, mut age, mut verbose) = (String::new(), 0, false);
//!
//! Flagrant::from_args(["--name", "John", "--age", "twenty", "--verbose"])
//!     .string("name", "anon", &mut name)
//!     .int("age", 18, &mut age)
//!     .bool("verbose", false, &mut verbose);
//!
//! assert_eq!(name, "John");
//! assert_eq!(age, 18);
//! assert!(verbose);
//! ```

use tracing::debug;

use crate::{FlagEnum, FlagValue, Flagrant, FromFlag};

impl Flagrant {
    fn extract<T>(
        &self,
        name: &str,
        default: T,
        out: &mut T,
        convert: impl FnOnce(&str) -> Option<T>,
    ) -> &Self {
        *out = self
            .flags
            .get(name)
            .and_then(FlagValue::as_str)
            .and_then(convert)
            .unwrap_or(default);
        self
    }

    fn extract_parsed<T: FromFlag>(&self, name: &str, default: T, out: &mut T) -> &Self {
        self.extract(name, default, out, move |raw| match T::from_flag(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(flag = name, error = %e, "falling back to default");
                None
            }
        })
    }

    /// The raw value of the flag.
    pub fn string(&self, name: &str, default: &str, out: &mut String) -> &Self {
        self.extract(name, default.to_owned(), out, move |raw| Some(raw.to_owned()))
    }

    /// The flag as an [`i32`].
    #[inline]
    pub fn int(&self, name: &str, default: i32, out: &mut i32) -> &Self {
        self.extract_parsed(name, default, out)
    }

    /// The flag as an [`i64`].
    #[inline]
    pub fn long(&self, name: &str, default: i64, out: &mut i64) -> &Self {
        self.extract_parsed(name, default, out)
    }

    /// The flag as an [`f32`].
    #[inline]
    pub fn float(&self, name: &str, default: f32, out: &mut f32) -> &Self {
        self.extract_parsed(name, default, out)
    }

    /// The flag as an [`f64`].
    #[inline]
    pub fn double(&self, name: &str, default: f64, out: &mut f64) -> &Self {
        self.extract_parsed(name, default, out)
    }

    /// The flag as a boolean.
    ///
    /// A flag without a value is `true`. A flag with a value is `true` unless the value is
    /// exactly `false`; `0`, `no` and `FALSE` are all `true` here. This is looser than what
    /// [`bind`](Flagrant::bind) does with `--flag=value`.
    ///
    /// ```
    /// # use flagrant::Flagrant;
    /// let flagrant = Flagrant::from_args(["--a=false", "--b=no", "--c"]);
    /// let (mut a, mut b, mut c, mut d) = (true, false, false, true);
    ///
    /// flagrant
    ///     .bool("a", true, &mut a)
    ///     .bool("b", false, &mut b)
    ///     .bool("c", false, &mut c)
    ///     .bool("d", true, &mut d);
    ///
    /// assert_eq!((a, b, c, d), (false, true, true, true));
    /// ```
    pub fn bool(&self, name: &str, default: bool, out: &mut bool) -> &Self {
        *out = match self.flags.get(name) {
            None => default,
            Some(FlagValue::Present) => true,
            Some(value) => value.as_str() != Some("false"),
        };
        self
    }

    /// The flag as a variant of `E`, matched by name ignoring ASCII case.
    pub fn enumeration<E: FlagEnum>(&self, name: &str, default: E, out: &mut E) -> &Self {
        self.extract(name, default, out, move |raw| {
            let found = E::from_name(raw, true);
            if found.is_none() {
                debug!(flag = name, value = raw, expected = ?E::NAMES, "falling back to default");
            }
            found
        })
    }

    /// The flag converted by `convert`. `convert` is only called when the flag has a value.
    pub fn custom<T>(
        &self,
        name: &str,
        default: T,
        convert: impl FnOnce(&str) -> T,
        out: &mut T,
    ) -> &Self {
        self.extract(name, default, out, move |raw| Some(convert(raw)))
    }
}

#[cfg(test)]
mod test {
    use crate::{FlagEnum, Flagrant};

    #[derive(Debug, PartialEq, Clone, Copy)]
    enum TestEnum {
        One,
        Two,
        Three,
    }

    impl FlagEnum for TestEnum {
        const NAMES: &'static [&'static str] = &["One", "Two", "Three"];

        fn from_name(name: &str, ignore_case: bool) -> Option<Self> {
            Self::NAMES
                .iter()
                .position(move |n| {
                    if ignore_case {
                        n.eq_ignore_ascii_case(name)
                    } else {
                        *n == name
                    }
                })
                .map(move |idx| [Self::One, Self::Two, Self::Three][idx])
        }
    }

    fn flagrant(args: &[&str]) -> Flagrant {
        Flagrant::from_args(args)
    }

    mod strings {
        use super::flagrant;

        fn get(args: &[&str]) -> String {
            let mut out = String::new();
            flagrant(args).string("arg", "default", &mut out);
            out
        }

        #[test]
        fn parses_value() {
            assert_eq!(get(&["--arg", "value"]), "value");
        }

        #[test]
        fn keeps_attached_value_verbatim() {
            assert_eq!(get(&["--arg=no"]), "no");
        }

        #[test]
        fn defaults_on_no_argument() {
            assert_eq!(get(&[]), "default");
        }

        #[test]
        fn defaults_if_no_value() {
            assert_eq!(get(&["--arg"]), "default");
        }

        #[test]
        fn defaults_if_next_argument_is_flag() {
            assert_eq!(get(&["--arg", "--arg2", "value"]), "default");
        }
    }

    mod numbers {
        use super::flagrant;

        #[test]
        fn int() {
            let mut out = 0;
            flagrant(&["--arg", "42"]).int("arg", 21, &mut out);
            assert_eq!(out, 42);

            for args in [&[][..], &["--arg", "not an int"], &["--arg", "--arg2", "42"], &["--arg"]] {
                flagrant(args).int("arg", 21, &mut out);
                assert_eq!(out, 21, "{args:?}");
            }
        }

        #[test]
        fn long() {
            let mut out = 0;
            flagrant(&["--arg", "8589934592"]).long("arg", 21, &mut out);
            assert_eq!(out, 8_589_934_592);

            flagrant(&["--arg", "not a long"]).long("arg", 21, &mut out);
            assert_eq!(out, 21);
        }

        #[test]
        fn float() {
            let mut out = 0.0;
            flagrant(&["--arg", "42.5"]).float("arg", 21.5, &mut out);
            assert_eq!(out, 42.5);

            for args in [&[][..], &["--arg", "not a float"], &["--arg", "--arg2", "42.5"], &["--arg"]] {
                flagrant(args).float("arg", 21.5, &mut out);
                assert_eq!(out, 21.5, "{args:?}");
            }
        }

        #[test]
        fn double() {
            let mut out = 0.0;
            flagrant(&["--arg=42.5"]).double("arg", 21.5, &mut out);
            assert_eq!(out, 42.5);

            flagrant(&["--arg", "not a float"]).double("arg", 21.5, &mut out);
            assert_eq!(out, 21.5);
        }
    }

    mod booleans {
        use super::flagrant;

        fn get(args: &[&str], default: bool) -> bool {
            let mut out = !default;
            flagrant(args).bool("arg", default, &mut out);
            out
        }

        #[test]
        fn present_is_true() {
            assert!(get(&["--arg"], false));
            assert!(get(&["--arg"], true));
            assert!(get(&["--arg="], false));
        }

        #[test]
        fn defaults_on_no_argument() {
            assert!(get(&[], true));
            assert!(!get(&[], false));
        }

        #[test]
        fn only_lowercase_false_is_false() {
            assert!(!get(&["--arg=false"], true));
            assert!(!get(&["--arg", "false"], true));

            for value in ["FALSE", "helloworld", "0", "n", "no"] {
                let arg = format!("--arg={value}");
                assert!(get(&[arg.as_str()], true), "{value}");
            }
        }
    }

    mod enums {
        use super::{flagrant, TestEnum};

        fn get(args: &[&str], default: TestEnum) -> TestEnum {
            let mut out = default;
            flagrant(args).enumeration("arg", default, &mut out);
            out
        }

        #[test]
        fn parses_value() {
            assert_eq!(get(&["--arg", "One"], TestEnum::Two), TestEnum::One);
        }

        #[test]
        fn ignores_case() {
            assert_eq!(get(&["--arg", "tWo"], TestEnum::One), TestEnum::Two);
        }

        #[test]
        fn defaults() {
            assert_eq!(get(&[], TestEnum::Two), TestEnum::Two);
            assert_eq!(get(&["--arg", "four"], TestEnum::Three), TestEnum::Three);
            assert_eq!(get(&["--arg"], TestEnum::Three), TestEnum::Three);
        }
    }

    #[test]
    fn custom() {
        let is_dog = |s: &str| if s == "golden retriever" { "dog" } else { "not dog" };

        let mut out = "";
        flagrant(&["--arg", "golden retriever"]).custom("arg", "not dog", is_dog, &mut out);
        assert_eq!(out, "dog");

        out = "";
        flagrant(&["--arg"]).custom("arg", "unset", is_dog, &mut out);
        assert_eq!(out, "unset");
    }

    #[test]
    fn chained() {
        let args = [
            "--string", "hello", "--int", "42", "--long", "100", "--float", "12.12", "--double",
            "77.77", "--bool", "--enum", "three",
        ];

        let mut s = String::new();
        let (mut i, mut l, mut f, mut d, mut b, mut e) = (0, 0, 0.0, 0.0, false, TestEnum::One);

        Flagrant::from_args(args)
            .string("string", "goodbye", &mut s)
            .int("int", 100, &mut i)
            .long("long", 1, &mut l)
            .float("float", 1.5, &mut f)
            .double("double", 2.5, &mut d)
            .bool("bool", false, &mut b)
            .enumeration("enum", TestEnum::One, &mut e);

        assert_eq!(s, "hello");
        assert_eq!(i, 42);
        assert_eq!(l, 100);
        assert_eq!(f, 12.12);
        assert_eq!(d, 77.77);
        assert!(b);
        assert_eq!(e, TestEnum::Three);
    }
}
