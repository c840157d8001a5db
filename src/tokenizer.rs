//! Raw arguments to [`FlagMap`] entries.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::{FlagMap, FlagValue};

/// One or two dashes, a name free of `-` and `=`, then optionally `=` and a value.
static FLAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^-{1,2}([^-=]+)(?:=(.*))?$").expect("flag pattern is valid")
});

/// Whether the token is shaped like a flag.
pub fn is_flag(token: &str) -> bool {
    FLAG_RE.is_match(token)
}

/// Split a flag token into its name and its `=` value, if any.
fn split_flag(token: &str) -> Option<(&str, Option<&str>)> {
    let captures = FLAG_RE.captures(token)?;
    let name = captures.get(1)?.as_str();

    Some((name, captures.get(2).map(move |m| m.as_str())))
}

/// Scan `args` and write every flag into `map`.
///
/// `--name=value` takes everything after the first `=`. `--name` takes the next token as its
/// value unless that token is itself a flag. Tokens that are neither flags nor consumed values
/// are dropped.
pub(crate) fn tokenize<I>(args: I, map: &mut FlagMap)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut args = args.into_iter().peekable();

    while let Some(token) = args.next() {
        let token = token.as_ref();
        let (name, attached) = match split_flag(token) {
            Some(parts) => parts,
            None => {
                trace!(token, "ignoring non-flag argument");
                continue;
            }
        };

        let value = if let Some(raw) = attached {
            FlagValue::attached(raw)
        } else if let Some(next) = args.next_if(|next| !is_flag(next.as_ref())) {
            FlagValue::Separate(next.as_ref().to_owned())
        } else {
            FlagValue::Present
        };

        trace!(flag = name, ?value, "parsed flag");
        map.insert(name.to_owned(), value);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> FlagMap {
        let mut map = FlagMap::default();
        tokenize(args, &mut map);
        map
    }

    fn separate(v: &str) -> FlagValue {
        FlagValue::Separate(v.into())
    }

    #[test]
    fn flag_shapes() {
        for ok in ["-a", "--a", "--name", "-n=1", "--name=", "--name=a=b", "-5"] {
            assert!(is_flag(ok), "{ok}");
        }
        for not in ["a", "-", "--", "---name", "--a-b", "--=x", "-=x", "--a-b=c", ""] {
            assert!(!is_flag(not), "{not}");
        }
    }

    #[test]
    fn separate_value() {
        let map = parse(&["--name", "John", "-age", "25"]);
        assert_eq!(map.get("name"), Some(&separate("John")));
        assert_eq!(map.get("age"), Some(&separate("25")));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn attached_value_splits_at_first_eq() {
        let map = parse(&["--expr=a=b"]);
        assert_eq!(map.get("expr").and_then(FlagValue::as_str), Some("a=b"));
    }

    #[test]
    fn attached_switch() {
        let map = parse(&["--a=0", "--b=n", "--c=no", "--d=false", "--e=NO", "--f=1"]);
        let switch = |name: &str| match map.get(name) {
            Some(FlagValue::Attached { switch, .. }) => *switch,
            other => panic!("{name}: {other:?}"),
        };

        assert!(!switch("a"));
        assert!(!switch("b"));
        assert!(!switch("c"));
        assert!(switch("d"));
        assert!(switch("e"));
        assert!(switch("f"));
    }

    #[test]
    fn empty_attached_is_present() {
        let map = parse(&["--name="]);
        assert_eq!(map.get("name"), Some(&FlagValue::Present));
    }

    #[test]
    fn followed_by_flag_is_present() {
        let map = parse(&["--arg", "--arg2", "value"]);
        assert_eq!(map.get("arg"), Some(&FlagValue::Present));
        assert_eq!(map.get("arg2"), Some(&separate("value")));
    }

    #[test]
    fn trailing_flag_is_present() {
        let map = parse(&["--verbose"]);
        assert_eq!(map.get("verbose"), Some(&FlagValue::Present));
    }

    #[test]
    fn stray_tokens_ignored() {
        let map = parse(&["stray", "--a", "1", "also-stray", "--", "-"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&separate("1")));
    }

    #[test]
    fn malformed_token_is_a_value() {
        let map = parse(&["--a", "---b"]);
        assert_eq!(map.get("a"), Some(&separate("---b")));
        assert!(!map.contains("b"));
    }

    #[test]
    fn last_occurrence_wins() {
        let map = parse(&["--a", "1", "--a=2", "--a"]);
        assert_eq!(map.get("a"), Some(&FlagValue::Present));
        assert_eq!(map.len(), 1);
    }
}
