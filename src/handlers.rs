use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use crate::FlagError;

type Convert = Box<dyn Fn(&str) -> Box<dyn Any>>;

struct Handler {
    convert: Convert,
    output: &'static str,
}

/// Named conversion functions that override the default coercion of a field.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
    /// Store `handler` under `name`, replacing any earlier registration.
    pub fn register<T, F>(&mut self, name: impl Into<String>, handler: F)
    where
        T: Any,
        F: Fn(&str) -> T + 'static,
    {
        let handler = Handler {
            convert: Box::new(move |raw: &str| -> Box<dyn Any> { Box::new(handler(raw)) }),
            output: type_name::<T>(),
        };

        self.handlers.insert(name.into(), handler);
    }

    /// Whether a handler is registered under `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler called `name` on `raw`.
    ///
    /// `None` if nothing is registered under `name`; an error if the handler doesn't produce a
    /// `T`.
    pub(crate) fn convert<T: Any>(&self, name: &str, raw: &str) -> Option<Result<T, FlagError>> {
        let handler = self.handlers.get(name)?;

        Some(match (handler.convert)(raw).downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(FlagError::HandlerType {
                handler: name.to_owned(),
                expected: type_name::<T>(),
                found: handler.output,
            }),
        })
    }
}

impl Debug for HandlerRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(move |(name, h)| (name, h.output)))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn clamp(raw: &str) -> i32 {
        raw.parse::<i32>().map_or(0, move |v| v.clamp(0, 100))
    }

    #[test]
    fn converts() {
        let mut registry = HandlerRegistry::default();
        assert!(registry.is_empty());

        registry.register("clamp", clamp);
        assert!(!registry.is_empty());
        assert!(registry.contains("clamp"));
        assert!(!registry.contains("Clamp"));

        assert_eq!(registry.convert::<i32>("clamp", "130"), Some(Ok(100)));
        assert_eq!(registry.convert::<i32>("clamp", "-4"), Some(Ok(0)));
        assert_eq!(registry.convert::<i32>("nope", "1"), None);
    }

    #[test]
    fn type_mismatch() {
        let mut registry = HandlerRegistry::default();
        registry.register("clamp", clamp);

        assert_eq!(
            registry.convert::<u8>("clamp", "1"),
            Some(Err(FlagError::HandlerType {
                handler: "clamp".into(),
                expected: "u8",
                found: "i32",
            }))
        );
    }

    #[test]
    fn overwrites() {
        let mut registry = HandlerRegistry::default();
        registry.register("h", move |_| 1u8);
        registry.register("h", move |_| 2u8);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.convert::<u8>("h", ""), Some(Ok(2)));
    }
}
