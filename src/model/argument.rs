//! Command arguments: literal values, symbol references, and nested groups.

use serde_json::Number;

/// A scalar argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(Number),
    Boolean(bool),
}

impl Literal {
    /// SeqJSON `type` discriminant for this literal.
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::String(_) => "string",
            Literal::Number(_) => "number",
            Literal::Boolean(_) => "boolean",
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Number(n.into())
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        Literal::Number(n.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Literal(Literal),
    /// Reference to a declared local or parameter, by name.
    Symbol(String),
    /// A repeated/grouped argument block.
    Nested(Arguments),
}

impl Argument {
    pub fn symbol(name: impl Into<String>) -> Self {
        Argument::Symbol(name.into())
    }

    /// SeqJSON `type` discriminant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Argument::Literal(lit) => lit.type_name(),
            Argument::Symbol(_) => "symbol",
            Argument::Nested(_) => "repeat",
        }
    }
}

impl From<Literal> for Argument {
    fn from(lit: Literal) -> Self {
        Argument::Literal(lit)
    }
}

macro_rules! literal_argument {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument::Literal(value.into())
                }
            }
        )*
    };
}

literal_argument!(&str, String, bool, i64, u64);

/// An argument collection, used either positionally or by name.
///
/// Named arguments keep their insertion order for rendering, but two named
/// collections with the same entries compare equal regardless of order.
#[derive(Debug, Clone)]
pub enum Arguments {
    Positional(Vec<Argument>),
    Named(Vec<(String, Argument)>),
}

impl Default for Arguments {
    fn default() -> Self {
        Arguments::Positional(Vec::new())
    }
}

impl Arguments {
    pub fn positional<I, A>(items: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        Arguments::Positional(items.into_iter().map(Into::into).collect())
    }

    pub fn named<I, K, A>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: Into<Argument>,
    {
        Arguments::Named(
            items
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Arguments::Positional(items) => items.len(),
            Arguments::Named(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Arguments::Named(_))
    }
}

impl PartialEq for Arguments {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // No arguments is no arguments, whichever form was used.
            _ if self.is_empty() && other.is_empty() => true,
            (Arguments::Positional(a), Arguments::Positional(b)) => a == b,
            (Arguments::Named(a), Arguments::Named(b)) => by_name(a) == by_name(b),
            _ => false,
        }
    }
}

/// Entries sorted by name; the sort is stable, so repeated names keep their order.
fn by_name(items: &[(String, Argument)]) -> Vec<&(String, Argument)> {
    let mut sorted: Vec<_> = items.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_forms_are_equivalent() {
        assert_eq!(Arguments::Positional(vec![]), Arguments::Named(vec![]));
        assert!(Arguments::default().is_empty());
    }

    #[test]
    fn named_equality_ignores_order() {
        let a = Arguments::named([("a", Argument::from(1i64)), ("b", Argument::from("x"))]);
        let b = Arguments::named([("b", Argument::from("x")), ("a", Argument::from(1i64))]);
        assert_eq!(a, b);
        assert_ne!(a, Arguments::named([("a", Argument::from(1i64))]));
    }

    #[test]
    fn positional_equality_respects_order() {
        let a = Arguments::positional([1i64, 2]);
        let b = Arguments::positional([2i64, 1]);
        assert_ne!(a, b);
    }

    #[test]
    fn named_equality_is_symmetric_with_repeated_names() {
        let repeated = Arguments::named([("a", Argument::from(1i64)), ("a", Argument::from(1i64))]);
        let distinct = Arguments::named([("a", Argument::from(1i64)), ("b", Argument::from(2i64))]);
        assert_ne!(repeated, distinct);
        assert_ne!(distinct, repeated);
        assert_eq!(repeated, repeated.clone());
    }
}
