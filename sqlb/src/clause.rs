//! # Clause
//!
//! Rendered text of a single sql clause together with the bind values of
//! its placeholders, kept in the same left-to-right order.

use crate::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum Clause {
    #[default]
    Unset,
    Set { text: String, params: Vec<Value> },
}

impl Clause {
    /// Overwrite text and params
    pub(crate) fn replace(&mut self, text: String, params: Vec<Value>) {
        *self = Self::Set { text, params };
    }

    /// Append `expr` to the clause.
    ///
    /// An unset clause is seeded with `prefix`, a set one is extended with `separator`.
    pub(crate) fn push<I>(&mut self, prefix: &str, separator: &str, expr: &str, values: I)
    where
        I: IntoIterator<Item = Value>,
    {
        match self {
            Self::Unset => {
                *self = Self::Set {
                    text: format!("{}{}", prefix, expr),
                    params: values.into_iter().collect(),
                };
            }
            Self::Set { text, params } => {
                text.push_str(separator);
                text.push_str(expr);
                params.extend(values);
            }
        }
    }

    pub(crate) fn is_set(&self) -> bool {
        matches!(self, Self::Set { .. })
    }

    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Set { text, .. } => Some(text),
        }
    }

    pub(crate) fn params(&self) -> &[Value] {
        match self {
            Self::Unset => &[],
            Self::Set { params, .. } => params,
        }
    }
}

/// Concatenate the params of `clauses` in order
pub(crate) fn collect_params(clauses: &[&Clause]) -> Vec<Value> {
    clauses
        .iter()
        .flat_map(|clause| clause.params().iter().cloned())
        .collect()
}

/// `?,?,?` with `n` placeholders
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_push() {
        let mut clause = Clause::default();
        assert!(!clause.is_set());
        assert_eq!(clause.text(), None);
        assert!(clause.params().is_empty());

        clause.push("WHERE ", " AND ", "a = ?", [Value::from(1)]);
        assert_eq!(clause.text(), Some("WHERE a = ?"));

        clause.push("WHERE ", " OR ", "b IN (?,?)", [Value::from(2), Value::from(3)]);
        assert_eq!(clause.text(), Some("WHERE a = ? OR b IN (?,?)"));
        assert_eq!(
            clause.params(),
            &[Value::from(1), Value::from(2), Value::from(3)]
        );
    }

    #[test]
    fn test_replace() {
        let mut clause = Clause::default();
        clause.push("", " ", "x", [Value::from(1)]);
        clause.replace("y".into(), vec![]);

        assert_eq!(clause.text(), Some("y"));
        assert!(clause.params().is_empty());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(0), "");
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?,?,?");
    }
}
