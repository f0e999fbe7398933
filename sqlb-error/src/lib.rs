pub type Result<T> = std::result::Result<T, Error>;

/// Precondition failures reported by the statement renderers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No table was given before rendering
    #[error("table empty")]
    TableEmpty,
    /// Insert renderer called without a field list
    #[error("insert statement empty")]
    InsertStatementEmpty,
    /// Update renderer called without an assignment list
    #[error("update statement empty")]
    UpdateStatementEmpty,
}

#[cfg(test)]
mod test {
    use crate::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::TableEmpty.to_string(), "table empty");
        assert_eq!(
            Error::InsertStatementEmpty.to_string(),
            "insert statement empty"
        );
        assert_eq!(
            Error::UpdateStatementEmpty.to_string(),
            "update statement empty"
        );
    }
}
