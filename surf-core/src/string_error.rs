//! Adapter to the `Result<_, String>` error style used across the
//! workspace.

pub trait ErrorStringExt<T> {
    /// Render the error to a string, prefixed with `context`.
    fn err_to_string(self, context: &str) -> Result<T, String>;
}

impl<T, E: std::fmt::Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, context: &str) -> Result<T, String> {
        self.map_err(|err| format!("{context}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_prepended() {
        let err = "nope"
            .parse::<u16>()
            .err_to_string("parsing rank")
            .unwrap_err();
        assert!(err.starts_with("parsing rank: "));
    }
}
