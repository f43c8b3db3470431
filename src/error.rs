use thiserror::Error;

/// Error type shared by all fallible operations of the crate.
///
/// Outputs of a failed operation must not be trusted; every function returning
/// [SplineError] performs its precondition checks before mutating anything.
#[derive(Error, Debug)]
pub enum SplineError {
    /// A precondition on the arguments was violated: mismatched array shapes,
    /// a non-monotonic abscissa, a query point outside the table domain, a
    /// column index out of range or an empty integration range given backwards.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Allocation of owned table storage failed.
    #[error("failed to allocate storage for {0} values")]
    OutOfMemory(usize),

    /// The tridiagonal solver reported a singular or failed factorization.
    #[error("error while solving set of equations: {0}")]
    Algorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let error = SplineError::InvalidArgument("x is out of range".to_string());
        assert_eq!("invalid argument: x is out of range", error.to_string());

        let error = SplineError::OutOfMemory(128);
        assert_eq!("failed to allocate storage for 128 values", error.to_string());

        let error = SplineError::Algorithm("singular matrix".to_string());
        assert_eq!(
            "error while solving set of equations: singular matrix",
            error.to_string()
        );
    }
}
