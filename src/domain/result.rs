//! Result type alias for the order-test viewer
//!
//! This module provides a convenient Result type alias that uses ViewerError
//! as the error type.

use super::errors::ViewerError;

/// Result type alias for viewer operations
///
/// # Examples
///
/// ```
/// use ordertests::domain::result::Result;
/// use ordertests::domain::errors::ViewerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ViewerError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ViewerError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(ViewerError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
