//! Two-variant result type for expected outcomes.
//!
//! `Left` carries a failure the caller is expected to handle (unknown email,
//! duplicate account, ...) and `Right` carries the success value. Unexpected
//! failures do not belong here; they travel as `Err` in the surrounding
//! `Result`.

/// Either a `Left` failure or a `Right` success, never both.
#[must_use = "an Either may hold a failure that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// Wraps a failure.
pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Wraps a success.
pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    pub fn left_value(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn right_value(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Transforms the success value, leaving a failure untouched.
    pub fn map_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_is_exclusively_left() {
        let value: Either<&str, u32> = left("boom");
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.left_value(), Some("boom"));
    }

    #[test]
    fn test_right_is_exclusively_right() {
        let value: Either<&str, u32> = right(7);
        assert!(value.is_right());
        assert!(!value.is_left());
        assert_eq!(value.right_value(), Some(7));
    }

    #[test]
    fn test_accessors_return_none_for_other_variant() {
        let failure: Either<&str, u32> = left("boom");
        assert_eq!(failure.right_value(), None);

        let success: Either<&str, u32> = right(7);
        assert_eq!(success.left_value(), None);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(right::<&str, u32>(1).into_result(), Ok(1));
        assert_eq!(left::<&str, u32>("no").into_result(), Err("no"));
    }

    #[test]
    fn test_map_right_only_touches_success() {
        let doubled = right::<&str, u32>(21).map_right(|n| n * 2);
        assert_eq!(doubled, Either::Right(42));

        let untouched = left::<&str, u32>("no").map_right(|n| n * 2);
        assert_eq!(untouched, Either::Left("no"));
    }

    #[test]
    fn test_as_ref_borrows_payload() {
        let owned: Either<String, String> = right("ok".to_string());
        assert_eq!(owned.as_ref().right_value().map(String::as_str), Some("ok"));
        assert!(owned.is_right());
    }
}
