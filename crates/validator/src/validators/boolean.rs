//! Boolean checks

/// `IsTrue` passes only on `true`.
#[inline]
pub const fn is_true(value: bool) -> bool {
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        assert!(is_true(true));
        assert!(!is_true(false));
    }
}
