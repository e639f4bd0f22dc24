/// Compute effective limit with precedence: global flag -> config fallback.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> u32 {
    global.filter(|limit| *limit > 0).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn global_takes_precedence() {
        assert_eq!(effective_limit(Some(10), 50), 10);
    }

    #[test]
    fn fallback_used_when_unset_or_zero() {
        assert_eq!(effective_limit(None, 50), 50);
        assert_eq!(effective_limit(Some(0), 50), 50);
    }
}
