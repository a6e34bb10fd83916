use std::collections::HashSet;

use crate::errors::ReportError;

/// First identifier in the report pool.
pub const FIRST_ID: u32 = 3800;
/// Last identifier in the report pool, inclusive.
pub const LAST_ID: u32 = 3850;
/// Number of reports that can be live at once.
pub const POOL_SIZE: usize = (LAST_ID - FIRST_ID + 1) as usize;

/// Return the lowest free identifier in `FIRST_ID..=LAST_ID`.
pub fn allocate<'a, I>(existing: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = existing.into_iter().collect();
    (FIRST_ID..=LAST_ID)
        .map(|n| n.to_string())
        .find(|id| !taken.contains(id.as_str()))
        .ok_or(ReportError::AllocationExhausted)
}

/// Whether `id` is a decimal string inside the pool.
pub fn in_pool(id: &str) -> bool {
    id.parse::<u32>()
        .map(|n| (FIRST_ID..=LAST_ID).contains(&n) && n.to_string() == id)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_from_empty_pool() {
        assert_eq!(allocate(std::iter::empty()).unwrap(), "3800");
    }

    #[test]
    fn test_allocate_fills_lowest_gap() {
        let ids = ["3800", "3801", "3803"];
        assert_eq!(allocate(ids.iter().copied()).unwrap(), "3802");
    }

    #[test]
    fn test_allocate_ignores_foreign_ids() {
        let ids = ["abc", "", "03800"];
        assert_eq!(allocate(ids.iter().copied()).unwrap(), "3800");
    }

    #[test]
    fn test_allocate_exhausted() {
        let ids: Vec<String> = (FIRST_ID..=LAST_ID).map(|n| n.to_string()).collect();
        assert_eq!(ids.len(), POOL_SIZE);
        let result = allocate(ids.iter().map(String::as_str));
        assert!(matches!(result, Err(ReportError::AllocationExhausted)));
    }

    #[test]
    fn test_allocate_last_slot() {
        let ids: Vec<String> = (FIRST_ID..LAST_ID).map(|n| n.to_string()).collect();
        assert_eq!(allocate(ids.iter().map(String::as_str)).unwrap(), "3850");
    }

    #[test]
    fn test_in_pool_bounds() {
        assert!(in_pool("3800"));
        assert!(in_pool("3850"));
        assert!(!in_pool("3799"));
        assert!(!in_pool("3851"));
        assert!(!in_pool("03800"));
        assert!(!in_pool(""));
    }
}
