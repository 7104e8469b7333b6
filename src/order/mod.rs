//! Order lookup logic
//!
//! Stateless: every call is a pure function of its inputs.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::types::{OrderOutcome, OrderRequest, DETAILS_PREFIX, PAGE_BOUND};

/// Resolves order identifiers into detail strings.
#[derive(Debug, Clone, Default)]
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }

    /// Look up an order, returning the body text or `None` when nothing is found.
    ///
    /// An absent `page` skips the bound check.
    pub fn get_order(&self, id: &str, page: Option<i32>) -> Option<String> {
        self.lookup(&OrderRequest::new(id, page)).into_body()
    }

    /// Typed form of [`OrderService::get_order`].
    pub fn lookup(&self, request: &OrderRequest) -> OrderOutcome {
        // Bound check runs before the numeric check.
        if request.page.is_some_and(|page| page > PAGE_BOUND) {
            return OrderOutcome::InvalidPage;
        }

        if is_numeric(&request.id) {
            return OrderOutcome::NotFound;
        }

        OrderOutcome::Found(format!("{}{}", DETAILS_PREFIX, request.id))
    }
}

/// True when `s` is non-empty and every character is a decimal digit (Unicode `Nd`).
///
/// Fractions, superscripts and letter numerals (`No`, `Nl`) do not count.
fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_decimal_digit)
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_general_category::{get_general_category, GeneralCategory};

use crate::types::INVALID_PAGE_MESSAGE;

    #[test]
    fn test_alphanumeric_id_returns_details() {
        let service = OrderService::new();
        assert_eq!(
            service.get_order("ABC123", Some(5)).as_deref(),
            Some("Order details for id: ABC123")
        );
    }

    #[test]
    fn test_numeric_id_returns_none() {
        let service = OrderService::new();
        assert_eq!(service.get_order("12345", Some(5)), None);
    }

    #[test]
    fn test_page_over_bound_is_invalid() {
        let service = OrderService::new();
        assert_eq!(
            service.get_order("ABC123", Some(11)).as_deref(),
            Some(INVALID_PAGE_MESSAGE)
        );
        // Bound check wins over the numeric check
        assert_eq!(
            service.get_order("12345", Some(11)).as_deref(),
            Some(INVALID_PAGE_MESSAGE)
        );
    }

    #[test]
    fn test_page_at_bound_is_accepted() {
        let service = OrderService::new();
        assert_eq!(
            service.lookup(&OrderRequest::new("ABC123", Some(10))),
            OrderOutcome::Found("Order details for id: ABC123".to_string())
        );
        assert_eq!(
            service.lookup(&OrderRequest::new("12345", Some(10))),
            OrderOutcome::NotFound
        );
    }

    #[test]
    fn test_missing_page_skips_bound_check() {
        let service = OrderService::new();
        assert_eq!(
            service.lookup(&OrderRequest::new("ABC123", None)),
            OrderOutcome::Found("Order details for id: ABC123".to_string())
        );
        assert_eq!(service.get_order("12345", None), None);
    }

    #[test]
    fn test_negative_page_is_accepted() {
        let service = OrderService::new();
        assert_eq!(
            service.lookup(&OrderRequest::new("X", Some(-3))).kind(),
            "found"
        );
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0"));
        assert!(is_numeric("0123456789"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("-12"));
        assert!(!is_numeric("1.5"));
        assert!(!is_numeric(" 12"));

        // Decimal digits from other scripts
        assert!(is_numeric("٣٤"));
        assert!(is_numeric("１２"));

        // Other numeric categories are not digits
        assert!(!is_numeric("½"));
        assert!(!is_numeric("²"));
        assert!(!is_numeric("Ⅻ"));
    }

    #[test]
    fn test_non_decimal_numerals_return_details() {
        let service = OrderService::new();
        for id in ["½", "Ⅻ", "²"] {
            assert_eq!(
                service.get_order(id, Some(1)),
                Some(format!("Order details for id: {}", id))
            );
        }
        assert_eq!(service.get_order("٣٤", Some(1)), None);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let service = OrderService::new();
        let request = OrderRequest::new("ORD-7", Some(3));
        let first = service.lookup(&request);
        for _ in 0..5 {
            assert_eq!(service.lookup(&request), first);
        }
    }
}
