//! Coupon description derivation for the terminal coupon generator.
//!
//! The remote service only returns a code; the supporting description
//! shown next to it is derived locally from the retailer name. Keeping
//! the derivation here, away from any transport, means it can be tested
//! as the pure function it is.

use super::models::Retailer;

/// Dedicated description for the one retailer with its own copy.
const TARGET_DESCRIPTION: &str =
    "Up to 20% off on select items, plus free shipping on orders over $35.";

/// Derives the description text shown under a generated code.
///
/// A pure function of the retailer name: `"Target"` gets dedicated copy,
/// every other retailer gets a generic template mentioning its name.
///
/// # Arguments
///
/// * `retailer` - The retailer the code was generated for
///
/// # Examples
///
/// ```
/// use couponhunt::domain::{coupon_description, Retailer};
///
/// let amazon = Retailer::parse("Amazon").unwrap();
/// assert_eq!(
///     coupon_description(&amazon),
///     "Special discount for Amazon purchases."
/// );
/// ```
pub fn coupon_description(retailer: &Retailer) -> String {
    if retailer.name() == "Target" {
        TARGET_DESCRIPTION.to_string()
    } else {
        format!("Special discount for {} purchases.", retailer.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_gets_dedicated_copy() {
        let target = Retailer::parse("Target").unwrap();
        assert_eq!(
            coupon_description(&target),
            "Up to 20% off on select items, plus free shipping on orders over $35."
        );
    }

    #[test]
    fn test_other_retailers_get_generic_template() {
        let walmart = Retailer::parse("Walmart").unwrap();
        let description = coupon_description(&walmart);
        assert!(!description.is_empty());
        assert!(description.contains("Walmart"));
    }

    #[test]
    fn test_template_applies_to_free_text_retailers() {
        let custom = Retailer::parse("Corner Bakery").unwrap();
        assert_eq!(
            coupon_description(&custom),
            "Special discount for Corner Bakery purchases."
        );
    }
}
