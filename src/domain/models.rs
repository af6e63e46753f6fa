use std::fmt;

/// Retailers offered in the catalog picker.
pub const RETAILER_CATALOG: [&str; 3] = ["Amazon", "Walmart", "Target"];

/// A retailer name a coupon can be requested for.
///
/// Always non-empty; equality is exact string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retailer(String);

impl Retailer {
    /// Parses user input into a retailer name.
    ///
    /// Surrounding whitespace is trimmed; input that trims to nothing is
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use couponhunt::domain::Retailer;
    ///
    /// assert_eq!(Retailer::parse("  Amazon ").unwrap().name(), "Amazon");
    /// assert!(Retailer::parse("   ").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Retailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One outbound ask for a coupon code.
///
/// Exists only for the duration of a single call and is never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub retailer: Retailer,
}

impl GenerationRequest {
    pub fn new(retailer: Retailer) -> Self {
        Self { retailer }
    }
}

/// A generated coupon code with its locally derived description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub code: String,
    pub description: String,
}

/// Where the generation workflow currently is.
///
/// Exactly one variant is active at any time; a result or error message
/// only exists inside the variant it belongs to, so stale combinations
/// (a spinner next to an old code, an error next to a fresh result)
/// cannot be represented at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    /// No request has been made yet.
    Idle,
    /// A request for this retailer is in flight.
    Pending(Retailer),
    /// The last request produced a code.
    Succeeded(Retailer, GenerationResult),
    /// The last request failed with a displayable message.
    Failed(Retailer, String),
}

impl WorkflowState {
    pub fn is_pending(&self) -> bool {
        matches!(self, WorkflowState::Pending(_))
    }

    /// The retailer attached to the current state, if any.
    pub fn retailer(&self) -> Option<&Retailer> {
        match self {
            WorkflowState::Idle => None,
            WorkflowState::Pending(retailer)
            | WorkflowState::Succeeded(retailer, _)
            | WorkflowState::Failed(retailer, _) => Some(retailer),
        }
    }

    /// The generated result, only present in `Succeeded`.
    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            WorkflowState::Succeeded(_, result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let retailer = Retailer::parse("  Best Buy \t").unwrap();
        assert_eq!(retailer.name(), "Best Buy");
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert!(Retailer::parse("").is_none());
        assert!(Retailer::parse(" \t  ").is_none());
    }

    #[test]
    fn test_equality_is_exact_match() {
        assert_eq!(Retailer::parse("Target"), Retailer::parse(" Target "));
        assert_ne!(Retailer::parse("Target"), Retailer::parse("target"));
    }

    #[test]
    fn test_workflow_state_accessors() {
        let retailer = Retailer::parse("Amazon").unwrap();

        assert!(WorkflowState::Idle.retailer().is_none());
        assert!(WorkflowState::Idle.result().is_none());

        let pending = WorkflowState::Pending(retailer.clone());
        assert!(pending.is_pending());
        assert_eq!(pending.retailer(), Some(&retailer));
        assert!(pending.result().is_none());

        let result = GenerationResult {
            code: "SAVE20".to_string(),
            description: "desc".to_string(),
        };
        let succeeded = WorkflowState::Succeeded(retailer.clone(), result.clone());
        assert!(!succeeded.is_pending());
        assert_eq!(succeeded.result(), Some(&result));

        let failed = WorkflowState::Failed(retailer.clone(), "boom".to_string());
        assert_eq!(failed.retailer(), Some(&retailer));
        assert!(failed.result().is_none());
    }
}
