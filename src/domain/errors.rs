/// Why a generation request produced no code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The service answered with a failure status. Carries the service's
    /// own error text, or a fixed fallback when none was provided.
    Service(String),
    /// The service answered successfully but without a usable code field.
    MissingCode,
    /// No response could be obtained at all.
    Transport,
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Service(message) => {
                write!(f, "{}", message)
            }
            GenerationError::MissingCode => {
                write!(f, "No coupon code received")
            }
            GenerationError::Transport => {
                write!(f, "Failed to generate coupon. Please try again.")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

pub type GenerationOutcome = Result<String, GenerationError>;
