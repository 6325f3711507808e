//! Facade Errors
//!
//! Caller mistakes: bad options, input that is not a numeral of the claimed
//! base, or asking for something a base does not have. Data-dependent results
//! (truncation, NTL, NaN) are never errors; see `ConversionOutcome`.

use entities_numeral_base::{BaseId, NumeralError};
use thiserror::Error;
use usecases_base_conversion::RoutingError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] NumeralError),
    #[error("'{value}' is not a valid {base} value")]
    InvalidNumeral { value: String, base: BaseId },
    #[error("{0} has no zero character")]
    NoZeroCharacter(BaseId),
    #[error(transparent)]
    Routing(#[from] RoutingError),
}
