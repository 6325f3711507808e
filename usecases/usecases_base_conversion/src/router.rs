//! Numeral Router
//!
//! Picks the conversion path for a pair of numeral specs:
//!
//! | from / to                      | path                              |
//! |--------------------------------|-----------------------------------|
//! | identical specs                | standardized input                |
//! | same radix, other alphabet     | [`remap`](crate::remap)           |
//! | both power of two              | grouping via binary               |
//! | either side decimal            | decimal hub, one step             |
//! | anything else                  | decimal hub, two steps            |
//!
//! Text is not a numeral and is rejected here; the words engine handles it.

use entities_numeral_base::{BaseId, BaseSpec, ConversionOutcome, NumeralError};
use thiserror::Error;
use tracing::debug;

use crate::decimal_hub::{from_decimal, to_decimal};
use crate::power_of_two::{from_binary, to_binary};
use crate::remap::remap;

/// Errors raised by the router
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("no numeral route from {from} to {to}")]
    UnsupportedPair { from: BaseId, to: BaseId },
    #[error("invalid hub specification: {0}")]
    Hub(#[from] NumeralError),
}

/// Conversion path chosen for a pair of specs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Identity,
    Remap,
    ViaBinary,
    ToDecimal,
    FromDecimal,
    ViaDecimal,
}

/// Choose the path between two numeral specs
pub fn plan(from: &BaseSpec, to: &BaseSpec) -> Result<Route, RoutingError> {
    let (from_base, to_base) = (from.base(), to.base());
    if from_base == BaseId::Text || to_base == BaseId::Text {
        return Err(RoutingError::UnsupportedPair { from: from_base, to: to_base });
    }

    let route = if from == to {
        Route::Identity
    } else if from.radix() == to.radix() {
        Route::Remap
    } else if from_base.is_power_of_two() && to_base.is_power_of_two() {
        Route::ViaBinary
    } else if to_base == BaseId::Decimal {
        Route::ToDecimal
    } else if from_base == BaseId::Decimal {
        Route::FromDecimal
    } else {
        Route::ViaDecimal
    };
    Ok(route)
}

/// Convert a standardized, validated numeral between two numeral specs
///
/// # Arguments
/// * `number` - Numeral in canonical form for `from`
/// * `from` - Source spec
/// * `to` - Target spec
///
/// # Returns
/// * `Ok(ConversionOutcome)` - Converted value, possibly truncated
/// * `Err(RoutingError)` - One of the specs is text
pub fn route(number: &str, from: &BaseSpec, to: &BaseSpec) -> Result<ConversionOutcome, RoutingError> {
    let route = plan(from, to)?;
    debug!(from = %from.base(), to = %to.base(), ?route, "routing numeral");

    let outcome = match route {
        Route::Identity => ConversionOutcome::Value(to.standardize(number)),
        Route::Remap => remap(number, from, to),
        Route::ViaBinary => {
            let binary = BaseSpec::default_for(BaseId::Binary)?;
            if from.base() == BaseId::Binary {
                from_binary(number, &binary, to)
            } else if to.base() == BaseId::Binary {
                to_binary(number, from, &binary)
            } else {
                to_binary(number, from, &binary).and_then(|bits| from_binary(&bits, &binary, to))
            }
        }
        Route::ToDecimal => to_decimal(number, from, to),
        Route::FromDecimal => from_decimal(number, from, to),
        Route::ViaDecimal => {
            let decimal = BaseSpec::default_for(BaseId::Decimal)?;
            to_decimal(number, from, &decimal).and_then(|hub| from_decimal(&hub, &decimal, to))
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numeral_base::{BaseOptions, Segment};

    fn spec(base: BaseId) -> BaseSpec {
        BaseSpec::default_for(base).unwrap()
    }

    #[test]
    fn test_plan() {
        let cases = [
            (BaseId::Decimal, BaseId::Decimal, Route::Identity),
            (BaseId::Octal, BaseId::Hexadecimal, Route::ViaBinary),
            (BaseId::Binary, BaseId::Octal, Route::ViaBinary),
            (BaseId::Hexadecimal, BaseId::Decimal, Route::ToDecimal),
            (BaseId::Decimal, BaseId::Base64, Route::FromDecimal),
            (BaseId::Base62, BaseId::Binary, Route::ViaDecimal),
        ];
        for (from, to, expected) in cases {
            assert_eq!(plan(&spec(from), &spec(to)), Ok(expected), "{} -> {}", from, to);
        }
    }

    #[test]
    fn test_reordered_alphabet_is_remapped() {
        let options = BaseOptions::default().with_order(vec![
            Segment::Uppercase,
            Segment::Numbers,
            Segment::Lowercase,
        ]);
        let reordered = BaseSpec::new(BaseId::Base62, &options).unwrap();
        assert_eq!(plan(&spec(BaseId::Base62), &reordered), Ok(Route::Remap));
    }

    #[test]
    fn test_text_is_rejected() {
        let text = spec(BaseId::Text);
        assert_eq!(
            route("one", &text, &spec(BaseId::Decimal)),
            Err(RoutingError::UnsupportedPair { from: BaseId::Text, to: BaseId::Decimal })
        );
    }

    #[test]
    fn test_octal_to_hexadecimal() {
        let outcome = route("-777.4", &spec(BaseId::Octal), &spec(BaseId::Hexadecimal)).unwrap();
        assert_eq!(outcome, ConversionOutcome::Value("-1FF.8".to_string()));
    }

    #[test]
    fn test_via_decimal_keeps_truncation() {
        let outcome = route("0.1", &spec(BaseId::Base62), &spec(BaseId::Binary)).unwrap();
        assert!(outcome.is_truncated());
    }
}
