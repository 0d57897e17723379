use std::fmt;

use rust_decimal::Decimal;

/// Console rendering of a money amount or rate.
///
/// Trailing zeros are dropped but at least one fractional digit is kept, so
/// `5000` prints as `5000.0` and `840.00` as `840.0`. There is no exponent
/// form: `10000000` prints as `10000000.0` and `0.0001` as `0.0001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(pub Decimal);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.normalize();
        if value.scale() == 0 {
            write!(f, "{value}.0")
        } else {
            write!(f, "{value}")
        }
    }
}
