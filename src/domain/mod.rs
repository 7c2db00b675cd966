// Domain layer: the Gregorian leap-year rule and the `Year` value type.

pub mod year;
