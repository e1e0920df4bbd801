/// Shorthand for creating a fraction with `i32` components.
#[macro_export]
macro_rules! F32 {
    ($value:expr) => {
        $crate::Fraction32::integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction32::new($numer, $denom)
    };
}

/// Shorthand for creating a fraction with `i64` components.
#[macro_export]
macro_rules! F64 {
    ($value:expr) => {
        $crate::Fraction64::integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction64::new($numer, $denom)
    };
}

/// Shorthand for creating a fraction with `i128` components.
#[macro_export]
macro_rules! F128 {
    ($value:expr) => {
        $crate::Fraction128::integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction128::new($numer, $denom)
    };
}
