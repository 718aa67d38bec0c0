#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_bounds {
    ($index:expr, $len:expr) => {{
        $crate::result::verify_bounds($index, $len)?;
    }};
}
