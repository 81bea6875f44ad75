//! Fixed-precision float rendering shared by the writers.
//!
//! Both formats expect C `printf` scientific notation with fifteen fractional digits and a
//! minimum width of twenty: a signed exponent of at least two digits, and for atom records
//! a blank in place of the `+` sign (`% 20.15e`). Rust's `{:e}` writes `1.5e0`, so the
//! exponent is rebuilt here.

const PRECISION: usize = 15;
const WIDTH: usize = 20;

/// Renders `value` as `%20.15e`.
pub fn sci(value: f64) -> String {
    render(value, false)
}

/// Renders `value` as `% 20.15e`: non-negative values get a leading blank.
pub fn sci_signed(value: f64) -> String {
    render(value, true)
}

fn render(value: f64, blank_sign: bool) -> String {
    let body = if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        (if value > 0.0 { "inf" } else { "-inf" }).to_string()
    } else {
        c_exponent(&format!("{:.*e}", PRECISION, value))
    };
    let body = if blank_sign && !body.starts_with('-') {
        format!(" {body}")
    } else {
        body
    };
    format!("{:>width$}", body, width = WIDTH)
}

fn c_exponent(rust: &str) -> String {
    let Some((mantissa, exponent)) = rust.split_once('e') else {
        return rust.to_string();
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
