use std::fmt;

/// Significant digits kept when a float is written out.
const PRECISION: usize = 6;

/// A `float` value of a command script.
///
/// Values are written with six significant digits and no trailing zeros, switching to an
/// exponent like `1.23457e+06` when the decimal exponent is below -4 or at least six.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Float(pub f32);

fn trim_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = f64::from(self.0);
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent is taken after rounding, so 999999.5 becomes 1e+06.
        let scientific = format!("{:.*e}", PRECISION - 1, value);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            f.write_str(trim_zeros(&format!("{:.*}", decimals, value)))
        }
    }
}
