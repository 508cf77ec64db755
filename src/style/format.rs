//! printf-style formatting of a single number, used for pie percentage labels.
//!
//! Supports `%%` and one conversion `%[flags][width][.precision]type` with flags
//! `-+ 0#` and types `d i u f F e E g G s`.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::PlotError;

#[derive(Debug, Default)]
struct Conversion {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
    width: usize,
    precision: Option<usize>,
    kind: char,
}

/// Format `value` with a printf-style template such as `"%1.1f%%"`.
pub fn format_number(template: &str, value: f64) -> Result<String, PlotError> {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();
    let mut converted = false;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let conversion = parse_conversion(template, &mut chars)?;
        if converted {
            return Err(PlotError::invalid_format(
                template,
                "not enough arguments for format string",
            ));
        }
        converted = true;
        out.push_str(&conversion.apply(value));
    }

    if !converted {
        return Err(PlotError::invalid_format(
            template,
            "not all arguments converted during string formatting",
        ));
    }
    Ok(out)
}

fn parse_conversion(
    template: &str,
    chars: &mut Peekable<Chars<'_>>,
) -> Result<Conversion, PlotError> {
    let mut conversion = Conversion::default();

    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => conversion.left = true,
            '+' => conversion.plus = true,
            ' ' => conversion.space = true,
            '0' => conversion.zero = true,
            '#' => conversion.alternate = true,
            _ => break,
        }
        chars.next();
    }

    conversion.width = read_number(chars).unwrap_or(0);

    if chars.peek() == Some(&'.') {
        chars.next();
        conversion.precision = Some(read_number(chars).unwrap_or(0));
    }

    match chars.next() {
        Some(kind @ ('d' | 'i' | 'u' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 's')) => {
            conversion.kind = kind;
            Ok(conversion)
        }
        Some(_) => Err(PlotError::invalid_format(template, "unsupported format character")),
        None => Err(PlotError::invalid_format(template, "incomplete format")),
    }
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

impl Conversion {
    fn apply(&self, value: f64) -> String {
        let numeric = self.kind != 's';
        let body = match self.kind {
            'd' | 'i' | 'u' => format!("{}", value.trunc().abs()),
            'f' | 'F' => format!("{:.*}", self.precision.unwrap_or(6), value.abs()),
            'e' | 'E' => exponent(value.abs(), self.precision.unwrap_or(6), self.kind == 'E'),
            'g' | 'G' => general(
                value.abs(),
                self.precision.unwrap_or(6),
                self.alternate,
                self.kind == 'G',
            ),
            _ => python_str(value),
        };

        let sign = if !numeric || value.is_nan() {
            ""
        } else if value.is_sign_negative() && value != 0.0 {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };

        let len = sign.len() + body.len();
        if len >= self.width {
            return format!("{}{}", sign, body);
        }
        let pad = self.width - len;
        if self.left {
            format!("{}{}{}", sign, body, " ".repeat(pad))
        } else if self.zero && numeric && value.is_finite() {
            format!("{}{}{}", sign, "0".repeat(pad), body)
        } else {
            format!("{}{}{}", " ".repeat(pad), sign, body)
        }
    }
}

/// Exponent notation with a signed, at least two-digit exponent: `1.5e+01`.
fn exponent(value: f64, precision: usize, upper: bool) -> String {
    let formatted = format!("{:.*e}", precision, value);
    let (mantissa, exp) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    let marker = if upper { 'E' } else { 'e' };
    format!("{}{}{}{:02}", mantissa, marker, sign, exp.abs())
}

/// Shortest of fixed and exponent notation for `precision` significant digits.
fn general(value: f64, precision: usize, keep_zeros: bool, upper: bool) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let precision = precision.max(1);
    let probe = format!("{:.*e}", precision - 1, value);
    let exp: i32 = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let text = exponent(value, precision - 1, upper);
        if keep_zeros {
            text
        } else {
            let marker = if upper { 'E' } else { 'e' };
            text.split_once(marker)
                .map(|(mantissa, exp)| format!("{}{}{}", strip_zeros(mantissa), marker, exp))
                .unwrap_or_else(|| text.clone())
        }
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        let text = format!("{:.*}", decimals, value);
        if keep_zeros {
            text
        } else {
            strip_zeros(&text).to_string()
        }
    }
}

fn strip_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Render like `str(float)`: integral values keep one decimal.
fn python_str(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pie_format() {
        assert_eq!(format_number("%1.1f%%", 100.0 / 6.0).unwrap(), "16.7%");
        assert_eq!(format_number("%1.1f%%", 50.0).unwrap(), "50.0%");
    }

    #[test]
    fn test_width_and_flags() {
        assert_eq!(format_number("%6.2f", 3.14159).unwrap(), "  3.14");
        assert_eq!(format_number("%-6.1f|", 3.14159).unwrap(), "3.1   |");
        assert_eq!(format_number("%06.1f", -3.14159).unwrap(), "-003.1");
        assert_eq!(format_number("%+.0f", 2.0).unwrap(), "+2");
        assert_eq!(format_number("%d%%", 33.9).unwrap(), "33%");
    }

    #[test]
    fn test_exponent_and_general() {
        assert_eq!(format_number("%.2e", 1234.5).unwrap(), "1.23e+03");
        assert_eq!(format_number("%E", 0.00012).unwrap(), "1.200000E-04");
        assert_eq!(format_number("%g", 16.5).unwrap(), "16.5");
        assert_eq!(format_number("%g", 0.00001234).unwrap(), "1.234e-05");
        assert_eq!(format_number("%.3g", 1234567.0).unwrap(), "1.23e+06");
        assert_eq!(format_number("%s", 50.0).unwrap(), "50.0");
    }

    #[test]
    fn test_bad_templates() {
        assert!(format_number("no conversion", 1.0).is_err());
        assert!(format_number("%q", 1.0).is_err());
        assert!(format_number("%.1f %.1f", 1.0).is_err());
        assert!(format_number("%5", 1.0).is_err());
    }
}
