//! Runtime printf-style substitution.
//!
//! Format strings for the printf entry point are ordinary runtime strings, so
//! arguments travel as a slice of [`Arg`] and every mismatch between the two
//! is reported as a [`FormatError`] instead of being papered over.

use std::fmt;

/// A single printf argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    Ptr(usize),
}

impl Arg {
    /// Address of `value`, for `%p`.
    pub fn ptr<T>(value: &T) -> Self {
        Self::Ptr(std::ptr::from_ref(value).addr())
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "signed integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
            Self::Ptr(_) => "pointer",
        }
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

arg_from!(Int as i64: i8, i16, i32, i64);
arg_from!(UInt as u64: u8, u16, u32, u64);
arg_from!(Float as f64: f32, f64);

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl<T> From<*const T> for Arg {
    fn from(value: *const T) -> Self {
        Self::Ptr(value.addr())
    }
}

/// Why a printf substitution failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The template ends in the middle of a conversion.
    Incomplete { position: usize },
    /// Conversion character not recognized.
    UnknownConversion { conversion: char, position: usize },
    /// More conversions than arguments.
    MissingArgument { index: usize, conversion: char },
    /// More arguments than conversions.
    ExtraArguments { used: usize, given: usize },
    /// Width or precision above [`MAX_FIELD`].
    OutOfRange { position: usize },
    /// Argument type does not fit the conversion.
    TypeMismatch {
        index: usize,
        conversion: char,
        found: &'static str,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { position } => {
                write!(f, "incomplete conversion at byte {position}")
            }
            Self::UnknownConversion {
                conversion,
                position,
            } => write!(f, "unknown conversion '%{conversion}' at byte {position}"),
            Self::MissingArgument { index, conversion } => {
                write!(f, "missing argument #{index} for '%{conversion}'")
            }
            Self::ExtraArguments { used, given } => {
                write!(f, "{given} arguments given but only {used} used")
            }
            Self::OutOfRange { position } => {
                write!(f, "width or precision too large at byte {position}")
            }
            Self::TypeMismatch {
                index,
                conversion,
                found,
            } => write!(f, "argument #{index} is a {found}, not valid for '%{conversion}'"),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alt: bool,
    width: usize,
    precision: Option<usize>,
}

/// Largest accepted width or precision.
pub const MAX_FIELD: usize = 65_535;

/// Decimal places past which an `f64` expansion is all zeros.
const EXACT_DIGITS: usize = 1100;

const CONVERSIONS: &str = "diuxXocsfFeEgGp";
const LENGTH_MODIFIERS: &str = "hlLzjtq";

/// Substitutes `args` into a C-style `template`.
///
/// # Errors
/// Returns a [`FormatError`] when the template is malformed or when the
/// arguments do not match its conversions in number or type. Widths and
/// precisions above [`MAX_FIELD`] are rejected rather than allocated.
pub fn sprintf(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.char_indices().peekable();
    let mut next_arg = 0usize;

    while let Some((position, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.next_if(|&(_, c)| c == '%').is_some() {
            out.push('%');
            continue;
        }

        let mut spec = Spec::default();
        while let Some((_, flag)) = chars.next_if(|&(_, c)| "-+ 0#".contains(c)) {
            match flag {
                '-' => spec.left = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                _ => spec.alt = true,
            }
        }

        if chars.next_if(|&(_, c)| c == '*').is_some() {
            let width = star_argument(args, &mut next_arg)?;
            spec.left |= width < 0;
            spec.width = usize::try_from(width.unsigned_abs()).unwrap_or(usize::MAX);
        } else {
            spec.width = read_number(&mut chars);
        }

        if chars.next_if(|&(_, c)| c == '.').is_some() {
            if chars.next_if(|&(_, c)| c == '*').is_some() {
                // A negative precision means none at all.
                let precision = star_argument(args, &mut next_arg)?;
                spec.precision = usize::try_from(precision).ok();
            } else {
                spec.precision = Some(read_number(&mut chars));
            }
        }

        if spec.width > MAX_FIELD || spec.precision.is_some_and(|p| p > MAX_FIELD) {
            return Err(FormatError::OutOfRange { position });
        }

        while chars
            .next_if(|&(_, c)| LENGTH_MODIFIERS.contains(c))
            .is_some()
        {}

        let Some((_, conversion)) = chars.next() else {
            return Err(FormatError::Incomplete { position });
        };
        if !CONVERSIONS.contains(conversion) {
            return Err(FormatError::UnknownConversion {
                conversion,
                position,
            });
        }
        let arg = args.get(next_arg).ok_or(FormatError::MissingArgument {
            index: next_arg,
            conversion,
        })?;
        out.push_str(&render(conversion, &spec, arg, next_arg)?);
        next_arg += 1;
    }

    if next_arg < args.len() {
        return Err(FormatError::ExtraArguments {
            used: next_arg,
            given: args.len(),
        });
    }
    Ok(out)
}

fn read_number(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> usize {
    let mut value = 0usize;
    while let Some((_, digit)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        let digit = digit.to_digit(10).unwrap_or(0) as usize;
        value = value.saturating_mul(10).saturating_add(digit);
    }
    value
}

fn star_argument(args: &[Arg], next_arg: &mut usize) -> Result<i64, FormatError> {
    let index = *next_arg;
    let value = match args.get(index) {
        Some(Arg::Int(v)) => *v,
        Some(Arg::UInt(v)) => i64::try_from(*v).unwrap_or(i64::MAX),
        Some(other) => {
            return Err(FormatError::TypeMismatch {
                index,
                conversion: '*',
                found: other.kind(),
            });
        }
        None => {
            return Err(FormatError::MissingArgument {
                index,
                conversion: '*',
            });
        }
    };
    *next_arg += 1;
    Ok(value)
}

fn render(conversion: char, spec: &Spec, arg: &Arg, index: usize) -> Result<String, FormatError> {
    let mismatch = || FormatError::TypeMismatch {
        index,
        conversion,
        found: arg.kind(),
    };

    match conversion {
        'd' | 'i' => {
            let value = match arg {
                Arg::Int(v) => i128::from(*v),
                Arg::UInt(v) => i128::from(*v),
                Arg::Char(c) => i128::from(u32::from(*c)),
                _ => return Err(mismatch()),
            };
            let sign = if value < 0 {
                "-"
            } else if spec.plus {
                "+"
            } else if spec.space {
                " "
            } else {
                ""
            };
            let digits = integer_digits(value.unsigned_abs(), conversion, spec);
            Ok(pad(spec, sign, &digits, spec.precision.is_none()))
        }
        'u' | 'x' | 'X' | 'o' => {
            let value = match arg {
                Arg::Int(v) => u128::from(v.cast_unsigned()),
                Arg::UInt(v) => u128::from(*v),
                Arg::Char(c) => u128::from(u32::from(*c)),
                _ => return Err(mismatch()),
            };
            let mut digits = integer_digits(value, conversion, spec);
            let mut prefix = "";
            if spec.alt {
                match conversion {
                    'x' if value != 0 => prefix = "0x",
                    'X' if value != 0 => prefix = "0X",
                    'o' if !digits.starts_with('0') => digits.insert(0, '0'),
                    _ => {}
                }
            }
            Ok(pad(spec, prefix, &digits, spec.precision.is_none()))
        }
        'c' => {
            let c = match arg {
                Arg::Char(c) => *c,
                Arg::Int(v) => u32::try_from(*v)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(mismatch)?,
                Arg::UInt(v) => u32::try_from(*v)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(mismatch)?,
                _ => return Err(mismatch()),
            };
            Ok(pad(spec, "", &c.to_string(), false))
        }
        's' => {
            let text = match arg {
                Arg::Str(s) => s.clone(),
                Arg::Char(c) => c.to_string(),
                _ => return Err(mismatch()),
            };
            let text = match spec.precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            };
            Ok(pad(spec, "", &text, false))
        }
        'p' => {
            let addr = match arg {
                Arg::Ptr(p) => *p,
                Arg::UInt(v) => usize::try_from(*v).map_err(|_| mismatch())?,
                _ => return Err(mismatch()),
            };
            let text = if addr == 0 {
                "(nil)".to_string()
            } else {
                format!("0x{addr:x}")
            };
            Ok(pad(spec, "", &text, false))
        }
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let value = match arg {
                Arg::Float(v) => *v,
                Arg::Int(v) => *v as f64,
                Arg::UInt(v) => *v as f64,
                _ => return Err(mismatch()),
            };
            Ok(render_float(conversion, spec, value))
        }
    }
}

fn integer_digits(value: u128, conversion: char, spec: &Spec) -> String {
    if spec.precision == Some(0) && value == 0 {
        return String::new();
    }
    let digits = match conversion {
        'x' => format!("{value:x}"),
        'X' => format!("{value:X}"),
        'o' => format!("{value:o}"),
        _ => value.to_string(),
    };
    match spec.precision {
        Some(p) if p > digits.len() => format!("{}{digits}", "0".repeat(p - digits.len())),
        _ => digits,
    }
}

fn render_float(conversion: char, spec: &Spec, value: f64) -> String {
    let upper = conversion.is_ascii_uppercase();
    let negative = value.is_sign_negative() && !value.is_nan();
    let sign = if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };

    if !value.is_finite() {
        let text = if value.is_nan() { "nan" } else { "inf" };
        let text = if upper {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        return pad(spec, sign, &text, false);
    }

    let magnitude = value.abs();
    let precision = spec.precision.unwrap_or(6);
    let body = match conversion.to_ascii_lowercase() {
        'f' => {
            let mut s = fixed_point(magnitude, precision);
            if spec.alt && precision == 0 {
                s.push('.');
            }
            s
        }
        'e' => exponent_form(magnitude, precision, upper, spec.alt),
        _ => general_form(magnitude, precision, upper, spec.alt),
    };
    pad(spec, sign, &body, true)
}

/// `1.500000e+02` style: at least two exponent digits and an explicit sign.
fn exponent_form(value: f64, precision: usize, upper: bool, alt: bool) -> String {
    let exact = precision.min(EXACT_DIGITS);
    let raw = format!("{value:.exact$e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let mut mantissa = mantissa.to_string();
    push_zeros(&mut mantissa, precision - exact);
    if alt && precision == 0 {
        mantissa.push('.');
    }
    let e = if upper { 'E' } else { 'e' };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{e}{exp_sign}{:02}", exponent.unsigned_abs())
}

fn general_form(value: f64, precision: usize, upper: bool, alt: bool) -> String {
    let precision = precision.max(1);
    let exponent = if value == 0.0 {
        0
    } else {
        let raw = format!("{value:.prec$e}", prec = (precision - 1).min(EXACT_DIGITS));
        raw.split_once('e')
            .and_then(|(_, e)| e.parse::<i64>().ok())
            .unwrap_or(0)
    };
    let p = i64::try_from(precision).unwrap_or(i64::MAX);

    let text = if exponent < p && exponent >= -4 {
        let decimals = usize::try_from(p - 1 - exponent).unwrap_or(0);
        fixed_point(value, decimals)
    } else {
        exponent_form(value, precision - 1, upper, alt)
    };
    if alt {
        return text;
    }
    match text.find(['e', 'E']) {
        Some(split) => {
            let (mantissa, exp) = text.split_at(split);
            format!("{}{exp}", strip_trailing_zeros(mantissa))
        }
        None => strip_trailing_zeros(&text).to_string(),
    }
}

/// `%f` digits. `core::fmt` caps precision at `u16::MAX`, so long tails are
/// padded by hand past the point where the expansion is exact.
fn fixed_point(value: f64, decimals: usize) -> String {
    let exact = decimals.min(EXACT_DIGITS);
    let mut text = format!("{value:.exact$}");
    push_zeros(&mut text, decimals - exact);
    text
}

fn push_zeros(text: &mut String, count: usize) {
    text.extend(std::iter::repeat_n('0', count));
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Applies width, justification and zero padding. Zeros go between the sign
/// (or radix prefix) and the digits.
fn pad(spec: &Spec, prefix: &str, body: &str, zero_allowed: bool) -> String {
    let len = prefix.chars().count() + body.chars().count();
    if len >= spec.width {
        return format!("{prefix}{body}");
    }
    let fill = spec.width - len;
    if spec.left {
        format!("{prefix}{body}{}", " ".repeat(fill))
    } else if spec.zero && zero_allowed {
        format!("{prefix}{}{body}", "0".repeat(fill))
    } else {
        format!("{}{prefix}{body}", " ".repeat(fill))
    }
}
