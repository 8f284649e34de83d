//! Primitive coercers and ordered key probing.
//!
//! Coercers take `Option<&Value>` so a missing key and JSON `null` follow the
//! same path. The `to_*` forms apply a fallback; the bare forms return
//! `None` so they compose with [`first_match`].

use serde_json::{Number, Value};

/// Candidate keys holding the URL inside an uploaded-image object, in
/// priority order.
pub const IMAGE_URL_KEYS: [&str; 7] = [
    "url",
    "secure_url",
    "secureUrl",
    "path",
    "publicUrl",
    "public_url",
    "src",
];

/// One candidate location: a key to read from a JSON record.
///
/// Reading a key from anything other than an object yields nothing.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    record: &'a Value,
    key: &'static str,
}

impl<'a> Probe<'a> {
    /// Candidate reading `key` from `record`.
    #[must_use]
    pub const fn new(record: &'a Value, key: &'static str) -> Self {
        Self { record, key }
    }

    /// Value at this location, if any.
    #[must_use]
    pub fn get(self) -> Option<&'a Value> {
        self.record.get(self.key)
    }
}

/// Apply `extract` to each probe in order and return the first hit.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use skill_swap_client::normalize::coerce::{Probe, first_match, text};
///
/// let row = json!({ "userName": "ann", "user": { "name": "Ann" } });
/// let user = &row["user"];
/// let name = first_match(
///     &[Probe::new(&row, "name"), Probe::new(&row, "userName"), Probe::new(user, "name")],
///     text,
/// );
/// assert_eq!(name.as_deref(), Some("ann"));
/// ```
pub fn first_match<'a, T, F>(probes: &[Probe<'a>], extract: F) -> Option<T>
where
    F: Fn(Option<&'a Value>) -> Option<T>,
{
    probes.iter().find_map(|probe| extract(probe.get()))
}

/// Text held by `value`: strings as-is, numbers stringified.
#[must_use]
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// Text held by `value`, or `fallback` for any other shape.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use skill_swap_client::normalize::coerce::to_text;
///
/// assert_eq!(to_text(Some(&json!(42)), ""), "42");
/// assert_eq!(to_text(Some(&json!(true)), "n/a"), "n/a");
/// assert_eq!(to_text(None, "n/a"), "n/a");
/// ```
#[must_use]
pub fn to_text(value: Option<&Value>, fallback: &str) -> String {
    text(value).unwrap_or_else(|| fallback.to_owned())
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float_text(float),
        _ => number.to_string(),
    }
}

// Integral floats print without `.0` and negative zero prints as `0`.
// Magnitudes outside [1e-6, 1e21) use exponent form with a signed exponent.
fn float_text(float: f64) -> String {
    if float == 0.0 {
        return "0".to_owned();
    }
    let magnitude = float.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return float.to_string();
    }
    let exponential = format!("{float:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// Finite number held by `value`, parsing numeric strings.
///
/// Strings may be decimal or carry a `0x`, `0o` or `0b` radix prefix.
#[must_use]
pub fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric(s.trim()),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

fn parse_numeric(text: &str) -> Option<f64> {
    let radix_digits = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| text.strip_prefix(prefix).map(|digits| (digits, radix)));
    match radix_digits {
        Some((digits, _)) if digits.starts_with('+') => None,
        Some((digits, radix)) => u64::from_str_radix(digits, radix)
            .ok()
            .map(|whole| whole as f64),
        None => text.parse::<f64>().ok(),
    }
}

/// Finite number held by `value`, or `fallback`.
///
/// Null, booleans, blank or non-numeric strings, arrays, objects, NaN and
/// infinities all yield `fallback`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use skill_swap_client::normalize::coerce::to_number;
///
/// assert_eq!(to_number(Some(&json!(" 12.5 ")), 0.0), 12.5);
/// assert_eq!(to_number(Some(&json!("Infinity")), 7.0), 7.0);
/// ```
#[must_use]
pub fn to_number(value: Option<&Value>, fallback: f64) -> f64 {
    number(value).unwrap_or(fallback)
}

/// Exclusive upper bound of values representable as `u64` (2^64).
const COUNT_CEILING: f64 = 18_446_744_073_709_551_616.0;

/// Non-negative whole count held by `value`; fractions are truncated.
///
/// Negative values and values beyond `u64::MAX` count as absent.
#[must_use]
pub fn count(value: Option<&Value>) -> Option<u64> {
    number(value)
        .filter(|n| (0.0..COUNT_CEILING).contains(n))
        .map(|n| n.trunc() as u64)
}

/// Boolean held by `value`; no truthiness conversion is attempted.
#[must_use]
pub fn boolean(value: Option<&Value>) -> Option<bool> {
    value?.as_bool()
}

/// Boolean held by `value`, or `fallback`.
#[must_use]
pub fn to_boolean(value: Option<&Value>, fallback: bool) -> bool {
    boolean(value).unwrap_or(fallback)
}

/// Image URL carried by `value`.
///
/// Strings are returned unchanged. Objects are probed for
/// [`IMAGE_URL_KEYS`] and the first string wins. Anything else yields `None`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use skill_swap_client::normalize::coerce::image_url_from_unknown;
///
/// let upload = json!({ "secure_url": "https://cdn.test/a.png" });
/// assert_eq!(
///     image_url_from_unknown(Some(&upload)).as_deref(),
///     Some("https://cdn.test/a.png")
/// );
/// assert_eq!(image_url_from_unknown(Some(&json!({}))), None);
/// ```
#[must_use]
pub fn image_url_from_unknown(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(url) => Some(url.clone()),
        Value::Object(fields) => IMAGE_URL_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::to_owned),
        _ => None,
    }
}
