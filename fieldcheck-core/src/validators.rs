// Built-in checks
//
// Every constructor captures its arguments and returns a `Check`; nothing is
// tested until the check is evaluated.

use crate::{Check, CheckFailure, Emptiness, Number};
use chrono::{DateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static UK_POST_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{1,2}\d[a-zA-Z\d]?\s*\d[a-zA-Z]{2}$").unwrap());

static US_ZIP_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{5}(?:-\d{4})?)$").unwrap());

// Mailbox syntax: `local@domain` or `Display Name <local@domain>`, with
// optional comments around either form. Atoms accept any non-ASCII text; an
// unquoted display name may not contain specials such as `,` or `:`.
// A top-level domain is not required.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let atom = r#"[^\x00-\x20\x7f()<>\[\]:;@\\,."]+"#;
    let word = r#"[^\x00-\x20\x7f()<>\[\]:;@\\,"]+"#;
    let quoted = r#""(?:[^"\\]|\\.)*""#;
    let comment = r"\((?:[^()\\]|\\.)*\)";
    let cfws = format!(r"(?:\s|{comment})*");
    let dot_atom = format!(r"{atom}(?:\.{atom})*");
    let addr = format!(r"(?:{dot_atom}|{quoted})@(?:{dot_atom}|\[[^\[\]\\]*\])");
    let phrase = format!(r"(?:{word}|{quoted})(?:{cfws}(?:{word}|{quoted}))*");
    Regex::new(&format!(
        r"^{cfws}(?:{addr}|(?:{phrase})?{cfws}<{addr}>){cfws}$"
    ))
    .unwrap()
});

fn fail(constraint: &'static str, message: String) -> Result<(), CheckFailure> {
    Err(CheckFailure::new(constraint, message))
}

// String length

/// Passes when the byte length of `val` is within `min..=max`.
pub fn str_length<'a>(val: impl AsRef<str> + 'a, min: usize, max: usize) -> Check<'a> {
    Check::new("strLength", move || {
        let len = val.as_ref().len();
        if len >= min && len <= max {
            Ok(())
        } else {
            fail(
                "strLength",
                format!("value must be between {} and {} characters", min, max),
            )
        }
    })
}

/// Passes when the byte length of `val` is exactly `length`.
pub fn str_length_exact<'a>(val: impl AsRef<str> + 'a, length: usize) -> Check<'a> {
    Check::new("strLengthExact", move || {
        if val.as_ref().len() == length {
            Ok(())
        } else {
            fail(
                "strLengthExact",
                format!("value should be exactly {} characters", length),
            )
        }
    })
}

// Numbers

/// Passes when `val >= min`.
pub fn min_number<'a, T: Number + 'a>(val: T, min: T) -> Check<'a> {
    Check::new("min", move || {
        if val >= min {
            Ok(())
        } else {
            fail("min", format!("value {} is smaller than minimum {}", val, min))
        }
    })
}

/// Passes when `val <= max`.
pub fn max_number<'a, T: Number + 'a>(val: T, max: T) -> Check<'a> {
    Check::new("max", move || {
        if val <= max {
            Ok(())
        } else {
            fail("max", format!("value {} is larger than maximum {}", val, max))
        }
    })
}

/// Passes when `min <= val <= max`.
pub fn between_number<'a, T: Number + 'a>(val: T, min: T, max: T) -> Check<'a> {
    Check::new("between", move || {
        if val >= min && val <= max {
            Ok(())
        } else {
            fail(
                "between",
                format!("value {} must be between {} and {}", val, min, max),
            )
        }
    })
}

/// Passes when `val > 0`.
pub fn positive_number<'a, T: Number + 'a>(val: T) -> Check<'a> {
    Check::new("positive", move || {
        if val > T::ZERO {
            Ok(())
        } else {
            fail("positive", format!("value {} should be greater than 0", val))
        }
    })
}

// Patterns

/// Passes when `re` matches somewhere in `val`.
pub fn match_string<'a>(val: impl AsRef<str> + 'a, re: &'a Regex) -> Check<'a> {
    Check::new("matches", move || {
        let val = val.as_ref();
        if re.is_match(val) {
            Ok(())
        } else {
            fail("matches", format!("value {} failed to meet requirements", val))
        }
    })
}

/// Byte-slice form of [`match_string`].
pub fn match_bytes<'a>(val: impl AsRef<[u8]> + 'a, re: &'a regex::bytes::Regex) -> Check<'a> {
    Check::new("matches", move || {
        let val = val.as_ref();
        if re.is_match(val) {
            Ok(())
        } else {
            fail(
                "matches",
                format!(
                    "value {} failed to meet requirements",
                    String::from_utf8_lossy(val)
                ),
            )
        }
    })
}

/// Passes when `val` is a base-10 integer that fits in an `i64`.
pub fn is_numeric<'a>(val: impl AsRef<str> + 'a) -> Check<'a> {
    Check::new("isNumeric", move || {
        let val = val.as_ref();
        match val.parse::<i64>() {
            Ok(_) => Ok(()),
            Err(_) => fail("isNumeric", format!("string {} is not a number", val)),
        }
    })
}

/// Passes when `val` looks like a UK post code. Existence is not checked.
pub fn uk_post_code<'a>(val: impl AsRef<str> + 'a) -> Check<'a> {
    Check::new("ukPostCode", move || {
        let val = val.as_ref();
        if UK_POST_CODE_REGEX.is_match(val) {
            Ok(())
        } else {
            fail("ukPostCode", format!("{} is not a valid UK PostCode", val))
        }
    })
}

/// Passes for a five digit US zip code, optionally with a `-1234` suffix.
pub fn us_zip_code<'a>(val: impl AsRef<str> + 'a) -> Check<'a> {
    Check::new("usZipCode", move || {
        let val = val.as_ref();
        if US_ZIP_CODE_REGEX.is_match(val) {
            Ok(())
        } else {
            fail("usZipCode", format!("{} is not a valid US ZipCode", val))
        }
    })
}

/// Passes when `val` starts with `prefix`.
pub fn has_prefix<'a>(val: impl AsRef<str> + 'a, prefix: impl AsRef<str> + 'a) -> Check<'a> {
    Check::predicate(
        "hasPrefix",
        "value provided does not have a valid prefix",
        move || val.as_ref().starts_with(prefix.as_ref()),
    )
}

/// Passes when `val` does not start with `prefix`.
pub fn no_prefix<'a>(val: impl AsRef<str> + 'a, prefix: impl AsRef<str> + 'a) -> Check<'a> {
    Check::predicate(
        "noPrefix",
        "value provided should not have the prefix",
        move || !val.as_ref().starts_with(prefix.as_ref()),
    )
}

/// Passes when `val` decodes as hexadecimal: an even number of hex digits.
pub fn is_hex<'a>(val: impl AsRef<str> + 'a) -> Check<'a> {
    Check::predicate("isHex", "value supplied is not valid hex", move || {
        hex::decode(val.as_ref()).is_ok()
    })
}

/// Passes when `val` is a syntactically valid mailbox.
pub fn email<'a>(val: impl AsRef<str> + 'a) -> Check<'a> {
    Check::predicate("email", "invalid email", move || {
        EMAIL_REGEX.is_match(val.as_ref())
    })
}

/// Passes when `val` equals one of `allowed`.
pub fn any_string<'a, S>(val: impl AsRef<str> + 'a, allowed: &'a [S]) -> Check<'a>
where
    S: AsRef<str>,
{
    Check::predicate("oneOf", "value not found in allowed values", move || {
        allowed.iter().any(|candidate| candidate.as_ref() == val.as_ref())
    })
}

/// Generic form of [`any_string`].
pub fn one_of<'a, T, I>(val: T, allowed: I) -> Check<'a>
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = T>,
{
    let allowed: Vec<T> = allowed.into_iter().collect();
    Check::predicate("oneOf", "value not found in allowed values", move || {
        allowed.contains(&val)
    })
}

// Equality

/// Passes when `val == exp`.
pub fn equal<'a, T>(val: T, exp: T) -> Check<'a>
where
    T: PartialEq + fmt::Display + 'a,
{
    Check::new("equal", move || {
        if val == exp {
            Ok(())
        } else {
            fail("equal", format!("value {} does not evaluate to {}", val, exp))
        }
    })
}

// Dates

/// Passes when `val` and `exp` are the same instant.
pub fn date_equal<'a, Tz>(val: DateTime<Tz>, exp: DateTime<Tz>) -> Check<'a>
where
    Tz: TimeZone + 'a,
    Tz::Offset: fmt::Display,
{
    Check::new("dateEqual", move || {
        if val == exp {
            Ok(())
        } else {
            fail(
                "dateEqual",
                format!(
                    "the date/time provided {}, does not match the expected {}",
                    val, exp
                ),
            )
        }
    })
}

/// Passes when `val` is strictly after `exp`.
pub fn date_after<'a, Tz>(val: DateTime<Tz>, exp: DateTime<Tz>) -> Check<'a>
where
    Tz: TimeZone + 'a,
    Tz::Offset: fmt::Display,
{
    Check::new("dateAfter", move || {
        if val > exp {
            Ok(())
        } else {
            fail(
                "dateAfter",
                format!("the date provided {}, must be after {}", val, exp),
            )
        }
    })
}

/// Passes when `val` is strictly before `exp`.
pub fn date_before<'a, Tz>(val: DateTime<Tz>, exp: DateTime<Tz>) -> Check<'a>
where
    Tz: TimeZone + 'a,
    Tz::Offset: fmt::Display,
{
    Check::new("dateBefore", move || {
        if val < exp {
            Ok(())
        } else {
            fail(
                "dateBefore",
                format!("the date provided {}, must be before {}", val, exp),
            )
        }
    })
}

// Emptiness

/// Passes when `val` is not empty by the rules of [`Emptiness`].
///
/// # Panics
///
/// Evaluating the check panics for types whose kind is
/// [`Kind::Unsupported`](crate::Kind::Unsupported).
pub fn not_empty<'a, T: Emptiness + ?Sized>(val: &'a T) -> Check<'a> {
    Check::predicate("notEmpty", "value cannot be empty", move || {
        !val.kind().is_empty()
    })
}

/// Exact complement of [`not_empty`].
pub fn empty<'a, T: Emptiness + ?Sized>(val: &'a T) -> Check<'a> {
    Check::predicate("empty", "value must be empty", move || {
        val.kind().is_empty()
    })
}
