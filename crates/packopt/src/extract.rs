//! Type-directed value extraction.
//!
//! Given the text following an option character inside a packed cluster,
//! decides how many leading characters belong to the option's value.

use crate::types::{CharClass, TypeDescriptor};

/// Result of carving a value off the front of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// Characters that belong to the value.
    pub consumed: &'a str,
    /// Unconsumed remainder, fed back into the cluster.
    pub rest: &'a str,
    /// False when a fixed length could not be satisfied, or when an
    /// unbounded type accepted no character at all.
    pub ok: bool,
}

/// Splits `input` into the value described by `ty` and the remainder.
///
/// Fixed-length types take exactly `n` characters regardless of class.
/// Unbounded types take the longest prefix whose every character is accepted
/// by the type's [`CharClass`], except [`CharClass::Decimal`], which takes the
/// longest prefix forming a decimal literal.
pub fn extract<'a>(input: &'a str, ty: &TypeDescriptor) -> Extraction<'a> {
    let end = match (ty.length, ty.character_class) {
        (Some(n), _) => return take_fixed(input, n),
        (None, CharClass::Decimal) => decimal_end(input),
        (None, class) => input
            .char_indices()
            .find(|&(_, ch)| !class.accepts(ch))
            .map(|(idx, _)| idx)
            .unwrap_or(input.len()),
    };
    Extraction {
        consumed: &input[..end],
        rest: &input[end..],
        ok: end > 0,
    }
}

// digits [. digits] [(e|E) [+|-] digits], with at least one mantissa digit.
// The exponent only counts when it has digits, so `2e` leaves `e` behind.
fn decimal_end(input: &str) -> usize {
    let bytes = input.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = digits(0);
    let mut mantissa = end;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits(end + 1);
        mantissa += fraction;
        end += 1 + fraction;
    }
    if mantissa == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

fn take_fixed(input: &str, n: usize) -> Extraction<'_> {
    let mut chars = input.char_indices();
    let end = if n == 0 {
        Some(0)
    } else {
        chars.nth(n - 1).map(|(idx, ch)| idx + ch.len_utf8())
    };

    match end {
        Some(end) => Extraction {
            consumed: &input[..end],
            rest: &input[end..],
            ok: true,
        },
        None => Extraction {
            consumed: "",
            rest: input,
            ok: false,
        },
    }
}
