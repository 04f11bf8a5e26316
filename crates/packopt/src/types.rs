//! Runtime type metadata for option values.
//!
//! A [`TypeDescriptor`] tells the dispatcher how much of a packed cluster
//! belongs to an option's value without knowing the value's Rust type. The
//! conversion itself happens later, inside the option's handler.

use std::borrow::Cow;

/// Which characters a value type accepts.
///
/// Only consulted when an unbounded value is carved out of a packed short
/// option cluster: for `-O1df9` with `-O <int>`, the numeric class stops the
/// value at `1` and lets `d` start the next option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letters only.
    Alpha,
    /// Letters and digits.
    AlphaNumeric,
    /// ASCII digits only.
    Numeric,
    /// A decimal number: digits with at most one `.` and an optional
    /// exponent. The extractor scans the whole literal, so `-f2.5b` stops
    /// after `2.5`.
    Decimal,
    /// Anything that is not a control character.
    Printable,
    /// Every character.
    Any,
}

impl CharClass {
    /// Returns true if `ch` belongs to this class.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            CharClass::Alpha => ch.is_alphabetic(),
            CharClass::AlphaNumeric => ch.is_alphanumeric(),
            CharClass::Numeric => ch.is_ascii_digit(),
            CharClass::Decimal => ch.is_ascii_digit() || ch == '.',
            CharClass::Printable => !ch.is_control(),
            CharClass::Any => true,
        }
    }
}

/// Static description of a value type, as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// The option may appear without a value; `default_value` is used then.
    pub accepts_nothing: bool,
    /// Value handed to the handler when nothing was attached.
    pub default_value: Cow<'static, str>,
    /// `Some(n)` consumes exactly `n` characters, `None` the longest run
    /// accepted by `character_class`.
    pub length: Option<usize>,
    pub character_class: CharClass,
    /// Human readable type name used in diagnostics and help.
    pub display_name: Cow<'static, str>,
}

impl TypeDescriptor {
    /// An unbounded, value-requiring type.
    pub fn new(display_name: impl Into<Cow<'static, str>>, class: CharClass) -> Self {
        Self {
            accepts_nothing: false,
            default_value: Cow::Borrowed(""),
            length: None,
            character_class: class,
            display_name: display_name.into(),
        }
    }

    /// Makes the value optional, substituting `default` when it is omitted.
    pub fn with_default(mut self, default: impl Into<Cow<'static, str>>) -> Self {
        self.accepts_nothing = true;
        self.default_value = default.into();
        self
    }

    /// Fixes the value length to exactly `n` characters.
    pub fn fixed(mut self, n: usize) -> Self {
        self.length = Some(n);
        self
    }

    /// Boolean flag: valueless, defaults to `"1"`.
    pub fn flag() -> Self {
        Self::new("bool", CharClass::AlphaNumeric).with_default("1")
    }

    /// A single printable character.
    pub fn character() -> Self {
        Self::new("char", CharClass::Printable).fixed(1)
    }

    /// Free-form text.
    pub fn string() -> Self {
        Self::new("str", CharClass::Printable)
    }

    /// Digit-only value with the given type name.
    pub fn numeric(display_name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(display_name, CharClass::Numeric)
    }

    /// Floating-point value with the given type name.
    pub fn decimal(display_name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(display_name, CharClass::Decimal)
    }

    /// Returns true if the value has a known length.
    pub fn is_fixed(&self) -> bool {
        self.length.is_some()
    }
}
