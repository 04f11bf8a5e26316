//! Conversion from raw option text to Rust values.
//!
//! Every value type pairs its [`TypeDescriptor`] (what the dispatcher needs
//! to carve the value out of a cluster) with a conversion from the carved
//! text. Built-in implementations cover booleans, characters, strings, paths,
//! integers and floats.

use std::path::PathBuf;

use crate::error::HandlerFailure;
use crate::types::{CharClass, TypeDescriptor};

/// A type that can be parsed from an option value.
pub trait FromArg: Sized {
    /// Runtime metadata used while tokenizing.
    fn descriptor() -> TypeDescriptor;

    /// Converts the extracted text.
    fn from_arg(raw: &str) -> Result<Self, HandlerFailure>;
}

impl FromArg for bool {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::flag()
    }

    /// `""`, `"0"`, `"false"` and `"off"` are false; anything else is true.
    fn from_arg(raw: &str) -> Result<Self, HandlerFailure> {
        let falsy = raw.is_empty()
            || raw == "0"
            || raw.eq_ignore_ascii_case("false")
            || raw.eq_ignore_ascii_case("off");
        Ok(!falsy)
    }
}

impl FromArg for char {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::character()
    }

    fn from_arg(raw: &str) -> Result<Self, HandlerFailure> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(HandlerFailure::conversion("char", raw)),
        }
    }
}

impl FromArg for String {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::string()
    }

    fn from_arg(raw: &str) -> Result<Self, HandlerFailure> {
        Ok(raw.to_string())
    }
}

impl FromArg for PathBuf {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("path", CharClass::Printable)
    }

    fn from_arg(raw: &str) -> Result<Self, HandlerFailure> {
        Ok(PathBuf::from(raw))
    }
}

macro_rules! numeric_from_arg {
    ($descriptor:ident: $($ty:ty),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::$descriptor(stringify!($ty))
                }

                fn from_arg(raw: &str) -> Result<Self, HandlerFailure> {
                    raw.parse::<$ty>()
                        .map_err(|_| HandlerFailure::conversion(stringify!($ty), raw))
                }
            }
        )*
    };
}

numeric_from_arg!(numeric: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
numeric_from_arg!(decimal: f32, f64);
