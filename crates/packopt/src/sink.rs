//! Value sinks: how a parsed value is combined with what is already stored.
//!
//! The sink is chosen when an option is bound (see
//! [`OptionBuilder`](crate::OptionBuilder)) and lives inside the option's
//! handler closure. The dispatcher never sees it.

use crate::error::HandlerFailure;
use crate::option::Handler;
use crate::value::FromArg;

/// Combination strategy applied each time an option is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Each occurrence replaces the stored value.
    #[default]
    Overwrite,
    /// Occurrences are pushed onto a sequence in order.
    Append,
    /// Occurrences are added to a running total; a valueless occurrence
    /// counts as 1.
    Accumulate,
}

impl Aggregation {
    /// True when repeating the option has a cumulative effect.
    pub fn is_repeatable(self) -> bool {
        !matches!(self, Aggregation::Overwrite)
    }
}

/// Numeric types that can be summed across repeated occurrences.
pub trait Accumulate: FromArg {
    fn accumulate(&mut self, value: Self);
}

macro_rules! accumulate_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Accumulate for $ty {
                fn accumulate(&mut self, value: Self) {
                    *self = self.saturating_add(value);
                }
            }
        )*
    };
}

accumulate_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

pub(crate) fn overwrite<'a, T: FromArg + 'a>(target: &'a mut T) -> Handler<'a> {
    Box::new(move |raw: &str| {
        *target = T::from_arg(raw)?;
        Ok(())
    })
}

pub(crate) fn append<'a, T: FromArg + 'a>(target: &'a mut Vec<T>) -> Handler<'a> {
    Box::new(move |raw: &str| {
        target.push(T::from_arg(raw)?);
        Ok(())
    })
}

pub(crate) fn accumulate<'a, T: Accumulate + 'a>(target: &'a mut T) -> Handler<'a> {
    Box::new(move |raw: &str| {
        target.accumulate(T::from_arg(raw)?);
        Ok(())
    })
}

pub(crate) fn typed<'a, T, F>(mut callback: F) -> Handler<'a>
where
    T: FromArg + 'a,
    F: FnMut(T) -> Result<(), HandlerFailure> + 'a,
{
    Box::new(move |raw: &str| callback(T::from_arg(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_last() {
        let mut level = 0u8;
        {
            let mut handler = overwrite(&mut level);
            handler("3").unwrap();
            handler("5").unwrap();
        }
        assert_eq!(level, 5);
    }

    #[test]
    fn append_keeps_order() {
        let mut warnings: Vec<String> = Vec::new();
        {
            let mut handler = append(&mut warnings);
            handler("all").unwrap();
            handler("error").unwrap();
        }
        assert_eq!(warnings, vec!["all", "error"]);
    }

    #[test]
    fn accumulate_adds() {
        let mut verbosity = 0u32;
        {
            let mut handler = accumulate(&mut verbosity);
            handler("1").unwrap();
            handler("1").unwrap();
            handler("5").unwrap();
        }
        assert_eq!(verbosity, 7);
    }

    #[test]
    fn accumulate_saturates() {
        let mut total = u8::MAX - 1;
        total.accumulate(5);
        assert_eq!(total, u8::MAX);
    }

    #[test]
    fn conversion_failure_leaves_target_untouched() {
        let mut level = 2i32;
        {
            let mut handler = overwrite(&mut level);
            assert!(handler("high").is_err());
        }
        assert_eq!(level, 2);
    }

    #[test]
    fn repeatable() {
        assert!(!Aggregation::Overwrite.is_repeatable());
        assert!(Aggregation::Append.is_repeatable());
        assert!(Aggregation::Accumulate.is_repeatable());
    }
}
