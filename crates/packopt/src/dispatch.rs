//! The tokenizer/dispatcher: walks the argument vector, routes option tokens
//! to their handlers and collects operands.

use tracing::{debug, trace};

use crate::error::{ParseError, NONE_GIVEN};
use crate::extract::extract;
use crate::help;
use crate::option::OptionDescriptor;
use crate::policy::UnknownOptionPolicy;
use crate::registry::Registry;

/// Parses `args` against `registry`, invoking handlers left to right.
///
/// `args` must not include the program name. Returns the operands in their
/// input order, borrowed from `args`. On error, handlers that already ran
/// keep their effects.
pub fn parse<'s, S: AsRef<str>>(
    registry: &Registry<'_>,
    args: &'s [S],
) -> Result<Vec<&'s str>, ParseError> {
    debug!(args = args.len(), options = registry.len(), "parsing command line");
    let mut dispatcher = Dispatcher {
        registry,
        args,
        pos: 0,
        operands: Vec::new(),
    };
    dispatcher.run()?;
    Ok(dispatcher.operands)
}

struct Dispatcher<'r, 'a, 's, S> {
    registry: &'r Registry<'a>,
    args: &'s [S],
    pos: usize,
    operands: Vec<&'s str>,
}

impl<'r, 'a, 's, S: AsRef<str>> Dispatcher<'r, 'a, 's, S> {
    fn run(&mut self) -> Result<(), ParseError> {
        while let Some(arg) = self.next_arg() {
            if arg == "--" {
                let rest = &self.args[self.pos..];
                self.operands.extend(rest.iter().map(|arg| arg.as_ref()));
                self.pos = self.args.len();
                break;
            }

            if arg.len() < 2 || !arg.starts_with('-') {
                self.operands.push(arg);
            } else if let Some(body) = arg.strip_prefix("--") {
                self.long_option(arg, body)?;
            } else {
                self.short_cluster(arg)?;
            }
        }
        Ok(())
    }

    fn next_arg(&mut self) -> Option<&'s str> {
        let arg = self.args.get(self.pos)?.as_ref();
        self.pos += 1;
        Some(arg)
    }

    fn long_option(&mut self, arg: &'s str, body: &'s str) -> Result<(), ParseError> {
        let registry = self.registry;

        if let Some((key, value)) = body.split_once('=') {
            return match registry.find_long(key) {
                Some(opt) => self.invoke(opt, key, value),
                None => self.unknown(arg, key, true),
            };
        }

        let Some(opt) = registry.find_long(body) else {
            return self.unknown(arg, body, true);
        };
        if opt.ty().accepts_nothing {
            self.invoke(opt, body, &opt.ty().default_value)
        } else {
            let value = self.required_value(opt, body)?;
            self.invoke(opt, body, value)
        }
    }

    fn short_cluster(&mut self, arg: &'s str) -> Result<(), ParseError> {
        let registry = self.registry;
        let mut rest = &arg[1..];
        let mut buf = [0u8; 4];

        while let Some(flag) = rest.chars().next() {
            let name: &str = flag.encode_utf8(&mut buf);
            let after = &rest[flag.len_utf8()..];

            let Some(opt) = registry.find_short(flag) else {
                return self.unknown(arg, name, false);
            };
            let ty = opt.ty();

            if after.is_empty() {
                return if ty.accepts_nothing {
                    self.invoke(opt, name, &ty.default_value)
                } else {
                    let value = self.required_value(opt, name)?;
                    self.invoke(opt, name, value)
                };
            }

            if ty.is_fixed() {
                let ex = extract(after, ty);
                if !ex.ok {
                    return Err(self.bad_value(opt, name, after));
                }
                self.invoke(opt, name, ex.consumed)?;
                rest = ex.rest;
                continue;
            }

            let next_is_option = after
                .chars()
                .next()
                .is_some_and(|ch| registry.find_short(ch).is_some());
            if ty.accepts_nothing && next_is_option {
                self.invoke(opt, name, &ty.default_value)?;
                rest = after;
                continue;
            }

            let ex = extract(after, ty);
            if ex.ok {
                self.invoke(opt, name, ex.consumed)?;
                rest = ex.rest;
            } else if ty.accepts_nothing {
                debug!(option = name, dropped = after, "ignoring rest of cluster");
                return self.invoke(opt, name, &ty.default_value);
            } else {
                return Err(self.bad_value(opt, name, after));
            }
        }
        Ok(())
    }

    /// Consumes the next entry as the value of `opt`. The entry must be
    /// non-empty and match a declared fixed length.
    fn required_value(
        &mut self,
        opt: &OptionDescriptor<'_>,
        name: &str,
    ) -> Result<&'s str, ParseError> {
        let Some(value) = self.next_arg() else {
            return Err(self.bad_value(opt, name, NONE_GIVEN));
        };
        match opt.ty().length {
            _ if value.is_empty() => Err(self.bad_value(opt, name, value)),
            Some(n) if value.chars().count() != n => Err(self.bad_value(opt, name, value)),
            _ => Ok(value),
        }
    }

    fn invoke(
        &mut self,
        opt: &OptionDescriptor<'_>,
        name: &str,
        value: &str,
    ) -> Result<(), ParseError> {
        trace!(option = name, value, "dispatching");
        if opt.is_help() {
            return help::respond(self.registry, value);
        }
        opt.run(value).map_err(|source| ParseError::HandlerFailure {
            option: self.registry.policy().option_label(name),
            value: value.to_string(),
            source,
        })
    }

    fn unknown(&mut self, arg: &'s str, name: &str, long: bool) -> Result<(), ParseError> {
        match self.registry.policy() {
            UnknownOptionPolicy::PassBack => {
                debug!(arg, "passing unknown option through");
                self.operands.push(arg);
                Ok(())
            }
            UnknownOptionPolicy::Classic => Err(ParseError::NoSuchOption(name.to_string())),
            UnknownOptionPolicy::ThrowWithLeading if long => {
                Err(ParseError::NoSuchOption(arg.to_string()))
            }
            UnknownOptionPolicy::ThrowWithLeading => {
                Err(ParseError::NoSuchOption(format!("-{}", name)))
            }
        }
    }

    fn bad_value(&self, opt: &OptionDescriptor<'_>, name: &str, value: &str) -> ParseError {
        ParseError::BadOptionValue {
            option: self.registry.policy().option_label(name),
            expected: opt.ty().display_name.to_string(),
            value: value.to_string(),
        }
    }
}
