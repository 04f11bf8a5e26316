//! POSIX/GNU style command-line option parsing with type-directed packed
//! short options.
//!
//! `packopt` parses an argument vector against a registry of options whose
//! value types drive tokenization. Inside a packed cluster such as `-cii42b0`
//! each option's value type decides how many characters it owns: a `char`
//! takes exactly one, an integer takes the longest run of digits, a flag
//! takes nothing when the next character is itself an option.
//!
//! # Quick Start
//!
//! ```
//! use packopt::{parse, OptionBuilder, Registry};
//!
//! let mut mode = ' ';
//! let mut count = 0i32;
//! let mut brief = true;
//!
//! let registry = Registry::new([
//!     OptionBuilder::new('c').store(&mut mode),
//!     OptionBuilder::new('i').store(&mut count),
//!     OptionBuilder::new('b').store(&mut brief),
//! ])?;
//! let operands = parse(&registry, &["-cii42b0", "input.txt"])?;
//! drop(registry);
//!
//! assert_eq!((mode, count, brief), ('i', 42, false));
//! assert_eq!(operands, ["input.txt"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Grammar
//!
//! - `--` ends option processing; everything after it is an operand.
//! - `-` on its own, empty strings and words not starting with `-` are
//!   operands.
//! - `--name=value` always passes `value`; `--name` takes the next entry
//!   unless the option's type can go without a value.
//! - `-abc` is walked left to right, one option character at a time.
//!
//! # Architecture
//!
//! ```text
//! parse
//! ├── Registry        name → OptionDescriptor (names, TypeDescriptor, handler)
//! ├── extract         how much of a cluster belongs to a value
//! ├── handler         FromArg conversion + Aggregation into caller state
//! └── ParserConfig    unknown-option policy, help policy, help renderer
//! ```
//!
//! Handlers borrow caller state for the registry's lifetime; drop the
//! registry to read the results back.

mod dispatch;
mod error;
mod extract;
mod help;
mod option;
mod policy;
mod registry;
mod sink;
mod types;
mod value;

pub use dispatch::parse;
pub use error::{HandlerFailure, ParseError, RegistryError, NONE_GIVEN};
pub use extract::{extract, Extraction};
pub use help::usage_summary;
pub use option::{dashed, Handler, OptionBuilder, OptionDescriptor};
pub use policy::{HelpPolicy, HelpRenderer, ParserConfig, UnknownOptionPolicy};
pub use registry::Registry;
pub use sink::{Accumulate, Aggregation};
pub use types::{CharClass, TypeDescriptor};
pub use value::FromArg;
