//! SRL: write regular expressions in plain English.
//!
//! An SRL query like `begin with digit exactly 2 times, letter at least
//! 3 times` compiles to the regex `^[0-9]{2}[a-z]{3,}`. The same pattern can
//! be built through the fluent [`Builder`] API; both paths share one grammar,
//! so positionally invalid patterns are rejected before the regex engine ever
//! sees them.
//!
//! ```
//! use srl::Srl;
//!
//! let srl = Srl::new("capture (letter once or more) as \"word\"")?;
//! assert_eq!(srl.pattern(), "(?<word>[a-z]+)");
//! assert!(srl.is_matching("hello")?);
//! # Ok::<(), srl::SrlError>(())
//! ```

pub mod ast;
pub mod builder;
pub mod cache;
pub mod engine;
pub mod error;
pub mod interpreter;
pub mod matches;
pub mod parser;
pub mod srl;

pub use builder::Builder;
pub use cache::QueryCache;
pub use error::{EngineErrorKind, SrlError, SrlResult};
pub use matches::MatchGroup;
pub use srl::Srl;

pub mod prelude {
    pub use crate::ast::{Category, Op, Param, Policy, Resolved, Token};
    pub use crate::builder::Builder;
    pub use crate::cache::QueryCache;
    pub use crate::error::{EngineErrorKind, SrlError, SrlResult};
    pub use crate::interpreter::interpret;
    pub use crate::matches::MatchGroup;
    pub use crate::parser::parse;
    pub use crate::srl::Srl;
}
