//! Dot/bracket path lookup over parsed document trees.
//!
//! ```
//! use treepath::{Value, resolve, value_as_string};
//!
//! let doc = Value::from_yaml_str("
//! service:
//!   component:
//!     - name: auth
//!       port: 8080
//!   enabled: true
//! ").unwrap();
//!
//! let found = resolve(&doc, "service.component[0].name").unwrap();
//! assert_eq!(found.path, "service.component[0].name");
//! assert_eq!(value_as_string(&doc, "service.enabled"), "true");
//! ```

pub mod cli;
pub mod convert;
pub mod error;
pub mod lexer;
pub mod resolver;
pub mod search;
pub mod syntax;
pub mod value;

pub use error::{Error, Result};
pub use lexer::{Lexer, Token, TokenKind};
pub use resolver::{Resolved, Resolver, leaf_count, resolve, value_as_string};
pub use search::{search_keys, search_keys_with};
pub use syntax::PathSyntax;
pub use value::Value;
