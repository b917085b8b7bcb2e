//! In-memory document backend for pagetweak.
//!
//! Implements [`DocumentTree`](pagetweak_protocols::DocumentTree) over an
//! element arena built from a JSON page fixture:
//!
//! ```json
//! {
//!   "title": "Recipes",
//!   "body": {
//!     "tag": "body",
//!     "styles": { "font-size": "16px" },
//!     "children": [
//!       { "tag": "h1", "styles": { "font-size": "2em" } },
//!       { "tag": "img", "attributes": { "src": "cake.png" } }
//!     ]
//!   }
//! }
//! ```
//!
//! Selectors support the subset the executor targets with: lists, descendant
//! and child combinators, type, `*`, `#id`, `.class` and attribute equality.

mod computed;
mod dom;
mod error;
mod fixture;
mod selector;

pub use dom::Document;
pub use error::LoadError;
pub use fixture::{ElementSpec, PageSpec, PageState};
