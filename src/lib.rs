//! A data-driven URL router with reverse URI generation.
//!
//! An unordered list of `(method, template, handler, optional tag)` routes is
//! compiled once into an immutable [`Router`]. Matching walks a trie with a
//! fixed precedence at every depth: literal segments beat captures, captures
//! beat catch-alls, and longer templates beat shorter ones. Each route also
//! compiles a reverse function that substitutes parameters back into the
//! template and serializes leftover keys as a query string.
//!
//! ```
//! use lattice_router::{routes, CompileOptions, Method, Router};
//!
//! let router: Router<u32, &str> = Router::compile(
//!     routes! {
//!         GET "/items/:id" => 1 => "item-detail",
//!         GET "/items/all" => 2,
//!         GET "/files/:*" => 3,
//!         ANY "/health" => 4,
//!     },
//!     CompileOptions::default(),
//! )
//! .unwrap();
//!
//! let (handler, params) = router.find("/items/42", Method::Get).unwrap();
//! assert_eq!(*handler, 1);
//! assert_eq!(params.get("id"), Some("42"));
//!
//! assert_eq!(*router.find("/items/all", Method::Get).unwrap().0, 2);
//! assert_eq!(
//!     router.find("/files/a/b", Method::Get).unwrap().1.get("*"),
//!     Some("a/b")
//! );
//!
//! let uri = router
//!     .uri_for_tag(&"item-detail", &[("id", "7"), ("ref", "a b")])
//!     .unwrap();
//! assert_eq!(uri.to_string(), "/items/7?ref=a%20b");
//! ```

#![forbid(unsafe_code)]

mod error;
mod macros;
mod method;
mod pattern;
mod percent;
mod reverse;
mod router;
mod tree;

pub use self::error::{CompileError, ReverseError};
pub use self::method::{InvalidMethod, Method};
pub use self::reverse::{ReverseFn, ReverseUri};
pub use self::router::{CompileOptions, Params, Route, Router};
