//! # Routemap
//!
//! Resolves the HTTP routes a codebase exposes from the request-mapping
//! annotations on its handler methods.
//!
//! Routemap does not parse source. A host (an IDE, an indexer, a JSON dump
//! written by some front end) exposes classes, methods, parameters and
//! annotations through the [`syntax`] traits, and routemap computes the
//! routes:
//!
//! - class-level prefixes × method paths × `params` constraints
//! - `path` and `value` treated as aliases, arrays expanded in source order
//! - `{id}` placeholders rewritten to `{Long:id}` from path-variable parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use routemap::syntax::{AnnotationDecl, ClassDecl, MethodDecl, ParameterDecl, SourceModel};
//! use routemap::{build_index, FamilyConfig};
//!
//! let family = FamilyConfig::default();
//! let controller = ClassDecl::new("UserController")
//!     .with_annotation(AnnotationDecl::new(&family.request_mapping).with_literal("path", "/api"))
//!     .with_method(
//!         MethodDecl::new("getUser")
//!             .with_annotation(AnnotationDecl::new(&family.get_mapping).with_literal("path", "/users/{id}"))
//!             .with_parameter(
//!                 ParameterDecl::new("id", "Long")
//!                     .with_annotation(AnnotationDecl::new(&family.path_variable)),
//!             ),
//!     );
//! let model = SourceModel { classes: vec![controller], ..Default::default() };
//!
//! let routes = build_index(&model, &family);
//! assert_eq!(routes[0].path, "/api/users/{Long:id}");
//! assert_eq!(routes[0].http_method, "GET");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod mapping;
pub mod syntax;

// Re-exports for convenience
pub use config::{FamilyConfig, MapperConfig};
pub use error::{MapperError, Result};
pub use index::{build_index, IndexStats, Route};
pub use mapping::{resolve_method, MappingAnnotation, MappingKind, RouteDescriptor};
