//! Annotation-to-route resolution.
//!
//! One algorithm serves every mapping variant:
//! class prefixes × method paths × params constraints, with `{name}`
//! placeholders rewritten to carry the bound parameter type.

pub mod binder;
pub mod combine;
pub mod extract;
pub mod fragment;
pub mod kind;
pub mod resolve;

pub use binder::{bind_path_types, has_placeholders, parameter_bindings, ParameterBinding};
pub use combine::{combine, route_path, RouteDescriptor, ROOT_PATH};
pub use extract::{attribute_values, extract_values};
pub use fragment::{class_prefixes, resolve_params, resolve_paths};
pub use kind::MappingKind;
pub use resolve::{resolve_method, MappingAnnotation};
