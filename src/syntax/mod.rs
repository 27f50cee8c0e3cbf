//! Host syntax model.
//!
//! The route resolver never parses source. It reads annotations, methods
//! and parameters through the traits below, which the host implements over
//! whatever syntax tree it owns. [`model`] is a serde-backed host that can
//! be loaded from JSON or YAML.

pub mod model;

use serde::{Deserialize, Serialize};

pub use model::{
    AnnotationDecl, ClassDecl, MethodDecl, MethodRef, MethodView, ParameterDecl, SourceModel,
};

/// The value node of an annotation attribute.
///
/// Text is kept as it appears in source, so literals still carry their
/// quotes (`"\"/users\""`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MemberValue {
    /// A literal or other plain expression.
    Literal(String),
    /// A symbolic reference such as `Paths.USERS`, resolved by the host.
    Reference(String),
    /// An array initializer `{a, b}`.
    Array(Vec<MemberValue>),
}

impl MemberValue {
    /// Raw source text of the node.
    pub fn text(&self) -> String {
        match self {
            MemberValue::Literal(text) | MemberValue::Reference(text) => text.clone(),
            MemberValue::Array(items) => {
                let inner: Vec<String> = items.iter().map(MemberValue::text).collect();
                format!("{{{}}}", inner.join(", "))
            }
        }
    }
}

/// One annotation instance.
pub trait Annotation {
    fn qualified_name(&self) -> Option<&str>;

    /// Value node of a named attribute, `None` when not declared.
    fn attribute(&self, name: &str) -> Option<&MemberValue>;
}

/// A method parameter.
pub trait Parameter {
    type Annotation: Annotation;

    fn name(&self) -> &str;

    /// Presentable text of the declared type, e.g. `Long` or `List<String>`.
    fn type_text(&self) -> &str;

    fn annotations(&self) -> &[Self::Annotation];
}

/// The class that declares a method.
pub trait Class {
    type Annotation: Annotation;

    fn annotations(&self) -> &[Self::Annotation];
}

/// A method that may carry mapping annotations.
pub trait Method {
    type Annotation: Annotation;
    type Parameter: Parameter<Annotation = Self::Annotation>;
    type Class: Class<Annotation = Self::Annotation>;
    /// Opaque reference back into the host, copied into every route.
    type Handle: Clone;

    fn handle(&self) -> Self::Handle;
    fn annotations(&self) -> &[Self::Annotation];
    fn parameters(&self) -> &[Self::Parameter];
    fn containing_class(&self) -> Option<&Self::Class>;
}

/// Symbolic reference resolution, delegated to the host.
pub trait ConstantResolver {
    fn resolve_constant(&self, reference: &str) -> Option<String>;
}

/// Resolver that knows no constants; every reference falls back to its text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unresolved;

impl ConstantResolver for Unresolved {
    fn resolve_constant(&self, _reference: &str) -> Option<String> {
        None
    }
}

/// The element an annotation is attached to.
pub enum AnnotatedElement<'a, M: Method> {
    Method(&'a M),
    Class(&'a M::Class),
    Parameter(&'a M::Parameter),
}

impl<'a, M: Method> AnnotatedElement<'a, M> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            AnnotatedElement::Method(_) => "method",
            AnnotatedElement::Class(_) => "class",
            AnnotatedElement::Parameter(_) => "parameter",
        }
    }
}

/// Strip surrounding double quotes.
pub fn unquote(text: &str) -> String {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
        .to_string()
}
