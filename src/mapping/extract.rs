//
//  extract.rs
//  Routemap
//
//  Annotation attribute values → string lists.
//

use crate::syntax::{unquote, Annotation, ConstantResolver, MemberValue};

/// Strings represented by a value node, in source order.
///
/// A reference the host cannot resolve falls back to its own text.
pub fn extract_values<R>(value: &MemberValue, constants: &R) -> Vec<String>
where
    R: ConstantResolver + ?Sized,
{
    match value {
        MemberValue::Literal(text) => vec![unquote(text)],
        MemberValue::Reference(text) => {
            let resolved = constants
                .resolve_constant(text)
                .unwrap_or_else(|| text.clone());
            vec![unquote(&resolved)]
        }
        MemberValue::Array(items) => items
            .iter()
            .flat_map(|item| extract_values(item, constants))
            .collect(),
    }
}

/// Strings of a named attribute; empty when the attribute is absent.
pub fn attribute_values<A, R>(annotation: &A, name: &str, constants: &R) -> Vec<String>
where
    A: Annotation + ?Sized,
    R: ConstantResolver + ?Sized,
{
    annotation
        .attribute(name)
        .map(|value| extract_values(value, constants))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{AnnotationDecl, SourceModel, Unresolved};

    fn lit(text: &str) -> MemberValue {
        MemberValue::Literal(format!("\"{text}\""))
    }

    #[test]
    fn test_literal() {
        assert_eq!(extract_values(&lit("/users"), &Unresolved), vec!["/users"]);
        assert_eq!(extract_values(&lit(""), &Unresolved), vec![""]);
    }

    #[test]
    fn test_reference_resolved_and_fallback() {
        let mut model = SourceModel::default();
        model
            .constants
            .insert("Paths.USERS".into(), "\"/users\"".into());

        let reference = MemberValue::Reference("Paths.USERS".into());
        assert_eq!(extract_values(&reference, &model), vec!["/users"]);

        let unknown = MemberValue::Reference("Paths.UNKNOWN".into());
        assert_eq!(extract_values(&unknown, &model), vec!["Paths.UNKNOWN"]);
    }

    #[test]
    fn test_array_keeps_source_order() {
        let mut model = SourceModel::default();
        model.constants.insert("B".into(), "\"/b\"".into());

        let array = MemberValue::Array(vec![
            lit("/a"),
            MemberValue::Reference("B".into()),
            lit("/c"),
        ]);
        assert_eq!(extract_values(&array, &model), vec!["/a", "/b", "/c"]);
        assert!(extract_values(&MemberValue::Array(vec![]), &model).is_empty());
    }

    #[test]
    fn test_absent_attribute_is_empty() {
        let annotation = AnnotationDecl::new("x.GetMapping").with_literal("value", "/v");
        assert!(attribute_values(&annotation, "path", &Unresolved).is_empty());
        assert_eq!(
            attribute_values(&annotation, "value", &Unresolved),
            vec!["/v"]
        );
    }
}
