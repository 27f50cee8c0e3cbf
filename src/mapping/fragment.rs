//
//  fragment.rs
//  Routemap
//
//  Path and params fragments of a single annotation, and the class-level
//  prefixes of a method. Results are never empty: absence becomes `[""]`
//  so the route cross product always has at least one row.
//

use super::extract::attribute_values;
use crate::syntax::{Annotation, Class, ConstantResolver, Method};

const PATH: &str = "path";
const VALUE: &str = "value";
const PARAMS: &str = "params";

fn or_blank(values: Vec<String>) -> Vec<String> {
    if values.is_empty() {
        vec![String::new()]
    } else {
        values
    }
}

/// Path fragments of an annotation. `path` wins over its alias `value`.
pub fn resolve_paths<A, R>(annotation: &A, constants: &R) -> Vec<String>
where
    A: Annotation + ?Sized,
    R: ConstantResolver + ?Sized,
{
    let paths = attribute_values(annotation, PATH, constants);
    if !paths.is_empty() {
        return paths;
    }
    or_blank(attribute_values(annotation, VALUE, constants))
}

/// `params` constraints of an annotation.
pub fn resolve_params<A, R>(annotation: &A, constants: &R) -> Vec<String>
where
    A: Annotation + ?Sized,
    R: ConstantResolver + ?Sized,
{
    or_blank(attribute_values(annotation, PARAMS, constants))
}

/// Prefixes declared by the class-level mapping annotations of the
/// method's class, flattened in declaration order.
pub fn class_prefixes<M, R>(method: &M, class_mapping: &str, constants: &R) -> Vec<String>
where
    M: Method,
    R: ConstantResolver + ?Sized,
{
    let prefixes: Vec<String> = method
        .containing_class()
        .map(|class| {
            class
                .annotations()
                .iter()
                .filter(|a| a.qualified_name() == Some(class_mapping))
                .flat_map(|a| resolve_paths(a, constants))
                .collect()
        })
        .unwrap_or_default();

    or_blank(prefixes)
}
