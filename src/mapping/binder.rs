//
//  binder.rs
//  Routemap
//
//  Rewrites `{name}` placeholders to `{Type:name}` using the method's
//  path-variable parameters.
//

use tracing::debug;

use crate::syntax::{unquote, Annotation, Method, Parameter};

const VALUE: &str = "value";
const NAME: &str = "name";

/// A placeholder name bound to the declared type of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterBinding {
    pub name: String,
    pub type_name: String,
}

/// Whether any path opens a `{...}` placeholder.
pub fn has_placeholders(paths: &[String]) -> bool {
    paths.iter().any(|p| p.contains('{'))
}

/// Binding for one parameter, if it carries a path-variable annotation.
/// Only the first such annotation counts.
pub fn parameter_binding<P>(parameter: &P, path_variable: &str) -> Option<ParameterBinding>
where
    P: Parameter,
{
    let annotation = parameter
        .annotations()
        .iter()
        .find(|a| a.qualified_name() == Some(path_variable))?;

    let name = explicit_name(annotation).unwrap_or_else(|| parameter.name().to_string());

    Some(ParameterBinding {
        name: unquote(&name),
        type_name: unquote(parameter.type_text()),
    })
}

/// Explicit `value` or `name` text, skipping blank ones.
fn explicit_name<A: Annotation>(annotation: &A) -> Option<String> {
    [VALUE, NAME]
        .into_iter()
        .filter_map(|attr| annotation.attribute(attr))
        .map(|value| value.text())
        .find(|text| !text.trim().is_empty())
}

/// Bindings of all parameters in declaration order. A later parameter
/// claiming an already-bound name replaces the earlier type in place.
pub fn parameter_bindings<M: Method>(method: &M, path_variable: &str) -> Vec<ParameterBinding> {
    let mut bindings: Vec<ParameterBinding> = Vec::new();
    for binding in method
        .parameters()
        .iter()
        .filter_map(|p| parameter_binding(p, path_variable))
    {
        match bindings.iter_mut().find(|b| b.name == binding.name) {
            Some(existing) => existing.type_name = binding.type_name,
            None => bindings.push(binding),
        }
    }
    bindings
}

/// Embed bound parameter types into placeholder tokens. Placeholders with
/// no binding are left as they are.
pub fn bind_path_types<M: Method>(method: &M, paths: Vec<String>, path_variable: &str) -> Vec<String> {
    if !has_placeholders(&paths) {
        return paths;
    }

    let bindings = parameter_bindings(method, path_variable);
    debug!(bindings = bindings.len(), "binding path variable types");

    paths
        .into_iter()
        .map(|path| {
            bindings.iter().fold(path, |path, binding| {
                path.replace(
                    &format!("{{{}}}", binding.name),
                    &format!("{{{}:{}}}", binding.type_name, binding.name),
                )
            })
        })
        .collect()
}
