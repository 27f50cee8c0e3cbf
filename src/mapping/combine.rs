//
//  combine.rs
//  Routemap
//

use serde::{Deserialize, Serialize};

/// Root path used when neither class nor method declares a fragment.
pub const ROOT_PATH: &str = "/";

/// One concrete endpoint variant of a handler method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor<H> {
    /// Host handle of the owning method.
    pub method: H,
    pub path: String,
    pub http_method: String,
}

/// Route path for one class prefix, method path and params constraint.
///
/// Fragments are concatenated as-is; no separator is inserted.
pub fn route_path(class_prefix: &str, method_path: &str, params: &str) -> String {
    if class_prefix.trim().is_empty() && method_path.trim().is_empty() {
        return ROOT_PATH.to_string();
    }

    let mut path = format!("{class_prefix}{method_path}");
    if !params.trim().is_empty() {
        path.push_str(" params=");
        path.push_str(params);
    }
    path
}

/// Cross product of class prefixes × method paths × params, class-major.
/// Duplicates are kept.
pub fn combine<H: Clone>(
    class_prefixes: &[String],
    method_paths: &[String],
    params: &[String],
    method: &H,
    http_method: &str,
) -> Vec<RouteDescriptor<H>> {
    let mut routes =
        Vec::with_capacity(class_prefixes.len() * method_paths.len() * params.len());

    for class_prefix in class_prefixes {
        for method_path in method_paths {
            for param in params {
                routes.push(RouteDescriptor {
                    method: method.clone(),
                    path: route_path(class_prefix, method_path, param),
                    http_method: http_method.to_string(),
                });
            }
        }
    }

    routes
}
