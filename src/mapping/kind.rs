//
//  kind.rs
//  Routemap
//

use std::fmt;

use serde::{Deserialize, Serialize};

/// The mapping-annotation variants. All share one resolution algorithm;
/// only the HTTP method differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingKind {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    /// Generic request mapping; HTTP methods come from its `method` attribute.
    Request,
}

/// HTTP method used by a request mapping that lists none.
pub const DEFAULT_REQUEST_METHOD: &str = "GET";

impl MappingKind {
    /// Fixed HTTP method name, `None` for [`MappingKind::Request`].
    pub fn http_method(&self) -> Option<&'static str> {
        match self {
            MappingKind::Get => Some("GET"),
            MappingKind::Post => Some("POST"),
            MappingKind::Put => Some("PUT"),
            MappingKind::Delete => Some("DELETE"),
            MappingKind::Patch => Some("PATCH"),
            MappingKind::Request => None,
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MappingKind::Get => "GetMapping",
            MappingKind::Post => "PostMapping",
            MappingKind::Put => "PutMapping",
            MappingKind::Delete => "DeleteMapping",
            MappingKind::Patch => "PatchMapping",
            MappingKind::Request => "RequestMapping",
        };
        f.write_str(name)
    }
}

/// Turn a `method` attribute value such as `RequestMethod.POST` into `POST`.
pub fn request_method_name(raw: &str) -> String {
    raw.rsplit('.')
        .next()
        .unwrap_or(raw)
        .trim()
        .to_ascii_uppercase()
}
