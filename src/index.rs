//
//  index.rs
//  Routemap
//
//  Consolidated route listing for a whole source model.
//

use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::info;

use crate::config::FamilyConfig;
use crate::mapping::{resolve_method, RouteDescriptor};
use crate::syntax::{ClassDecl, MethodRef, MethodView, SourceModel};

pub type Route = RouteDescriptor<MethodRef>;

/// Resolve every mapping annotation in the model.
///
/// Classes are resolved in parallel; output order is declaration order
/// (classes, their methods, each method's annotations, then free methods).
pub fn build_index(model: &SourceModel, family: &FamilyConfig) -> Vec<Route> {
    let per_class: Vec<Vec<Route>> = model
        .classes
        .par_iter()
        .map(|class| class_routes(class, model, family))
        .collect();

    let free = model.methods.iter().flat_map(|decl| {
        let view = MethodView { class: None, decl };
        resolve_method(&view, family, model)
    });

    let routes: Vec<Route> = per_class.into_iter().flatten().chain(free).collect();

    info!(
        classes = model.classes.len(),
        routes = routes.len(),
        "route index built"
    );
    routes
}

fn class_routes(class: &ClassDecl, model: &SourceModel, family: &FamilyConfig) -> Vec<Route> {
    class
        .method_views()
        .flat_map(|view| resolve_method(&view, family, model))
        .collect()
}

/// Keep routes answering to one HTTP method (case-insensitive).
pub fn filter_by_method(routes: Vec<Route>, http_method: &str) -> Vec<Route> {
    routes
        .into_iter()
        .filter(|r| r.http_method.eq_ignore_ascii_case(http_method))
        .collect()
}

/// Summary counts over a route listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub routes: usize,
    /// Distinct handler methods with at least one route.
    pub methods: usize,
    pub by_method: BTreeMap<String, usize>,
}

impl IndexStats {
    pub fn from_routes(routes: &[Route]) -> Self {
        let mut by_method = BTreeMap::new();
        for route in routes {
            *by_method.entry(route.http_method.clone()).or_insert(0) += 1;
        }
        let methods: HashSet<&MethodRef> = routes.iter().map(|r| &r.method).collect();

        Self {
            routes: routes.len(),
            methods: methods.len(),
            by_method,
        }
    }
}
