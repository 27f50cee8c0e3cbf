//
//  resolve.rs
//  Routemap
//
//  Per-annotation orchestration: class prefixes, method paths (with bound
//  path-variable types), params, then the route cross product.
//

use tracing::debug;

use super::binder::bind_path_types;
use super::combine::{combine, RouteDescriptor};
use super::extract::attribute_values;
use super::fragment::{class_prefixes, resolve_params, resolve_paths};
use super::kind::{request_method_name, MappingKind, DEFAULT_REQUEST_METHOD};
use crate::config::FamilyConfig;
use crate::error::{MapperError, Result};
use crate::syntax::{AnnotatedElement, Annotation, ConstantResolver, Method};

const METHOD: &str = "method";

/// A mapping annotation placed on a handler method.
pub struct MappingAnnotation<'a, M: Method> {
    kind: MappingKind,
    annotation: &'a M::Annotation,
    method: &'a M,
}

impl<'a, M: Method> MappingAnnotation<'a, M> {
    pub fn new(kind: MappingKind, annotation: &'a M::Annotation, method: &'a M) -> Self {
        Self {
            kind,
            annotation,
            method,
        }
    }

    /// Build from whatever element the host found the annotation on.
    /// Mapping annotations only make sense on methods.
    pub fn from_element(
        kind: MappingKind,
        annotation: &'a M::Annotation,
        element: AnnotatedElement<'a, M>,
    ) -> Result<Self> {
        match element {
            AnnotatedElement::Method(method) => Ok(Self::new(kind, annotation, method)),
            other => Err(MapperError::NotAMethod(other.kind_name())),
        }
    }

    pub fn kind(&self) -> MappingKind {
        self.kind
    }

    /// HTTP methods this annotation answers to.
    pub fn http_methods<R>(&self, constants: &R) -> Vec<String>
    where
        R: ConstantResolver + ?Sized,
    {
        if let Some(fixed) = self.kind.http_method() {
            return vec![fixed.to_string()];
        }

        let listed: Vec<String> = attribute_values(self.annotation, METHOD, constants)
            .iter()
            .map(|raw| request_method_name(raw))
            .filter(|name| !name.is_empty())
            .collect();

        if listed.is_empty() {
            vec![DEFAULT_REQUEST_METHOD.to_string()]
        } else {
            listed
        }
    }

    /// Every route this annotation maps its method to.
    pub fn resolve<R>(&self, family: &FamilyConfig, constants: &R) -> Vec<RouteDescriptor<M::Handle>>
    where
        R: ConstantResolver + ?Sized,
    {
        let prefixes = class_prefixes(self.method, &family.request_mapping, constants);
        let paths = bind_path_types(
            self.method,
            resolve_paths(self.annotation, constants),
            &family.path_variable,
        );
        let params = resolve_params(self.annotation, constants);
        let handle = self.method.handle();

        let routes: Vec<_> = self
            .http_methods(constants)
            .iter()
            .flat_map(|http_method| combine(&prefixes, &paths, &params, &handle, http_method))
            .collect();

        debug!(kind = %self.kind, routes = routes.len(), "resolved mapping annotation");
        routes
    }
}

/// Routes of every mapping annotation declared on a method, in declaration order.
pub fn resolve_method<M, R>(
    method: &M,
    family: &FamilyConfig,
    constants: &R,
) -> Vec<RouteDescriptor<M::Handle>>
where
    M: Method,
    R: ConstantResolver + ?Sized,
{
    method
        .annotations()
        .iter()
        .filter_map(|annotation| {
            let kind = family.kind_of(annotation.qualified_name()?)?;
            Some(MappingAnnotation::new(kind, annotation, method))
        })
        .flat_map(|mapping| mapping.resolve(family, constants))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{
        AnnotationDecl, ClassDecl, MemberValue, MethodDecl, MethodRef, MethodView,
        ParameterDecl, SourceModel, Unresolved,
    };

    fn family() -> FamilyConfig {
        FamilyConfig::default()
    }

    fn lit(text: &str) -> MemberValue {
        MemberValue::Literal(format!("\"{text}\""))
    }

    fn resolve_first(class: Option<&ClassDecl>, decl: &MethodDecl) -> Vec<RouteDescriptor<MethodRef>> {
        let view = MethodView { class, decl };
        let family = family();
        let kind = family.kind_of(&decl.annotations[0].name).unwrap();
        MappingAnnotation::new(kind, &decl.annotations[0], &view).resolve(&family, &Unresolved)
    }

    fn route_paths(routes: &[RouteDescriptor<MethodRef>]) -> Vec<&str> {
        routes.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_example_scenario() {
        let f = family();
        let class = ClassDecl::new("UserController")
            .with_annotation(AnnotationDecl::new(&f.request_mapping).with_literal("path", "/api"));
        let decl = MethodDecl::new("getUser")
            .with_annotation(AnnotationDecl::new(&f.get_mapping).with_literal("path", "/users/{id}"))
            .with_parameter(
                ParameterDecl::new("id", "Long")
                    .with_annotation(AnnotationDecl::new(&f.path_variable)),
            );

        let routes = resolve_first(Some(&class), &decl);
        assert_eq!(
            routes,
            vec![RouteDescriptor {
                method: MethodRef {
                    class: Some("UserController".into()),
                    method: "getUser".into(),
                    params: vec!["Long".into()],
                },
                path: "/api/users/{Long:id}".into(),
                http_method: "GET".into(),
            }]
        );
    }

    #[test]
    fn test_bare_annotation_maps_to_root() {
        let decl = MethodDecl::new("index").with_annotation(AnnotationDecl::new(&family().post_mapping));
        let routes = resolve_first(None, &decl);
        assert_eq!(route_paths(&routes), vec!["/"]);
        assert_eq!(routes[0].http_method, "POST");
    }

    #[test]
    fn test_array_value_one_route_per_element() {
        let decl = MethodDecl::new("list").with_annotation(
            AnnotationDecl::new(&family().get_mapping).with_attribute(
                "value",
                MemberValue::Array(vec![lit("/a"), lit("/b"), lit("/c")]),
            ),
        );
        assert_eq!(route_paths(&resolve_first(None, &decl)), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_unbound_placeholder_survives() {
        let decl = MethodDecl::new("get")
            .with_annotation(AnnotationDecl::new(&family().get_mapping).with_literal("value", "/items/{x}"))
            .with_parameter(ParameterDecl::new("x", "String"));
        assert_eq!(route_paths(&resolve_first(None, &decl)), vec!["/items/{x}"]);
    }

    #[test]
    fn test_params_suffix() {
        let decl = MethodDecl::new("search").with_annotation(
            AnnotationDecl::new(&family().get_mapping)
                .with_literal("value", "/search")
                .with_attribute("params", MemberValue::Array(vec![lit("q"), lit("")])),
        );
        assert_eq!(
            route_paths(&resolve_first(None, &decl)),
            vec!["/search params=q", "/search"]
        );
    }

    #[test]
    fn test_cross_product_count() {
        let f = family();
        let class = ClassDecl::new("Multi").with_annotation(
            AnnotationDecl::new(&f.request_mapping)
                .with_attribute("value", MemberValue::Array(vec![lit("/v1"), lit("/v2")])),
        );
        let decl = MethodDecl::new("m").with_annotation(
            AnnotationDecl::new(&f.put_mapping)
                .with_attribute("path", MemberValue::Array(vec![lit("/a"), lit("/b"), lit("/c")]))
                .with_attribute("params", MemberValue::Array(vec![lit("x"), lit("y")])),
        );
        let routes = resolve_first(Some(&class), &decl);
        assert_eq!(routes.len(), 2 * 3 * 2);
        assert_eq!(routes[0].path, "/v1/a params=x");
        assert_eq!(routes[11].path, "/v2/c params=y");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let decl = MethodDecl::new("get")
            .with_annotation(AnnotationDecl::new(&family().get_mapping).with_literal("value", "/{id}"))
            .with_parameter(
                ParameterDecl::new("id", "int").with_annotation(AnnotationDecl::new(&family().path_variable)),
            );
        assert_eq!(resolve_first(None, &decl), resolve_first(None, &decl));
    }

    #[test]
    fn test_reference_resolved_through_host() {
        let f = family();
        let mut model = SourceModel::default();
        model.constants.insert("Paths.USERS".into(), "\"/users\"".into());
        let decl = MethodDecl::new("list").with_annotation(
            AnnotationDecl::new(&f.get_mapping)
                .with_attribute("value", MemberValue::Reference("Paths.USERS".into())),
        );
        let view = MethodView { class: None, decl: &decl };

        let routes = resolve_method(&view, &f, &model);
        assert_eq!(route_paths(&routes), vec!["/users"]);
    }

    #[test]
    fn test_request_mapping_methods() {
        let f = family();
        let decl = MethodDecl::new("save").with_annotation(
            AnnotationDecl::new(&f.request_mapping)
                .with_literal("value", "/save")
                .with_attribute(
                    "method",
                    MemberValue::Array(vec![
                        MemberValue::Reference("RequestMethod.POST".into()),
                        MemberValue::Reference("RequestMethod.PUT".into()),
                    ]),
                ),
        );
        let routes = resolve_first(None, &decl);
        let methods: Vec<&str> = routes.iter().map(|r| r.http_method.as_str()).collect();
        assert_eq!(methods, vec!["POST", "PUT"]);
        assert!(routes.iter().all(|r| r.path == "/save"));
    }

    #[test]
    fn test_request_mapping_defaults_to_get() {
        let decl = MethodDecl::new("any")
            .with_annotation(AnnotationDecl::new(&family().request_mapping).with_literal("value", "/any"));
        let routes = resolve_first(None, &decl);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].http_method, "GET");
    }

    #[test]
    fn test_resolve_method_skips_foreign_annotations() {
        let f = family();
        let decl = MethodDecl::new("get")
            .with_annotation(AnnotationDecl::new("java.lang.Deprecated"))
            .with_annotation(AnnotationDecl::new(&f.get_mapping).with_literal("value", "/a"))
            .with_annotation(AnnotationDecl::new(&f.delete_mapping).with_literal("value", "/a"));
        let view = MethodView { class: None, decl: &decl };

        let routes = resolve_method(&view, &f, &Unresolved);
        let methods: Vec<&str> = routes.iter().map(|r| r.http_method.as_str()).collect();
        assert_eq!(methods, vec!["GET", "DELETE"]);
    }

    #[test]
    fn test_from_element_rejects_non_methods() {
        let f = family();
        let class = ClassDecl::new("C");
        let annotation = AnnotationDecl::new(&f.get_mapping);

        let on_class = MappingAnnotation::<MethodView<'_>>::from_element(
            MappingKind::Get,
            &annotation,
            AnnotatedElement::Class(&class),
        );
        assert!(matches!(on_class, Err(MapperError::NotAMethod("class"))));

        let decl = MethodDecl::new("m");
        let view = MethodView { class: None, decl: &decl };
        let on_method = MappingAnnotation::from_element(
            MappingKind::Get,
            &annotation,
            AnnotatedElement::Method(&view),
        )
        .unwrap();
        assert_eq!(on_method.kind(), MappingKind::Get);
        assert_eq!(on_method.resolve(&f, &Unresolved)[0].path, "/");
    }
}
