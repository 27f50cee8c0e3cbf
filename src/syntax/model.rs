//
//  model.rs
//  Routemap
//
//  Serde-backed host model. An external front end dumps classes, methods,
//  parameters and annotations into JSON/YAML; this module reads that dump
//  and exposes it through the syntax traits.
//

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Annotation, Class, ConstantResolver, MemberValue, Method, Parameter};
use crate::error::{MapperError, Result};

/// A whole source set: classes, free-standing methods and known constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceModel {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    /// Methods with no containing class (top-level functions).
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    /// Constant reference text → value source text, e.g. `Paths.USERS` → `"/users"`.
    #[serde(default)]
    pub constants: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<AnnotationDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<AnnotationDecl>,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
    #[serde(default)]
    pub annotations: Vec<AnnotationDecl>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationDecl {
    /// Fully qualified annotation name.
    pub name: String,
    #[serde(default)]
    pub attributes: HashMap<String, MemberValue>,
}

/// Handle identifying a method inside a [`SourceModel`].
///
/// Parameter types are part of the handle so overloads stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(class) = &self.class {
            write!(f, "{}#", class)?;
        }
        write!(f, "{}({})", self.method, self.params.join(", "))
    }
}

/// A method together with the class that declares it.
#[derive(Debug, Clone, Copy)]
pub struct MethodView<'a> {
    pub class: Option<&'a ClassDecl>,
    pub decl: &'a MethodDecl,
}

impl SourceModel {
    /// Load a model from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&fs::read_to_string(path)?),
            _ => Err(MapperError::UnsupportedModel(path.to_path_buf())),
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Every method in declaration order: class methods first, then free-standing ones.
    pub fn method_views(&self) -> impl Iterator<Item = MethodView<'_>> {
        let in_classes = self
            .classes
            .iter()
            .flat_map(|class| class.method_views());
        let free = self.methods.iter().map(|decl| MethodView { class: None, decl });
        in_classes.chain(free)
    }
}

impl ConstantResolver for SourceModel {
    fn resolve_constant(&self, reference: &str) -> Option<String> {
        self.constants.get(reference).cloned()
    }
}

impl ClassDecl {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationDecl) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn method_views(&self) -> impl Iterator<Item = MethodView<'_>> {
        self.methods.iter().map(move |decl| MethodView {
            class: Some(self),
            decl,
        })
    }
}

impl MethodDecl {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationDecl) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDecl) -> Self {
        self.parameters.push(parameter);
        self
    }
}

impl ParameterDecl {
    pub fn new(name: &str, type_text: &str) -> Self {
        Self {
            name: name.to_string(),
            type_text: type_text.to_string(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationDecl) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl AnnotationDecl {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: MemberValue) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    /// Shorthand for a quoted string literal attribute.
    pub fn with_literal(self, name: &str, value: &str) -> Self {
        self.with_attribute(name, MemberValue::Literal(format!("\"{value}\"")))
    }
}

impl Annotation for AnnotationDecl {
    fn qualified_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    fn attribute(&self, name: &str) -> Option<&MemberValue> {
        self.attributes.get(name)
    }
}

impl Parameter for ParameterDecl {
    type Annotation = AnnotationDecl;

    fn name(&self) -> &str {
        &self.name
    }

    fn type_text(&self) -> &str {
        &self.type_text
    }

    fn annotations(&self) -> &[AnnotationDecl] {
        &self.annotations
    }
}

impl Class for ClassDecl {
    type Annotation = AnnotationDecl;

    fn annotations(&self) -> &[AnnotationDecl] {
        &self.annotations
    }
}

impl<'a> Method for MethodView<'a> {
    type Annotation = AnnotationDecl;
    type Parameter = ParameterDecl;
    type Class = ClassDecl;
    type Handle = MethodRef;

    fn handle(&self) -> MethodRef {
        MethodRef {
            class: self.class.map(|c| c.name.clone()),
            method: self.decl.name.clone(),
            params: self
                .decl
                .parameters
                .iter()
                .map(|p| p.type_text.clone())
                .collect(),
        }
    }

    fn annotations(&self) -> &[AnnotationDecl] {
        &self.decl.annotations
    }

    fn parameters(&self) -> &[ParameterDecl] {
        &self.decl.parameters
    }

    fn containing_class(&self) -> Option<&ClassDecl> {
        self.class
    }
}
