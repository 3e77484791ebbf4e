//! The element sum type and its uniform accessor.
//!
//! Grounded on the teacher's `graph/node.rs` (`SymbolInfo`/`GraphNode`) and
//! `graph/edge.rs` (`EdgeKind`), generalized from a single TS/JS/Rust symbol table
//! into the cross-language `Element`/`Relation` pair described in SPEC_FULL §3.

use serde::{Deserialize, Serialize};

/// Lexical visibility of a declaration (SPEC_FULL §3, Glossary "Scope").
///
/// `Other` keeps the type forward-compatible with scope kinds a future language
/// adapter might introduce (e.g. `Namespace`) without a breaking change here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    File,
    Package,
    Project,
    Function,
    Block,
    Other(String),
}

/// An ordered four-integer span: `(start_line, start_col, end_line, end_col)`.
///
/// Lines are 1-based, columns 0-based, matching the teacher's `SymbolInfo`
/// convention. Kept as a plain tuple-like struct rather than two `Position`
/// values since every consumer in this crate treats it as an opaque, orderable
/// span for tie-breaking (§4.5 rule 4: "range start ascending").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Range {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self { start_line, start_col, end_line, end_col }
    }
}

/// The kind of edge between two elements. Reciprocal pairs are installed together
/// by [`crate::relation_binder::bind`] (SPEC_FULL §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    Reference,
    Definition,
    Inherit,
    SuperClass,
    Implement,
    SuperInterface,
}

/// An edge to another element, addressed by `(name, path, range)` rather than by
/// pointer or graph index — this deliberately avoids ownership cycles (SPEC_FULL §9
/// "Cyclic relations"); the far endpoint is looked up through storage when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub element_name: String,
    pub element_path: String,
    pub range: Range,
    pub relation_type: RelationType,
}

/// The element kind tag, exposed uniformly regardless of which `Element` variant
/// it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Class,
    Interface,
    Function,
    Method,
    Variable,
    Reference,
    Call,
}

/// A parsed, language-agnostic symbol or reference site (SPEC_FULL §3).
///
/// `Class`/`Interface`/`Function`/`Method`/`Variable` are declarations and are the
/// only kinds persisted into the occurrence index (§4.3). `Reference`/`Call` are
/// call/type-reference sites, resolved lazily at query time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Class {
        name: String,
        range: Range,
        scope: Scope,
        super_classes: Vec<String>,
        super_interfaces: Vec<String>,
        relations: Vec<Relation>,
    },
    Interface {
        name: String,
        range: Range,
        scope: Scope,
        super_interfaces: Vec<String>,
        relations: Vec<Relation>,
    },
    Function {
        name: String,
        range: Range,
        scope: Scope,
        relations: Vec<Relation>,
    },
    Method {
        name: String,
        range: Range,
        scope: Scope,
        owner: String,
        relations: Vec<Relation>,
    },
    Variable {
        name: String,
        range: Range,
        scope: Scope,
        relations: Vec<Relation>,
    },
    Reference {
        name: String,
        range: Range,
        relations: Vec<Relation>,
    },
    Call {
        name: String,
        range: Range,
        relations: Vec<Relation>,
    },
}

/// Uniform accessors for all seven [`Element`] variants.
///
/// A plain `match`-dispatched trait, not `dyn Trait` — the variant set is closed
/// and known at compile time, so there is no need to pay for a vtable (SPEC_FULL §9
/// "Polymorphic elements").
pub trait ElementLike {
    fn name(&self) -> &str;
    fn range(&self) -> Range;
    fn kind(&self) -> ElementKind;
    /// `Reference`/`Call` sites are not declarations; they report `Scope::File` by
    /// convention so every variant can answer this uniformly.
    fn scope(&self) -> &Scope;
    fn relations(&self) -> &[Relation];
    fn relations_mut(&mut self) -> &mut Vec<Relation>;
}

impl ElementLike for Element {
    fn name(&self) -> &str {
        match self {
            Element::Class { name, .. }
            | Element::Interface { name, .. }
            | Element::Function { name, .. }
            | Element::Method { name, .. }
            | Element::Variable { name, .. }
            | Element::Reference { name, .. }
            | Element::Call { name, .. } => name,
        }
    }

    fn range(&self) -> Range {
        match self {
            Element::Class { range, .. }
            | Element::Interface { range, .. }
            | Element::Function { range, .. }
            | Element::Method { range, .. }
            | Element::Variable { range, .. }
            | Element::Reference { range, .. }
            | Element::Call { range, .. } => *range,
        }
    }

    fn kind(&self) -> ElementKind {
        match self {
            Element::Class { .. } => ElementKind::Class,
            Element::Interface { .. } => ElementKind::Interface,
            Element::Function { .. } => ElementKind::Function,
            Element::Method { .. } => ElementKind::Method,
            Element::Variable { .. } => ElementKind::Variable,
            Element::Reference { .. } => ElementKind::Reference,
            Element::Call { .. } => ElementKind::Call,
        }
    }

    fn scope(&self) -> &Scope {
        match self {
            Element::Class { scope, .. }
            | Element::Interface { scope, .. }
            | Element::Function { scope, .. }
            | Element::Method { scope, .. }
            | Element::Variable { scope, .. } => scope,
            Element::Reference { .. } | Element::Call { .. } => &Scope::File,
        }
    }

    fn relations(&self) -> &[Relation] {
        match self {
            Element::Class { relations, .. }
            | Element::Interface { relations, .. }
            | Element::Function { relations, .. }
            | Element::Method { relations, .. }
            | Element::Variable { relations, .. }
            | Element::Reference { relations, .. }
            | Element::Call { relations, .. } => relations,
        }
    }

    fn relations_mut(&mut self) -> &mut Vec<Relation> {
        match self {
            Element::Class { relations, .. }
            | Element::Interface { relations, .. }
            | Element::Function { relations, .. }
            | Element::Method { relations, .. }
            | Element::Variable { relations, .. }
            | Element::Reference { relations, .. }
            | Element::Call { relations, .. } => relations,
        }
    }
}

/// `true` for the declaration kinds persisted by the indexer (§4.3); `false` for
/// `Reference`/`Call` sites, which are resolved lazily and never stored.
pub fn is_declaration(kind: ElementKind) -> bool {
    matches!(
        kind,
        ElementKind::Class
            | ElementKind::Interface
            | ElementKind::Function
            | ElementKind::Method
            | ElementKind::Variable
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_class() -> Element {
        Element::Class {
            name: "Widget".into(),
            range: Range::new(10, 0, 20, 1),
            scope: Scope::File,
            super_classes: vec![],
            super_interfaces: vec![],
            relations: vec![],
        }
    }

    #[test]
    fn accessors_dispatch_uniformly() {
        let el = sample_class();
        assert_eq!(el.name(), "Widget");
        assert_eq!(el.kind(), ElementKind::Class);
        assert_eq!(el.range(), Range::new(10, 0, 20, 1));
    }

    #[test]
    fn reference_and_call_report_file_scope() {
        let reference = Element::Reference { name: "Foo".into(), range: Range::new(1, 0, 1, 3), relations: vec![] };
        let call = Element::Call { name: "foo".into(), range: Range::new(2, 0, 2, 5), relations: vec![] };
        assert_eq!(*reference.scope(), Scope::File);
        assert_eq!(*call.scope(), Scope::File);
    }

    #[test]
    fn relations_mut_allows_in_place_append() {
        let mut el = sample_class();
        el.relations_mut().push(Relation {
            element_name: "Base".into(),
            element_path: "base.ts".into(),
            range: Range::new(1, 0, 1, 1),
            relation_type: RelationType::SuperClass,
        });
        assert_eq!(el.relations().len(), 1);
    }

    #[test]
    fn declaration_kinds_are_closed() {
        assert!(is_declaration(ElementKind::Class));
        assert!(is_declaration(ElementKind::Variable));
        assert!(!is_declaration(ElementKind::Reference));
        assert!(!is_declaration(ElementKind::Call));
    }
}
