//! [`bind`] (SPEC_FULL §4.4): installs a reciprocal pair of relations between
//! two elements, deduplicating on exact edge equality.
//!
//! Grounded on the teacher's `graph/edge.rs` (`EdgeKind`) generalized from a
//! petgraph-indexed edge to the pointer-free `Relation` shape (§9 "Cyclic
//! relations").

use crate::model::{Element, ElementLike, Relation, RelationType};

/// Appends `Relation{to, r1}` to `from` and `Relation{from, r2}` to `to`,
/// suppressing the append on either side if an equal relation already exists
/// (§4.4 invariant: `|from.relations ∩ edges_to(to)| <= 1`, reciprocally).
///
/// `Element` carries no `path` field of its own (paths live on the owning
/// `FileElementTable`), so the caller supplies each endpoint's file path
/// alongside the element.
pub fn bind(
    from: &mut Element,
    from_path: &str,
    to: &mut Element,
    to_path: &str,
    r1: RelationType,
    r2: RelationType,
) {
    let forward = Relation {
        element_name: to.name().to_string(),
        element_path: to_path.to_string(),
        range: to.range(),
        relation_type: r1,
    };
    let backward = Relation {
        element_name: from.name().to_string(),
        element_path: from_path.to_string(),
        range: from.range(),
        relation_type: r2,
    };

    if !from.relations().contains(&forward) {
        from.relations_mut().push(forward);
    }
    if !to.relations().contains(&backward) {
        to.relations_mut().push(backward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Range, Scope};

    fn call(name: &str) -> Element {
        Element::Call { name: name.into(), range: Range::new(1, 0, 1, 5), relations: vec![] }
    }

    fn function(name: &str) -> Element {
        Element::Function { name: name.into(), range: Range::new(10, 0, 20, 0), scope: Scope::File, relations: vec![] }
    }

    #[test]
    fn installs_reciprocal_edges() {
        let mut caller = call("doThing");
        let mut callee = function("doThing");

        bind(&mut caller, "a.js", &mut callee, "b.js", RelationType::Reference, RelationType::Definition);

        assert_eq!(caller.relations().len(), 1);
        assert_eq!(caller.relations()[0].relation_type, RelationType::Reference);
        assert_eq!(caller.relations()[0].element_path, "b.js");

        assert_eq!(callee.relations().len(), 1);
        assert_eq!(callee.relations()[0].relation_type, RelationType::Definition);
        assert_eq!(callee.relations()[0].element_path, "a.js");
    }

    #[test]
    fn rebinding_identical_edge_is_idempotent() {
        let mut caller = call("doThing");
        let mut callee = function("doThing");

        bind(&mut caller, "a.js", &mut callee, "b.js", RelationType::Reference, RelationType::Definition);
        bind(&mut caller, "a.js", &mut callee, "b.js", RelationType::Reference, RelationType::Definition);

        assert_eq!(caller.relations().len(), 1);
        assert_eq!(callee.relations().len(), 1);
    }

    #[test]
    fn class_extends_installs_inherit_and_superclass() {
        let mut child = Element::Class {
            name: "Dog".into(),
            range: Range::new(1, 0, 5, 0),
            scope: Scope::File,
            super_classes: vec!["Animal".into()],
            super_interfaces: vec![],
            relations: vec![],
        };
        let mut parent = Element::Class {
            name: "Animal".into(),
            range: Range::new(10, 0, 20, 0),
            scope: Scope::File,
            super_classes: vec![],
            super_interfaces: vec![],
            relations: vec![],
        };

        bind(&mut child, "dog.ts", &mut parent, "animal.ts", RelationType::Inherit, RelationType::SuperClass);

        assert_eq!(child.relations()[0].relation_type, RelationType::Inherit);
        assert_eq!(parent.relations()[0].relation_type, RelationType::SuperClass);
    }
}
