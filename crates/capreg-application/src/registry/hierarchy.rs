//! Transitive walk from a concrete type up to the `Service` marker

use std::any::TypeId;
use std::collections::HashMap;

use capreg_domain::{Error, Result, Supertype, TypeKind, TypeNode, Upcast};

/// A type the provider can be looked up as, with the upcast chain leading
/// from the provider's concrete handle to that type's handle
pub(crate) struct Claim {
    pub node: &'static TypeNode,
    pub path: Vec<Upcast>,
}

/// Collect every type of `implementation`'s hierarchy that reaches the marker
///
/// Includes the concrete type itself when it qualifies; never includes the
/// marker. Base edges are walked after interface edges, whether or not an
/// interface qualified. The first path found to a type is the one kept.
pub(crate) fn resolve_claims(provider: &str, implementation: &'static TypeNode) -> Result<Vec<Claim>> {
    let mut walk = Walk {
        provider,
        path: Vec::new(),
        in_progress: Vec::new(),
        resolved: HashMap::new(),
        claims: Vec::new(),
    };
    walk.visit(implementation)?;
    Ok(walk.claims)
}

struct Walk<'a> {
    provider: &'a str,
    path: Vec<Upcast>,
    in_progress: Vec<TypeId>,
    resolved: HashMap<TypeId, bool>,
    claims: Vec<Claim>,
}

impl Walk<'_> {
    fn visit(&mut self, node: &'static TypeNode) -> Result<bool> {
        if node.is_marker() {
            return Ok(true);
        }
        if node.kind == TypeKind::Marker {
            return Err(Error::malformed_descriptor(
                self.provider,
                format!("'{}' is declared as a marker but is not the Service marker", node.name),
            ));
        }

        let id = node.id();
        if let Some(&qualifies) = self.resolved.get(&id) {
            return Ok(qualifies);
        }
        if self.in_progress.contains(&id) {
            return Err(Error::cyclic_hierarchy(self.provider, node.name));
        }

        self.in_progress.push(id);
        let mut qualifies = false;
        for supertype in interfaces_then_bases(node.supertypes) {
            self.path.push(supertype.upcast);
            let reached = self.visit(supertype.node);
            self.path.pop();
            qualifies |= reached?;
        }
        self.in_progress.pop();

        if qualifies {
            self.claims.push(Claim {
                node,
                path: self.path.clone(),
            });
        }
        self.resolved.insert(id, qualifies);
        Ok(qualifies)
    }
}

fn interfaces_then_bases(supertypes: &'static [Supertype]) -> impl Iterator<Item = &'static Supertype> {
    let interfaces = supertypes.iter().filter(|s| s.node.kind != TypeKind::Concrete);
    let bases = supertypes.iter().filter(|s| s.node.kind == TypeKind::Concrete);
    interfaces.chain(bases)
}
