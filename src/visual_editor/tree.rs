//! Page tree: the owned root list of component records.
//!
//! DESIGN
//! ======
//! Records are nested owned values; the only way to reach a child is through
//! its parent. Every mutation is a whole-record splice at a matching id, so a
//! renderer never observes a half-updated node. Ids are unique across the
//! whole tree and every operation that introduces records checks that.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::HashSet;

use super::component::{Component, ComponentId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("component not found: {0}")]
    NotFound(ComponentId),
    #[error("duplicate component id: {0}")]
    DuplicateId(ComponentId),
    #[error("component {0} cannot hold children")]
    NotAContainer(ComponentId),
    #[error("component {id} cannot change type from {from} to {to}")]
    TypeChanged {
        id: ComponentId,
        from: &'static str,
        to: &'static str,
    },
    #[error("cannot move {0} into its own subtree")]
    CycleDetected(ComponentId),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageTree {
    roots: Vec<Component>,
}

impl PageTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from top-level records.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if any id appears twice anywhere in the forest.
    pub fn from_roots(roots: Vec<Component>) -> Result<Self, TreeError> {
        let mut seen = HashSet::new();
        for id in roots.iter().flat_map(Component::subtree_ids) {
            if !seen.insert(id.clone()) {
                return Err(TreeError::DuplicateId(id));
            }
        }
        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[Component] {
        &self.roots
    }

    pub fn find(&self, id: &ComponentId) -> Option<&Component> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.find(id).is_some()
    }

    /// Total number of records, nested ones included.
    pub fn len(&self) -> usize {
        self.roots.iter().map(|root| root.subtree_ids().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Id of the container holding `id`, `None` for top-level records.
    pub fn parent_of(&self, id: &ComponentId) -> Option<&ComponentId> {
        parent_in(&self.roots, None, id).flatten()
    }

    /// Insert `record` under `parent` (or at the top level), placed before
    /// the sibling `before` when it exists, appended otherwise.
    ///
    /// # Errors
    ///
    /// `DuplicateId` if any id in `record` already exists, `NotFound` or
    /// `NotAContainer` if `parent` cannot take children.
    pub fn insert(
        &mut self,
        parent: Option<&ComponentId>,
        before: Option<&ComponentId>,
        record: Component,
    ) -> Result<(), TreeError> {
        let existing = self.ids();
        if let Some(dup) = record.subtree_ids().into_iter().find(|id| existing.contains(id)) {
            return Err(TreeError::DuplicateId(dup));
        }
        let siblings = self.children_of_mut(parent)?;
        insert_before(siblings, before, record);
        Ok(())
    }

    /// Splice `record` in place of the stored record with the same id and
    /// return the previous one.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has that id, `TypeChanged` if the variant tag
    /// differs, `DuplicateId` if new descendants collide with other records.
    pub fn replace(&mut self, record: Component) -> Result<Component, TreeError> {
        let current = self
            .find(&record.id)
            .ok_or_else(|| TreeError::NotFound(record.id.clone()))?;

        if current.kind.tag() != record.kind.tag() {
            return Err(TreeError::TypeChanged {
                id: record.id.clone(),
                from: current.kind.tag(),
                to: record.kind.tag(),
            });
        }

        let replaced: HashSet<ComponentId> = current.subtree_ids().into_iter().collect();
        let mut others = self.ids();
        others.retain(|id| !replaced.contains(id));
        let mut incoming = HashSet::new();
        for id in record.subtree_ids() {
            if others.contains(&id) || !incoming.insert(id.clone()) {
                return Err(TreeError::DuplicateId(id));
            }
        }

        let slot = find_in_mut(&mut self.roots, &record.id)
            .ok_or_else(|| TreeError::NotFound(record.id.clone()))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove the record with `id`, together with its subtree, from its
    /// parent's children.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that id.
    pub fn remove(&mut self, id: &ComponentId) -> Result<Component, TreeError> {
        remove_in(&mut self.roots, id).ok_or_else(|| TreeError::NotFound(id.clone()))
    }

    /// Reparent or reorder an existing record.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing record or parent, `NotAContainer` if the
    /// parent cannot take children, `CycleDetected` if `parent` lies inside
    /// the moved subtree.
    pub fn move_node(
        &mut self,
        id: &ComponentId,
        parent: Option<&ComponentId>,
        before: Option<&ComponentId>,
    ) -> Result<(), TreeError> {
        let moving = self.find(id).ok_or_else(|| TreeError::NotFound(id.clone()))?;
        if let Some(parent_id) = parent {
            if moving.subtree_contains(parent_id) {
                return Err(TreeError::CycleDetected(id.clone()));
            }
            let target = self
                .find(parent_id)
                .ok_or_else(|| TreeError::NotFound(parent_id.clone()))?;
            if !target.is_container() {
                return Err(TreeError::NotAContainer(parent_id.clone()));
            }
        }
        if before == Some(id) {
            return Ok(());
        }

        let record = self.remove(id)?;
        let siblings = self.children_of_mut(parent)?;
        insert_before(siblings, before, record);
        Ok(())
    }

    fn ids(&self) -> HashSet<ComponentId> {
        self.roots.iter().flat_map(Component::subtree_ids).collect()
    }

    fn children_of_mut(&mut self, parent: Option<&ComponentId>) -> Result<&mut Vec<Component>, TreeError> {
        let Some(parent_id) = parent else {
            return Ok(&mut self.roots);
        };
        let node = find_in_mut(&mut self.roots, parent_id)
            .ok_or_else(|| TreeError::NotFound(parent_id.clone()))?;
        node.children_mut()
            .ok_or_else(|| TreeError::NotAContainer(parent_id.clone()))
    }
}

fn insert_before(siblings: &mut Vec<Component>, before: Option<&ComponentId>, record: Component) {
    let index = before
        .and_then(|anchor| siblings.iter().position(|c| c.id == *anchor))
        .unwrap_or(siblings.len());
    siblings.insert(index, record);
}

fn find_in<'a>(nodes: &'a [Component], id: &ComponentId) -> Option<&'a Component> {
    for node in nodes {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}

fn find_in_mut<'a>(nodes: &'a mut [Component], id: &ComponentId) -> Option<&'a mut Component> {
    for node in nodes {
        if node.id == *id {
            return Some(node);
        }
        if let Some(children) = node.children_mut() {
            if let Some(found) = find_in_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_in(nodes: &mut Vec<Component>, id: &ComponentId) -> Option<Component> {
    if let Some(index) = nodes.iter().position(|c| c.id == *id) {
        return Some(nodes.remove(index));
    }
    for node in nodes.iter_mut() {
        if let Some(children) = node.children_mut() {
            if let Some(removed) = remove_in(children, id) {
                return Some(removed);
            }
        }
    }
    None
}

/// `Some(parent)` when found; the inner option is `None` at the top level.
fn parent_in<'a>(
    nodes: &'a [Component],
    parent: Option<&'a ComponentId>,
    id: &ComponentId,
) -> Option<Option<&'a ComponentId>> {
    for node in nodes {
        if node.id == *id {
            return Some(parent);
        }
        if let Some(found) = parent_in(node.children(), Some(&node.id), id) {
            return Some(found);
        }
    }
    None
}
