//! Indexed pre-order transformation of spider diagrams
//!
//! [`transform`] walks a diagram parent-before-children, left to right. Every
//! compound node gets the next zero-based pre-order index and is handed to a
//! [`DiagramTransformer`] together with the chain of its compound ancestors.
//! The transformer either leaves the node alone, in which case the walk
//! descends into its operands, or replaces it, in which case the replacement
//! is spliced into the rebuilt tree and the node's subtree is not visited.
//!
//! Indices always refer to positions in the *input* diagram: when a subtree
//! is replaced, the indices of the compound nodes it contained are skipped.
//! Subtrees that are not touched are shared with the input.

use super::diagram::{CompoundDiagram, SpiderDiagram};
use std::sync::Arc;

/// What a transformer wants done with the node it was shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Keep the node and continue into its operands
    Unchanged,
    /// Replace the node (and its whole subtree) with the given diagram
    Replace(SpiderDiagram),
}

/// Location of a compound node within the diagram being transformed
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Pre-order index of the node among all compound nodes
    pub index: usize,
    /// Compound ancestors, root first. Empty for the root.
    pub parents: &'a [&'a CompoundDiagram],
    /// `child_indices[i]` is the operand position taken below `parents[i]`
    pub child_indices: &'a [usize],
}

impl Visit<'_> {
    /// Depth of the node: 0 for the root
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// The immediate compound parent, if any
    pub fn parent(&self) -> Option<&CompoundDiagram> {
        self.parents.last().copied()
    }

    /// Operand position of the node within its immediate parent
    pub fn child_index(&self) -> Option<usize> {
        self.child_indices.last().copied()
    }
}

/// Per-node rewriting logic driven by [`transform`]
pub trait DiagramTransformer {
    type Error;

    /// Called once for every visited compound node, in pre-order.
    ///
    /// Returning an error aborts the whole walk.
    fn transform_compound(
        &mut self,
        node: &CompoundDiagram,
        visit: &Visit<'_>,
    ) -> Result<Rewrite, Self::Error>;
}

/// Transform `diagram`, returning the rewritten diagram.
///
/// When no node is replaced the result shares all of its structure with the
/// input.
pub fn transform<T>(diagram: &SpiderDiagram, transformer: &mut T) -> Result<SpiderDiagram, T::Error>
where
    T: DiagramTransformer + ?Sized,
{
    let mut walker = Walker {
        next_index: 0,
        parents: Vec::new(),
        child_indices: Vec::new(),
    };
    Ok(walker
        .walk(diagram, transformer)?
        .unwrap_or_else(|| diagram.clone()))
}

struct Walker<'d> {
    next_index: usize,
    parents: Vec<&'d CompoundDiagram>,
    child_indices: Vec<usize>,
}

impl<'d> Walker<'d> {
    /// Returns `None` when nothing in `diagram` changed
    fn walk<T>(
        &mut self,
        diagram: &'d SpiderDiagram,
        transformer: &mut T,
    ) -> Result<Option<SpiderDiagram>, T::Error>
    where
        T: DiagramTransformer + ?Sized,
    {
        let SpiderDiagram::Compound(node) = diagram else {
            return Ok(None);
        };
        let node: &'d CompoundDiagram = node;

        let index = self.next_index;
        let visit = Visit {
            index,
            parents: &self.parents,
            child_indices: &self.child_indices,
        };
        if let Rewrite::Replace(replacement) = transformer.transform_compound(node, &visit)? {
            self.next_index += node.compound_count();
            return Ok(Some(replacement));
        }
        self.next_index += 1;

        self.parents.push(node);
        let mut rewritten: Option<Vec<SpiderDiagram>> = None;
        let mut result = Ok(());
        for (i, operand) in node.operands().iter().enumerate() {
            self.child_indices.push(i);
            let outcome = self.walk(operand, transformer);
            self.child_indices.pop();
            match outcome {
                Ok(Some(new_operand)) => {
                    rewritten.get_or_insert_with(|| node.operands().to_vec())[i] = new_operand;
                }
                Ok(None) => {}
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }
        self.parents.pop();
        result?;

        Ok(rewritten.map(|operands| SpiderDiagram::Compound(Arc::new(node.with_operands(operands)))))
    }
}
