//! Spider diagram terms
//!
//! A spider diagram is an immutable tree. Leaves are primary diagrams or the
//! null diagram (the tautology `⊤`); inner nodes are compound diagrams that
//! join one or two operands with a logical operator. Subtrees are shared
//! through `Arc`, so cloning a diagram never copies its structure.

use super::operator::Operator;
use super::primary::PrimaryDiagram;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::sync::Arc;
use thiserror::Error;

/// Identifier of the null spider diagram in the textual representation
pub const NULL_SD_TEXT: &str = "NullSD";

/// Errors raised while constructing diagrams
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("operator {operator:?} expects {expected} operand(s), got {found}")]
    ArityMismatch {
        operator: Operator,
        expected: usize,
        found: usize,
    },

    #[error("spider '{spider}' has no habitat")]
    MissingHabitat { spider: String },

    #[error("habitat given for unknown spider '{spider}'")]
    UnknownSpider { spider: String },

    #[error("habitat of spider '{spider}' is an empty region")]
    EmptyRegion { spider: String },

    #[error("contour '{contour}' is both inside and outside the zone")]
    InvalidZone { contour: String },
}

/// A spider diagram term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpiderDiagram {
    /// The null diagram: trivially true, has no children
    Null,
    Primary(Arc<PrimaryDiagram>),
    Compound(Arc<CompoundDiagram>),
}

/// A diagram joining its operands with a logical operator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CompoundRepr", into = "CompoundRepr")]
pub struct CompoundDiagram {
    operator: Operator,
    operands: Vec<SpiderDiagram>,
}

#[derive(Serialize, Deserialize)]
struct CompoundRepr {
    operator: Operator,
    operands: Vec<SpiderDiagram>,
}

impl SpiderDiagram {
    pub fn null() -> Self {
        SpiderDiagram::Null
    }

    pub fn primary(diagram: PrimaryDiagram) -> Self {
        SpiderDiagram::Primary(Arc::new(diagram))
    }

    /// Create a compound diagram, checking the operator's arity
    pub fn compound(
        operator: Operator,
        operands: Vec<SpiderDiagram>,
    ) -> Result<Self, DiagramError> {
        Ok(SpiderDiagram::Compound(Arc::new(CompoundDiagram::new(
            operator, operands,
        )?)))
    }

    /// Shorthand for a compound diagram with a binary operator
    pub fn binary(
        operator: Operator,
        left: SpiderDiagram,
        right: SpiderDiagram,
    ) -> Result<Self, DiagramError> {
        Self::compound(operator, vec![left, right])
    }

    /// The negation of `operand`
    pub fn negation(operand: SpiderDiagram) -> Self {
        SpiderDiagram::Compound(Arc::new(CompoundDiagram {
            operator: Operator::Negation,
            operands: vec![operand],
        }))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SpiderDiagram::Null)
    }

    pub fn as_compound(&self) -> Option<&CompoundDiagram> {
        match self {
            SpiderDiagram::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_primary(&self) -> Option<&PrimaryDiagram> {
        match self {
            SpiderDiagram::Primary(p) => Some(p),
            _ => None,
        }
    }

    /// Structural equivalence: same logical content regardless of incidental
    /// representation details (spider names in primary diagrams).
    pub fn is_sequivalent_to(&self, other: &SpiderDiagram) -> bool {
        match (self, other) {
            (SpiderDiagram::Null, SpiderDiagram::Null) => true,
            (SpiderDiagram::Primary(a), SpiderDiagram::Primary(b)) => {
                Arc::ptr_eq(a, b) || a.is_sequivalent_to(b)
            }
            (SpiderDiagram::Compound(a), SpiderDiagram::Compound(b)) => {
                Arc::ptr_eq(a, b) || a.is_sequivalent_to(b)
            }
            _ => false,
        }
    }

    /// Number of compound nodes in this diagram.
    ///
    /// Pre-order indices of sub-diagrams range over `0..compound_count()`.
    pub fn compound_count(&self) -> usize {
        match self {
            SpiderDiagram::Compound(c) => c.compound_count(),
            _ => 0,
        }
    }

    /// The compound node with the given pre-order index
    pub fn compound_at(&self, index: usize) -> Option<&CompoundDiagram> {
        let compound = self.as_compound()?;
        if index == 0 {
            return Some(compound);
        }
        let mut remaining = index - 1;
        for operand in &compound.operands {
            let count = operand.compound_count();
            if remaining < count {
                return operand.compound_at(remaining);
            }
            remaining -= count;
        }
        None
    }

    /// Append the textual representation of this diagram to `out`
    pub fn write_text<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            SpiderDiagram::Null => out.write_str(NULL_SD_TEXT),
            SpiderDiagram::Primary(p) => p.write_text(out),
            SpiderDiagram::Compound(c) => c.write_text(out),
        }
    }
}

impl From<PrimaryDiagram> for SpiderDiagram {
    fn from(diagram: PrimaryDiagram) -> Self {
        SpiderDiagram::primary(diagram)
    }
}

impl From<CompoundDiagram> for SpiderDiagram {
    fn from(diagram: CompoundDiagram) -> Self {
        SpiderDiagram::Compound(Arc::new(diagram))
    }
}

impl CompoundDiagram {
    pub fn new(operator: Operator, operands: Vec<SpiderDiagram>) -> Result<Self, DiagramError> {
        if operands.len() != operator.arity() {
            return Err(DiagramError::ArityMismatch {
                operator,
                expected: operator.arity(),
                found: operands.len(),
            });
        }
        Ok(CompoundDiagram { operator, operands })
    }

    /// Rebuild this node with new operands of the same count
    pub(crate) fn with_operands(&self, operands: Vec<SpiderDiagram>) -> Self {
        debug_assert_eq!(operands.len(), self.operands.len());
        CompoundDiagram {
            operator: self.operator,
            operands,
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[SpiderDiagram] {
        &self.operands
    }

    /// Operand at `index`, if the operator has that many
    pub fn operand(&self, index: usize) -> Option<&SpiderDiagram> {
        self.operands.get(index)
    }

    pub fn arity(&self) -> usize {
        self.operands.len()
    }

    /// Number of compound nodes in the subtree rooted here (including itself)
    pub fn compound_count(&self) -> usize {
        1 + self
            .operands
            .iter()
            .map(SpiderDiagram::compound_count)
            .sum::<usize>()
    }

    pub fn is_sequivalent_to(&self, other: &CompoundDiagram) -> bool {
        self.operator == other.operator
            && self.operands.len() == other.operands.len()
            && self
                .operands
                .iter()
                .zip(&other.operands)
                .all(|(a, b)| a.is_sequivalent_to(b))
    }

    /// Whether both operands of a binary diagram are s-equivalent.
    /// Always false for unary diagrams.
    pub fn operands_sequivalent(&self) -> bool {
        matches!(self.operands.as_slice(), [left, right] if left.is_sequivalent_to(right))
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> fmt::Result {
        let kind = if self.operator.is_binary() {
            "BinarySD"
        } else {
            "UnarySD"
        };
        write!(out, "{} {{operator = \"{}\"", kind, self.operator.token())?;
        for (i, operand) in self.operands.iter().enumerate() {
            write!(out, ", arg{} = ", i + 1)?;
            operand.write_text(out)?;
        }
        out.write_char('}')
    }
}

impl TryFrom<CompoundRepr> for CompoundDiagram {
    type Error = DiagramError;

    fn try_from(repr: CompoundRepr) -> Result<Self, Self::Error> {
        CompoundDiagram::new(repr.operator, repr.operands)
    }
}

impl From<CompoundDiagram> for CompoundRepr {
    fn from(diagram: CompoundDiagram) -> Self {
        CompoundRepr {
            operator: diagram.operator,
            operands: diagram.operands,
        }
    }
}

impl fmt::Display for SpiderDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

impl fmt::Display for CompoundDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}
