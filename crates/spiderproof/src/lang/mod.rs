//! Spider diagram language
//!
//! This module provides the diagram term model: operators, zones and regions,
//! primary and compound diagrams, structural equivalence, and the indexed
//! tree transformer used by inference rules to rewrite sub-diagrams.

pub mod diagram;
pub mod operator;
pub mod primary;
pub mod transform;
pub mod zone;


// Re-export commonly used types
pub use diagram::{CompoundDiagram, DiagramError, SpiderDiagram, NULL_SD_TEXT};
pub use operator::Operator;
pub use primary::PrimaryDiagram;
pub use transform::{transform, DiagramTransformer, Rewrite, Visit};
pub use zone::{Region, Zone};
