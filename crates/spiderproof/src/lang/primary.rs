//! Primary (atomic) spider diagrams

use super::diagram::DiagramError;
use super::zone::{write_quoted, write_string_list, write_zone_list, Region, Zone};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Write};

/// A primary spider diagram: spiders living in regions, plus shaded zones.
///
/// Every spider has exactly one non-empty habitat. Sets are kept ordered so
/// that equality and the textual form do not depend on insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PrimaryRepr", into = "PrimaryRepr")]
pub struct PrimaryDiagram {
    spiders: BTreeSet<String>,
    habitats: BTreeMap<String, Region>,
    shaded_zones: BTreeSet<Zone>,
}

#[derive(Serialize, Deserialize)]
struct PrimaryRepr {
    #[serde(default)]
    spiders: BTreeSet<String>,
    #[serde(default)]
    habitats: BTreeMap<String, Region>,
    #[serde(default)]
    shaded_zones: BTreeSet<Zone>,
}

impl PrimaryDiagram {
    /// Create a primary diagram, checking that spiders and habitats agree.
    pub fn new<S>(
        spiders: impl IntoIterator<Item = S>,
        habitats: impl IntoIterator<Item = (S, Region)>,
        shaded_zones: impl IntoIterator<Item = Zone>,
    ) -> Result<Self, DiagramError>
    where
        S: Into<String>,
    {
        let spiders: BTreeSet<String> = spiders.into_iter().map(Into::into).collect();
        let habitats: BTreeMap<String, Region> = habitats
            .into_iter()
            .map(|(spider, region)| (spider.into(), region))
            .collect();

        if let Some(spider) = habitats.keys().find(|s| !spiders.contains(*s)) {
            return Err(DiagramError::UnknownSpider {
                spider: spider.clone(),
            });
        }
        if let Some(spider) = spiders.iter().find(|s| !habitats.contains_key(*s)) {
            return Err(DiagramError::MissingHabitat {
                spider: spider.clone(),
            });
        }
        if let Some((spider, _)) = habitats.iter().find(|(_, region)| region.is_empty()) {
            return Err(DiagramError::EmptyRegion {
                spider: spider.clone(),
            });
        }

        Ok(PrimaryDiagram {
            spiders,
            habitats,
            shaded_zones: shaded_zones.into_iter().collect(),
        })
    }

    /// A primary diagram with no spiders and no shading
    pub fn empty() -> Self {
        PrimaryDiagram {
            spiders: BTreeSet::new(),
            habitats: BTreeMap::new(),
            shaded_zones: BTreeSet::new(),
        }
    }

    pub fn spiders(&self) -> &BTreeSet<String> {
        &self.spiders
    }

    pub fn habitat(&self, spider: &str) -> Option<&Region> {
        self.habitats.get(spider)
    }

    pub fn habitats(&self) -> &BTreeMap<String, Region> {
        &self.habitats
    }

    pub fn shaded_zones(&self) -> &BTreeSet<Zone> {
        &self.shaded_zones
    }

    /// All contour names mentioned by habitats or shaded zones
    pub fn contours(&self) -> BTreeSet<&str> {
        self.habitats
            .values()
            .flat_map(|region| region.zones())
            .chain(self.shaded_zones.iter())
            .flat_map(|zone| zone.contours())
            .collect()
    }

    /// Same shading and the same multiset of habitats; spider names are ignored.
    pub fn is_sequivalent_to(&self, other: &PrimaryDiagram) -> bool {
        if self == other {
            return true;
        }
        if self.spiders.len() != other.spiders.len() || self.shaded_zones != other.shaded_zones {
            return false;
        }
        let mut mine: Vec<&Region> = self.habitats.values().collect();
        let mut theirs: Vec<&Region> = other.habitats.values().collect();
        mine.sort();
        theirs.sort();
        mine == theirs
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("PrimarySD {spiders = ")?;
        write_string_list(out, &self.spiders)?;
        out.write_str(", sh_zones = ")?;
        write_zone_list(out, &self.shaded_zones)?;
        out.write_str(", habitats = [")?;
        for (i, (spider, region)) in self.habitats.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            out.write_char('(')?;
            write_quoted(out, spider)?;
            out.write_str(", ")?;
            region.write_text(out)?;
            out.write_char(')')?;
        }
        out.write_str("]}")
    }
}

impl TryFrom<PrimaryRepr> for PrimaryDiagram {
    type Error = DiagramError;

    fn try_from(repr: PrimaryRepr) -> Result<Self, Self::Error> {
        PrimaryDiagram::new(repr.spiders, repr.habitats, repr.shaded_zones)
    }
}

impl From<PrimaryDiagram> for PrimaryRepr {
    fn from(diagram: PrimaryDiagram) -> Self {
        PrimaryRepr {
            spiders: diagram.spiders,
            habitats: diagram.habitats,
            shaded_zones: diagram.shaded_zones,
        }
    }
}

impl fmt::Display for PrimaryDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}
