//! Zones and regions of primary spider diagrams

use super::diagram::DiagramError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Write};

/// A zone: the area inside every `in_contours` contour and outside every
/// `out_contours` contour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "ZoneRepr", into = "ZoneRepr")]
pub struct Zone {
    in_contours: BTreeSet<String>,
    out_contours: BTreeSet<String>,
}

#[derive(Serialize, Deserialize)]
struct ZoneRepr {
    #[serde(rename = "in", default)]
    in_contours: BTreeSet<String>,
    #[serde(rename = "out", default)]
    out_contours: BTreeSet<String>,
}

impl Zone {
    /// Create a zone. Fails if a contour is both inside and outside.
    pub fn new<I, O, S, T>(in_contours: I, out_contours: O) -> Result<Self, DiagramError>
    where
        I: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let in_contours: BTreeSet<String> = in_contours.into_iter().map(Into::into).collect();
        let out_contours: BTreeSet<String> = out_contours.into_iter().map(Into::into).collect();
        if let Some(contour) = in_contours.intersection(&out_contours).next() {
            return Err(DiagramError::InvalidZone {
                contour: contour.clone(),
            });
        }
        Ok(Zone {
            in_contours,
            out_contours,
        })
    }

    pub fn in_contours(&self) -> &BTreeSet<String> {
        &self.in_contours
    }

    pub fn out_contours(&self) -> &BTreeSet<String> {
        &self.out_contours
    }

    /// All contours this zone mentions
    pub fn contours(&self) -> impl Iterator<Item = &str> + '_ {
        self.in_contours
            .iter()
            .chain(self.out_contours.iter())
            .map(String::as_str)
    }

    /// Append `(["A", ...], ["B", ...])` to `out`
    pub fn write_text<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_char('(')?;
        write_string_list(out, &self.in_contours)?;
        out.write_str(", ")?;
        write_string_list(out, &self.out_contours)?;
        out.write_char(')')
    }
}

impl TryFrom<ZoneRepr> for Zone {
    type Error = DiagramError;

    fn try_from(repr: ZoneRepr) -> Result<Self, Self::Error> {
        Zone::new(repr.in_contours, repr.out_contours)
    }
}

impl From<Zone> for ZoneRepr {
    fn from(zone: Zone) -> Self {
        ZoneRepr {
            in_contours: zone.in_contours,
            out_contours: zone.out_contours,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

/// A non-empty set of zones
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region {
    zones: BTreeSet<Zone>,
}

impl Region {
    pub fn new(zones: impl IntoIterator<Item = Zone>) -> Self {
        Region {
            zones: zones.into_iter().collect(),
        }
    }

    pub fn zones(&self) -> &BTreeSet<Zone> {
        &self.zones
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> fmt::Result {
        write_zone_list(out, &self.zones)
    }
}

impl FromIterator<Zone> for Region {
    fn from_iter<T: IntoIterator<Item = Zone>>(iter: T) -> Self {
        Region::new(iter)
    }
}

pub(crate) fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.write_char('\\')?;
        }
        out.write_char(c)?;
    }
    out.write_char('"')
}

pub(crate) fn write_string_list<'a, W: Write>(
    out: &mut W,
    items: impl IntoIterator<Item = &'a String>,
) -> fmt::Result {
    out.write_char('[')?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_quoted(out, item)?;
    }
    out.write_char(']')
}

pub(crate) fn write_zone_list<'a, W: Write>(
    out: &mut W,
    zones: impl IntoIterator<Item = &'a Zone>,
) -> fmt::Result {
    out.write_char('[')?;
    for (i, zone) in zones.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        zone.write_text(out)?;
    }
    out.write_char(']')
}
