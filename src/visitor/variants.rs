//! Stock visitors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{DomainError, Node, Tag};
use crate::visitor::{Handled, Visitor};

/// Uses both default handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericVisitor;

impl Visitor for GenericVisitor {}

/// Overrides `handle_first` only; second-tagged nodes fall back to the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedVisitor;

impl DerivedVisitor {
    pub const FIRST_LABEL: &'static str = "Handle first for derived";
}

impl Visitor for DerivedVisitor {
    fn handle_first(&mut self, node: &Node) -> Handled {
        info!(%node, "{}", Self::FIRST_LABEL);
        Handled::Custom(Self::FIRST_LABEL)
    }
}

/// Accumulates node values per tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSum {
    first: f64,
    second: f64,
}

impl ValueSum {
    pub const FIRST_LABEL: &'static str = "Sum first";
    pub const SECOND_LABEL: &'static str = "Sum second";

    pub fn total(&self, tag: Tag) -> f64 {
        match tag {
            Tag::First => self.first,
            Tag::Second => self.second,
        }
    }

    pub fn grand_total(&self) -> f64 {
        self.first + self.second
    }
}

impl Visitor for ValueSum {
    fn handle_first(&mut self, node: &Node) -> Handled {
        self.first += node.value();
        debug!(%node, running = self.first, "{}", Self::FIRST_LABEL);
        Handled::Custom(Self::FIRST_LABEL)
    }

    fn handle_second(&mut self, node: &Node) -> Handled {
        self.second += node.value();
        debug!(%node, running = self.second, "{}", Self::SECOND_LABEL);
        Handled::Custom(Self::SECOND_LABEL)
    }
}

/// Selects one of the stock visitors at the CLI or config level.
///
/// Selecting a kind picks which monomorphized walker runs; the walker itself
/// never sees this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitorKind {
    #[default]
    Generic,
    Derived,
    Sum,
}

impl fmt::Display for VisitorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitorKind::Generic => f.write_str("generic"),
            VisitorKind::Derived => f.write_str("derived"),
            VisitorKind::Sum => f.write_str("sum"),
        }
    }
}

impl FromStr for VisitorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(VisitorKind::Generic),
            "derived" => Ok(VisitorKind::Derived),
            "sum" => Ok(VisitorKind::Sum),
            _ => Err(DomainError::UnknownVisitor(s.to_string())),
        }
    }
}
