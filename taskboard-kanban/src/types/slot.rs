//! Column slots: where a column sits in the board's left-to-right order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel integer older records use for the pinned-end column.
pub const PINNED_END_SENTINEL: i64 = 999_999;

/// Keyword used for [`ColumnSlot::PinnedEnd`] in stored records.
const PINNED_END_KEYWORD: &str = "end";

/// Sort key of a column.
///
/// `Ordinary` columns sort by their position; `PinnedEnd` sorts after every
/// ordinary column regardless of how large its position grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SlotRepr", into = "SlotRepr")]
pub enum ColumnSlot {
    Ordinary(i64),
    PinnedEnd,
}

impl ColumnSlot {
    /// Interpret a raw integer position, mapping the legacy sentinel to `PinnedEnd`.
    pub fn from_legacy(position: i64) -> Self {
        if position == PINNED_END_SENTINEL {
            Self::PinnedEnd
        } else {
            Self::Ordinary(position)
        }
    }

    /// The ordinary position, if any
    pub fn position(&self) -> Option<i64> {
        match self {
            Self::Ordinary(p) => Some(*p),
            Self::PinnedEnd => None,
        }
    }

    pub fn is_pinned_end(&self) -> bool {
        matches!(self, Self::PinnedEnd)
    }
}

/// Position for a column appended after every ordinary column, or 0 when
/// there are none.
///
/// The legacy sentinel is skipped: an ordinary column stored there would read
/// back as `PinnedEnd`.
pub fn next_ordinary_position<I>(slots: I) -> i64
where
    I: IntoIterator<Item = ColumnSlot>,
{
    let next = slots
        .into_iter()
        .filter_map(|slot| slot.position())
        .max()
        .map(|max| max + 1)
        .unwrap_or(0);
    if next == PINNED_END_SENTINEL {
        next + 1
    } else {
        next
    }
}

impl Default for ColumnSlot {
    fn default() -> Self {
        Self::Ordinary(0)
    }
}

impl fmt::Display for ColumnSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinary(p) => write!(f, "{p}"),
            Self::PinnedEnd => f.write_str(PINNED_END_KEYWORD),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SlotRepr {
    Position(i64),
    Keyword(String),
}

impl TryFrom<SlotRepr> for ColumnSlot {
    type Error = String;

    fn try_from(repr: SlotRepr) -> Result<Self, Self::Error> {
        match repr {
            SlotRepr::Position(p) => Ok(Self::from_legacy(p)),
            SlotRepr::Keyword(k) if k == PINNED_END_KEYWORD => Ok(Self::PinnedEnd),
            SlotRepr::Keyword(k) => Err(format!(
                "invalid column position '{k}', expected an integer or '{PINNED_END_KEYWORD}'"
            )),
        }
    }
}

impl From<ColumnSlot> for SlotRepr {
    fn from(slot: ColumnSlot) -> Self {
        match slot {
            ColumnSlot::Ordinary(p) => SlotRepr::Position(p),
            ColumnSlot::PinnedEnd => SlotRepr::Keyword(PINNED_END_KEYWORD.to_string()),
        }
    }
}
