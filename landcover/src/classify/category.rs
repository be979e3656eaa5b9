//! Category code table.

use serde::Serialize;
use std::fmt;

/// Semantic land-cover class derived from a source category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LandCoverClass {
    Tree,
    Shrub,
    Grass,
    Crop,
    Urban,
    Barren,
    Ice,
    Water,
    Herbaceous,
    Mangroves,
    Moss,
    Land,
}

impl LandCoverClass {
    /// All classes in category code order.
    pub const ALL: [LandCoverClass; 12] = [
        LandCoverClass::Tree,
        LandCoverClass::Shrub,
        LandCoverClass::Grass,
        LandCoverClass::Crop,
        LandCoverClass::Urban,
        LandCoverClass::Barren,
        LandCoverClass::Ice,
        LandCoverClass::Water,
        LandCoverClass::Herbaceous,
        LandCoverClass::Mangroves,
        LandCoverClass::Moss,
        LandCoverClass::Land,
    ];

    /// The attribute value written to the `class` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            LandCoverClass::Tree => "tree",
            LandCoverClass::Shrub => "shrub",
            LandCoverClass::Grass => "grass",
            LandCoverClass::Crop => "crop",
            LandCoverClass::Urban => "urban",
            LandCoverClass::Barren => "barren",
            LandCoverClass::Ice => "ice",
            LandCoverClass::Water => "water",
            LandCoverClass::Herbaceous => "herbaceous",
            LandCoverClass::Mangroves => "mangroves",
            LandCoverClass::Moss => "moss",
            LandCoverClass::Land => "land",
        }
    }
}

impl fmt::Display for LandCoverClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category code → class, in the order the source archives are enumerated.
pub const CATEGORY_CODES: [(&str, LandCoverClass); 12] = [
    ("10", LandCoverClass::Tree),
    ("20", LandCoverClass::Shrub),
    ("30", LandCoverClass::Grass),
    ("40", LandCoverClass::Crop),
    ("50", LandCoverClass::Urban),
    ("60", LandCoverClass::Barren),
    ("70", LandCoverClass::Ice),
    ("80", LandCoverClass::Water),
    ("90", LandCoverClass::Herbaceous),
    ("95", LandCoverClass::Mangroves),
    ("100", LandCoverClass::Moss),
    ("110", LandCoverClass::Land),
];

/// Looks up the class for a category code.
///
/// Unknown codes return `None`; callers still emit the feature, tagged with an
/// empty class, so that unexpected archives are visible in the output rather
/// than silently dropped.
pub fn classify(category_code: &str) -> Option<LandCoverClass> {
    CATEGORY_CODES
        .iter()
        .find(|(code, _)| *code == category_code)
        .map(|(_, class)| *class)
}
