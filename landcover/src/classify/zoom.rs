//! Zoom code table.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Highest zoom a band may reach.
pub const MAX_ZOOM: u8 = 15;

/// Errors produced while resolving zoom bands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Zoom code is not one of "0".."8" (only raised in strict mode)
    #[error("Unrecognized zoom code: '{0}'")]
    UnrecognizedZoomCode(String),

    /// Band bounds are out of order or beyond the maximum zoom
    #[error("Invalid zoom band [{min_zoom}, {max_zoom}] (must satisfy min <= max <= {MAX_ZOOM})")]
    InvalidZoomBand { min_zoom: u8, max_zoom: u8 },
}

/// Inclusive range of zoom levels a feature is visible at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ZoomBand {
    min_zoom: u8,
    max_zoom: u8,
}

impl ZoomBand {
    /// Create a band, rejecting `min > max` and zooms above [`MAX_ZOOM`].
    pub fn new(min_zoom: u8, max_zoom: u8) -> Result<Self, ClassifyError> {
        if min_zoom > max_zoom || max_zoom > MAX_ZOOM {
            return Err(ClassifyError::InvalidZoomBand { min_zoom, max_zoom });
        }
        Ok(Self { min_zoom, max_zoom })
    }

    const fn fixed(min_zoom: u8, max_zoom: u8) -> Self {
        Self { min_zoom, max_zoom }
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    /// Whether `zoom` falls inside the band.
    #[inline]
    pub fn contains(&self, zoom: u8) -> bool {
        (self.min_zoom..=self.max_zoom).contains(&zoom)
    }

    /// Iterate the zoom levels in the band, lowest first.
    pub fn zooms(&self) -> impl Iterator<Item = u8> {
        self.min_zoom..=self.max_zoom
    }
}

impl fmt::Display for ZoomBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_zoom, self.max_zoom)
    }
}

/// Band used when a zoom code is not recognized.
pub const DEFAULT_ZOOM_BAND: ZoomBand = ZoomBand::fixed(0, 3);

/// Zoom code → band. Code "0" covers the overview zooms, every later code a
/// single zoom level.
pub const ZOOM_CODES: [(&str, ZoomBand); 9] = [
    ("0", ZoomBand::fixed(0, 3)),
    ("1", ZoomBand::fixed(4, 4)),
    ("2", ZoomBand::fixed(5, 5)),
    ("3", ZoomBand::fixed(6, 6)),
    ("4", ZoomBand::fixed(7, 7)),
    ("5", ZoomBand::fixed(8, 8)),
    ("6", ZoomBand::fixed(9, 9)),
    ("7", ZoomBand::fixed(10, 10)),
    ("8", ZoomBand::fixed(11, 11)),
];

/// Looks up the band for a zoom code, falling back to [`DEFAULT_ZOOM_BAND`].
pub fn zoom_band(zoom_code: &str) -> ZoomBand {
    lookup(zoom_code).unwrap_or(DEFAULT_ZOOM_BAND)
}

/// Looks up the band for a zoom code, failing on unknown codes.
pub fn zoom_band_strict(zoom_code: &str) -> Result<ZoomBand, ClassifyError> {
    lookup(zoom_code).ok_or_else(|| ClassifyError::UnrecognizedZoomCode(zoom_code.to_string()))
}

fn lookup(zoom_code: &str) -> Option<ZoomBand> {
    ZOOM_CODES
        .iter()
        .find(|(code, _)| *code == zoom_code)
        .map(|(_, band)| *band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(zoom_band("0"), ZoomBand::new(0, 3).unwrap());
        assert_eq!(zoom_band("1"), ZoomBand::new(4, 4).unwrap());
        assert_eq!(zoom_band("4"), ZoomBand::new(7, 7).unwrap());
        assert_eq!(zoom_band("8"), ZoomBand::new(11, 11).unwrap());
    }

    #[test]
    fn test_single_level_steps_after_first() {
        for (i, (_, band)) in ZOOM_CODES.iter().enumerate().skip(1) {
            assert_eq!(band.min_zoom(), band.max_zoom());
            assert_eq!(band.min_zoom() as usize, i + 3);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_default() {
        assert_eq!(zoom_band("9"), DEFAULT_ZOOM_BAND);
        assert_eq!(zoom_band("99"), DEFAULT_ZOOM_BAND);
        assert_eq!(zoom_band(""), DEFAULT_ZOOM_BAND);
        assert_eq!(DEFAULT_ZOOM_BAND, ZoomBand::new(0, 3).unwrap());
    }

    #[test]
    fn test_strict_lookup_rejects_unknown_code() {
        assert_eq!(zoom_band_strict("2"), Ok(ZoomBand::new(5, 5).unwrap()));
        assert_eq!(
            zoom_band_strict("99"),
            Err(ClassifyError::UnrecognizedZoomCode("99".to_string()))
        );
    }

    #[test]
    fn test_band_validation() {
        assert!(ZoomBand::new(3, 3).is_ok());
        assert!(ZoomBand::new(0, 15).is_ok());
        assert!(matches!(
            ZoomBand::new(5, 4),
            Err(ClassifyError::InvalidZoomBand { .. })
        ));
        assert!(ZoomBand::new(0, 16).is_err());
    }

    #[test]
    fn test_contains_and_zooms() {
        let band = ZoomBand::new(0, 3).unwrap();
        assert!(band.contains(0));
        assert!(band.contains(3));
        assert!(!band.contains(4));
        assert_eq!(band.zooms().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ZoomBand::new(11, 11).unwrap().to_string(), "[11, 11]");
        let err = ZoomBand::new(7, 2).unwrap_err();
        assert!(err.to_string().contains("[7, 2]"));
    }

    proptest! {
        /// Property: every resolved band is ordered and within range.
        #[test]
        fn prop_resolved_band_is_ordered(code in "[0-9]{0,3}") {
            let band = zoom_band(&code);
            prop_assert!(band.min_zoom() <= band.max_zoom());
            prop_assert!(band.max_zoom() <= MAX_ZOOM);
        }
    }
}
