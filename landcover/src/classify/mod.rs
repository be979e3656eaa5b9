//! Source partition classification.
//!
//! Every source archive is named `<categoryCode>-<zoomCode>`. The category code
//! selects a [`LandCoverClass`] and the zoom code selects the [`ZoomBand`] the
//! polygons from that archive are visible in.
//!
//! # Example
//!
//! ```
//! use landcover::classify::{classify, zoom_band, LandCoverClass, SourcePartitionId, ZoomBand};
//!
//! let id = SourcePartitionId::parse("95-8").unwrap();
//! assert_eq!(classify(id.category_code()), Some(LandCoverClass::Mangroves));
//! assert_eq!(zoom_band(id.zoom_code()), ZoomBand::new(11, 11).unwrap());
//! ```

mod category;
mod source;
mod zoom;

pub use category::{classify, LandCoverClass, CATEGORY_CODES};
pub use source::{SourceIdError, SourcePartitionId, SOURCE_ID_DELIMITER};
pub use zoom::{
    zoom_band, zoom_band_strict, ClassifyError, ZoomBand, DEFAULT_ZOOM_BAND, MAX_ZOOM, ZOOM_CODES,
};
