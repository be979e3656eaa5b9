//! Polygonal geometry checks.

use super::GeometryError;
use geo::{Area, Geometry, LineString, MultiPolygon, Polygon, Validation};

/// Extract the polygonal part of a decoded geometry.
///
/// Polygons become single-member multipolygons; anything else is rejected.
pub fn to_polygonal(geometry: &Geometry<f64>) -> Result<MultiPolygon<f64>, GeometryError> {
    match geometry {
        Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p.clone()])),
        Geometry::MultiPolygon(mp) => Ok(mp.clone()),
        Geometry::Rect(r) => Ok(MultiPolygon::new(vec![r.to_polygon()])),
        Geometry::Triangle(t) => Ok(MultiPolygon::new(vec![t.to_polygon()])),
        other => Err(GeometryError::NotPolygonal(kind_name(other))),
    }
}

/// Reject multipolygons that cannot be tiled.
///
/// A multipolygon is valid when it has at least one polygon, every coordinate
/// is finite, every exterior ring encloses a non-zero area and no ring
/// crosses itself or another ring of the same polygon.
pub fn validate_polygonal(geometry: &MultiPolygon<f64>) -> Result<(), GeometryError> {
    if geometry.0.iter().all(|p| p.exterior().0.is_empty()) {
        return Err(GeometryError::Empty);
    }

    for polygon in &geometry.0 {
        check_ring(polygon.exterior())?;
        for interior in polygon.interiors() {
            check_finite(interior)?;
        }
        if Polygon::new(polygon.exterior().clone(), vec![]).unsigned_area() == 0.0 {
            return Err(GeometryError::Degenerate(
                "exterior ring encloses zero area".to_string(),
            ));
        }
        polygon
            .check_validation()
            .map_err(|e| GeometryError::Invalid(e.to_string()))?;
    }

    Ok(())
}

fn check_ring(ring: &LineString<f64>) -> Result<(), GeometryError> {
    check_finite(ring)?;
    // closed rings repeat the first coordinate
    if ring.0.len() < 4 {
        return Err(GeometryError::Degenerate(format!(
            "ring has {} coordinates, need at least 4",
            ring.0.len()
        )));
    }
    Ok(())
}

fn check_finite(ring: &LineString<f64>) -> Result<(), GeometryError> {
    match ring.0.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
        Some(c) => Err(GeometryError::NonFinite { x: c.x, y: c.y }),
        None => Ok(()),
    }
}

fn kind_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, point, polygon, Rect};

    fn unit_square() -> Polygon<f64> {
        polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)]
    }

    #[test]
    fn test_polygon_is_wrapped() {
        let mp = to_polygonal(&Geometry::Polygon(unit_square())).unwrap();
        assert_eq!(mp.0.len(), 1);
    }

    #[test]
    fn test_rect_is_accepted() {
        let rect = Rect::new((0.0, 0.0), (2.0, 2.0));
        let mp = to_polygonal(&Geometry::Rect(rect)).unwrap();
        assert!((mp.unsigned_area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_polygonal_rejected() {
        let err = to_polygonal(&Geometry::Point(point!(x: 1.0, y: 2.0))).unwrap_err();
        assert_eq!(err, GeometryError::NotPolygonal("Point"));

        let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)];
        let err = to_polygonal(&Geometry::LineString(line)).unwrap_err();
        assert_eq!(err, GeometryError::NotPolygonal("LineString"));
    }

    #[test]
    fn test_valid_square() {
        assert!(validate_polygonal(&MultiPolygon::new(vec![unit_square()])).is_ok());
    }

    #[test]
    fn test_empty_multipolygon() {
        let empty: MultiPolygon<f64> = MultiPolygon::new(vec![]);
        assert_eq!(validate_polygonal(&empty), Err(GeometryError::Empty));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: f64::NAN, y: 0.0), (x: 1.0, y: 1.0)];
        let err = validate_polygonal(&MultiPolygon::new(vec![poly])).unwrap_err();
        assert!(matches!(err, GeometryError::NonFinite { .. }));
    }

    #[test]
    fn test_collinear_ring_is_degenerate() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0), (x: 2.0, y: 2.0)];
        let err = validate_polygonal(&MultiPolygon::new(vec![poly])).unwrap_err();
        assert!(matches!(err, GeometryError::Degenerate(_)));
    }

    #[test]
    fn test_self_intersecting_ring_is_invalid() {
        // asymmetric bowtie: non-zero signed area, crossing edges
        let bowtie = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 2.0), (x: 4.0, y: 0.0), (x: 0.0, y: 1.0)];
        let err = validate_polygonal(&MultiPolygon::new(vec![bowtie])).unwrap_err();
        assert!(matches!(err, GeometryError::Invalid(_)), "got {:?}", err);
    }

    #[test]
    fn test_hole_outside_exterior_is_invalid() {
        let hole = LineString::from(vec![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0), (5.0, 5.0)]);
        let poly = Polygon::new(unit_square().exterior().clone(), vec![hole]);
        let err = validate_polygonal(&MultiPolygon::new(vec![poly])).unwrap_err();
        assert!(matches!(err, GeometryError::Invalid(_)));
    }

    #[test]
    fn test_two_point_ring_is_degenerate() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)];
        let err = validate_polygonal(&MultiPolygon::new(vec![poly])).unwrap_err();
        assert!(matches!(err, GeometryError::Degenerate(_)));
    }
}
