//! Nearby polygon merging.

use super::MergePolicy;
use crate::feature::{validate_polygonal, Attributes, GeometryError, PolygonFeature};
use geo::orient::{Direction, Orient};
use geo::{
    coord, Area, BooleanOps, BoundingRect, Buffer, CoordsIter, Distance, Euclidean, Intersects,
    LineString, MultiPolygon, Polygon, Rect,
};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, RTreeObject};
use std::collections::HashMap;

/// Merge same-attribute polygons that are close to each other.
///
/// Features are grouped by layer and attributes. Within a group, polygons
/// closer than `policy.min_dist` are clustered (transitively) and each
/// cluster with more than one member is unioned after buffering outward by
/// `policy.buffer`, then buffered back inward. Pieces whose exterior area
/// does not exceed `policy.min_area` are dropped, as are holes not exceeding
/// `policy.min_hole_area`.
///
/// Each attribute group yields at most one output feature, carrying every
/// surviving piece. Output follows the order in which attribute groups first
/// appear in `features`.
///
/// # Errors
///
/// Returns a [`GeometryError`] if any input geometry is invalid or the merge
/// produces non-finite coordinates. No partial result is returned.
pub fn merge_nearby_polygons(
    features: Vec<PolygonFeature>,
    policy: &MergePolicy,
) -> Result<Vec<PolygonFeature>, GeometryError> {
    let groups = group_by_attrs(features);
    let mut result = Vec::with_capacity(groups.len());

    for group in groups {
        for feature in &group {
            validate_polygonal(feature.geometry())?;
        }

        let geometries: Vec<&MultiPolygon<f64>> = group.iter().map(|f| f.geometry()).collect();
        let mut pieces = Vec::new();

        for cluster in group_by_proximity(&geometries, policy.min_dist) {
            let merged = if cluster.len() > 1 {
                let members = cluster.iter().map(|&i| geometries[i]);
                let merged = if policy.buffer > 0.0 {
                    buffer_union_unbuffer(policy.buffer, members)
                } else {
                    union_all(members.cloned())
                };
                ensure_finite(&merged)?;
                merged.orient(Direction::Default)
            } else {
                geometries[cluster[0]].clone()
            };

            if envelope_area(&merged) < policy.min_area {
                continue;
            }
            extract_polygons(merged, &mut pieces, policy);
        }

        if !pieces.is_empty() {
            result.push(group[0].with_geometry(MultiPolygon::new(pieces)));
        }
    }

    Ok(result)
}

/// Split features into groups sharing layer and attributes, keeping the
/// order of first appearance.
fn group_by_attrs(features: Vec<PolygonFeature>) -> Vec<Vec<PolygonFeature>> {
    let mut index: HashMap<(String, Attributes), usize> = HashMap::new();
    let mut groups: Vec<Vec<PolygonFeature>> = Vec::new();

    for feature in features {
        let key = (feature.layer().to_string(), feature.attributes().clone());
        match index.get(&key) {
            Some(&i) => groups[i].push(feature),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![feature]);
            }
        }
    }

    groups
}

/// Envelope of one input geometry, tagged with its index.
type IndexedEnvelope = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// Connected components of the "within `min_dist`" relation.
///
/// Candidate pairs come from an R-tree over the input envelopes. Components
/// are ordered by their first member and list members in input order, so the
/// result only depends on the input order.
fn group_by_proximity(geometries: &[&MultiPolygon<f64>], min_dist: f64) -> Vec<Vec<usize>> {
    let n = geometries.len();
    let envelopes: Vec<Option<Rect<f64>>> = geometries.iter().map(|g| g.bounding_rect()).collect();
    let mut parent: Vec<usize> = (0..n).collect();

    let index: RTree<IndexedEnvelope> = RTree::bulk_load(
        envelopes
            .iter()
            .enumerate()
            .filter_map(|(i, env)| env.map(|r| GeomWithData::new(to_rectangle(r), i)))
            .collect(),
    );

    for i in 0..n {
        let Some(env) = envelopes[i] else {
            continue;
        };
        let query = to_rectangle(expand(env, min_dist)).envelope();
        for candidate in index.locate_in_envelope_intersecting(&query) {
            let j = candidate.data;
            if j <= i {
                continue;
            }
            let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
            if ri == rj {
                continue;
            }
            if within_distance(geometries[i], geometries[j], min_dist) {
                // lower root wins
                parent[ri.max(rj)] = ri.min(rj);
            }
        }
    }

    let mut component_of_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    for i in 0..n {
        let root = find(&mut parent, i);
        let slot = *component_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(i);
    }
    components
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

fn within_distance(a: &MultiPolygon<f64>, b: &MultiPolygon<f64>, min_dist: f64) -> bool {
    a.0.iter().any(|p| {
        b.0.iter()
            .any(|q| p.intersects(q) || Euclidean.distance(p, q) <= min_dist)
    })
}

fn to_rectangle(rect: Rect<f64>) -> Rectangle<[f64; 2]> {
    let (min, max) = (rect.min(), rect.max());
    Rectangle::from_corners([min.x, min.y], [max.x, max.y])
}

fn expand(rect: Rect<f64>, by: f64) -> Rect<f64> {
    let (min, max) = (rect.min(), rect.max());
    Rect::new(
        coord! { x: min.x - by, y: min.y - by },
        coord! { x: max.x + by, y: max.y + by },
    )
}

/// Buffer each polygon, union the buffers, then shrink the union back.
fn buffer_union_unbuffer<'a>(
    buffer: f64,
    members: impl Iterator<Item = &'a MultiPolygon<f64>>,
) -> MultiPolygon<f64> {
    union_all(members.map(|g| g.buffer(buffer))).buffer(-buffer)
}

fn union_all(members: impl Iterator<Item = MultiPolygon<f64>>) -> MultiPolygon<f64> {
    members.fold(MultiPolygon::new(vec![]), |acc, next| acc.union(&next))
}

fn ensure_finite(geometry: &MultiPolygon<f64>) -> Result<(), GeometryError> {
    match geometry
        .coords_iter()
        .find(|c| !c.x.is_finite() || !c.y.is_finite())
    {
        Some(c) => Err(GeometryError::NonFinite { x: c.x, y: c.y }),
        None => Ok(()),
    }
}

fn envelope_area(geometry: &MultiPolygon<f64>) -> f64 {
    geometry
        .bounding_rect()
        .map(|r| r.width() * r.height())
        .unwrap_or(0.0)
}

fn ring_area(ring: &LineString<f64>) -> f64 {
    Polygon::new(ring.clone(), vec![]).unsigned_area()
}

fn extract_polygons(merged: MultiPolygon<f64>, out: &mut Vec<Polygon<f64>>, policy: &MergePolicy) {
    for polygon in merged {
        if ring_area(polygon.exterior()) <= policy.min_area {
            continue;
        }
        let (exterior, interiors) = polygon.into_inner();
        let holes = interiors
            .into_iter()
            .filter(|ring| ring_area(ring) > policy.min_hole_area)
            .collect();
        out.push(Polygon::new(exterior, holes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::DEFAULT_ZOOM_BAND;
    use crate::feature::{ATTR_CLASS, LAYER_NAME};
    use geo::polygon;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        polygon![(x: x0, y: y0), (x: x1, y: y0), (x: x1, y: y1), (x: x0, y: y1)]
    }

    fn feature(class: &str, polygon: Polygon<f64>) -> PolygonFeature {
        PolygonFeature::new(
            LAYER_NAME,
            MultiPolygon::new(vec![polygon]),
            DEFAULT_ZOOM_BAND,
        )
        .with_attr(ATTR_CLASS, class)
    }

    #[test]
    fn test_adjacent_same_class_polygons_merge() {
        let features = vec![
            feature("water", rect(0.0, 0.0, 10.0, 10.0)),
            feature("water", rect(10.0, 0.0, 20.0, 10.0)),
        ];

        let merged = merge_nearby_polygons(features, &MergePolicy::default()).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].class(), "water");
        assert_eq!(merged[0].geometry().0.len(), 1, "should be one polygon");
        let area = merged[0].geometry().unsigned_area();
        assert!((area - 200.0).abs() < 2.0, "area {} should be ~200", area);
    }

    #[test]
    fn test_gap_within_buffer_is_closed() {
        // 0.5 px gap: within min_dist and bridged by the 1 px buffer
        let features = vec![
            feature("grass", rect(0.0, 0.0, 10.0, 10.0)),
            feature("grass", rect(10.5, 0.0, 20.5, 10.0)),
        ];

        let merged = merge_nearby_polygons(features, &MergePolicy::default()).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].geometry().0.len(), 1);
    }

    #[test]
    fn test_distant_polygons_share_one_feature() {
        let features = vec![
            feature("ice", rect(0.0, 0.0, 10.0, 10.0)),
            feature("ice", rect(50.0, 50.0, 60.0, 60.0)),
        ];

        let merged = merge_nearby_polygons(features, &MergePolicy::default()).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].geometry().0.len(), 2);
    }

    #[test]
    fn test_different_classes_never_merge() {
        let features = vec![
            feature("tree", rect(0.0, 0.0, 10.0, 10.0)),
            feature("water", rect(10.0, 0.0, 20.0, 10.0)),
            feature("tree", rect(30.0, 0.0, 40.0, 10.0)),
        ];

        let merged = merge_nearby_polygons(features, &MergePolicy::default()).unwrap();

        let classes: Vec<_> = merged.iter().map(|f| f.class()).collect();
        assert_eq!(classes, vec!["tree", "water"]);
    }

    #[test]
    fn test_singleton_is_unchanged() {
        let original = feature("crop", rect(0.0, 0.0, 10.0, 10.0));

        let merged = merge_nearby_polygons(vec![original.clone()], &MergePolicy::default()).unwrap();

        assert_eq!(merged, vec![original]);
    }

    #[test]
    fn test_small_polygons_are_dropped() {
        let features = vec![feature("moss", rect(0.0, 0.0, 1.0, 1.0))];
        let merged = merge_nearby_polygons(features, &MergePolicy::default()).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_small_holes_are_filled() {
        let hole = LineString::from(vec![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0), (5.0, 5.0)]);
        let big_hole = LineString::from(vec![
            (10.0, 10.0),
            (15.0, 10.0),
            (15.0, 15.0),
            (10.0, 15.0),
            (10.0, 10.0),
        ]);
        let outer = rect(0.0, 0.0, 20.0, 20.0).exterior().clone();
        let polygon = Polygon::new(outer, vec![hole, big_hole]);

        let merged =
            merge_nearby_polygons(vec![feature("urban", polygon)], &MergePolicy::default()).unwrap();

        let interiors = merged[0].geometry().0[0].interiors();
        assert_eq!(interiors.len(), 1, "only the 25 px² hole survives");
    }

    #[test]
    fn test_plain_union_without_buffer() {
        let features = vec![
            feature("land", rect(0.0, 0.0, 10.0, 10.0)),
            feature("land", rect(5.0, 0.0, 15.0, 10.0)),
        ];
        let policy = MergePolicy::default().with_buffer(0.0);

        let merged = merge_nearby_polygons(features, &policy).unwrap();

        let area = merged[0].geometry().unsigned_area();
        assert!((area - 150.0).abs() < 1e-6, "area {}", area);
    }

    #[test]
    fn test_invalid_geometry_fails_whole_call() {
        let bad = polygon![(x: 0.0, y: 0.0), (x: f64::INFINITY, y: 0.0), (x: 1.0, y: 1.0)];
        let features = vec![
            feature("water", rect(0.0, 0.0, 10.0, 10.0)),
            feature("tree", bad),
        ];

        let result = merge_nearby_polygons(features, &MergePolicy::default());

        assert!(matches!(result, Err(GeometryError::NonFinite { .. })));
    }

    #[test]
    fn test_proximity_groups_are_transitive_and_ordered() {
        let a = MultiPolygon::new(vec![rect(0.0, 0.0, 1.0, 1.0)]);
        let far = MultiPolygon::new(vec![rect(100.0, 0.0, 101.0, 1.0)]);
        let b = MultiPolygon::new(vec![rect(1.5, 0.0, 2.5, 1.0)]);
        let c = MultiPolygon::new(vec![rect(3.0, 0.0, 4.0, 1.0)]);

        let groups = group_by_proximity(&[&a, &far, &b, &c], 1.0);

        assert_eq!(groups, vec![vec![0, 2, 3], vec![1]]);
    }

    #[test]
    fn test_proximity_on_large_grid() {
        // 100 x 100 grid of 5 px squares, 10 px apart, except that the second
        // square of every row sits 0.5 px from the first.
        let mut geometries = Vec::new();
        for row in 0..100 {
            for col in 0..100 {
                let x = if col == 1 { 5.5 } else { col as f64 * 15.0 };
                let y = row as f64 * 15.0;
                geometries.push(MultiPolygon::new(vec![rect(x, y, x + 5.0, y + 5.0)]));
            }
        }
        let refs: Vec<&MultiPolygon<f64>> = geometries.iter().collect();

        let groups = group_by_proximity(&refs, 1.0);

        assert_eq!(groups.len(), 100 * 99);
        assert_eq!(groups[0], vec![0, 1]);
        assert_eq!(groups[1], vec![2]);
        assert_eq!(groups[99], vec![100, 101]);
        assert!(groups.iter().all(|g| g.windows(2).all(|w| w[0] < w[1])));
    }

    #[test]
    fn test_group_by_attrs_keeps_first_appearance_order() {
        let features = vec![
            feature("b", rect(0.0, 0.0, 1.0, 1.0)),
            feature("a", rect(0.0, 0.0, 1.0, 1.0)),
            feature("b", rect(0.0, 0.0, 1.0, 1.0)),
        ];

        let groups = group_by_attrs(features);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[0][0].class(), "b");
        assert_eq!(groups[1][0].class(), "a");
    }
}
