//! Ray-casting (even-odd) point-in-polygon test.
//!
//! A horizontal ray is cast from the query point towards increasing
//! longitude and the crossings with every ring edge are counted; an odd
//! count means the point is inside. Works for any simple polygon, convex
//! or concave. Results for self-intersecting rings are unspecified.

use crate::GeoPoint;

/// Latitude nudge applied when the ray passes exactly through a vertex.
/// Near-exact vertex-latitude queries carry an error of this order.
pub const VERTEX_EPSILON: f64 = 1e-8;

/// Returns `true` if `point` lies inside the polygon described by `ring`.
///
/// The ring is implicitly closed (last vertex connects back to the first);
/// an explicitly repeated closing vertex only adds a zero-length edge and
/// does not change the result.
pub fn point_in_polygon(point: GeoPoint, ring: &[GeoPoint]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let crossings = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .filter(|&(a, b)| ray_crosses_segment(point, *a, *b))
        .count();

    crossings % 2 == 1
}

/// Whether the eastward ray from `p` crosses the segment `a`-`b`
#[allow(clippy::float_cmp)]
pub fn ray_crosses_segment(p: GeoPoint, a: GeoPoint, b: GeoPoint) -> bool {
    // `a` is the lower end
    let (a, b) = if a.latitude > b.latitude { (b, a) } else { (a, b) };

    let px = p.longitude;
    let mut py = p.latitude;
    let (ax, ay) = (a.longitude, a.latitude);
    let (bx, by) = (b.longitude, b.latitude);

    if py == ay || py == by {
        py += VERTEX_EPSILON;
    }

    // Above, below or right of the segment's bounding box
    if py > by || py < ay || px >= ax.max(bx) {
        return false;
    }
    // Left of the bounding box
    if px < ax.min(bx) {
        return true;
    }

    let edge_slope = if ax == bx {
        f64::MAX
    } else {
        (by - ay) / (bx - ax)
    };
    let point_slope = if ax == px {
        f64::MAX
    } else {
        (py - ay) / (px - ax)
    };
    point_slope >= edge_slope
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Vec<GeoPoint> {
        coords
            .iter()
            .map(|&(lat, lon)| GeoPoint::new(lat, lon))
            .collect()
    }

    fn unit_square() -> Vec<GeoPoint> {
        ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    #[test]
    fn unit_square_center_is_inside() {
        assert!(point_in_polygon(GeoPoint::new(0.5, 0.5), &unit_square()));
    }

    #[test]
    fn far_point_is_outside() {
        assert!(!point_in_polygon(GeoPoint::new(2.0, 2.0), &unit_square()));
        assert!(!point_in_polygon(GeoPoint::new(0.5, -0.5), &unit_square()));
        assert!(!point_in_polygon(GeoPoint::new(0.5, 1.5), &unit_square()));
        assert!(!point_in_polygon(GeoPoint::new(-0.5, 0.5), &unit_square()));
    }

    #[test]
    fn rotation_does_not_change_containment() {
        let square = unit_square();
        let probes = [
            GeoPoint::new(0.5, 0.5),
            GeoPoint::new(0.25, 0.75),
            GeoPoint::new(2.0, 2.0),
            GeoPoint::new(0.5, -0.1),
            GeoPoint::new(1.3, 0.4),
        ];
        let expected: Vec<bool> = probes
            .iter()
            .map(|&p| point_in_polygon(p, &square))
            .collect();

        for shift in 1..square.len() {
            let mut rotated = square.clone();
            rotated.rotate_left(shift);
            let got: Vec<bool> = probes
                .iter()
                .map(|&p| point_in_polygon(p, &rotated))
                .collect();
            assert_eq!(got, expected, "rotation by {shift}");
        }
    }

    #[test]
    fn concave_polygon() {
        // L-shape: the notch at the top right is outside
        let l_shape = ring(&[
            (0.0, 0.0),
            (0.0, 2.0),
            (1.0, 2.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (2.0, 0.0),
        ]);
        assert!(point_in_polygon(GeoPoint::new(0.5, 1.5), &l_shape));
        assert!(point_in_polygon(GeoPoint::new(1.5, 0.5), &l_shape));
        assert!(!point_in_polygon(GeoPoint::new(1.5, 1.5), &l_shape));
    }

    #[test]
    fn ray_through_vertex_is_counted_once() {
        // Diamond with side vertices at the query latitude
        let diamond = ring(&[(0.0, 1.0), (1.0, 2.0), (2.0, 1.0), (1.0, 0.0)]);
        assert!(point_in_polygon(GeoPoint::new(1.0, 1.0), &diamond));
        assert!(!point_in_polygon(GeoPoint::new(1.0, 3.0), &diamond));
        assert!(!point_in_polygon(GeoPoint::new(1.0, -1.0), &diamond));
    }

    #[test]
    fn explicit_closing_vertex_is_harmless() {
        let mut closed = unit_square();
        closed.push(closed[0]);
        assert!(point_in_polygon(GeoPoint::new(0.5, 0.5), &closed));
        assert!(!point_in_polygon(GeoPoint::new(2.0, 2.0), &closed));
    }

    #[test]
    fn degenerate_rings_contain_nothing() {
        assert!(!point_in_polygon(GeoPoint::new(0.0, 0.0), &[]));
        assert!(!point_in_polygon(
            GeoPoint::new(0.0, 0.0),
            &ring(&[(0.0, -1.0), (0.0, 1.0)])
        ));
    }
}
