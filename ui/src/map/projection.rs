//! Lon/lat to viewport projection.
//!
//! The symbols render over a plain styled canvas rather than a tile
//! basemap, so a simple equirectangular fit is enough: longitudes are
//! compressed by the cosine of the mid-latitude, the station bounding box
//! is scaled uniformly into the padded viewport, and north points up.

/// Fitted projection from geographic coordinates to SVG pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    min_lon: f64,
    max_lat: f64,
    cos_lat: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    /// Fit the bounding box of `points` (lon, lat pairs) into a
    /// `width` × `height` viewport with `padding` pixels on every side.
    ///
    /// Returns `None` when there are no points to fit.
    pub fn fit(points: &[(f64, f64)], width: f64, height: f64, padding: f64) -> Option<Self> {
        let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(lon, lat) in points {
            min_lon = min_lon.min(lon);
            max_lon = max_lon.max(lon);
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
        }
        if !min_lon.is_finite() || !min_lat.is_finite() {
            return None;
        }

        let mid_lat = (min_lat + max_lat) / 2.0;
        let cos_lat = mid_lat.to_radians().cos();

        let span_x = (max_lon - min_lon) * cos_lat;
        let span_y = max_lat - min_lat;

        let inner_w = (width - 2.0 * padding).max(1.0);
        let inner_h = (height - 2.0 * padding).max(1.0);

        // Uniform scale; a degenerate (single-point) box still projects,
        // centered in the viewport.
        let scale = match (span_x > 0.0, span_y > 0.0) {
            (true, true) => (inner_w / span_x).min(inner_h / span_y),
            (true, false) => inner_w / span_x,
            (false, true) => inner_h / span_y,
            (false, false) => 1.0,
        };

        let content_w = span_x * scale;
        let content_h = span_y * scale;
        let offset_x = padding + (inner_w - content_w) / 2.0;
        let offset_y = padding + (inner_h - content_h) / 2.0;

        Some(Self {
            min_lon,
            max_lat,
            cos_lat,
            scale,
            offset_x,
            offset_y,
        })
    }

    /// Project a lon/lat pair into viewport pixels.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = (lon - self.min_lon) * self.cos_lat * self.scale + self.offset_x;
        let y = (self.max_lat - lat) * self.scale + self.offset_y;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicago_points() -> Vec<(f64, f64)> {
        vec![
            (-87.6303, 41.8807),
            (-87.6280, 41.8963),
            (-87.6594, 42.0190),
            (-87.6305, 41.7226),
        ]
    }

    #[test]
    fn fit_keeps_points_inside_padding() {
        let points = chicago_points();
        let proj = Projection::fit(&points, 640.0, 480.0, 24.0).unwrap();
        for &(lon, lat) in &points {
            let (x, y) = proj.project(lon, lat);
            assert!((24.0 - 1e-9..=616.0 + 1e-9).contains(&x), "x = {x}");
            assert!((24.0 - 1e-9..=456.0 + 1e-9).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn north_is_up() {
        let points = chicago_points();
        let proj = Projection::fit(&points, 640.0, 480.0, 24.0).unwrap();
        let (_, y_north) = proj.project(-87.6594, 42.0190);
        let (_, y_south) = proj.project(-87.6305, 41.7226);
        assert!(y_north < y_south);
    }

    #[test]
    fn single_point_centers_in_viewport() {
        let proj = Projection::fit(&[(-87.63, 41.88)], 640.0, 480.0, 24.0).unwrap();
        let (x, y) = proj.project(-87.63, 41.88);
        assert!((x - 320.0).abs() < 1.0);
        assert!((y - 240.0).abs() < 1.0);
    }

    #[test]
    fn no_points_no_projection() {
        assert!(Projection::fit(&[], 640.0, 480.0, 24.0).is_none());
    }
}
