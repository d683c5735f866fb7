//! Monotone cubic interpolation for the line series.
//!
//! Tangents follow Steffen's method, so a curve through monotone data never
//! overshoots between samples. The end tangents are one-sided estimates.

/// One Bézier segment continuing from the previous end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub c1: (f64, f64),
    pub c2: (f64, f64),
    pub end: (f64, f64),
}

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

fn slope(a: (f64, f64), b: (f64, f64)) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 { 0.0 } else { (b.1 - a.1) / h }
}

fn tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let slopes: Vec<f64> = points.windows(2).map(|w| slope(w[0], w[1])).collect();
    if n == 2 {
        return vec![slopes[0], slopes[0]];
    }

    let mut out = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = points[i].0 - points[i - 1].0;
        let h1 = points[i + 1].0 - points[i].0;
        let (s0, s1) = (slopes[i - 1], slopes[i]);
        let p = if h0 + h1 == 0.0 { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
        let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        out[i] = if m.is_finite() { m } else { 0.0 };
    }
    out[0] = (3.0 * slopes[0] - out[1]) / 2.0;
    out[n - 1] = (3.0 * slopes[n - 2] - out[n - 2]) / 2.0;
    out
}

/// Segments for a path that starts at `points[0]`. Fewer than two points
/// yield no segments.
pub fn monotone_segments(points: &[(f64, f64)]) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let t = tangents(points);
    points
        .windows(2)
        .zip(t.windows(2))
        .map(|(p, m)| {
            let (x0, y0) = p[0];
            let (x1, y1) = p[1];
            let dx = (x1 - x0) / 3.0;
            CubicSegment { c1: (x0 + dx, y0 + dx * m[0]), c2: (x1 - dx, y1 - dx * m[1]), end: (x1, y1) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_have_no_segments() {
        assert!(monotone_segments(&[]).is_empty());
        assert!(monotone_segments(&[(0.0, 1.0)]).is_empty());
    }

    #[test]
    fn two_points_make_a_straight_line() {
        let seg = monotone_segments(&[(0.0, 0.0), (3.0, 6.0)]);
        assert_eq!(seg.len(), 1);
        assert_eq!(seg[0].c1, (1.0, 2.0));
        assert_eq!(seg[0].c2, (2.0, 4.0));
        assert_eq!(seg[0].end, (3.0, 6.0));
    }

    #[test]
    fn flat_series_stays_flat() {
        let points: Vec<(f64, f64)> = (0..5).map(|i| (i as f64 * 10.0, 42.0)).collect();
        for seg in monotone_segments(&points) {
            assert_eq!(seg.c1.1, 42.0);
            assert_eq!(seg.c2.1, 42.0);
        }
    }

    #[test]
    fn monotone_data_does_not_overshoot() {
        let points = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)];
        let segments = monotone_segments(&points);
        for (seg, start) in segments.iter().zip(points.iter()) {
            let (lo, hi) = (start.1, seg.end.1);
            for y in [seg.c1.1, seg.c2.1] {
                assert!(y >= lo - 1e-9 && y <= hi + 1e-9, "{y} outside [{lo}, {hi}]");
            }
        }
    }

    #[test]
    fn local_extremum_gets_a_flat_tangent() {
        let segments = monotone_segments(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
        assert_eq!(segments[0].c2.1, 5.0);
        assert_eq!(segments[1].c1.1, 5.0);
    }
}
