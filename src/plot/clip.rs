/// Axis-aligned viewport used to cut polylines before they reach the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64
}

impl ClipWindow {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> ClipWindow {
        ClipWindow {
            x_min: x_range.0.min(x_range.1),
            x_max: x_range.0.max(x_range.1),
            y_min: y_range.0.min(y_range.1),
            y_max: y_range.0.max(y_range.1)
        }
    }

    pub fn contains(&self, p: (f64, f64)) -> bool {
        p.0 >= self.x_min && p.0 <= self.x_max && p.1 >= self.y_min && p.1 <= self.y_max
    }

    /// Liang-Barsky clipping of the segment `p0 -> p1`. Endpoints that lie
    /// inside the window are returned unchanged.
    pub fn clip_segment(&self, p0: (f64, f64), p1: (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
        let dx = p1.0 - p0.0;
        let dy = p1.1 - p0.1;
        let mut t0 = 0.0;
        let mut t1 = 1.0;

        let edges = [
            (-dx, p0.0 - self.x_min),
            (dx, self.x_max - p0.0),
            (-dy, p0.1 - self.y_min),
            (dy, self.y_max - p0.1),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }

        let at = |t: f64| (p0.0 + t * dx, p0.1 + t * dy);
        let a = if t0 == 0.0 { p0 } else { at(t0) };
        let b = if t1 == 1.0 { p1 } else { at(t1) };
        Some((a, b))
    }

    /// Visible pieces of a polyline. A curve that leaves and re-enters the
    /// window yields one piece per visit; pieces have at least two points.
    pub fn clip_polyline(&self, points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
        let mut pieces = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();

        for pair in points.windows(2) {
            match self.clip_segment(pair[0], pair[1]) {
                Some((a, b)) => {
                    if current.last() != Some(&a) {
                        Self::flush(&mut current, &mut pieces);
                        current.push(a);
                    }
                    current.push(b);
                    if b != pair[1] {
                        Self::flush(&mut current, &mut pieces);
                    }
                },
                None => Self::flush(&mut current, &mut pieces)
            }
        }
        Self::flush(&mut current, &mut pieces);
        pieces
    }

    fn flush(current: &mut Vec<(f64, f64)>, pieces: &mut Vec<Vec<(f64, f64)>>) {
        if current.len() >= 2 {
            pieces.push(std::mem::take(current));
        } else {
            current.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn window() -> ClipWindow {
        ClipWindow::new((-4.0, 10.0), (-4.0, 2.0))
    }

    #[test]
    fn inside_segment_is_untouched() {
        let clipped = window().clip_segment((0.0, 0.0), (1.0, 1.0));
        assert_eq!(clipped, Some(((0.0, 0.0), (1.0, 1.0))));
    }

    #[test]
    fn crossing_segment_is_cut_at_edge() {
        let (a, b) = window().clip_segment((0.0, 0.0), (0.0, 4.0)).unwrap();
        assert_eq!(a, (0.0, 0.0));
        assert_abs_diff_eq!(b.1, 2.0, epsilon = 1e-12);

        let (a, b) = window().clip_segment((-6.0, -1.0), (-2.0, -1.0)).unwrap();
        assert_abs_diff_eq!(a.0, -4.0, epsilon = 1e-12);
        assert_eq!(b, (-2.0, -1.0));
    }

    #[test]
    fn outside_segment_is_dropped() {
        assert_eq!(window().clip_segment((-9.0, 0.0), (-5.0, 0.0)), None);
        assert_eq!(window().clip_segment((0.0, 3.0), (5.0, 5.0)), None);
    }

    #[test]
    fn polyline_splits_on_reentry() {
        let points = [(-2.0, 0.0), (0.0, 0.0), (1.0, 5.0), (2.0, 0.0), (3.0, 0.0)];
        let pieces = window().clip_polyline(&points);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].first(), Some(&(-2.0, 0.0)));
        assert_abs_diff_eq!(pieces[0].last().unwrap().1, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pieces[1].first().unwrap().1, 2.0, epsilon = 1e-12);
        assert_eq!(pieces[1].last(), Some(&(3.0, 0.0)));
    }

    #[test]
    fn fully_visible_polyline_stays_whole() {
        let points = [(0.0, 0.0), (1.0, 1.0), (2.0, -1.0)];
        assert_eq!(window().clip_polyline(&points), vec![points.to_vec()]);
    }
}
