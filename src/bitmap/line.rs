/// Iterator over the pixels of an integer Bresenham line, endpoints inclusive.
///
/// The sequence starts at `(x1, y1)` and ends at `(x2, y2)`. It yields exactly
/// `max(dx, dy) + 1` points. Ties in the error term are broken the standard way,
/// so a line and its reverse do not necessarily cover the same pixels.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    x2: i64,
    y2: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();

        Self {
            x: x1,
            y: y1,
            x2,
            y2,
            dx,
            dy,
            sx: if x1 < x2 { 1 } else { -1 },
            sy: if y1 < y2 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Every point stays inside the bounding box of the two u32 endpoints.
        let point = (self.x as u32, self.y as u32);

        if self.x == self.x2 && self.y == self.y2 {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 > -self.dy {
                self.err -= self.dy;
                self.x += self.sx;
            }
            if e2 < self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.x2 - self.x).abs().max((self.y2 - self.y).abs()) as usize + 1;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(x1: u32, y1: u32, x2: u32, y2: u32) -> Vec<(u32, u32)> {
        BresenhamLine::new(x1, y1, x2, y2).collect()
    }

    #[test]
    fn single_point() {
        assert_eq!(points(3, 7, 3, 7), vec![(3, 7)]);
    }

    #[test]
    fn horizontal_both_directions() {
        assert_eq!(points(0, 0, 4, 0), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        assert_eq!(points(4, 2, 1, 2), vec![(4, 2), (3, 2), (2, 2), (1, 2)]);
    }

    #[test]
    fn vertical_both_directions() {
        assert_eq!(points(5, 1, 5, 4), vec![(5, 1), (5, 2), (5, 3), (5, 4)]);
        assert_eq!(points(5, 4, 5, 2), vec![(5, 4), (5, 3), (5, 2)]);
    }

    #[test]
    fn diagonals() {
        assert_eq!(points(0, 0, 4, 4), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(points(0, 3, 3, 0), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
        assert_eq!(points(3, 3, 0, 0), vec![(3, 3), (2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn shallow_line_tie_breaking() {
        assert_eq!(points(0, 0, 4, 2), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
        // reversed line takes the other side of each tie
        assert_eq!(points(4, 2, 0, 0), vec![(4, 2), (3, 2), (2, 1), (1, 1), (0, 0)]);
    }

    #[test]
    fn steep_line() {
        assert_eq!(points(0, 0, 2, 4), vec![(0, 0), (0, 1), (1, 2), (1, 3), (2, 4)]);
    }

    #[test]
    fn length_is_max_delta_plus_one() {
        for &(x1, y1, x2, y2) in &[(0, 0, 127, 39), (127, 0, 0, 51), (10, 30, 90, 5), (64, 0, 64, 47)] {
            let line = BresenhamLine::new(x1, y1, x2, y2);
            let expected = (x2 as i64 - x1 as i64).abs().max((y2 as i64 - y1 as i64).abs()) as usize + 1;
            assert_eq!(line.len(), expected);
            let pts: Vec<_> = line.collect();
            assert_eq!(pts.len(), expected);
            assert_eq!(pts.first(), Some(&(x1, y1)));
            assert_eq!(pts.last(), Some(&(x2, y2)));
        }
    }
}
