use crate::Point;

/// Star points (hoshi) of a square board.
///
/// Odd boards of 13 and up get the full nine points (corners, sides and
/// center, three lines in from the edge). Odd boards from 7 to 11 get the
/// four corner points two lines in plus the center. Other sizes have none.
pub fn star_points(size: u8) -> Vec<Point> {
    if size < 7 || size.is_multiple_of(2) {
        return Vec::new();
    }

    let off = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - off;
    let mid = size / 2;

    let mut pts = vec![(off, off), (far, off), (off, far), (far, far), (mid, mid)];
    if size >= 13 {
        pts.extend([(off, mid), (far, mid), (mid, off), (mid, far)]);
    }
    pts
}

pub fn is_star_point(size: u8, (x, y): Point) -> bool {
    if size < 7 || size.is_multiple_of(2) {
        return false;
    }

    let off = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - off;
    let mid = size / 2;

    let on_line = |v: u8| v == off || v == far || v == mid;
    if !on_line(x) || !on_line(y) {
        return false;
    }
    // Below 13 the side points are missing.
    size >= 13 || (x == mid) == (y == mid)
}
