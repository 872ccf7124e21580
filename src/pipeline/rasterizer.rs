use glam::IVec2;

/// Integer Bresenham line from `start` to `end`, both endpoints included.
///
/// Works in any octant and on signed coordinates; `plot` decides what to do with
/// points that fall off screen.
pub fn bresenham<F>(start: IVec2, end: IVec2, mut plot: F)
where
    F: FnMut(IVec2),
{
    let (mut x0, mut y0) = (start.x, start.y);
    let (x1, y1) = (end.x, end.y);

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(IVec2::new(x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(start: IVec2, end: IVec2) -> Vec<IVec2> {
        let mut points = Vec::new();
        bresenham(start, end, |p| points.push(p));
        points
    }

    #[test]
    fn single_point_line() {
        let p = IVec2::new(3, -4);
        assert_eq!(collect(p, p), vec![p]);
    }

    #[test]
    fn horizontal_and_vertical() {
        let h = collect(IVec2::new(0, 2), IVec2::new(4, 2));
        assert_eq!(h.len(), 5);
        assert!(h.iter().all(|p| p.y == 2));

        let v = collect(IVec2::new(1, 5), IVec2::new(1, 0));
        assert_eq!(v.len(), 6);
        assert_eq!(v.first(), Some(&IVec2::new(1, 5)));
        assert_eq!(v.last(), Some(&IVec2::new(1, 0)));
    }

    #[test]
    fn steep_line_is_continuous() {
        let points = collect(IVec2::new(-2, -3), IVec2::new(5, 20));
        assert_eq!(points.len(), 24);
        for pair in points.windows(2) {
            let step = (pair[1] - pair[0]).abs();
            assert!(step.x <= 1 && step.y == 1);
        }
    }

    #[test]
    fn diagonal_hits_every_step() {
        let points = collect(IVec2::new(0, 0), IVec2::new(-3, 3));
        assert_eq!(
            points,
            vec![
                IVec2::new(0, 0),
                IVec2::new(-1, 1),
                IVec2::new(-2, 2),
                IVec2::new(-3, 3)
            ]
        );
    }
}
