/// Describes how the field treats coordinates past its edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Bounds of the field are stitched together.
    Torus,
    /// Cells past the edges do not exist.
    Bounded,
}

/// Offsets of the Moore neighborhood, in the order neighbors are gathered.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Topology {
    pub fn from_wrap_around(wrap_around: bool) -> Self {
        if wrap_around {
            Self::Torus
        } else {
            Self::Bounded
        }
    }

    pub fn wraps(self) -> bool {
        matches!(self, Self::Torus)
    }

    /// Coordinate resolver for one axis of length `size`.
    ///
    /// The two axes of a field get separate resolvers, so they may differ in size.
    pub fn resolver(self, size: usize) -> AxisResolver {
        AxisResolver {
            wrap: self.wraps(),
            size: size as i64,
        }
    }
}

/// Maps `coord + delta` back onto one axis of the field.
#[derive(Clone, Copy, Debug)]
pub struct AxisResolver {
    wrap: bool,
    size: i64,
}

impl AxisResolver {
    /// On a torus the result is always in `[0, size)`.
    /// Otherwise `coord + delta` is returned as is and may fall outside the field;
    /// callers must treat such a coordinate as "no cell".
    pub fn resolve(&self, coord: i64, delta: i64) -> i64 {
        if self.wrap {
            (coord + delta).rem_euclid(self.size)
        } else {
            coord + delta
        }
    }

    pub fn size(&self) -> i64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn torus_wraps_both_edges() {
        let r = Topology::Torus.resolver(5);
        assert_eq!(r.resolve(0, -1), 4);
        assert_eq!(r.resolve(4, 1), 0);
        assert_eq!(r.resolve(2, 1), 3);
    }

    #[test]
    fn bounded_passes_through() {
        let r = Topology::Bounded.resolver(5);
        assert_eq!(r.resolve(0, -1), -1);
        assert_eq!(r.resolve(4, 1), 5);
        assert_eq!(r.resolve(2, -1), 1);
    }

    #[test]
    fn axes_are_independent() {
        let rx = Topology::Torus.resolver(3);
        let ry = Topology::Torus.resolver(7);
        assert_eq!(rx.resolve(0, -1), 2);
        assert_eq!(ry.resolve(0, -1), 6);
    }
}
