//! Marker style and the facing bar.

use vacuum_core::Direction;

use crate::projection::PixelRect;

/// Edge of the marker the facing bar sits against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerEdge {
    /// Upper edge.
    Top,
    /// Lower edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl MarkerEdge {
    /// The edge a heading points at on a north-is-up canvas.
    pub fn facing(direction: Direction) -> Self {
        match direction {
            Direction::North => MarkerEdge::Top,
            Direction::South => MarkerEdge::Bottom,
            Direction::East => MarkerEdge::Right,
            Direction::West => MarkerEdge::Left,
        }
    }
}

/// The facing bar drawn inside the marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FacingIndicator {
    /// Edge the bar is inset from.
    pub edge: MarkerEdge,
    /// Bar rectangle relative to the marker's top-left corner.
    pub rect: PixelRect,
}

/// Dimensions of the agent marker, in pixels.
///
/// The default matches a 160 px cell: a 156 px marker with a 5×50 bar
/// inset 5 px from the edge it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Side length of the (square) marker.
    pub size: u32,
    /// Gap between the marker edge and the bar.
    pub inset: u32,
    /// Bar extent along the heading.
    pub bar_length: u32,
    /// Bar extent across the heading.
    pub bar_thickness: u32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: 156,
            inset: 5,
            bar_length: 50,
            bar_thickness: 5,
        }
    }
}

impl MarkerStyle {
    /// The default proportions scaled to `cell_size`.
    ///
    /// ```
    /// use vacuum_obs::MarkerStyle;
    ///
    /// assert_eq!(MarkerStyle::scaled(160), MarkerStyle::default());
    /// assert!(MarkerStyle::scaled(8).fits(8));
    /// ```
    pub fn scaled(cell_size: u32) -> Self {
        let stroke = (cell_size / 32).max(1);
        Self {
            size: cell_size - cell_size / 40,
            inset: stroke,
            bar_length: (u64::from(cell_size) * 5 / 16) as u32,
            bar_thickness: stroke,
        }
    }

    /// Whether this style can be drawn inside a `cell_size` cell.
    pub fn fits(&self, cell_size: u32) -> bool {
        self.size > 0
            && self.size <= cell_size
            && self.bar_thickness <= self.size
            && self.inset.saturating_add(self.bar_length) <= self.size
    }

    /// Facing bar for `direction`.
    ///
    /// The bar is centred across the heading and inset from the edge
    /// the agent faces.
    pub fn indicator(&self, direction: Direction) -> FacingIndicator {
        let edge = MarkerEdge::facing(direction);
        let centred = self.size.saturating_sub(self.bar_thickness) / 2;
        let far = self
            .size
            .saturating_sub(self.inset)
            .saturating_sub(self.bar_length);
        let rect = match edge {
            MarkerEdge::Top => PixelRect {
                left: centred,
                top: self.inset,
                width: self.bar_thickness,
                height: self.bar_length,
            },
            MarkerEdge::Bottom => PixelRect {
                left: centred,
                top: far,
                width: self.bar_thickness,
                height: self.bar_length,
            },
            MarkerEdge::Left => PixelRect {
                left: self.inset,
                top: centred,
                width: self.bar_length,
                height: self.bar_thickness,
            },
            MarkerEdge::Right => PixelRect {
                left: far,
                top: centred,
                width: self.bar_length,
                height: self.bar_thickness,
            },
        };
        FacingIndicator { edge, rect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_north_is_up() {
        assert_eq!(MarkerEdge::facing(Direction::North), MarkerEdge::Top);
        assert_eq!(MarkerEdge::facing(Direction::South), MarkerEdge::Bottom);
        assert_eq!(MarkerEdge::facing(Direction::East), MarkerEdge::Right);
        assert_eq!(MarkerEdge::facing(Direction::West), MarkerEdge::Left);
    }

    #[test]
    fn default_indicator_geometry() {
        let style = MarkerStyle::default();

        let north = style.indicator(Direction::North).rect;
        assert_eq!(
            north,
            PixelRect {
                left: 75,
                top: 5,
                width: 5,
                height: 50
            }
        );

        let south = style.indicator(Direction::South).rect;
        assert_eq!(south.top, 101);
        assert_eq!(south.top + south.height + style.inset, style.size);

        let east = style.indicator(Direction::East).rect;
        assert_eq!(
            east,
            PixelRect {
                left: 101,
                top: 75,
                width: 50,
                height: 5
            }
        );

        let west = style.indicator(Direction::West).rect;
        assert_eq!(west.left, 5);
        assert_eq!(west.width, 50);
    }

    #[test]
    fn bar_stays_inside_marker() {
        for cell in [1u32, 2, 7, 32, 64, 160, 500] {
            let style = MarkerStyle::scaled(cell);
            assert!(style.fits(cell), "scaled style does not fit {cell}px cell");
            for d in Direction::ALL {
                let r = style.indicator(d).rect;
                assert!(r.left + r.width <= style.size, "{d} bar overflows at {cell}px");
                assert!(r.top + r.height <= style.size, "{d} bar overflows at {cell}px");
            }
        }
    }

    #[test]
    fn oversized_style_does_not_fit() {
        let style = MarkerStyle::default();
        assert!(!style.fits(100));
        let zero = MarkerStyle {
            size: 0,
            ..MarkerStyle::default()
        };
        assert!(!zero.fits(160));
    }
}
