//! What a renderer needs to know about a field, without knowing the rules.
//!
//! Nothing here draws: a renderer asks for [`RenderCell`]s, picks a [`Color`]
//! and places a [`PixelRect`] inside the visible [`RenderSpace`].

use crate::{Cell, CreatureStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Purple,
    Green,
}

impl Color {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Purple => "purple",
            Self::Green => "green",
        }
    }

    pub fn rgba(self) -> [u8; 4] {
        match self {
            Self::Black => [0x00, 0x00, 0x00, 0xff],
            Self::Purple => [0x80, 0x00, 0x80, 0xff],
            Self::Green => [0x00, 0x80, 0x00, 0xff],
        }
    }
}

/// Rule-agnostic view of a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderCell {
    pub x: usize,
    pub y: usize,
    pub is_game_of_life: bool,
    pub alive: bool,
    pub is_creature: bool,
    /// `None` for Game of Life cells.
    pub status: Option<CreatureStatus>,
    pub should_draw: bool,
}

impl RenderCell {
    pub fn new(x: usize, y: usize, cell: Cell) -> Self {
        match cell {
            Cell::GameOfLife(c) => Self {
                x,
                y,
                is_game_of_life: true,
                alive: c.alive,
                is_creature: false,
                status: None,
                should_draw: c.alive,
            },
            Cell::Creature(c) => Self {
                x,
                y,
                is_game_of_life: false,
                alive: c.alive,
                is_creature: true,
                status: Some(c.status),
                should_draw: c.status != CreatureStatus::Null,
            },
        }
    }

    pub fn color(&self) -> Option<Color> {
        if !self.should_draw {
            return None;
        }
        match self.status {
            None => Some(Color::Black),
            Some(CreatureStatus::Creature) => Some(Color::Purple),
            Some(CreatureStatus::Food) => Some(Color::Green),
            Some(CreatureStatus::Null) => None,
        }
    }

    /// Screen rectangle of the cell.
    pub fn rect(&self, space: &RenderSpace, cell_size: u32) -> PixelRect {
        let size = cell_size as f64;
        PixelRect {
            x: ((self.x as f64 - space.x1) * size + space.offset_x).round() as i64,
            y: ((self.y as f64 - space.y1) * size + space.offset_y).round() as i64,
            size: cell_size,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub size: u32,
}

/// Window of cells visible on a canvas of `width x height` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSpace {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

impl RenderSpace {
    /// Camera anchored at the top-left cell of the field.
    pub fn new(width: f64, height: f64, cell_size: u32) -> Self {
        let cell = cell_size as f64;
        // pixel position of the camera; panning is the host's business
        let (x, y) = (0., 0.);
        let x1 = (x / cell).floor();
        let y1 = (y / cell).floor();
        Self {
            x1,
            x2: x1 + width / cell,
            y1,
            y2: y1 + height / cell,
            offset_x: -x + x1 * cell,
            offset_y: -y + y1 * cell,
            width,
            height,
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        let (x, y) = (x as f64, y as f64);
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }
}

/// Colored rectangles of every visible cell that should be drawn, in row-major order.
pub fn draw_list(
    cells: impl Iterator<Item = RenderCell>,
    space: &RenderSpace,
    cell_size: u32,
) -> Vec<(PixelRect, Color)> {
    cells
        .filter(|cell| space.contains(cell.x, cell.y))
        .filter_map(|cell| Some((cell.rect(space, cell_size), cell.color()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CreatureCell, LifeCell};

    #[test]
    fn life_cells_draw_black_when_alive() {
        let alive = RenderCell::new(1, 2, Cell::GameOfLife(LifeCell::ALIVE));
        assert!(alive.is_game_of_life && !alive.is_creature && alive.should_draw);
        assert_eq!(alive.color(), Some(Color::Black));
        let dead = RenderCell::new(1, 2, Cell::GameOfLife(LifeCell::DEAD));
        assert_eq!(dead.color(), None);
    }

    #[test]
    fn creature_cells_by_status() {
        let c = RenderCell::new(0, 0, Cell::Creature(CreatureCell::creature(6.)));
        assert_eq!(c.color().map(Color::css_name), Some("purple"));
        let f = RenderCell::new(0, 0, Cell::Creature(CreatureCell::food(10.)));
        assert_eq!(f.color().map(Color::css_name), Some("green"));
        let e = RenderCell::new(0, 0, Cell::Creature(CreatureCell::empty()));
        assert!(!e.should_draw);
        assert_eq!(e.status, Some(CreatureStatus::Null));
        assert_eq!(e.color(), None);
    }

    #[test]
    fn render_space_covers_canvas() {
        let space = RenderSpace::new(300., 200., 10);
        assert_eq!((space.x1, space.x2, space.y1, space.y2), (0., 30., 0., 20.));
        assert!(space.contains(29, 19));
        assert!(!space.contains(30, 0));
        let cell = RenderCell::new(3, 4, Cell::GameOfLife(LifeCell::ALIVE));
        assert_eq!(cell.rect(&space, 10), PixelRect { x: 30, y: 40, size: 10 });
    }

    #[test]
    fn draw_list_skips_hidden_and_empty_cells() {
        let space = RenderSpace::new(20., 10., 10);
        let cells = vec![
            RenderCell::new(0, 0, Cell::Creature(CreatureCell::creature(6.))),
            RenderCell::new(1, 0, Cell::Creature(CreatureCell::empty())),
            RenderCell::new(2, 0, Cell::Creature(CreatureCell::food(10.))),
            RenderCell::new(1, 0, Cell::GameOfLife(LifeCell::ALIVE)),
        ];
        assert_eq!(
            draw_list(cells.into_iter(), &space, 10),
            vec![
                (PixelRect { x: 0, y: 0, size: 10 }, Color::Purple),
                (PixelRect { x: 10, y: 0, size: 10 }, Color::Black),
            ]
        );
    }
}
