//! Screen geometry shared by rendering and mouse hit-testing
//!
//! ```text
//! Row 0-2:  Header (store title, "Mi Cuenta" menu button on the right)
//! Row 3+:   Centered card: title, banners, field grid, actions
//! Bottom:   Status bar (1 row)
//! ```

use crate::state::Field;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Header height (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;
/// Field box (3 rows) plus one row for its error message
pub const FIELD_ROW_HEIGHT: u16 = 4;
/// Banner box height
pub const BANNER_HEIGHT: u16 = 4;
/// Button height in rows
pub const BUTTON_HEIGHT: u16 = 3;

const CARD_MAX_WIDTH: u16 = 64;
const MENU_BUTTON_WIDTH: u16 = 15;
const DROPDOWN_WIDTH: u16 = 20;
const SUBMIT_WIDTH: u16 = 16;

/// Which banners are currently visible; they push the form down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerSlots {
    pub success: bool,
    pub error: bool,
}

/// Rectangles of every interactive element on the register screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub menu_button: Rect,
    pub dropdown: Rect,
    pub status_bar: Rect,
    pub card: Rect,
    pub title: Rect,
    pub success_banner: Option<Rect>,
    pub error_banner: Option<Rect>,
    /// Field boxes in `Field::ALL` order (error line sits just below each)
    pub fields: [Rect; 6],
    pub submit_button: Rect,
    pub note: Rect,
    pub login_link: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, banners: BannerSlots) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Header
                Constraint::Min(0),                // Content
                Constraint::Length(1),             // Status bar
            ])
            .split(area);
        let (header, content, status_bar) = (rows[0], rows[1], rows[2]);

        let menu_button = Rect {
            x: header.right().saturating_sub(MENU_BUTTON_WIDTH + 1),
            y: header.y,
            width: MENU_BUTTON_WIDTH.min(header.width),
            height: HEADER_HEIGHT.min(header.height),
        };
        let dropdown = Rect {
            x: header.right().saturating_sub(DROPDOWN_WIDTH + 1),
            y: header.bottom(),
            width: DROPDOWN_WIDTH.min(area.width),
            height: (2 + 2u16).min(content.height),
        };

        let card_width = CARD_MAX_WIDTH.min(content.width);
        let card = Rect {
            x: content.x + (content.width - card_width) / 2,
            y: content.y,
            width: card_width,
            height: content.height,
        };
        let inner = Rect {
            x: card.x + 1,
            y: card.y + 1,
            width: card.width.saturating_sub(2),
            height: card.height.saturating_sub(2),
        };

        let banner_len = |shown: bool| if shown { BANNER_HEIGHT } else { 0 };
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                              // Title
                Constraint::Length(banner_len(banners.success)),    // Success banner
                Constraint::Length(banner_len(banners.error)),      // Error banner
                Constraint::Length(FIELD_ROW_HEIGHT),               // Nombres | Apellidos
                Constraint::Length(FIELD_ROW_HEIGHT),               // Telefono | Genero
                Constraint::Length(FIELD_ROW_HEIGHT),               // Direccion
                Constraint::Length(FIELD_ROW_HEIGHT),               // Correo
                Constraint::Length(BUTTON_HEIGHT),                  // Submit
                Constraint::Length(1),                              // Note
                Constraint::Length(1),                              // Login link
                Constraint::Min(0),
            ])
            .split(inner);

        let halves = |row: Rect| {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row);
            (field_box(cols[0]), field_box(cols[1]))
        };
        let (nombres, apellidos) = halves(sections[3]);
        let (telefono, genero) = halves(sections[4]);
        let direccion = field_box(sections[5]);
        let correo = field_box(sections[6]);

        let submit_width = SUBMIT_WIDTH.min(sections[7].width);
        let submit_button = Rect {
            x: sections[7].x + (sections[7].width - submit_width) / 2,
            width: submit_width,
            ..sections[7]
        };

        Self {
            header,
            menu_button,
            dropdown,
            status_bar,
            card,
            title: sections[0],
            success_banner: banners.success.then_some(sections[1]),
            error_banner: banners.error.then_some(sections[2]),
            fields: [nombres, apellidos, telefono, genero, direccion, correo],
            submit_button,
            note: sections[8],
            login_link: sections[9],
        }
    }

    pub fn field(&self, field: Field) -> Rect {
        let idx = Field::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default();
        self.fields[idx]
    }

    /// Area treated as "inside" the disclosure menu
    pub fn menu_boundary(&self, open: bool) -> Rect {
        if open {
            self.menu_button.union(self.dropdown)
        } else {
            self.menu_button
        }
    }

    /// Row of a dropdown item (inside the dropdown border)
    pub fn dropdown_item_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = Rect {
            x: self.dropdown.x + 1,
            y: self.dropdown.y + 1,
            width: self.dropdown.width.saturating_sub(2),
            height: self.dropdown.height.saturating_sub(2),
        };
        inner
            .contains(Position::new(column, row))
            .then(|| (row - inner.y) as usize)
    }

    pub fn field_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.fields.iter().position(|r| r.contains(pos))
    }

    /// Close marker in a banner's top-right corner
    pub fn close_marker(banner: Rect) -> Rect {
        Rect {
            x: banner.right().saturating_sub(4),
            y: banner.y,
            width: 3.min(banner.width),
            height: 1.min(banner.height),
        }
    }
}

fn field_box(row: Rect) -> Rect {
    Rect {
        height: row.height.saturating_sub(1),
        ..row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 100, 40), BannerSlots::default())
    }

    #[test]
    fn test_header_and_status_bar() {
        let l = layout();
        assert_eq!(l.header, Rect::new(0, 0, 100, 3));
        assert_eq!(l.status_bar, Rect::new(0, 39, 100, 1));
        assert_eq!(l.menu_button.right(), 99);
    }

    #[test]
    fn test_card_is_centered() {
        let l = layout();
        assert_eq!(l.card.width, 64);
        assert_eq!(l.card.x, 18);
        assert_eq!(l.card.y, 3);
    }

    #[test]
    fn test_fields_do_not_overlap() {
        let l = layout();
        for (i, a) in l.fields.iter().enumerate() {
            assert_eq!(a.height, 3);
            for b in l.fields.iter().skip(i + 1) {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_field_grid_pairs() {
        let l = layout();
        assert_eq!(l.field(Field::Nombres).y, l.field(Field::Apellidos).y);
        assert!(l.field(Field::Nombres).x < l.field(Field::Apellidos).x);
        assert_eq!(l.field(Field::Telefono).y, l.field(Field::Genero).y);
        assert!(l.field(Field::Direccion).y > l.field(Field::Genero).y);
        assert!(l.field(Field::Correo).y > l.field(Field::Direccion).y);
    }

    #[test]
    fn test_banners_push_fields_down() {
        let plain = layout();
        let with_banners = ScreenLayout::new(
            Rect::new(0, 0, 100, 40),
            BannerSlots {
                success: true,
                error: true,
            },
        );
        assert!(plain.success_banner.is_none());
        assert_eq!(
            with_banners.field(Field::Nombres).y,
            plain.field(Field::Nombres).y + 2 * BANNER_HEIGHT
        );
    }

    #[test]
    fn test_field_at_hits() {
        let l = layout();
        let r = l.field(Field::Correo);
        assert_eq!(l.field_at(r.x + 1, r.y + 1), Some(5));
        assert_eq!(l.field_at(0, 0), None);
    }

    #[test]
    fn test_menu_boundary_grows_when_open() {
        let l = layout();
        assert_eq!(l.menu_boundary(false), l.menu_button);
        let open = l.menu_boundary(true);
        assert!(open.contains(Position::new(l.dropdown.x + 1, l.dropdown.y + 1)));
    }

    #[test]
    fn test_dropdown_item_rows() {
        let l = layout();
        let x = l.dropdown.x + 2;
        assert_eq!(l.dropdown_item_at(x, l.dropdown.y + 1), Some(0));
        assert_eq!(l.dropdown_item_at(x, l.dropdown.y + 2), Some(1));
        assert_eq!(l.dropdown_item_at(x, l.dropdown.y), None);
    }
}
