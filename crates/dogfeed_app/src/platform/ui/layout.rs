use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Regions of the single feed screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub welcome: Rect,
    pub buttons: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        header: rows[0],
        welcome: rows[1],
        buttons: rows[2],
        list: rows[3],
        footer: rows[4],
    }
}

/// Rect of the given size centered in `area`, clamped to fit.
pub fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_takes_the_remaining_height() {
        let areas = split(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.header.height, 2);
        assert_eq!(areas.footer.y, 23);
        assert_eq!(areas.list.height, 24 - 2 - 1 - 3 - 1);
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered(40, 4, area);

        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.y, 3);
    }
}
