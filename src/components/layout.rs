//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub summary: Rect,
    pub expenses: Rect,
    pub income: Rect,
    pub charts: Option<Rect>,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// Summary on top, the two tables side by side, the chart panel below them
/// when visible, then the status line and help bar.
pub fn calculate_main_layout(area: Rect, show_charts: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let (tables_area, charts_area) = if show_charts {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[1]);
        (chunks[0], Some(chunks[1]))
    } else {
        (main_chunks[1], None)
    };

    let table_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(tables_area);

    MainLayout {
        summary: main_chunks[0],
        expenses: table_chunks[0],
        income: table_chunks[1],
        charts: charts_area,
        status: main_chunks[2],
        help: main_chunks[3],
    }
}
