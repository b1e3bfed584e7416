//! Doughnut chart rendering for the chart panel

use crate::components::table::{format_money, truncate_to_width};
use crate::model::{Category, ChartInstance, ChartPanel, Rgb};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};
use std::f64::consts::TAU;

const INNER_RADIUS: f64 = 0.55;
const RINGS: usize = 12;
const STEPS_PER_RING: usize = 360;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Sample points of a doughnut split into sectors
///
/// Sector `i` spans `fractions[i]` of the full turn, starting at the top and
/// going clockwise. Returns one point set per fraction.
pub fn doughnut_points(fractions: &[f64], rings: usize, steps: usize) -> Vec<Vec<(f64, f64)>> {
    let mut sectors = vec![Vec::new(); fractions.len()];
    if fractions.is_empty() || steps == 0 {
        return sectors;
    }

    // Upper bound of each sector as a share of the turn
    let mut bounds = Vec::with_capacity(fractions.len());
    let mut acc = 0.0;
    for f in fractions {
        acc += f;
        bounds.push(acc);
    }

    for ring in 0..rings {
        let r = if rings > 1 {
            INNER_RADIUS + (1.0 - INNER_RADIUS) * ring as f64 / (rings - 1) as f64
        } else {
            1.0
        };
        for step in 0..steps {
            let share = (step as f64 + 0.5) / steps as f64;
            let Some(sector) = bounds.iter().position(|&bound| share < bound) else {
                continue;
            };
            let angle = share * TAU;
            sectors[sector].push((r * angle.sin(), r * angle.cos()));
        }
    }

    sectors
}

/// Draw the shared chart panel with one chart per category
pub fn draw_chart_panel(frame: &mut Frame, area: Rect, panel: &ChartPanel, currency: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Charts ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (category, half) in Category::all().into_iter().zip(halves.iter()) {
        draw_category_chart(frame, *half, category, panel.instance(category), currency);
    }
}

fn draw_category_chart(
    frame: &mut Frame,
    area: Rect,
    category: Category,
    instance: Option<&ChartInstance>,
    currency: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", category.title()));

    let Some(instance) = instance else {
        frame.render_widget(block, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let fractions = instance.fractions();
    let sectors = doughnut_points(&fractions, RINGS, STEPS_PER_RING);
    let colored: Vec<(Color, Vec<(f64, f64)>)> = instance
        .slices
        .iter()
        .map(|slice| to_color(slice.color))
        .zip(sectors)
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for (color, coords) in &colored {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });
    frame.render_widget(canvas, chunks[0]);

    let label_width = (chunks[1].width as usize).saturating_sub(22).max(4);
    let legend: Vec<Line> = instance
        .slices
        .iter()
        .zip(fractions.iter())
        .map(|(slice, fraction)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(to_color(slice.color))),
                Span::raw(format!("{} ", truncate_to_width(&slice.label, label_width))),
                Span::styled(
                    format_money(currency, slice.value),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!(" {:.1}%", fraction * 100.0),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::chart::ColorPicker;
    use crate::model::{Entry, Ledger};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_points_split_by_fraction() {
        let sectors = doughnut_points(&[0.75, 0.25], 1, 100);
        assert_eq!(sectors[0].len(), 75);
        assert_eq!(sectors[1].len(), 25);
    }

    #[test]
    fn test_points_lie_on_the_ring() {
        let sectors = doughnut_points(&[1.0], 3, 40);
        for (x, y) in &sectors[0] {
            let r = (x * x + y * y).sqrt();
            assert!(r >= INNER_RADIUS - 1e-9 && r <= 1.0 + 1e-9);
        }
        assert_eq!(sectors[0].len(), 120);
    }

    #[test]
    fn test_zero_fractions_draw_nothing() {
        let sectors = doughnut_points(&[0.0, 0.0], 2, 50);
        assert!(sectors.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_panel_draws_legend_for_built_chart() {
        let ledger = Ledger::new(vec![Entry::new("Aluguel", 1200.0, "2024-01-05")], vec![]);
        let mut panel = ChartPanel::new(ColorPicker::with_seed(3));
        panel.refresh(&ledger);

        let mut terminal = Terminal::new(TestBackend::new(200, 20)).unwrap();
        terminal
            .draw(|frame| draw_chart_panel(frame, frame.area(), &panel, "R$"))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Aluguel"));
        assert!(content.contains("100.0%"));
    }
}
