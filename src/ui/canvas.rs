//! Terminal backend: replays a [`DisplayList`] onto a ratatui canvas.
//!
//! The canvas uses half-block pixels, which are roughly square, so the 4:3
//! play field is letterboxed into the terminal to keep its proportions.

use super::renderer::{Color, DisplayList, DrawCommand, Renderer};
use ratatui::{
    layout::Rect,
    style::{Color as TermColor, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Block, Borders,
    },
    Frame,
};

/// Text drawn at this scale or above is rendered bold.
const BOLD_TEXT_SCALE: f32 = 1.5;

/// Convert a renderer color to a terminal color, compositing any
/// translucency over `background`.
pub fn term_color(color: Color, background: Color) -> TermColor {
    let (r, g, b) = color.over(background).to_rgb8();
    TermColor::Rgb(r, g, b)
}

/// Largest centered sub-area of `outer` with a 4:3 aspect in half-block
/// pixels (each cell is one pixel wide and two tall).
pub fn fit_play_area(outer: Rect, world_width: f32, world_height: f32) -> Rect {
    if outer.width == 0 || outer.height == 0 {
        return outer;
    }
    let aspect = world_width as f64 / world_height as f64;
    let max_cols = outer.width as f64;
    let max_pixel_rows = outer.height as f64 * 2.0;

    let (cols, pixel_rows) = if max_cols / max_pixel_rows > aspect {
        (max_pixel_rows * aspect, max_pixel_rows)
    } else {
        (max_cols, max_cols / aspect)
    };
    // Nudge before flooring so 59.99999 rows still count as 60.
    let width = ((cols + 1e-6).floor() as u16).clamp(1, outer.width);
    let height = ((pixel_rows / 2.0 + 1e-6).floor() as u16).clamp(1, outer.height);

    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}

/// World width covered by one terminal column of `area`.
pub fn glyph_width_for(area: Rect, world_width: f32) -> f32 {
    if area.width == 0 {
        return world_width;
    }
    world_width / area.width as f32
}

/// A solid axis-aligned rectangle given by its world-space edges.
#[derive(Debug, Clone)]
pub struct FilledRect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
    pub color: TermColor,
    /// Canvas bounds; the rectangle is clipped to them.
    pub field: (f64, f64),
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let left = self.left.max(0.0);
        let right = self.right.min(self.field.0);
        let bottom = self.bottom.max(0.0);
        let top = self.top.min(self.field.1);
        if left > right || bottom > top {
            return;
        }
        let (Some((x0, y0)), Some((x1, y1))) =
            (painter.get_point(left, top), painter.get_point(right, bottom))
        else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// A solid disc.
#[derive(Debug, Clone)]
pub struct FilledCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: TermColor,
    pub field: (f64, f64),
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let left = (self.x - self.radius).max(0.0);
        let right = (self.x + self.radius).min(self.field.0);
        let bottom = (self.y - self.radius).max(0.0);
        let top = (self.y + self.radius).min(self.field.1);
        if left > right || bottom > top {
            return;
        }
        let (Some((x0, y0)), Some((x1, y1))) =
            (painter.get_point(left, top), painter.get_point(right, bottom))
        else {
            return;
        };

        // Map each grid cell in the bounding box back to world space.
        let lerp = |from: f64, to: f64, i: usize, lo: usize, hi: usize| {
            if hi == lo {
                (from + to) / 2.0
            } else {
                from + (to - from) * (i - lo) as f64 / (hi - lo) as f64
            }
        };
        let r2 = self.radius * self.radius;
        for gy in y0..=y1 {
            let wy = lerp(top, bottom, gy, y0, y1);
            for gx in x0..=x1 {
                let wx = lerp(left, right, gx, x0, x1);
                let (dx, dy) = (wx - self.x, wy - self.y);
                if dx * dx + dy * dy <= r2 {
                    painter.paint(gx, gy, self.color);
                }
            }
        }
    }
}

/// Draw `list` into `area` with a titled border around the play field.
pub fn render_display_list(frame: &mut Frame, area: Rect, list: &DisplayList, title: &str) {
    let background = list.background();
    let field = (list.width() as f64, list.height() as f64);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TermColor::Cyan));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::HalfBlock)
        .background_color(term_color(background, background))
        .x_bounds([0.0, field.0])
        .y_bounds([0.0, field.1])
        .paint(|ctx| {
            for command in list.commands() {
                match command {
                    DrawCommand::Rect {
                        x,
                        y,
                        width,
                        height,
                        color,
                    } => ctx.draw(&FilledRect {
                        left: (*x - *width / 2.0) as f64,
                        bottom: (*y - *height / 2.0) as f64,
                        right: (*x + *width / 2.0) as f64,
                        top: (*y + *height / 2.0) as f64,
                        color: term_color(*color, background),
                        field,
                    }),
                    DrawCommand::Circle {
                        x, y, radius, color, ..
                    } => ctx.draw(&FilledCircle {
                        x: *x as f64,
                        y: *y as f64,
                        radius: *radius as f64,
                        color: term_color(*color, background),
                        field,
                    }),
                    DrawCommand::Text {
                        text,
                        x,
                        y,
                        scale,
                        color,
                    } => {
                        let mut style = Style::default().fg(term_color(*color, background));
                        if *scale >= BOLD_TEXT_SCALE {
                            style = style.add_modifier(Modifier::BOLD);
                        }
                        let x = (*x as f64).clamp(0.0, field.0);
                        let y = (*y as f64).clamp(0.0, field.1);
                        ctx.print(x, y, Line::from(Span::styled(text.clone(), style)));
                    }
                }
            }
        });

    frame.render_widget(canvas, area);
}

/// Inner (border-less) area that `render_display_list` paints into.
pub fn canvas_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_fit_play_area_wide_terminal() {
        let outer = Rect::new(0, 0, 200, 30);
        let fit = fit_play_area(outer, 800.0, 600.0);
        // 30 rows = 60 pixel rows -> 80 columns for 4:3
        assert_eq!(fit.width, 80);
        assert_eq!(fit.height, 30);
        assert_eq!(fit.x, 60);
        assert_eq!(fit.y, 0);
    }

    #[test]
    fn test_fit_play_area_tall_terminal() {
        let outer = Rect::new(0, 0, 80, 60);
        let fit = fit_play_area(outer, 800.0, 600.0);
        // 80 columns -> 60 pixel rows -> 30 cell rows
        assert_eq!(fit.width, 80);
        assert_eq!(fit.height, 30);
        assert_eq!(fit.y, 15);
    }

    #[test]
    fn test_fit_play_area_stays_inside() {
        for (w, h) in [(1, 1), (3, 50), (300, 2), (81, 23)] {
            let outer = Rect::new(2, 3, w, h);
            let fit = fit_play_area(outer, 800.0, 600.0);
            assert!(fit.x >= outer.x && fit.right() <= outer.right());
            assert!(fit.y >= outer.y && fit.bottom() <= outer.bottom());
        }
    }

    #[test]
    fn test_glyph_width_for() {
        assert_eq!(glyph_width_for(Rect::new(0, 0, 80, 24), 800.0), 10.0);
        assert_eq!(glyph_width_for(Rect::new(0, 0, 0, 24), 800.0), 800.0);
    }

    #[test]
    fn test_term_color_blends_alpha() {
        let bg = Color::rgb(0.0, 0.0, 0.0);
        assert_eq!(term_color(Color::rgb(1.0, 1.0, 0.0), bg), TermColor::Rgb(255, 255, 0));
        assert_eq!(
            term_color(Color::rgba(1.0, 1.0, 1.0, 0.5), bg),
            TermColor::Rgb(128, 128, 128)
        );
    }

    #[test]
    fn test_canvas_inner_strips_border() {
        let inner = canvas_inner(Rect::new(0, 0, 10, 10));
        assert_eq!(inner, Rect::new(1, 1, 8, 8));
    }

    #[test]
    fn test_render_display_list_draws_title_and_text() {
        let mut list = DisplayList::new(800.0, 600.0);
        list.clear(Color::rgb(0.0, 0.0, 0.0));
        list.set_color(Color::rgb(0.0, 1.0, 0.0));
        list.draw_rect(400.0, 100.0, 200.0, 40.0);
        list.draw_text_centered("HELLO", 400.0, 300.0, 1.0, Color::rgb(1.0, 1.0, 1.0));

        let mut terminal = Terminal::new(TestBackend::new(82, 32)).unwrap();
        terminal
            .draw(|frame| render_display_list(frame, frame.size(), &list, "Arcade"))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains(" Arcade "));
        assert!(screen.contains("HELLO"));
    }
}
