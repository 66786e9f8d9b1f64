//! Immediate-mode drawing surface used by the menu and the games.
//!
//! Coordinates are world units on the 800×600 play field with the origin at
//! the bottom-left. Rectangles and circles are centered on the given point.
//! Games draw into a [`DisplayList`], which the terminal backend replays at
//! present time (see `ui::canvas`).

/// RGBA color with float channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Composite this color over an opaque `background`.
    pub fn over(self, background: Color) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        Color::rgb(
            self.r * a + background.r * (1.0 - a),
            self.g * a + background.g * (1.0 - a),
            self.b * a + background.b * (1.0 - a),
        )
    }

    /// 8-bit channels, ignoring alpha.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Left edge of a text run of `width` anchored at `x`.
    pub fn left_edge(self, x: f32, width: f32) -> f32 {
        match self {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        }
    }
}

/// One recorded drawing operation, already resolved to absolute positions.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        segments: u32,
        color: Color,
    },
    /// `x` is the left edge after alignment, `y` the top of the text.
    Text {
        text: String,
        x: f32,
        y: f32,
        scale: f32,
        color: Color,
    },
}

pub trait Renderer {
    /// Start a frame: drop everything drawn so far and fill with `color`.
    fn clear(&mut self, color: Color);

    /// Color for subsequent shapes.
    fn set_color(&mut self, color: Color);

    fn draw_rect(&mut self, cx: f32, cy: f32, width: f32, height: f32);

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, segments: u32);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Color, align: TextAlign);

    fn draw_text_centered(&mut self, text: &str, center_x: f32, y: f32, scale: f32, color: Color) {
        self.draw_text(text, center_x, y, scale, color, TextAlign::Center);
    }

    /// Width of `text` in world units.
    fn text_width(&self, text: &str, scale: f32) -> f32;

    fn width(&self) -> f32;

    fn height(&self) -> f32;
}

/// Nominal glyph advance before the backend reports its real cell width.
pub const DEFAULT_GLYPH_WIDTH: f32 = 10.0;

/// Records a frame's drawing so it can be replayed or inspected.
#[derive(Debug, Clone)]
pub struct DisplayList {
    width: f32,
    height: f32,
    /// World width of one rendered character.
    glyph_width: f32,
    background: Color,
    color: Color,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            glyph_width: DEFAULT_GLYPH_WIDTH,
            background: Color::BLACK,
            color: Color::WHITE,
            commands: Vec::new(),
        }
    }

    pub fn set_glyph_width(&mut self, glyph_width: f32) {
        if glyph_width > 0.0 {
            self.glyph_width = glyph_width;
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every text string drawn this frame, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl Renderer for DisplayList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.background = Color { a: 1.0, ..color };
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_rect(&mut self, cx: f32, cy: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect {
            x: cx,
            y: cy,
            width,
            height,
            color: self.color,
        });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, segments: u32) {
        self.commands.push(DrawCommand::Circle {
            x: cx,
            y: cy,
            radius,
            segments,
            color: self.color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Color, align: TextAlign) {
        if text.is_empty() {
            return;
        }
        let left = align.left_edge(x, self.text_width(text, scale));
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x: left,
            y,
            scale,
            color,
        });
    }

    /// Terminal cells have a fixed size, so `scale` only affects styling.
    fn text_width(&self, text: &str, _scale: f32) -> f32 {
        text.chars().count() as f32 * self.glyph_width
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}
