use crate::{
    assets::GlyphAssets,
    buffer::ScriptBuffer,
    input::{self, KeyAction},
    layout::{self, PlacedGlyph},
    translit,
};

use ratatui::{
    crossterm::event,
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as GridLine, Points},
        *,
    },
};

/// Ink used for bitmap glyph dots.
pub const INK_COLOR: Color = Color::Black;
/// Marks symbols drawn through the fallback text path.
pub const FALLBACK_COLOR: Color = Color::Red;

const PARCHMENT: Color = Color::Rgb(0xD2, 0xB4, 0x8C);
const PARCHMENT_GRID: Color = Color::Rgb(0xC8, 0xA8, 0x82);

const BACKDROP_COLUMN_STEP: f64 = 100.0;
const BACKDROP_ROW_STEP: f64 = 50.0;

/// How one placed symbol gets drawn. The fallback variant carries the
/// symbol the static table resolved, already mapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPath {
    Bitmap,
    Fallback(char),
}

/// Everything one redraw needs: placed symbols with their chosen path, and
/// where the next symbol would go.
pub struct RenderPlan {
    pub glyphs: Vec<(PlacedGlyph, RenderPath)>,
    pub cursor: (f64, f64),
}

/// Decides the render path for every placed symbol of `text`.
///
/// `enhanced` is the startup probe result; when it is off the asset map is
/// not even consulted.
pub fn render_plan(text: &str, assets: &GlyphAssets, enhanced: bool) -> RenderPlan {
    let layout = layout::place(text);
    let glyphs = layout
        .glyphs
        .into_iter()
        .map(|glyph| {
            let path = if enhanced && assets.get(glyph.ch).is_some() {
                RenderPath::Bitmap
            } else {
                RenderPath::Fallback(translit::glagolitic(glyph.ch).unwrap_or(glyph.ch))
            };
            (glyph, path)
        })
        .collect();

    RenderPlan {
        glyphs,
        cursor: layout.cursor,
    }
}

pub struct App {
    buffer: ScriptBuffer,
    assets: GlyphAssets,
    enhanced: bool,
    echo: Option<String>,
}

impl App {
    pub fn new(assets: GlyphAssets) -> Self {
        let enhanced = assets.enhanced();

        Self {
            buffer: ScriptBuffer::new(),
            assets,
            enhanced,
            echo: None,
        }
    }

    pub fn enhanced(&self) -> bool {
        self.enhanced
    }

    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn handle_key(&mut self, key: event::KeyEvent) {
        let action = input::classify(key.code);
        if self.buffer.apply(action) {
            self.echo = Some(echo_line(action));
        }
    }

    pub fn draw_ui(&self, f: &mut Frame) {
        let area = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1), // Title
                    Constraint::Min(10),   // Canvas
                    Constraint::Length(3), // Console echo
                ]
                .as_ref(),
            )
            .split(area);

        let title =
            Paragraph::new("Latin to Glagolitic script converter").alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let canvas_block = Block::default().borders(Borders::ALL);
        let inner = canvas_block.inner(chunks[1]);

        let plan = render_plan(self.buffer.as_str(), &self.assets, self.enhanced);

        let canvas = Canvas::default()
            .block(canvas_block)
            .background_color(PARCHMENT)
            .marker(Marker::Braille)
            .x_bounds([0.0, layout::CANVAS_WIDTH])
            .y_bounds([0.0, layout::CANVAS_HEIGHT])
            .paint(|ctx| {
                draw_backdrop(ctx);
                for (glyph, path) in &plan.glyphs {
                    match path {
                        RenderPath::Bitmap => self.draw_bitmap(ctx, glyph),
                        RenderPath::Fallback(symbol) => {
                            ctx.print(
                                glyph.x,
                                flip_y(glyph.y),
                                Span::styled(
                                    symbol.to_string(),
                                    Style::default().fg(FALLBACK_COLOR),
                                ),
                            );
                        }
                    }
                }
            });
        f.render_widget(canvas, chunks[1]);

        let mode = if self.enhanced {
            format!("bitmap glyphs ({} loaded)", self.assets.len())
        } else {
            "unicode fallback".to_string()
        };
        let mut status = format!("Mode: {mode} | Chars: {}", self.buffer.char_count());
        if let Some(echo) = &self.echo {
            status.push_str(" | Last: ");
            status.push_str(echo);
        }
        status.push_str(" | Esc quits");

        let console_block = Block::default().title("Console").borders(Borders::ALL);
        f.render_widget(Paragraph::new(status).block(console_block), chunks[2]);

        let (col, row) = cursor_cell(plan.cursor, inner);
        f.set_cursor_position((col, row));
    }

    fn draw_bitmap(&self, ctx: &mut Context, glyph: &PlacedGlyph) {
        let Some(bitmap) = self.assets.get(glyph.ch) else {
            return;
        };
        let coords: Vec<(f64, f64)> = bitmap
            .dots
            .iter()
            .map(|&(dx, dy)| (glyph.x + f64::from(dx), flip_y(glyph.y + f64::from(dy))))
            .collect();
        ctx.draw(&Points {
            coords: &coords,
            color: INK_COLOR,
        });
    }
}

fn echo_line(action: KeyAction) -> String {
    match action {
        KeyAction::Insert(c) => format!("{c} -> {}", translit::glagolitic(c).unwrap_or(c)),
        KeyAction::Space => "space".to_string(),
        KeyAction::Newline => "enter".to_string(),
        KeyAction::DeleteLast => "backspace".to_string(),
        KeyAction::Ignored => String::new(),
    }
}

// Layout coordinates grow downward, canvas coordinates grow upward.
fn flip_y(y: f64) -> f64 {
    layout::CANVAS_HEIGHT - y
}

// Simulated parchment: ruled grid over the tan background.
fn draw_backdrop(ctx: &mut Context) {
    let mut x = 0.0;
    while x < layout::CANVAS_WIDTH {
        ctx.draw(&GridLine {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: layout::CANVAS_HEIGHT,
            color: PARCHMENT_GRID,
        });
        x += BACKDROP_COLUMN_STEP;
    }
    let mut y = 0.0;
    while y < layout::CANVAS_HEIGHT {
        ctx.draw(&GridLine {
            x1: 0.0,
            y1: y,
            x2: layout::CANVAS_WIDTH,
            y2: y,
            color: PARCHMENT_GRID,
        });
        y += BACKDROP_ROW_STEP;
    }
}

/// Maps a logical cursor position to a terminal cell inside `inner`.
fn cursor_cell(cursor: (f64, f64), inner: Rect) -> (u16, u16) {
    let col = (cursor.0 / layout::CANVAS_WIDTH) * f64::from(inner.width);
    let row = (cursor.1 / layout::CANVAS_HEIGHT) * f64::from(inner.height);
    (
        inner.x + (col as u16).min(inner.width.saturating_sub(1)),
        inner.y + (row as u16).min(inner.height.saturating_sub(1)),
    )
}
