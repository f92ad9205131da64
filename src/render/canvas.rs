//! Canvas 2D command executor.
//!
//! Replays a [`DrawCommand`] list against a `CanvasRenderingContext2d`.
//! The backing store is sized in physical pixels and the context scaled
//! once per resize, so all commands use logical coordinates.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{GridError, Result};

use super::{colors, DrawCommand, TextAlign, FONT};

/// Canvas 2D drawing surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    dpr: f32,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| GridError::Surface("2d context unavailable".into()))?
            .ok_or_else(|| GridError::Surface("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::Surface("context is not 2d".into()))?;

        Ok(Self {
            canvas,
            ctx,
            width: 0,
            height: 0,
            dpr: 1.0,
        })
    }

    /// Resize the backing store to physical pixels and scale the context
    /// for the device pixel ratio. Setting the canvas size resets the
    /// context transform, so the scale is reapplied here each time.
    pub fn resize(&mut self, physical_width: u32, physical_height: u32, dpr: f32) {
        self.width = physical_width;
        self.height = physical_height;
        self.dpr = dpr;

        self.canvas.set_width(physical_width);
        self.canvas.set_height(physical_height);
        let _ = self.ctx.scale(f64::from(dpr), f64::from(dpr));
    }

    /// Replay one frame's commands.
    pub fn execute(&self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        for command in commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    ctx.set_fill_style_str(colors::BACKGROUND);
                    ctx.fill_rect(0.0, 0.0, f64::from(*width), f64::from(*height));
                }
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(
                        f64::from(*x),
                        f64::from(*y),
                        f64::from(*width),
                        f64::from(*height),
                    );
                }
                DrawCommand::Line { x1, y1, x2, y2, color } => {
                    ctx.set_stroke_style_str(color);
                    ctx.begin_path();
                    ctx.move_to(f64::from(*x1), f64::from(*y1));
                    ctx.line_to(f64::from(*x2), f64::from(*y2));
                    ctx.stroke();
                }
                DrawCommand::StrokeRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    ctx.set_stroke_style_str(color);
                    ctx.stroke_rect(
                        f64::from(*x),
                        f64::from(*y),
                        f64::from(*width),
                        f64::from(*height),
                    );
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    color,
                    align,
                } => {
                    ctx.set_font(FONT);
                    ctx.set_text_baseline("middle");
                    ctx.set_text_align(match align {
                        TextAlign::Left => "left",
                        TextAlign::Center => "center",
                    });
                    ctx.set_fill_style_str(color);
                    let _ = ctx.fill_text(text, f64::from(*x), f64::from(*y));
                }
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }
}
