//! Interactive terminal shell: drives the scene through its command
//! interface and paints each frame on a braille canvas.
//!
//! Translucent strip fills are reduced to their outlines here; the PNG
//! export path renders them fully.

use std::io;
use std::path::Path;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color as TermColor,
    symbols,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Line},
    },
};

use crate::export;
use crate::relativity::special::{gamma, valid_beta};
use crate::render::{self, Color, DrawCmd};
use crate::scene::{Scene, SceneError};
use crate::viewport::Viewport;

const BETA_STEP: f64 = 0.01;
const PAN_STEP_PX: f64 = 16.0;
const EXPORT_WIDTH: u32 = 1600;
const EXPORT_HEIGHT: u32 = 1000;
const EXPORT_PATH: &str = "diagram.png";

/// Braille cells subdivide into 2x4 dots; the canvas is addressed in that
/// finer pseudo-pixel space.
const CELL_PX_X: f64 = 2.0;
const CELL_PX_Y: f64 = 4.0;

/// Top-level controller: the scene, viewport, and boost parameter, mutated
/// only through the apply_* intents. Each intent triggers exactly one
/// synchronous render pass on the next draw.
struct App {
    scene: Scene,
    viewport: Viewport,
    beta: f64,
    status: String,
}

impl App {
    fn new() -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::new(0.0, 0.0),
            beta: 0.0,
            status: String::from("arrows: beta  +/-: zoom  wasd: pan  v/c/b/t/y: add  r: reset  e: save  q: quit"),
        }
    }

    fn apply_beta_step(&mut self, delta: f64) {
        let next = self.beta + delta;
        if valid_beta(next) && next.abs() <= 0.99 {
            self.beta = next;
        }
    }

    fn apply_pan(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by_pixels(dx, dy);
    }

    fn report(&mut self, result: Result<(), SceneError>, ok: &str) {
        self.status = match result {
            Ok(()) => ok.to_string(),
            Err(e) => e.to_string(),
        };
    }

    fn export(&mut self) {
        let mut vp = self.viewport;
        vp.width = f64::from(EXPORT_WIDTH);
        vp.height = f64::from(EXPORT_HEIGHT);
        let cmds = render::render(&self.scene, self.beta, &vp);
        self.status = match export::save_png(&cmds, EXPORT_WIDTH, EXPORT_HEIGHT, Path::new(EXPORT_PATH)) {
            Ok(()) => format!("saved {EXPORT_PATH}"),
            Err(e) => format!("export failed: {e}"),
        };
    }
}

pub fn start() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(f.area());

            draw_diagram(f, chunks[0], &mut app);

            let g = gamma(app.beta);
            let status = format!(
                "beta = {:+.2}   gamma = {:.4}   zoom = {:.2}   {}",
                app.beta, g, app.viewport.zoom, app.status
            );
            f.render_widget(
                Paragraph::new(status).block(Block::default().borders(Borders::ALL)),
                chunks[1],
            );
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Right => app.apply_beta_step(BETA_STEP),
                    KeyCode::Left => app.apply_beta_step(-BETA_STEP),
                    KeyCode::Char('+') | KeyCode::Char('=') => app.viewport.zoom_in(),
                    KeyCode::Char('-') => app.viewport.zoom_out(),
                    KeyCode::Char('a') => app.apply_pan(PAN_STEP_PX, 0.0),
                    KeyCode::Char('d') => app.apply_pan(-PAN_STEP_PX, 0.0),
                    KeyCode::Char('w') => app.apply_pan(0.0, PAN_STEP_PX),
                    KeyCode::Char('s') => app.apply_pan(0.0, -PAN_STEP_PX),
                    KeyCode::Char('v') => {
                        let v = app.beta;
                        let r = app.scene.add_velocity(v);
                        app.report(r, &format!("added worldline v = {v:+.2}"));
                    }
                    KeyCode::Char('c') => {
                        let r = app.scene.add_cat();
                        app.report(r, "added cat");
                    }
                    KeyCode::Char('b') => {
                        let beta = app.beta;
                        let r = app.scene.add_ladder_barn(beta);
                        app.report(r, "added ladder and barn");
                    }
                    KeyCode::Char('t') => {
                        let r = app.scene.show_twin_paradox();
                        app.report(r, "twin paradox on");
                    }
                    KeyCode::Char('y') => {
                        let r = app.scene.show_hyperbolas();
                        app.report(r, "hyperbolas on");
                    }
                    KeyCode::Char('r') => {
                        app.scene.reset();
                        app.status = String::from("scene cleared");
                    }
                    KeyCode::Char('e') => app.export(),
                    KeyCode::Char('q') => {
                        crossterm::terminal::disable_raw_mode()?;
                        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
                        terminal.show_cursor()?;
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn draw_diagram(f: &mut ratatui::Frame<'_>, area: Rect, app: &mut App) {
    // Address the canvas in braille pseudo-pixels so the projection's
    // uniform-scale invariant carries over to cell space.
    let px_w = f64::from(area.width.saturating_sub(2)) * CELL_PX_X;
    let px_h = f64::from(area.height.saturating_sub(2)) * CELL_PX_Y;
    app.viewport.width = px_w;
    app.viewport.height = px_h;

    let cmds = render::render(&app.scene, app.beta, &app.viewport);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Minkowski diagram"))
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, px_w])
        .y_bounds([0.0, px_h])
        .paint(move |ctx| {
            for cmd in &cmds {
                paint_cmd(ctx, cmd, px_h);
            }
        });
    f.render_widget(canvas, area);
}

fn paint_cmd(ctx: &mut Context<'_>, cmd: &DrawCmd, px_h: f64) {
    // The canvas y-axis points up; draw commands arrive y-down.
    let flip = |p: (f64, f64)| (p.0, px_h - p.1);
    match cmd {
        DrawCmd::Polyline { points, color, .. } => {
            for pair in points.windows(2) {
                let (x1, y1) = flip(pair[0]);
                let (x2, y2) = flip(pair[1]);
                ctx.draw(&Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: term_color(*color),
                });
            }
        }
        DrawCmd::Polygon { points, color, .. } => {
            // No translucent fill on a terminal; trace the boundary.
            let n = points.len();
            for i in 0..n {
                let (x1, y1) = flip(points[i]);
                let (x2, y2) = flip(points[(i + 1) % n]);
                ctx.draw(&Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: term_color(*color),
                });
            }
        }
        DrawCmd::Disc { center, radius, color } => {
            let (x, y) = flip(*center);
            ctx.draw(&Circle {
                x,
                y,
                radius: *radius,
                color: term_color(*color),
            });
        }
    }
}

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb(c.r, c.g, c.b)
}
