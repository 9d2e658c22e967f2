//! Rasterizes a draw-command list to a PNG file via plotters.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::Color as PlottersColor;

use crate::render::{Color, DrawCmd};

fn rgb(c: Color) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn px(p: (f64, f64)) -> (i32, i32) {
    (p.0.round() as i32, p.1.round() as i32)
}

/// Draws the command list onto a white bitmap of the given pixel size and
/// writes it out as a PNG. This is the only persisted artifact the pipeline
/// produces.
pub fn save_png(cmds: &[DrawCmd], width: u32, height: u32, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    for cmd in cmds {
        match cmd {
            DrawCmd::Polyline { points, color, width } => {
                let style = ShapeStyle::from(&rgb(*color)).stroke_width(width.round() as u32);
                root.draw(&PathElement::new(
                    points.iter().copied().map(px).collect::<Vec<_>>(),
                    style,
                ))?;
            }
            DrawCmd::Polygon { points, color, alpha } => {
                root.draw(&Polygon::new(
                    points.iter().copied().map(px).collect::<Vec<_>>(),
                    rgb(*color).mix(*alpha).filled(),
                ))?;
            }
            DrawCmd::Disc { center, radius, color } => {
                root.draw(&Circle::new(
                    px(*center),
                    radius.round() as i32,
                    ShapeStyle::from(&rgb(*color)).filled(),
                ))?;
            }
        }
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::scene::Scene;
    use crate::viewport::Viewport;

    #[test]
    fn exports_a_nonempty_png() {
        let mut scene = Scene::new();
        scene.add_velocity(0.6).unwrap();
        scene.add_cat().unwrap();
        let vp = Viewport::new(640.0, 480.0);
        let cmds = render(&scene, 0.4, &vp);

        let path = std::env::temp_dir().join("minkdiag_export_test.png");
        save_png(&cmds, 640, 480, &path).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
        std::fs::remove_file(&path).unwrap();
    }
}
