use crate::geom::point::Point;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect as ImageRect;
use std::path::Path;

const M1_COLOR: Rgba<u8> = Rgba([0, 140, 255, 255]);
const M2_COLOR: Rgba<u8> = Rgba([255, 200, 0, 255]);
const VIA_COLOR: Rgba<u8> = Rgba([255, 40, 90, 255]);
const OBSTACLE_COLOR: Rgba<u8> = Rgba([200, 40, 40, 110]);
const ENDPOINT_COLOR: Rgba<u8> = Rgba([40, 220, 90, 255]);

/// Renders a combined M1/M2 view of the routed design: obstacles as
/// shaded squares, M1 segments in blue, M2 segments in gold, vias as
/// red dots, and net endpoints boxed in green.
///
/// `routes` pairs a net name with its committed path; empty paths
/// (unrouted nets) are skipped. Best-effort: a failure to write the
/// file is silently ignored, matching the teacher's renderer.
pub fn draw_routed_design(
    width: u32,
    height: u32,
    obstructions: &[Point],
    routes: &[(String, Vec<Point>)],
    cell_px: u32,
    filename: &str,
) {
    if width == 0 || height == 0 {
        return;
    }

    let img_w = width * cell_px;
    let img_h = height * cell_px;
    let mut img = RgbaImage::from_pixel(img_w, img_h, Rgba([15, 15, 18, 255]));

    let map = |x: u32, y: u32| -> (f32, f32) {
        (
            (x * cell_px + cell_px / 2) as f32,
            (img_h as i64 - (y * cell_px + cell_px / 2) as i64) as f32,
        )
    };

    let half = (cell_px as f32 * 0.35).max(1.0) as i32;
    for obs in obstructions {
        let (cx, cy) = map(obs.x, obs.y);
        let rect = ImageRect::at(cx as i32 - half, cy as i32 - half)
            .of_size((half * 2) as u32, (half * 2) as u32);
        draw_filled_rect_mut(&mut img, rect, OBSTACLE_COLOR);
    }

    for (_, path) in routes {
        if path.len() < 2 {
            continue;
        }
        for w in path.windows(2) {
            let (a, b) = (w[0], w[1]);
            let (ax, ay) = map(a.x, a.y);
            let (bx, by) = map(b.x, b.y);
            if a.layer != b.layer {
                let r = (cell_px as f32 * 0.22).max(1.0) as i32;
                let rect =
                    ImageRect::at(ax as i32 - r, ay as i32 - r).of_size((r * 2) as u32, (r * 2) as u32);
                draw_filled_rect_mut(&mut img, rect, VIA_COLOR);
            } else {
                let color = if a.layer == 1 { M1_COLOR } else { M2_COLOR };
                draw_line_segment_mut(&mut img, (ax, ay), (bx, by), color);
            }
        }

        for endpoint in [path[0], path[path.len() - 1]] {
            let (cx, cy) = map(endpoint.x, endpoint.y);
            let r = (cell_px as f32 * 0.4).max(2.0) as i32;
            let rect =
                ImageRect::at(cx as i32 - r, cy as i32 - r).of_size((r * 2) as u32, (r * 2) as u32);
            draw_hollow_rect_mut(&mut img, rect, ENDPOINT_COLOR);
        }
    }

    let _ = img.save(Path::new(filename));
}
