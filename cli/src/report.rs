//! Renders the before/after letter-frequency tables as two side-by-side bar
//! charts and persists them as a PNG image.

use std::path::Path;

use image::{ImageBuffer, ImageError, Rgba};

use hill_crypto::analysis::FrequencyReport;
use hill_crypto::codec::ALPHABET_LEN;

type Canvas = ImageBuffer<Rgba<u8>, Vec<u8>>;

const MARGIN: u32 = 40;
const GAP: u32 = 60;
const SLOT_WIDTH: u32 = 24;
const BAR_WIDTH: u32 = 18;
const PANEL_WIDTH: u32 = ALPHABET_LEN as u32 * SLOT_WIDTH;
const PANEL_HEIGHT: u32 = 400;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([60, 60, 60, 255]);
const ORIGINAL_BAR: Rgba<u8> = Rgba([70, 100, 220, 255]);
const ENCRYPTED_BAR: Rgba<u8> = Rgba([220, 80, 70, 255]);

/// Saves the report as one image: original-text frequencies on the left,
/// encrypted-text frequencies on the right, bars in A..Z order. Each panel
/// is scaled to its own tallest bar.
pub fn save_histograms(report: &FrequencyReport, path: &Path) -> Result<(), ImageError> {
    let width = 2 * PANEL_WIDTH + 2 * MARGIN + GAP;
    let height = PANEL_HEIGHT + 2 * MARGIN;
    let mut canvas = Canvas::from_pixel(width, height, WHITE);

    draw_panel(&mut canvas, MARGIN, &report.original, ORIGINAL_BAR);
    draw_panel(
        &mut canvas,
        MARGIN + PANEL_WIDTH + GAP,
        &report.encrypted,
        ENCRYPTED_BAR,
    );

    canvas.save(path)
}

fn draw_panel(canvas: &mut Canvas, x0: u32, counts: &[u64; ALPHABET_LEN], color: Rgba<u8>) {
    let baseline = MARGIN + PANEL_HEIGHT;
    let max = counts.iter().copied().max().unwrap_or(0);

    fill_rect(canvas, x0, MARGIN, 1, PANEL_HEIGHT, AXIS);
    fill_rect(canvas, x0, baseline, PANEL_WIDTH, 1, AXIS);

    for (index, &count) in counts.iter().enumerate() {
        let bar = scaled_height(count, max);
        if bar == 0 {
            continue;
        }
        let x = x0 + index as u32 * SLOT_WIDTH + (SLOT_WIDTH - BAR_WIDTH) / 2;
        fill_rect(canvas, x, baseline - bar, BAR_WIDTH, bar, color);
    }
}

/// Bar height in pixels; the panel's tallest bar fills the panel.
fn scaled_height(count: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    ((count as u128 * PANEL_HEIGHT as u128) / max as u128) as u32
}

fn fill_rect(canvas: &mut Canvas, x0: u32, y0: u32, width: u32, height: u32, color: Rgba<u8>) {
    for x in x0..x0 + width {
        for y in y0..y0 + height {
            canvas.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_height() {
        assert_eq!(scaled_height(0, 0), 0);
        assert_eq!(scaled_height(0, 10), 0);
        assert_eq!(scaled_height(10, 10), PANEL_HEIGHT);
        assert_eq!(scaled_height(5, 10), PANEL_HEIGHT / 2);
    }

    #[test]
    fn test_bars_stay_inside_the_panel() {
        // the bar of the rightmost letter must end inside the canvas
        let canvas_width = 2 * PANEL_WIDTH + 2 * MARGIN + GAP;
        let last_bar_end =
            MARGIN + PANEL_WIDTH + GAP + 25 * SLOT_WIDTH + (SLOT_WIDTH - BAR_WIDTH) / 2 + BAR_WIDTH;
        assert!(last_bar_end < canvas_width);
    }
}
