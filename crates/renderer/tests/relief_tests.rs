//! Tests for the gradient relief overlay.

use elevation_common::{ColorRampConfig, GridExtent, GridOffset, HeightRange};
use grid_processor::SampleWindow;
use renderer::encoder::{encode_color, encode_gray, to_gray};
use renderer::relief::{apply_relief, ReliefGain};
use test_utils::{create_flat_grid, create_ridge_grid, create_slope_grid, create_world_grid};

fn window(width: usize, height: usize, samples: Vec<i16>) -> SampleWindow {
    SampleWindow::new(GridOffset::default(), GridExtent::new(height, width), samples).unwrap()
}

// ============================================================================
// Neutrality on flat terrain
// ============================================================================

#[test]
fn test_flat_terrain_gray_is_noop() {
    for elevation in [-5000, 0, 1500, 8000] {
        let w = window(16, 12, create_flat_grid(16, 12, elevation));
        let encoded = encode_gray(&w, &HeightRange::default()).unwrap();

        let mut shaded = encoded.clone();
        apply_relief(&mut shaded, &w, ReliefGain::GRAY).unwrap();
        assert_eq!(shaded, encoded);
    }
}

#[test]
fn test_flat_terrain_color_is_noop() {
    let w = window(16, 12, create_flat_grid(16, 12, 2500));
    let encoded = encode_color(&w, &HeightRange::default(), &ColorRampConfig::default()).unwrap();

    let mut shaded = encoded.clone();
    apply_relief(&mut shaded, &w, ReliefGain::COLOR).unwrap();
    assert_eq!(shaded, encoded);
}

// ============================================================================
// Brightening
// ============================================================================

#[test]
fn test_slope_brightens_interior_only() {
    let range = HeightRange::default();
    // +10 m per column: dx = 10, dy = 0 everywhere
    let w = window(5, 4, create_slope_grid(5, 4, 0, 10));
    let encoded = encode_gray(&w, &range).unwrap();
    let mut shaded = encoded.clone();
    apply_relief(&mut shaded, &w, ReliefGain::GRAY).unwrap();

    for y in 0..4 {
        for x in 0..5 {
            let before = encoded.pixel(x, y)[0];
            let after = shaded.pixel(x, y)[0];
            let interior = (1..3).contains(&y) && (1..4).contains(&x);
            if interior {
                assert_eq!(after, before + 30, "pixel ({}, {})", x, y);
            } else {
                assert_eq!(after, before, "border pixel ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_overlay_writes_flipped_rows() {
    // A single bump at raw (row 1, col 2) of a 4x4 window
    let mut samples = create_flat_grid(4, 4, 0);
    samples[4 + 2] = 10;
    let w = window(4, 4, samples);

    let encoded = encode_gray(&w, &HeightRange::default()).unwrap();
    let mut shaded = encoded.clone();
    apply_relief(&mut shaded, &w, 1.0).unwrap();

    let base = to_gray(0, &HeightRange::default());
    // Raw row 1 is display row 2
    assert_eq!(shaded.pixel(1, 2)[0], base + 10);
    assert_eq!(shaded.pixel(2, 2)[0], encoded.pixel(2, 2)[0] + 10);
    // Raw row 2 (display row 1) sees no step to its north or east
    assert_eq!(shaded.pixel(1, 1), encoded.pixel(1, 1));
    assert_eq!(shaded.pixel(2, 1), encoded.pixel(2, 1));
}

#[test]
fn test_color_overlay_touches_red_only() {
    let w = window(5, 5, create_ridge_grid(5, 5, -3000, -2000));
    let encoded = encode_color(&w, &HeightRange::default(), &ColorRampConfig::default()).unwrap();
    let mut shaded = encoded.clone();
    apply_relief(&mut shaded, &w, ReliefGain::COLOR).unwrap();

    // Column 1 steps up 1000 m into the ridge: red saturates
    let before = encoded.pixel(1, 2);
    let after = shaded.pixel(1, 2);
    assert_eq!(before[0], 0);
    assert_eq!(after[0], 255);
    assert_eq!(&after[1..], &before[1..]);
}

#[test]
fn test_overlay_clamps_at_white() {
    let w = window(8, 8, create_world_grid(8, 8));
    let encoded = encode_gray(&w, &HeightRange::default()).unwrap();
    let mut shaded = encoded.clone();
    apply_relief(&mut shaded, &w, 1000.0).unwrap();

    for y in 1..7 {
        for x in 1..7 {
            assert!(shaded.pixel(x, y)[0] >= encoded.pixel(x, y)[0]);
        }
    }
    assert!(shaded.pixels().iter().any(|&p| p == 255));
}

#[test]
fn test_tiny_windows_are_untouched() {
    let w = window(2, 2, vec![0, 1000, 2000, 3000]);
    let encoded = encode_gray(&w, &HeightRange::default()).unwrap();
    let mut shaded = encoded.clone();
    apply_relief(&mut shaded, &w, ReliefGain::GRAY).unwrap();
    assert_eq!(shaded, encoded);
}
