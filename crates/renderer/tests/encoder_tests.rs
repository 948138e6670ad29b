//! Tests for grayscale and colour ramp encoding.

use elevation_common::{ColorRampConfig, GridExtent, GridOffset, HeightRange, ReliefError};
use grid_processor::SampleWindow;
use renderer::encoder::{band_of, encode_color, encode_gray, to_color, to_gray, Band, Rgb};
use renderer::image::PixelFormat;
use test_utils::heights;

fn range() -> HeightRange {
    HeightRange::new(heights::MIN, heights::MAX)
}

fn ramp() -> ColorRampConfig {
    ColorRampConfig::new(heights::GREEN_LIMIT, heights::BROWN_LIMIT)
}

fn column_window(samples: Vec<i16>) -> SampleWindow {
    let height = samples.len();
    SampleWindow::new(GridOffset::default(), GridExtent::new(height, 1), samples).unwrap()
}

// ============================================================================
// to_gray tests
// ============================================================================

#[test]
fn test_gray_endpoints() {
    assert_eq!(to_gray(-12000, &range()), 0);
    assert_eq!(to_gray(9000, &range()), 255);
}

#[test]
fn test_gray_monotonic_and_bounded() {
    let range = range();
    let mut previous = 0u8;
    for s in range.min..=range.max {
        let v = to_gray(s, &range);
        assert!(v >= previous, "not monotonic at {}", s);
        previous = v;
    }
}

#[test]
fn test_gray_clamps_outside_range() {
    assert_eq!(to_gray(i16::MIN, &range()), 0);
    assert_eq!(to_gray(i16::MAX, &range()), 255);
}

#[test]
fn test_gray_midpoint_rounds_to_128() {
    // (-12000 + 9000) / 2 = -1500 -> t = 0.5 -> 0.5 + 127.5
    assert_eq!(to_gray(-1500, &range()), 128);
}

#[test]
fn test_gray_sea_level() {
    // t = 12000 / 21000 = 0.5714 -> 0.5 + 145.71
    assert_eq!(to_gray(0, &range()), 146);
}

// ============================================================================
// to_color tests
// ============================================================================

#[test]
fn test_band_selection_is_exhaustive_and_exclusive() {
    let ramp = ramp();
    for s in i16::MIN..=i16::MAX {
        let memberships = [
            s < 0,
            (0..ramp.green_limit).contains(&s),
            (ramp.green_limit..ramp.brown_limit).contains(&s),
            s >= ramp.brown_limit,
        ];
        assert_eq!(memberships.iter().filter(|m| **m).count(), 1, "sample {}", s);

        let expected = match memberships.iter().position(|m| *m) {
            Some(0) => Band::Water,
            Some(1) => Band::Lowland,
            Some(2) => Band::Highland,
            _ => Band::Peak,
        };
        assert_eq!(band_of(s, &ramp), expected, "sample {}", s);
    }
}

#[test]
fn test_shallow_water_is_pure_blue() {
    let c = to_color(-100, &range(), &ramp());
    assert_eq!(c.r, 0);
    assert_eq!(c.g, 0);
    assert!(c.b < 255);
    // t = 11900 / 12000
    assert_eq!(c.b, 252);
}

#[test]
fn test_deepest_water_is_black() {
    assert_eq!(to_color(-12000, &range(), &ramp()), Rgb::new(0, 0, 0));
    assert_eq!(to_color(-20000, &range(), &ramp()), Rgb::new(0, 0, 0));
}

#[test]
fn test_lowland_is_bright_green() {
    let range = range();
    let ramp = ramp();
    // Sea level starts half-bright
    assert_eq!(to_color(0, &range, &ramp), Rgb::new(0, 127, 0));
    let c = to_color(1999, &range, &ramp);
    assert_eq!((c.r, c.b), (0, 0));
    assert!(c.g >= 254);
}

#[test]
fn test_highland_is_brown() {
    let c = to_color(2000, &range(), &ramp());
    // 0.2 * 255 = 51
    assert_eq!(c, Rgb::new(51, 12, 12));
}

#[test]
fn test_peak_is_gray() {
    let c = to_color(5000, &range(), &ramp());
    assert_eq!(c.r, c.g);
    assert_eq!(c.g, c.b);
    // 0.5 + 0.5 * (1000 / 5000) = 0.6
    assert!((152..=153).contains(&c.r));

    assert_eq!(to_color(9000, &range(), &ramp()), Rgb::gray(255));
    assert_eq!(to_color(i16::MAX, &range(), &ramp()), Rgb::gray(255));
}

// ============================================================================
// Whole-window encoding
// ============================================================================

#[test]
fn test_encode_gray_puts_north_on_top() {
    // south, middle, north
    let window = column_window(vec![-12000, -1500, 9000]);
    let image = encode_gray(&window, &range()).unwrap();

    assert_eq!(image.format(), PixelFormat::Gray8);
    assert_eq!(image.pixels(), &[255, 128, 0]);
}

#[test]
fn test_encode_color_puts_north_on_top() {
    let window = column_window(vec![-12000, 9000]);
    let image = encode_color(&window, &range(), &ramp()).unwrap();

    assert_eq!(image.format(), PixelFormat::Rgb8);
    assert_eq!(image.pixel(0, 0), &[255, 255, 255]);
    assert_eq!(image.pixel(0, 1), &[0, 0, 0]);
}

#[test]
fn test_encode_gray_rejects_degenerate_range() {
    let window = column_window(vec![0, 1]);
    let result = encode_gray(&window, &HeightRange::new(5, 5));
    assert!(matches!(result, Err(ReliefError::Configuration(_))));
}

#[test]
fn test_encode_color_rejects_misordered_limits() {
    let window = column_window(vec![0, 1]);
    let result = encode_color(&window, &range(), &ColorRampConfig::new(4000, 2000));
    assert!(matches!(result, Err(ReliefError::Configuration(_))));
}
