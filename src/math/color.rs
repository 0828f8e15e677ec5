/// Golden-ratio conjugate; successive multiples spread hues evenly
const GOLDEN_RATIO_CONJUGATE: f32 = 0.618_034;

/// Convert HSV in [0, 1] to linear RGB
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let c = v * s;
    let h_prime = h * 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Hue of the `index`-th entry in a golden-ratio sweep
pub fn golden_hue(index: usize) -> f32 {
    (index as f32 * GOLDEN_RATIO_CONJUGATE).fract()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_primaries() {
        let red = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((red[0] - 1.0).abs() < 0.01 && red[1].abs() < 0.01 && red[2].abs() < 0.01);

        let green = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!(green[0].abs() < 0.01 && (green[1] - 1.0).abs() < 0.01);

        let blue = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!((blue[2] - 1.0).abs() < 0.01 && blue[0].abs() < 0.01);
    }

    #[test]
    fn test_hsv_to_rgb_grey_ignores_hue() {
        for hue in [0.0, 0.25, 0.5, 0.99] {
            let rgb = hsv_to_rgb(hue, 0.0, 0.5);
            for channel in rgb {
                assert!((channel - 0.5).abs() < 0.01);
            }
        }
    }

    #[test]
    fn test_hue_wraps() {
        let a = hsv_to_rgb(0.25, 0.8, 0.9);
        let b = hsv_to_rgb(1.25, 0.8, 0.9);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-5);
        }
    }

    #[test]
    fn test_golden_hue_stays_in_unit_range() {
        for i in 0..100 {
            let hue = golden_hue(i);
            assert!((0.0..1.0).contains(&hue));
        }
        assert_ne!(golden_hue(1), golden_hue(2));
    }
}
