const SATURATION: f64 = 70.0;
const LIGHTNESS: f64 = 50.0;

/// Generate `count` colors with hues spread evenly around the color wheel.
///
/// Index `i` always gets hue `i * 360 / count`, so colors only stay stable
/// while `count` does. Regenerate the whole palette when the number of
/// series changes.
pub fn generate(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let hue = (i as f64 * 360.0) / count as f64;
            hsl_to_hex(hue, SATURATION, LIGHTNESS)
        })
        .collect()
}

/// Convert HSL (degrees, percent, percent) to a lowercase `#rrggbb` string.
fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    format!(
        "#{:02x}{:02x}{:02x}",
        to_channel(r),
        to_channel(g),
        to_channel(b)
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
