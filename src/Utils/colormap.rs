//! Red-yellow-green diverging gradient (ColorBrewer RdYlGn, 11 classes) used to color
//! sample markers by their position in the sequence: first points red, last points green.
use plotters::style::RGBColor;

const RDYLGN: [(u8, u8, u8); 11] = [
    (0xa5, 0x00, 0x26),
    (0xd7, 0x30, 0x27),
    (0xf4, 0x6d, 0x43),
    (0xfd, 0xae, 0x61),
    (0xfe, 0xe0, 0x8b),
    (0xff, 0xff, 0xbf),
    (0xd9, 0xef, 0x8b),
    (0xa6, 0xd9, 0x6a),
    (0x66, 0xbd, 0x63),
    (0x1a, 0x98, 0x50),
    (0x00, 0x68, 0x37),
];

/// color at t in [0, 1], linear interpolation between the palette stops; t is clamped
pub fn rdylgn(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (RDYLGN.len() - 1) as f64;
    let i = (pos.floor() as usize).min(RDYLGN.len() - 2);
    let frac = pos - i as f64;
    let (r0, g0, b0) = RDYLGN[i];
    let (r1, g1, b1) = RDYLGN[i + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// linear normalization of an index over 0..=count-1; with fewer than two points everything maps to 0
pub fn normalize_index(index: usize, count: usize) -> f64 {
    if count < 2 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

/// one color per sample point, by sequence position
pub fn gradient_colors(count: usize) -> Vec<RGBColor> {
    (0..count)
        .map(|i| rdylgn(normalize_index(i, count)))
        .collect()
}
