// Intensity -> grey. The rounding here decides the exact rendered (and saved) shade.

use image::Rgb;

/// 0.0 -> white, 1.0 -> black, linear in between; grey = round((1 - v) * 255).
pub fn intensity_to_color(v: f32) -> Rgb<u8> {
    let grey = ((1.0 - v.clamp(0.0, 1.0)) * 255.0).round() as u8;
    Rgb([grey, grey, grey])
}

/// Pack for minifb (0x00RRGGBB).
#[inline]
pub fn to_argb(color: Rgb<u8>) -> u32 {
    let [r, g, b] = color.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        assert_eq!(intensity_to_color(0.0), Rgb([255, 255, 255]));
        assert_eq!(intensity_to_color(1.0), Rgb([0, 0, 0]));
        // 127.5 rounds half away from zero
        assert_eq!(intensity_to_color(0.5), Rgb([128, 128, 128]));
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(intensity_to_color(-0.3), Rgb([255, 255, 255]));
        assert_eq!(intensity_to_color(7.0), Rgb([0, 0, 0]));
    }

    #[test]
    fn packs_for_the_window() {
        assert_eq!(to_argb(Rgb([0x12, 0x34, 0x56])), 0x0012_3456);
        assert_eq!(to_argb(intensity_to_color(0.0)), 0x00FF_FFFF);
    }
}
