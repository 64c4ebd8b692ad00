//! Unit conversion helpers
//!
//! WordprocessingML measures page geometry and paragraph spacing in twips
//! (twentieths of a point) and font sizes in half-points. The profile is
//! expressed in centimeters, points and a line-spacing multiplier.

/// Twips per centimeter (1440 / 2.54, rounded).
pub const TWIPS_PER_CM: f64 = 567.0;

/// Line-spacing value of single spacing (`w:line` with the auto rule).
pub const SINGLE_LINE_TWIPS: f64 = 240.0;

/// Convert centimeters to twips.
pub fn cm_to_twips(cm: f64) -> u32 {
    (cm * TWIPS_PER_CM).round() as u32
}

/// Convert a point size to half-points (`w:sz`).
pub fn pt_to_half_points(pt: f64) -> u32 {
    (pt * 2.0).round() as u32
}

/// Convert a line-spacing multiplier to the `w:line` value.
pub fn line_spacing_twips(multiplier: f64) -> u32 {
    (multiplier * SINGLE_LINE_TWIPS).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_twips() {
        assert_eq!(cm_to_twips(2.0), 1134);
        assert_eq!(cm_to_twips(3.0), 1701);
        assert_eq!(cm_to_twips(1.5), 851);
    }

    #[test]
    fn test_pt_to_half_points() {
        assert_eq!(pt_to_half_points(14.0), 28);
        assert_eq!(pt_to_half_points(16.0), 32);
        assert_eq!(pt_to_half_points(10.5), 21);
    }

    #[test]
    fn test_line_spacing_twips() {
        assert_eq!(line_spacing_twips(1.0), 240);
        assert_eq!(line_spacing_twips(1.5), 360);
        assert_eq!(line_spacing_twips(2.0), 480);
    }
}
