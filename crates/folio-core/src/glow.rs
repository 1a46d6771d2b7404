//! Cursor-follow glow on the contact card.

/// CSS custom properties the card's gradient reads.
pub const GLOW_X_VAR: &str = "--mx";
pub const GLOW_Y_VAR: &str = "--my";

/// Bounding box of the card in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position inside `rect` as percentages, clamped to `[0, 100]`.
/// A degenerate box centers the glow.
pub fn glow_position(client_x: f64, client_y: f64, rect: Rect) -> (f64, f64) {
    (
        axis_percent(client_x - rect.left, rect.width),
        axis_percent(client_y - rect.top, rect.height),
    )
}

fn axis_percent(offset: f64, extent: f64) -> f64 {
    if !(extent.is_finite() && extent > 0.0) || !offset.is_finite() {
        return 50.0;
    }
    (offset / extent * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_inside() {
        assert_eq!(glow_position(150.0, 100.0, CARD), (25.0, 50.0));
    }

    #[test]
    fn test_outside_clamps() {
        assert_eq!(glow_position(0.0, 500.0, CARD), (0.0, 100.0));
    }

    #[test]
    fn test_degenerate_box() {
        let flat = Rect { height: 0.0, ..CARD };
        assert_eq!(glow_position(150.0, 100.0, flat), (25.0, 50.0));
    }
}
