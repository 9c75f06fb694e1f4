//! Small UI helpers: human-readable sizes and layout math.

use ratatui::layout::Rect;

/// Formats a MiB figure.
pub fn human(mib: u64) -> String {
    const K: f64 = 1024.0;
    let m = mib as f64;
    if m < K { return format!("{m:.0}MiB"); }
    let g = m / K;
    if g < K { return format!("{g:.1}GiB"); }
    let t = g / K;
    format!("{t:.2}TiB")
}

// Rect of at most w x h centered in area
pub fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_units() {
        assert_eq!(human(512), "512MiB");
        assert_eq!(human(8192), "8.0GiB");
        assert_eq!(human(3072), "3.0GiB");
        assert_eq!(human(2 * 1024 * 1024), "2.00TiB");
    }

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered(area, 100, 100), area);
    }
}
