//! Fixed-width bar gauges.
//!
//! ```text
//!   [###############-----------------------------------]   ASCII palette
//!   [███████████████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░]   block palette
//!   [████░░░░░░░░░░░░░░░░░░░░░]  [███████░░░░░░░░░░░░░░░░░░]   dual
//! ```

/// Glyph pair used to draw a gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub filled: char,
    pub empty: char,
}

impl Palette {
    /// Headline metrics (overall CPU)
    pub const ASCII: Palette = Palette { filled: '#', empty: '-' };
    /// Detail metrics (memory, per-core CPU)
    pub const BLOCK: Palette = Palette { filled: '█', empty: '░' };
}

/// Separator between the two halves of a dual gauge
pub const DUAL_SEPARATOR: &str = "  ";

/// A single gauge, valid for one render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gauge {
    pub width_cells: u32,
    pub filled_cells: u32,
}

impl Gauge {
    /// `filled = floor(percent / 100 * width)`, with `percent` clamped to
    /// [0, 100] first. NaN counts as 0.
    pub fn new(percent: f64, width_cells: u32) -> Self {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        let filled = (percent / 100.0 * width_cells as f64).floor() as u32;
        Self {
            width_cells,
            filled_cells: filled.min(width_cells),
        }
    }

    pub fn empty_cells(&self) -> u32 {
        self.width_cells - self.filled_cells
    }

    pub fn render(&self, palette: Palette) -> String {
        let mut out = String::with_capacity(self.width_cells as usize * 3 + 2);
        out.push('[');
        out.extend(std::iter::repeat(palette.filled).take(self.filled_cells as usize));
        out.extend(std::iter::repeat(palette.empty).take(self.empty_cells() as usize));
        out.push(']');
        out
    }
}

/// Render one bracketed gauge of `width` cells
pub fn render_bar(percent: f64, width: u32, palette: Palette) -> String {
    Gauge::new(percent, width).render(palette)
}

/// Render two half-width gauges side by side, for paired cores
pub fn render_dual_bar(percent_a: f64, percent_b: f64, width: u32, palette: Palette) -> String {
    let half = width / 2;
    format!(
        "{}{}{}",
        render_bar(percent_a, half, palette),
        DUAL_SEPARATOR,
        render_bar(percent_b, half, palette)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(s: &str, c: char) -> usize {
        s.chars().filter(|&ch| ch == c).count()
    }

    #[test]
    fn fill_is_floor_of_share() {
        for width in [0u32, 1, 7, 25, 50, 80] {
            for step in 0..=200 {
                let pct = step as f64 / 2.0;
                let gauge = Gauge::new(pct, width);
                assert_eq!(gauge.filled_cells, (pct / 100.0 * width as f64).floor() as u32);
                assert!(gauge.filled_cells <= width);

                let bar = gauge.render(Palette::ASCII);
                assert!(bar.starts_with('[') && bar.ends_with(']'));
                assert_eq!(bar.chars().count(), width as usize + 2);
                assert_eq!(count(&bar, '#'), gauge.filled_cells as usize);
            }
        }
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(render_bar(-15.0, 10, Palette::ASCII), render_bar(0.0, 10, Palette::ASCII));
        assert_eq!(render_bar(250.0, 10, Palette::ASCII), render_bar(100.0, 10, Palette::ASCII));
        assert_eq!(render_bar(f64::INFINITY, 4, Palette::BLOCK), "[████]");
        assert_eq!(render_bar(f64::NEG_INFINITY, 4, Palette::BLOCK), "[░░░░]");
        assert_eq!(render_bar(f64::NAN, 4, Palette::BLOCK), "[░░░░]");
    }

    #[test]
    fn zero_width_is_empty_brackets() {
        assert_eq!(render_bar(42.0, 0, Palette::BLOCK), "[]");
        assert_eq!(render_dual_bar(42.0, 99.0, 0, Palette::BLOCK), "[]  []");
    }

    #[test]
    fn memory_at_62_5_percent() {
        let bar = render_bar(62.5, 50, Palette::BLOCK);
        assert_eq!(count(&bar, '█'), 31);
        assert_eq!(count(&bar, '░'), 19);
    }

    #[test]
    fn idle_cpu_is_all_dashes() {
        assert_eq!(render_bar(0.0, 50, Palette::ASCII), format!("[{}]", "-".repeat(50)));
    }

    #[test]
    fn full_is_all_filled() {
        assert_eq!(render_bar(100.0, 3, Palette::ASCII), "[###]");
    }

    #[test]
    fn dual_is_two_half_bars() {
        for (a, b, w) in [(10.0, 90.0, 50), (0.0, 100.0, 51), (33.3, -4.0, 2)] {
            let expected = format!(
                "{}{}{}",
                render_bar(a, w / 2, Palette::BLOCK),
                DUAL_SEPARATOR,
                render_bar(b, w / 2, Palette::BLOCK)
            );
            assert_eq!(render_dual_bar(a, b, w, Palette::BLOCK), expected);
        }
        assert_eq!(render_dual_bar(40.0, 80.0, 10, Palette::BLOCK), "[██░░░]  [████░]");
    }
}
