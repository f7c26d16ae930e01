//! Lays out one sample as display lines.
//!
//! ```text
//!   Memory Usage: 62.50% (10.00 GB / 16.00 GB)
//!   [███████████████████████████████░░░░░░░░░░░░░░░░░░░]
//!
//!   Overall CPU Usage: 12.00%
//!   [######--------------------------------------------]
//!
//!   CPU Core 0: 10.00%           CPU Core 1: 20.00%
//!   [██░░░░░░░░░░░░░░░░░░░░░░░]  [█████░░░░░░░░░░░░░░░░░░░░]
//!
//!   CPU Core 2: 30.00%
//!   [███████████████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░]
//! ```

use unicode_width::UnicodeWidthStr;

use crate::system::sampler::UtilizationSample;
use crate::ui::gauge::{render_bar, render_dual_bar, Palette, DUAL_SEPARATOR};

/// Lines for the memory and overall CPU sections
const HEADLINE_LINES: usize = 6;
/// Label, gauge and spacer per core row
const LINES_PER_CORE_ROW: usize = 3;

/// One rendered frame, top to bottom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    pub fn build(sample: &UtilizationSample, width: u32) -> Self {
        let mut lines = Vec::new();

        if let Some(mem) = &sample.memory {
            lines.push(format!(
                "Memory Usage: {:.2}% ({:.2} GB / {:.2} GB)",
                mem.used_percent,
                mem.used_gib(),
                mem.total_gib()
            ));
            lines.push(render_bar(mem.used_percent, width, Palette::BLOCK));
            lines.push(String::new());
        }

        if let Some(cpu) = sample.cpu_overall {
            lines.push(format!("Overall CPU Usage: {:.2}%", cpu));
            lines.push(render_bar(cpu, width, Palette::ASCII));
            lines.push(String::new());
        }

        if let Some(cores) = &sample.cpu_per_core {
            push_core_rows(&mut lines, cores, width);
        }

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cores go two per row; an odd trailing core gets a full-width row.
fn push_core_rows(lines: &mut Vec<String>, cores: &[f64], width: u32) {
    // Second label starts where the second half-gauge does
    let column = UnicodeWidthStr::width(render_bar(0.0, width / 2, Palette::BLOCK).as_str())
        + DUAL_SEPARATOR.width();

    for (row, pair) in cores.chunks(2).enumerate() {
        let id = row * 2;
        match *pair {
            [a, b] => {
                let left = core_label(id, a);
                let pad = column.saturating_sub(left.width()).max(1);
                lines.push(format!("{}{}{}", left, " ".repeat(pad), core_label(id + 1, b)));
                lines.push(render_dual_bar(a, b, width, Palette::BLOCK));
            }
            [a] => {
                lines.push(core_label(id, a));
                lines.push(render_bar(a, width, Palette::BLOCK));
            }
            _ => unreachable!("chunks(2) yields one or two cores"),
        }
        lines.push(String::new());
    }
}

fn core_label(id: usize, percent: f64) -> String {
    format!("CPU Core {}: {:.2}%", id, percent)
}

/// Line count of a frame with every metric present and `cores` cores
pub fn max_frame_lines(cores: usize) -> usize {
    HEADLINE_LINES + LINES_PER_CORE_ROW * cores.div_ceil(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::memory::MemoryUsage;

    fn full_sample(cores: Vec<f64>) -> UtilizationSample {
        UtilizationSample {
            memory: Some(MemoryUsage {
                used_bytes: 10 << 30,
                total_bytes: 16 << 30,
                used_percent: 62.5,
            }),
            cpu_overall: Some(0.0),
            cpu_per_core: Some(cores),
        }
    }

    #[test]
    fn headline_sections() {
        let frame = Frame::build(&full_sample(vec![]), 50);
        assert_eq!(frame.lines[0], "Memory Usage: 62.50% (10.00 GB / 16.00 GB)");
        assert_eq!(frame.lines[1], format!("[{}{}]", "█".repeat(31), "░".repeat(19)));
        assert_eq!(frame.lines[2], "");
        assert_eq!(frame.lines[3], "Overall CPU Usage: 0.00%");
        assert_eq!(frame.lines[4], format!("[{}]", "-".repeat(50)));
        assert_eq!(frame.len(), 6);
    }

    #[test]
    fn five_cores_make_two_pairs_and_a_single() {
        let frame = Frame::build(&full_sample(vec![10.0, 20.0, 30.0, 40.0, 50.0]), 50);
        let cores = &frame.lines[6..];
        assert_eq!(cores.len(), 9);

        assert!(cores[0].starts_with("CPU Core 0: 10.00%"));
        assert!(cores[0].ends_with("CPU Core 1: 20.00%"));
        assert_eq!(cores[1], render_dual_bar(10.0, 20.0, 50, Palette::BLOCK));

        assert!(cores[3].starts_with("CPU Core 2: 30.00%"));
        assert!(cores[3].ends_with("CPU Core 3: 40.00%"));
        assert_eq!(cores[4], render_dual_bar(30.0, 40.0, 50, Palette::BLOCK));

        assert_eq!(cores[6], "CPU Core 4: 50.00%");
        assert_eq!(cores[7], render_bar(50.0, 50, Palette::BLOCK));
        assert_eq!(frame.len(), max_frame_lines(5));
    }

    #[test]
    fn second_label_aligns_with_second_gauge() {
        let frame = Frame::build(&full_sample(vec![1.0, 2.0]), 50);
        let label = &frame.lines[6];
        let gauge = &frame.lines[7];
        let label_col = label.find("CPU Core 1").unwrap();
        let gauge_col = gauge.chars().position(|c| c == ']').unwrap() + 1 + DUAL_SEPARATOR.len();
        assert_eq!(label_col, gauge_col);
    }

    #[test]
    fn missing_per_core_omits_core_rows() {
        let mut sample = full_sample(vec![]);
        sample.cpu_per_core = None;
        let frame = Frame::build(&sample, 50);
        assert_eq!(frame.len(), 6);
        assert!(frame.lines.iter().all(|l| !l.starts_with("CPU Core")));
    }

    #[test]
    fn empty_sample_is_empty_frame() {
        assert!(Frame::build(&UtilizationSample::default(), 50).is_empty());
    }

    #[test]
    fn max_lines_grow_per_pair() {
        assert_eq!(max_frame_lines(0), 6);
        assert_eq!(max_frame_lines(1), 9);
        assert_eq!(max_frame_lines(2), 9);
        assert_eq!(max_frame_lines(64), 6 + 3 * 32);
    }
}
