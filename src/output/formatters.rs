//! Formatting utilities for terminal output

use crate::commands::TransformTree;

/// Join a ladder with arrows
#[must_use]
pub fn format_ladder(path: &[String]) -> String {
    path.join(" → ")
}

/// Mark the positions where `next` differs from `prev` with `^`
#[must_use]
pub fn change_marker(prev: &str, next: &str) -> String {
    prev.chars()
        .zip(next.chars())
        .map(|(a, b)| if a == b { ' ' } else { '^' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a transformation tree as indented lines with branch glyphs
///
/// The root is rendered as `└── root`; children are indented beneath it.
#[must_use]
pub fn render_tree(tree: &TransformTree) -> Vec<String> {
    let mut lines = vec![format!("└── {}", tree.word)];
    render_children(&tree.children, "    ", &mut lines);
    lines
}

fn render_children(children: &[TransformTree], prefix: &str, lines: &mut Vec<String>) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let branch = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{branch}{}", child.word));

        let next_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        render_children(&child.children, &next_prefix, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(word: &str) -> TransformTree {
        TransformTree {
            word: word.to_string(),
            children: Vec::new(),
        }
    }

    #[test]
    fn ladder_joins_with_arrows() {
        let path = vec!["cat".to_string(), "cot".to_string(), "cog".to_string()];
        assert_eq!(format_ladder(&path), "cat → cot → cog");
        assert_eq!(format_ladder(&[]), "");
    }

    #[test]
    fn marker_points_at_changed_letter() {
        assert_eq!(change_marker("cat", "cot"), " ^");
        assert_eq!(change_marker("cat", "bat"), "^");
        assert_eq!(change_marker("cold", "cord"), "  ^");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn tree_renders_branches() {
        let tree = TransformTree {
            word: "cat".to_string(),
            children: vec![
                TransformTree {
                    word: "bat".to_string(),
                    children: vec![leaf("hat")],
                },
                leaf("cot"),
            ],
        };

        assert_eq!(
            render_tree(&tree),
            vec![
                "└── cat",
                "    ├── bat",
                "    │   └── hat",
                "    └── cot",
            ]
        );
    }
}
