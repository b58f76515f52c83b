use crate::util::unicode::display_width;

/// Horizontal split of the dashboard body: the drawer (tree) pane on
/// the left, the detail pane on the right. A `detail_width` of 0 means
/// the terminal is too narrow and the drawer takes the whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerLayout {
    pub drawer_width: usize,
    pub detail_width: usize,
    pub gap: usize,
    pub list_height: usize,
}

const MIN_DRAWER: usize = 26;
const MAX_DRAWER: usize = 40;
const MIN_DETAIL: usize = 12;
const COLUMN_GAP: usize = 2;

/// Compute the body split for a terminal of `width` x `height` cells.
/// The drawer gets a third of the width, clamped to [26, 40] and capped
/// so at least 12 columns remain for the detail pane.
pub fn drawer_layout(width: usize, height: usize) -> DrawerLayout {
    let list_height = list_height(height);
    let mut drawer_width = (width / 3).clamp(MIN_DRAWER, MAX_DRAWER);
    if drawer_width > width.saturating_sub(MIN_DETAIL) {
        drawer_width = width.saturating_sub(MIN_DETAIL);
    }
    if drawer_width < 20 {
        drawer_width = 20.min(width);
    }
    let detail_width = if drawer_width + COLUMN_GAP >= width {
        0
    } else {
        width - drawer_width - COLUMN_GAP
    };
    DrawerLayout {
        drawer_width,
        detail_width,
        gap: COLUMN_GAP,
        list_height,
    }
}

/// Rows available for list bodies after header and footer chrome.
pub fn list_height(height: usize) -> usize {
    height.saturating_sub(10).max(3)
}

/// Physical line budget for one of the two stacked drawer lists.
pub fn column_lines(height: usize) -> usize {
    (list_height(height) / 2).max(1)
}

/// Entries that fit in `lines` physical lines when the tallest row in
/// the list wraps to `max_row_lines`. Rows scroll in entry units, so
/// the page is sized for the worst case.
pub fn rows_per_page(lines: usize, max_row_lines: usize) -> usize {
    (lines / max_row_lines.max(1)).max(1)
}

/// Greedy word-wrap by display cells, with a narrower first line (the
/// badge reserve). Words wider than the budget land alone on their own
/// line rather than being split. Always yields at least one line.
pub fn wrap_title(title: &str, first_width: usize, rest_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in title.split_whitespace() {
        let word_width = display_width(word);
        let budget = if lines.is_empty() {
            first_width
        } else {
            rest_width
        };
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        if current_width + 1 + word_width > budget {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        current.push(' ');
        current.push_str(word);
        current_width += 1 + word_width;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap a title for one drawer row. The first line is narrowed by the
/// tree prefix and the badge reserve (badge plus one separator cell);
/// continuation lines only lose the prefix indent. Widths floor at 1.
pub fn title_lines(
    title: &str,
    prefix_width: usize,
    badge_width: usize,
    width: usize,
) -> Vec<String> {
    let available = if badge_width > 0 {
        width.saturating_sub(badge_width + 1).max(1)
    } else {
        width
    };
    let first_width = available.saturating_sub(prefix_width).max(1);
    let rest_width = width.saturating_sub(prefix_width).max(1);
    wrap_title(title, first_width, rest_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wide_terminal_caps_drawer_at_max() {
        let layout = drawer_layout(200, 50);
        assert_eq!(layout.drawer_width, 40);
        assert_eq!(layout.detail_width, 200 - 40 - 2);
        assert_eq!(layout.list_height, 40);
    }

    #[test]
    fn narrow_terminal_floors_drawer_at_min() {
        let layout = drawer_layout(90, 30);
        assert_eq!(layout.drawer_width, 30);
        let layout = drawer_layout(60, 30);
        assert_eq!(layout.drawer_width, 26);
    }

    #[test]
    fn detail_pane_keeps_a_floor() {
        let layout = drawer_layout(34, 30);
        // 34/3 = 11 -> clamp 26 -> cap at 34-12 = 22
        assert_eq!(layout.drawer_width, 22);
        assert_eq!(layout.detail_width, 10);
    }

    #[test]
    fn tiny_terminal_gives_drawer_everything() {
        let layout = drawer_layout(18, 30);
        assert_eq!(layout.drawer_width, 18);
        assert_eq!(layout.detail_width, 0);
    }

    #[test]
    fn list_height_floors_at_three() {
        assert_eq!(list_height(50), 40);
        assert_eq!(list_height(12), 3);
        assert_eq!(list_height(0), 3);
    }

    #[test]
    fn column_lines_split_the_list_budget() {
        assert_eq!(column_lines(40), 15);
        assert_eq!(column_lines(20), 5);
        assert_eq!(column_lines(0), 1);
    }

    #[test]
    fn rows_per_page_shrinks_with_row_height() {
        assert_eq!(rows_per_page(15, 1), 15);
        assert_eq!(rows_per_page(15, 3), 5);
        assert_eq!(rows_per_page(2, 3), 1);
        assert_eq!(rows_per_page(10, 0), 10);
    }

    #[test]
    fn wrap_packs_whole_words() {
        assert_eq!(
            wrap_title("fix the flaky timer test", 12, 12),
            vec!["fix the", "flaky timer", "test"]
        );
    }

    #[test]
    fn wrap_first_line_can_be_narrower() {
        assert_eq!(
            wrap_title("alpha beta gamma", 5, 20),
            vec!["alpha", "beta gamma"]
        );
    }

    #[test]
    fn wrap_empty_title_is_one_empty_line() {
        assert_eq!(wrap_title("", 10, 10), vec![""]);
        assert_eq!(wrap_title("   ", 10, 10), vec![""]);
    }

    #[test]
    fn wrap_overlong_word_gets_its_own_line() {
        assert_eq!(
            wrap_title("a extraordinarily b", 6, 6),
            vec!["a", "extraordinarily", "b"]
        );
    }

    #[test]
    fn title_lines_reserve_badge_space_on_first_line_only() {
        // width 20, badge 6 (+1 separator), prefix 3:
        // first budget = 20-7-3 = 10, continuation = 17
        let lines = title_lines("one two three four five six", 3, 6, 20);
        assert_eq!(lines[0], "one two");
        assert!(display_width(&lines[0]) <= 10);
        for line in &lines[1..] {
            assert!(display_width(line) <= 17);
        }
    }

    #[test]
    fn title_lines_degenerate_widths_never_panic() {
        assert_eq!(title_lines("hello", 10, 8, 4), vec!["hello"]);
        let lines = title_lines("hello world", 0, 0, 0);
        assert!(!lines.is_empty());
    }
}
