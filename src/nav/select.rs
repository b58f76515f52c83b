/// Cursor and scroll state for one issue list. The selected row is an
/// index into the visible entry list; identity-based relocation across
/// refreshes happens in `relocate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub offset: usize,
}

impl ListState {
    /// Move the cursor by `delta` rows, clamped to the list bounds. An
    /// empty list resets both fields.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            *self = ListState::default();
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    /// Point the cursor at `target` if it is present in `ids`, else
    /// reset to the top. Searching by id rather than reusing the old
    /// index is what keeps the cursor on the same issue when a refresh
    /// reorders the list.
    pub fn relocate(&mut self, target: Option<&str>, ids: &[&str]) {
        match target.and_then(|id| ids.iter().position(|candidate| *candidate == id)) {
            Some(pos) => self.selected = pos,
            None => *self = ListState::default(),
        }
    }

    /// Clamp the scroll offset so the selected row stays inside a
    /// viewport of `height` rows. Idempotent for fixed inputs.
    pub fn ensure_visible(&mut self, len: usize, height: usize) {
        if len == 0 {
            *self = ListState::default();
            return;
        }
        if self.selected >= len {
            self.selected = len - 1;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        if height > 0 && self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
        if self.offset > len - 1 {
            self.offset = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn move_clamps_at_both_ends() {
        let mut state = ListState::default();
        state.move_by(-1, 5);
        assert_eq!(state.selected, 0);
        state.move_by(10, 5);
        assert_eq!(state.selected, 4);
        state.move_by(-2, 5);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn move_on_empty_list_resets() {
        let mut state = ListState {
            selected: 3,
            offset: 2,
        };
        state.move_by(1, 0);
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn relocate_finds_id_at_new_position() {
        let mut state = ListState {
            selected: 1,
            offset: 0,
        };
        state.relocate(Some("b"), &["c", "a", "b"]);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn relocate_missing_id_resets() {
        let mut state = ListState {
            selected: 4,
            offset: 3,
        };
        state.relocate(Some("gone"), &["a", "b"]);
        assert_eq!(state, ListState::default());
        state.selected = 2;
        state.relocate(None, &["a", "b"]);
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn ensure_visible_scrolls_down_and_up() {
        let mut state = ListState {
            selected: 9,
            offset: 0,
        };
        state.ensure_visible(20, 5);
        assert_eq!(state.offset, 5);
        state.selected = 2;
        state.ensure_visible(20, 5);
        assert_eq!(state.offset, 2);
    }

    #[test]
    fn ensure_visible_is_idempotent() {
        let mut state = ListState {
            selected: 13,
            offset: 0,
        };
        state.ensure_visible(20, 6);
        let once = state;
        state.ensure_visible(20, 6);
        assert_eq!(state, once);
    }

    #[test]
    fn ensure_visible_clamps_selection_and_offset_after_shrink() {
        let mut state = ListState {
            selected: 15,
            offset: 12,
        };
        state.ensure_visible(4, 6);
        assert_eq!(state.selected, 3);
        assert_eq!(state.offset, 3);
    }

    #[test]
    fn ensure_visible_empty_resets() {
        let mut state = ListState {
            selected: 5,
            offset: 5,
        };
        state.ensure_visible(0, 6);
        assert_eq!(state, ListState::default());
    }
}
