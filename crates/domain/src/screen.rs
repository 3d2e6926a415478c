use crate::{FocusEffect, Group};

/// View-local state of the exercise list screen apart from the fetched collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisesScreen {
    effect: FocusEffect<Group>,
    mounted: bool,
}

impl ExercisesScreen {
    #[must_use]
    pub fn new(default_group: Group) -> Self {
        Self {
            effect: FocusEffect::new(default_group),
            mounted: false,
        }
    }

    #[must_use]
    pub fn selected_group(&self) -> &Group {
        self.effect.key()
    }

    #[must_use]
    pub fn is_active(&self, group: &Group) -> bool {
        self.selected_group() == group
    }

    /// Returns `true` only the first time, when the group catalog must be loaded.
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    /// Returns the group whose exercises must be fetched.
    pub fn show(&mut self) -> Option<Group> {
        self.effect.focus()
    }

    /// Returns `true` if in-flight exercise fetches must be invalidated.
    pub fn hide(&mut self) -> bool {
        self.effect.teardown()
    }

    /// Local state write. Returns the group to fetch if the selection changed on a visible screen.
    pub fn select_group(&mut self, group: Group) -> Option<Group> {
        self.effect.update(group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryScreen {
    effect: FocusEffect<()>,
}

impl Default for HistoryScreen {
    fn default() -> Self {
        Self {
            effect: FocusEffect::new(()),
        }
    }
}

impl HistoryScreen {
    /// Returns `true` if the history must be fetched.
    pub fn show(&mut self) -> bool {
        self.effect.focus().is_some()
    }

    pub fn hide(&mut self) -> bool {
        self.effect.teardown()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exercises_screen_mount_once() {
        let mut screen = ExercisesScreen::new("Back".into());
        assert!(screen.mount());
        assert!(!screen.mount());
        screen.hide();
        assert!(!screen.mount());
    }

    #[test]
    fn test_exercises_screen_refetch_on_every_visibility() {
        let mut screen = ExercisesScreen::new("Back".into());
        assert_eq!(screen.show(), Some("Back".into()));
        assert!(screen.hide());
        assert_eq!(screen.show(), Some("Back".into()));
    }

    #[test]
    fn test_exercises_screen_select_group() {
        let mut screen = ExercisesScreen::new("Back".into());
        assert_eq!(screen.select_group("Arms".into()), None);
        assert_eq!(screen.selected_group(), &Group::from("Arms"));
        assert_eq!(screen.show(), Some("Arms".into()));
        assert_eq!(screen.select_group("Legs".into()), Some("Legs".into()));
        assert_eq!(screen.select_group("legs".into()), None);
    }

    #[test]
    fn test_exercises_screen_is_active() {
        let screen = ExercisesScreen::new("costas".into());
        assert!(screen.is_active(&"Costas".into()));
        assert!(!screen.is_active(&"Ombro".into()));
    }

    #[test]
    fn test_history_screen_refetch_on_every_visibility() {
        let mut screen = HistoryScreen::default();
        assert!(screen.show());
        assert!(!screen.show());
        assert!(screen.hide());
        assert!(screen.show());
    }
}
