use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    pub user: String,
    pub label: String,
    pub active: bool,
}

/// Holds the single current selection and keeps the toggle buttons in sync
/// with it.
#[derive(Debug, Clone)]
pub struct SelectionController {
    current: String,
    buttons: Vec<ToggleButton>,
}

impl SelectionController {
    pub fn new(users: &[String], persisted: Option<String>, fallback: &str) -> Self {
        let current = persisted
            .filter(|user| !user.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        let buttons = users
            .iter()
            .map(|user| ToggleButton {
                label: button_label(user),
                active: *user == current,
                user: user.clone(),
            })
            .collect();

        Self { current, buttons }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn buttons(&self) -> &[ToggleButton] {
        &self.buttons
    }

    pub fn active_user(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|button| button.active)
            .map(|button| button.user.as_str())
    }

    pub fn select(&mut self, user: &str) -> Result<(), AppError> {
        let user = user.trim();
        if !self.buttons.iter().any(|button| button.user == user) {
            return Err(AppError::bad_request(format!("unknown user '{user}'")));
        }

        self.current = user.to_string();
        for button in &mut self.buttons {
            button.active = button.user == user;
        }
        Ok(())
    }
}

fn button_label(user: &str) -> String {
    let mut chars = user.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<String> {
        vec!["josip".into(), "ana".into()]
    }

    #[test]
    fn defaults_to_fallback_without_persisted_value() {
        let selection = SelectionController::new(&users(), None, "josip");
        assert_eq!(selection.current(), "josip");
        assert_eq!(selection.active_user(), Some("josip"));
    }

    #[test]
    fn restores_persisted_value() {
        let selection = SelectionController::new(&users(), Some("ana".into()), "josip");
        assert_eq!(selection.current(), "ana");
        assert_eq!(selection.active_user(), Some("ana"));
        assert_eq!(selection.buttons()[1].label, "Ana");
    }

    #[test]
    fn select_moves_the_single_active_marker() {
        let mut selection = SelectionController::new(&users(), None, "josip");
        selection.select("ana").unwrap();
        assert_eq!(selection.current(), "ana");
        let active: Vec<_> = selection
            .buttons()
            .iter()
            .filter(|button| button.active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].user, "ana");
    }

    #[test]
    fn unknown_user_is_rejected_and_state_kept() {
        let mut selection = SelectionController::new(&users(), None, "josip");
        let err = selection.select("marko").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(selection.current(), "josip");
        assert_eq!(selection.active_user(), Some("josip"));
    }

    #[test]
    fn restored_unknown_value_has_no_active_button() {
        let selection = SelectionController::new(&users(), Some("marko".into()), "josip");
        assert_eq!(selection.current(), "marko");
        assert_eq!(selection.active_user(), None);
    }
}
