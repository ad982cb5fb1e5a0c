//! Tests for the chip input component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Component;
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use lipgloss_extras::lipgloss::strip_ansi;
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn shift(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::SHIFT,
        }) as Msg
    }

    fn type_str(m: &mut Model, s: &str) {
        for ch in s.chars() {
            m.update(key(KeyCode::Char(ch)));
        }
    }

    fn type_and_commit(m: &mut Model, s: &str) {
        type_str(m, s);
        m.update(key(KeyCode::Enter));
    }

    fn focused(opts: &[ChipInputOption]) -> Model {
        let mut m = new(opts).expect("valid config");
        m.focus();
        m
    }

    fn emails(m: &Model) -> Vec<&str> {
        m.chips().iter().map(|c| c.email.as_str()).collect()
    }

    #[test]
    fn test_new_defaults() {
        let m = new(&[]).unwrap();
        assert!(m.chips().is_empty());
        assert!(!m.focused());
        assert!(!m.input_disabled());
        assert!(!m.limit_message_visible());
        assert!(!m.required_message_visible());
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let mut c = Config::new();
        c.required = true;
        assert_eq!(
            Model::from_config(c).err(),
            Some(ConfigError::MissingRequiredMessage)
        );
        assert_eq!(new(&[with_limit(0)]).err(), Some(ConfigError::ZeroLimit));
    }

    #[test]
    fn test_enter_commits_and_clears() {
        let mut m = focused(&[]);
        type_str(&mut m, "  Bob@Example.com ");
        let cmd = m.update(key(KeyCode::Enter));
        assert!(cmd.is_none());
        assert_eq!(emails(&m), vec!["bob@example.com"]);
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_enter_on_empty_entry_does_nothing() {
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        let mut m = focused(&[with_on_chip_change(move |_| *sink.lock().unwrap() += 1)]);
        m.update(key(KeyCode::Enter));
        type_str(&mut m, "   ");
        m.update(key(KeyCode::Enter));
        assert!(m.chips().is_empty());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_duplicate_clears_entry_without_adding() {
        let mut m = focused(&[]);
        type_and_commit(&mut m, "a@x.com");
        type_str(&mut m, "A@X.com");
        m.update(key(KeyCode::Enter));
        assert_eq!(m.chips().len(), 1);
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_backspace_edits_then_deletes_last_chip() {
        let mut m = focused(&[with_initial_emails(&["a@x.com", "b@x.com"])]);
        type_str(&mut m, "c");
        m.update(key(KeyCode::Backspace));
        assert_eq!(m.value(), "");
        assert_eq!(m.chips().len(), 2);

        m.update(key(KeyCode::Backspace));
        assert_eq!(emails(&m), vec!["a@x.com"]);
    }

    #[test]
    fn test_backspace_respects_required() {
        let mut m = focused(&[
            with_required("Email is required"),
            with_initial_emails(&["a@x.com"]),
        ]);
        m.update(key(KeyCode::Backspace));
        assert_eq!(emails(&m), vec!["a@x.com"]);
        assert!(m.required_message_visible());
        assert_eq!(m.required_message(), Some("Email is required"));
        assert!(strip_ansi(&m.view()).contains("Email is required"));
    }

    #[test]
    fn test_limit_disables_typing_and_recovers() {
        let mut m = focused(&[with_limit(2), with_limit_message("Two is plenty")]);
        type_and_commit(&mut m, "a@x.com");
        type_and_commit(&mut m, "b@x.com");
        assert!(m.input_disabled());
        assert!(m.entry().disabled());
        assert_eq!(m.limit_message(), Some("Two is plenty"));

        type_str(&mut m, "c@x.com");
        assert_eq!(m.value(), "");
        m.update(key(KeyCode::Enter));
        assert_eq!(m.chips().len(), 2);
        assert!(strip_ansi(&m.view()).contains("Two is plenty"));

        m.update(key(KeyCode::Backspace));
        assert!(!m.input_disabled());
        assert_eq!(m.limit_message(), None);
        type_str(&mut m, "c");
        assert_eq!(m.value(), "c");
    }

    #[test]
    fn test_blur_commits_typed_text() {
        let mut m = focused(&[]);
        type_str(&mut m, "late@x.com");
        m.blur();
        assert!(!m.focused());
        assert_eq!(emails(&m), vec!["late@x.com"]);
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_component_trait_blur_commits() {
        fn tab_away<C: Component>(c: &mut C) {
            c.blur();
        }
        let mut m = focused(&[]);
        type_str(&mut m, "x@y.org");
        tab_away(&mut m);
        assert_eq!(emails(&m), vec!["x@y.org"]);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut m = new(&[]).unwrap();
        type_and_commit(&mut m, "a@x.com");
        assert!(m.chips().is_empty());
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_selection_moves_and_clears() {
        let mut m = focused(&[with_initial_emails(&["a@x.com", "b@x.com", "c@x.com"])]);
        m.update(shift(KeyCode::Left));
        assert_eq!(m.selected(), Some(2));
        m.update(shift(KeyCode::Left));
        m.update(shift(KeyCode::Left));
        m.update(shift(KeyCode::Left));
        assert_eq!(m.selected(), Some(0));
        m.update(shift(KeyCode::Right));
        assert_eq!(m.selected(), Some(1));
        m.update(key(KeyCode::Esc));
        assert_eq!(m.selected(), None);

        m.update(shift(KeyCode::Left));
        m.update(shift(KeyCode::Right));
        assert_eq!(m.selected(), None);
    }

    #[test]
    fn test_typing_drops_selection() {
        let mut m = focused(&[with_initial_emails(&["a@x.com"])]);
        m.update(shift(KeyCode::Left));
        type_str(&mut m, "b");
        assert_eq!(m.selected(), None);
        assert_eq!(m.value(), "b");
    }

    #[tokio::test]
    async fn test_delete_affordance_round_trip() {
        let mut m = focused(&[with_initial_emails(&["a@x.com", "b@x.com"])]);
        type_str(&mut m, "draft");
        m.update(shift(KeyCode::Left));
        m.update(shift(KeyCode::Left));

        let cmd = m.update(key(KeyCode::Delete)).expect("delete command");
        // The key is absorbed by the chip, not the entry.
        assert_eq!(m.value(), "draft");
        assert_eq!(m.chips().len(), 2);

        let msg = cmd.await.expect("delete message");
        let delete = *msg.downcast_ref::<DeleteChipMsg>().expect("DeleteChipMsg");
        assert_eq!(delete.id, m.id());
        assert_eq!(delete.key, m.chips()[0].key);

        m.update(msg);
        assert_eq!(emails(&m), vec!["b@x.com"]);
        assert_eq!(m.selected(), Some(0));
    }

    #[tokio::test]
    async fn test_custom_delete_button_is_bound() {
        let mut m = focused(&[
            with_initial_emails(&["a@x.com"]),
            with_delete_button(|trigger| DeleteButton::new(trigger).with_label("[rm]")),
        ]);
        assert!(strip_ansi(&m.view()).contains("a@x.com [rm]"));

        m.update(shift(KeyCode::Left));
        let msg = m.update(key(KeyCode::Char('x'))).expect("command").await.expect("msg");
        m.update(msg);
        assert!(m.chips().is_empty());
    }

    #[tokio::test]
    async fn test_ctrl_h_deletes_selected_chip() {
        let mut m = focused(&[with_initial_emails(&["a@x.com", "b@x.com", "c@x.com"])]);
        for _ in 0..3 {
            m.update(shift(KeyCode::Left));
        }
        assert_eq!(m.selected(), Some(0));

        let ctrl_h = Box::new(KeyMsg {
            key: KeyCode::Char('h'),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg;
        let cmd = m.update(ctrl_h).expect("delete command");
        assert_eq!(emails(&m), vec!["a@x.com", "b@x.com", "c@x.com"]);

        let msg = cmd.await.expect("delete message");
        m.update(msg);
        assert_eq!(emails(&m), vec!["b@x.com", "c@x.com"]);
    }

    #[test]
    fn test_delete_msg_for_other_input_ignored() {
        let mut a = focused(&[with_initial_emails(&["a@x.com"])]);
        let b = focused(&[]);
        let foreign = DeleteChipMsg {
            id: b.id(),
            key: a.chips()[0].key,
        };
        a.update(Box::new(foreign) as Msg);
        assert_eq!(a.chips().len(), 1);

        let own = DeleteChipMsg {
            id: a.id(),
            key: a.chips()[0].key,
        };
        a.update(own.into());
        assert!(a.chips().is_empty());
    }

    #[test]
    fn test_view_layout() {
        let mut m = focused(&[
            with_initial_emails(&["a@x.com"]),
            with_placeholder("Add email"),
            with_validate_email(is_email),
        ]);
        type_and_commit(&mut m, "bad");
        assert_eq!(strip_ansi(&m.view()), " a@x.com ×  bad × > Add email");
    }

    #[test]
    fn test_chip_row_memoized() {
        let mut m = focused(&[with_initial_emails(&["a@x.com"])]);
        m.view();
        m.view();
        assert_eq!(m.chip_row_renders(), 1);

        type_str(&mut m, "b@x.com");
        m.view();
        assert_eq!(m.chip_row_renders(), 1);

        m.update(key(KeyCode::Enter));
        m.view();
        assert_eq!(m.chip_row_renders(), 2);

        m.set_styles(Styles::default());
        m.view();
        assert_eq!(m.chip_row_renders(), 3);
    }

    #[test]
    fn test_callback_sees_public_shape() {
        let seen: Arc<Mutex<Vec<Vec<EmailChip>>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let mut m = focused(&[
            with_validate_email(is_email),
            with_on_chip_change(move |chips| sink.lock().unwrap().push(chips.to_vec())),
        ]);
        type_and_commit(&mut m, "a@x.com");
        type_and_commit(&mut m, "nope");
        m.update(key(KeyCode::Backspace));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[1],
            vec![EmailChip::new("a@x.com", true), EmailChip::new("nope", false)]
        );
        assert_eq!(seen[2], vec![EmailChip::new("a@x.com", true)]);
    }

    #[test]
    fn test_required_recovers_after_invalid_only() {
        let mut m = focused(&[with_required("Email is required"), with_validate_email(is_email)]);
        type_and_commit(&mut m, "nope");
        assert!(m.required_message_visible());
        type_and_commit(&mut m, "ok@x.com");
        assert!(!m.required_message_visible());
        assert_eq!(m.chips().len(), 2);
    }

    #[test]
    fn test_limit_and_required_walkthrough() {
        let mut m = focused(&[
            with_limit(2),
            with_limit_message("Limit reached"),
            with_required("Email is required"),
            with_validate_email(is_email),
        ]);

        type_and_commit(&mut m, "a@x.com");
        assert_eq!(m.emails(), vec![EmailChip::new("a@x.com", true)]);
        assert!(!m.required_message_visible());
        assert!(!m.limit_message_visible());

        type_and_commit(&mut m, "bad");
        assert_eq!(
            m.emails(),
            vec![EmailChip::new("a@x.com", true), EmailChip::new("bad", false)]
        );
        assert!(!m.required_message_visible());
        assert!(m.input_disabled());

        type_and_commit(&mut m, "c@x.com");
        assert_eq!(m.chips().len(), 2);
        assert!(m.limit_message_visible());

        let first = m.chips()[0].key;
        assert_eq!(m.delete_chip(first), DeleteOutcome::Refused);
        assert!(m.required_message_visible());
        assert_eq!(m.chips().len(), 2);

        let view = strip_ansi(&m.view());
        assert!(view.ends_with("Limit reached\nEmail is required"));
    }

    #[test]
    fn test_ctrl_chars_not_inserted() {
        let mut m = focused(&[]);
        m.update(Box::new(KeyMsg {
            key: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg);
        assert_eq!(m.value(), "");
    }
}
