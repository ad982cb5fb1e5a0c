//! Recipient field demo.
//!
//! Type addresses and press enter. Backspace on an empty entry removes the
//! last chip, shift+arrows select a chip and delete removes it. Tab moves
//! focus away (committing any typed text), ctrl+c quits.
//!
//! Set `EMAIL_CHIPS_LOG=path` to write debug logs to a file.

use bubbletea_chips::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::sync::{Arc, Mutex};

struct App {
    to: ChipInput,
    last_change: Arc<Mutex<Vec<EmailChip>>>,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let last_change: Arc<Mutex<Vec<EmailChip>>> = Arc::default();
        let sink = Arc::clone(&last_change);

        let mut to = chipinput_new(&[
            with_placeholder("Add recipients"),
            with_validate_email(is_email),
            with_limit(4),
            with_limit_message("Four recipients at most"),
            with_required("At least one valid recipient is required"),
            with_initial_emails(&["team@example.com"]),
            with_on_chip_change(move |chips| {
                if let Ok(mut last) = sink.lock() {
                    *last = chips.to_vec();
                }
            }),
        ])
        .expect("static configuration is valid");
        if let Ok(mut last) = last_change.lock() {
            *last = to.emails();
        }
        let cmd = to.focus();

        (Self { to, last_change }, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(quit());
            }
            if key.key == KeyCode::Tab {
                if self.to.focused() {
                    self.to.blur();
                    return None;
                }
                return self.to.focus();
            }
        }
        self.to.update(msg)
    }

    fn view(&self) -> String {
        let hint = Style::new().foreground(Color::from("240"));
        let mut s = format!("To: {}\n\n", self.to.view());

        if let Ok(last) = self.last_change.lock() {
            for chip in last.iter() {
                let mark = if chip.valid { "✓" } else { "✗" };
                s.push_str(&format!("  {} {}\n", mark, chip.email));
            }
        }

        s.push_str(&hint.render(
            "\nenter: add • ⌫: remove last • shift+←/→: select • del: remove • tab: focus • ctrl+c: quit",
        ));
        s
    }
}

fn init_logging() {
    let Ok(path) = std::env::var("EMAIL_CHIPS_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => eprintln!("cannot open log file {path}: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let program = Program::<App>::builder().signal_handler(true).build()?;
    program.run().await?;
    Ok(())
}
