//! View rendering for the chip input.

use super::model::Model;
use super::render::{render_chips, RenderContext};

impl Model {
    /// Renders the chips, the entry and any visible messages.
    ///
    /// The chip row is memoized and only re-rendered after the chip list or
    /// the selection changes.
    pub fn view(&self) -> String {
        let styles = &self.config.styles;

        let row = self.cache.borrow_mut().get_or_render(
            self.chips.revision(),
            self.selected,
            || {
                let ctx = RenderContext {
                    id: self.id,
                    styles,
                    delete_button: self.config.delete_button.as_ref(),
                };
                render_chips(self.chips.chips(), self.selected, &ctx)
            },
        );

        let mut v = row;
        v.push_str(&self.entry.view(styles));

        let messages = [
            (self.limit_message(), &styles.limit_message),
            (self.required_message(), &styles.required_message),
        ];
        for (msg, style) in messages {
            let Some(msg) = msg else { continue };
            v.push('\n');
            v.push_str(&style.render(msg));
        }

        v
    }

    /// The limit message, when it is showing.
    pub fn limit_message(&self) -> Option<&str> {
        self.config
            .limit_message
            .as_deref()
            .filter(|_| self.chips.limit_message_visible())
    }

    /// The required message, when it is showing.
    pub fn required_message(&self) -> Option<&str> {
        self.config
            .required_message
            .as_deref()
            .filter(|_| self.chips.required_message_visible())
    }
}
