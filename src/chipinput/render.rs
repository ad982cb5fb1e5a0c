//! Chip rendering.
//!
//! Rendering is a pure projection of the chip list, the styles and the
//! current selection. Nothing here mutates the chip list: a chip's delete
//! affordance only produces a [`Cmd`] carrying a [`DeleteChipMsg`], and the
//! owning component decides what to do with it.

use super::style::Styles;
use super::types::{Chip, ChipKey, DeleteChipMsg};
use bubbletea_rs::{Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Default label of the delete affordance.
pub const DEFAULT_DELETE_LABEL: &str = "×";

/// Reports the deletion of one chip back to its chip input.
///
/// A trigger is bound to a single chip when the chip is rendered and is
/// handed to the delete-button factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTrigger {
    id: u64,
    key: ChipKey,
}

impl DeleteTrigger {
    pub(crate) fn new(id: u64, key: ChipKey) -> Self {
        Self { id, key }
    }

    /// The chip this trigger deletes.
    pub fn key(&self) -> ChipKey {
        self.key
    }

    /// The message this trigger reports.
    pub fn msg(&self) -> DeleteChipMsg {
        DeleteChipMsg {
            id: self.id,
            key: self.key,
        }
    }

    /// A command resolving to [`Self::msg`].
    pub fn fire(&self) -> Cmd {
        let msg = self.msg();
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }
}

/// The delete affordance drawn next to a chip.
///
/// Build one from the [`DeleteTrigger`] passed to a [`DeleteButtonFn`]; the
/// trigger stays bound whatever label or style the caller picks.
///
/// ```rust
/// use bubbletea_chips::chipinput::{new, with_delete_button, with_initial_emails, DeleteButton};
///
/// let input = new(&[
///     with_initial_emails(&["a@x.com"]),
///     with_delete_button(|trigger| DeleteButton::new(trigger).with_label("[remove]")),
/// ])
/// .unwrap();
/// assert!(input.view().contains("[remove]"));
/// ```
#[derive(Clone)]
pub struct DeleteButton {
    label: String,
    style: Style,
    trigger: DeleteTrigger,
}

impl DeleteButton {
    /// A minimal button: [`DEFAULT_DELETE_LABEL`] with no styling.
    pub fn new(trigger: DeleteTrigger) -> Self {
        Self {
            label: DEFAULT_DELETE_LABEL.to_string(),
            style: Style::new(),
            trigger,
        }
    }

    /// Replaces the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The bound trigger.
    pub fn trigger(&self) -> DeleteTrigger {
        self.trigger
    }

    /// Activates the button.
    pub fn activate(&self) -> Cmd {
        self.trigger.fire()
    }

    /// Renders the button.
    pub fn view(&self) -> String {
        self.style.clone().inline(true).render(&self.label)
    }
}

impl fmt::Debug for DeleteButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeleteButton")
            .field("label", &self.label)
            .field("trigger", &self.trigger)
            .finish()
    }
}

/// Builds the delete affordance for a chip.
pub type DeleteButtonFn = Arc<dyn Fn(DeleteTrigger) -> DeleteButton + Send + Sync>;

/// Everything a chip needs to be drawn.
pub struct RenderContext<'a> {
    /// Id of the owning chip input.
    pub id: u64,
    /// Styles to draw with.
    pub styles: &'a Styles,
    /// Custom delete affordance, if any.
    pub delete_button: Option<&'a DeleteButtonFn>,
}

impl RenderContext<'_> {
    /// The delete affordance for `key`.
    pub fn delete_button(&self, key: ChipKey) -> DeleteButton {
        let trigger = DeleteTrigger::new(self.id, key);
        match self.delete_button {
            Some(factory) => factory(trigger),
            None => DeleteButton::new(trigger).with_style(self.styles.delete_button.clone()),
        }
    }
}

/// Renders one chip.
///
/// Valid and invalid chips use `styles.chip` and `styles.invalid_chip`
/// respectively. A selected chip is bracketed with `styles.selected_chip`;
/// other chips are padded with spaces so selection never shifts the layout.
pub fn render_chip(chip: &Chip, selected: bool, ctx: &RenderContext<'_>) -> String {
    let body = chip_style(chip, ctx.styles);
    let (open, close) = if selected {
        (
            ctx.styles.selected_chip.clone().inline(true).render("["),
            ctx.styles.selected_chip.clone().inline(true).render("]"),
        )
    } else {
        (" ".to_string(), " ".to_string())
    };

    format!(
        "{}{} {}{}",
        open,
        body.clone().inline(true).render(&chip.email),
        ctx.delete_button(chip.key).view(),
        close
    )
}

/// The style a chip's address is drawn with.
pub fn chip_style<'a>(chip: &Chip, styles: &'a Styles) -> &'a Style {
    if chip.valid {
        &styles.chip
    } else {
        &styles.invalid_chip
    }
}

/// Renders every chip in display order.
pub fn render_chips(chips: &[Chip], selected: Option<usize>, ctx: &RenderContext<'_>) -> String {
    chips
        .iter()
        .enumerate()
        .map(|(i, chip)| render_chip(chip, selected == Some(i), ctx))
        .collect()
}

/// Memoized chip row.
///
/// The row is re-rendered only when the chip list revision or the selection
/// changes.
#[derive(Debug, Default)]
pub struct ChipsViewCache {
    key: Option<(u64, Option<usize>)>,
    view: String,
    renders: usize,
}

impl ChipsViewCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached row, calling `render` only on a miss.
    pub fn get_or_render(
        &mut self,
        revision: u64,
        selected: Option<usize>,
        render: impl FnOnce() -> String,
    ) -> String {
        let key = (revision, selected);
        if self.key != Some(key) {
            self.view = render();
            self.key = Some(key);
            self.renders += 1;
        }
        self.view.clone()
    }

    /// How many times the row has actually been rendered.
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Drops the cached row, e.g. after a style change.
    pub fn clear(&mut self) {
        self.key = None;
        self.view.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss::strip_ansi;

    fn chips() -> Vec<Chip> {
        vec![
            Chip::new("a@x.com".to_string(), true),
            Chip::new("bad".to_string(), false),
        ]
    }

    #[test]
    fn test_render_chips_plain_text() {
        let styles = Styles::default();
        let ctx = RenderContext {
            id: 1,
            styles: &styles,
            delete_button: None,
        };
        let out = strip_ansi(&render_chips(&chips(), None, &ctx));
        assert_eq!(out, " a@x.com ×  bad × ");
    }

    #[test]
    fn test_selected_chip_is_bracketed() {
        let styles = Styles::default();
        let ctx = RenderContext {
            id: 1,
            styles: &styles,
            delete_button: None,
        };
        let out = strip_ansi(&render_chips(&chips(), Some(1), &ctx));
        assert_eq!(out, " a@x.com × [bad ×]");
    }

    #[test]
    fn test_validity_picks_exactly_one_style() {
        let styles = Styles::default();
        let valid = Chip::new("same".to_string(), true);
        let invalid = Chip::new("same".to_string(), false);
        assert!(std::ptr::eq(chip_style(&valid, &styles), &styles.chip));
        assert!(std::ptr::eq(chip_style(&invalid, &styles), &styles.invalid_chip));
    }

    #[test]
    fn test_custom_delete_button_keeps_trigger() {
        let styles = Styles::default();
        let factory: DeleteButtonFn =
            Arc::new(|trigger| DeleteButton::new(trigger).with_label("(del)"));
        let ctx = RenderContext {
            id: 7,
            styles: &styles,
            delete_button: Some(&factory),
        };
        let chip = Chip::new("a@x.com".to_string(), true);

        let button = ctx.delete_button(chip.key);
        assert_eq!(button.label(), "(del)");
        assert_eq!(button.trigger().msg(), DeleteChipMsg { id: 7, key: chip.key });
        assert!(strip_ansi(&render_chip(&chip, false, &ctx)).contains("(del)"));
    }

    #[tokio::test]
    async fn test_activate_resolves_to_delete_msg() {
        let key = ChipKey::next();
        let button = DeleteButton::new(DeleteTrigger::new(3, key));
        let msg = button.activate().await.expect("delete message");
        let delete = msg.downcast_ref::<DeleteChipMsg>().expect("DeleteChipMsg");
        assert_eq!(*delete, DeleteChipMsg { id: 3, key });
    }

    #[test]
    fn test_cache_renders_once_per_revision() {
        let mut cache = ChipsViewCache::new();
        let a = cache.get_or_render(1, None, || "one".to_string());
        let b = cache.get_or_render(1, None, || unreachable!("cached"));
        assert_eq!(a, b);
        assert_eq!(cache.renders(), 1);

        cache.get_or_render(1, Some(0), || "sel".to_string());
        cache.get_or_render(2, Some(0), || "two".to_string());
        assert_eq!(cache.renders(), 3);

        cache.clear();
        assert_eq!(cache.get_or_render(2, Some(0), || "again".to_string()), "again");
    }
}
