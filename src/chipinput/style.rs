//! Visual treatments for the chip input.

use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;

/// Styles used when rendering a chip input.
///
/// `chip` and `invalid_chip` are mutually exclusive: every chip is drawn with
/// exactly one of them. `selected_chip` is layered on top of whichever
/// applies when the chip has keyboard selection.
#[derive(Debug, Clone)]
pub struct Styles {
    /// A chip whose address passed validation.
    pub chip: Style,
    /// A chip whose address failed validation.
    pub invalid_chip: Style,
    /// Extra treatment for the selected chip.
    pub selected_chip: Style,
    /// The default delete affordance.
    pub delete_button: Style,
    /// Prompt in front of the entry.
    pub prompt: Style,
    /// Text typed into the entry.
    pub text: Style,
    /// Placeholder shown while the entry is empty.
    pub placeholder: Style,
    /// Entry while typing is disabled by the limit.
    pub disabled: Style,
    /// Message shown once the limit is reached.
    pub limit_message: Style,
    /// Message shown on a required violation.
    pub required_message: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            chip: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            invalid_chip: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#D70000",
                    Dark: "#FF5F87",
                })
                .underline(true),
            selected_chip: Style::new().reverse(true),
            delete_button: Style::new().foreground(subdued()),
            prompt: Style::new(),
            text: Style::new(),
            placeholder: Style::new().foreground(Color::from("240")),
            disabled: Style::new().faint(true),
            limit_message: Style::new().foreground(subdued()),
            required_message: Style::new().foreground(Color::from("red")),
        }
    }
}

fn subdued() -> AdaptiveColor {
    AdaptiveColor {
        Light: "#909090",
        Dark: "#626262",
    }
}
