//! Generic edit control.
//!
//! A stateless clickable control: the caller supplies the accessible
//! label, may override the button type, and receives one click event per
//! activation. Nothing is retained between activations.

use tokio::sync::mpsc;

/// HTML button type attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    /// Plain button (the default).
    #[default]
    Button,
    /// Form submit button.
    Submit,
}

impl ButtonType {
    /// The `type` attribute value.
    #[must_use]
    pub const fn as_attr(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
        }
    }
}

/// A single activation of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent;

/// View-ready projection of the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditButtonView<'a> {
    /// Value of the button's `type` attribute.
    pub button_type: &'static str,
    /// Caller-supplied content, rendered as visually-hidden accessible
    /// text.
    pub hidden_label: &'a str,
}

/// A reusable edit control.
///
/// Constructed together with the receiver its click events are delivered
/// on; activating the control emits exactly one event to that receiver.
#[derive(Debug)]
pub struct EditButton {
    button_type: ButtonType,
    label: String,
    clicks: mpsc::UnboundedSender<ClickEvent>,
}

impl EditButton {
    /// Create a control with the default `button` type.
    ///
    /// Returns the control and the receiver for its click events.
    #[must_use]
    pub fn new(label: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<ClickEvent>) {
        let (clicks, rx) = mpsc::unbounded_channel();
        (
            Self {
                button_type: ButtonType::default(),
                label: label.into(),
                clicks,
            },
            rx,
        )
    }

    /// Override the button type; the next render reflects it.
    pub fn set_type(&mut self, button_type: ButtonType) {
        self.button_type = button_type;
    }

    /// Project the control for rendering.
    #[must_use]
    pub fn view(&self) -> EditButtonView<'_> {
        EditButtonView {
            button_type: self.button_type.as_attr(),
            hidden_label: &self.label,
        }
    }

    /// Activate the control, emitting one click event.
    ///
    /// Dropped receivers are tolerated; the control itself keeps no
    /// record of the activation.
    pub fn activate(&self) {
        let _ = self.clicks.send(ClickEvent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_type_is_button_until_overridden() {
        let (mut button, _rx) = EditButton::new("Edit");
        assert_eq!(button.view().button_type, "button");

        button.set_type(ButtonType::Submit);
        assert_eq!(button.view().button_type, "submit");
    }

    #[test]
    fn label_renders_as_hidden_text() {
        let (button, _rx) = EditButton::new("Change address");
        assert_eq!(button.view().hidden_label, "Change address");
    }

    #[test]
    fn each_activation_emits_exactly_one_click() {
        let (button, mut rx) = EditButton::new("Edit");

        button.activate();
        button.activate();

        assert!(matches!(rx.try_recv(), Ok(ClickEvent)));
        assert!(matches!(rx.try_recv(), Ok(ClickEvent)));
        assert!(rx.try_recv().is_err());
    }
}
