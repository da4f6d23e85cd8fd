//! Communication hub panel: contact methods plus a message form
//!
//! The form is transient by design. Validation is trivial (non-empty name
//! and message, an '@' in the email) and "sending" just clears the fields
//! with a confirmation line; nothing is persisted or transmitted.

use macroquad::prelude::*;

use crate::content::PortfolioContent;
use crate::ui::{
    draw_rounded_rect, draw_text_input, text_button, theme, Rect, TextInputState, UiContext,
};

use super::{draw_heading, PanelAction};

/// The form fields, in focus-cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// Contact form state, owned by the app so drafts survive modal close
pub struct ContactForm {
    pub name: TextInputState,
    pub email: TextInputState,
    pub subject: TextInputState,
    pub message: TextInputState,
    focus: Option<FormField>,
    /// Feedback line under the send button: (text, is_success)
    status: Option<(String, bool)>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: TextInputState::new(false),
            email: TextInputState::new(false),
            subject: TextInputState::new(false),
            message: TextInputState::new(true),
            focus: None,
            status: None,
        }
    }

    /// Drop focus (called when the modal opens/closes)
    pub fn blur(&mut self) {
        self.focus = None;
    }

    fn field_mut(&mut self, field: FormField) -> &mut TextInputState {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// First validation failure, if any
    pub fn validate(&self) -> Result<(), String> {
        if self.name.text.trim().is_empty() {
            return Err("Please enter your name".to_string());
        }
        let email = self.email.text.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email address".to_string());
        }
        if self.message.text.trim().is_empty() {
            return Err("Please write a message".to_string());
        }
        Ok(())
    }

    /// Validate and, on success, clear the draft. Returns whether it "sent".
    pub fn submit(&mut self) -> bool {
        match self.validate() {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.focus = None;
                self.status = Some(("Transmission sent - thank you!".to_string(), true));
                true
            }
            Err(msg) => {
                self.status = Some((msg, false));
                false
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn draw(
    x: f32,
    y: f32,
    width: f32,
    content: &PortfolioContent,
    ctx: &UiContext,
    form: &mut ContactForm,
) -> (f32, Option<PanelAction>) {
    let mut action = None;
    let mut y = draw_heading(
        x,
        y,
        "Communication Hub",
        "Ready to join your next project! Choose your preferred channel",
        theme::NEON_PINK,
    );

    // Contact method rows
    for method in &content.contact_methods {
        let row = Rect::new(x, y, width, 44.0);
        let hovered = ctx.mouse.inside(&row);
        draw_rounded_rect(
            row,
            6.0,
            if hovered {
                theme::with_alpha(theme::NEON_PINK, 0.15)
            } else {
                theme::ROW_BG
            },
        );

        draw_circle(row.x + 22.0, row.center_y(), 12.0, theme::with_alpha(theme::NEON_PINK, 0.3));
        draw_text(&method.name, row.x + 44.0, row.y + 18.0, theme::FONT_SIZE_CONTENT, theme::TEXT_COLOR);
        draw_text(&method.value, row.x + 44.0, row.y + 34.0, theme::FONT_SIZE_SMALL, theme::TEXT_DIM);

        let dims = measure_text(&method.status, None, 12, 1.0);
        draw_text(
            &method.status,
            row.right() - dims.width - 12.0,
            row.y + 26.0,
            theme::FONT_SIZE_SMALL,
            theme::ACCENT,
        );

        if ctx.mouse.clicked(&row) {
            action = Some(PanelAction::OpenUrl(method.url.clone()));
        }
        y += 50.0;
    }

    draw_text(&content.profile.location, x, y + 14.0, theme::FONT_SIZE_SMALL + 1.0, theme::TEXT_DIM);
    y += 30.0;

    // Availability banner
    let banner = Rect::new(x, y, width, 36.0);
    draw_rounded_rect(banner, 6.0, theme::with_alpha(theme::PRIMARY, 0.18));
    let avail = &content.profile.availability;
    let dims = measure_text(avail, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
    draw_text(
        avail,
        banner.center_x() - dims.width * 0.5,
        banner.center_y() + dims.height * 0.5,
        theme::FONT_SIZE_CONTENT,
        theme::PRIMARY,
    );
    y += 52.0;

    // Message form
    draw_text("Send a message", x, y + 16.0, 18.0, theme::TEXT_COLOR);
    y += 26.0;

    // Tab cycles focus through the fields
    if form.focus.is_some() && is_key_pressed(KeyCode::Tab) {
        form.focus = form.focus.map(FormField::next);
    }

    let field_h = 32.0;
    let half_w = (width - 10.0) * 0.5;
    let rows: [(FormField, Rect, &str); 4] = [
        (FormField::Name, Rect::new(x, y, half_w, field_h), "Your name"),
        (FormField::Email, Rect::new(x + half_w + 10.0, y, half_w, field_h), "Email address"),
        (FormField::Subject, Rect::new(x, y + field_h + 10.0, width, field_h), "Subject"),
        (FormField::Message, Rect::new(x, y + (field_h + 10.0) * 2.0, width, 90.0), "Your message..."),
    ];

    let mut clicked_any = false;
    for (field, rect, placeholder) in rows {
        let focused = form.focus == Some(field);
        let clicked = draw_text_input(
            rect,
            form.field_mut(field),
            placeholder,
            focused,
            ctx.mouse.left_pressed,
            ctx.mouse.inside(&rect),
        );
        if clicked {
            form.focus = Some(field);
            clicked_any = true;
        }
    }
    // Clicking outside every field drops focus
    if ctx.mouse.left_pressed && !clicked_any {
        let form_area = Rect::new(x, y, width, (field_h + 10.0) * 2.0 + 90.0);
        if !ctx.mouse.inside(&form_area) {
            form.focus = None;
        }
    }
    y += (field_h + 10.0) * 2.0 + 100.0;

    let send = Rect::new(x, y, 140.0, 30.0);
    if text_button(ctx, send, "Send Message", theme::NEON_PINK) {
        form.submit();
    }
    if let Some((status, ok)) = &form.status {
        let color = if *ok { theme::SUCCESS } else { theme::DANGER };
        draw_text(status, send.right() + 14.0, y + 20.0, theme::FONT_SIZE_CONTENT, color);
    }
    y += 44.0;

    (y, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        for ch in "Ada".chars() {
            form.name.insert_char(ch);
        }
        for ch in "ada@example.com".chars() {
            form.email.insert_char(ch);
        }
        for ch in "Hello there".chars() {
            form.message.insert_char(ch);
        }
        form
    }

    #[test]
    fn test_valid_form_submits_and_clears() {
        let mut form = filled_form();
        assert!(form.validate().is_ok());
        assert!(form.submit());
        assert!(form.name.text.is_empty());
        assert!(form.message.text.is_empty());
        assert!(matches!(form.status, Some((_, true))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = filled_form();
        form.name.clear();
        assert!(form.validate().is_err());
        assert!(!form.submit());
        // Draft survives a failed submit
        assert_eq!(form.email.text, "ada@example.com");
        assert!(matches!(form.status, Some((_, false))));
    }

    #[test]
    fn test_email_requires_at_sign() {
        let mut form = filled_form();
        form.email.clear();
        for ch in "not-an-email".chars() {
            form.email.insert_char(ch);
        }
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_whitespace_message_rejected() {
        let mut form = filled_form();
        form.message.clear();
        form.message.insert_char(' ');
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_focus_cycle_wraps() {
        assert_eq!(FormField::Name.next(), FormField::Email);
        assert_eq!(FormField::Message.next(), FormField::Name);
    }
}
