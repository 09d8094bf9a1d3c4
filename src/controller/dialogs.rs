//! Modal prompt contract used by the controller.
//!
//! Every prompt is a suspending call: it returns once the user confirms, denies
//! or dismisses it. Dismissal must never have side effects.

use anyhow::Result;

use crate::constants::MIN_NAME_CHARS;

/// Result of a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Primary button
    Confirmed,
    /// Secondary ("deny") button, only offered when the prompt has one
    Denied,
    /// Cancel button, Esc, or anything else that closes the prompt
    Dismissed,
}

impl Confirmation {
    /// True for [`Confirmation::Confirmed`].
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// Visual tone of a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Neutral question
    #[default]
    Question,
    /// Destructive or irreversible action
    Warning,
}

/// Confirm / deny / cancel prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    /// Dialog title
    pub title: String,
    /// Body text (may span several lines)
    pub text: String,
    /// Label of the confirm button
    pub confirm_label: String,
    /// Label of the deny button; `None` for a two-way prompt
    pub deny_label: Option<String>,
    /// Label of the cancel button
    pub cancel_label: String,
    /// Visual tone
    pub tone: Tone,
}

impl ConfirmPrompt {
    /// Creates a two-way prompt with default button labels.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            confirm_label: "OK".to_string(),
            deny_label: None,
            cancel_label: "Cancel".to_string(),
            tone: Tone::Question,
        }
    }

    /// Sets the confirm button label.
    pub fn confirm(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    /// Adds a deny button, making the prompt three-way.
    pub fn deny(mut self, label: impl Into<String>) -> Self {
        self.deny_label = Some(label.into());
        self
    }

    /// Marks the prompt as a warning.
    pub fn warning(mut self) -> Self {
        self.tone = Tone::Warning;
        self
    }
}

/// Validator for text prompts: `Err(message)` rejects the value and re-prompts.
pub type TextValidator = fn(&str) -> Result<(), String>;

/// Single-line text prompt.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    /// Dialog title
    pub title: String,
    /// Label above the input field
    pub label: String,
    /// Hint shown while the field is empty
    pub placeholder: String,
    /// Initial field contents
    pub initial: String,
    /// Label of the confirm button
    pub confirm_label: String,
    /// Optional validator applied before the prompt may close
    pub validator: Option<TextValidator>,
}

impl TextPrompt {
    /// Creates a text prompt with an empty field.
    pub fn new(title: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            label: label.into(),
            placeholder: String::new(),
            initial: String::new(),
            confirm_label: "OK".to_string(),
            validator: None,
        }
    }

    /// Sets the placeholder hint.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Prefills the field.
    pub fn initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }

    /// Sets the confirm button label.
    pub fn confirm(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    /// Attaches a validator.
    pub fn validator(mut self, validator: TextValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Runs the validator, if any.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        self.validator.map_or(Ok(()), |validate| validate(value))
    }
}

/// One option of a select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    /// Text shown to the user
    pub label: String,
    /// Value returned when chosen
    pub value: T,
}

impl<T> SelectOption<T> {
    /// Creates an option.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Single-select prompt over a label -> value mapping.
#[derive(Debug, Clone)]
pub struct SelectPrompt<T> {
    /// Dialog title
    pub title: String,
    /// Hint shown above the options
    pub placeholder: String,
    /// Label of the confirm button
    pub confirm_label: String,
    /// Options in display order
    pub options: Vec<SelectOption<T>>,
}

impl<T> SelectPrompt<T> {
    /// Creates a select prompt.
    pub fn new(title: impl Into<String>, options: Vec<SelectOption<T>>) -> Self {
        Self {
            title: title.into(),
            placeholder: String::new(),
            confirm_label: "Select".to_string(),
            options,
        }
    }

    /// Sets the hint text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the confirm button label.
    pub fn confirm(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Completed action; dismisses itself
    Success,
    /// Informational; acknowledged by the user
    Info,
    /// Rejected input; acknowledged by the user
    Warning,
}

/// Message shown after (or instead of) an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Short title
    pub title: String,
    /// Body text
    pub text: String,
}

impl Notice {
    /// Success notice.
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Success, title, text)
    }

    /// Informational notice.
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, title, text)
    }

    /// Warning notice.
    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Warning, title, text)
    }

    fn with_level(level: NoticeLevel, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Modal prompts and notices.
pub trait DialogService {
    /// Asks for confirmation.
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<Confirmation>;

    /// Asks for a line of text. Returned values always pass the prompt's validator.
    fn input_text(&mut self, prompt: &TextPrompt) -> Result<Option<String>>;

    /// Asks the user to pick one option.
    fn select<T: Clone>(&mut self, prompt: &SelectPrompt<T>) -> Result<Option<T>>;

    /// Shows a notice. Success notices must not block.
    fn notify(&mut self, notice: &Notice) -> Result<()>;
}

/// Student names must have at least [`MIN_NAME_CHARS`] characters after trimming.
pub fn validate_student_name(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Please enter a name.".to_string());
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(format!(
            "Names must be at least {MIN_NAME_CHARS} characters long."
        ));
    }
    Ok(())
}

/// Arrangement names must not be blank.
pub fn validate_arrangement_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("Please enter a name for this arrangement.".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_student_name() {
        assert!(validate_student_name("").is_err());
        assert!(validate_student_name("   ").is_err());
        assert!(validate_student_name(" K ").is_err());
        assert!(validate_student_name("Kim").is_ok());
        // Two Hangul syllables count as two characters, not six bytes
        assert!(validate_student_name("민준").is_ok());
        assert!(validate_student_name("민").is_err());
    }

    #[test]
    fn test_validate_arrangement_name() {
        assert!(validate_arrangement_name("").is_err());
        assert!(validate_arrangement_name("  ").is_err());
        assert!(validate_arrangement_name("x").is_ok());
    }

    #[test]
    fn test_confirm_prompt_builder() {
        let prompt = ConfirmPrompt::new("Seat", "Who sits here?")
            .confirm("Rename")
            .deny("Vacate")
            .warning();
        assert_eq!(prompt.confirm_label, "Rename");
        assert_eq!(prompt.deny_label.as_deref(), Some("Vacate"));
        assert_eq!(prompt.cancel_label, "Cancel");
        assert_eq!(prompt.tone, Tone::Warning);
    }

    #[test]
    fn test_text_prompt_without_validator_accepts_anything() {
        let prompt = TextPrompt::new("Title", "Label");
        assert!(prompt.validate("").is_ok());

        let prompt = prompt.validator(validate_student_name);
        assert!(prompt.validate("").is_err());
    }
}
