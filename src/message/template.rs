//! Message template rendering

use super::code::promo_code;
use crate::config::MessageConfig;

const NAME_PLACEHOLDER: &str = "{name}";
const CODE_PLACEHOLDER: &str = "{code}";

/// Turns a contact name and row id into a message body
#[derive(Debug, Clone)]
pub struct MessageComposer {
    code_prefix: String,
    template: String,
}

impl MessageComposer {
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            code_prefix: config.code_prefix.clone(),
            template: config.template.clone(),
        }
    }

    /// Promo code for a row
    pub fn code_for(&self, row_id: &str) -> String {
        promo_code(&self.code_prefix, row_id)
    }

    /// Fill in the template
    pub fn render(&self, name: &str, code: &str) -> String {
        // Code first so placeholder text inside a name is left alone
        self.template
            .replace(CODE_PLACEHOLDER, code)
            .replace(NAME_PLACEHOLDER, name)
    }
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::new(&MessageConfig::default())
    }
}
