//! Promo codes and message bodies

mod code;
mod template;

pub use code::{CODE_DIGEST_LEN, promo_code};
pub use template::MessageComposer;
