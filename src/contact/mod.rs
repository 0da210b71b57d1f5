//! Contact details derived from a sheet row
//!
//! Nothing here is stored; contacts are recomputed from the row every run.

mod fields;
mod phone;

pub use fields::{
    Contact, ContactFields, DEFAULT_NAME, NAME_FIELDS, PHONE_FIELDS, PREFERENCE_FIELDS,
};
pub use phone::{DEFAULT_COUNTRY_CODE, mask_phone, normalize_phone};
