//! Contact extraction from a LinkedIn connections export

mod contact;
mod extractor;

pub use contact::Contact;
pub use extractor::{extract_contacts, load_contacts, parse_contacts};
