//! Connections export parsing
//!
//! LinkedIn prepends a free-form "Notes" block to the CSV, so the header row
//! has to be found before the records can be read.

use super::Contact;
use crate::error::{Error, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const COMPANY: &str = "Company";
pub const POSITION: &str = "Position";

const BOM: char = '\u{feff}';

/// Load contacts from a connections export on disk
pub fn load_contacts<P: AsRef<Path>>(path: P) -> Result<Vec<Contact>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let contacts = extract_contacts(file)?;
    info!("Loaded {} contacts from {:?}", contacts.len(), path);
    Ok(contacts)
}

/// Read a connections export from any reader
pub fn extract_contacts<R: Read>(mut reader: R) -> Result<Vec<Contact>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_contacts(&text))
}

/// Parse a connections export held in memory
///
/// Returns an empty list when no header row is present.
pub fn parse_contacts(text: &str) -> Vec<Contact> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let Some(start) = header_offset(text) else {
        debug!("No header row containing '{}' and '{}'", FIRST_NAME, LAST_NAME);
        return Vec::new();
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text[start..].as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => Columns::locate(headers),
        Err(e) => {
            warn!("Unreadable header row: {}", e);
            return Vec::new();
        }
    };

    let mut contacts = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => {
                if let Some(contact) = columns.contact(&record) {
                    contacts.push(contact);
                }
            }
            Err(e) => warn!("Skipping malformed row: {}", e),
        }
    }

    contacts
}

/// Byte offset of the first line carrying both name markers
fn header_offset(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.contains(FIRST_NAME) && line.contains(LAST_NAME) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Column positions resolved from the header row
struct Columns {
    first_name: Option<usize>,
    last_name: Option<usize>,
    company: Option<usize>,
    position: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            first_name: find(FIRST_NAME),
            last_name: find(LAST_NAME),
            company: find(COMPANY),
            position: find(POSITION),
        }
    }

    fn contact(&self, record: &StringRecord) -> Option<Contact> {
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or_default();

        let first_name = field(self.first_name).trim();
        let last_name = field(self.last_name).trim();
        if first_name.is_empty() || last_name.is_empty() {
            return None;
        }

        Some(Contact::new(
            first_name,
            last_name,
            Some(field(self.company).to_string()),
            Some(field(self.position).to_string()),
        ))
    }
}
