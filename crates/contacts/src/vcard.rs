//! Minimal vCard reader.
//!
//! Extracts the name and birthday of each card of a `.vcf` export. Only the
//! `N`, `FN` and `BDAY` properties are interpreted; everything else is
//! skipped.
//!
//! # Supported birthday formats
//!
//! - `1990-05-12` and `19900512`
//! - date-times such as `1990-05-12T08:00:00Z` (the time is dropped)
//!
//! Year-less birthdays (`--05-12`) and other values are ignored with a
//! warning, which leaves the contact without birthday.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use nextbday_protocol::RawContact;
use tracing::{debug, warn};

/// The fields collected for one card.
#[derive(Debug, Default)]
struct Card {
    family_name: Option<String>,
    given_name: Option<String>,
    formatted_name: Option<String>,
    birthday: Option<NaiveDateTime>,
}

impl Card {
    fn into_contact(self) -> RawContact {
        let (family_name, given_name) = match (self.family_name, self.given_name) {
            (None, None) => (String::new(), self.formatted_name.unwrap_or_default()),
            (family, given) => (family.unwrap_or_default(), given.unwrap_or_default()),
        };
        RawContact::new(family_name, given_name, self.birthday)
    }
}

/// Parses every card of a vCard document.
///
/// # Examples
///
/// ```
/// use nextbday_contacts::vcard::parse_contacts;
///
/// let contacts = parse_contacts(
///     "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Hopper;Grace;;;\r\nBDAY:1906-12-09\r\nEND:VCARD\r\n",
/// );
/// assert_eq!(contacts.len(), 1);
/// assert_eq!(contacts[0].given_name, "Grace");
/// assert!(contacts[0].birthday.is_some());
/// ```
#[must_use]
pub fn parse_contacts(input: &str) -> Vec<RawContact> {
    let mut contacts = Vec::new();
    let mut card: Option<Card> = None;

    for line in unfold(input) {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let property = property_name(name);

        match property.as_str() {
            "BEGIN" if value.eq_ignore_ascii_case("VCARD") => card = Some(Card::default()),
            "END" if value.eq_ignore_ascii_case("VCARD") => {
                if let Some(done) = card.take() {
                    contacts.push(done.into_contact());
                }
            }
            "N" => {
                if let Some(card) = card.as_mut() {
                    let mut parts = split_unescaped(value).into_iter();
                    card.family_name = parts.next().filter(|s| !s.is_empty());
                    card.given_name = parts.next().filter(|s| !s.is_empty());
                }
            }
            "FN" => {
                if let Some(card) = card.as_mut() {
                    card.formatted_name = Some(unescape(value));
                }
            }
            "BDAY" => {
                if let Some(card) = card.as_mut() {
                    card.birthday = parse_birthday(value);
                    if card.birthday.is_none() {
                        warn!(value, "ignoring unsupported birthday format");
                    }
                }
            }
            _ => {}
        }
    }

    debug!(contacts = contacts.len(), "parsed vCard document");
    contacts
}

/// Parses a `BDAY` value into a date at midnight.
#[must_use]
pub fn parse_birthday(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    let date_part = value.split_once('T').map_or(value, |(date, _)| date);

    ["%Y-%m-%d", "%Y%m%d"]
        .into_iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Joins folded lines: a line starting with a space or tab continues the
/// previous one.
fn unfold(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in input.lines() {
        if let Some(continuation) = raw.strip_prefix([' ', '\t']) {
            if let Some(previous) = lines.last_mut() {
                previous.push_str(continuation);
                continue;
            }
        }
        lines.push(raw.to_string());
    }
    lines
}

/// Upper-cased property name without group prefix or parameters, e.g.
/// `item1.BDAY;VALUE=date` becomes `BDAY`.
fn property_name(name: &str) -> String {
    let name = name.split(';').next().unwrap_or(name);
    let name = name.rsplit('.').next().unwrap_or(name);
    name.trim().to_ascii_uppercase()
}

/// Splits a structured value on unescaped `;` and unescapes each component.
fn split_unescaped(value: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push('\\');
                    current.push(escaped);
                }
            }
            ';' => parts.push(unescape(&std::mem::take(&mut current))),
            _ => current.push(c),
        }
    }
    parts.push(unescape(&current));
    parts
}

/// Resolves vCard escapes (`\,`, `\;`, `\\`, `\n`).
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push(' '),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).map(|d| d.and_time(NaiveTime::MIN))
    }

    #[test]
    fn parses_names_and_birthdays() {
        let input = "\
BEGIN:VCARD
VERSION:3.0
N:Lovelace;Ada;;;
FN:Ada Lovelace
BDAY:1815-12-10
END:VCARD
BEGIN:VCARD
VERSION:3.0
N:Turing;Alan;Mathison;;
BDAY:19120623
END:VCARD
";
        let contacts = parse_contacts(input);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].family_name, "Lovelace");
        assert_eq!(contacts[0].given_name, "Ada");
        assert_eq!(contacts[0].birthday, date(1815, 12, 10));
        assert_eq!(contacts[1].family_name, "Turing");
        assert_eq!(contacts[1].birthday, date(1912, 6, 23));
    }

    #[test]
    fn contact_without_birthday_is_kept_without_date() {
        let contacts = parse_contacts("BEGIN:VCARD\nN:Doe;Jane;;;\nEND:VCARD\n");
        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].birthday.is_none());
    }

    #[test]
    fn falls_back_to_formatted_name() {
        let contacts = parse_contacts("BEGIN:VCARD\nFN:Cher\nBDAY:1946-05-20\nEND:VCARD\n");
        assert_eq!(contacts[0].family_name, "");
        assert_eq!(contacts[0].given_name, "Cher");
    }

    #[test]
    fn handles_groups_parameters_and_crlf() {
        let input = "BEGIN:VCARD\r\nN:Hopper;Grace;;;\r\nitem1.BDAY;VALUE=date:1906-12-09\r\nEND:VCARD\r\n";
        let contacts = parse_contacts(input);
        assert_eq!(contacts[0].birthday, date(1906, 12, 9));
    }

    #[test]
    fn unfolds_continuation_lines() {
        let input = "BEGIN:VCARD\nN:Van der \n Berg;Anna;;;\nBDAY:1970-01-02\nEND:VCARD\n";
        let contacts = parse_contacts(input);
        assert_eq!(contacts[0].family_name, "Van der Berg");
    }

    #[test]
    fn unescapes_structured_values() {
        let contacts = parse_contacts(
            r"BEGIN:VCARD
N:O\;Brien;Pat\, Jr.;;;
END:VCARD
",
        );
        assert_eq!(contacts[0].family_name, "O;Brien");
        assert_eq!(contacts[0].given_name, "Pat, Jr.");
    }

    #[test]
    fn parse_birthday_formats() {
        assert_eq!(parse_birthday("1990-05-12"), date(1990, 5, 12));
        assert_eq!(parse_birthday("19900512"), date(1990, 5, 12));
        assert_eq!(parse_birthday("1990-05-12T08:30:00Z"), date(1990, 5, 12));
        assert_eq!(parse_birthday("--05-12"), None);
        assert_eq!(parse_birthday("someday"), None);
    }

    #[test]
    fn ignores_properties_outside_cards() {
        let contacts = parse_contacts("N:Stray;Line;;;\nBDAY:2000-01-01\n");
        assert!(contacts.is_empty());
    }
}
