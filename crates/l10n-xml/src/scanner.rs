//! Fragment scanner built on quick-xml.

use crate::error::{ErrorKind, ErrorLocation, Result, XmlError};
use crate::names::is_name;
use crate::references::{ParsedReference, is_xml_char, parse_reference};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

const ROOT_OPEN: &str = "<elem>";
const ROOT_CLOSE: &str = "</elem>";

/// Check that `value` is well-formed XML element content.
///
/// The value is wrapped in a synthetic `<elem>` root, so plain text and
/// sequences of sibling elements are both accepted. Only the first problem is
/// reported.
///
/// # Example
///
/// ```rust
/// use l10n_xml::{ErrorLocation, check_fragment};
///
/// assert!(check_fragment("Click <html:b>here</html:b>").is_ok());
///
/// // Left open: surfaces when the synthetic root closes
/// let err = check_fragment("This is <b> stuff").unwrap_err();
/// assert_eq!(err.location, ErrorLocation::AfterValue);
/// ```
///
/// # Errors
///
/// Returns an [`XmlError`] describing the first well-formedness problem.
pub fn check_fragment(value: &str) -> Result<()> {
    let wrapped = format!("{}{}{}", ROOT_OPEN, value, ROOT_CLOSE);
    let mut scanner = FragmentScanner::new(&wrapped, value.len());
    let result = scanner.scan();
    if let Err(err) = &result {
        tracing::trace!(error = %err, location = ?err.location, "fragment is not well-formed");
    }
    result
}

/// Internal scanner state.
struct FragmentScanner<'a> {
    /// The wrapped source being scanned.
    source: &'a str,

    /// The quick-xml reader.
    reader: Reader<&'a [u8]>,

    /// Length of the unwrapped value in bytes.
    value_len: usize,

    /// Names of the currently open elements, synthetic root first.
    stack: Vec<String>,

    /// Set once the synthetic root has been closed.
    root_closed: bool,
}

impl<'a> FragmentScanner<'a> {
    fn new(source: &'a str, value_len: usize) -> Self {
        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.trim_text_start = false;
        config.trim_text_end = false;
        // Tag matching is done here so the location can be reported precisely.
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.check_comments = true;

        Self {
            source,
            reader,
            value_len,
            stack: Vec::new(),
            root_closed: false,
        }
    }

    fn scan(&mut self) -> Result<()> {
        loop {
            let event_start = self.reader.buffer_position() as usize;

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    self.check_after_root(event_start)?;
                    let name = self.check_tag(&e, event_start)?;
                    self.stack.push(name);
                }
                Ok(Event::Empty(e)) => {
                    self.check_after_root(event_start)?;
                    self.check_tag(&e, event_start)?;
                }
                Ok(Event::End(e)) => {
                    let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.handle_end(found, event_start)?;
                }
                Ok(Event::Text(_)) => {
                    let event_end = self.reader.buffer_position() as usize;
                    let text = &self.source[event_start..event_end];
                    if self.root_closed && !text.trim().is_empty() {
                        return Err(self.error(ErrorKind::JunkAfterRoot, event_start));
                    }
                    self.check_text(text, event_start)?;
                }
                Ok(Event::CData(_)) => {
                    self.check_after_root(event_start)?;
                }
                Ok(Event::Comment(_) | Event::PI(_)) => {}
                Ok(Event::Decl(_) | Event::DocType(_)) => {
                    // Only valid in a document prolog, never inside a value
                    return Err(self.error(ErrorKind::InvalidToken, event_start));
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    let position = self.reader.error_position() as usize;
                    return Err(self.error(
                        ErrorKind::UnclosedToken {
                            details: e.to_string(),
                        },
                        position,
                    ));
                }
            }
        }

        if let Some(open) = self.stack.pop() {
            // Only reachable when the value swallowed the synthetic close tag
            return Err(XmlError::new(
                ErrorKind::MismatchedTag {
                    expected: Some(open),
                    found: String::new(),
                },
                ErrorLocation::AfterValue,
            ));
        }

        Ok(())
    }

    fn handle_end(&mut self, found: String, event_start: usize) -> Result<()> {
        // Report at the name, after `</`
        let name_start = event_start + 2;

        match self.stack.pop() {
            Some(open) if open == found => {
                if self.stack.is_empty() {
                    self.root_closed = true;
                }
                Ok(())
            }
            expected => Err(self.error(ErrorKind::MismatchedTag { expected, found }, name_start)),
        }
    }

    fn check_after_root(&self, event_start: usize) -> Result<()> {
        if self.root_closed {
            return Err(self.error(ErrorKind::JunkAfterRoot, event_start));
        }
        Ok(())
    }

    /// Validate a start or empty tag and return its name.
    fn check_tag(&self, e: &BytesStart<'_>, event_start: usize) -> Result<String> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        if !is_name(&name) {
            return Err(self.error(ErrorKind::InvalidToken, event_start + 1));
        }

        for attr in e.attributes() {
            let attr = attr.map_err(|_| self.error(ErrorKind::InvalidToken, event_start))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            if !is_name(&key) {
                return Err(self.error(ErrorKind::InvalidToken, event_start));
            }

            let raw = String::from_utf8_lossy(&attr.value).into_owned();
            if raw.contains('<') {
                return Err(self.error(ErrorKind::InvalidToken, event_start));
            }
            // Attribute offsets inside the tag are not tracked; report the tag.
            if self.check_references(&raw, 0).is_err() {
                return Err(self.error(ErrorKind::InvalidToken, event_start));
            }
        }

        Ok(name)
    }

    /// Validate character data starting at `base` in the source.
    ///
    /// Rejects characters outside the XML `Char` production, a literal `]]>`,
    /// and `&` that does not start a reference, whichever comes first.
    fn check_text(&self, text: &str, base: usize) -> Result<()> {
        let mut pos = 0;
        while let Some(c) = text[pos..].chars().next() {
            if !is_xml_char(c) || text[pos..].starts_with("]]>") {
                return Err(self.error(ErrorKind::InvalidToken, base + pos));
            }
            if c == '&' {
                match parse_reference(text, pos) {
                    ParsedReference::Complete(_, len) => {
                        pos += len;
                        continue;
                    }
                    ParsedReference::InvalidCharacter => {
                        return Err(self.error(ErrorKind::InvalidCharacterReference, base + pos));
                    }
                    ParsedReference::Malformed => {
                        return Err(self.error(ErrorKind::InvalidToken, base + pos));
                    }
                }
            }
            pos += c.len_utf8();
        }
        Ok(())
    }

    /// Validate every `&` in `text`, which starts at `base` in the source.
    fn check_references(&self, text: &str, base: usize) -> Result<()> {
        let mut pos = 0;
        while let Some(found) = text[pos..].find('&') {
            let amp = pos + found;
            match parse_reference(text, amp) {
                ParsedReference::Complete(_, len) => pos = amp + len,
                ParsedReference::InvalidCharacter => {
                    return Err(self.error(ErrorKind::InvalidCharacterReference, base + amp));
                }
                ParsedReference::Malformed => {
                    return Err(self.error(ErrorKind::InvalidToken, base + amp));
                }
            }
        }
        Ok(())
    }

    /// Build an error, translating a source offset into a value location.
    fn error(&self, kind: ErrorKind, source_offset: usize) -> XmlError {
        let location = match source_offset.checked_sub(ROOT_OPEN.len()) {
            None => ErrorLocation::InValue(0),
            Some(offset) if offset >= self.value_len => ErrorLocation::AfterValue,
            Some(offset) => ErrorLocation::InValue(offset),
        };
        XmlError::new(kind, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_and_location(value: &str) -> (ErrorKind, ErrorLocation) {
        let err = check_fragment(value).unwrap_err();
        (err.kind, err.location)
    }

    #[test]
    fn test_plain_text_is_fine() {
        assert!(check_fragment("").is_ok());
        assert!(check_fragment("plain localized string").is_ok());
        assert!(check_fragment("This is &quot;good&quot;").is_ok());
        assert!(check_fragment("This is &not; good").is_ok());
    }

    #[test]
    fn test_markup_is_fine() {
        assert!(check_fragment("<html:a href=\"x\">link</html:a> and <br/>").is_ok());
        assert!(check_fragment("a <!-- note --> b <![CDATA[ & < ]]>").is_ok());
    }

    #[test]
    fn test_quotes_are_fine() {
        assert!(check_fragment("\"'\"").is_ok());
        assert!(check_fragment("\\'").is_ok());
    }

    #[test]
    fn test_closing_tag_without_open_element() {
        let (kind, location) = kind_and_location("This is </bad> stuff");
        assert_eq!(
            kind,
            ErrorKind::MismatchedTag {
                expected: Some("elem".to_string()),
                found: "bad".to_string(),
            }
        );
        assert_eq!(location, ErrorLocation::InValue(10));
    }

    #[test]
    fn test_closing_tag_on_second_line() {
        let (_, location) = kind_and_location("This is\n  </bad>\nstuff");
        assert_eq!(location, ErrorLocation::InValue(12));
    }

    #[test]
    fn test_unbalanced_nesting() {
        let (kind, location) = kind_and_location("<b><i>x</b></i>");
        assert_eq!(
            kind,
            ErrorKind::MismatchedTag {
                expected: Some("i".to_string()),
                found: "b".to_string(),
            }
        );
        assert_eq!(location, ErrorLocation::InValue(9));
    }

    #[test]
    fn test_unclosed_element_reports_after_value() {
        let (kind, location) = kind_and_location("This is <b> stuff");
        assert!(matches!(kind, ErrorKind::MismatchedTag { .. }));
        assert_eq!(location, ErrorLocation::AfterValue);
    }

    #[test]
    fn test_stray_ampersand() {
        let (kind, location) = kind_and_location("Tom & Jerry");
        assert_eq!(kind, ErrorKind::InvalidToken);
        assert_eq!(location, ErrorLocation::InValue(4));
    }

    #[test]
    fn test_invalid_character_reference() {
        let (kind, location) = kind_and_location("nul &#0; here");
        assert_eq!(kind, ErrorKind::InvalidCharacterReference);
        assert_eq!(location, ErrorLocation::InValue(4));
    }

    #[test]
    fn test_invalid_tag_name() {
        let (kind, location) = kind_and_location("a <3> b");
        assert_eq!(kind, ErrorKind::InvalidToken);
        assert_eq!(location, ErrorLocation::InValue(3));
    }

    #[test]
    fn test_closing_the_root_early() {
        let (kind, location) = kind_and_location("done</elem>more");
        assert_eq!(kind, ErrorKind::JunkAfterRoot);
        assert_eq!(location, ErrorLocation::InValue(11));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        for (value, offset) in [
            ("nul \u{0} here", 4),
            ("bell \u{7} here", 5),
            ("esc \u{1b}[0m", 4),
            ("\u{FFFE}", 0),
        ] {
            let (kind, location) = kind_and_location(value);
            assert_eq!(kind, ErrorKind::InvalidToken, "{:?}", value);
            assert_eq!(location, ErrorLocation::InValue(offset), "{:?}", value);
        }
    }

    #[test]
    fn test_whitespace_controls_are_fine() {
        assert!(check_fragment("tab\there\r\nnext line").is_ok());
    }

    #[test]
    fn test_cdata_end_in_text_is_rejected() {
        let (kind, location) = kind_and_location("a ]]> b");
        assert_eq!(kind, ErrorKind::InvalidToken);
        assert_eq!(location, ErrorLocation::InValue(2));
        assert!(check_fragment("a ]] > b ]>").is_ok());
    }

    #[test]
    fn test_first_text_problem_wins() {
        let (kind, location) = kind_and_location("x \u{7} & y");
        assert_eq!(kind, ErrorKind::InvalidToken);
        assert_eq!(location, ErrorLocation::InValue(2));

        let (kind, location) = kind_and_location("&#0; \u{7}");
        assert_eq!(kind, ErrorKind::InvalidCharacterReference);
        assert_eq!(location, ErrorLocation::InValue(0));
    }

    #[test]
    fn test_doctype_is_rejected() {
        let (kind, _) = kind_and_location("<!DOCTYPE x>");
        assert_eq!(kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_error_message() {
        let err = check_fragment("This is </bad> stuff").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"mismatched tag");
    }
}
