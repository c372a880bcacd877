//! CEA-708 service selection.
//!
//! `--service` takes either `all`, `all[CHARSET]`, or a comma-separated list
//! of service numbers each optionally followed by a bracketed charset:
//!
//! ```text
//! --service all
//! --service all[EUC-KR]
//! --service 1,2[UTF-8],5[EUC-KR]
//! ```
//!
//! Service numbers are 1-based and bounded by [`MAX_SERVICES`]. A charset
//! names the encoding used to turn the service's 16-bit caption text into
//! output text; once recorded for a service it is never replaced.

use std::sync::Arc;

use crate::config::MAX_SERVICES;
use crate::error::{GrammarError, ParamsError};

const FLAG: &str = "--service";

/// The set of enabled CEA-708 services and their charset overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSelection {
    enabled: [bool; MAX_SERVICES],
    charsets: [Option<Arc<str>>; MAX_SERVICES],
    all_services_charset: Option<Arc<str>>,
    active_count: usize,
}

impl Default for ServiceSelection {
    fn default() -> Self {
        ServiceSelection {
            enabled: [false; MAX_SERVICES],
            charsets: std::array::from_fn(|_| None),
            all_services_charset: None,
            active_count: 0,
        }
    }
}

impl ServiceSelection {
    /// Number of enabled services.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn is_empty(&self) -> bool {
        self.active_count == 0
    }

    /// Whether service `id` (1-based) is enabled. Out-of-range ids are not.
    pub fn is_enabled(&self, id: usize) -> bool {
        (1..=MAX_SERVICES).contains(&id) && self.enabled[id - 1]
    }

    /// Charset override for service `id` (1-based), if one was given.
    pub fn charset(&self, id: usize) -> Option<&str> {
        if !(1..=MAX_SERVICES).contains(&id) {
            return None;
        }
        self.charsets[id - 1].as_deref()
    }

    /// Charset given with the `all[CHARSET]` form.
    pub fn all_services_charset(&self) -> Option<&str> {
        self.all_services_charset.as_deref()
    }

    /// Enabled service ids in ascending order.
    pub fn enabled_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.enabled
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(idx, _)| idx + 1)
    }

    /// Parse a `--service` argument and merge it into the selection.
    ///
    /// Repeated ids are enabled once; a charset already recorded for a
    /// service is kept.
    pub fn parse(&mut self, text: &str) -> Result<(), ParamsError> {
        if let Some(rest) = text.strip_prefix("all") {
            return self.enable_all(rest);
        }

        let bytes = text.as_bytes();
        let mut pos = 0usize;
        while pos < bytes.len() {
            while pos < bytes.len() && !bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == bytes.len() {
                break;
            }

            let digits_start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            let id = text[digits_start..pos].bytes().fold(0u64, |acc, d| {
                acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
            });
            if id < 1 || id > MAX_SERVICES as u64 {
                return Err(ParamsError::bad_service(id));
            }
            let idx = (id - 1) as usize;
            if !self.enabled[idx] {
                self.enabled[idx] = true;
                self.active_count += 1;
            }

            if pos < bytes.len() && bytes[pos] == b'[' {
                let charset_start = pos + 1;
                let mut end = charset_start;
                while end < bytes.len() && bytes[end] != b']' && bytes[end] != b',' {
                    end += 1;
                }
                if end == bytes.len() || bytes[end] != b']' {
                    return Err(ParamsError::grammar(FLAG, GrammarError::UnclosedCharset));
                }
                let charset = &text[charset_start..end];
                if !charset.is_empty() && self.charsets[idx].is_none() {
                    self.charsets[idx] = Some(Arc::from(charset));
                }
                pos = end + 1;
            } else {
                pos += 1;
            }
        }

        if self.active_count == 0 {
            return Err(ParamsError::grammar(FLAG, GrammarError::NoServices));
        }
        Ok(())
    }

    // `rest` is whatever followed the leading `all`.
    fn enable_all(&mut self, rest: &str) -> Result<(), ParamsError> {
        let charset = if rest.is_empty() {
            None
        } else if let Some(inner) = rest.strip_prefix('[') {
            let Some(inner) = inner.strip_suffix(']') else {
                return Err(ParamsError::grammar(FLAG, GrammarError::UnclosedCharset));
            };
            if inner.contains(']') {
                return Err(ParamsError::grammar(
                    FLAG,
                    GrammarError::MalformedAll(format!("all{rest}")),
                ));
            }
            (!inner.is_empty()).then(|| Arc::<str>::from(inner))
        } else {
            return Err(ParamsError::grammar(
                FLAG,
                GrammarError::MalformedAll(format!("all{rest}")),
            ));
        };

        if self.all_services_charset.is_none() {
            self.all_services_charset = charset.clone();
        }
        for slot in self.charsets.iter_mut().filter(|slot| slot.is_none()) {
            *slot = charset.clone();
        }
        self.enabled = [true; MAX_SERVICES];
        self.active_count = MAX_SERVICES;
        Ok(())
    }
}
