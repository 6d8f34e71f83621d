/*
 * Copyright 2021 the emoji_finder developers
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! The main data struct for single emojis.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use regex::Regex;

/// A struct that holds information for one particular emoji (which might
/// also be a sequence of multiple code points).
#[derive(Debug, Eq, Clone)]
pub struct Emoji {
    /// The canonical code-point sequence for this emoji, without any
    /// skin-tone modifier.
    pub unicode: String,
    /// The short names this emoji can be addressed by, e.g. `smile`.
    ///
    /// Insertion order is preserved; the first alias is treated as the
    /// primary one for display purposes.
    pub aliases: Vec<String>,
    /// The category tags this emoji is filed under. May be empty.
    pub tags: Vec<String>,
    /// Whether a trailing skin-tone modifier may follow this emoji.
    pub supports_fitzpatrick: bool,
    /// A free-text description. Not used by any matching logic.
    pub description: Option<String>,
}

impl Emoji {
    /// Parses a whitespace/dash-separated hexadecimal code-point sequence
    /// (the format emoji datasets are authored in) into the rendered
    /// character sequence.
    ///
    /// Returns `None` if the input contains no valid code point at all.
    /// Code points that are no valid Unicode scalar values are skipped.
    /// # Examples
    /// ```
    /// use emoji_finder::emojis::emoji::Emoji;
    ///
    /// assert_eq!(Emoji::parse_sequence("1F9A6"), Some(String::from("\u{1f9a6}")));
    /// assert_eq!(
    ///     Emoji::parse_sequence("1F3F3 FE0F 200D 1F308"),
    ///     Some(String::from("\u{1f3f3}\u{fe0f}\u{200d}\u{1f308}"))
    /// );
    /// assert_eq!(Emoji::parse_sequence("zzz"), None);
    /// ```
    pub fn parse_sequence(sequence: &str) -> Option<String> {
        lazy_static! {
            static ref HEX_SEQUENCE: Regex = Regex::new(r"[a-fA-F0-9]{1,8}").unwrap();
        }
        let unicode: String = HEX_SEQUENCE
            .find_iter(sequence)
            .map(|hex| u32::from_str_radix(hex.as_str(), 16).unwrap_or(0))
            .filter(|codepoint| *codepoint > 0)
            .filter_map(std::char::from_u32)
            .collect();
        if unicode.is_empty() {
            None
        } else {
            Some(unicode)
        }
    }

    /// The length of the code-point sequence (in Unicode scalar values,
    /// not bytes).
    pub fn sequence_len(&self) -> usize {
        self.unicode.chars().count()
    }

    /// The hexadecimal rendition of the code-point sequence,
    /// e.g. `1F3F3 FE0F 200D 1F308`.
    pub fn hex_sequence(&self) -> String {
        self.unicode
            .chars()
            .map(|codepoint| format!("{:X}", codepoint as u32))
            .join(" ")
    }
}

impl Display for Emoji {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.aliases.first() {
            Some(alias) => write!(f, "{} ({})", self.hex_sequence(), alias),
            None => write!(f, "{}", self.hex_sequence()),
        }
    }
}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unicode.hash(state)
    }
}

impl PartialEq<Emoji> for Emoji {
    fn eq(&self, other: &Emoji) -> bool {
        self.unicode == other.unicode
    }
}

impl PartialEq<str> for Emoji {
    fn eq(&self, other: &str) -> bool {
        self.unicode == other
    }
}
