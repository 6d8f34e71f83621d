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
//! The skin-tone modifier code points U+1F3FB..U+1F3FF.

/// One of the five skin-tone modifiers that may trail an emoji which
/// supports them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Fitzpatrick {
    /// U+1F3FB, Fitzpatrick scale types 1-2
    Type12,
    /// U+1F3FC
    Type3,
    /// U+1F3FD
    Type4,
    /// U+1F3FE
    Type5,
    /// U+1F3FF
    Type6,
}

impl Fitzpatrick {
    /// Classifies a code point as a skin-tone modifier.
    /// # Examples
    /// ```
    /// use emoji_finder::emojis::fitzpatrick::Fitzpatrick;
    ///
    /// assert_eq!(Fitzpatrick::from_char('\u{1f3fd}'), Some(Fitzpatrick::Type4));
    /// assert_eq!(Fitzpatrick::from_char('a'), None);
    /// ```
    pub fn from_char(codepoint: char) -> Option<Fitzpatrick> {
        match codepoint {
            '\u{1f3fb}' => Some(Fitzpatrick::Type12),
            '\u{1f3fc}' => Some(Fitzpatrick::Type3),
            '\u{1f3fd}' => Some(Fitzpatrick::Type4),
            '\u{1f3fe}' => Some(Fitzpatrick::Type5),
            '\u{1f3ff}' => Some(Fitzpatrick::Type6),
            _ => None,
        }
    }

    /// The modifier's code point.
    pub fn unicode(self) -> char {
        match self {
            Fitzpatrick::Type12 => '\u{1f3fb}',
            Fitzpatrick::Type3 => '\u{1f3fc}',
            Fitzpatrick::Type4 => '\u{1f3fd}',
            Fitzpatrick::Type5 => '\u{1f3fe}',
            Fitzpatrick::Type6 => '\u{1f3ff}',
        }
    }
}
