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
//! Left-to-right scanning for emoji occurrences in text.
//!
//! The scanner is stateless: every call probes the text from the given
//! position and returns the first occurrence it finds. Callers that want
//! non-overlapping matches resume the next scan at
//! [UnicodeCandidate::end].

use crate::emojis::emoji::Emoji;
use crate::emojis::fitzpatrick::Fitzpatrick;
use crate::trie::EmojiTrie;

/// One located emoji occurrence within a text buffer.
///
/// All indices are byte offsets into the scanned `&str`.
#[derive(Debug, Clone)]
pub struct UnicodeCandidate<'a> {
    /// The matched emoji.
    pub emoji: &'a Emoji,
    /// Byte index of the first code point of the base sequence.
    pub emoji_start: usize,
    /// Exclusive end byte index of the base sequence, without any
    /// skin-tone modifier.
    pub emoji_end: usize,
    /// The skin-tone modifier directly following the base sequence, if the
    /// emoji supports one and one is present.
    pub fitzpatrick: Option<Fitzpatrick>,
    /// Exclusive end byte index including the skin-tone modifier. Equal to
    /// [UnicodeCandidate::emoji_end] when no modifier was consumed.
    pub fitzpatrick_end: usize,
}

impl UnicodeCandidate<'_> {
    /// Byte index at which a skin-tone modifier would start (the end of
    /// the base sequence, whether or not a modifier is present).
    pub fn fitzpatrick_start(&self) -> usize {
        self.emoji_end
    }

    pub fn has_fitzpatrick(&self) -> bool {
        self.fitzpatrick.is_some()
    }

    /// Exclusive end of the whole occurrence; the position subsequent
    /// scans should resume from.
    pub fn end(&self) -> usize {
        self.fitzpatrick_end
    }
}

/// Finds the first emoji occurrence in `text` starting at or after byte
/// position `from`.
///
/// Every char boundary is probed in order until the trie reports a match.
/// When the matched emoji supports skin-tone modifiers and the next code
/// point is one, the occurrence is extended to cover it; an emoji that
/// does not support modifiers never consumes a trailing modifier code
/// point.
///
/// Returns `None` for empty text, a start position at or past the end of
/// the text, or text without any catalogued emoji.
pub fn next_candidate<'a>(
    emojis: &'a [Emoji],
    trie: &EmojiTrie,
    text: &str,
    from: usize,
) -> Option<UnicodeCandidate<'a>> {
    if from >= text.len() {
        return None;
    }
    for (start, _) in text.char_indices() {
        if start < from {
            continue;
        }
        if let Some((handle, emoji_end)) = trie.longest_match(text, start) {
            let emoji = &emojis[handle];
            let fitzpatrick = if emoji.supports_fitzpatrick {
                text[emoji_end..].chars().next().and_then(Fitzpatrick::from_char)
            } else {
                None
            };
            let fitzpatrick_end = match fitzpatrick {
                Some(modifier) => emoji_end + modifier.unicode().len_utf8(),
                None => emoji_end,
            };
            return Some(UnicodeCandidate {
                emoji,
                emoji_start: start,
                emoji_end,
                fitzpatrick,
                fitzpatrick_end,
            });
        }
    }
    None
}
