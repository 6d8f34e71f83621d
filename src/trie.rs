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
//! A prefix tree over emoji code-point sequences.
//!
//! The trie owns its nodes; terminal nodes carry a handle (an index into
//! the emoji list the trie was built from) instead of the emoji itself, so
//! the list stays the single owner of the data.

use std::collections::HashMap;

use crate::emojis::emoji::Emoji;

/// The result of matching a whole buffer against the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matches {
    /// The buffer is precisely one catalogued emoji sequence.
    Exactly,
    /// The buffer is a strict prefix of at least one catalogued sequence.
    Possibly,
    /// No catalogued sequence starts with this buffer.
    Impossible,
}

impl Matches {
    pub fn exact_match(self) -> bool {
        self == Matches::Exactly
    }

    pub fn impossible(self) -> bool {
        self == Matches::Impossible
    }
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    emoji: Option<usize>,
}

/// A prefix tree over the code-point sequences of an emoji list.
///
/// Handles returned by the lookup operations index into the list the trie
/// was built from.
#[derive(Debug)]
pub struct EmojiTrie {
    root: Node,
}

impl EmojiTrie {
    /// Builds the trie for a list of emojis.
    ///
    /// Common prefixes share nodes; the terminal node of each sequence
    /// carries the emoji's index. If two emojis carry the same sequence
    /// (a dataset-quality problem), the later one wins.
    pub fn new(emojis: &[Emoji]) -> EmojiTrie {
        let mut root = Node::default();
        for (handle, emoji) in emojis.iter().enumerate() {
            let mut node = &mut root;
            for codepoint in emoji.unicode.chars() {
                node = node.children.entry(codepoint).or_insert_with(Node::default);
            }
            if let Some(previous) = node.emoji.replace(handle) {
                warn!(
                    "duplicate code sequence: {} replaces {}",
                    emoji, emojis[previous]
                );
            }
        }
        EmojiTrie { root }
    }

    /// Checks whether a sequence of code points is, or could become, an
    /// emoji.
    ///
    /// Returns [Matches::Exactly] if `sequence` in its entirety is a
    /// catalogued emoji, [Matches::Possibly] if it is a strict prefix of
    /// one, and [Matches::Impossible] otherwise. An empty sequence over a
    /// non-empty trie is a prefix of everything, hence `Possibly`.
    pub fn classify(&self, sequence: &str) -> Matches {
        let mut node = &self.root;
        for codepoint in sequence.chars() {
            node = match node.children.get(&codepoint) {
                Some(child) => child,
                None => return Matches::Impossible,
            };
        }
        if node.emoji.is_some() {
            Matches::Exactly
        } else if node.children.is_empty() {
            // A dead node; cannot occur on a trie built by `new`
            Matches::Impossible
        } else {
            Matches::Possibly
        }
    }

    /// Looks up the handle of the emoji whose sequence is exactly
    /// `sequence`.
    pub fn find(&self, sequence: &str) -> Option<usize> {
        let mut node = &self.root;
        for codepoint in sequence.chars() {
            node = node.children.get(&codepoint)?;
        }
        node.emoji
    }

    /// Finds the longest catalogued sequence that `text` continues with at
    /// byte position `start`.
    ///
    /// Returns the emoji's handle and the exclusive end byte index of the
    /// match. The longest terminal on the path wins, not the first one:
    /// some sequences are proper prefixes of others, and taking the first
    /// terminal would silently shorten the longer emoji.
    pub fn longest_match(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        let tail = text.get(start..)?;
        let mut node = &self.root;
        let mut best = None;
        for (offset, codepoint) in tail.char_indices() {
            node = match node.children.get(&codepoint) {
                Some(child) => child,
                None => break,
            };
            if let Some(handle) = node.emoji {
                best = Some((handle, start + offset + codepoint.len_utf8()));
            }
        }
        best
    }
}
