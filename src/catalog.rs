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
//! The emoji catalog: the emoji list, the trie and the alias index built
//! once and shared read-only thereafter.

use crate::aliases::index::AliasIndex;
use crate::aliases::similarity::SimilarityAlgorithm;
use crate::emojis::emoji::Emoji;
use crate::loader;
use crate::scanner;
use crate::scanner::UnicodeCandidate;
use crate::trie::{EmojiTrie, Matches};

/// Holds the loaded emojis and provides the search operations.
///
/// A catalog is built once from a dataset and never mutated afterwards;
/// all operations are pure lookups over the immutable state, so a shared
/// reference can be used freely across threads. [EmojiCatalog::bundled]
/// provides a process-wide catalog over the packaged dataset; build your
/// own with [EmojiCatalog::new] to use a different dataset.
#[derive(Debug)]
pub struct EmojiCatalog {
    /// All emojis, longest code-point sequence first
    emojis: Vec<Emoji>,
    trie: EmojiTrie,
    index: AliasIndex,
}

impl EmojiCatalog {
    /// Builds a catalog from an already loaded emoji list.
    pub fn new(mut emojis: Vec<Emoji>) -> EmojiCatalog {
        emojis.sort_by(|a, b| b.sequence_len().cmp(&a.sequence_len()));
        let trie = EmojiTrie::new(&emojis);
        let index = AliasIndex::new(&emojis);
        debug!(
            "catalog built: {} emojis, {} tags",
            emojis.len(),
            index.tags().count()
        );
        EmojiCatalog {
            emojis,
            trie,
            index,
        }
    }

    /// The process-wide catalog over the dataset that ships with the
    /// crate.
    ///
    /// Built on first use. The bundled dataset failing to load is
    /// unrecoverable: the first access panics and so does every later
    /// one.
    pub fn bundled() -> &'static EmojiCatalog {
        lazy_static! {
            static ref BUNDLED: EmojiCatalog = EmojiCatalog::new(
                loader::load_bundled().expect("the bundled emoji dataset must load"),
            );
        }
        &BUNDLED
    }

    /// All catalogued emojis, longest code-point sequence first.
    pub fn all(&self) -> &[Emoji] {
        &self.emojis
    }

    /// All tags in the catalog, in unspecified order.
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.index.tags()
    }

    /// All emojis filed under `tag`, or `None` if the tag is unknown.
    /// # Examples
    /// ```
    /// use emoji_finder::catalog::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::bundled();
    /// let animals: Vec<_> = catalog.get_for_tag("animal").unwrap().collect();
    /// assert!(animals.iter().any(|emoji| emoji.aliases == ["otter"]));
    /// assert!(catalog.get_for_tag("not a tag").is_none());
    /// ```
    pub fn get_for_tag(&self, tag: &str) -> Option<impl Iterator<Item = &Emoji>> {
        let handles = self.index.emojis_for_tag(tag)?;
        Some(handles.iter().map(move |&handle| &self.emojis[handle]))
    }

    /// Resolves an alias, optionally scoped to a tag.
    ///
    /// `:smile:` and `smile` resolve alike. Without a tag every tag's
    /// aliases are searched in unspecified order; see
    /// [AliasIndex::resolve_exact] for the ambiguity this implies.
    /// # Examples
    /// ```
    /// use emoji_finder::catalog::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::bundled();
    /// let smile = catalog.get_for_alias(":smile:", None).unwrap();
    /// assert_eq!(smile.unicode, "\u{1f604}");
    /// assert_eq!(catalog.get_for_alias("smile", None), Some(smile));
    /// assert_eq!(catalog.get_for_alias("smile", Some("happy")), Some(smile));
    /// assert!(catalog.get_for_alias("smile", Some("animal")).is_none());
    /// ```
    pub fn get_for_alias(&self, alias: &str, tag: Option<&str>) -> Option<&Emoji> {
        self.index
            .resolve_exact(alias, tag)
            .map(|handle| &self.emojis[handle])
    }

    /// Resolves an alias like [EmojiCatalog::get_for_alias], but tolerates
    /// misspellings.
    ///
    /// On an exact miss the closest catalogued alias wins if it meets
    /// `threshold` (a required-similarity fraction in `[0, 1]`; see
    /// [crate::aliases::similarity::closest] for how it is applied per
    /// algorithm). An unknown tag yields `None` and never falls back to a
    /// global search.
    /// # Examples
    /// ```
    /// use emoji_finder::aliases::similarity::SimilarityAlgorithm;
    /// use emoji_finder::catalog::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::bundled();
    /// let smile = catalog.get_for_alias("smile", None);
    /// let resolved =
    ///     catalog.get_for_alias_with_similarity("smle", None, SimilarityAlgorithm::Levenshtein, 0.5);
    /// assert_eq!(resolved, smile);
    /// ```
    pub fn get_for_alias_with_similarity(
        &self,
        alias: &str,
        tag: Option<&str>,
        algorithm: SimilarityAlgorithm,
        threshold: f32,
    ) -> Option<&Emoji> {
        self.index
            .resolve_with_similarity(alias, tag, algorithm, threshold)
            .map(|handle| &self.emojis[handle])
    }

    /// Looks up the emoji whose code-point sequence is exactly `unicode`.
    pub fn get_by_unicode(&self, unicode: &str) -> Option<&Emoji> {
        self.trie.find(unicode).map(|handle| &self.emojis[handle])
    }

    /// Checks whether a sequence of code points is, or could become, an
    /// emoji. See [EmojiTrie::classify].
    pub fn classify(&self, sequence: &str) -> Matches {
        self.trie.classify(sequence)
    }

    /// Finds the first emoji occurrence at or after byte position `from`.
    /// See [scanner::next_candidate].
    pub fn next_candidate(&self, text: &str, from: usize) -> Option<UnicodeCandidate<'_>> {
        scanner::next_candidate(&self.emojis, &self.trie, text, from)
    }

    /// Tests whether `text` is exactly one emoji occurrence, skin-tone
    /// modifier included.
    pub fn is_emoji(&self, text: &str) -> bool {
        match self.next_candidate(text, 0) {
            Some(candidate) => candidate.emoji_start == 0 && candidate.end() == text.len(),
            None => false,
        }
    }

    /// Tests whether `text` contains at least one emoji occurrence.
    pub fn contains_emoji(&self, text: &str) -> bool {
        self.next_candidate(text, 0).is_some()
    }

    /// Tests whether `text` consists of nothing but emoji occurrences.
    /// Empty text trivially qualifies.
    pub fn is_only_emojis(&self, text: &str) -> bool {
        let mut position = 0;
        while position < text.len() {
            match self.next_candidate(text, position) {
                Some(candidate) if candidate.emoji_start == position => {
                    position = candidate.end();
                }
                _ => return false,
            }
        }
        true
    }
}
