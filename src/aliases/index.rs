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
//! The tag-scoped alias index: `tag -> (alias -> emoji)` plus
//! `tag -> {emoji}`, and the exact/approximate resolution operations on
//! top of it.

use std::collections::HashMap;

use itertools::Itertools;

use crate::aliases::similarity;
use crate::aliases::similarity::SimilarityAlgorithm;
use crate::emojis::emoji::Emoji;

/// The reserved tag under which the aliases of emojis without any tags are
/// filed.
pub const TAG_NONE: &str = "_none";

/// Read-only lookup maps from tags and aliases to emoji handles.
///
/// Handles index into the emoji list the index was built from, the same
/// list the trie is built over.
#[derive(Debug)]
pub struct AliasIndex {
    /// tag -> alias -> handle. Always contains a [TAG_NONE] bucket, which
    /// may be empty.
    by_tag_alias: HashMap<String, HashMap<String, usize>>,
    /// tag -> handles. [TAG_NONE] is not a real tag and never appears
    /// here.
    by_tag: HashMap<String, Vec<usize>>,
}

impl AliasIndex {
    /// Populates the index for a list of emojis.
    ///
    /// Every alias of an emoji is registered under each of its tags; the
    /// aliases of an emoji without tags go into the [TAG_NONE] bucket.
    pub fn new(emojis: &[Emoji]) -> AliasIndex {
        let mut by_tag_alias: HashMap<String, HashMap<String, usize>> = HashMap::new();
        let mut by_tag: HashMap<String, Vec<usize>> = HashMap::new();
        by_tag_alias.insert(String::from(TAG_NONE), HashMap::new());

        for (handle, emoji) in emojis.iter().enumerate() {
            for tag in &emoji.tags {
                by_tag
                    .entry(tag.clone())
                    .or_insert_with(Vec::new)
                    .push(handle);
            }
        }

        for (handle, emoji) in emojis.iter().enumerate() {
            if emoji.tags.is_empty() {
                let bucket = by_tag_alias
                    .entry(String::from(TAG_NONE))
                    .or_insert_with(HashMap::new);
                for alias in &emoji.aliases {
                    bucket.insert(alias.clone(), handle);
                }
            } else {
                for tag in &emoji.tags {
                    let bucket = by_tag_alias.entry(tag.clone()).or_insert_with(HashMap::new);
                    for alias in &emoji.aliases {
                        bucket.insert(alias.clone(), handle);
                    }
                }
            }
        }

        AliasIndex {
            by_tag_alias,
            by_tag,
        }
    }

    /// All tags emojis are filed under, in unspecified order.
    /// [TAG_NONE] is not included.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.by_tag.keys().map(String::as_str)
    }

    /// The handles of all emojis carrying `tag`, or `None` for an unknown
    /// tag.
    pub fn emojis_for_tag(&self, tag: &str) -> Option<&[usize]> {
        self.by_tag.get(tag).map(Vec::as_slice)
    }

    /// Resolves an alias to an emoji handle by direct lookup.
    ///
    /// One leading and one trailing `:` are stripped before the lookup, so
    /// `:smile:` and `smile` resolve alike. With a tag, only that tag's
    /// aliases are considered and an unknown tag yields `None`. Without a
    /// tag, the tag buckets are searched in unspecified order: an alias
    /// registered under several tags resolves to a caller-unpredictable
    /// winner among them.
    pub fn resolve_exact(&self, alias: &str, tag: Option<&str>) -> Option<usize> {
        if alias.is_empty() {
            return None;
        }
        let alias = trim_alias(alias);
        match tag {
            Some(tag) => self.by_tag_alias.get(tag)?.get(alias).copied(),
            None => self
                .by_tag_alias
                .values()
                .filter_map(|bucket| bucket.get(alias))
                .next()
                .copied(),
        }
    }

    /// Resolves an alias to an emoji handle, tolerating misspellings.
    ///
    /// Tries [AliasIndex::resolve_exact] first. On a miss, the candidate
    /// universe (the tag's aliases, or the union over all tags) is scored
    /// against the trimmed query and the best candidate is taken if it
    /// meets `threshold` (see [similarity::closest]). An unknown tag
    /// yields `None` without ever falling back to the global universe.
    pub fn resolve_with_similarity(
        &self,
        alias: &str,
        tag: Option<&str>,
        algorithm: SimilarityAlgorithm,
        threshold: f32,
    ) -> Option<usize> {
        if alias.is_empty() {
            return None;
        }
        let trimmed = trim_alias(alias);
        match tag {
            Some(tag) => {
                let bucket = self.by_tag_alias.get(tag)?;
                if let Some(&handle) = bucket.get(trimmed) {
                    return Some(handle);
                }
                let closest = similarity::closest(
                    bucket.keys().map(String::as_str),
                    trimmed,
                    algorithm,
                    threshold,
                )?;
                bucket.get(closest).copied()
            }
            None => {
                if let Some(handle) = self.resolve_exact(trimmed, None) {
                    return Some(handle);
                }
                let universe = self
                    .by_tag_alias
                    .values()
                    .flat_map(|bucket| bucket.keys())
                    .map(String::as_str)
                    .unique();
                let closest = similarity::closest(universe, trimmed, algorithm, threshold)?;
                self.resolve_exact(closest, None)
            }
        }
    }
}

/// Strips one leading and one trailing `:` delimiter if present.
/// Stripping an already stripped alias is a no-op.
fn trim_alias(alias: &str) -> &str {
    let alias = alias.strip_prefix(':').unwrap_or(alias);
    alias.strip_suffix(':').unwrap_or(alias)
}
