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
//! The main crate for emoji_finder: locating emoji occurrences in arbitrary
//! text and resolving (possibly misspelled) emoji aliases.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Alias lookup: exact and approximate resolution, scoped by category tags
pub mod aliases;
/// The catalog that ties the dataset, the trie and the alias index together
pub mod catalog;
/// Handling for single emojis
pub mod emojis;
/// Deserialization of the packaged emoji dataset
pub mod loader;
/// Left-to-right scanning for emoji occurrences in text
pub mod scanner;
/// The prefix tree over emoji code-point sequences
pub mod trie;
