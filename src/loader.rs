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
//! Deserialization of emoji datasets.
//!
//! A dataset is a JSON array of entries with a hexadecimal code-point
//! `sequence`, a non-empty list of `aliases`, optional `tags`, an optional
//! `fitzpatrick` flag and an optional `description`. The dataset shipped
//! with the crate lives in `data/emojis.json` and is embedded at compile
//! time.

use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::emojis::emoji::Emoji;

/// The dataset that ships with the crate.
pub const BUNDLED_DATASET: &str = include_str!("../data/emojis.json");

/// The raw, not yet validated form of one dataset entry.
#[derive(Debug, Deserialize)]
struct EmojiPrototype {
    sequence: String,
    aliases: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    fitzpatrick: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<EmojiPrototype> for Emoji {
    type Error = DatasetError;

    fn try_from(prototype: EmojiPrototype) -> Result<Self, Self::Error> {
        let unicode = Emoji::parse_sequence(&prototype.sequence).ok_or_else(|| {
            DatasetError::InvalidEntry(format!(
                "entry {:?} has no valid code points",
                prototype.sequence
            ))
        })?;
        if prototype.aliases.is_empty() {
            return Err(DatasetError::InvalidEntry(format!(
                "entry {:?} has no aliases",
                prototype.sequence
            )));
        }
        Ok(Emoji {
            unicode,
            aliases: prototype.aliases,
            tags: prototype.tags,
            supports_fitzpatrick: prototype.fitzpatrick,
            description: prototype.description,
        })
    }
}

/// Deserializes a dataset from a reader into a list of emojis.
///
/// Any invalid entry (no code points, no aliases) fails the whole load;
/// a dataset is never partially usable.
pub fn load_emojis<R: Read>(reader: R) -> Result<Vec<Emoji>, DatasetError> {
    let prototypes: Vec<EmojiPrototype> = serde_json::from_reader(reader)?;
    let emojis = prototypes
        .into_iter()
        .map(Emoji::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("loaded {} emojis from dataset", emojis.len());
    Ok(emojis)
}

/// Deserializes a dataset from a JSON file on disk.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Emoji>, DatasetError> {
    let file = File::open(path)?;
    load_emojis(BufReader::new(file))
}

/// Deserializes the dataset that ships with the crate.
pub fn load_bundled() -> Result<Vec<Emoji>, DatasetError> {
    load_emojis(BUNDLED_DATASET.as_bytes())
}

/// An error that occurs while loading an emoji dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]
    Parse(serde_json::Error),
    /// An entry violated the dataset contract (empty sequence or no aliases)
    InvalidEntry(String),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(error) => Display::fmt(error, f),
            DatasetError::Parse(error) => Display::fmt(error, f),
            DatasetError::InvalidEntry(message) => write!(f, "invalid dataset entry: {}", message),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<std::io::Error> for DatasetError {
    fn from(error: std::io::Error) -> Self {
        DatasetError::Io(error)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(error: serde_json::Error) -> Self {
        DatasetError::Parse(error)
    }
}
