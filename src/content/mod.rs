//! Content normalization: turns text, file paths, URLs and pre-built items into
//! the ordered [`ContentItem`] sequence the service expects.
//!
//! Each element is classified by a fixed precedence chain:
//!
//! 1. A pre-built [`ContentItem`] passes through unchanged.
//! 2. A string naming an existing regular file is read and base64-encoded as an image.
//! 3. A string starting with `http://` or `https://` is downloaded and base64-encoded
//!    as an image (the download happens in the transport, see [`Resolved::Remote`]).
//! 4. Anything else is literal text.
//!
//! File extensions are never inspected. A path that does not exist is text.

mod item;

pub use item::{ContentItem, ContentKind};

use crate::{Error, ErrorContext, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One caller-supplied content element, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentInput {
    /// Already typed; never sniffed.
    Item(ContentItem),
    /// Plain string: text, file path or URL.
    Source(String),
    /// Filesystem path. Falls back to the string rules when it is not a file.
    Path(PathBuf),
}

impl From<ContentItem> for ContentInput {
    fn from(item: ContentItem) -> Self {
        ContentInput::Item(item)
    }
}

impl From<&str> for ContentInput {
    fn from(s: &str) -> Self {
        ContentInput::Source(s.to_string())
    }
}

impl From<String> for ContentInput {
    fn from(s: String) -> Self {
        ContentInput::Source(s)
    }
}

impl From<&String> for ContentInput {
    fn from(s: &String) -> Self {
        ContentInput::Source(s.clone())
    }
}

impl From<PathBuf> for ContentInput {
    fn from(p: PathBuf) -> Self {
        ContentInput::Path(p)
    }
}

impl From<&Path> for ContentInput {
    fn from(p: &Path) -> Self {
        ContentInput::Path(p.to_path_buf())
    }
}

/// Ordered content to classify. Order is significant: the service interprets
/// the items jointly, in sequence.
///
/// A single value converts into a one-element sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    inputs: Vec<ContentInput>,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, input: impl Into<ContentInput>) -> Self {
        self.inputs.push(input.into());
        self
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &[ContentInput] {
        &self.inputs
    }

    /// Classify every element without touching the network.
    ///
    /// Local files are read here; URLs come back as [`Resolved::Remote`] for the
    /// transport to download.
    pub fn resolve(&self) -> Result<Vec<Resolved>> {
        if self.inputs.is_empty() {
            return Err(Error::validation_with_context(
                "content must contain at least one item",
                ErrorContext::new()
                    .with_field_path("content")
                    .with_source("content_normalizer"),
            ));
        }
        self.inputs.iter().map(ContentInput::resolve).collect()
    }
}

macro_rules! single_content {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Content {
                fn from(value: $t) -> Self {
                    Content { inputs: vec![value.into()] }
                }
            }
        )*
    };
}

single_content!(&str, String, &String, PathBuf, &Path, ContentItem, ContentInput);

impl<T: Into<ContentInput>> From<Vec<T>> for Content {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<ContentInput>, const N: usize> From<[T; N]> for Content {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone + Into<ContentInput>> From<&[T]> for Content {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T: Into<ContentInput>> FromIterator<T> for Content {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Content {
            inputs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of classifying one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Final item, ready to send.
    Item(ContentItem),
    /// Image that still has to be downloaded from this URL.
    Remote(String),
}

impl ContentInput {
    /// Apply the precedence chain to this element.
    pub fn resolve(&self) -> Result<Resolved> {
        match self {
            ContentInput::Item(item) => Ok(Resolved::Item(item.clone())),
            ContentInput::Source(value) => resolve_source(value),
            ContentInput::Path(path) => {
                if is_local_file(path) {
                    read_local_image(path).map(Resolved::Item)
                } else {
                    resolve_source(&path.to_string_lossy())
                }
            }
        }
    }
}

fn resolve_source(value: &str) -> Result<Resolved> {
    let path = Path::new(value);
    if is_local_file(path) {
        return read_local_image(path).map(Resolved::Item);
    }
    if is_remote_source(value) {
        debug!(url = value, "content item is a remote image");
        return Ok(Resolved::Remote(value.to_string()));
    }
    Ok(Resolved::Item(ContentItem::text(value)))
}

/// True for strings the normalizer downloads instead of treating as text.
pub fn is_remote_source(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn is_local_file(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_file()
}

fn read_local_image(path: &Path) -> Result<ContentItem> {
    debug!(path = %path.display(), "content item is a local file");
    ContentItem::image_from_file(path)
}
