//! Capture gallery
//!
//! Keeps the most recent face captures as image data URLs, newest first,
//! on top of a pluggable [`CaptureStorage`] backend.

use log::debug;

/// Key the capture list is persisted under.
pub const STORAGE_KEY: &str = "facesnap-captures-v1";

/// Upper bound on retained captures.
pub const MAX_CAPTURES: usize = 40;

/// Persistence backend for the capture list.
///
/// Every gallery operation loads the full list, changes it, and saves it
/// back, so a backend only has to store one ordered list per key.
pub trait CaptureStorage {
    /// Returns the stored list, or an empty list when nothing usable is stored.
    fn load(&self, key: &str) -> Vec<String>;

    fn save(&mut self, key: &str, captures: Vec<String>);
}

/// In-memory [`CaptureStorage`].
#[derive(Debug, Default, Clone)]
pub struct MemoryCaptureStorage {
    entries: std::collections::HashMap<String, Vec<String>>,
}

impl MemoryCaptureStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaptureStorage for MemoryCaptureStorage {
    fn load(&self, key: &str) -> Vec<String> {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    fn save(&mut self, key: &str, captures: Vec<String>) {
        self.entries.insert(key.to_string(), captures);
    }
}

/// Most-recent-first list of captures, capped at [`MAX_CAPTURES`].
#[derive(Debug)]
pub struct CaptureGallery<S: CaptureStorage> {
    storage: S,
}

impl<S: CaptureStorage> CaptureGallery<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Prepends a capture and drops whatever falls past the cap.
    pub fn add(&mut self, data_url: impl Into<String>) {
        let mut captures = self.storage.load(STORAGE_KEY);
        captures.insert(0, data_url.into());
        if captures.len() > MAX_CAPTURES {
            debug!("Gallery full, dropping {} oldest capture(s)", captures.len() - MAX_CAPTURES);
            captures.truncate(MAX_CAPTURES);
        }
        self.storage.save(STORAGE_KEY, captures);
    }

    /// Removes the capture at `index`. Out-of-range indices change nothing.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        let mut captures = self.storage.load(STORAGE_KEY);
        if index >= captures.len() {
            return None;
        }
        let removed = captures.remove(index);
        self.storage.save(STORAGE_KEY, captures);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.storage.save(STORAGE_KEY, Vec::new());
    }

    pub fn captures(&self) -> Vec<String> {
        self.storage.load(STORAGE_KEY)
    }

    pub fn len(&self) -> usize {
        self.captures().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Download name for a saved capture.
pub fn capture_file_name(timestamp_ms: u64, index: usize) -> String {
    format!("facesnap-{}-{}.jpg", timestamp_ms, index)
}

/// Extracts the media type of a `data:` URL, e.g. `image/jpeg`.
///
/// The type sits between the first `:` and the next `;` of the header.
pub fn data_url_mime(data_url: &str) -> Option<&str> {
    let header = data_url.split(',').next()?;
    let (_, rest) = header.split_once(':')?;
    let (mime, _) = rest.split_once(';')?;
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> CaptureGallery<MemoryCaptureStorage> {
        CaptureGallery::new(MemoryCaptureStorage::new())
    }

    #[test]
    fn test_newest_capture_comes_first() {
        let mut gallery = gallery();
        gallery.add("data:image/jpeg;base64,AAA");
        gallery.add("data:image/jpeg;base64,BBB");
        assert_eq!(
            gallery.captures(),
            vec!["data:image/jpeg;base64,BBB", "data:image/jpeg;base64,AAA"]
        );
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut gallery = gallery();
        for i in 0..45 {
            gallery.add(format!("capture-{}", i));
        }
        let captures = gallery.captures();
        assert_eq!(captures.len(), MAX_CAPTURES);
        assert_eq!(captures[0], "capture-44");
        assert_eq!(captures[MAX_CAPTURES - 1], "capture-5");
    }

    #[test]
    fn test_remove_by_index() {
        let mut gallery = gallery();
        gallery.add("a");
        gallery.add("b");
        gallery.add("c");

        assert_eq!(gallery.remove(1), Some("b".to_string()));
        assert_eq!(gallery.captures(), vec!["c", "a"]);
        assert_eq!(gallery.remove(7), None);
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let mut gallery = gallery();
        gallery.add("a");
        gallery.clear();
        assert!(gallery.is_empty());
        assert_eq!(gallery.storage().load(STORAGE_KEY), Vec::<String>::new());
    }

    #[test]
    fn test_gallery_reads_existing_storage() {
        let mut storage = MemoryCaptureStorage::new();
        storage.save(STORAGE_KEY, vec!["old".to_string()]);
        storage.save("unrelated", vec!["x".to_string()]);

        let mut gallery = CaptureGallery::new(storage);
        gallery.add("new");
        assert_eq!(gallery.captures(), vec!["new", "old"]);
    }

    #[test]
    fn test_capture_file_name() {
        assert_eq!(capture_file_name(1_700_000_000_123, 3), "facesnap-1700000000123-3.jpg");
    }

    #[test]
    fn test_data_url_mime() {
        assert_eq!(data_url_mime("data:image/jpeg;base64,/9j/4AAQ"), Some("image/jpeg"));
        assert_eq!(data_url_mime("data:image/png;base64,iVBOR"), Some("image/png"));
        assert_eq!(data_url_mime("not a data url"), None);
    }
}
