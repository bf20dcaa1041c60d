//! Display contract — what the presenter hands to whatever draws the verses.
//!
//! A [`Surface`] receives one [`Presentation`] per submit or "more" request.
//! The TUI verse panel, the headless CLI and the test recorders all implement
//! it; none of them can fail from the presenter's point of view.

use crate::{catalog::FALLBACK_KEY, types::Verse};
use phf::phf_map;

/// Background image per category. Keys without an entry use the
/// [`FALLBACK_KEY`] image.
static IMAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "anxious" => "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?q=80&w=1200&auto=format&fit=crop",
    "lonely" => "https://images.unsplash.com/photo-1502082553048-f009c37129b9?q=80&w=1200&auto=format&fit=crop",
    "overwhelmed" => "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1200&auto=format&fit=crop",
    "joyful" => "https://images.unsplash.com/photo-1506765515384-028b60a970df?q=80&w=1200&auto=format&fit=crop",
    "thankful" => "https://images.unsplash.com/photo-1504198453319-5ce911bafcde?q=80&w=1200&auto=format&fit=crop",
    "seeking" => "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1200&auto=format&fit=crop",
};

/// Image hint for `key`, falling back to the `seeking` image.
pub fn image_for(key: &str) -> &'static str {
    IMAGES
        .get(key)
        .or_else(|| IMAGES.get(FALLBACK_KEY))
        .copied()
        .unwrap_or_default()
}

/// Human-facing title for a category key: first letter upper-cased,
/// underscores shown as spaces.
pub fn title_for(key: &str) -> String {
    let mut chars = key.chars();
    let capitalised = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    capitalised.replace('_', " ")
}

/// One screenful of verses for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub key: &'static str,
    pub title: String,
    /// The sampled verses, in display order.
    pub verses: Vec<Verse>,
    pub image: &'static str,
}

impl Presentation {
    pub fn new(key: &'static str, verses: Vec<Verse>) -> Self {
        Self {
            key,
            title: title_for(key),
            verses,
            image: image_for(key),
        }
    }

    /// References joined with ` | `, shown under the verse list.
    pub fn references(&self) -> String {
        self.verses
            .iter()
            .map(|v| v.reference.as_ref())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// The display collaborator.
pub trait Surface {
    fn show(&mut self, presentation: Presentation);
}

/// Keeps only the latest presentation.
impl Surface for Option<Presentation> {
    fn show(&mut self, presentation: Presentation) {
        *self = Some(presentation);
    }
}

/// Records every presentation in order.
impl Surface for Vec<Presentation> {
    fn show(&mut self, presentation: Presentation) {
        self.push(presentation);
    }
}
