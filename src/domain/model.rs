use serde::{Deserialize, Serialize};

/// A record that carries the stable integer identity used for lookups.
pub trait HasId {
    fn id(&self) -> u32;
}

/// Listing-page records that can be matched by free-text search and a
/// category selection.
pub trait Discoverable {
    fn title(&self) -> &str;
    fn excerpt(&self) -> &str;
    fn category_label(&self) -> &str;
}

/// Service offering category. The set is closed: a dataset entry with any
/// other value fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Speaking,
    Training,
    Consulting,
    Coaching,
    Implementation,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Speaking,
        Category::Training,
        Category::Consulting,
        Category::Coaching,
        Category::Implementation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Speaking => "Speaking",
            Category::Training => "Training",
            Category::Consulting => "Consulting",
            Category::Coaching => "Coaching",
            Category::Implementation => "Implementation",
        }
    }

    /// Section heading shown on the services page.
    pub fn display_title(&self) -> &'static str {
        match self {
            Category::Speaking => "Speaking & Events",
            Category::Training => "Training Programs",
            Category::Consulting => "Consulting Services",
            Category::Coaching => "Personal Coaching",
            Category::Implementation => "Implementation Services",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Category::Speaking => {
                "Professional keynote presentations and workshops for your events"
            }
            Category::Training => "Comprehensive team training and educational programs",
            Category::Consulting => {
                "Expert guidance and strategic consulting for your marketing needs"
            }
            Category::Coaching => "One-on-one guidance to accelerate your marketing success",
            Category::Implementation => "Done-for-you marketing system setup and automation",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Curriculum phase. Serialized as the integer 1, 2 or 3; anything else is
/// rejected when a dataset is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Stage {
    Plan,
    Build,
    Launch,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Plan, Stage::Build, Stage::Launch];

    pub fn number(&self) -> u8 {
        match self {
            Stage::Plan => 1,
            Stage::Build => 2,
            Stage::Launch => 3,
        }
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            Stage::Plan => "Plan it Right",
            Stage::Build => "Build the System",
            Stage::Launch => "Launch & Grow",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Stage::Plan => {
                "Define your offer, understand your audience, and craft compelling \
                 marketing messages that resonate with your target market."
            }
            Stage::Build => {
                "Create your complete marketing infrastructure with pages, email \
                 sequences, and automation that work together seamlessly."
            }
            Stage::Launch => {
                "Drive traffic, analyze performance, and scale your system with \
                 AI-powered optimization and data-driven decisions."
            }
        }
    }
}

impl TryFrom<u8> for Stage {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Stage::Plan),
            2 => Ok(Stage::Build),
            3 => Ok(Stage::Launch),
            other => Err(format!("unknown curriculum stage: {}", other)),
        }
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> u8 {
        stage.number()
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage {}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Opaque display string, e.g. "From $2,500". Not parsed as currency.
    pub price: String,
    pub category: Category,
    pub image_url: String,
    pub duration: String,
    pub deliverables: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl HasId for ServiceRecord {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Discoverable for ServiceRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> &str {
        &self.description
    }

    fn category_label(&self) -> &str {
        self.category.label()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopRecord {
    pub id: u32,
    pub stage: Stage,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub duration: String,
    pub format: String,
    #[serde(default)]
    pub outcomes: Vec<String>,
}

impl WorkshopRecord {
    /// Bounded prefix of outcomes for card views (the full list is shown on
    /// the detail page).
    pub fn key_outcomes(&self, n: usize) -> &[String] {
        &self.outcomes[..self.outcomes.len().min(n)]
    }
}

impl HasId for WorkshopRecord {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// Free-form editorial label, not the service category enum.
    pub category: String,
    pub read_time: String,
    pub publish_date: String,
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
}

impl HasId for PostRecord {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Discoverable for PostRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> &str {
        &self.excerpt
    }

    fn category_label(&self) -> &str {
        &self.category
    }
}

/// Input to `create`: a full service except the id, which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: Category,
    pub image_url: String,
    pub duration: String,
    pub deliverables: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ServiceDraft {
    pub fn into_record(self, id: u32) -> ServiceRecord {
        ServiceRecord {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            image_url: self.image_url,
            duration: self.duration,
            deliverables: self.deliverables,
            features: self.features,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopDraft {
    pub stage: Stage,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub duration: String,
    pub format: String,
    #[serde(default)]
    pub outcomes: Vec<String>,
}

impl WorkshopDraft {
    pub fn into_record(self, id: u32) -> WorkshopRecord {
        WorkshopRecord {
            id,
            stage: self.stage,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            duration: self.duration,
            format: self.format,
            outcomes: self.outcomes,
        }
    }
}

/// Partial update for a service. Only `Some` fields are applied; the id is
/// never patchable and unknown fields are rejected outright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<Category>,
    pub image_url: Option<String>,
    pub duration: Option<String>,
    pub deliverables: Option<String>,
    pub features: Option<Vec<String>>,
}

impl ServicePatch {
    pub fn apply(self, record: &mut ServiceRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(price) = self.price {
            record.price = price;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(image_url) = self.image_url {
            record.image_url = image_url;
        }
        if let Some(duration) = self.duration {
            record.duration = duration;
        }
        if let Some(deliverables) = self.deliverables {
            record.deliverables = deliverables;
        }
        if let Some(features) = self.features {
            record.features = features;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkshopPatch {
    pub stage: Option<Stage>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<String>,
    pub format: Option<String>,
    pub outcomes: Option<Vec<String>>,
}

impl WorkshopPatch {
    pub fn apply(self, record: &mut WorkshopRecord) {
        if let Some(stage) = self.stage {
            record.stage = stage;
        }
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(image_url) = self.image_url {
            record.image_url = image_url;
        }
        if let Some(duration) = self.duration {
            record.duration = duration;
        }
        if let Some(format) = self.format {
            record.format = format;
        }
        if let Some(outcomes) = self.outcomes {
            record.outcomes = outcomes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_rejects_unknown_values() {
        assert!(Stage::try_from(0).is_err());
        assert!(Stage::try_from(4).is_err());
        assert_eq!(Stage::try_from(2).unwrap(), Stage::Build);

        let err = serde_json::from_str::<Stage>("4").unwrap_err();
        assert!(err.to_string().contains("unknown curriculum stage"));
    }

    #[test]
    fn test_category_rejects_unknown_values() {
        assert!(serde_json::from_str::<Category>("\"Speaking\"").is_ok());
        assert!(serde_json::from_str::<Category>("\"Webinars\"").is_err());
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let err = serde_json::from_str::<ServicePatch>(r#"{"title": "x", "rating": 5}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_patch_applies_only_some_fields() {
        let mut record = ServiceRecord {
            id: 1,
            title: "Keynote".to_string(),
            description: "A talk".to_string(),
            price: "From $2,500".to_string(),
            category: Category::Speaking,
            image_url: "https://example.com/a.jpg".to_string(),
            duration: "60 minutes".to_string(),
            deliverables: "Slides".to_string(),
            features: vec!["Q&A".to_string()],
        };

        let patch: ServicePatch =
            serde_json::from_str(r#"{"price": "From $3,000"}"#).unwrap();
        patch.apply(&mut record);

        assert_eq!(record.price, "From $3,000");
        assert_eq!(record.title, "Keynote");
        assert_eq!(record.category, Category::Speaking);
    }

    #[test]
    fn test_key_outcomes_is_bounded() {
        let workshop = WorkshopRecord {
            id: 1,
            stage: Stage::Plan,
            title: "Offer Definition".to_string(),
            description: "Define your offer".to_string(),
            image_url: "https://example.com/w.jpg".to_string(),
            duration: "Half day".to_string(),
            format: "Live".to_string(),
            outcomes: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };

        assert_eq!(workshop.key_outcomes(2), ["a", "b"]);
        assert_eq!(workshop.key_outcomes(5).len(), 3);
    }
}
