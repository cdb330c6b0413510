//! Effect descriptors and typed field access.

use serde::{Deserialize, Serialize};

/// Prefix shared by every derived service identifier.
pub const SERVICE_PREFIX: &str = "kwin4_effect_";

/// One discovered effect plugin, merged with its persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    /// Display name.
    pub name: String,
    /// Short description shown next to the name.
    pub description: String,
    /// Plugin author.
    pub author_name: String,
    /// Author contact address.
    pub author_email: String,
    /// License identifier.
    pub license: String,
    /// Plugin version string.
    pub version: String,
    /// Category used for grouping in the list.
    pub category: String,
    /// Derived stable identifier, see [`service_name`].
    pub service_name: String,
    /// Persisted enabled flag at load time.
    pub enabled: bool,
}

/// Derive the stable service identifier for an effect display name.
///
/// `"Show Fps"` becomes `"kwin4_effect_showfps"`. The mapping is lossy:
/// two display names differing only in case or spacing collapse to the
/// same service name and therefore share one persisted flag.
pub fn service_name(effect_name: &str) -> String {
    format!("{SERVICE_PREFIX}{}", effect_name.to_lowercase().replace(' ', ""))
}

/// The closed set of fields a presentation layer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectField {
    /// Display name.
    Name,
    /// Description text.
    Description,
    /// Author name.
    AuthorName,
    /// Author email.
    AuthorEmail,
    /// License identifier.
    License,
    /// Version string.
    Version,
    /// Category string.
    Category,
    /// Derived service identifier.
    ServiceName,
    /// Enabled flag.
    Status,
}

/// Value of a single descriptor field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A string field.
    Text(&'a str),
    /// The enabled flag.
    Flag(bool),
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

impl EffectDescriptor {
    /// Access a field by tag.
    pub fn field(&self, field: EffectField) -> FieldValue<'_> {
        match field {
            EffectField::Name => FieldValue::Text(&self.name),
            EffectField::Description => FieldValue::Text(&self.description),
            EffectField::AuthorName => FieldValue::Text(&self.author_name),
            EffectField::AuthorEmail => FieldValue::Text(&self.author_email),
            EffectField::License => FieldValue::Text(&self.license),
            EffectField::Version => FieldValue::Text(&self.version),
            EffectField::Category => FieldValue::Text(&self.category),
            EffectField::ServiceName => FieldValue::Text(&self.service_name),
            EffectField::Status => FieldValue::Flag(self.enabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_name_lowercases_and_strips_spaces() {
        assert_eq!(service_name("Show Fps"), "kwin4_effect_showfps");
        assert_eq!(service_name("Blur"), "kwin4_effect_blur");
        assert_eq!(service_name("Wobbly Windows"), "kwin4_effect_wobblywindows");
    }

    #[test]
    fn test_service_name_collision() {
        // Names differing only in case or spacing share one identifier.
        assert_eq!(service_name("ShowFps"), service_name("Show Fps"));
        assert_eq!(service_name("show fps"), service_name("Show Fps"));
    }

    #[test]
    fn test_field_access() {
        let effect = EffectDescriptor {
            name: "Blur".to_string(),
            description: "Blurs the background".to_string(),
            author_name: "Jane Doe".to_string(),
            author_email: "jane@example.org".to_string(),
            license: "GPL".to_string(),
            version: "1.0".to_string(),
            category: "Appearance".to_string(),
            service_name: service_name("Blur"),
            enabled: true,
        };

        assert_eq!(effect.field(EffectField::Name), FieldValue::Text("Blur"));
        assert_eq!(effect.field(EffectField::Category), FieldValue::Text("Appearance"));
        assert_eq!(effect.field(EffectField::ServiceName), FieldValue::Text("kwin4_effect_blur"));
        assert_eq!(effect.field(EffectField::Status), FieldValue::Flag(true));
    }
}
