use serde::{Deserialize, Deserializer};

use crate::components::icons::Icon;

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Editable content of the About section, as served by the backend.
///
/// Every field defaults, so a partial payload still renders (with blanks).
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paragraph1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paragraph2: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<Statistic>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<ValueItem>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Statistic {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(default)]
    pub kind: Option<StatKind>,
    #[serde(default)]
    pub suffix: Option<String>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    ProjectsCompleted,
    HappyFamilies,
    Awards,
    YearsInBusiness,
}

impl StatKind {
    const BY_POSITION: [StatKind; 4] = [
        StatKind::ProjectsCompleted,
        StatKind::HappyFamilies,
        StatKind::Awards,
        StatKind::YearsInBusiness,
    ];

    pub fn from_position(index: usize) -> Option<Self> {
        Self::BY_POSITION.get(index).copied()
    }

    pub fn icon(self) -> Icon {
        match self {
            StatKind::ProjectsCompleted => Icon::Building,
            StatKind::HappyFamilies => Icon::Users,
            StatKind::Awards => Icon::Award,
            StatKind::YearsInBusiness => Icon::Clock,
        }
    }
}

impl Statistic {
    pub const DEFAULT_SUFFIX: &'static str = "+";

    /// Explicit kind wins, then the legacy position order.
    pub fn resolve_kind(&self, index: usize) -> Option<StatKind> {
        self.kind.or_else(|| StatKind::from_position(index))
    }

    pub fn icon(&self, index: usize) -> Icon {
        self.resolve_kind(index)
            .map(StatKind::icon)
            .unwrap_or(Icon::Building)
    }

    pub fn display_suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or(Self::DEFAULT_SUFFIX)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ValueItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub kind: Option<ValueKind>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    Mission,
    Vision,
    Excellence,
}

impl ValueKind {
    pub fn from_position(index: usize) -> Option<Self> {
        match index {
            0 => Some(ValueKind::Mission),
            1 => Some(ValueKind::Vision),
            2 => Some(ValueKind::Excellence),
            _ => None,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ValueKind::Mission => Icon::Target,
            ValueKind::Vision => Icon::Eye,
            ValueKind::Excellence => Icon::Gem,
        }
    }

    pub fn badge_color(self) -> &'static str {
        match self {
            ValueKind::Mission => "#C05621",
            ValueKind::Vision => "#6B46C1",
            ValueKind::Excellence => "#2C7A7B",
        }
    }
}

impl ValueItem {
    pub fn resolve_kind(&self, index: usize) -> Option<ValueKind> {
        self.kind.or_else(|| ValueKind::from_position(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(label: &str, value: f64) -> Statistic {
        Statistic {
            label: label.to_string(),
            value,
            ..Default::default()
        }
    }

    #[test]
    fn test_payload_maps_camel_case_fields() {
        let json = r#"{
            "_id": "abc123",
            "mainTitle": "About us",
            "paragraph1": "First",
            "paragraph2": "Second",
            "image": "https://cdn.example.com/about.jpg",
            "stats": [{"label": "Happy Families", "value": 1200}],
            "values": [{"title": "Integrity", "description": "Always"}]
        }"#;

        let content: AboutContent = serde_json::from_str(json).unwrap();

        assert_eq!(content.id, "abc123");
        assert_eq!(content.main_title, "About us");
        assert_eq!(content.image, "https://cdn.example.com/about.jpg");
        assert_eq!(content.stats, vec![stat("Happy Families", 1200.0)]);
        assert_eq!(content.values[0].title, "Integrity");
        assert_eq!(content.values[0].kind, None);
    }

    #[test]
    fn test_missing_fields_degrade_to_defaults() {
        let content: AboutContent = serde_json::from_str(r#"{"paragraph1": "Only this"}"#).unwrap();

        assert_eq!(content.paragraph1, "Only this");
        assert_eq!(content.main_title, "");
        assert!(content.stats.is_empty());
        assert!(content.values.is_empty());
    }

    #[test]
    fn test_explicit_kind_is_carried_in_data() {
        let json = r#"{"label": "Something else", "value": 3, "kind": "awards", "suffix": "K"}"#;
        let s: Statistic = serde_json::from_str(json).unwrap();

        assert_eq!(s.resolve_kind(0), Some(StatKind::Awards));
        assert_eq!(s.icon(0), Icon::Award);
        assert_eq!(s.display_suffix(), "K");
    }

    #[test]
    fn test_known_label_does_not_pick_icon() {
        assert_eq!(stat("Happy Families", 10.0).icon(5), Icon::Building);
        assert_eq!(stat("Years in Business", 25.0).icon(0), Icon::Building);
        assert_eq!(stat("Years in Business", 25.0).icon(3), Icon::Clock);
    }

    #[test]
    fn test_fractional_value_is_kept() {
        let content: AboutContent =
            serde_json::from_str(r#"{"paragraph1": "Hi", "stats": [{"label": "Rating", "value": 4.5}]}"#).unwrap();

        assert_eq!(content.paragraph1, "Hi");
        assert_eq!(content.stats[0].value, 4.5);
    }

    #[test]
    fn test_null_fields_degrade_to_defaults() {
        let json = r#"{
            "_id": null,
            "paragraph1": "Hi",
            "mainTitle": null,
            "stats": [{"label": null, "value": null}],
            "values": null
        }"#;
        let content: AboutContent = serde_json::from_str(json).unwrap();

        assert_eq!(content.paragraph1, "Hi");
        assert_eq!(content.main_title, "");
        assert_eq!(content.id, "");
        assert_eq!(content.stats, vec![stat("", 0.0)]);
        assert!(content.values.is_empty());
    }

    #[test]
    fn test_stat_icons_fall_back_past_fourth_position() {
        let stats: Vec<Statistic> = (0..7u32).map(|i| stat(&format!("Stat {}", i), f64::from(i))).collect();
        let icons: Vec<Icon> = stats.iter().enumerate().map(|(i, s)| s.icon(i)).collect();

        assert_eq!(
            &icons[..4],
            &[Icon::Building, Icon::Users, Icon::Award, Icon::Clock]
        );
        assert!(icons[4..].iter().all(|icon| *icon == Icon::Building));
    }

    #[test]
    fn test_default_suffix_is_plus() {
        assert_eq!(stat("Projects Completed", 10.0).display_suffix(), "+");
    }

    #[test]
    fn test_values_past_third_position_have_no_kind() {
        let item = ValueItem::default();
        assert_eq!(item.resolve_kind(0), Some(ValueKind::Mission));
        assert_eq!(item.resolve_kind(2), Some(ValueKind::Excellence));
        assert_eq!(item.resolve_kind(3), None);
        assert_eq!(item.resolve_kind(42), None);

        let tagged = ValueItem {
            kind: Some(ValueKind::Vision),
            ..Default::default()
        };
        assert_eq!(tagged.resolve_kind(9), Some(ValueKind::Vision));
    }
}
