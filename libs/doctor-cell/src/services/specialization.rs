use serde::Serialize;
use tracing::debug;

/// Icons a specialization can be displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecializationIcon {
    Heart,
    Sparkles,
    Brain,
    Bone,
    Baby,
    HeartPulse,
    Stethoscope,
    Smile,
}

impl SpecializationIcon {
    pub const ALL: [SpecializationIcon; 8] = [
        SpecializationIcon::Heart,
        SpecializationIcon::Sparkles,
        SpecializationIcon::Brain,
        SpecializationIcon::Bone,
        SpecializationIcon::Baby,
        SpecializationIcon::HeartPulse,
        SpecializationIcon::Stethoscope,
        SpecializationIcon::Smile,
    ];

    /// Used for missing or unrecognised keys.
    pub const FALLBACK: SpecializationIcon = SpecializationIcon::Stethoscope;

    /// The key stored in the `specializations.icon` column.
    pub fn key(&self) -> &'static str {
        match self {
            SpecializationIcon::Heart => "Heart",
            SpecializationIcon::Sparkles => "Sparkles",
            SpecializationIcon::Brain => "Brain",
            SpecializationIcon::Bone => "Bone",
            SpecializationIcon::Baby => "Baby",
            SpecializationIcon::HeartPulse => "HeartPulse",
            SpecializationIcon::Stethoscope => "Stethoscope",
            SpecializationIcon::Smile => "Smile",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SpecializationIcon::Heart => "heart",
            SpecializationIcon::Sparkles => "sparkles",
            SpecializationIcon::Brain => "brain",
            SpecializationIcon::Bone => "bone",
            SpecializationIcon::Baby => "baby",
            SpecializationIcon::HeartPulse => "heart-pulse",
            SpecializationIcon::Stethoscope => "stethoscope",
            SpecializationIcon::Smile => "smile",
        }
    }

    pub fn from_key(key: Option<&str>) -> IconLookup {
        let matched = key.and_then(|k| Self::ALL.into_iter().find(|icon| icon.key() == k));

        if matched.is_none() {
            debug!("No icon for specialization key {:?}, using fallback", key);
        }

        IconLookup {
            key: key.map(str::to_string),
            icon: matched.unwrap_or(Self::FALLBACK),
            fallback: matched.is_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconLookup {
    pub key: Option<String>,
    pub icon: SpecializationIcon,
    pub fallback: bool,
}
