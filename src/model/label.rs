use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<LabelColor>,
}

/// Trello's named label colors. The `_dark` and `_light` shades collapse
/// onto their base color; anything else becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Blue,
    Sky,
    Lime,
    Pink,
    Black,
    Unknown,
}

impl LabelColor {
    pub fn from_name(name: &str) -> Self {
        let base = name
            .strip_suffix("_dark")
            .or_else(|| name.strip_suffix("_light"))
            .unwrap_or(name);
        match base {
            "green" => LabelColor::Green,
            "yellow" => LabelColor::Yellow,
            "orange" => LabelColor::Orange,
            "red" => LabelColor::Red,
            "purple" => LabelColor::Purple,
            "blue" => LabelColor::Blue,
            "sky" => LabelColor::Sky,
            "lime" => LabelColor::Lime,
            "pink" => LabelColor::Pink,
            "black" => LabelColor::Black,
            _ => LabelColor::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for LabelColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(LabelColor::from_name(&name))
    }
}
