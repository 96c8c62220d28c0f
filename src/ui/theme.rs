use ratatui::style::Color;

use crate::model::label::LabelColor;
use crate::model::status::StatusCategory;

pub const ACCENT: Color = Color::Rgb(0xF2, 0x41, 0x62);
pub const MUTED: Color = Color::DarkGray;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

pub fn status_color(category: StatusCategory) -> Color {
    match category {
        StatusCategory::Incoming => Color::Gray,
        StatusCategory::Processing => Color::Rgb(0xEC, 0x48, 0x99),
        StatusCategory::Shipping => Color::Rgb(0xEF, 0x44, 0x44),
        StatusCategory::Done => Color::Rgb(0x22, 0xC5, 0x5E),
        StatusCategory::Unknown => Color::DarkGray,
    }
}

pub fn label_color(color: Option<LabelColor>) -> Color {
    match color {
        Some(LabelColor::Green) => Color::Rgb(0x4B, 0xCE, 0x97),
        Some(LabelColor::Yellow) => Color::Rgb(0xF5, 0xCD, 0x47),
        Some(LabelColor::Orange) => Color::Rgb(0xFE, 0xA3, 0x62),
        Some(LabelColor::Red) => Color::Rgb(0xF8, 0x71, 0x68),
        Some(LabelColor::Purple) => Color::Rgb(0x9F, 0x8F, 0xEF),
        Some(LabelColor::Blue) => Color::Rgb(0x57, 0x9D, 0xFF),
        Some(LabelColor::Sky) => Color::Rgb(0x6C, 0xC3, 0xE0),
        Some(LabelColor::Lime) => Color::Rgb(0x94, 0xC7, 0x48),
        Some(LabelColor::Pink) => Color::Rgb(0xE7, 0x74, 0xBB),
        Some(LabelColor::Black) => Color::Rgb(0x8C, 0x9B, 0xAB),
        Some(LabelColor::Unknown) | None => Color::Gray,
    }
}
