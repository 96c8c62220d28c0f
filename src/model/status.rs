use std::fmt;

/// Display category derived from a list's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Incoming,
    Processing,
    Shipping,
    Done,
    Unknown,
}

// Checked in order; the first category with a matching keyword wins.
const KEYWORDS: &[(StatusCategory, &[&str])] = &[
    (StatusCategory::Incoming, &["ny", "inkommande"]),
    (StatusCategory::Processing, &["process", "bearbetning"]),
    (StatusCategory::Shipping, &["skicka", "leverans"]),
    (StatusCategory::Done, &["klar", "färdig"]),
];

impl StatusCategory {
    pub const ALL: [StatusCategory; 5] = [
        StatusCategory::Incoming,
        StatusCategory::Processing,
        StatusCategory::Shipping,
        StatusCategory::Done,
        StatusCategory::Unknown,
    ];

    pub fn from_list_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(StatusCategory::Unknown)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusCategory::Incoming => "◷",
            StatusCategory::Processing => "▣",
            StatusCategory::Shipping => "⛟",
            StatusCategory::Done => "✔",
            StatusCategory::Unknown => "!",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusCategory::Incoming => "Inkommande",
            StatusCategory::Processing => "Bearbetning",
            StatusCategory::Shipping => "Leverans",
            StatusCategory::Done => "Klar",
            StatusCategory::Unknown => "Övrigt",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
