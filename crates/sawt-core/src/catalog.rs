//! Static catalog of prebuilt Darija voices.

use serde::Serialize;

/// Gender tag on a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VoiceGender {
    Male,
    Female,
}

/// A prebuilt voice. Entries are immutable and loaded once; the `id` is the
/// opaque identifier passed through to the synthesis service.
#[derive(Debug, Clone, Serialize)]
pub struct Voice {
    pub id: &'static str,
    /// Display name shown to users.
    pub name: &'static str,
    pub gender: VoiceGender,
    pub style: &'static str,
    pub description: &'static str,
}

impl Voice {
    /// Short Darija line synthesized for quick voice previews.
    pub fn preview_line(&self) -> String {
        format!("Salam, ana smiti {}.", self.name)
    }
}

/// All prebuilt voices, in display order.
pub const VOICES: &[Voice] = &[
    Voice {
        id: "Puck",
        name: "Youssef",
        gender: VoiceGender::Male,
        style: "Casual & Friendly",
        description: "A friendly, youthful voice from Casablanca. Great for vlogs, social media, and casual Darija conversations.",
    },
    Voice {
        id: "Charon",
        name: "Abdelkader",
        gender: VoiceGender::Male,
        style: "Deep & Resonant",
        description: "A deep, authoritative voice. Perfect for storytelling, documentaries, and serious narration.",
    },
    Voice {
        id: "Kore",
        name: "Khadija",
        gender: VoiceGender::Female,
        style: "Warm & Soothing",
        description: "A gentle, warm voice. Ideal for poetry, mindfulness, or friendly assistance.",
    },
    Voice {
        id: "Fenrir",
        name: "Rachid",
        gender: VoiceGender::Male,
        style: "Bold & Intense",
        description: "High energy and commanding. Excellent for advertisements, announcements, or energetic sports commentary.",
    },
    Voice {
        id: "Aoede",
        name: "Salma",
        gender: VoiceGender::Female,
        style: "Professional & Elegant",
        description: "Polished and articulate. The best choice for news broadcasting, corporate presentations, and education.",
    },
];

/// Look up a catalog voice by its service identifier.
pub fn find_voice(id: &str) -> Option<&'static Voice> {
    VOICES.iter().find(|voice| voice.id == id)
}
