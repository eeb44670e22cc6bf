use serde::{Deserialize, Serialize};

/// Reply tone requested by the user. `Unspecified` is carried on the wire
/// as an empty string, which the generation service reads as "no preference".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Professional,
    Casual,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Unspecified,
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Unspecified => "None",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
        }
    }

    pub fn wire_value(self) -> &'static str {
        match self {
            Tone::Unspecified => "",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tone;

    #[test]
    fn tone_serializes_to_exact_wire_values() {
        assert_eq!(serde_json::to_string(&Tone::Unspecified).unwrap(), r#""""#);
        assert_eq!(
            serde_json::to_string(&Tone::Professional).unwrap(),
            r#""Professional""#
        );
        assert_eq!(serde_json::to_string(&Tone::Casual).unwrap(), r#""Casual""#);
        assert_eq!(
            serde_json::to_string(&Tone::Friendly).unwrap(),
            r#""Friendly""#
        );
    }

    #[test]
    fn tone_round_trips_through_wire_value() {
        for tone in Tone::ALL {
            let parsed: Tone =
                serde_json::from_str(&format!("\"{}\"", tone.wire_value())).expect("parse tone");
            assert_eq!(parsed, tone);
        }
    }
}
