//! Keyword routing for the water assistant.
//!
//! Input is lowercased and checked against each group in priority order; the
//! first group with a keyword contained in the input wins. Hindi keywords are
//! matched as-is since lowercasing leaves Devanagari untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    WaterLevel,
    Forecast,
    Crop,
    Conservation,
    Help,
}

/// Groups in evaluation order. `Help` has no keywords and is the fallback.
const KEYWORD_GROUPS: [(Intent, &[&str]); 4] = [
    (Intent::WaterLevel, &["water level", "पानी का स्तर"]),
    (Intent::Forecast, &["forecast", "weather", "मौसम"]),
    (Intent::Crop, &["crop", "फसल"]),
    (Intent::Conservation, &["tips", "conservation", "बचत"]),
];

const WATER_LEVEL_REPLY: &str = "Current groundwater level in your region is 12.4m (↑0.8m from last month). Status: Normal. Your area has adequate water supply for next 6 months.";

const FORECAST_REPLY: &str = "Weather forecast for next 7 days:\n• Mon-Wed: Light rain (15mm expected)\n• Thu-Fri: Clear skies\n• Weekend: Moderate rain (25mm)\n\nGood recharge opportunity expected!";

const CROP_REPLY: &str = "Based on current soil moisture and water availability:\n• Recommended: Drought-resistant crops (मक्का, बाजरा)\n• Avoid: Water-intensive crops this season\n• Optimal sowing: Next 2 weeks\n• Water saving: Use drip irrigation";

const CONSERVATION_REPLY: &str = "Water conservation tips for your region:\n• Install rainwater harvesting system\n• Use mulching to retain soil moisture\n• Fix leaky pipes and taps\n• Plant native trees for groundwater recharge\n• Check pumps regularly for efficiency";

const HELP_REPLY: &str = "I understand you need help with water management. I can assist with:\n• Real-time water levels\n• Weather forecasts\n• Crop recommendations\n• Conservation techniques\n• Pump efficiency tips\n\nPlease ask me about any specific topic!";

impl Intent {
    pub fn classify(input: &str) -> Intent {
        let input = input.to_lowercase();
        KEYWORD_GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| input.contains(k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Help)
    }

    pub fn response(self) -> &'static str {
        match self {
            Intent::WaterLevel => WATER_LEVEL_REPLY,
            Intent::Forecast => FORECAST_REPLY,
            Intent::Crop => CROP_REPLY,
            Intent::Conservation => CONSERVATION_REPLY,
            Intent::Help => HELP_REPLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond(input: &str) -> &'static str {
        Intent::classify(input).response()
    }

    #[test]
    fn water_level_in_english_and_hindi() {
        assert_eq!(respond("What is the water level?"), WATER_LEVEL_REPLY);
        assert_eq!(respond("मेरे क्षेत्र में पानी का स्तर क्या है?"), WATER_LEVEL_REPLY);
        assert_eq!(respond("Water Level Status"), WATER_LEVEL_REPLY);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(respond("WATER LEVEL"), respond("water level"));
        assert_eq!(Intent::classify("WeAtHeR"), Intent::Forecast);
    }

    #[test]
    fn crop_advisory_prompt() {
        assert_eq!(respond("Show crop advisory"), CROP_REPLY);
        assert_eq!(Intent::classify("फसल सलाह"), Intent::Crop);
    }

    #[test]
    fn forecast_wins_over_crop() {
        assert_eq!(Intent::classify("crop forecast"), Intent::Forecast);
        assert_eq!(Intent::classify("weather for my crop"), Intent::Forecast);
    }

    #[test]
    fn water_level_wins_over_everything() {
        assert_eq!(
            Intent::classify("water level, weather, crop and conservation tips"),
            Intent::WaterLevel
        );
    }

    #[test]
    fn quick_reply_labels_route_to_their_topics() {
        assert_eq!(Intent::classify("Weather Forecast"), Intent::Forecast);
        assert_eq!(Intent::classify("Crop Advisory"), Intent::Crop);
        assert_eq!(Intent::classify("Conservation Tips"), Intent::Conservation);
        assert_eq!(Intent::classify("पानी की बचत"), Intent::Conservation);
    }

    #[test]
    fn unmatched_input_falls_back_to_help() {
        assert_eq!(respond("hello there"), HELP_REPLY);
        assert_eq!(respond(""), HELP_REPLY);
        // "water" alone is not the "water level" phrase
        assert_eq!(Intent::classify("water"), Intent::Help);
    }
}
