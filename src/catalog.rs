//! Display constants for the dashboard screens. Nothing here changes at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    Gold,
    Lime,
    Grey,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Blue => "tone-blue",
            Tone::Green => "tone-green",
            Tone::Orange => "tone-orange",
            Tone::Purple => "tone-purple",
            Tone::Red => "tone-red",
            Tone::Gold => "tone-gold",
            Tone::Lime => "tone-lime",
            Tone::Grey => "tone-grey",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Tone::Blue => "#1976D2",
            Tone::Green => "#4CAF50",
            Tone::Orange => "#FF9800",
            Tone::Purple => "#9C27B0",
            Tone::Red => "#F44336",
            Tone::Gold => "#FFD700",
            Tone::Lime => "#8BC34A",
            Tone::Grey => "#666666",
        }
    }

    pub const ALL: [Tone; 8] = [
        Tone::Blue,
        Tone::Green,
        Tone::Orange,
        Tone::Purple,
        Tone::Red,
        Tone::Gold,
        Tone::Lime,
        Tone::Grey,
    ];
}

/// Value with a caption underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

const fn metric(value: &'static str, label: &'static str, tone: Tone) -> Metric {
    Metric { value, label, tone }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTile {
    pub title: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub text: &'static str,
    pub when: &'static str,
    pub tone: Tone,
}

pub mod home {
    use super::*;

    pub const ACTIVE_STATIONS: &str = "2,847 active stations";
    pub const STATION_STATUS: [Metric; 3] = [
        metric("1,234", "Normal", Tone::Green),
        metric("987", "Warning", Tone::Orange),
        metric("626", "Critical", Tone::Red),
    ];
    pub const GROUNDWATER: [Metric; 2] = [
        metric("12.4m", "Current Level", Tone::Blue),
        metric("+0.8m", "Monthly Change", Tone::Green),
    ];
    /// Six months, oldest first, as percentages of chart height.
    pub const TREND: [u8; 6] = [65, 70, 55, 80, 75, 85];

    pub const QUICK_ACCESS: [IconTile; 6] = [
        IconTile { title: "Water Level", icon: "weather-showers-symbolic", tone: Tone::Blue },
        IconTile { title: "Recharge Estimation", icon: "go-up-symbolic", tone: Tone::Green },
        IconTile { title: "Forecast", icon: "x-office-calendar-symbolic", tone: Tone::Orange },
        IconTile { title: "Water Quality", icon: "applications-science-symbolic", tone: Tone::Purple },
        IconTile { title: "Crop Advisory", icon: "emblem-favorite-symbolic", tone: Tone::Lime },
        IconTile { title: "Alerts", icon: "preferences-system-notifications-symbolic", tone: Tone::Red },
    ];

    pub const ALERTS: [Alert; 2] = [
        Alert {
            title: "Water Level Warning",
            text: "Punjab region showing 15% decline",
            when: "2 hours ago",
            tone: Tone::Orange,
        },
        Alert {
            title: "Recharge Opportunity",
            text: "Heavy rainfall predicted in Maharashtra",
            when: "5 hours ago",
            tone: Tone::Green,
        },
    ];
}

pub mod insights {
    use super::*;

    pub const DEMAND: Metric = metric("847 BCM/year", "Current Demand", Tone::Red);
    pub const SUPPLY: Metric = metric("692 BCM/year", "Available Supply", Tone::Green);
    pub const RECOMMENDATION: &str =
        "AI recommends 18% reduction in extraction and 12% increase in recharge activities";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Grade {
        A,
        B,
        C,
    }

    impl Grade {
        pub fn letter(self) -> &'static str {
            match self {
                Grade::A => "A",
                Grade::B => "B",
                Grade::C => "C",
            }
        }

        pub fn status(self) -> &'static str {
            match self {
                Grade::A => "Excellent",
                Grade::B => "Moderate",
                Grade::C => "Critical",
            }
        }

        pub fn tone(self) -> Tone {
            match self {
                Grade::A => Tone::Green,
                Grade::B => Tone::Orange,
                Grade::C => Tone::Red,
            }
        }
    }

    pub const AQUIFERS: [(&str, Grade); 5] = [
        ("Punjab", Grade::C),
        ("Gujarat", Grade::B),
        ("Kerala", Grade::A),
        ("Rajasthan", Grade::C),
        ("Karnataka", Grade::B),
    ];

    pub const CLIMATE: [(Metric, &str); 3] = [
        (metric("-15%", "Rainfall Impact", Tone::Orange), "dialog-warning-symbolic"),
        (metric("High", "Drought Risk", Tone::Red), "process-stop-symbolic"),
        (metric("Good", "Resilience Score", Tone::Green), "emblem-ok-symbolic"),
    ];
    pub const CLIMATE_NOTE: &str = "Monsoon variability increased by 23% in last decade. Recommend building 15 new check dams in drought-prone areas.";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RechargeZone {
        pub location: &'static str,
        pub high_potential: bool,
        pub improvement: &'static str,
    }

    impl RechargeZone {
        pub fn potential(&self) -> &'static str {
            if self.high_potential { "High" } else { "Medium" }
        }

        pub fn tone(&self) -> Tone {
            if self.high_potential { Tone::Green } else { Tone::Orange }
        }
    }

    pub const RECHARGE_ZONES: [RechargeZone; 3] = [
        RechargeZone { location: "Western Ghats", high_potential: true, improvement: "35%" },
        RechargeZone { location: "Deccan Plateau", high_potential: false, improvement: "22%" },
        RechargeZone { location: "Indo-Gangetic Plain", high_potential: true, improvement: "28%" },
    ];

    pub const SUSTAINABILITY: [(Metric, &str); 2] = [
        (metric("2.4M", "Tons CO₂ Saved", Tone::Green), "Through water conservation"),
        (metric("18%", "Energy Reduction", Tone::Blue), "From optimized pumping"),
    ];
    pub const SDGS: [&str; 3] = ["SDG 6", "SDG 11", "SDG 13"];
}

pub mod reports {
    use super::*;

    pub const LEDGER: [Metric; 3] = [
        metric("15,247", "Total Transactions", Tone::Blue),
        metric("100%", "Tamper Proof", Tone::Green),
        metric("2,847", "Communities", Tone::Purple),
    ];

    pub const TRANSACTIONS: [Alert; 2] = [
        Alert {
            title: "Extraction",
            text: "Village Panchayat - 5,000L",
            when: "2h ago",
            tone: Tone::Red,
        },
        Alert {
            title: "Recharge",
            text: "Rainwater Harvesting - 12,000L",
            when: "5h ago",
            tone: Tone::Green,
        },
    ];

    /// Fraction of the community budget already used.
    pub const BUDGET_USED: f64 = 0.73;
    pub const BUDGET_WARNING: &str =
        "⚠️ Approaching critical threshold. Recommend 15% reduction.";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Village {
        pub rank: u8,
        pub name: &'static str,
        pub savings: &'static str,
        pub score: u8,
    }

    impl Village {
        pub fn is_podium(&self) -> bool {
            self.rank <= 3
        }
    }

    pub const LEADERBOARD: [Village; 5] = [
        Village { rank: 1, name: "Ralegan Siddhi, Maharashtra", savings: "2.4M L", score: 95 },
        Village { rank: 2, name: "Hiware Bazar, Maharashtra", savings: "2.1M L", score: 92 },
        Village { rank: 3, name: "Rajsamadhiyala, Gujarat", savings: "1.8M L", score: 88 },
        Village { rank: 4, name: "Laporia, Rajasthan", savings: "1.6M L", score: 85 },
        Village { rank: 5, name: "Punsari, Gujarat", savings: "1.4M L", score: 82 },
    ];

    pub const REPORT_TYPES: [IconTile; 4] = [
        IconTile { title: "Monthly Water Budget", icon: "x-office-spreadsheet-symbolic", tone: Tone::Blue },
        IconTile { title: "Community Impact Report", icon: "system-users-symbolic", tone: Tone::Green },
        IconTile { title: "Technical Assessment", icon: "go-up-symbolic", tone: Tone::Orange },
        IconTile { title: "Sustainability Metrics", icon: "security-high-symbolic", tone: Tone::Purple },
    ];

    pub const IMPACT: [Metric; 3] = [
        metric("847", "Villages Engaged", Tone::Blue),
        metric("2.4M", "Liters Conserved", Tone::Green),
        metric("₹2.8Cr", "Economic Value", Tone::Orange),
    ];
}

pub mod profile {
    use super::*;

    pub const NAME: &str = "राम कुमार शर्मा";
    pub const ROLE: &str = "Farmer • Village Panchayat Member";
    pub const LOCATION: &str = "Bharatpur, Rajasthan";
    pub const PHONE: &str = "+91 9876543210";
    pub const EMAIL: &str = "ram.sharma@gmail.com";

    pub const STATS: [Metric; 3] = [
        metric("12,450L", "Water Saved", Tone::Blue),
        metric("847", "Conservation Score", Tone::Green),
        metric("#23", "Community Rank", Tone::Gold),
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MenuItem {
        pub title: &'static str,
        pub subtitle: &'static str,
        pub icon: &'static str,
    }

    pub const MENU: [MenuItem; 4] = [
        MenuItem {
            title: "Language Settings",
            subtitle: "हिंदी, English, Regional",
            icon: "preferences-desktop-locale-symbolic",
        },
        MenuItem {
            title: "Notification Preferences",
            subtitle: "Alerts, Reports, Updates",
            icon: "preferences-system-notifications-symbolic",
        },
        MenuItem {
            title: "Privacy & Security",
            subtitle: "Data protection, Blockchain",
            icon: "security-high-symbolic",
        },
        MenuItem {
            title: "Help & Support",
            subtitle: "FAQs, Contact, Tutorial",
            icon: "help-about-symbolic",
        },
    ];

    pub const APP_INFO: [&str; 4] = [
        "HydroSpatial + DWLR v2.1.0",
        "Ministry of Jal Shakti",
        "Government of India",
        "Last updated: Today",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_is_ranked_by_score() {
        let board = &reports::LEADERBOARD;
        for (i, village) in board.iter().enumerate() {
            assert_eq!(village.rank as usize, i + 1);
        }
        assert!(board.windows(2).all(|w| w[0].score > w[1].score));
        assert_eq!(board.iter().filter(|v| v.is_podium()).count(), 3);
    }

    #[test]
    fn station_counts_add_up() {
        let total: u32 = home::STATION_STATUS
            .iter()
            .map(|m| m.value.replace(',', "").parse::<u32>().unwrap())
            .sum();
        assert_eq!(total, 2847);
    }

    #[test]
    fn grades_map_to_status() {
        use insights::Grade;
        assert_eq!(Grade::C.status(), "Critical");
        assert_eq!(Grade::A.tone(), Tone::Green);
        assert_eq!(insights::RECHARGE_ZONES[1].potential(), "Medium");
    }

    #[test]
    fn tone_classes_are_distinct() {
        let mut classes: Vec<&str> = Tone::ALL.iter().map(|t| t.css_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), Tone::ALL.len());
    }
}
