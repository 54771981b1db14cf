//! Seed dataset adopted when the artifact slot is absent or unreadable.

use crate::models::Artifact;

/// The initial ten-artifact collection, newest-first order preserved
/// exactly as published.
pub fn seed_artifacts() -> Vec<Artifact> {
    vec![
        Artifact {
            id: "1".to_string(),
            title: "Parliament on Leave".to_string(),
            image: "/assets/cartoons/parliament-leave.jpg".to_string(),
            theme: "Future".to_string(),
            description: Some(
                "A satirical look at government priorities while the economy struggles."
                    .to_string(),
            ),
            date: "2024-03-08".to_string(),
            likes: 42,
        },
        Artifact {
            id: "2".to_string(),
            title: "Investment Policies Open Doors".to_string(),
            image: "/assets/cartoons/investment-policies.jpg".to_string(),
            theme: "Microfinance".to_string(),
            description: Some(
                "Investment policies can unlock opportunities for investors and communities."
                    .to_string(),
            ),
            date: "2025-12-30".to_string(),
            likes: 38,
        },
        Artifact {
            id: "3".to_string(),
            title: "Microfinance Reality".to_string(),
            image: "/assets/cartoons/microfinance-investors.jpg".to_string(),
            theme: "Microfinance".to_string(),
            description: Some(
                "The disparity between microfinance promises and reality.".to_string(),
            ),
            date: "2025-12-30".to_string(),
            likes: 55,
        },
        Artifact {
            id: "4".to_string(),
            title: "New Year, New Hope for Peace".to_string(),
            image: "/assets/cartoons/new-year-peace.jpg".to_string(),
            theme: "Unity".to_string(),
            description: Some(
                "A vision for 2026 - together for peace, no more armed opposition.".to_string(),
            ),
            date: "2026-01-01".to_string(),
            likes: 89,
        },
        Artifact {
            id: "5".to_string(),
            title: "The Long Journey to Prosperity".to_string(),
            image: "/assets/cartoons/journey-prosperity.jpg".to_string(),
            theme: "Prosperity".to_string(),
            description: Some(
                "Our long journey towards prosperity - one step at a time.".to_string(),
            ),
            date: "2026-01-02".to_string(),
            likes: 67,
        },
        Artifact {
            id: "6".to_string(),
            title: "War or Peace - The Choice".to_string(),
            image: "/assets/cartoons/war-peace-choice.jpg".to_string(),
            theme: "Peace".to_string(),
            description: Some(
                "South Sudan caught between forces of war and peace.".to_string(),
            ),
            date: "2025-02-02".to_string(),
            likes: 73,
        },
        Artifact {
            id: "7".to_string(),
            title: "Refugees and Closed Camps".to_string(),
            image: "/assets/cartoons/refugees-camp.jpg".to_string(),
            theme: "Future".to_string(),
            description: Some(
                "The crisis of displacement and closed refugee camps.".to_string(),
            ),
            date: "2026-01-03".to_string(),
            likes: 45,
        },
        Artifact {
            id: "8".to_string(),
            title: "South Sudan's Exports".to_string(),
            image: "/assets/cartoons/exports-refugees.jpg".to_string(),
            theme: "Peace".to_string(),
            description: Some(
                "A stark commentary on what South Sudan exports to the world.".to_string(),
            ),
            date: "2026-01-05".to_string(),
            likes: 52,
        },
        Artifact {
            id: "9".to_string(),
            title: "The Development Cycle".to_string(),
            image: "/assets/cartoons/development-cycle.jpg".to_string(),
            theme: "Development".to_string(),
            description: Some(
                "Caught between peace and war - the endless cycle.".to_string(),
            ),
            date: "2020-08-08".to_string(),
            likes: 61,
        },
        Artifact {
            id: "10".to_string(),
            title: "Chapter One: True Development".to_string(),
            image: "/assets/cartoons/chapter-one-development.jpg".to_string(),
            theme: "Development".to_string(),
            description: Some("Building development on the right foundation.".to_string()),
            date: "2025-01-10".to_string(),
            likes: 48,
        },
    ]
}
