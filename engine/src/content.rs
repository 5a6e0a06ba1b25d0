//! The compiled-in content store.
//!
//! Everything the page shows lives here as static data. There is no loading
//! path, no validation and no error state; the renderer borrows this for the
//! process lifetime.

use vitrine_types::{EducationEntry, ExperienceEntry, PortfolioContent, Profile, SkillSet};

const CONTENT: PortfolioContent = PortfolioContent {
    profile: Profile {
        name: "Raghav Arora",
        email: "ar.raghav07@outlook.com",
        linkedin: "https://www.linkedin.com/in/raghav-4-r7r4",
        tagline: "Business Analytics | AI | SEO | Global Business | Supply Chain | Social Media Marketer | Creative Designer",
        summary: "A passionate professional exploring the intersection of international business, logistics, and AI, with a creative approach to design and problem-solving.",
    },
    experience: &[
        ExperienceEntry {
            title: "Social Media Marketing Specialist",
            company: "SOAK & STEP",
            period: "July 2025 - Present",
            responsibilities: &[
                "Manage Soak & Step's social media presence and content strategy",
                "Use AI tools to generate and edit brand images/videos",
                "Drive engagement through trend-driven, creative marketing",
            ],
        },
        ExperienceEntry {
            title: "NGO Intern",
            company: "Missionaries of Charity",
            period: "December 2024",
            responsibilities: &[
                "Contributed 30+ hours supporting elderly, disabled, and handicapped individuals",
                "Developed empathy and understanding through direct community engagement",
            ],
        },
        ExperienceEntry {
            title: "Sales and Marketing Intern",
            company: "SBI Life Insurance Co. Ltd.",
            period: "March 2024 - September 2024",
            responsibilities: &[
                "Explained insurance products and policies to prospective customers",
                "Supported sales initiatives and customer outreach campaigns remotely",
            ],
        },
        ExperienceEntry {
            title: "Manager of Operations",
            company: "Himvikas Industries",
            period: "November 2023 - January 2024",
            responsibilities: &[
                "Gained experience in marketing, operations, and project management",
                "Enhanced skills in market research, data analysis, and customer relationship management",
            ],
        },
    ],
    skills: SkillSet {
        skills: &[
            "Social Media Marketing",
            "International Logistics",
            "Operations Management",
        ],
        certifications: &[
            "2 Day AI Mastermind - Outskill",
            "International Logistics and Supply Chain",
            "Introduction to Artificial Intelligence",
            "Mandarin Chinese: Chinese for Beginners",
        ],
    },
    education: &[
        EducationEntry {
            institution: "Christ University, Bangalore",
            degree: "Bachelor of Business Administration - BBA",
            field: "Strategy And Business Analytics",
            period: "2024 - 2027",
        },
        EducationEntry {
            institution: "St. Mary's Covent Sr. Secondary School",
            degree: "High School Graduate",
            field: "Business/Commerce",
            period: "2021 - 2023",
        },
    ],
    footer: "© 2024 Raghav Arora. Crafted with passion and powered by innovation.",
};

/// Borrow the content store.
#[must_use]
pub(crate) fn load() -> &'static PortfolioContent {
    &CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_targets_are_exact() {
        let content = load();
        assert_eq!(content.profile.mailto(), "mailto:ar.raghav07@outlook.com");
        assert_eq!(
            content.profile.linkedin,
            "https://www.linkedin.com/in/raghav-4-r7r4"
        );
    }

    #[test]
    fn sequences_keep_authored_order() {
        let content = load();
        assert_eq!(content.experience.len(), 4);
        assert_eq!(content.experience[0].company, "SOAK & STEP");
        assert_eq!(content.experience[3].company, "Himvikas Industries");
        assert_eq!(content.education[0].period, "2024 - 2027");
        assert_eq!(content.skills.skills.len(), 3);
        assert_eq!(content.skills.certifications.len(), 4);
    }
}
