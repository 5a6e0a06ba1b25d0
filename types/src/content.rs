//! Portfolio content model.
//!
//! All content is compiled into the binary and borrowed for the process
//! lifetime. Sequences are ordered as authored; display order is identity and
//! nothing is sorted at runtime.

/// Personal profile shown in the hero and contact regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    /// Social profile URL, rendered verbatim in the contact region.
    pub linkedin: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
}

impl Profile {
    /// The mail target for the contact actions.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// One work experience card. Identity is the position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    /// Free-text date range, e.g. "July 2025 - Present".
    pub period: &'static str,
    pub responsibilities: &'static [&'static str],
}

/// Skill names and certification names, each ordered as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSet {
    pub skills: &'static [&'static str],
    pub certifications: &'static [&'static str],
}

/// One education card. Sequence order is chronological as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub field: &'static str,
    pub period: &'static str,
}

/// The complete read-only content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub experience: &'static [ExperienceEntry],
    pub skills: SkillSet,
    pub education: &'static [EducationEntry],
    pub footer: &'static str,
}
