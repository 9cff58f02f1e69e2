//! Static copy for the home and quote pages.
//!
//! Service cards are not listed here: they come from
//! [`ServiceType`](crate::quote::ServiceType) so the grid and the quote form
//! select can never drift apart.

/// A card in the "Why Choose Us" column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reason {
    /// Emoji
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// A headline number under the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Big number
    pub value: &'static str,
    /// Caption under it
    pub label: &'static str,
}

/// A numbered step in the "What Happens Next?" card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// 1-based position
    pub number: u8,
    /// Step description
    pub text: &'static str,
}

/// Title and subtitle for a home page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCopy {
    /// Anchor id, if the section is linkable
    pub id: Option<&'static str>,
    /// Heading
    pub title: &'static str,
    /// Line under the heading
    pub subtitle: &'static str,
}

/// Company name shown in the header and footer.
pub const COMPANY_NAME: &str = "Load Movers";
/// Legal suffix under the name on the quote page.
pub const COMPANY_SUFFIX: &str = "Pvt Ltd";

/// Badge above the hero headline.
pub const HERO_TAG: &str = "Professional Moving & Disposal Services";
/// Paragraph under the hero headline.
pub const HERO_LEAD: &str = "From furniture relocations to building rubble disposal — Load Movers delivers reliable, professional hauling services you can count on.";
/// Hero background photo.
pub const HERO_BACKGROUND: &str = "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

/// Headline numbers under the hero call to action.
pub const STATS: [Stat; 3] = [
    Stat { value: "10+", label: "Years Experience" },
    Stat { value: "5K+", label: "Jobs Completed" },
    Stat { value: "100%", label: "Based in Cape Town" },
];

/// Heading block of the services grid.
pub const SERVICES_SECTION: SectionCopy = SectionCopy {
    id: Some("services"),
    title: "Our Services",
    subtitle: "Comprehensive moving and logistics solutions tailored to your needs",
};

/// Heading block of the "Why Choose Us" section.
pub const WHY_SECTION: SectionCopy = SectionCopy {
    id: None,
    title: "Why Choose Us",
    subtitle: "What sets Load Movers apart from the competition",
};

/// Heading block of the photo carousel.
pub const GALLERY_SECTION: SectionCopy = SectionCopy {
    id: Some("gallery"),
    title: "Our Work in Action",
    subtitle: "See Load Movers in action - from furniture moves to construction hauling",
};

/// Heading of the text column in "Why Choose Us".
pub const WHY_HEADING: &str = "Your Trusted Moving Partner";

/// Body paragraphs of the text column in "Why Choose Us".
pub const WHY_PARAGRAPHS: [&str; 3] = [
    "At Load Movers, we understand that moving is more than just transporting items from one place to another. It's about trust, reliability, and peace of mind. With years of experience in the industry, we've built a reputation for excellence that speaks for itself.",
    "Our commitment to customer satisfaction drives everything we do. From the moment you request a quote to the final delivery, we ensure a seamless experience that exceeds expectations. Whether you're moving your home, relocating your office, or transporting heavy equipment, our professional team is equipped to handle it all.",
    "Choose Load Movers for a moving experience that's stress-free, efficient, and affordable. We're not just moving your belongings—we're moving your life forward.",
];

/// Reason cards, in display order.
pub const REASONS: [Reason; 6] = [
    Reason {
        icon: "⏰",
        title: "Reliable & On-Time",
        description: "We understand the importance of punctuality. Count on us to arrive on time, every time.",
    },
    Reason {
        icon: "👔",
        title: "Professional Team",
        description: "Our trained professionals bring years of experience and expertise to every job.",
    },
    Reason {
        icon: "💰",
        title: "Affordable Pricing",
        description: "Transparent, competitive pricing with no hidden fees. Quality service that fits your budget.",
    },
    Reason {
        icon: "🛡️",
        title: "Secure Handling",
        description: "Professional handling ensures your belongings are protected throughout the entire process.",
    },
    Reason {
        icon: "⚡",
        title: "Fast Turnaround",
        description: "Efficient processes and dedicated teams ensure quick completion without compromising quality.",
    },
    Reason {
        icon: "💬",
        title: "Excellent Customer Support",
        description: "Our customer service team is available to assist you every step of the way.",
    },
];

/// Heading of the blue call-to-action band.
pub const CTA_HEADING: &str = "Ready to Move? Let's Get Started.";
/// Paragraph of the call-to-action band.
pub const CTA_LEAD: &str = "Whether it's a small load or a big project, we're here to help. Get your free quote today and experience the Load Movers difference.";

/// Quote page title.
pub const QUOTE_TITLE: &str = "Request a Quote";
/// Line under the quote page title.
pub const QUOTE_LEAD: &str =
    "Fill out the form below and we'll get back to you with a competitive quote.";

/// Sidebar steps on the quote page.
pub const NEXT_STEPS: [Step; 4] = [
    Step { number: 1, text: "We review your request within 2-4 hours" },
    Step { number: 2, text: "Our team contacts you to clarify details" },
    Step { number: 3, text: "You receive a detailed, no-obligation quote" },
    Step { number: 4, text: "Confirm booking and we handle the rest!" },
];

/// Confirmation overlay heading.
pub const SUCCESS_TITLE: &str = "Quote Request Submitted!";
/// Confirmation overlay body.
pub const SUCCESS_MESSAGE: &str = "Thank you for your request. Our team will review your information and get back to you within 2-4 hours with a competitive quote.";
/// Alert shown when the mail handoff fails.
pub const SUBMIT_FAILED_ALERT: &str =
    "There was an error submitting your request. Please try again or contact us directly.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<u8> = NEXT_STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn reason_titles_are_unique() {
        let mut titles: Vec<_> = REASONS.iter().map(|r| r.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), REASONS.len());
    }

    #[test]
    fn linkable_sections_have_ids() {
        assert_eq!(SERVICES_SECTION.id, Some("services"));
        assert_eq!(GALLERY_SECTION.id, Some("gallery"));
        assert_eq!(WHY_SECTION.id, None);
    }
}
