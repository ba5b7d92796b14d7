//! Hand-curated baseline content.
//!
//! Each built-in subject is a fixed list of domains. A standard's position
//! inside its domain (1-based) becomes the trailing `{n}` of its ID.

use curricula_core::Subject;

/// A domain of a subject catalog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Domain {
    /// Domain code, the fourth ID segment.
    pub code: &'static str,
    /// Standard texts, in ID order.
    pub items: &'static [&'static str],
}

const fn domain(code: &'static str, items: &'static [&'static str]) -> Domain {
    Domain { code, items }
}

const MATH: &[Domain] = &[
    domain(
        "OA",
        &[
            "Represent and solve problems involving the four operations.",
            "Gain familiarity with factors, multiples, and number relationships.",
            "Generate and analyze patterns that follow a given rule.",
        ],
    ),
    domain(
        "NBT",
        &[
            "Generalize place value understanding for multi-digit whole numbers.",
            "Use place value understanding and properties of operations to perform multi-digit arithmetic.",
        ],
    ),
    domain(
        "NF",
        &["Extend understanding of fraction equivalence, ordering, and operations."],
    ),
    domain(
        "MD",
        &["Solve problems involving measurement, data, and conversion of units."],
    ),
    domain(
        "G",
        &["Draw and identify lines and angles, and classify shapes by their properties."],
    ),
];

const LANGUAGE_ARTS: &[Domain] = &[
    domain(
        "RL",
        &[
            "Refer to details and examples in a text when explaining what the text says explicitly.",
            "Determine a theme of a story, drama, or poem from details in the text.",
        ],
    ),
    domain(
        "RI",
        &["Explain events, procedures, ideas, or concepts in an informational text."],
    ),
    domain(
        "RF",
        &["Know and apply grade-level phonics and word analysis skills in decoding words."],
    ),
    domain(
        "W",
        &[
            "Write opinion pieces on topics or texts, supporting a point of view with reasons.",
            "Write informative texts to examine a topic and convey ideas clearly.",
        ],
    ),
    domain(
        "SL",
        &["Engage effectively in collaborative discussions with diverse partners."],
    ),
    domain(
        "L",
        &["Demonstrate command of the conventions of standard English grammar and usage."],
    ),
];

const SCIENCE: &[Domain] = &[
    domain(
        "PS",
        &[
            "Use evidence to construct an explanation relating the speed of an object to its energy.",
            "Develop a model of waves to describe patterns in amplitude and wavelength.",
        ],
    ),
    domain(
        "LS",
        &["Construct an argument that organisms have structures that support survival and growth."],
    ),
    domain(
        "ESS",
        &[
            "Identify evidence from patterns in rock formations to explain changes in a landscape.",
            "Generate and compare solutions to reduce the impacts of natural processes on humans.",
        ],
    ),
    domain(
        "ETS",
        &["Define a simple design problem with criteria for success and constraints."],
    ),
];

const SOCIAL_STUDIES: &[Domain] = &[
    domain(
        "CIV",
        &["Explain the purposes of rules and laws and how they are made in a community."],
    ),
    domain(
        "ECO",
        &["Explain how people earn income and make choices about scarce resources."],
    ),
    domain(
        "GEO",
        &["Construct maps and other representations of familiar and unfamiliar places."],
    ),
    domain(
        "HIS",
        &[
            "Create and use a chronological sequence of related events to compare developments.",
            "Generate questions about individuals and groups who have shaped significant events.",
        ],
    ),
];

const PHYSICAL_EDUCATION: &[Domain] = &[
    domain(
        "MS",
        &["Demonstrate competency in a variety of motor skills and movement patterns."],
    ),
    domain(
        "MC",
        &["Apply knowledge of concepts, principles, and strategies related to movement."],
    ),
    domain(
        "PF",
        &["Demonstrate the knowledge and skills to achieve a health-enhancing level of fitness."],
    ),
    domain(
        "PSB",
        &[
            "Exhibit responsible personal and social behavior that respects self and others.",
            "Recognize the value of physical activity for health, enjoyment, and self-expression.",
        ],
    ),
];

const HEALTH: &[Domain] = &[
    domain(
        "HP",
        &["Comprehend concepts related to health promotion and disease prevention."],
    ),
    domain(
        "IA",
        &["Demonstrate the ability to access valid information and products to enhance health."],
    ),
    domain(
        "IC",
        &["Use interpersonal communication skills to enhance health and avoid risks."],
    ),
    domain(
        "DM",
        &[
            "Use decision-making skills to enhance health.",
            "Use goal-setting skills to enhance health.",
        ],
    ),
];

const COMPUTER_SCIENCE: &[Domain] = &[
    domain(
        "CS",
        &["Model how computer hardware and software work together as a system."],
    ),
    domain(
        "NI",
        &["Explain how information is broken down and transmitted across networks."],
    ),
    domain(
        "DA",
        &["Organize and present collected data visually to highlight relationships."],
    ),
    domain(
        "AP",
        &[
            "Decompose problems into smaller, manageable subproblems to develop a program.",
            "Create programs that use variables, loops, and conditionals.",
        ],
    ),
    domain(
        "IC",
        &["Discuss computing technologies that have changed the world."],
    ),
];

/// Domains for a built-in subject, `None` for free-text subjects.
pub(crate) fn domains_for(subject: &Subject) -> Option<&'static [Domain]> {
    match subject {
        Subject::Math => Some(MATH),
        Subject::LanguageArts => Some(LANGUAGE_ARTS),
        Subject::Science => Some(SCIENCE),
        Subject::SocialStudies => Some(SOCIAL_STUDIES),
        Subject::PhysicalEducation => Some(PHYSICAL_EDUCATION),
        Subject::Health => Some(HEALTH),
        Subject::ComputerScience => Some(COMPUTER_SCIENCE),
        Subject::Other(_) => None,
    }
}

/// Generic fallback entries: `(domain code, description template)`.
///
/// `{subject}` and `{grade}` are substituted at build time.
pub(crate) const FALLBACK: [(&str, &str); 3] = [
    (
        "ALIGN",
        "Demonstrate {grade} understanding of core {subject} concepts and vocabulary.",
    ),
    (
        "21C",
        "Apply 21st-century skills such as critical thinking and collaboration in {subject}.",
    ),
    (
        "SEL",
        "Practice social-emotional learning through self-management and reflection in {subject}.",
    ),
];
