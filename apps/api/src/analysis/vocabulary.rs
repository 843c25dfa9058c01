//! Fixed vocabularies used by the extractors, scorer and advisor.

/// Skill terms detected by case-insensitive substring match.
pub const SKILL_KEYWORDS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "C",
    "JavaScript",
    "HTML",
    "CSS",
    "React",
    "Node.js",
    "Node",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "R",
    "Scala",
    "AI",
    "ML",
    "Machine Learning",
    "Artificial Intelligence",
    "Data Science",
    "Data Analysis",
    "Big Data",
    "Deep Learning",
    "Neural Networks",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "Excel",
    "PowerBI",
    "Tableau",
    "Git",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Linux",
    "Windows",
    "MacOS",
];

/// Skills the advisor measures a resume against, in suggestion order.
pub const KNOWN_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "C",
    "R",
    "JavaScript",
    "HTML",
    "CSS",
    "AI",
    "ML",
    "Data Science",
    "Machine Learning",
    "Deep Learning",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "TensorFlow",
    "PyTorch",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "Git",
    "Docker",
    "AWS",
    "Azure",
];

/// Lines that look like section headers rather than a candidate's name.
/// Compared against the upper-cased line.
pub const NAME_BLACKLIST: &[&str] = &[
    "RESUME",
    "CURRICULUM VITAE",
    "CV",
    "CONTACT",
    "SUMMARY",
    "OBJECTIVE",
    "EXPERIENCE",
    "EDUCATION",
    "SKILLS",
    "PROJECTS",
    "WORK",
    "PROFILE",
];

/// Lower-case degree markers; the first line containing one is the education entry.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "b.sc", "m.sc", "b.tech", "m.tech", "mba", "bachelor", "master", "phd", "degree",
];

/// Section words rewarded by the scorer when present in the resume.
pub const SECTION_KEYWORDS: &[&str] = &["experience", "education", "project", "certification"];

/// Demo job board keyed by canonical skill label.
pub const JOB_DATABASE: &[(&str, &[&str])] = &[
    (
        "Python",
        &["Python Developer at Infosys", "Data Scientist at TCS"],
    ),
    ("SQL", &["Data Engineer at Snowflake", "DB Admin at Oracle"]),
    (
        "JavaScript",
        &["Frontend Dev at Zomato", "Full Stack at Paytm"],
    ),
    ("AI", &["AI Engineer at Google", "ML Engineer at OpenAI"]),
];
