//! Static site content: navigation, company details, and the service catalog.

pub const COMPANY_NAME: &str = "PROTOREV";
pub const COMPANY_TAGLINE: &str = "Precision Engineering";
pub const COMPANY_MOTTO: &str = "Precision • Speed • Perfection";
pub const SYSTEM_VERSION: &str = "2.0.4";

pub const PHONE_DISPLAY: &str = "+91 98765 43210";
pub const PHONE_HREF: &str = "tel:+919876543210";
pub const INFO_EMAIL: &str = "info@protorev.com";
pub const PROJECTS_EMAIL: &str = "projects@protorev.com";
pub const WHATSAPP_HREF: &str = "https://wa.me/919876543210?text=Hello%20PROTOREV%20team,%20I%20have%20an%20engineering%20requirement.";
pub const MAP_EMBED_SRC: &str = "https://www.google.com/maps?q=232,2nd+Cross,Vidhana+Soudha+Layout,Papareddypalya,D-Group+Layout,2nd+Stage,Naagarabhaavi,Bengaluru,Karnataka+560072&z=19&output=embed";

pub static ADDRESS_LINES: [&str; 5] = [
    "231/2, Ground Floor, 2nd Cross",
    "Vidhana Soudha Layout, Papareddypalya",
    "D-Group Layout, 2nd Stage",
    "Naagarabhaavi, Bengaluru",
    "Karnataka 560072",
];

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        href: "/",
        label: "HOME",
    },
    NavItem {
        href: "/services",
        label: "SERVICES",
    },
    NavItem {
        href: "/about",
        label: "ABOUT",
    },
    NavItem {
        href: "/contact",
        label: "CONTACT",
    },
];

/// Index of the navigation item matching `path` exactly.
pub fn active_nav_index(path: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.href == path)
}

pub struct Titled {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Service {
    pub slug: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// One-line problem statement used on the overview page.
    pub summary: &'static str,
    pub intro: &'static str,
    pub benefit: &'static str,
    pub challenges_title: &'static str,
    pub challenges: [&'static str; 4],
    pub approach_title: &'static str,
    pub approach: [&'static str; 4],
    pub deliverables: [Titled; 3],
    pub process: [ProcessStep; 4],
    pub ideal_for: [&'static str; 4],
    pub cta_title: &'static str,
    pub cta_label: &'static str,
}

pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.slug == slug)
}

pub fn service_path(service: &Service) -> String {
    format!("/services/{}", service.slug)
}

pub static PRINCIPLES: [Titled; 3] = [
    Titled {
        title: "Time",
        description: "Respecting schedules and manufacturing timelines to ensure your project stays on track.",
    },
    Titled {
        title: "Precision",
        description: "Dimensionally accurate and tolerance-aware design that translates perfectly to the shop floor.",
    },
    Titled {
        title: "Perfection",
        description: "Clean, structured, and purpose-driven engineering that solves real manufacturing problems.",
    },
];

pub static APPROACH_STEPS: [&str; 5] = [
    "Requirement understanding",
    "Engineering analysis",
    "Structured design execution",
    "Review and refinement",
    "Final delivery with technical support",
];

pub static AUDIENCES: [&str; 5] = [
    "Product startups",
    "MSMEs and manufacturers",
    "CNC machine shops",
    "Automation and tooling teams",
    "Maintenance and legacy systems",
];

pub static CORE_VALUES: [Titled; 6] = [
    Titled {
        title: "Discipline Over Speed",
        description: "Correct processes matter more than rushed outcomes.",
    },
    Titled {
        title: "Precision in Every Detail",
        description: "Every micron counts. Quality is built, not inspected.",
    },
    Titled {
        title: "Process Before Personality",
        description: "Systems outperform individual brilliance.",
    },
    Titled {
        title: "Continuous Improvement",
        description: "Small, consistent gains drive long-term excellence.",
    },
    Titled {
        title: "Respect for People & Work",
        description: "Humility, accountability, and professionalism always.",
    },
    Titled {
        title: "Long-Term Responsibility",
        description: "Built for tomorrow’s reliability, not today’s delivery.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum UnitStatus {
    Operational,
    Upcoming,
}

pub struct OperationalUnit {
    pub title: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub status: UnitStatus,
}

pub static OPERATIONAL_UNITS: [OperationalUnit; 3] = [
    OperationalUnit {
        title: "Design Unit",
        role: "CAD / CAM / CAE",
        description: "Parametric modeling and simulation.",
        status: UnitStatus::Operational,
    },
    OperationalUnit {
        title: "Production Unit",
        role: "CNC / Additive",
        description: "Physical realization and machining.",
        status: UnitStatus::Upcoming,
    },
    OperationalUnit {
        title: "Quality Unit",
        role: "CMM / Inspection",
        description: "Verification and final approval.",
        status: UnitStatus::Upcoming,
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub event: &'static str,
    pub completed: bool,
}

pub static TIMELINE: [Milestone; 4] = [
    Milestone {
        year: "2038",
        event: "Machine Unit fully operationalized.",
        completed: false,
    },
    Milestone {
        year: "2035",
        event: "Dedicated Quality Unit commissioned.",
        completed: false,
    },
    Milestone {
        year: "2030",
        event: "R&D unit became operational.",
        completed: false,
    },
    Milestone {
        year: "2025",
        event: "Company established and operations initiated.",
        completed: true,
    },
];

pub static SERVICES: [Service; 6] = [
    Service {
        slug: "product-design-development",
        number: "02.1",
        title: "Product Design & Development",
        subtitle: "From concept to manufacturable reality",
        summary: "You have an idea, concept, or sketch but it is not ready for manufacturing.",
        intro: "We convert ideas into structured, manufacturable 3D CAD models considering materials, processes, tolerances, and assembly.",
        benefit: "Reduced errors, faster production readiness, lower development cost.",
        challenges_title: "Typical Challenges",
        challenges: [
            "Concepts not aligned with manufacturing processes",
            "Frequent design changes during production",
            "Assembly conflicts discovered too late",
            "Unclear tolerances and material selection",
        ],
        approach_title: "Our Engineering Approach",
        approach: [
            "Design-for-manufacturing (DFM) driven CAD modeling",
            "Early consideration of materials and processes",
            "Assembly-first thinking to avoid downstream issues",
            "Clear tolerance strategy and documentation",
        ],
        deliverables: [
            Titled {
                title: "3D CAD Models",
                description: "Fully parametric, clean, and manufacturing-ready part and assembly models.",
            },
            Titled {
                title: "Manufacturing Drawings",
                description: "Clear drawings with GD&T, materials, finishes, and revision control.",
            },
            Titled {
                title: "Design Optimization",
                description: "Geometry and feature refinement to reduce cost, weight, and complexity.",
            },
        ],
        process: [
            ProcessStep {
                step: "01",
                title: "Requirement Understanding",
                description: "Functional needs, constraints, usage environment, and manufacturing intent.",
            },
            ProcessStep {
                step: "02",
                title: "Concept & Layout Design",
                description: "Initial layouts, mechanisms, and feasibility checks.",
            },
            ProcessStep {
                step: "03",
                title: "Detailed CAD Development",
                description: "Part modeling, assemblies, tolerances, and material definition.",
            },
            ProcessStep {
                step: "04",
                title: "Manufacturing Readiness",
                description: "Final drawings, checks, and handover-ready documentation.",
            },
        ],
        ideal_for: [
            "Startups moving from idea to first prototype",
            "MSMEs improving existing product designs",
            "Manufacturers facing recurring design issues",
            "Teams needing external design bandwidth",
        ],
        cta_title: "Ready to Engineer Your Product?",
        cta_label: "Discuss Your Product",
    },
    Service {
        slug: "reverse-engineering",
        number: "02.2",
        title: "Reverse Engineering",
        subtitle: "From physical part to precise digital definition",
        summary: "A physical part exists but no CAD or drawings are available.",
        intro: "When drawings are missing, documentation is outdated, or OEM data is unavailable, production should not come to a halt. Reverse engineering converts existing physical parts into accurate digital models.",
        benefit: "Freedom from OEM dependency and secure long-term documentation.",
        challenges_title: "Common Situations",
        challenges: [
            "Legacy or imported parts without drawings",
            "OEM dependency for spares or replacements",
            "Worn or modified components with no records",
            "Inaccurate manual measurements causing mismatch",
        ],
        approach_title: "Our Reverse Engineering Method",
        approach: [
            "Feature-based measurement and reconstruction",
            "Scan-assisted modeling where required",
            "Rebuilding CAD based on design intent, not noise",
            "Manufacturing-focused geometry cleanup",
        ],
        deliverables: [
            Titled {
                title: "Accurate 3D CAD Models",
                description: "Clean, parametric CAD models rebuilt with proper features and constraints.",
            },
            Titled {
                title: "Manufacturing Drawings",
                description: "Optional drawings with critical dimensions, tolerances, and notes.",
            },
            Titled {
                title: "Redesign & Optimization",
                description: "Improvements for strength, cost, or manufacturability when required.",
            },
        ],
        process: [
            ProcessStep {
                step: "01",
                title: "Part Study & Measurement Strategy",
                description: "Understanding function, interfaces, and selecting the right measurement approach.",
            },
            ProcessStep {
                step: "02",
                title: "Data Capture",
                description: "Manual measurement, probing, or scan data acquisition as required.",
            },
            ProcessStep {
                step: "03",
                title: "CAD Reconstruction",
                description: "Rebuilding geometry using proper features, datums, and symmetry.",
            },
            ProcessStep {
                step: "04",
                title: "Validation & Handover",
                description: "Cross-checking critical dimensions and delivering production-ready data.",
            },
        ],
        ideal_for: [
            "Manufacturers needing replacement or spare parts",
            "MSMEs reducing dependency on OEM suppliers",
            "Maintenance teams handling legacy equipment",
            "Product redesign or benchmarking projects",
        ],
        cta_title: "Need to Rebuild a Part Accurately?",
        cta_label: "Discuss Your Part",
    },
    Service {
        slug: "fixture-tooling-design",
        number: "02.3",
        title: "Fixture & Tooling Design",
        subtitle: "Engineering stability, accuracy, and repeatability",
        summary: "Machining accuracy is inconsistent, or setups consume too much time.",
        intro: "Custom fixture and tooling design for stability and repeatability, so every part is located, clamped, and machined the same way.",
        benefit: "Improved accuracy, faster cycles, reduced scrap.",
        challenges_title: "Common Fixture Problems",
        challenges: [
            "Inconsistent part location and repeatability",
            "Excessive setup time and manual adjustments",
            "Vibration and tool chatter during machining",
            "Operator-dependent quality variations",
        ],
        approach_title: "Our Design Approach",
        approach: [
            "3-2-1 location principle and datum control",
            "Rigid, vibration-resistant fixture structures",
            "Operator-friendly loading and unloading",
            "Designed for process repeatability and safety",
        ],
        deliverables: [
            Titled {
                title: "Fixture & Tooling CAD",
                description: "Complete 3D assemblies with part location, clamps, and supports.",
            },
            Titled {
                title: "Manufacturing Drawings",
                description: "Clear drawings for fixture fabrication and assembly.",
            },
            Titled {
                title: "Setup & Usage Guidance",
                description: "Defined setup sequence and usage clarity for shop-floor teams.",
            },
        ],
        process: [
            ProcessStep {
                step: "01",
                title: "Part & Operation Study",
                description: "Understanding machining operations, tolerances, and cutting forces.",
            },
            ProcessStep {
                step: "02",
                title: "Location & Clamping Strategy",
                description: "Defining datums, locators, and clamping methods.",
            },
            ProcessStep {
                step: "03",
                title: "Fixture CAD Development",
                description: "Designing robust fixture assemblies and interfaces.",
            },
            ProcessStep {
                step: "04",
                title: "Validation & Release",
                description: "Reviewing accessibility, rigidity, and manufacturing readiness.",
            },
        ],
        ideal_for: [
            "CNC machining and production shops",
            "Manufacturers facing quality inconsistency",
            "New production setups and batch jobs",
            "Cycle time and scrap reduction initiatives",
        ],
        cta_title: "Improve Accuracy and Repeatability",
        cta_label: "Discuss Your Fixture Requirement",
    },
    Service {
        slug: "2d-to-3d-cnc",
        number: "02.4",
        title: "2D to 3D Conversion for CNC",
        subtitle: "Removing ambiguity from machining",
        summary: "Only 2D drawings are available for CNC programming.",
        intro: "Conversion of 2D drawings into clear, CNC-ready 3D models that eliminate ambiguity and reduce CAM and machining errors.",
        benefit: "Faster CAM programming and smoother machining.",
        challenges_title: "Common 2D Drawing Issues",
        challenges: [
            "Missing or conflicting dimensions",
            "Unclear sections and feature depths",
            "Hidden geometry open to interpretation",
            "Time lost clarifying drawings during CAM",
        ],
        approach_title: "Our Conversion Approach",
        approach: [
            "Feature-based 3D reconstruction",
            "Dimensional intent clarification",
            "Machining-friendly geometry creation",
            "CAM-ready models aligned with operations",
        ],
        deliverables: [
            Titled {
                title: "CNC-Ready 3D CAD Models",
                description: "Clean, parametric models built to reflect actual machining intent.",
            },
            Titled {
                title: "Geometry Clarification",
                description: "Resolved depths, radii, blends, and intersections.",
            },
            Titled {
                title: "CAM-Friendly Output",
                description: "Models optimized for toolpath generation and setup planning.",
            },
        ],
        process: [
            ProcessStep {
                step: "01",
                title: "Drawing Review",
                description: "Understanding features, tolerances, and identifying ambiguities.",
            },
            ProcessStep {
                step: "02",
                title: "3D Reconstruction",
                description: "Building solid geometry using proper feature logic.",
            },
            ProcessStep {
                step: "03",
                title: "Intent Validation",
                description: "Clarifying assumptions and validating with manufacturing logic.",
            },
            ProcessStep {
                step: "04",
                title: "CNC Readiness Check",
                description: "Final review for CAM compatibility and machining flow.",
            },
        ],
        ideal_for: [
            "CNC machining and CAM programming teams",
            "Shops working with legacy 2D drawings",
            "Manufacturers facing repeat machining errors",
            "Production planning and setup engineers",
        ],
        cta_title: "Eliminate Guesswork from Machining",
        cta_label: "Share Your Drawing",
    },
    Service {
        slug: "gom-inspection-quality",
        number: "02.5",
        title: "GOM Inspection & Quality Support",
        subtitle: "Turning measurement data into quality confidence",
        summary: "Parts need dimensional verification and quality documentation.",
        intro: "GOM-based inspection and quality support for accurate deviation analysis, GD&T validation, and faster quality decisions.",
        benefit: "Faster quality decisions and improved consistency.",
        challenges_title: "Common Quality Challenges",
        challenges: [
            "Parts failing inspection without clear root cause",
            "Confusing deviation reports with no actionable insight",
            "Repeated rejections and quality loops",
            "Misinterpretation of GD&T requirements",
        ],
        approach_title: "Our Quality Support Approach",
        approach: [
            "CAD-to-scan deviation comparison",
            "Feature-level and GD&T-based evaluation",
            "Clear visual deviation maps and summaries",
            "Engineering-focused interpretation, not just reports",
        ],
        deliverables: [
            Titled {
                title: "Deviation Analysis",
                description: "Color-mapped CAD vs scan comparison highlighting out-of-tolerance areas.",
            },
            Titled {
                title: "GD&T Evaluation",
                description: "Feature-based analysis aligned with drawing datums and tolerances.",
            },
            Titled {
                title: "Quality Documentation",
                description: "Clear reports that support acceptance, correction, or design decisions.",
            },
        ],
        process: [
            ProcessStep {
                step: "01",
                title: "CAD & Drawing Review",
                description: "Understanding design intent, datums, and critical features.",
            },
            ProcessStep {
                step: "02",
                title: "Optical Scan & Alignment",
                description: "High-resolution scanning and correct CAD alignment strategy.",
            },
            ProcessStep {
                step: "03",
                title: "Deviation & GD&T Analysis",
                description: "Feature-level evaluation using deviation maps and tolerance checks.",
            },
            ProcessStep {
                step: "04",
                title: "Reporting & Decision Support",
                description: "Clear insights for acceptance, correction, or process improvement.",
            },
        ],
        ideal_for: [
            "Manufacturers facing repeated part rejections",
            "Quality and inspection teams",
            "New product validation and PPAP stages",
            "Root cause and corrective action analysis",
        ],
        cta_title: "Get Clear Answers from Your Inspection Data",
        cta_label: "Discuss Your Quality Issue",
    },
    Service {
        slug: "3d-printing-prototyping",
        number: "02.6",
        title: "3D Printing & Prototyping",
        subtitle: "Validate designs before committing to production",
        summary: "Designs need physical validation before production.",
        intro: "Engineering-focused 3D printing for fit checks, functional validation, and faster design decisions.",
        benefit: "Early validation and faster decision-making.",
        challenges_title: "Common Prototyping Challenges",
        challenges: [
            "Designs moving to production without physical validation",
            "Fit or assembly issues discovered too late",
            "High tooling risk without prior testing",
            "Slow iteration cycles during development",
        ],
        approach_title: "Our Prototyping Approach",
        approach: [
            "Functional and fit-check focused prototypes",
            "Process-aware print orientation and material choice",
            "Rapid iteration with engineering feedback",
            "Design insights before committing to tooling",
        ],
        deliverables: [
            Titled {
                title: "Functional Prototypes",
                description: "Parts designed and printed for fit, assembly, and basic functional checks.",
            },
            Titled {
                title: "Fit & Assembly Validation",
                description: "Physical verification of interfaces, clearances, and alignment.",
            },
            Titled {
                title: "Iteration Support",
                description: "Quick design updates based on prototype feedback.",
            },
        ],
        process: [
            ProcessStep {
                step: "01",
                title: "Design Review",
                description: "Understanding intent, usage, and validation goals.",
            },
            ProcessStep {
                step: "02",
                title: "Print Strategy",
                description: "Selecting material, orientation, and resolution.",
            },
            ProcessStep {
                step: "03",
                title: "Prototype Fabrication",
                description: "Controlled printing with post-processing as required.",
            },
            ProcessStep {
                step: "04",
                title: "Feedback & Iteration",
                description: "Design refinements based on physical validation.",
            },
        ],
        ideal_for: [
            "Product development and R&D teams",
            "Startups validating early-stage concepts",
            "Manufacturers reducing tooling risk",
            "Design verification before machining",
        ],
        cta_title: "Validate Before You Manufacture",
        cta_label: "Discuss Your Prototype",
    },
];
