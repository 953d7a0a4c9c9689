//! Static reference data for the studio chain.
//!
//! Everything here is immutable and compiled in. Category and studio rows in the
//! ticket store are seeded from these tables, so ids must stay stable.

use serde::Serialize;

use crate::ticket::{Priority, TicketStatus};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Studio {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub default_team: &'static str,
    pub default_priority: Priority,
    pub subcategories: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityInfo {
    pub priority: Priority,
    pub label: &'static str,
    pub color: &'static str,
    pub sla_hours: f64,
    pub response_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusInfo {
    pub status: TicketStatus,
    pub label: &'static str,
    pub color: &'static str,
}

/// Value/label pair for selector-style reference lists
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabeledOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

pub const STUDIOS: &[Studio] = &[
    Studio { id: "kwality-house", name: "Kwality House Kemps Corner", city: "Mumbai" },
    Studio { id: "kenkre-house", name: "Kenkre House", city: "Mumbai" },
    Studio { id: "sufc", name: "South United Football Club", city: "Mumbai" },
    Studio { id: "supreme-hq", name: "Supreme HQ Bandra", city: "Mumbai" },
    Studio { id: "wework-prestige", name: "WeWork Prestige Central", city: "Mumbai" },
    Studio { id: "wework-galaxy", name: "WeWork Galaxy", city: "Mumbai" },
    Studio { id: "copper-cloves", name: "The Studio by Copper + Cloves", city: "Mumbai" },
    Studio { id: "popup", name: "Pop-up", city: "Various" },
];

pub const TRAINERS: &[&str] = &[
    "Anisha Shah", "Atulan Purohit", "Karanvir Bhatia", "Mrigakshi Jaiswal",
    "Reshma Sharma", "Karan Bhatia", "Pushyank Nahar", "Shruti Kulkarni",
    "Janhavi Jain", "Rohan Dahima", "Kajol Kanchan", "Vivaran Dhasmana",
    "Upasna Paranjpe", "Richard D'Costa", "Pranjali Jain", "Saniya Jaiswal",
    "Shruti Suresh", "Cauveri Vikrant", "Poojitha Bhaskar", "Nishanth Raj",
    "Siddhartha Kusuma", "Simonelle De Vitre", "Kabir Varma", "Simran Dutt",
    "Veena Narasimhan", "Anmol Sharma", "Bret Saldanha", "Raunak Khemuka",
    "Chaitanya Nahar", "Sovena Shetty",
];

pub const CLASSES: &[&str] = &[
    "Studio Barre 57", "Studio Foundations", "Studio Barre 57 Express",
    "Studio Cardio Barre", "Studio FIT", "Studio Mat 57", "Studio SWEAT In 30",
    "Studio Amped Up!", "Studio Back Body Blaze", "Studio Cardio Barre Plus",
    "Studio Cardio Barre Express", "Studio HIIT", "Studio Back Body Blaze Express",
    "Studio Recovery", "Studio Hosted Class", "Studio Trainer's Choice",
    "Studio Pre/Post Natal", "Studio Mat 57 Express", "Studio PowerCycle Express",
    "Studio PowerCycle", "Studio Strength Lab (Pull)", "Studio Strength Lab (Full Body)",
    "Studio Strength Lab (Push)", "Studio Strength Lab",
];

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "f4b30263-d66b-4abc-8580-7ae5ad50204d",
        code: "BT",
        name: "Booking & Technology",
        icon: "Smartphone",
        default_team: "Operations",
        default_priority: Priority::Medium,
        subcategories: &[
            "App Issues", "Website Issues", "Class Booking", "Payment Processing",
            "Account Access", "Notifications", "Technical Support", "Booking Failures",
        ],
    },
    Category {
        id: "92c1ab90-cefb-452c-b555-7bb4e86afb8e",
        code: "CS",
        name: "Customer Service",
        icon: "Headphones",
        default_team: "Client Success",
        default_priority: Priority::High,
        subcategories: &[
            "Response Time", "Staff Knowledge", "Communication Quality", "Phone Support",
            "Front Desk Service", "Newcomer Experience", "Email/Chat Support",
            "Staff Availability", "Complaint Handling", "Issue Resolution", "Staff Professionalism",
        ],
    },
    Category {
        id: "bd4c7c4f-b4ea-4d39-9f34-25b4573a106a",
        code: "HS",
        name: "Health & Safety",
        icon: "Shield",
        default_team: "Facilities",
        default_priority: Priority::High,
        subcategories: &[
            "Medical Disclosure", "Injury During Class", "COVID/Health Protocols",
            "Air Quality", "Emergency Preparedness", "Equipment Safety", "Hygiene Protocols",
        ],
    },
    Category {
        id: "02069c93-f3db-47f3-8c59-c186fc74e70d",
        code: "RM",
        name: "Retail Management",
        icon: "ShoppingCart",
        default_team: "Sales",
        default_priority: Priority::Medium,
        subcategories: &[
            "Staff Knowledge", "Product Availability", "Product Quality", "Pricing",
            "Return/Exchange",
        ],
    },
    Category {
        id: "087672a0-423a-4b7c-acaa-d3683e3edd86",
        code: "CC",
        name: "Community & Culture",
        icon: "Users",
        default_team: "Operations",
        default_priority: Priority::Medium,
        subcategories: &[
            "Clique Behavior", "Studio Culture", "Member Behavior", "Discrimination",
            "Inclusivity Issues", "Community Events",
        ],
    },
    Category {
        id: "cc4d8875-22f5-421a-b235-fd93cefb19d7",
        code: "SM",
        name: "Sales & Marketing",
        icon: "TrendingUp",
        default_team: "Sales",
        default_priority: Priority::Medium,
        subcategories: &[
            "Events & Workshops", "Misleading Information", "Guest Passes/Referrals",
            "Aggressive Selling", "Social Media", "Trial Class Experience",
            "Communication Overload", "Brand Communication",
        ],
    },
    Category {
        id: "d2fab980-96b8-4147-b99f-6debae7167b0",
        code: "SP",
        name: "Special Programs",
        icon: "Zap",
        default_team: "Operations",
        default_priority: Priority::Medium,
        subcategories: &[
            "Workshop Quality", "Challenges & Competitions", "Special Needs Programs",
            "Corporate Programs", "Private Sessions",
        ],
    },
    Category {
        id: "dd057e85-62c0-4747-b4ad-773af6542695",
        code: "MISC",
        name: "Miscellaneous",
        icon: "MoreHorizontal",
        default_team: "Operations",
        default_priority: Priority::Medium,
        subcategories: &[
            "Policy Changes", "Feedback System", "Noise Disturbance", "Multi-location Issues",
            "Guest Experience", "Nutrition/Wellness Advice", "Lost & Found",
        ],
    },
    Category {
        id: "8e5767ff-7c90-4bbe-aacd-2d8f8142ed46",
        code: "GLOBAL",
        name: "Global",
        icon: "Globe",
        default_team: "Operations",
        default_priority: Priority::Medium,
        subcategories: &[],
    },
];

/// Ordered most to least urgent
pub const PRIORITIES: &[PriorityInfo] = &[
    PriorityInfo { priority: Priority::Critical, label: "Critical", color: "destructive", sla_hours: 2.0, response_hours: 0.25 },
    PriorityInfo { priority: Priority::High, label: "High", color: "orange", sla_hours: 8.0, response_hours: 1.0 },
    PriorityInfo { priority: Priority::Medium, label: "Medium", color: "yellow", sla_hours: 24.0, response_hours: 4.0 },
    PriorityInfo { priority: Priority::Low, label: "Low", color: "green", sla_hours: 72.0, response_hours: 8.0 },
];

pub const STATUSES: &[StatusInfo] = &[
    StatusInfo { status: TicketStatus::New, label: "New", color: "blue" },
    StatusInfo { status: TicketStatus::Assigned, label: "Assigned", color: "purple" },
    StatusInfo { status: TicketStatus::InProgress, label: "In Progress", color: "yellow" },
    StatusInfo { status: TicketStatus::PendingCustomer, label: "Pending Customer", color: "orange" },
    StatusInfo { status: TicketStatus::Resolved, label: "Resolved", color: "green" },
    StatusInfo { status: TicketStatus::Closed, label: "Closed", color: "gray" },
    StatusInfo { status: TicketStatus::Reopened, label: "Reopened", color: "red" },
];

pub const CLIENT_MOODS: &[LabeledOption] = &[
    LabeledOption { value: "calm", label: "Calm", icon: Some("Smile") },
    LabeledOption { value: "frustrated", label: "Frustrated", icon: Some("Meh") },
    LabeledOption { value: "angry", label: "Angry", icon: Some("Angry") },
    LabeledOption { value: "disappointed", label: "Disappointed", icon: Some("Frown") },
    LabeledOption { value: "understanding", label: "Understanding", icon: Some("ThumbsUp") },
];

pub const CLIENT_STATUSES: &[LabeledOption] = &[
    LabeledOption { value: "existing_active", label: "Existing Active", icon: None },
    LabeledOption { value: "existing_inactive", label: "Existing Inactive", icon: None },
    LabeledOption { value: "new_prospect", label: "New Prospect", icon: None },
    LabeledOption { value: "trial_client", label: "Trial Client", icon: None },
    LabeledOption { value: "guest", label: "Guest (Hosted Class)", icon: None },
];

/// Departments for routing
pub const DEPARTMENTS: &[&str] = &[
    "Operations",
    "Facilities",
    "Training",
    "Sales",
    "Client Success",
    "Marketing",
    "Finance",
    "Management",
    "IT/Tech Support",
    "HR",
    "Security",
];
