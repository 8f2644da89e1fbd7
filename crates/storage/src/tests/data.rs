//! Raw JSON documents of a small site bundle, shaped like the production
//! data including its inconsistencies: the two weekly-plan variants, the
//! varying exercise record shapes and the diverging category key names.

pub const PAGES: &str = r#"[
    {
        "name": "About",
        "page": "about",
        "content": "A four-phase fitness program."
    },
    {
        "name": "Workout Essentials",
        "page": "essentials"
    },
    {
        "name": "Phases",
        "page": "phases",
        "submenu": [
            {"name": "Phase 1", "page": "phase1"},
            {"name": "Phase 2", "page": "phase2"}
        ]
    }
]"#;

pub const PHASE_1: &str = r#"{
    "phase": "Phase 1",
    "goal": "Build a foundation of movement quality and work capacity.",
    "weekly_plan": {
        "days": ["Mon", "Wed", "Fri"],
        "weeks": [
            {
                "week": 1,
                "schedule": {
                    "Mon": ["Full Body A", "Core"],
                    "Fri": ["Full Body B"]
                }
            },
            {
                "week": 2,
                "schedule": {
                    "Mon": ["Full Body A"],
                    "Wed": ["Conditioning"],
                    "Fri": ["Full Body B"]
                }
            },
            {
                "week": 3,
                "schedule": {
                    "Mon": ["Full Body A"],
                    "Wed": ["Conditioning"],
                    "Fri": ["Full Body B", "Core"]
                }
            }
        ]
    },
    "exercises": [
        {
            "category": "Strength",
            "details": [
                {"exercise": "Goblet Squat", "week1": "3x8", "week2_3": "3x10"},
                {"exercise": "Push-up", "week1": "3x5", "week2_3": "3x8"},
                {"exercise": "Dead Bug", "description": "Slow and controlled"}
            ],
            "subcategories": [
                {
                    "subcategory": "Carries",
                    "exercises": [
                        {"exercise": "Farmer Carry", "week1": "3x20m", "week2_3": "3x30m"},
                        {"exercise": "Suitcase Carry", "week1": "2x20m"}
                    ]
                }
            ]
        },
        {
            "category": "Mobility",
            "details": [
                {"exercise": "Couch Stretch", "description": "2 min per side"},
                {"exercise": "Thoracic Rotation", "description": "10 per side"}
            ]
        }
    ]
}"#;

pub const PHASE_2: &str = r#"{
    "phase": "Phase 2",
    "goal": "Build strength with progressive loading.",
    "weekly_plan": {
        "days": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        "schedule": {
            "Mon": ["Strength A"],
            "Wed": ["Intervals"],
            "Fri": ["Strength B"],
            "Sat": ["Long Walk", "Mobility"]
        }
    },
    "exercise_categories": [
        {
            "category": "Strength",
            "exercises": [
                {"exercise": "Back Squat", "sets": 3, "reps": ["8", "8", "10"]},
                {"exercise": "Bench Press", "sets": 3, "reps": ["8", "8", "10"]},
                {"exercise": "Romanian Deadlift", "sets": 3, "reps": ["10"]}
            ]
        },
        {
            "category": "Accessory",
            "details": [
                {"exercise": "Band Pull-apart", "reps": ["15", "15", "20"]},
                {"exercise": "Face Pull", "reps": ["12", "15"]}
            ]
        },
        {
            "category": "Energy System Development",
            "exercises": [
                {
                    "name": "Bike Intervals",
                    "description": "Hard pace, nasal breathing on rest",
                    "work_interval": "30s",
                    "rest_interval": "90s",
                    "total_time": "20 min"
                },
                {
                    "name": "Sled Push",
                    "description": "Moderate load",
                    "work_interval": "20m",
                    "rest_interval": "60s",
                    "total_time": "15 min"
                }
            ]
        },
        {
            "category": "Recovery",
            "exercises": [
                {"exercise": "Zone 2 Walk", "description": "45 min, conversational pace"}
            ]
        }
    ]
}"#;

pub const ESSENTIALS: &str = r#"{
    "levels": [
        {
            "level": "Level 1",
            "sections": [
                {
                    "title": "Push",
                    "exercises": [
                        {"exercise": "Wall Push-up", "reps": ["10", "15", "20", "25"]},
                        {"exercise": "Incline Push-up", "reps": ["5", "8", "12"]}
                    ]
                },
                {
                    "title": "Hinge",
                    "details": [
                        {"exercise": "Glute Bridge", "reps": ["10", "15", "20", "25"]}
                    ]
                }
            ]
        },
        {
            "level": "Level 2",
            "sections": [
                {
                    "title": "Push",
                    "exercises": [
                        {"exercise": "Push-up", "reps": ["5", "8", "12", "15"]}
                    ]
                }
            ]
        }
    ]
}"#;
