use super::domain::Phase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub phase: Phase,
    pub guidance: &'static str,
}

/// Standard milestone checklist gating each phase.
#[derive(Debug)]
pub struct PhaseBlueprint {
    milestones: Vec<MilestoneTemplate>,
}

impl PhaseBlueprint {
    pub fn standard() -> Self {
        Self {
            milestones: standard_milestones(),
        }
    }

    pub fn milestones_for_phase(&self, phase: Phase) -> Vec<&MilestoneTemplate> {
        self.milestones
            .iter()
            .filter(|milestone| milestone.phase == phase)
            .collect()
    }

    pub fn milestone(&self, key: &str) -> Option<&MilestoneTemplate> {
        self.milestones.iter().find(|milestone| milestone.key == key)
    }

    pub fn milestones(&self) -> &[MilestoneTemplate] {
        &self.milestones
    }
}

fn standard_milestones() -> Vec<MilestoneTemplate> {
    vec![
        MilestoneTemplate {
            key: "create_athlete_profile",
            name: "Create Athlete Profile",
            phase: Phase::Freshman,
            guidance: "Record position, measurables, graduation year, and contact details.",
        },
        MilestoneTemplate {
            key: "set_academic_baseline",
            name: "Set Academic Baseline",
            phase: Phase::Freshman,
            guidance: "Log current GPA and map core courses against eligibility requirements.",
        },
        MilestoneTemplate {
            key: "research_programs",
            name: "Research Programs",
            phase: Phase::Freshman,
            guidance: "Survey programs across divisions to understand where the athlete could compete.",
        },
        MilestoneTemplate {
            key: "attend_first_camp",
            name: "Attend a Camp or Showcase",
            phase: Phase::Freshman,
            guidance: "Get measured and evaluated in front of college staff at least once.",
        },
        MilestoneTemplate {
            key: "record_highlight_video",
            name: "Record Highlight Video",
            phase: Phase::Sophomore,
            guidance: "Cut a two to three minute video leading with the strongest clips.",
        },
        MilestoneTemplate {
            key: "build_target_list",
            name: "Build Target School List",
            phase: Phase::Sophomore,
            guidance: "Pick a balanced list of reach, match, and safety programs.",
        },
        MilestoneTemplate {
            key: "take_practice_test",
            name: "Take a Practice Test",
            phase: Phase::Sophomore,
            guidance: "Sit the PSAT or PreACT to set a standardized testing baseline.",
        },
        MilestoneTemplate {
            key: "email_coaches",
            name: "Introduce Yourself to Coaches",
            phase: Phase::Sophomore,
            guidance: "Send introductory emails with profile, video, and schedule to target programs.",
        },
        MilestoneTemplate {
            key: "register_eligibility_center",
            name: "Register with the Eligibility Center",
            phase: Phase::Junior,
            guidance: "Complete eligibility registration and send transcripts.",
        },
        MilestoneTemplate {
            key: "take_standardized_test",
            name: "Take the SAT or ACT",
            phase: Phase::Junior,
            guidance: "Record an official score and send it to target schools.",
        },
        MilestoneTemplate {
            key: "schedule_unofficial_visits",
            name: "Schedule Unofficial Visits",
            phase: Phase::Junior,
            guidance: "Visit top programs and meet staff in person.",
        },
        MilestoneTemplate {
            key: "follow_up_with_coaches",
            name: "Follow Up with Interested Coaches",
            phase: Phase::Junior,
            guidance: "Reply to every coach contact and share updated stats and schedule.",
        },
        MilestoneTemplate {
            key: "take_official_visits",
            name: "Take Official Visits",
            phase: Phase::Senior,
            guidance: "Use official visits on the programs most likely to offer.",
        },
        MilestoneTemplate {
            key: "submit_applications",
            name: "Submit Applications",
            phase: Phase::Senior,
            guidance: "File admissions and financial aid applications before each deadline.",
        },
        MilestoneTemplate {
            key: "review_offers",
            name: "Review Offers",
            phase: Phase::Senior,
            guidance: "Compare scholarship, roster, and academic terms side by side.",
        },
        MilestoneTemplate {
            key: "commit",
            name: "Commit",
            phase: Phase::Senior,
            guidance: "Make a decision and notify every program still in contact.",
        },
    ]
}
