use crate::form::Field;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct HelpEntry {
    pub title: &'static str,
    pub definition: &'static str,
    pub use_case: &'static str,
    pub how_to_use: &'static str,
}

pub fn help(field: Field) -> HelpEntry {
    match field {
        Field::Type => HelpEntry {
            title: "Platform Type",
            definition: "Choose the environment where your software will live.",
            use_case: "Web Apps are for broad access (SaaS). Mobile Apps are for GPS/Camera usage.",
            how_to_use: "Select 'Web App' if users reach it from a browser. Select 'Mobile App' if you need an App Store launch.",
        },
        Field::Depth => HelpEntry {
            title: "Analysis Depth",
            definition: "Determines how detailed the generated document will be.",
            use_case: "MVP is for quick testing. Detailed is for developers and investors.",
            how_to_use: "Use 'MVP Only' to strip away non-essentials. Use 'Detailed' when you are ready to start coding.",
        },
        Field::Audience => HelpEntry {
            title: "Target Audience",
            definition: "Who are you building this for?",
            use_case: "Startups need speed and growth features. Enterprise needs security and audit logs.",
            how_to_use: "Select 'Startups' for modern tech stacks. Select 'Enterprise' for stable, scalable architecture.",
        },
        Field::Idea => HelpEntry {
            title: "Vision Input",
            definition: "The raw concept or problem statement you want to solve.",
            use_case: "Turning a one-line thought into a full technical specification.",
            how_to_use: "Be descriptive. Mention the problem, the user, and the goal. Example: 'A drone delivery system for medical supplies'.",
        },
    }
}

/// Contextual help for whichever field currently has focus.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpPanel {
    active: Option<Field>,
}

impl HelpPanel {
    pub fn focus(&mut self, field: Field) {
        self.active = Some(field);
    }

    pub fn active(&self) -> Option<Field> {
        self.active
    }

    pub fn render(&self) -> String {
        let Some(field) = self.active else {
            return "System Ready\nPick a field to see use cases and instructions."
                .to_string();
        };

        let entry = help(field);
        format!(
            "{}\n{}\n\nUse Case\n  {}\n\nHow to Use It\n  {}",
            entry.title, entry.definition, entry.use_case, entry.how_to_use
        )
    }
}
