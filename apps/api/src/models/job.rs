use serde::{Deserialize, Serialize};

/// What a role asks for. List order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub required_years_experience: u32,
    #[serde(default)]
    pub required_education: Vec<String>,
}

impl Default for JobRequirement {
    /// The requirement a fresh recruiting session starts from.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            required_skills: strings(&["JavaScript", "React", "TypeScript"]),
            preferred_skills: strings(&["Node.js", "GraphQL"]),
            required_years_experience: 3,
            required_education: strings(&["Bachelor's in Computer Science"]),
        }
    }
}

impl JobRequirement {
    /// Appends a trimmed item to one of the requirement lists. Blank input is ignored.
    pub fn add_item(&mut self, list: RequirementList, item: &str) -> bool {
        let item = item.trim();
        if item.is_empty() {
            return false;
        }
        self.list_mut(list).push(item.to_string());
        true
    }

    /// Removes every entry equal to `item`. Returns how many were removed.
    pub fn remove_item(&mut self, list: RequirementList, item: &str) -> usize {
        let entries = self.list_mut(list);
        let before = entries.len();
        entries.retain(|e| e != item);
        before - entries.len()
    }

    /// Trims every list entry and drops blanks; used before a requirement is stored.
    pub fn normalized(mut self) -> Self {
        for list in [
            RequirementList::Required,
            RequirementList::Preferred,
            RequirementList::Education,
        ] {
            let entries = self.list_mut(list);
            *entries = entries
                .iter()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect();
        }
        self.title = self.title.trim().to_string();
        self
    }

    fn list_mut(&mut self, list: RequirementList) -> &mut Vec<String> {
        match list {
            RequirementList::Required => &mut self.required_skills,
            RequirementList::Preferred => &mut self.preferred_skills,
            RequirementList::Education => &mut self.required_education,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementList {
    Required,
    Preferred,
    Education,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
