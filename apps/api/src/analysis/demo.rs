//! Generated identities for demo data and for employee resumes submitted
//! without a name.

use crate::analysis::random::{random_index, RandomSource};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Susan", "Richard", "Jessica", "Joseph", "Sarah", "Thomas", "Karen",
    "Charles", "Nancy", "Christopher", "Lisa", "Daniel", "Margaret", "Matthew", "Betty",
    "Anthony", "Sandra", "Mark", "Ashley", "Donald", "Emily", "Steven", "Donna", "Andrew",
    "Michelle", "Paul", "Carol", "Joshua", "Amanda", "Kenneth", "Melissa", "Kevin", "Deborah",
    "Brian", "Stephanie", "George", "Dorothy", "Timothy", "Rebecca", "Ronald", "Sharon", "Jason",
    "Laura",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzales", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts",
];

const CANDIDATE_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "company.com",
];

const EMPLOYEE_NAMES: &[&str] = &[
    "Alex Johnson",
    "Jamie Smith",
    "Taylor Brown",
    "Morgan Lee",
    "Casey Williams",
];

const EMPLOYEE_EMAIL_DOMAINS: &[&str] = &["company.com", "enterprise.org", "corp.net"];

/// Number of applicants created by one "generate test data" run.
pub const DEMO_CANDIDATE_COUNT: usize = 5;

pub fn random_candidate_name(rng: &mut dyn RandomSource) -> String {
    let first = FIRST_NAMES[random_index(rng, FIRST_NAMES.len())];
    let last = LAST_NAMES[random_index(rng, LAST_NAMES.len())];
    format!("{first} {last}")
}

pub fn random_candidate_email(name: &str, rng: &mut dyn RandomSource) -> String {
    email_for(name, CANDIDATE_EMAIL_DOMAINS, rng)
}

pub fn random_employee_name(rng: &mut dyn RandomSource) -> String {
    EMPLOYEE_NAMES[random_index(rng, EMPLOYEE_NAMES.len())].to_string()
}

pub fn random_employee_email(name: &str, rng: &mut dyn RandomSource) -> String {
    email_for(name, EMPLOYEE_EMAIL_DOMAINS, rng)
}

pub fn demo_resume_text(name: &str) -> String {
    format!("Mock resume for {name}")
}

/// `Mary Jane Smith` → `mary.jane.smith@<domain>`.
fn email_for(name: &str, domains: &[&str], rng: &mut dyn RandomSource) -> String {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    let domain = domains[random_index(rng, domains.len())];
    format!("{local}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::random::{FixedSequence, StdRandom};

    #[test]
    fn test_zero_source_picks_first_entries() {
        let mut rng = FixedSequence::zeros();
        let name = random_candidate_name(&mut rng);
        assert_eq!(name, "James Smith");
        assert_eq!(random_candidate_email(&name, &mut rng), "james.smith@gmail.com");
    }

    #[test]
    fn test_employee_identity() {
        let mut rng = FixedSequence::new(vec![0.99]);
        let name = random_employee_name(&mut rng);
        assert_eq!(name, "Casey Williams");
        assert_eq!(random_employee_email(&name, &mut rng), "casey.williams@corp.net");
    }

    #[test]
    fn test_email_collapses_whitespace() {
        let email = random_candidate_email("  Mary   Jane Smith ", &mut FixedSequence::zeros());
        assert_eq!(email, "mary.jane.smith@gmail.com");
    }

    #[test]
    fn test_random_names_have_two_parts() {
        let mut rng = StdRandom::seeded(17);
        for _ in 0..20 {
            assert_eq!(random_candidate_name(&mut rng).split(' ').count(), 2);
        }
    }

    #[test]
    fn test_demo_resume_text() {
        assert_eq!(demo_resume_text("Mary Davis"), "Mock resume for Mary Davis");
    }
}
