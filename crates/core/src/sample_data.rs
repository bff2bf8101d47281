//! Demo dataset served when the database is unavailable.
//!
//! Ids are fixed (`Uuid::from_u128`) so the demo records are stable across
//! restarts.

use chrono::NaiveDate;

use crate::bottleneck::Bottleneck;
use crate::candidate::{Candidate, Compensation, Experience, PipelineStage};
use crate::interview::{Interview, InterviewStage};
use crate::role::{Role, RoleStatus};
use crate::types::DbId;

fn photo(id: u32) -> Option<String> {
    Some(format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"
    ))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: DbId::from_u128(1),
            name: "Raj Patel".to_string(),
            photo: photo(2379004),
            company: "TechCorp Solutions".to_string(),
            designation: "Senior Software Engineer".to_string(),
            experience: Experience::Years(5),
            notice_period: "2 months".to_string(),
            current_ctc: Compensation::Amount(18.0),
            expected_ctc: Compensation::Amount(25.0),
            role: "App Engineer – East".to_string(),
            stage: PipelineStage::L2Tech,
            notes: "Strong technical background in React and Node.js. Showed excellent problem-solving skills in initial round.".to_string(),
            tags: strings(&["Offer Discussion"]),
            rating: None,
        },
        Candidate {
            id: DbId::from_u128(2),
            name: "Priya Sharma".to_string(),
            photo: photo(1239291),
            company: "DataFlow Inc".to_string(),
            designation: "Product Manager".to_string(),
            experience: Experience::Years(8),
            notice_period: "1 month".to_string(),
            current_ctc: Compensation::Amount(32.0),
            expected_ctc: Compensation::Amount(40.0),
            role: "Sr. PM – AI/ML".to_string(),
            stage: PipelineStage::Final,
            notes: "Excellent AI/ML domain expertise. Previously worked on recommendation systems at scale.".to_string(),
            tags: strings(&["Offer Released"]),
            rating: None,
        },
        Candidate {
            id: DbId::from_u128(3),
            name: "Arjun Mehta".to_string(),
            photo: None,
            company: "StartupXYZ".to_string(),
            designation: "Full Stack Developer".to_string(),
            experience: Experience::Fresher,
            notice_period: "1 month".to_string(),
            current_ctc: Compensation::Confidential,
            expected_ctc: Compensation::Amount(18.0),
            role: "App Engineer – East".to_string(),
            stage: PipelineStage::L1Screen,
            notes: "Young talent with good potential. Needs to improve system design knowledge.".to_string(),
            tags: strings(&["Drop-off Risk"]),
            rating: None,
        },
        Candidate {
            id: DbId::from_u128(4),
            name: "Sneha Gupta".to_string(),
            photo: photo(1181686),
            company: "Corporate Solutions Ltd".to_string(),
            designation: "Executive Assistant".to_string(),
            experience: Experience::Years(6),
            notice_period: "15 days".to_string(),
            current_ctc: Compensation::Amount(8.0),
            expected_ctc: Compensation::Confidential,
            role: "Exec Asst. to CEO".to_string(),
            stage: PipelineStage::Final,
            notes: "Excellent organizational skills and experience supporting C-level executives.".to_string(),
            tags: Vec::new(),
            rating: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn role(
    id: u128,
    title: &str,
    ta_owner: &str,
    status: RoleStatus,
    days_open: i32,
    pipeline_count: i32,
    interviews: i32,
    offer_status: &str,
    is_critical: bool,
    function: &str,
) -> Role {
    Role {
        id: DbId::from_u128(id),
        title: title.to_string(),
        ta_owner: ta_owner.to_string(),
        status,
        days_open,
        pipeline_count,
        interviews,
        offer_status: offer_status.to_string(),
        is_critical,
        function: Some(function.to_string()),
    }
}

pub fn roles() -> Vec<Role> {
    vec![
        role(1, "Sr. PM – AI/ML", "Yogiraj", RoleStatus::Discussions, 42, 3, 2, "1 offer in draft", true, "Product"),
        role(2, "Exec Asst. to CEO", "Shambhavi", RoleStatus::Discussions, 18, 2, 1, "", true, "People Ops"),
        role(3, "Corp Acc. Mgr – West", "Maaz", RoleStatus::Sourcing, 30, 2, 1, "", false, "Business Ops"),
        role(4, "Process Eng – US", "Yogiraj", RoleStatus::GoingSlow, 55, 2, 1, "", true, "Engineering"),
        role(5, "App Engineer – East", "Ishita", RoleStatus::Offer, 0, 0, 0, "Offer Accepted", false, "Engineering"),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn interviews() -> Vec<Interview> {
    vec![
        Interview {
            id: DbId::from_u128(1),
            candidate_name: "Priya Sharma".to_string(),
            stage: InterviewStage::Final,
            date: date(2025, 1, 15),
            panel: strings(&["Yogiraj", "Ravi Kumar"]),
            role_title: "Sr. PM – AI/ML".to_string(),
        },
        Interview {
            id: DbId::from_u128(2),
            candidate_name: "Sneha Gupta".to_string(),
            stage: InterviewStage::Final,
            date: date(2025, 1, 16),
            panel: strings(&["CEO", "Shambhavi"]),
            role_title: "Exec Asst. to CEO".to_string(),
        },
        Interview {
            id: DbId::from_u128(3),
            candidate_name: "Raj Patel".to_string(),
            stage: InterviewStage::L2Tech,
            date: date(2025, 1, 17),
            panel: strings(&["Tech Lead", "Senior Engineer"]),
            role_title: "App Engineer – East".to_string(),
        },
    ]
}

pub fn bottlenecks() -> Vec<Bottleneck> {
    [
        (1, "Feedback delay from hiring managers", "Sr. PM – AI/ML"),
        (2, "Panel unavailable for critical roles", "Exec Asst. to CEO"),
        (3, "Low sourcing for specialized positions", "Process Eng – US"),
    ]
    .into_iter()
    .map(|(id, description, role_title)| Bottleneck {
        id: DbId::from_u128(id),
        description: description.to_string(),
        role_title: role_title.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reference_points_at_a_sample_role() {
        let titles: Vec<String> = roles().into_iter().map(|r| r.title).collect();
        assert!(candidates().iter().all(|c| titles.contains(&c.role)));
        assert!(interviews().iter().all(|i| titles.contains(&i.role_title)));
        assert!(bottlenecks().iter().all(|b| titles.contains(&b.role_title)));
    }

    #[test]
    fn sample_ids_are_unique() {
        let mut ids: Vec<DbId> = candidates().iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn sentinels_present_in_demo_candidates() {
        let arjun = &candidates()[2];
        assert_eq!(arjun.experience, Experience::Fresher);
        assert_eq!(arjun.current_ctc, Compensation::Confidential);
    }
}
