pub mod attrition;
pub mod bottlenecks;
pub mod candidates;
pub mod dashboard;
pub mod headcount;
pub mod interviews;
pub mod offers;
pub mod roles;
pub mod ta_owners;
