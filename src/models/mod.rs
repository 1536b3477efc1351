// src/models/mod.rs

//! Wire data structures exchanged with the SCRS backend.
//!
//! Every record here is a transient transport copy; nothing is owned
//! long-term by the client and each refresh replaces the prior snapshot.

pub mod complaint;
pub mod department;
pub mod page;
pub mod session;
pub mod stats;
pub mod user;

pub use complaint::{
    Comment, Complaint, ComplaintStatus, NewComment, NewComplaint, Priority, StatusHistoryEntry,
    StatusUpdate, VoteRequest, VoteSummary, VoteType,
};
pub use department::{Department, DepartmentRequest};
pub use page::Page;
pub use session::{Credentials, Registration, Role, Session, SessionUser};
pub use stats::{Activity, ComplaintStats, QuickStat, UserTrends};
pub use user::{User, UserRef, UserUpdate};
