// src/api/votes.rs

//! Voting endpoints for public complaints.

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{VoteRequest, VoteSummary, VoteType};

/// Cast a vote on a complaint.
pub async fn vote(client: &ApiClient, complaint_id: i64, vote_type: VoteType) -> Result<VoteSummary> {
    client
        .post(
            "/votes",
            &VoteRequest {
                complaint_id,
                vote_type,
            },
        )
        .await
}

/// Fetch the current tally for a complaint.
pub async fn tally(client: &ApiClient, complaint_id: i64) -> Result<VoteSummary> {
    client.get(&format!("/votes/complaint/{complaint_id}")).await
}
